//! dg-render: image output for dungeon tile grids
//!
//! Turns a classified [`TileGrid`] into a flat RGB pixel buffer, one pixel per
//! tile, and writes it out through the `image` crate.

mod palette;
mod pixels;

pub use palette::{Rgb, tile_color};
pub use pixels::{PixelBuffer, RenderError, write_image};

pub use dg_core::dungeon::TileGrid;
