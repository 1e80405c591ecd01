//! Pixel buffers and file output

use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};
use log::info;
use thiserror::Error;

use dg_core::dungeon::TileGrid;

use crate::palette::tile_color;

/// Errors while building or writing an image
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("grid of {width}x{height} tiles is too large for an image")]
    TooLarge { width: usize, height: usize },

    #[error("could not write image: {0}")]
    Image(#[from] image::ImageError),
}

/// Row-major RGB pixels, three bytes per pixel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// One pixel per tile, colored by [`tile_color`]
    pub fn from_grid(grid: &TileGrid) -> Result<Self, RenderError> {
        let too_large = || RenderError::TooLarge {
            width: grid.width(),
            height: grid.height(),
        };
        let width = u32::try_from(grid.width()).map_err(|_| too_large())?;
        let height = u32::try_from(grid.height()).map_err(|_| too_large())?;

        let data = grid
            .cells()
            .iter()
            .flat_map(|&code| tile_color(code))
            .collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Color at (x, y)
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.rgb(x, y))
    }

    fn rgb(&self, x: u32, y: u32) -> [u8; 3] {
        let i = (y as usize * self.width as usize + x as usize) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Convert into an `image` buffer
    pub fn to_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| Rgb(self.rgb(x, y)))
    }

    /// Write to `path`. The format follows the extension; BMP when unknown.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let path = path.as_ref();
        let format = match ImageFormat::from_path(path) {
            Ok(ImageFormat::Png) => ImageFormat::Png,
            _ => ImageFormat::Bmp,
        };
        self.to_image().save_with_format(path, format)?;
        Ok(())
    }
}

/// Color a tile grid and write it to `path`
pub fn write_image(grid: &TileGrid, path: impl AsRef<Path>) -> Result<(), RenderError> {
    let path = path.as_ref();
    PixelBuffer::from_grid(grid)?.save(path)?;
    info!(
        "wrote {}x{} image to {}",
        grid.width(),
        grid.height(),
        path.display()
    );
    Ok(())
}
