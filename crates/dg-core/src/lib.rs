//! dg-core: procedural dungeon layouts and mazes
//!
//! The dungeon pipeline scatters rooms in a disk, pushes them apart until no
//! two overlap, keeps the large ones, links them into a sparse graph and
//! flattens everything onto a tile grid. The maze carver is independent and
//! produces a spanning-tree maze by depth-first carving.
//!
//! Everything here is pure and deterministic for a given [`GenRng`] seed.
//! Image output lives in `dg-render`.

pub mod config;
pub mod dungeon;
pub mod maze;

mod consts;
mod error;
mod rng;

pub use config::{DungeonConfig, MazeConfig, SeparationBudget};
pub use consts::*;
pub use error::{GenError, GenResult};
pub use rng::{GenRng, NormalSampler};
