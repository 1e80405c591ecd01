//! Maze generation
//!
//! Randomized depth-first carving over a rectangular grid with an explicit
//! backtracking stack, plus a plain-text renderer.

mod carve;
mod grid;
mod render;

pub use carve::{CarveState, MazeCarver, carve_maze};
pub use grid::{Direction, Maze, MazeTile, Walls};
pub use render::{render_maze, render_visited};
