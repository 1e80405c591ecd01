//! Default generation parameters

/// Rooms scattered per dungeon
pub const DEFAULT_ROOM_COUNT: usize = 50;

/// Radius of the placement disk
pub const DEFAULT_RADIUS: f64 = 20.0;

/// Output grid width in tiles
pub const DEFAULT_GRID_WIDTH: usize = 100;

/// Output grid height in tiles
pub const DEFAULT_GRID_HEIGHT: usize = 100;

/// Mean room side length
pub const DEFAULT_SIZE_MEAN: f64 = 10.0;

/// Standard deviation of room side length
pub const DEFAULT_SIZE_STDDEV: f64 = 1.5;

/// Rooms must exceed this on both sides to become main rooms
pub const MAIN_ROOM_THRESHOLD: u32 = 8;

/// Neighbor slots per room
pub const MAX_LINKS: usize = 3;

/// Full restarts the separation engine may perform before giving up
pub const DEFAULT_MAX_RESTARTS: u32 = 64;

/// Total nudges the separation engine may perform before giving up
pub const DEFAULT_MAX_STEPS: u64 = 5_000_000;

/// Default maze width in cells
pub const DEFAULT_MAZE_WIDTH: usize = 20;

/// Default maze height in cells
pub const DEFAULT_MAZE_HEIGHT: usize = 10;

/// Largest placement radius accepted by validation
pub const MAX_RADIUS: f64 = 1.0e9;

/// Largest dungeon grid or maze, in cells
pub const MAX_GRID_CELLS: usize = 1 << 28;
