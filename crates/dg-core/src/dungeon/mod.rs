//! Dungeon layout pipeline
//!
//! Scatter → separate → filter → link → rasterize. Each stage owns its data
//! and hands it to the next by value.

mod connectivity;
mod filter;
mod pipeline;
mod raster;
mod room;
mod scatter;
mod separation;

pub use connectivity::{DistanceMetric, Edge, link_rooms};
pub use filter::{is_main_room, select_main_rooms};
pub use pipeline::{Dungeon, generate_dungeon};
pub use raster::{GridOffset, TileCode, TileGrid, rasterize};
pub use room::{EdgeId, IdSequence, Room, RoomId};
pub use scatter::{ScatterParams, point_in_disk, scatter_rooms};
pub use separation::{SeparationReport, find_overlap, separate_rooms};
