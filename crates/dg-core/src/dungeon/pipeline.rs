//! End-to-end dungeon generation

use log::info;
use serde::Serialize;

use crate::config::DungeonConfig;
use crate::error::GenResult;
use crate::rng::GenRng;

use super::connectivity::{Edge, link_rooms};
use super::filter::select_main_rooms;
use super::raster::{TileGrid, rasterize};
use super::room::{IdSequence, Room};
use super::scatter::{ScatterParams, scatter_rooms};
use super::separation::{SeparationReport, separate_rooms};

/// Everything one run of the pipeline produces
#[derive(Debug, Clone, Serialize)]
pub struct Dungeon {
    /// Seed of the RNG the run started from
    pub seed: u64,
    /// All scattered rooms after separation
    pub rooms: Vec<Room>,
    /// Rooms above the size threshold, with their links
    pub main_rooms: Vec<Room>,
    pub edges: Vec<Edge>,
    pub separation: SeparationReport,
    #[serde(skip)]
    pub grid: TileGrid,
}

/// Run every stage of the dungeon pipeline
pub fn generate_dungeon(config: &DungeonConfig, rng: &mut GenRng) -> GenResult<Dungeon> {
    config.validate()?;

    let mut ids = IdSequence::new();
    let params = ScatterParams {
        count: config.room_count,
        radius: config.radius,
        size_mean: config.size_mean,
        size_stddev: config.size_stddev,
    };

    let mut rooms = scatter_rooms(&params, &mut ids, rng);
    let separation = separate_rooms(&mut rooms, &config.separation, rng)?;
    let mut main_rooms = select_main_rooms(&rooms, config.main_room_threshold);
    let edges = link_rooms(&mut main_rooms, config.metric, &mut ids)?;
    let grid = rasterize(&main_rooms, &edges, config.grid_width, config.grid_height)?;

    info!(
        "dungeon seed {}: {} rooms, {} main rooms, {} edges",
        rng.seed(),
        rooms.len(),
        main_rooms.len(),
        edges.len()
    );

    Ok(Dungeon {
        seed: rng.seed(),
        rooms,
        main_rooms,
        edges,
        separation,
        grid,
    })
}
