use dg_core::dungeon::{
    DistanceMetric, IdSequence, Room, RoomId, ScatterParams, TileCode, generate_dungeon,
    link_rooms, rasterize, scatter_rooms, select_main_rooms, separate_rooms,
};
use dg_core::{DungeonConfig, GenError, GenRng, SeparationBudget};
use proptest::prelude::*;

fn small_config(count: usize, metric: DistanceMetric, seed: u64) -> DungeonConfig {
    DungeonConfig {
        room_count: count,
        metric,
        seed: Some(seed),
        ..Default::default()
    }
}

/// Cells a main room or corridor may legitimately touch
fn painted_mask(config: &DungeonConfig, rooms: &[Room], edges: &[dg_core::dungeon::Edge], offset: (i64, i64)) -> Vec<bool> {
    let (w, h) = (config.grid_width as i64, config.grid_height as i64);
    let mut mask = vec![false; (w * h) as usize];
    let mut mark = |x: i64, y: i64| {
        if x >= 0 && y >= 0 && x < w && y < h {
            mask[(y * w + x) as usize] = true;
        }
    };
    let corner = |id: RoomId| {
        let r = rooms.iter().find(|r| r.id == id).unwrap();
        (r.x as i64 + offset.0, r.y as i64 + offset.1)
    };
    for r in rooms {
        let (left, top) = (r.x as i64 + offset.0, r.y as i64 + offset.1);
        for y in top..top + r.height as i64 {
            for x in left..left + r.width as i64 {
                mark(x, y);
            }
        }
    }
    for e in edges {
        let (mut p, mut q) = (corner(e.a), corner(e.b));
        if q < p {
            std::mem::swap(&mut p, &mut q);
        }
        for x in p.0..q.0 {
            mark(x, p.1);
        }
        for y in p.1.min(q.1)..p.1.max(q.1) {
            mark(q.0, y);
        }
    }
    mask
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn pipeline_invariants_hold(seed in any::<u64>(), count in 1usize..40, euclidean in any::<bool>()) {
        let metric = if euclidean { DistanceMetric::Euclidean } else { DistanceMetric::Literal };
        let config = small_config(count, metric, seed);
        let mut rng = GenRng::new(seed);
        let dungeon = generate_dungeon(&config, &mut rng).unwrap();

        // separation
        prop_assert_eq!(dungeon.rooms.len(), count);
        for i in 0..dungeon.rooms.len() {
            for j in (i + 1)..dungeon.rooms.len() {
                prop_assert!(!dungeon.rooms[i].footprint_intersects(&dungeon.rooms[j]));
            }
        }

        // filter: order-preserving subset above the threshold
        let mut cursor = dungeon.rooms.iter();
        for main in &dungeon.main_rooms {
            prop_assert!(main.width > 8 && main.height > 8);
            prop_assert!(cursor.any(|r| r.id == main.id));
        }

        // connectivity
        for room in &dungeon.main_rooms {
            prop_assert!(room.link_count() <= 3);
        }
        for edge in &dungeon.edges {
            prop_assert_ne!(edge.a, edge.b);
            let a = dungeon.main_rooms.iter().find(|r| r.id == edge.a);
            let b = dungeon.main_rooms.iter().find(|r| r.id == edge.b);
            prop_assert!(a.is_some() && b.is_some());
            let (a, b) = (a.unwrap(), b.unwrap());
            let between = |x: &Room, y: &Room| x.neighbors.iter().filter(|n| **n == Some(y.id)).count();
            let edges_ab = dungeon
                .edges
                .iter()
                .filter(|e| (e.a, e.b) == (a.id, b.id) || (e.a, e.b) == (b.id, a.id))
                .count();
            prop_assert_eq!(between(a, b), edges_ab);
            prop_assert_eq!(between(b, a), edges_ab);
        }
        prop_assert!(dungeon.edges.len() <= dungeon.main_rooms.len() * dungeon.main_rooms.len());

        // rasterization
        let offset = dungeon.grid.offset();
        let mask = painted_mask(&config, &dungeon.main_rooms, &dungeon.edges, (offset.dx, offset.dy));
        for (x, y, code) in dungeon.grid.iter() {
            if !mask[y * config.grid_width + x] {
                prop_assert_eq!(code, TileCode::Empty);
            }
        }
        for room in &dungeon.main_rooms {
            let (left, top) = (room.x as i64 + offset.dx, room.y as i64 + offset.dy);
            let right = left + room.width as i64 - 1;
            let bottom = top + room.height as i64 - 1;
            for (cx, cy) in [(left, top), (right, top), (left, bottom), (right, bottom)] {
                if let Some(code) = dungeon.grid.get(cx, cy) {
                    prop_assert_ne!(code, TileCode::Empty);
                }
            }
        }
    }

    #[test]
    fn isolated_room_ring(w in 2u32..30, h in 2u32..30, x in -50.0f64..50.0, y in -50.0f64..50.0) {
        let room = Room::new(RoomId(0), x.floor(), y.floor(), w, h);
        let grid = rasterize(&[room], &[], 40, 40).unwrap();
        let painted = grid.count(TileCode::Border) + grid.count(TileCode::Interior);
        prop_assert_eq!(painted, (w * h) as usize);
        prop_assert_eq!(grid.count(TileCode::Border), (2 * w + 2 * h - 4) as usize);
        prop_assert_eq!(grid.count(TileCode::Overlap), 0);
    }
}

#[test]
fn same_seed_same_dungeon() {
    let config = small_config(30, DistanceMetric::Euclidean, 7);
    let a = generate_dungeon(&config, &mut GenRng::new(7)).unwrap();
    let b = generate_dungeon(&config, &mut GenRng::new(7)).unwrap();
    assert_eq!(a.rooms, b.rooms);
    assert_eq!(a.edges, b.edges);
    assert_eq!(a.grid, b.grid);
}

#[test]
fn single_room_has_no_links() {
    let mut rng = GenRng::new(4);
    let mut ids = IdSequence::new();
    let params = ScatterParams {
        count: 1,
        radius: 20.0,
        size_mean: 12.0,
        size_stddev: 0.0,
    };
    let mut rooms = scatter_rooms(&params, &mut ids, &mut rng);
    let report = separate_rooms(&mut rooms, &SeparationBudget::default(), &mut rng).unwrap();
    assert_eq!(report.steps, 0);
    let mut main = select_main_rooms(&rooms, 8);
    assert_eq!(main.len(), 1);
    let edges = link_rooms(&mut main, DistanceMetric::Literal, &mut ids).unwrap();
    assert!(edges.is_empty());
}

#[test]
fn crowded_disk_exhausts_budget() {
    let config = DungeonConfig {
        room_count: 30,
        radius: 0.0,
        size_mean: 40.0,
        size_stddev: 0.0,
        separation: SeparationBudget {
            max_restarts: 2,
            max_steps: 500,
        },
        ..Default::default()
    };
    let err = generate_dungeon(&config, &mut GenRng::new(1)).unwrap_err();
    assert!(matches!(err, GenError::SeparationFailed { .. }));
}

#[test]
fn scatter_respects_radius() {
    let mut rng = GenRng::new(31);
    let mut ids = IdSequence::new();
    let params = ScatterParams {
        count: 1000,
        radius: 35.0,
        size_mean: 10.0,
        size_stddev: 1.5,
    };
    for room in scatter_rooms(&params, &mut ids, &mut rng) {
        assert!(room.origin_distance() <= 35.0 + 1e-9);
        assert!(room.width >= 1 && room.height >= 1);
    }
}

#[test]
fn huge_radius_is_rejected_before_generation() {
    let config = DungeonConfig {
        room_count: 6,
        radius: 1e300,
        size_stddev: 0.0,
        ..Default::default()
    };
    let err = generate_dungeon(&config, &mut GenRng::new(9)).unwrap_err();
    assert!(matches!(err, GenError::InvalidConfig { field: "radius", .. }));
}

#[test]
fn oversized_grid_is_rejected_before_generation() {
    let config = DungeonConfig {
        grid_width: usize::MAX,
        grid_height: 2,
        ..Default::default()
    };
    let err = generate_dungeon(&config, &mut GenRng::new(9)).unwrap_err();
    assert!(matches!(err, GenError::InvalidConfig { .. }));
}

#[test]
fn widest_allowed_disk_still_rasterizes() {
    let config = DungeonConfig {
        room_count: 6,
        radius: dg_core::MAX_RADIUS,
        size_mean: 12.0,
        size_stddev: 0.0,
        ..Default::default()
    };
    let dungeon = generate_dungeon(&config, &mut GenRng::new(9)).unwrap();
    assert_eq!(dungeon.main_rooms.len(), 6);
    assert_eq!(dungeon.grid.cells().len(), 100 * 100);
}
