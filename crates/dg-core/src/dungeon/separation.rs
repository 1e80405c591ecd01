//! Separation steering
//!
//! Pushes scattered rooms apart by translation only. One unsettled room is
//! picked at a time and walked along a single random direction until it no
//! longer overlaps any other room. Once every room has been settled the whole
//! population is checked pairwise; any remaining overlap unsettles everything
//! and the walk starts over. The loop is bounded by a [`SeparationBudget`].

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::config::SeparationBudget;
use crate::error::{GenError, GenResult};
use crate::rng::GenRng;

use super::room::Room;

/// Counters from a successful separation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeparationReport {
    /// Full resets after a failed global check
    pub restarts: u32,
    /// Rooms picked and walked
    pub passes: u64,
    /// Individual nudges applied
    pub steps: u64,
}

/// Random steering direction with components in (-1, 1), never both zero
fn steering_direction(rng: &mut GenRng) -> (f64, f64) {
    loop {
        let dx = rng.unit() * rng.sign();
        let dy = rng.unit() * rng.sign();
        if dx != 0.0 || dy != 0.0 {
            return (dx, dy);
        }
    }
}

/// First pair of rooms that still overlap, if any
pub fn find_overlap(rooms: &[Room]) -> Option<(usize, usize)> {
    for i in 0..rooms.len() {
        for j in (i + 1)..rooms.len() {
            if rooms[i].overlaps(&rooms[j]) {
                return Some((i, j));
            }
        }
    }
    None
}

/// Walk room `idx` along one direction past every room it overlaps.
fn settle_room(
    rooms: &mut [Room],
    idx: usize,
    rng: &mut GenRng,
    report: &mut SeparationReport,
    budget: &SeparationBudget,
) -> GenResult<()> {
    let (dx, dy) = steering_direction(rng);

    for other in 0..rooms.len() {
        if other == idx {
            continue;
        }
        while rooms[idx].overlaps(&rooms[other]) {
            if report.steps >= budget.max_steps {
                return Err(GenError::SeparationFailed {
                    restarts: report.restarts,
                    steps: report.steps,
                });
            }
            rooms[idx].translate(dx, dy);
            report.steps += 1;
        }
    }

    rooms[idx].settled = true;
    Ok(())
}

/// Separate `rooms` so that no two overlap, then snap them to the grid.
///
/// Widths and heights are never changed. On failure the rooms are left in
/// whatever state the last pass produced.
pub fn separate_rooms(
    rooms: &mut [Room],
    budget: &SeparationBudget,
    rng: &mut GenRng,
) -> GenResult<SeparationReport> {
    let mut report = SeparationReport::default();
    let mut unsettled: Vec<usize> = Vec::with_capacity(rooms.len());

    loop {
        loop {
            unsettled.clear();
            unsettled.extend((0..rooms.len()).filter(|&i| !rooms[i].settled));
            let Some(&idx) = rng.choose(&unsettled) else {
                break;
            };
            settle_room(rooms, idx, rng, &mut report, budget)?;
            report.passes += 1;
        }

        match find_overlap(rooms) {
            None => break,
            Some((a, b)) => {
                if report.restarts >= budget.max_restarts {
                    return Err(GenError::SeparationFailed {
                        restarts: report.restarts,
                        steps: report.steps,
                    });
                }
                report.restarts += 1;
                warn!(
                    "rooms {} and {} still overlap, restarting separation ({}/{})",
                    rooms[a].id, rooms[b].id, report.restarts, budget.max_restarts
                );
                for room in rooms.iter_mut() {
                    room.settled = false;
                }
            }
        }
    }

    for room in rooms.iter_mut() {
        room.snap();
    }

    debug!(
        "separated {} rooms: {} passes, {} steps, {} restarts",
        rooms.len(),
        report.passes,
        report.steps,
        report.restarts
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::room::{IdSequence, RoomId};
    use crate::dungeon::scatter::{ScatterParams, scatter_rooms};

    #[test]
    fn test_single_room_settles_immediately() {
        let mut rng = GenRng::new(1);
        let mut rooms = vec![Room::new(RoomId(0), 1.2, -3.7, 9, 9)];
        let report = separate_rooms(&mut rooms, &SeparationBudget::default(), &mut rng).unwrap();
        assert_eq!(report.passes, 1);
        assert_eq!(report.steps, 0);
        assert_eq!(report.restarts, 0);
        assert_eq!((rooms[0].x, rooms[0].y), (1.0, -4.0));
    }

    #[test]
    fn test_empty_population() {
        let mut rng = GenRng::new(1);
        let mut rooms: Vec<Room> = Vec::new();
        let report = separate_rooms(&mut rooms, &SeparationBudget::default(), &mut rng).unwrap();
        assert_eq!(report, SeparationReport::default());
    }

    #[test]
    fn test_identical_rooms_are_pushed_apart() {
        let mut rng = GenRng::new(17);
        let mut rooms = vec![
            Room::new(RoomId(0), 0.0, 0.0, 10, 10),
            Room::new(RoomId(1), 0.0, 0.0, 10, 10),
        ];
        separate_rooms(&mut rooms, &SeparationBudget::default(), &mut rng).unwrap();
        assert!(!rooms[0].footprint_intersects(&rooms[1]));
        assert_eq!((rooms[0].width, rooms[0].height), (10, 10));
        assert_eq!((rooms[1].width, rooms[1].height), (10, 10));
    }

    #[test]
    fn test_scattered_population_is_separated() {
        let mut rng = GenRng::new(2024);
        let mut ids = IdSequence::new();
        let params = ScatterParams {
            count: 40,
            radius: 20.0,
            size_mean: 10.0,
            size_stddev: 1.5,
        };
        let mut rooms = scatter_rooms(&params, &mut ids, &mut rng);
        let sizes: Vec<_> = rooms.iter().map(|r| (r.width, r.height)).collect();

        separate_rooms(&mut rooms, &SeparationBudget::default(), &mut rng).unwrap();

        for i in 0..rooms.len() {
            assert_eq!((rooms[i].width, rooms[i].height), sizes[i]);
            assert_eq!(rooms[i].x.fract(), 0.0);
            assert_eq!(rooms[i].y.fract(), 0.0);
            for j in (i + 1)..rooms.len() {
                assert!(
                    !rooms[i].footprint_intersects(&rooms[j]),
                    "rooms {i} and {j} intersect"
                );
            }
        }
    }

    #[test]
    fn test_step_budget_is_enforced() {
        let mut rng = GenRng::new(3);
        let mut rooms = vec![
            Room::new(RoomId(0), 0.0, 0.0, 50, 50),
            Room::new(RoomId(1), 0.0, 0.0, 50, 50),
        ];
        let budget = SeparationBudget {
            max_restarts: 0,
            max_steps: 3,
        };
        let err = separate_rooms(&mut rooms, &budget, &mut rng).unwrap_err();
        assert!(matches!(err, GenError::SeparationFailed { steps: 3, .. }));
    }

    #[test]
    fn test_find_overlap() {
        let rooms = vec![
            Room::new(RoomId(0), 0.0, 0.0, 2, 2),
            Room::new(RoomId(1), 10.0, 0.0, 2, 2),
            Room::new(RoomId(2), 11.0, 1.0, 2, 2),
        ];
        assert_eq!(find_overlap(&rooms), Some((1, 2)));
        assert_eq!(find_overlap(&rooms[..2]), None);
    }
}
