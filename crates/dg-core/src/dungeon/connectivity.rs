//! Room linking
//!
//! Greedy nearest-neighbor linking over the main rooms. Each room has three
//! neighbor slots; a room looks for the closest room that still has a free
//! slot, links to it, and may look for a second partner while its own third
//! slot is open.

use log::debug;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::{GenError, GenResult};

use super::room::{EdgeId, IdSequence, Room, RoomId};

/// Distance function used when looking for the nearest free room.
///
/// `Literal` multiplies the squared deltas instead of adding them, which is
/// zero whenever two rooms share a row or column. It is kept selectable so
/// layouts built with it can be reproduced; `Euclidean` is the true distance.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DistanceMetric {
    /// sqrt(dx² · dy²)
    #[default]
    Literal,
    /// sqrt(dx² + dy²)
    Euclidean,
}

impl DistanceMetric {
    /// Distance between the top-left corners of two rooms
    pub fn distance(self, a: &Room, b: &Room) -> f64 {
        let dx2 = (a.x - b.x).powi(2);
        let dy2 = (a.y - b.y).powi(2);
        match self {
            DistanceMetric::Literal => (dx2 * dy2).sqrt(),
            DistanceMetric::Euclidean => (dx2 + dy2).sqrt(),
        }
    }

    /// Whether the second link of a room requires a non-positive first distance
    pub fn gates_second_link(self) -> bool {
        matches!(self, DistanceMetric::Literal)
    }
}

/// A link between two main rooms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub a: RoomId,
    pub b: RoomId,
    /// Metric value at the time the link was made
    pub distance: f64,
}

/// Nearest room with a free slot, skipping `from` and `exclude`.
///
/// Ties go to the lowest index.
fn nearest_free(
    rooms: &[Room],
    from: usize,
    exclude: Option<usize>,
    metric: DistanceMetric,
) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (j, candidate) in rooms.iter().enumerate() {
        if j == from || Some(j) == exclude || !candidate.has_free_slot() {
            continue;
        }
        let d = metric.distance(&rooms[from], candidate);
        if best.is_none_or(|(_, best_d)| d < best_d) {
            best = Some((j, d));
        }
    }
    best
}

/// Edge list capped at n² entries. Each room links at most three times, so
/// `link_rooms` stays below the cap; the check guards the invariant.
struct EdgeSink<'a> {
    edges: Vec<Edge>,
    capacity: usize,
    ids: &'a mut IdSequence,
}

impl EdgeSink<'_> {
    /// Record a link between rooms `i` and `j` on both sides
    fn link(&mut self, rooms: &mut [Room], i: usize, j: usize, distance: f64) -> GenResult<()> {
        if self.edges.len() >= self.capacity {
            return Err(GenError::EdgeCapacityExceeded {
                capacity: self.capacity,
            });
        }
        let (a, b) = (rooms[i].id, rooms[j].id);
        rooms[i].push_neighbor(b);
        rooms[j].push_neighbor(a);
        self.edges.push(Edge {
            id: self.ids.next_edge(),
            a,
            b,
            distance,
        });
        Ok(())
    }
}

/// Link main rooms into a sparse graph, filling their neighbor slots.
///
/// Every room ends with at most three populated slots and each edge `(a, b)`
/// occupies one slot on each side. The same pair may be linked more than once
/// when both rooms pick each other on their own turns.
pub fn link_rooms(
    rooms: &mut [Room],
    metric: DistanceMetric,
    ids: &mut IdSequence,
) -> GenResult<Vec<Edge>> {
    let mut sink = EdgeSink {
        edges: Vec::new(),
        capacity: rooms.len() * rooms.len(),
        ids,
    };

    for i in 0..rooms.len() {
        if !rooms[i].has_free_slot() {
            continue;
        }

        let Some((first, d1)) = nearest_free(rooms, i, None, metric) else {
            continue;
        };
        sink.link(rooms, i, first, d1)?;

        if rooms[i].neighbors[2].is_some() {
            continue;
        }
        if metric.gates_second_link() && d1 > 0.0 {
            continue;
        }
        if let Some((second, d2)) = nearest_free(rooms, i, Some(first), metric) {
            sink.link(rooms, i, second, d2)?;
        }
    }

    debug!(
        "linked {} main rooms with {} edges ({} metric)",
        rooms.len(),
        sink.edges.len(),
        metric
    );
    Ok(sink.edges)
}
