//! Rooms and identities
//!
//! A room is an axis-aligned rectangle with a real-valued top-left corner and
//! integer extent. Rooms carry three neighbor slots filled by the
//! connectivity builder.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::MAX_LINKS;

/// Room identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub u32);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Edge identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(pub u32);

/// Monotonic id source for one generation run.
///
/// Rooms and edges draw from the same sequence, so every id handed out in a
/// run is distinct.
#[derive(Debug, Clone, Default)]
pub struct IdSequence {
    next: u32,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    fn bump(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }

    pub fn next_room(&mut self) -> RoomId {
        RoomId(self.bump())
    }

    pub fn next_edge(&mut self) -> EdgeId {
        EdgeId(self.bump())
    }

    /// Number of ids issued so far
    pub fn issued(&self) -> u32 {
        self.next
    }
}

/// A rectangular room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    pub width: u32,
    pub height: u32,
    /// Set by the separation engine once the room stops overlapping
    #[serde(skip)]
    pub settled: bool,
    /// Linked rooms, filled left to right
    pub neighbors: [Option<RoomId>; MAX_LINKS],
}

impl Room {
    /// Create an unsettled room with no neighbors
    pub fn new(id: RoomId, x: f64, y: f64, width: u32, height: u32) -> Self {
        Self {
            id,
            x,
            y,
            width,
            height,
            settled: false,
            neighbors: [None; MAX_LINKS],
        }
    }

    /// Right edge
    pub fn right(&self) -> f64 {
        self.x + self.width as f64
    }

    /// Bottom edge
    pub fn bottom(&self) -> f64 {
        self.y + self.height as f64
    }

    /// Closed-interval overlap test used while steering.
    ///
    /// Rooms whose edges merely touch still count as overlapping, so a pair
    /// that passes this test has a strictly positive gap on some axis.
    pub fn overlaps(&self, other: &Room) -> bool {
        !(self.x > other.right()
            || other.x > self.right()
            || self.y > other.bottom()
            || other.y > self.bottom())
    }

    /// Whether the tile footprints (half-open rectangles) share any cell area
    pub fn footprint_intersects(&self, other: &Room) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Snap the position onto the integer grid (halves round away from zero)
    pub fn snap(&mut self) {
        self.x = self.x.round();
        self.y = self.y.round();
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// Index of the first empty neighbor slot
    pub fn free_slot(&self) -> Option<usize> {
        self.neighbors.iter().position(Option::is_none)
    }

    pub fn has_free_slot(&self) -> bool {
        self.free_slot().is_some()
    }

    /// Number of populated neighbor slots
    pub fn link_count(&self) -> usize {
        self.neighbors.iter().flatten().count()
    }

    /// Put `other` into the first empty slot. Returns false when all slots are taken.
    pub fn push_neighbor(&mut self, other: RoomId) -> bool {
        match self.free_slot() {
            Some(slot) => {
                self.neighbors[slot] = Some(other);
                true
            }
            None => false,
        }
    }

    pub fn is_linked_to(&self, other: RoomId) -> bool {
        self.neighbors.contains(&Some(other))
    }

    /// Distance of the top-left corner from the origin
    pub fn origin_distance(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(x: f64, y: f64, w: u32, h: u32) -> Room {
        Room::new(RoomId(0), x, y, w, h)
    }

    #[test]
    fn test_id_sequence_is_monotonic() {
        let mut ids = IdSequence::new();
        assert_eq!(ids.next_room(), RoomId(0));
        assert_eq!(ids.next_edge(), EdgeId(1));
        assert_eq!(ids.next_room(), RoomId(2));
        assert_eq!(ids.issued(), 3);
    }

    #[test]
    fn test_touching_rooms_overlap_while_steering() {
        let a = room(0.0, 0.0, 10, 10);
        let b = room(10.0, 0.0, 10, 10);
        assert!(a.overlaps(&b));
        assert!(!a.footprint_intersects(&b));

        let c = room(10.01, 0.0, 10, 10);
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = room(0.0, 0.0, 5, 5);
        let b = room(3.0, 4.0, 5, 5);
        let c = room(20.0, -20.0, 3, 3);
        assert!(a.overlaps(&b) && b.overlaps(&a));
        assert!(!a.overlaps(&c) && !c.overlaps(&a));
    }

    #[test]
    fn test_snap_rounds_half_away_from_zero() {
        let mut r = room(2.5, -2.5, 1, 1);
        r.snap();
        assert_eq!((r.x, r.y), (3.0, -3.0));

        let mut r = room(-0.4, 7.49, 1, 1);
        r.snap();
        assert_eq!((r.x, r.y), (0.0, 7.0));
    }

    #[test]
    fn test_snap_keeps_separated_footprints_apart() {
        let mut a = room(-3.5, 0.0, 4, 4);
        let mut b = room(0.6, 0.0, 4, 4);
        assert!(!a.overlaps(&b));
        a.snap();
        b.snap();
        assert!(!a.footprint_intersects(&b));

        // a negative tie rounds down while its far edge would round up
        let mut a = room(-2.5, 0.0, 3, 3);
        let mut b = room(0.6, 0.0, 3, 3);
        assert!(!a.overlaps(&b));
        a.snap();
        b.snap();
        assert_eq!((a.x, b.x), (-3.0, 1.0));
        assert!(!a.footprint_intersects(&b));
    }

    #[test]
    fn test_neighbor_slots_fill_left_to_right() {
        let mut r = room(0.0, 0.0, 9, 9);
        assert_eq!(r.free_slot(), Some(0));
        assert!(r.push_neighbor(RoomId(4)));
        assert!(r.push_neighbor(RoomId(7)));
        assert_eq!(r.neighbors, [Some(RoomId(4)), Some(RoomId(7)), None]);
        assert!(r.push_neighbor(RoomId(4)));
        assert!(!r.has_free_slot());
        assert!(!r.push_neighbor(RoomId(9)));
        assert_eq!(r.link_count(), 3);
        assert!(r.is_linked_to(RoomId(7)));
    }
}
