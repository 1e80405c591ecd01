//! Tile grid rasterization
//!
//! Flattens main rooms and their links onto a fixed-size grid of tile codes.
//! All coordinates are shifted by an offset so the lowest room corner lands at
//! the grid origin; anything that still falls outside the grid is clipped.

use std::ops::Index;

use log::debug;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::config::grid_cells;
use crate::error::{GenError, GenResult};

use super::connectivity::Edge;
use super::room::Room;

/// Classification of a single grid cell
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum TileCode {
    #[default]
    Empty = 0,
    Interior = 1,
    Border = 2,
    /// Written by more than one room
    Overlap = 3,
    Corridor = 10,
}

impl TileCode {
    /// Numeric code of this tile
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Whether a room has written this cell
    pub const fn is_room(self) -> bool {
        matches!(self, TileCode::Interior | TileCode::Border | TileCode::Overlap)
    }
}

/// Translation applied to room coordinates before indexing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridOffset {
    pub dx: i64,
    pub dy: i64,
}

impl GridOffset {
    /// Offset that maps the lowest room corner to (0, 0)
    pub fn for_rooms(rooms: &[Room]) -> GenResult<Self> {
        let mut offset: Option<Self> = None;
        for room in rooms {
            let (x, y) = corner(room)?;
            offset = Some(match offset {
                Some(o) => Self {
                    dx: o.dx.max(-x),
                    dy: o.dy.max(-y),
                },
                None => Self { dx: -x, dy: -y },
            });
        }
        Ok(offset.unwrap_or_default())
    }

    /// Translated integer corner of a room
    pub fn apply(&self, room: &Room) -> GenResult<(i64, i64)> {
        let (x, y) = corner(room)?;
        x.checked_add(self.dx)
            .zip(y.checked_add(self.dy))
            .ok_or(GenError::CoordinateOverflow(room.id))
    }
}

/// Integer top-left corner of a room. Both coordinates must be negatable in `i64`.
fn corner(room: &Room) -> GenResult<(i64, i64)> {
    let fits = |v: f64| v.is_finite() && v > i64::MIN as f64 && v < i64::MAX as f64;
    let (x, y) = (room.x.floor(), room.y.floor());
    if fits(x) && fits(y) {
        Ok((x as i64, y as i64))
    } else {
        Err(GenError::CoordinateOverflow(room.id))
    }
}

/// Dense row-major grid of tile codes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGrid {
    width: usize,
    height: usize,
    offset: GridOffset,
    cells: Vec<TileCode>,
}

impl TileGrid {
    /// Create an all-empty grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            offset: GridOffset::default(),
            cells: vec![TileCode::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Offset used when the grid was rasterized
    pub fn offset(&self) -> GridOffset {
        self.offset
    }

    pub fn cells(&self) -> &[TileCode] {
        &self.cells
    }

    /// Cell at (x, y), or None outside the grid
    pub fn get(&self, x: i64, y: i64) -> Option<TileCode> {
        self.linear_index(x, y).map(|i| self.cells[i])
    }

    fn linear_index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Write a cell; out-of-range coordinates are ignored
    fn put(&mut self, x: i64, y: i64, code: TileCode) {
        if let Some(i) = self.linear_index(x, y) {
            self.cells[i] = code;
        }
    }

    /// Iterate (x, y, code) in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, TileCode)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &code)| (i % self.width, i / self.width, code))
    }

    /// Number of cells carrying `code`
    pub fn count(&self, code: TileCode) -> usize {
        self.cells.iter().filter(|&&c| c == code).count()
    }

    /// Paint one room. Cells already written by a room become [`TileCode::Overlap`].
    fn paint_room(&mut self, left: i64, top: i64, width: u32, height: u32) {
        let right = left.saturating_add(width as i64 - 1);
        let bottom = top.saturating_add(height as i64 - 1);
        // only the part of the footprint that lands on the grid
        let (x0, x1) = (left.max(0), right.min(self.width as i64 - 1));
        let (y0, y1) = (top.max(0), bottom.min(self.height as i64 - 1));
        for y in y0..=y1 {
            for x in x0..=x1 {
                let Some(i) = self.linear_index(x, y) else {
                    continue;
                };
                self.cells[i] = if self.cells[i].is_room() {
                    TileCode::Overlap
                } else if x == left || x == right || y == top || y == bottom {
                    TileCode::Border
                } else {
                    TileCode::Interior
                };
            }
        }
    }

    /// Paint an L-shaped corridor between two corners
    fn paint_corridor(&mut self, from: (i64, i64), to: (i64, i64)) {
        let ((x1, y1), (x2, y2)) = if to < from { (to, from) } else { (from, to) };
        let (w, h) = (self.width as i64, self.height as i64);
        for x in x1.max(0)..x2.min(w) {
            self.put(x, y1, TileCode::Corridor);
        }
        for y in y1.min(y2).max(0)..y1.max(y2).min(h) {
            self.put(x2, y, TileCode::Corridor);
        }
    }
}

impl Index<(usize, usize)> for TileGrid {
    type Output = TileCode;
    fn index(&self, (x, y): (usize, usize)) -> &TileCode {
        &self.cells[y * self.width + x]
    }
}

/// Rasterize main rooms and their edges onto a `width × height` grid.
///
/// Rooms are painted first, then corridors on top of them.
pub fn rasterize(
    rooms: &[Room],
    edges: &[Edge],
    width: usize,
    height: usize,
) -> GenResult<TileGrid> {
    grid_cells("grid_width", width, height)?;
    let mut grid = TileGrid::new(width, height);
    grid.offset = GridOffset::for_rooms(rooms)?;

    for room in rooms {
        let (left, top) = grid.offset.apply(room)?;
        grid.paint_room(left, top, room.width, room.height);
    }

    for edge in edges {
        let corner = |id| {
            rooms
                .iter()
                .find(|r| r.id == id)
                .ok_or(GenError::UnknownRoom(id))
                .and_then(|r| grid.offset.apply(r))
        };
        let from = corner(edge.a)?;
        let to = corner(edge.b)?;
        grid.paint_corridor(from, to);
    }

    debug!(
        "rasterized {} rooms and {} edges onto {}x{} (offset {}, {})",
        rooms.len(),
        edges.len(),
        width,
        height,
        grid.offset.dx,
        grid.offset.dy
    );
    Ok(grid)
}
