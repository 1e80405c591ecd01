//! Maze cells and walls

use bitflags::bitflags;
use strum::{Display, EnumIter};

bitflags! {
    /// Open sides of a maze cell. A set bit means there is no wall.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Walls: u8 {
        const NORTH = 0x01;
        const EAST = 0x02;
        const SOUTH = 0x04;
        const WEST = 0x08;
    }
}

/// Orthogonal step between cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Direction {
    East,
    West,
    South,
    North,
}

impl Direction {
    /// Candidate slots, in the order the carver samples them
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::West,
        Direction::South,
        Direction::North,
    ];

    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::South => (0, 1),
            Direction::North => (0, -1),
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::South => Direction::North,
            Direction::North => Direction::South,
        }
    }

    /// Wall flag on the side of a cell facing this direction
    pub const fn wall(self) -> Walls {
        match self {
            Direction::East => Walls::EAST,
            Direction::West => Walls::WEST,
            Direction::South => Walls::SOUTH,
            Direction::North => Walls::NORTH,
        }
    }
}

/// One maze cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MazeTile {
    pub open: Walls,
    pub visited: bool,
}

impl MazeTile {
    pub fn is_open(&self, dir: Direction) -> bool {
        self.open.contains(dir.wall())
    }
}

/// Row-major grid of maze cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    width: usize,
    height: usize,
    tiles: Vec<MazeTile>,
}

impl Maze {
    /// A fully walled, unvisited grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![MazeTile::default(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn tile(&self, x: usize, y: usize) -> &MazeTile {
        &self.tiles[y * self.width + x]
    }

    pub(crate) fn tile_mut(&mut self, x: usize, y: usize) -> &mut MazeTile {
        &mut self.tiles[y * self.width + x]
    }

    /// Cell one step away in `dir`, if it is inside the grid
    pub fn neighbor(&self, x: usize, y: usize, dir: Direction) -> Option<(usize, usize)> {
        let (dx, dy) = dir.delta();
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        (nx < self.width && ny < self.height).then_some((nx, ny))
    }

    /// Remove the wall between (x, y) and its neighbor in `dir`, on both sides
    pub(crate) fn open_wall(&mut self, x: usize, y: usize, dir: Direction) -> Option<(usize, usize)> {
        let (nx, ny) = self.neighbor(x, y, dir)?;
        self.tile_mut(x, y).open.insert(dir.wall());
        self.tile_mut(nx, ny).open.insert(dir.opposite().wall());
        Some((nx, ny))
    }

    pub fn all_visited(&self) -> bool {
        self.tiles.iter().all(|t| t.visited)
    }

    /// Number of open passages between adjacent cells
    pub fn passage_count(&self) -> usize {
        self.tiles
            .iter()
            .map(|t| (t.open & (Walls::EAST | Walls::SOUTH)).bits().count_ones() as usize)
            .sum()
    }

    /// Cells reachable from (x, y) through open walls
    pub fn reachable_from(&self, x: usize, y: usize) -> usize {
        let mut seen = vec![false; self.tiles.len()];
        let mut pending = vec![(x, y)];
        seen[y * self.width + x] = true;
        let mut count = 0;

        while let Some((cx, cy)) = pending.pop() {
            count += 1;
            for dir in Direction::ALL {
                if !self.tile(cx, cy).is_open(dir) {
                    continue;
                }
                if let Some((nx, ny)) = self.neighbor(cx, cy, dir)
                    && !seen[ny * self.width + nx]
                {
                    seen[ny * self.width + nx] = true;
                    pending.push((nx, ny));
                }
            }
        }
        count
    }
}
