//! Depth-first maze carving
//!
//! The carver keeps the path from the start cell to the current cell on an
//! explicit stack. While the current cell has unvisited neighbors it knocks
//! down a wall and moves on; at a dead end it pops back along the path.

use log::debug;

use crate::config::MazeConfig;
use crate::error::{GenError, GenResult};
use crate::rng::GenRng;

use super::grid::{Direction, Maze};

/// What the carver will do on its next step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarveState {
    /// The current cell has at least one unvisited neighbor
    Exploring,
    /// Dead end; the next step pops the stack
    Backtracking,
    /// Every cell has been visited
    Done,
}

/// Incremental maze carver
#[derive(Debug, Clone)]
pub struct MazeCarver {
    maze: Maze,
    stack: Vec<(usize, usize)>,
    capacity: usize,
    current: (usize, usize),
    visited: usize,
}

impl MazeCarver {
    /// Start at a random cell, marked visited and pushed on the stack
    pub fn new(width: usize, height: usize, rng: &mut GenRng) -> GenResult<Self> {
        MazeConfig::new(width, height).validate()?;

        let start = (rng.index(width), rng.index(height));
        let mut carver = Self {
            maze: Maze::new(width, height),
            stack: Vec::new(),
            capacity: width * height,
            current: start,
            visited: 0,
        };
        carver.visit(start)?;
        Ok(carver)
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn current(&self) -> (usize, usize) {
        self.current
    }

    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    /// Mark `cell` visited and push it. A cell is pushed at most once, so the
    /// stack never outgrows the cell count.
    fn visit(&mut self, cell: (usize, usize)) -> GenResult<()> {
        if self.stack.len() >= self.capacity {
            return Err(GenError::StackOverflow {
                capacity: self.capacity,
            });
        }
        self.maze.tile_mut(cell.0, cell.1).visited = true;
        self.visited += 1;
        self.current = cell;
        self.stack.push(cell);
        Ok(())
    }

    /// Unvisited neighbors of the current cell, by direction slot
    fn open_slots(&self) -> [bool; 4] {
        let (x, y) = self.current;
        Direction::ALL.map(|dir| {
            self.maze
                .neighbor(x, y, dir)
                .is_some_and(|(nx, ny)| !self.maze.tile(nx, ny).visited)
        })
    }

    pub fn state(&self) -> CarveState {
        if self.visited == self.maze.cell_count() {
            CarveState::Done
        } else if self.open_slots().contains(&true) {
            CarveState::Exploring
        } else {
            CarveState::Backtracking
        }
    }

    /// Advance the carver by one transition
    pub fn step(&mut self, rng: &mut GenRng) -> GenResult<CarveState> {
        match self.state() {
            CarveState::Exploring => {
                let slots = self.open_slots();
                let dir = loop {
                    let slot = rng.rn2(4) as usize;
                    if slots[slot] {
                        break Direction::ALL[slot];
                    }
                };
                let (x, y) = self.current;
                if let Some(next) = self.maze.open_wall(x, y, dir) {
                    self.visit(next)?;
                }
            }
            CarveState::Backtracking => {
                self.stack.pop();
                if let Some(&top) = self.stack.last() {
                    self.current = top;
                }
            }
            CarveState::Done => {}
        }
        Ok(self.state())
    }

    /// Carve until every cell is visited
    pub fn run(mut self, rng: &mut GenRng) -> GenResult<Maze> {
        let mut steps = 0u64;
        while self.state() != CarveState::Done && !self.stack.is_empty() {
            self.step(rng)?;
            steps += 1;
        }
        debug!(
            "carved {}x{} maze in {} steps",
            self.maze.width(),
            self.maze.height(),
            steps
        );
        Ok(self.maze)
    }
}

/// Carve a complete maze of the configured size
pub fn carve_maze(config: &MazeConfig, rng: &mut GenRng) -> GenResult<Maze> {
    MazeCarver::new(config.width, config.height, rng)?.run(rng)
}
