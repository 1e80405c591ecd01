//! Generator configuration
//!
//! Parameters are fixed for a run. They can be built in code, loaded from a
//! JSON file, or assembled by the command line front end.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::dungeon::DistanceMetric;
use crate::error::{GenError, GenResult};

/// Limits on the separation engine's retry loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeparationBudget {
    /// Full resets allowed after a failed global overlap check
    pub max_restarts: u32,
    /// Total nudges allowed across all passes and restarts
    pub max_steps: u64,
}

impl Default for SeparationBudget {
    fn default() -> Self {
        Self {
            max_restarts: DEFAULT_MAX_RESTARTS,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

/// Dungeon pipeline parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonConfig {
    pub room_count: usize,
    pub radius: f64,
    pub grid_width: usize,
    pub grid_height: usize,
    pub size_mean: f64,
    pub size_stddev: f64,
    pub main_room_threshold: u32,
    pub metric: DistanceMetric,
    pub separation: SeparationBudget,
    pub seed: Option<u64>,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            room_count: DEFAULT_ROOM_COUNT,
            radius: DEFAULT_RADIUS,
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            size_mean: DEFAULT_SIZE_MEAN,
            size_stddev: DEFAULT_SIZE_STDDEV,
            main_room_threshold: MAIN_ROOM_THRESHOLD,
            metric: DistanceMetric::default(),
            separation: SeparationBudget::default(),
            seed: None,
        }
    }
}

impl DungeonConfig {
    /// Load a configuration from a JSON file. Missing keys keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> GenResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> GenResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reject parameters no run could use
    pub fn validate(&self) -> GenResult<()> {
        if self.grid_width == 0 {
            return Err(GenError::invalid("grid_width", "must be positive"));
        }
        if self.grid_height == 0 {
            return Err(GenError::invalid("grid_height", "must be positive"));
        }
        grid_cells("grid_width", self.grid_width, self.grid_height)?;
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(GenError::invalid(
                "radius",
                format!("must be finite and non-negative, got {}", self.radius),
            ));
        }
        if self.radius > MAX_RADIUS {
            return Err(GenError::invalid(
                "radius",
                format!("must not exceed {MAX_RADIUS}, got {}", self.radius),
            ));
        }
        if !self.size_mean.is_finite() || self.size_mean < 0.0 {
            return Err(GenError::invalid(
                "size_mean",
                format!("must be finite and non-negative, got {}", self.size_mean),
            ));
        }
        if !self.size_stddev.is_finite() || self.size_stddev < 0.0 {
            return Err(GenError::invalid(
                "size_stddev",
                format!("must be finite and non-negative, got {}", self.size_stddev),
            ));
        }
        if self.separation.max_steps == 0 {
            return Err(GenError::invalid("separation.max_steps", "must be positive"));
        }
        Ok(())
    }
}

/// Maze parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    pub width: usize,
    pub height: usize,
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_MAZE_WIDTH,
            height: DEFAULT_MAZE_HEIGHT,
            seed: None,
        }
    }
}

impl MazeConfig {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            seed: None,
        }
    }

    pub fn validate(&self) -> GenResult<()> {
        if self.width == 0 {
            return Err(GenError::invalid("width", "must be positive"));
        }
        if self.height == 0 {
            return Err(GenError::invalid("height", "must be positive"));
        }
        grid_cells("width", self.width, self.height)?;
        Ok(())
    }
}

/// Cell count of a `width × height` grid, rejected past [`MAX_GRID_CELLS`]
pub(crate) fn grid_cells(field: &'static str, width: usize, height: usize) -> GenResult<usize> {
    width
        .checked_mul(height)
        .filter(|&cells| cells <= MAX_GRID_CELLS)
        .ok_or_else(|| {
            GenError::invalid(
                field,
                format!("{width}x{height} exceeds {MAX_GRID_CELLS} cells"),
            )
        })
}
