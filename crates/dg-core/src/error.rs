//! Error types for dungeon and maze generation

use std::io;

use thiserror::Error;

use crate::dungeon::RoomId;

/// Errors reported by the generators.
///
/// None of these are fatal to the process; a caller can adjust the
/// configuration and run again.
#[derive(Error, Debug)]
pub enum GenError {
    #[error("invalid configuration: {field} {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("rooms still overlap after {restarts} restarts and {steps} steps")]
    SeparationFailed { restarts: u32, steps: u64 },

    #[error("backtracking stack is full ({capacity} cells)")]
    StackOverflow { capacity: usize },

    #[error("edge list is full ({capacity} edges)")]
    EdgeCapacityExceeded { capacity: usize },

    #[error("edge refers to unknown room {0}")]
    UnknownRoom(RoomId),

    #[error("room {0} lies outside the addressable grid range")]
    CoordinateOverflow(RoomId),

    #[error("could not read configuration: {0}")]
    Io(#[from] io::Error),

    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl GenError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        GenError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

pub type GenResult<T> = Result<T, GenError>;
