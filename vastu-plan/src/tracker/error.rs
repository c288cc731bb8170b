//! Tracker errors.

use thiserror::Error;

/// Errors reported by [`RoomGeometryTracker`](super::RoomGeometryTracker).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrackerError {
    /// A wall endpoint or normal had a NaN or infinite coordinate.
    /// The wall was not added.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
