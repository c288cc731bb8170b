//! Measurement errors.

use thiserror::Error;

/// Errors reported while capturing walls.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeasurementError {
    /// Start and end were closer than the configured minimum.
    /// The pending start has been discarded.
    #[error("measurement too short: {distance:.3} m")]
    TooShort {
        /// Measured distance (meters).
        distance: f64,
    },

    /// The sensor could not supply a position.
    #[error("sensor position unavailable")]
    MissingPosition,

    /// `complete_capture` was called with no capture in progress.
    #[error("no capture in progress")]
    NotCapturing,

    /// A coordinate was NaN or infinite.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The room capture already has every measurement it needs.
    #[error("room capture already complete")]
    CaptureComplete,

    /// The room capture is still missing measurements.
    #[error("room capture incomplete: {0}")]
    CaptureIncomplete(String),
}
