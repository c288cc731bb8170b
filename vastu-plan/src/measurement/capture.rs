//! Room capture flow.
//!
//! Collects accepted [`Measurement`]s until a room can be built from them.

use log::{debug, info};

use super::error::MeasurementError;
use super::session::Measurement;
use crate::room::Room;
use crate::tracker::{RoomGeometryTracker, TrackerConfig};

/// How a room is captured.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CaptureMode {
    /// Two measurements: width, then length.
    #[default]
    Rectangle,
    /// One measurement per wall until the outline closes.
    Polygon,
}

/// Accumulates measurements for one room.
#[derive(Clone, Debug)]
pub struct RoomCapture {
    mode: CaptureMode,
    measurements: Vec<Measurement>,
    tracker: RoomGeometryTracker,
}

impl RoomCapture {
    /// Start an empty capture.
    ///
    /// `tracker_config` drives polygon closure and the sensor-unit to
    /// centimeter conversion for both modes.
    pub fn new(mode: CaptureMode, tracker_config: TrackerConfig) -> Self {
        Self {
            mode,
            measurements: Vec::new(),
            tracker: RoomGeometryTracker::new(tracker_config),
        }
    }

    /// Capture mode.
    pub fn mode(&self) -> CaptureMode {
        self.mode
    }

    /// Accepted measurements in order.
    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    /// Polygon tracker (only fed in [`CaptureMode::Polygon`]).
    pub fn tracker(&self) -> &RoomGeometryTracker {
        &self.tracker
    }

    /// Width measurement (meters), once recorded.
    pub fn width(&self) -> Option<f64> {
        self.measurements.first().map(|m| m.distance)
    }

    /// Length measurement (meters), once recorded.
    pub fn length(&self) -> Option<f64> {
        self.measurements.get(1).map(|m| m.distance)
    }

    /// Enough measurements to build a room.
    pub fn is_complete(&self) -> bool {
        match self.mode {
            CaptureMode::Rectangle => self.measurements.len() >= 2,
            CaptureMode::Polygon => self.tracker.is_closed(),
        }
    }

    /// Add an accepted measurement.
    ///
    /// # Errors
    /// [`MeasurementError::CaptureComplete`] once the capture is complete;
    /// [`MeasurementError::InvalidInput`] if the polygon tracker rejects
    /// the wall.
    pub fn record(&mut self, measurement: Measurement) -> Result<(), MeasurementError> {
        if self.is_complete() {
            return Err(MeasurementError::CaptureComplete);
        }

        if self.mode == CaptureMode::Polygon {
            self.tracker
                .add_wall(measurement.start, measurement.end, measurement.normal)
                .map_err(|e| MeasurementError::InvalidInput(e.to_string()))?;
        }
        self.measurements.push(measurement);

        debug!(
            "Capture {:?}: {} measurements",
            self.mode,
            self.measurements.len()
        );
        if self.is_complete() {
            info!("Room capture complete ({:?})", self.mode);
        }
        Ok(())
    }

    /// Remove the most recent measurement.
    pub fn undo(&mut self) -> Option<Measurement> {
        let removed = self.measurements.pop()?;
        if self.mode == CaptureMode::Polygon {
            self.tracker.undo_last_wall();
        }
        Some(removed)
    }

    /// Build the room record (dimensions in centimeters).
    pub fn into_room(self, name: impl Into<String>) -> Result<Room, MeasurementError> {
        if !self.is_complete() {
            return Err(MeasurementError::CaptureIncomplete(match self.mode {
                CaptureMode::Rectangle => format!(
                    "{} of 2 measurements recorded",
                    self.measurements.len()
                ),
                CaptureMode::Polygon => format!(
                    "outline not closed after {} walls",
                    self.tracker.wall_count()
                ),
            }));
        }

        match self.mode {
            CaptureMode::Rectangle => {
                let cm = self.tracker.config().cm_per_unit;
                let width = self.measurements[0].distance * cm;
                let length = self.measurements[1].distance * cm;
                Ok(Room::new(name, width as f32, length as f32))
            }
            CaptureMode::Polygon => Ok(self.tracker.to_room(name)),
        }
    }
}
