//! Two-point wall measurement.

use log::{debug, info, warn};

use super::config::MeasurementConfig;
use super::error::MeasurementError;
use super::traits::SampleSource;
use crate::core::{Point3D, SamplePoint};
use crate::geometry::segment_length;

/// Capture state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CaptureState {
    /// Waiting for a start point.
    Idle,
    /// Start point recorded, waiting for the end point.
    Capturing {
        /// Pending start sample.
        start: SamplePoint,
    },
}

/// A completed wall measurement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    /// Sample where the capture began.
    pub start: SamplePoint,
    /// Sample where the capture ended.
    pub end: SamplePoint,
    /// Straight-line start-to-end distance (meters).
    pub distance: f64,
    /// Surface normal reported at completion.
    pub normal: Point3D,
}

/// Measures one wall from two touch points.
///
/// ```text
///   Idle ──begin_capture──► Capturing ──complete_capture──► Idle
///                               │                            ▲
///                               └──── too short / cancel ────┘
/// ```
///
/// # Example
///
/// ```
/// use vastu_plan::core::{Point3D, SamplePoint};
/// use vastu_plan::measurement::{MeasurementConfig, WallMeasurementSession};
///
/// let mut session = WallMeasurementSession::new(MeasurementConfig::default());
/// session.begin_capture(SamplePoint::at(Point3D::new(0.0, 1.0, 0.0))).unwrap();
/// let m = session
///     .complete_capture(SamplePoint::at(Point3D::new(3.0, 1.0, 0.0)), Point3D::ZERO)
///     .unwrap();
/// assert_eq!(m.distance, 3.0);
/// ```
#[derive(Clone, Debug)]
pub struct WallMeasurementSession {
    config: MeasurementConfig,
    state: CaptureState,
    /// Measurements accepted since creation
    accepted_count: u64,
    /// Captures discarded as too short
    rejected_count: u64,
}

impl WallMeasurementSession {
    /// Create an idle session.
    pub fn new(config: MeasurementConfig) -> Self {
        Self {
            config,
            state: CaptureState::Idle,
            accepted_count: 0,
            rejected_count: 0,
        }
    }

    /// Session configuration.
    pub fn config(&self) -> &MeasurementConfig {
        &self.config
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> CaptureState {
        self.state
    }

    /// A start point is pending.
    #[inline]
    pub fn is_capturing(&self) -> bool {
        matches!(self.state, CaptureState::Capturing { .. })
    }

    /// Pending start sample, if capturing.
    pub fn pending_start(&self) -> Option<&SamplePoint> {
        match &self.state {
            CaptureState::Capturing { start } => Some(start),
            CaptureState::Idle => None,
        }
    }

    /// (accepted, rejected) measurement counts.
    pub fn stats(&self) -> (u64, u64) {
        (self.accepted_count, self.rejected_count)
    }

    /// Record the start point.
    ///
    /// Calling this while already capturing replaces the pending start.
    pub fn begin_capture(&mut self, start: SamplePoint) -> Result<(), MeasurementError> {
        if !start.position.is_finite() {
            warn!("Rejecting capture start with non-finite position");
            return Err(MeasurementError::InvalidInput(format!(
                "non-finite start: {:?}",
                start.position
            )));
        }
        if self.is_capturing() {
            debug!("Restarting capture from a new start point");
        }
        self.state = CaptureState::Capturing { start };
        Ok(())
    }

    /// Record the start point from the sensor.
    ///
    /// # Errors
    /// [`MeasurementError::MissingPosition`] when the sensor has no position.
    pub fn begin_capture_from<S: SampleSource + ?Sized>(
        &mut self,
        source: &S,
    ) -> Result<(), MeasurementError> {
        let sample = source
            .current_sample()
            .ok_or(MeasurementError::MissingPosition)?;
        self.begin_capture(sample)
    }

    /// Record the end point and produce a measurement.
    ///
    /// Returns to idle on success and on [`MeasurementError::TooShort`].
    /// A non-finite end point is rejected and the pending start is kept so
    /// the user can retry.
    pub fn complete_capture(
        &mut self,
        end: SamplePoint,
        normal: Point3D,
    ) -> Result<Measurement, MeasurementError> {
        let CaptureState::Capturing { start } = self.state else {
            return Err(MeasurementError::NotCapturing);
        };

        if !end.position.is_finite() || !normal.is_finite() {
            warn!("Rejecting capture end with non-finite coordinates");
            return Err(MeasurementError::InvalidInput(format!(
                "non-finite end: position={:?} normal={:?}",
                end.position, normal
            )));
        }

        self.state = CaptureState::Idle;
        let distance = segment_length(start.position, end.position);

        if distance < self.config.minimum_wall_length {
            self.rejected_count += 1;
            info!(
                "Measurement discarded: {:.3} m < minimum {:.3} m",
                distance, self.config.minimum_wall_length
            );
            return Err(MeasurementError::TooShort { distance });
        }

        self.accepted_count += 1;
        debug!("Measurement accepted: {:.3} m", distance);
        Ok(Measurement {
            start,
            end,
            distance,
            normal,
        })
    }

    /// Record the end point from the sensor, using its surface normal.
    pub fn complete_capture_from<S: SampleSource + ?Sized>(
        &mut self,
        source: &S,
    ) -> Result<Measurement, MeasurementError> {
        if !self.is_capturing() {
            return Err(MeasurementError::NotCapturing);
        }
        let sample = source
            .current_sample()
            .ok_or(MeasurementError::MissingPosition)?;
        self.complete_capture(sample, sample.surface_normal)
    }

    /// Drop any pending start.
    pub fn cancel(&mut self) {
        self.state = CaptureState::Idle;
    }
}

impl Default for WallMeasurementSession {
    fn default() -> Self {
        Self::new(MeasurementConfig::default())
    }
}
