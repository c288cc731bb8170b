//! Hand steadiness and wall-tap detection from accelerometer magnitude.
//!
//! The sensor layer feeds the magnitude of the accelerometer vector (in g)
//! together with its timestamp. At rest the magnitude sits at 1 g, so both
//! thresholds are expressed as a deviation from 1 g:
//!
//! - **Impact**: deviation above `impact_threshold`, the device tapped a wall
//! - **Steady**: deviation within `accelerometer_threshold` for at least
//!   `steady_duration`, reported once per still period
//!
//! A capture UI typically triggers `begin_capture` on an impact and shows a
//! "hold still" prompt until the steady event arrives.

use log::{debug, trace};

use super::config::SteadinessConfig;

/// Standard gravity in g.
const ONE_G: f64 = 1.0;

/// Event emitted by [`SteadinessDetector::update`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MotionEvent {
    /// Sudden acceleration spike.
    Impact {
        /// Deviation from 1 g that triggered the event.
        deviation: f64,
    },
    /// The device has been held still for the configured duration.
    Steady,
}

/// Classifies accelerometer samples into impact and steady events.
#[derive(Clone, Debug)]
pub struct SteadinessDetector {
    config: SteadinessConfig,
    /// Start of the current still period (microseconds)
    still_since_us: Option<u64>,
    /// `Steady` already emitted for the current still period
    steady_reported: bool,
    impact_count: u64,
}

impl SteadinessDetector {
    /// Create a detector with no history.
    pub fn new(config: SteadinessConfig) -> Self {
        Self {
            config,
            still_since_us: None,
            steady_reported: false,
            impact_count: 0,
        }
    }

    /// Detector configuration.
    pub fn config(&self) -> &SteadinessConfig {
        &self.config
    }

    /// Feed one accelerometer magnitude sample (g) taken at `timestamp_us`.
    ///
    /// Non-finite magnitudes are ignored and do not disturb the current
    /// still period.
    pub fn update(&mut self, magnitude_g: f64, timestamp_us: u64) -> Option<MotionEvent> {
        if !magnitude_g.is_finite() {
            trace!("Ignoring non-finite accelerometer sample");
            return None;
        }

        let deviation = (magnitude_g - ONE_G).abs();

        if deviation > self.config.impact_threshold {
            self.break_still_period();
            self.impact_count += 1;
            debug!("Impact detected: deviation={:.3} g", deviation);
            return Some(MotionEvent::Impact { deviation });
        }

        if deviation > self.config.accelerometer_threshold {
            self.break_still_period();
            return None;
        }

        let since = *self.still_since_us.get_or_insert(timestamp_us);
        if !self.steady_reported
            && timestamp_us.saturating_sub(since) >= self.config.steady_duration_us()
        {
            self.steady_reported = true;
            debug!("Device steady");
            return Some(MotionEvent::Steady);
        }
        None
    }

    /// Currently inside a still period that has lasted long enough.
    pub fn is_steady(&self) -> bool {
        self.steady_reported
    }

    /// Number of impacts seen since creation or the last reset.
    pub fn impact_count(&self) -> u64 {
        self.impact_count
    }

    /// Forget all history.
    pub fn reset(&mut self) {
        self.still_since_us = None;
        self.steady_reported = false;
        self.impact_count = 0;
    }

    fn break_still_period(&mut self) {
        self.still_since_us = None;
        self.steady_reported = false;
    }
}

impl Default for SteadinessDetector {
    fn default() -> Self {
        Self::new(SteadinessConfig::default())
    }
}
