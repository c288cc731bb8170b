//! Configuration for wall measurement and steadiness detection.

use serde::{Deserialize, Serialize};

/// Configuration for [`WallMeasurementSession`](super::WallMeasurementSession).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeasurementConfig {
    /// Shortest accepted start-to-end distance (meters).
    ///
    /// Shorter captures are reported as too short and discarded.
    /// Default: 0.10
    #[serde(default = "default_minimum_wall_length")]
    pub minimum_wall_length: f64,
}

fn default_minimum_wall_length() -> f64 {
    0.10
}

impl Default for MeasurementConfig {
    fn default() -> Self {
        Self {
            minimum_wall_length: 0.10,
        }
    }
}

impl MeasurementConfig {
    /// Preset for walking a whole room wall by wall.
    ///
    /// Rejects anything under 30 cm, which filters out accidental double taps.
    pub fn multi_wall() -> Self {
        Self {
            minimum_wall_length: 0.30,
        }
    }

    /// Check that the values are usable.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.minimum_wall_length.is_finite() && self.minimum_wall_length >= 0.0) {
            return Err(format!(
                "minimum_wall_length must be non-negative, got {}",
                self.minimum_wall_length
            ));
        }
        Ok(())
    }
}

/// Configuration for [`SteadinessDetector`](super::SteadinessDetector).
///
/// Thresholds are deviations from 1 g of the accelerometer magnitude.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SteadinessConfig {
    /// Deviation under which the device counts as held still (g).
    /// Default: 0.05
    #[serde(default = "default_accelerometer_threshold")]
    pub accelerometer_threshold: f64,

    /// Deviation above which a sample counts as the device tapping a wall (g).
    /// Default: 0.8
    #[serde(default = "default_impact_threshold")]
    pub impact_threshold: f64,

    /// How long the device must stay still before it counts as steady
    /// (seconds).
    /// Default: 0.5
    #[serde(default = "default_steady_duration")]
    pub steady_duration: f64,
}

fn default_accelerometer_threshold() -> f64 {
    0.05
}

fn default_impact_threshold() -> f64 {
    0.8
}

fn default_steady_duration() -> f64 {
    0.5
}

impl Default for SteadinessConfig {
    fn default() -> Self {
        Self {
            accelerometer_threshold: 0.05,
            impact_threshold: 0.8,
            steady_duration: 0.5,
        }
    }
}

impl SteadinessConfig {
    /// Steady duration in microseconds.
    pub(crate) fn steady_duration_us(&self) -> u64 {
        (self.steady_duration * 1_000_000.0).round() as u64
    }

    /// Check that the values are usable.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.accelerometer_threshold.is_finite() && self.accelerometer_threshold > 0.0) {
            return Err(format!(
                "accelerometer_threshold must be positive, got {}",
                self.accelerometer_threshold
            ));
        }
        if !(self.impact_threshold.is_finite()
            && self.impact_threshold > self.accelerometer_threshold)
        {
            return Err(format!(
                "impact_threshold ({}) must exceed accelerometer_threshold ({})",
                self.impact_threshold, self.accelerometer_threshold
            ));
        }
        if !(self.steady_duration.is_finite() && self.steady_duration >= 0.0) {
            return Err(format!(
                "steady_duration must be non-negative, got {}",
                self.steady_duration
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(MeasurementConfig::default().minimum_wall_length, 0.10);
        assert_eq!(MeasurementConfig::multi_wall().minimum_wall_length, 0.30);
    }

    #[test]
    fn test_steadiness_validate() {
        assert!(SteadinessConfig::default().validate().is_ok());

        let inverted = SteadinessConfig {
            impact_threshold: 0.01,
            ..Default::default()
        };
        assert!(inverted.validate().is_err());

        let negative = SteadinessConfig {
            steady_duration: -1.0,
            ..Default::default()
        };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_steady_duration_us() {
        assert_eq!(SteadinessConfig::default().steady_duration_us(), 500_000);
    }
}
