//! Configuration for room geometry tracking.

use serde::{Deserialize, Serialize};

/// Secondary closure rule for rooms whose loop-closing wall is short
/// relative to the distance walked.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathLengthClosure {
    /// Whether the rule is evaluated at all.
    /// Default: false
    #[serde(default)]
    pub enabled: bool,

    /// Minimum summed wall length before the rule applies (meters).
    /// Default: 4.0
    #[serde(default = "default_min_path_length")]
    pub min_path_length: f64,

    /// Endpoint gap below which the loop counts as closed (meters).
    /// Default: 0.3
    #[serde(default = "default_connection_threshold")]
    pub connection_threshold: f64,
}

fn default_min_path_length() -> f64 {
    4.0
}

fn default_connection_threshold() -> f64 {
    0.3
}

impl Default for PathLengthClosure {
    fn default() -> Self {
        Self {
            enabled: false,
            min_path_length: 4.0,
            connection_threshold: 0.3,
        }
    }
}

/// Configuration for [`RoomGeometryTracker`](super::RoomGeometryTracker).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Maximum gap between the first wall's start and the last wall's end
    /// for the polygon to count as closed (meters).
    /// Default: 0.5
    #[serde(default = "default_closure_threshold")]
    pub closure_threshold: f64,

    /// Once closed, stay closed until `reset()`.
    ///
    /// Adding a wall after closure then never flips the flag back.
    /// Default: true
    #[serde(default = "default_sticky_closure")]
    pub sticky_closure: bool,

    /// Optional path-length-qualified closure rule.
    #[serde(default)]
    pub path_length_closure: PathLengthClosure,

    /// Conversion from sensor units to room record centimeters.
    /// Default: 100.0 (sensor reports meters)
    #[serde(default = "default_cm_per_unit")]
    pub cm_per_unit: f64,
}

fn default_closure_threshold() -> f64 {
    0.5
}

fn default_sticky_closure() -> bool {
    true
}

fn default_cm_per_unit() -> f64 {
    100.0
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            closure_threshold: 0.5,
            sticky_closure: true,
            path_length_closure: PathLengthClosure::default(),
            cm_per_unit: 100.0,
        }
    }
}

impl TrackerConfig {
    /// Config that re-evaluates closure from scratch on every wall.
    pub fn non_sticky() -> Self {
        Self {
            sticky_closure: false,
            ..Self::default()
        }
    }

    /// Builder-style setter for the closure threshold.
    pub fn with_closure_threshold(mut self, meters: f64) -> Self {
        self.closure_threshold = meters;
        self
    }

    /// Builder-style setter enabling the path-length closure rule.
    pub fn with_path_length_closure(mut self, min_path_length: f64, connection: f64) -> Self {
        self.path_length_closure = PathLengthClosure {
            enabled: true,
            min_path_length,
            connection_threshold: connection,
        };
        self
    }

    /// Check that thresholds are usable.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.closure_threshold.is_finite() && self.closure_threshold > 0.0) {
            return Err(format!(
                "closure_threshold must be positive, got {}",
                self.closure_threshold
            ));
        }
        if !(self.cm_per_unit.is_finite() && self.cm_per_unit > 0.0) {
            return Err(format!(
                "cm_per_unit must be positive, got {}",
                self.cm_per_unit
            ));
        }
        let rule = &self.path_length_closure;
        if rule.enabled
            && !(rule.connection_threshold.is_finite()
                && rule.connection_threshold > 0.0
                && rule.min_path_length.is_finite()
                && rule.min_path_length >= 0.0)
        {
            return Err("path_length_closure thresholds must be finite and positive".to_string());
        }
        Ok(())
    }
}
