//! Sensor samples.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::point::Point3D;

/// A single spatial sample produced by the AR/motion sensor layer.
///
/// Captured when the device touches a wall (or on a manual capture).
/// Immutable once produced.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    /// Device position in the sensor world frame (meters, y-up).
    pub position: Point3D,
    /// Estimated surface normal of the touched wall.
    pub surface_normal: Point3D,
    /// Compass heading at capture time (degrees).
    pub heading_degrees: f64,
    /// Capture timestamp.
    pub captured_at: DateTime<Utc>,
}

impl SamplePoint {
    /// Create a sample with every field specified.
    pub fn new(
        position: Point3D,
        surface_normal: Point3D,
        heading_degrees: f64,
        captured_at: DateTime<Utc>,
    ) -> Self {
        Self {
            position,
            surface_normal,
            heading_degrees,
            captured_at,
        }
    }

    /// Sample at `position` captured now, with no normal or heading.
    pub fn at(position: Point3D) -> Self {
        Self::new(position, Point3D::ZERO, 0.0, Utc::now())
    }

    /// Position, normal and heading are all finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite()
            && self.surface_normal.is_finite()
            && self.heading_degrees.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_defaults() {
        let s = SamplePoint::at(Point3D::new(1.0, 0.0, 2.0));
        assert_eq!(s.surface_normal, Point3D::ZERO);
        assert_eq!(s.heading_degrees, 0.0);
        assert!(s.is_finite());
    }

    #[test]
    fn test_nan_heading_is_not_finite() {
        let mut s = SamplePoint::at(Point3D::ZERO);
        s.heading_degrees = f64::NAN;
        assert!(!s.is_finite());
    }
}
