//! Wall segment type.

use serde::{Deserialize, Serialize};

use crate::core::{Point2D, Point3D, SamplePoint};
use crate::geometry::segment_length;

/// A straight wall measured between two captured samples.
///
/// Never mutated after creation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WallSegment {
    /// Sample where the wall measurement started.
    pub start: SamplePoint,
    /// Sample where the wall measurement ended.
    pub end: SamplePoint,
    /// Wall surface normal reported with the measurement.
    pub normal: Point3D,
}

impl WallSegment {
    /// Create a new wall segment.
    #[inline]
    pub fn new(start: SamplePoint, end: SamplePoint, normal: Point3D) -> Self {
        Self { start, end, normal }
    }

    /// 3D euclidean length.
    #[inline]
    pub fn length(&self) -> f64 {
        segment_length(self.start.position, self.end.position)
    }

    /// Start point projected onto the floor plane.
    #[inline]
    pub fn start_2d(&self) -> Point2D {
        self.start.position.horizontal()
    }

    /// End point projected onto the floor plane.
    #[inline]
    pub fn end_2d(&self) -> Point2D {
        self.end.position.horizontal()
    }

    /// Zero-length wall (start and end coincide).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.length() == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_and_projection() {
        let wall = WallSegment::new(
            SamplePoint::at(Point3D::new(0.0, 1.0, 0.0)),
            SamplePoint::at(Point3D::new(3.0, 1.0, 4.0)),
            Point3D::new(0.0, 0.0, 1.0),
        );
        assert_eq!(wall.length(), 5.0);
        assert_eq!(wall.start_2d(), Point2D::new(0.0, 0.0));
        assert_eq!(wall.end_2d(), Point2D::new(3.0, 4.0));
        assert!(!wall.is_degenerate());
    }

    #[test]
    fn test_degenerate() {
        let p = SamplePoint::at(Point3D::new(1.0, 1.0, 1.0));
        let wall = WallSegment::new(p, p, Point3D::ZERO);
        assert!(wall.is_degenerate());
    }
}
