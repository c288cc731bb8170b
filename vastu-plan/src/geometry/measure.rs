//! Distances between sample positions.

use crate::core::Point3D;

/// Euclidean length of the segment between two 3D points.
///
/// Returns 0 when either point has a non-finite coordinate, so a bad sample
/// can never poison a perimeter sum.
///
/// # Example
/// ```
/// use vastu_plan::core::Point3D;
/// use vastu_plan::geometry::segment_length;
///
/// let a = Point3D::new(0.0, 0.0, 0.0);
/// let b = Point3D::new(3.0, 0.0, 4.0);
/// assert_eq!(segment_length(a, b), 5.0);
/// assert_eq!(segment_length(a, Point3D::new(f64::NAN, 0.0, 0.0)), 0.0);
/// ```
#[inline]
pub fn segment_length(a: Point3D, b: Point3D) -> f64 {
    if !a.is_finite() || !b.is_finite() {
        return 0.0;
    }
    a.distance(&b)
}

/// Loop-closure gap: the 3D distance between two sample positions.
///
/// Same measure as [`segment_length`], except that non-finite input yields
/// `f64::INFINITY` so a bad sample never reads as "closed".
#[inline]
pub fn closure_distance(a: Point3D, b: Point3D) -> f64 {
    if !a.is_finite() || !b.is_finite() {
        return f64::INFINITY;
    }
    a.distance(&b)
}
