//! Rectangle overlap.

use crate::core::Rect;

/// Area of the intersection of two axis-aligned rectangles.
///
/// Never negative: disjoint or merely touching rectangles give 0, as do
/// zero-size or non-finite rectangles.
///
/// # Example
/// ```
/// use vastu_plan::core::{Point2D, Rect};
/// use vastu_plan::geometry::rect_intersection_area;
///
/// let a = Rect::new(Point2D::new(0.0, 0.0), Point2D::new(10.0, 10.0));
/// let b = Rect::new(Point2D::new(5.0, 5.0), Point2D::new(15.0, 15.0));
/// assert_eq!(rect_intersection_area(&a, &b), 25.0);
/// ```
#[inline]
pub fn rect_intersection_area(a: &Rect, b: &Rect) -> f64 {
    if !a.is_finite() || !b.is_finite() {
        return 0.0;
    }

    let overlap_w = a.max.x.min(b.max.x) - a.min.x.max(b.min.x);
    let overlap_h = a.max.y.min(b.max.y) - a.min.y.max(b.min.y);
    if overlap_w <= 0.0 || overlap_h <= 0.0 {
        return 0.0;
    }

    overlap_w * overlap_h
}

/// Summed overlap of `candidate` against every rectangle in `placed`.
#[inline]
pub fn overlap_with(candidate: &Rect, placed: &[Rect]) -> f64 {
    placed
        .iter()
        .map(|r| rect_intersection_area(candidate, r))
        .sum()
}

/// Total pairwise overlap area among a set of rectangles.
///
/// Each unordered pair is counted once.
pub fn total_overlap(rects: &[Rect]) -> f64 {
    let mut total = 0.0;
    for (i, a) in rects.iter().enumerate() {
        for b in &rects[i + 1..] {
            total += rect_intersection_area(a, b);
        }
    }
    total
}
