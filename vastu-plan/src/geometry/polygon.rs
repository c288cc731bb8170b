//! Polygon area.

use crate::core::Point2D;

/// Polygon area by the shoelace (Gauss) formula.
///
/// Vertices are treated as a closed ring; the closing edge from the last
/// vertex back to the first is implied. The sign is normalized, so winding
/// direction does not matter.
///
/// Non-finite vertices are skipped. Fewer than 3 usable vertices yields 0.
///
/// # Example
/// ```
/// use vastu_plan::core::Point2D;
/// use vastu_plan::geometry::shoelace_area;
///
/// let square = [
///     Point2D::new(0.0, 0.0),
///     Point2D::new(1.0, 0.0),
///     Point2D::new(1.0, 1.0),
///     Point2D::new(0.0, 1.0),
/// ];
/// assert_eq!(shoelace_area(&square), 1.0);
/// ```
pub fn shoelace_area(vertices: &[Point2D]) -> f64 {
    let mut ring = vertices.iter().filter(|p| p.is_finite());

    let Some(first) = ring.next().copied() else {
        return 0.0;
    };

    let mut count = 1usize;
    let mut sum = 0.0;
    let mut prev = first;
    for &p in ring {
        sum += prev.cross(&p);
        prev = p;
        count += 1;
    }

    if count < 3 {
        return 0.0;
    }

    // Closing edge
    sum += prev.cross(&first);

    sum.abs() * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_square() -> Vec<Point2D> {
        vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 0.0),
            Point2D::new(1.0, 1.0),
            Point2D::new(0.0, 1.0),
        ]
    }

    #[test]
    fn test_unit_square_either_winding() {
        let ccw = unit_square();
        let mut cw = ccw.clone();
        cw.reverse();

        assert_relative_eq!(shoelace_area(&ccw), 1.0);
        assert_relative_eq!(shoelace_area(&cw), 1.0);
    }

    #[test]
    fn test_fewer_than_three_vertices() {
        assert_eq!(shoelace_area(&[]), 0.0);
        assert_eq!(shoelace_area(&[Point2D::new(1.0, 1.0)]), 0.0);
        assert_eq!(
            shoelace_area(&[Point2D::new(0.0, 0.0), Point2D::new(3.0, 4.0)]),
            0.0
        );
    }

    #[test]
    fn test_duplicate_closing_vertex() {
        // Explicitly closed ring (first vertex repeated) gives the same area
        let mut ring = unit_square();
        ring.push(Point2D::new(0.0, 0.0));
        assert_relative_eq!(shoelace_area(&ring), 1.0);
    }

    #[test]
    fn test_nan_vertex_skipped() {
        let mut ring = unit_square();
        ring.insert(2, Point2D::new(f64::NAN, 0.5));
        let area = shoelace_area(&ring);
        assert!(area.is_finite());
        assert_relative_eq!(area, 1.0);
    }

    #[test]
    fn test_nan_leaves_too_few_vertices() {
        let ring = [
            Point2D::new(0.0, 0.0),
            Point2D::new(f64::INFINITY, 0.0),
            Point2D::new(1.0, 1.0),
        ];
        assert_eq!(shoelace_area(&ring), 0.0);
    }

    #[test]
    fn test_rectangle_3_by_4() {
        let rect = [
            Point2D::new(0.0, 0.0),
            Point2D::new(3.0, 0.0),
            Point2D::new(3.0, 4.0),
            Point2D::new(0.0, 4.0),
        ];
        assert_relative_eq!(shoelace_area(&rect), 12.0);
    }
}
