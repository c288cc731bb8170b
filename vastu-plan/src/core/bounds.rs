//! Axis-aligned rectangles and sizes.
//!
//! [`Rect`] is used for room footprints on the layout canvas and for the
//! horizontal extent of a scanned polygon.
//!
//! ```rust
//! use vastu_plan::core::{Point2D, Rect};
//!
//! let a = Rect::centered(Point2D::new(0.0, 0.0), 4.0, 2.0);
//! assert_eq!(a.width(), 4.0);
//! assert_eq!(a.height(), 2.0);
//!
//! let mut extent = Rect::empty();
//! extent.expand_to_include(Point2D::new(1.0, 1.0));
//! extent.expand_to_include(Point2D::new(-2.0, 3.0));
//! assert_eq!(extent.width(), 3.0);
//! ```

use serde::{Deserialize, Serialize};

use super::point::Point2D;

/// Width and height pair.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Size2D {
    /// Horizontal extent
    pub width: f64,
    /// Vertical extent
    pub height: f64,
}

impl Size2D {
    /// Create a new size
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Area (width * height)
    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Axis-aligned rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    /// Minimum corner (smallest x and y values).
    pub min: Point2D,
    /// Maximum corner (largest x and y values).
    pub max: Point2D,
}

impl Rect {
    /// Create a rectangle from min and max corners.
    #[inline]
    pub const fn new(min: Point2D, max: Point2D) -> Self {
        Self { min, max }
    }

    /// Rectangle of the given size centered on `center`.
    #[inline]
    pub fn centered(center: Point2D, width: f64, height: f64) -> Self {
        let half_w = width * 0.5;
        let half_h = height * 0.5;
        Self {
            min: Point2D::new(center.x - half_w, center.y - half_h),
            max: Point2D::new(center.x + half_w, center.y + half_h),
        }
    }

    /// Empty (inverted) rectangle that expands to fit any point.
    #[inline]
    pub fn empty() -> Self {
        Self {
            min: Point2D::new(f64::INFINITY, f64::INFINITY),
            max: Point2D::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Check if the rectangle is empty (inverted).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Width (x extent). Zero for an empty rectangle.
    #[inline]
    pub fn width(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.max.x - self.min.x
        }
    }

    /// Height (y extent). Zero for an empty rectangle.
    #[inline]
    pub fn height(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.max.y - self.min.y
        }
    }

    /// Size of the rectangle
    #[inline]
    pub fn size(&self) -> Size2D {
        Size2D::new(self.width(), self.height())
    }

    /// Area of the rectangle
    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Center of the rectangle
    #[inline]
    pub fn center(&self) -> Point2D {
        Point2D::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
        )
    }

    /// All four coordinates are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Check if a point is inside the rectangle (edges inclusive).
    #[inline]
    pub fn contains(&self, point: Point2D) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Intersection of two rectangles. Empty when they don't overlap.
    #[inline]
    pub fn intersection(&self, other: &Rect) -> Rect {
        Rect {
            min: self.min.max(other.min),
            max: self.max.min(other.max),
        }
    }

    /// Expand to include a point.
    #[inline]
    pub fn expand_to_include(&mut self, point: Point2D) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered() {
        let r = Rect::centered(Point2D::new(5.0, 5.0), 4.0, 2.0);
        assert_eq!(r.min, Point2D::new(3.0, 4.0));
        assert_eq!(r.max, Point2D::new(7.0, 6.0));
        assert_eq!(r.center(), Point2D::new(5.0, 5.0));
        assert_eq!(r.area(), 8.0);
    }

    #[test]
    fn test_empty_has_zero_size() {
        let r = Rect::empty();
        assert!(r.is_empty());
        assert_eq!(r.width(), 0.0);
        assert_eq!(r.height(), 0.0);
        assert_eq!(r.area(), 0.0);
    }

    #[test]
    fn test_expand_to_include() {
        let mut r = Rect::empty();
        r.expand_to_include(Point2D::new(5.0, 5.0));
        assert_eq!(r.min, Point2D::new(5.0, 5.0));
        assert_eq!(r.max, Point2D::new(5.0, 5.0));

        r.expand_to_include(Point2D::new(0.0, 10.0));
        assert_eq!(r.min, Point2D::new(0.0, 5.0));
        assert_eq!(r.max, Point2D::new(5.0, 10.0));
    }

    #[test]
    fn test_disjoint_intersection_is_empty() {
        let a = Rect::new(Point2D::new(0.0, 0.0), Point2D::new(1.0, 1.0));
        let b = Rect::new(Point2D::new(2.0, 2.0), Point2D::new(3.0, 3.0));
        assert!(a.intersection(&b).is_empty());
    }

    #[test]
    fn test_contains() {
        let r = Rect::new(Point2D::new(0.0, 0.0), Point2D::new(10.0, 10.0));
        assert!(r.contains(Point2D::new(0.0, 0.0)));
        assert!(r.contains(Point2D::new(5.0, 5.0)));
        assert!(!r.contains(Point2D::new(-1.0, 5.0)));
    }
}
