//! Core types for the vastu-plan library.
//!
//! - [`Point2D`] and [`Point3D`]: canvas/floor-plane and sensor-frame coordinates
//! - [`Rect`] and [`Size2D`]: axis-aligned extents
//! - [`SamplePoint`]: a spatial sample from the sensor layer

mod bounds;
mod point;
mod sample;

pub use bounds::{Rect, Size2D};
pub use point::{Point2D, Point3D};
pub use sample::SamplePoint;
