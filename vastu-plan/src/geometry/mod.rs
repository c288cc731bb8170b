//! Stateless geometry primitives shared by the tracker and the layout engine.
//!
//! Every function accepts degenerate input (too few vertices, zero-size
//! rectangles) and returns 0 rather than failing. Non-finite coordinates
//! are filtered at this boundary so a single NaN sample cannot poison an
//! area or perimeter accumulator.

mod measure;
mod overlap;
mod polygon;

pub use measure::{closure_distance, segment_length};
pub use overlap::{overlap_with, rect_intersection_area, total_overlap};
pub use polygon::shoelace_area;
