//! Room geometry tracking.
//!
//! Turns a sequence of measured walls into a room polygon with area,
//! perimeter, extents and loop-closure state.
//!
//! # Overview
//!
//! 1. The sensor layer produces [`SamplePoint`](crate::core::SamplePoint)s
//! 2. Each completed wall measurement is appended with
//!    [`RoomGeometryTracker::add_wall`]
//! 3. After every append, area (shoelace over the floor-plane projection),
//!    perimeter and closure are recomputed from the full wall list
//! 4. When [`RoomGeometryTracker::is_closed`] turns true the room is complete
//!
//! # Module Structure
//!
//! - `config`: Closure thresholds and policies
//! - `wall`: [`WallSegment`]
//! - [`closure`]: Closure rules
//! - `room_tracker`: [`RoomGeometryTracker`]

pub mod closure;
mod config;
mod error;
mod room_tracker;
mod wall;

pub use closure::{ClosureCheck, ClosureReason, MIN_CLOSED_WALLS};
pub use config::{PathLengthClosure, TrackerConfig};
pub use error::TrackerError;
pub use room_tracker::RoomGeometryTracker;
pub use wall::WallSegment;
