//! # Vastu-Plan: Room Measurement and Floor-Plan Layout
//!
//! Turns wall touches captured by a handheld AR/motion sensor into room
//! outlines, room records and an auto-arranged floor plan.
//!
//! ## Features
//!
//! - **Room Tracking**: incremental polygon from wall segments with area,
//!   perimeter and loop-closure detection
//! - **Two-Point Measurement**: start/end touch capture with a minimum-length gate
//! - **Steadiness Detection**: wall-tap impacts and hold-still periods from
//!   accelerometer magnitude
//! - **Floor-Plan Layout**: greedy minimal-overlap placement on a grid
//! - **JSON Interchange**: import/export and file persistence of room lists
//!
//! ## Quick Start
//!
//! ```rust
//! use vastu_plan::core::{Point3D, SamplePoint};
//! use vastu_plan::tracker::RoomGeometryTracker;
//!
//! let mut tracker = RoomGeometryTracker::default();
//! let corners = [(0.0, 0.0), (3.0, 0.0), (3.0, 4.0), (0.0, 4.0), (0.0, 0.0)];
//! for pair in corners.windows(2) {
//!     let start = SamplePoint::at(Point3D::new(pair[0].0, 1.0, pair[0].1));
//!     let end = SamplePoint::at(Point3D::new(pair[1].0, 1.0, pair[1].1));
//!     tracker.add_wall(start, end, Point3D::ZERO).unwrap();
//! }
//! assert!(tracker.is_closed());
//! assert!((tracker.area() - 12.0).abs() < 1e-9);
//! ```
//!
//! ## Coordinate Frames
//!
//! - **Sensor frame**: meters, y-up. Floor geometry uses the horizontal
//!   (x, z) projection.
//! - **Room records**: width and length in centimeters.
//! - **Canvas**: layout units, `LayoutConfig::scale` units per centimeter;
//!   a room position is the center of its rectangle.
//!
//! ## Architecture
//!
//! - [`core`]: Points, rectangles, sensor samples
//! - [`geometry`]: Shoelace area, segment lengths, rectangle overlap
//! - [`tracker`]: Room outline tracking and closure
//! - [`measurement`]: Wall capture session, room capture flow, steadiness
//! - [`room`]: Room record and the room store
//! - [`layout`]: Floor-plan layout engine
//! - [`io`]: Room JSON interchange
//! - [`config`]: YAML configuration
//!
//! ## Data Flow
//!
//! ```text
//!         ┌─────────────────┐
//!         │  Sensor layer   │
//!         │ (SamplePoint)   │
//!         └────────┬────────┘
//!                  │
//!        ┌─────────┴──────────┐
//!        ▼                    ▼
//! ┌──────────────┐    ┌────────────────┐
//! │   Tracker    │    │  Measurement   │
//! │  (polygon)   │    │   (2-point)    │
//! └──────┬───────┘    └───────┬────────┘
//!        │  to_room()         │ RoomCapture
//!        └─────────┬──────────┘
//!                  ▼
//!         ┌─────────────────┐      ┌──────────┐
//!         │   RoomStore     │◄────►│ JSON I/O │
//!         └────────┬────────┘      └──────────┘
//!                  │ assign_missing_positions()
//!                  ▼
//!         ┌─────────────────┐
//!         │ Layout engine   │──► canvas positions
//!         └─────────────────┘
//! ```
//!
//! Everything is single-threaded and synchronous. No type holds interior
//! mutability, so each can be moved to whichever thread owns it.

pub mod config;
pub mod core;
pub mod geometry;
pub mod io;
pub mod layout;
pub mod measurement;
pub mod room;
pub mod tracker;

// Re-export main types at crate root
pub use config::{ConfigLoadError, VastuPlanConfig};
pub use layout::{Canvas, FloorplanLayoutEngine, LayoutConfig};
pub use measurement::{MeasurementError, RoomCapture, WallMeasurementSession};
pub use room::{Room, RoomStore, Rotation, StoreError};
pub use tracker::{RoomGeometryTracker, TrackerConfig, TrackerError};
