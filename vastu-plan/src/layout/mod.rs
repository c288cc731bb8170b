//! Floor-plan auto-layout.
//!
//! Positions independently sized rectangular rooms on a shared canvas.
//!
//! # Algorithm
//!
//! 1. Rooms that already have a position are kept as-is and marked occupied
//! 2. The remaining rooms are sorted by descending area
//! 3. The canvas is split into a grid ([`GridScheme`]); every cell center
//!    is a candidate
//! 4. Each room goes to the candidate with the least summed overlap against
//!    the rooms placed so far (earliest cell wins ties)
//!
//! ```text
//!  ┌──────┬──────┬──────┐
//!  │  ①   │  ②   │  ③   │   cells scanned row-major,
//!  ├──────┼──────┼──────┤   largest room first
//!  │  ④   │  ⑤   │      │
//!  └──────┴──────┴──────┘
//! ```

mod config;
mod engine;

pub use config::{Canvas, GridScheme, LayoutConfig};
pub use engine::{FloorplanLayoutEngine, LayoutRoom};
