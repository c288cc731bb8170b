//! Room records and the room store.
//!
//! - [`Room`]: persisted room (dimensions in cm, optional canvas position)
//! - [`Rotation`]: quarter-turn orientation
//! - [`RoomStore`]: owned room list with import/export and persistence

mod record;
mod store;

pub use record::{InvalidRotation, Room, RoomId, Rotation};
pub use store::{ImportSummary, RoomStore, StoreError};
