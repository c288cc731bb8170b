//! Room list persistence and interchange.
//!
//! ## Saving and Loading
//!
//! ```rust,ignore
//! use vastu_plan::io::{save_rooms, load_rooms};
//! use std::path::Path;
//!
//! save_rooms(store.rooms(), Path::new("rooms.json"))?;
//! let rooms = load_rooms(Path::new("rooms.json"))?;
//! ```
//!
//! Most callers go through [`RoomStore`](crate::room::RoomStore), which
//! adds merge-by-id import and keeps its in-memory list intact when a load
//! fails.

pub mod json;

pub use json::{
    IoError, load_rooms, read_rooms, rooms_from_json, rooms_to_json, save_rooms, write_rooms,
};
