//! In-memory room store.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use thiserror::Error;

use super::record::{Room, RoomId, Rotation};
use crate::config::PersistenceSection;
use crate::core::Point2D;
use crate::io::{self, IoError};
use crate::layout::{Canvas, FloorplanLayoutEngine, LayoutRoom};

/// Errors from [`RoomStore`] operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// No room with this id.
    #[error("room not found: {0}")]
    NotFound(RoomId),
    /// A room with this id is already stored.
    #[error("duplicate room id: {0}")]
    DuplicateId(RoomId),
    /// Rejected dimensions, position or other field value.
    #[error("invalid room: {0}")]
    InvalidRecord(String),
    /// Import, export or file persistence failed.
    #[error(transparent)]
    Io(#[from] IoError),
}

/// Result of merging an imported room list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Records appended (new ids).
    pub added: usize,
    /// Records ignored because their id was already present.
    pub skipped: usize,
}

/// Owned list of rooms, the source of truth for the floor plan.
///
/// Every mutation bumps [`revision`](Self::revision), which observers can
/// poll to know when to refresh.
///
/// A store opened with autosave enabled (see [`open_with`](Self::open_with))
/// writes the full room list after every successful mutation. If that write
/// fails the in-memory change is kept and the save error is returned.
#[derive(Clone, Debug, Default)]
pub struct RoomStore {
    rooms: Vec<Room>,
    revision: u64,
    /// Target file for autosave, if enabled
    autosave_path: Option<PathBuf>,
}

impl RoomStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `rooms` (validated, duplicate ids dropped).
    pub fn from_rooms(rooms: Vec<Room>) -> Result<Self, StoreError> {
        let mut store = Self::new();
        store.merge(rooms)?;
        store.revision = 0;
        Ok(store)
    }

    /// Open a store persisted at `path`.
    ///
    /// A missing file means first run and yields an empty store. Any other
    /// failure is returned.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            info!("No room file at {:?}; starting empty", path);
            return Ok(Self::new());
        }
        let rooms = io::load_rooms(path)?;
        Self::from_rooms(rooms)
    }

    /// Open the room file named by the persistence settings.
    ///
    /// With `autosave` on, every later mutation is written back to that file.
    pub fn open_with(persistence: &PersistenceSection) -> Result<Self, StoreError> {
        let path = persistence.rooms_path();
        let mut store = Self::open(&path)?;
        if persistence.autosave {
            debug!("Autosaving rooms to {:?}", path);
            store.autosave_path = Some(path);
        }
        Ok(store)
    }

    /// File written after every mutation, if autosave is enabled.
    pub fn autosave_path(&self) -> Option<&Path> {
        self.autosave_path.as_deref()
    }

    /// Replace the in-memory rooms with the contents of `path`.
    ///
    /// On failure the current rooms are left untouched.
    pub fn reload(&mut self, path: &Path) -> Result<(), StoreError> {
        let loaded = Self::from_rooms(io::load_rooms(path)?)?;
        self.rooms = loaded.rooms;
        self.revision += 1;
        Ok(())
    }

    /// Persist every room to `path` as JSON.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        io::save_rooms(&self.rooms, path)?;
        Ok(())
    }

    /// Change counter, incremented on every mutation.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// All rooms in insertion order.
    #[inline]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Number of rooms.
    #[inline]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// No rooms stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Look up a room.
    pub fn get(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// Total floor area of every room (m²).
    pub fn total_area_m2(&self) -> f32 {
        self.rooms.iter().map(Room::area_m2).sum()
    }

    /// Add a room.
    pub fn add(&mut self, room: Room) -> Result<RoomId, StoreError> {
        room.validate().map_err(StoreError::InvalidRecord)?;
        if self.get(room.id).is_some() {
            return Err(StoreError::DuplicateId(room.id));
        }
        let id = room.id;
        debug!("Adding room {} ({})", room.name, id);
        self.rooms.push(room);
        self.touch()?;
        Ok(id)
    }

    /// Delete a room.
    pub fn remove(&mut self, id: RoomId) -> Result<Room, StoreError> {
        let index = self.index_of(id)?;
        let room = self.rooms.remove(index);
        self.touch()?;
        Ok(room)
    }

    /// Rename a room.
    pub fn rename(&mut self, id: RoomId, name: impl Into<String>) -> Result<(), StoreError> {
        let index = self.index_of(id)?;
        self.rooms[index].name = name.into();
        self.touch()?;
        Ok(())
    }

    /// Move a room (drag). The position becomes sticky.
    pub fn set_position(&mut self, id: RoomId, position: Point2D) -> Result<(), StoreError> {
        if !position.is_finite() {
            return Err(StoreError::InvalidRecord(format!(
                "non-finite position for room {}",
                id
            )));
        }
        let index = self.index_of(id)?;
        self.rooms[index].position = Some(position);
        self.touch()?;
        Ok(())
    }

    /// Rotate a room a quarter turn clockwise. Returns the new rotation.
    pub fn rotate(&mut self, id: RoomId) -> Result<Rotation, StoreError> {
        let index = self.index_of(id)?;
        let rotation = self.rooms[index].rotation.next();
        self.rooms[index].rotation = rotation;
        self.touch()?;
        Ok(rotation)
    }

    /// Set a room's rotation.
    pub fn set_rotation(&mut self, id: RoomId, rotation: Rotation) -> Result<(), StoreError> {
        let index = self.index_of(id)?;
        self.rooms[index].rotation = rotation;
        self.touch()?;
        Ok(())
    }

    /// Replace a room's dimensions after re-measuring (cm).
    ///
    /// The position is kept.
    pub fn remeasure(&mut self, id: RoomId, width: f32, length: f32) -> Result<(), StoreError> {
        let index = self.index_of(id)?;
        let mut updated = self.rooms[index].clone();
        updated.width = width;
        updated.length = length;
        updated.validate().map_err(StoreError::InvalidRecord)?;
        self.rooms[index] = updated;
        self.touch()?;
        Ok(())
    }

    /// Merge rooms from a JSON array.
    ///
    /// New ids are appended in order; ids already present are ignored, not
    /// overwritten. A parse or validation failure leaves the store
    /// unchanged.
    pub fn import_json(&mut self, json: &str) -> Result<ImportSummary, StoreError> {
        let rooms = match io::rooms_from_json(json) {
            Ok(rooms) => rooms,
            Err(e) => {
                warn!("Room import rejected: {}", e);
                return Err(e.into());
            }
        };
        let summary = self.merge(rooms)?;
        info!(
            "Imported rooms: {} added, {} skipped",
            summary.added, summary.skipped
        );
        Ok(summary)
    }

    /// Export every room as a pretty-printed JSON array.
    pub fn export_json(&self) -> Result<String, StoreError> {
        Ok(io::rooms_to_json(&self.rooms)?)
    }

    /// Place every room that lacks a position.
    ///
    /// This is the single path for both freshly created rooms and legacy
    /// records loaded without one. Rooms with a position are not moved.
    /// Returns the number of rooms placed.
    pub fn assign_missing_positions(
        &mut self,
        engine: &FloorplanLayoutEngine,
        canvas: Canvas,
    ) -> Result<usize, StoreError> {
        if self.rooms.iter().all(|r| r.position.is_some()) {
            return Ok(0);
        }

        let inputs: Vec<LayoutRoom> = self.rooms.iter().map(LayoutRoom::from).collect();
        let positions = engine.compute_positions(&inputs, canvas, engine.config().min_room_size);

        let mut placed = 0;
        for room in self.rooms.iter_mut().filter(|r| r.position.is_none()) {
            if let Some(&position) = positions.get(&room.id) {
                room.position = Some(position);
                placed += 1;
            }
        }

        if placed > 0 {
            debug!("Assigned positions to {} rooms", placed);
            self.touch()?;
        }
        Ok(placed)
    }

    fn merge(&mut self, rooms: Vec<Room>) -> Result<ImportSummary, StoreError> {
        for room in &rooms {
            room.validate().map_err(StoreError::InvalidRecord)?;
        }

        let mut known: HashSet<RoomId> = self.rooms.iter().map(|r| r.id).collect();
        let mut summary = ImportSummary::default();
        for room in rooms {
            if known.insert(room.id) {
                self.rooms.push(room);
                summary.added += 1;
            } else {
                summary.skipped += 1;
            }
        }

        if summary.added > 0 {
            self.touch()?;
        }
        Ok(summary)
    }

    fn index_of(&self, id: RoomId) -> Result<usize, StoreError> {
        self.rooms
            .iter()
            .position(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    fn touch(&mut self) -> Result<(), StoreError> {
        self.revision += 1;
        if let Some(path) = &self.autosave_path {
            io::save_rooms(&self.rooms, path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutConfig;
    use tempfile::TempDir;

    fn persistence(dir: &TempDir, autosave: bool) -> PersistenceSection {
        PersistenceSection {
            rooms_file: dir.path().join("rooms.json").to_string_lossy().into_owned(),
            autosave,
        }
    }

    #[test]
    fn test_add_and_get() {
        let mut store = RoomStore::new();
        let id = store.add(Room::new("Kitchen", 300.0, 400.0)).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(id).unwrap().name, "Kitchen");
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn test_add_duplicate_id() {
        let mut store = RoomStore::new();
        let room = Room::new("Kitchen", 300.0, 400.0);
        store.add(room.clone()).unwrap();
        assert_eq!(store.add(room.clone()), Err(StoreError::DuplicateId(room.id)));
    }

    #[test]
    fn test_add_invalid_room() {
        let mut store = RoomStore::new();
        let result = store.add(Room::new("Flat", 0.0, 400.0));
        assert!(matches!(result, Err(StoreError::InvalidRecord(_))));
        assert!(store.is_empty());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_mutations_bump_revision() {
        let mut store = RoomStore::new();
        let id = store.add(Room::new("Den", 300.0, 300.0)).unwrap();
        let start = store.revision();

        store.set_position(id, Point2D::new(10.0, 20.0)).unwrap();
        assert_eq!(store.rotate(id).unwrap(), Rotation::Deg90);
        store.rename(id, "Study").unwrap();
        store.remeasure(id, 310.0, 290.0).unwrap();

        assert_eq!(store.revision(), start + 4);
        let room = store.get(id).unwrap();
        assert_eq!(room.name, "Study");
        assert_eq!(room.position, Some(Point2D::new(10.0, 20.0)));
        assert_eq!(room.rotation, Rotation::Deg90);
        assert_eq!((room.width, room.length), (310.0, 290.0));
    }

    #[test]
    fn test_remeasure_rejects_invalid_dimensions() {
        let mut store = RoomStore::new();
        let id = store.add(Room::new("Den", 300.0, 300.0)).unwrap();
        assert!(store.remeasure(id, f32::NAN, 300.0).is_err());
        assert_eq!(store.get(id).unwrap().width, 300.0);
    }

    #[test]
    fn test_unknown_id() {
        let mut store = RoomStore::new();
        let id = uuid::Uuid::new_v4();
        assert_eq!(store.remove(id), Err(StoreError::NotFound(id)));
        assert_eq!(store.rotate(id), Err(StoreError::NotFound(id)));
    }

    #[test]
    fn test_remove() {
        let mut store = RoomStore::new();
        let id = store.add(Room::new("Den", 300.0, 300.0)).unwrap();
        let removed = store.remove(id).unwrap();
        assert_eq!(removed.id, id);
        assert!(store.is_empty());
    }

    #[test]
    fn test_import_merges_by_id() {
        let mut store = RoomStore::new();
        let existing = Room::new("Kitchen", 300.0, 400.0);
        store.add(existing.clone()).unwrap();

        let mut renamed = existing.clone();
        renamed.name = "Renamed".to_string();
        let fresh = Room::new("Bath", 200.0, 250.0);
        let json = io::rooms_to_json(&[renamed, fresh.clone()]).unwrap();

        let summary = store.import_json(&json).unwrap();
        assert_eq!(summary, ImportSummary { added: 1, skipped: 1 });
        assert_eq!(store.len(), 2);
        // Duplicates are ignored, not overwritten
        assert_eq!(store.get(existing.id).unwrap().name, "Kitchen");
        assert_eq!(store.rooms()[1].id, fresh.id);
    }

    #[test]
    fn test_failed_import_leaves_store_untouched() {
        let mut store = RoomStore::new();
        store.add(Room::new("Kitchen", 300.0, 400.0)).unwrap();
        let before = store.rooms().to_vec();
        let revision = store.revision();

        assert!(store.import_json("[{\"id\": 42}]").is_err());
        assert!(store.import_json("not json").is_err());

        assert_eq!(store.rooms(), before.as_slice());
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn test_assign_missing_positions_keeps_existing() {
        let mut store = RoomStore::new();
        let dragged = Point2D::new(500.0, 500.0);
        let fixed = store
            .add(Room::new("Fixed", 300.0, 300.0).with_position(dragged))
            .unwrap();
        let free = store.add(Room::new("Free", 300.0, 300.0)).unwrap();

        let engine = FloorplanLayoutEngine::new(LayoutConfig::default());
        let placed = store
            .assign_missing_positions(&engine, Canvas::bounded(800.0, 800.0))
            .unwrap();

        assert_eq!(placed, 1);
        assert_eq!(store.get(fixed).unwrap().position, Some(dragged));
        assert!(store.get(free).unwrap().position.is_some());

        // Nothing left to place
        let revision = store.revision();
        assert_eq!(
            store
                .assign_missing_positions(&engine, Canvas::bounded(800.0, 800.0))
                .unwrap(),
            0
        );
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn test_autosave_writes_every_mutation() {
        let dir = TempDir::new().unwrap();
        let settings = persistence(&dir, true);
        let path = settings.rooms_path();

        let mut store = RoomStore::open_with(&settings).unwrap();
        assert_eq!(store.autosave_path(), Some(path.as_path()));
        assert!(!path.exists());

        let id = store.add(Room::new("Kitchen", 300.0, 400.0)).unwrap();
        assert!(path.exists());
        assert_eq!(io::load_rooms(&path).unwrap().len(), 1);

        store.rename(id, "Galley").unwrap();
        store.rotate(id).unwrap();
        let reopened = RoomStore::open_with(&settings).unwrap();
        let room = reopened.get(id).unwrap();
        assert_eq!(room.name, "Galley");
        assert_eq!(room.rotation, Rotation::Deg90);

        store.remove(id).unwrap();
        assert!(io::load_rooms(&path).unwrap().is_empty());
    }

    #[test]
    fn test_autosave_disabled() {
        let dir = TempDir::new().unwrap();
        let settings = persistence(&dir, false);

        let mut store = RoomStore::open_with(&settings).unwrap();
        assert!(store.autosave_path().is_none());
        store.add(Room::new("Kitchen", 300.0, 400.0)).unwrap();
        assert!(!settings.rooms_path().exists());
    }

    #[test]
    fn test_rejected_mutation_does_not_save() {
        let dir = TempDir::new().unwrap();
        let settings = persistence(&dir, true);
        let mut store = RoomStore::open_with(&settings).unwrap();

        assert!(store.add(Room::new("Flat", 0.0, 400.0)).is_err());
        assert!(!settings.rooms_path().exists());
    }
}
