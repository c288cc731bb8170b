//! JSON interchange for room lists.
//!
//! Format: a pretty-printed JSON array of room records.
//!
//! ```json
//! [
//!   {
//!     "id": "6f1c2a1e-4b7d-4f61-9a7e-2d3c4b5a6f70",
//!     "name": "Kitchen",
//!     "width": 300.0,
//!     "length": 420.0,
//!     "createdAt": "2024-03-01T12:00:00Z",
//!     "position": { "x": 120.0, "y": 80.0 },
//!     "rotation": 90
//!   }
//! ]
//! ```
//!
//! `position` and `rotation` are optional; rotation defaults to 0.

use std::io::{Read, Write};
use std::path::Path;

use log::info;
use thiserror::Error;

use crate::room::Room;

/// Error type for room list I/O
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IoError {
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(String),
    /// Malformed JSON or schema mismatch
    #[error("Parse error: {0}")]
    Parse(String),
    /// Well-formed JSON with unusable values
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
    /// Rooms could not be encoded
    #[error("Serialize error: {0}")]
    Serialize(String),
}

impl From<std::io::Error> for IoError {
    fn from(err: std::io::Error) -> Self {
        IoError::Io(err.to_string())
    }
}

/// Serialize rooms to a pretty-printed JSON array.
///
/// Rooms are validated first: a non-finite dimension would be written as
/// `null` and the output could not be read back.
pub fn rooms_to_json(rooms: &[Room]) -> Result<String, IoError> {
    validate_all(rooms)?;
    serde_json::to_string_pretty(rooms).map_err(|e| IoError::Serialize(e.to_string()))
}

/// Parse and validate a JSON array of rooms.
///
/// Either every record is returned or an error; never a partial list.
pub fn rooms_from_json(json: &str) -> Result<Vec<Room>, IoError> {
    let rooms: Vec<Room> = serde_json::from_str(json).map_err(|e| IoError::Parse(e.to_string()))?;
    validate_all(&rooms)?;
    Ok(rooms)
}

/// Write rooms as JSON to a writer.
pub fn write_rooms<W: Write>(rooms: &[Room], writer: &mut W) -> Result<(), IoError> {
    let json = rooms_to_json(rooms)?;
    writer.write_all(json.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Read rooms as JSON from a reader.
pub fn read_rooms<R: Read>(reader: &mut R) -> Result<Vec<Room>, IoError> {
    let mut json = String::new();
    reader.read_to_string(&mut json)?;
    rooms_from_json(&json)
}

/// Save rooms to a JSON file.
///
/// Writes to a sibling temporary file first and renames it into place, so
/// a failed write never truncates the previous file.
pub fn save_rooms(rooms: &[Room], path: &Path) -> Result<(), IoError> {
    let json = rooms_to_json(rooms)?;
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, json)?;
    std::fs::rename(&tmp, path)?;
    info!("Saved {} rooms to {:?}", rooms.len(), path);
    Ok(())
}

/// Load rooms from a JSON file.
pub fn load_rooms(path: &Path) -> Result<Vec<Room>, IoError> {
    let mut file = std::fs::File::open(path)?;
    let rooms = read_rooms(&mut file)?;
    info!("Loaded {} rooms from {:?}", rooms.len(), path);
    Ok(rooms)
}

fn validate_all(rooms: &[Room]) -> Result<(), IoError> {
    for room in rooms {
        room.validate().map_err(IoError::InvalidRecord)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Point2D;
    use crate::room::Rotation;

    fn sample_rooms() -> Vec<Room> {
        vec![
            Room::new("Kitchen", 300.0, 420.0)
                .with_position(Point2D::new(120.0, 80.0))
                .with_rotation(Rotation::Deg90),
            Room::new("Bath", 180.0, 240.5),
        ]
    }

    #[test]
    fn test_json_roundtrip() {
        let rooms = sample_rooms();
        let json = rooms_to_json(&rooms).unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains('\n'));

        let parsed = rooms_from_json(&json).unwrap();
        assert_eq!(parsed, rooms);
    }

    #[test]
    fn test_writer_reader_roundtrip() {
        let rooms = sample_rooms();
        let mut buffer = Vec::new();
        write_rooms(&rooms, &mut buffer).unwrap();

        let parsed = read_rooms(&mut buffer.as_slice()).unwrap();
        assert_eq!(parsed, rooms);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(rooms_from_json("{not json"), Err(IoError::Parse(_))));
        // Object instead of array is a schema mismatch
        assert!(matches!(rooms_from_json("{}"), Err(IoError::Parse(_))));
    }

    #[test]
    fn test_invalid_record_rejects_whole_list() {
        let mut rooms = sample_rooms();
        rooms[1].width = -5.0;
        let json = serde_json::to_string_pretty(&rooms).unwrap();
        assert!(matches!(
            rooms_from_json(&json),
            Err(IoError::InvalidRecord(_))
        ));
    }

    #[test]
    fn test_invalid_record_is_not_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rooms.json");
        let mut rooms = sample_rooms();
        rooms[0].length = f32::NAN;

        assert!(matches!(rooms_to_json(&rooms), Err(IoError::InvalidRecord(_))));
        assert!(matches!(
            save_rooms(&rooms, &path),
            Err(IoError::InvalidRecord(_))
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rooms.json");

        let rooms = sample_rooms();
        save_rooms(&rooms, &path).unwrap();
        assert!(!path.with_extension("json.tmp").exists());

        let loaded = load_rooms(&path).unwrap();
        assert_eq!(loaded, rooms);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_rooms(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(IoError::Io(_))));
    }
}
