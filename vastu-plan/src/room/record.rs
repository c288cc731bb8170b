//! Persisted room record.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::Point2D;

/// Stable room identifier.
pub type RoomId = Uuid;

/// Room orientation on the canvas, in quarter turns.
///
/// Serialized as the integer number of degrees (0, 90, 180 or 270).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Rotation {
    /// Not rotated
    #[default]
    Deg0,
    /// Quarter turn clockwise
    Deg90,
    /// Half turn
    Deg180,
    /// Three quarter turns clockwise
    Deg270,
}

impl Rotation {
    /// Rotation in degrees.
    #[inline]
    pub fn degrees(self) -> u16 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// Next quarter turn clockwise (270 wraps to 0).
    #[inline]
    pub fn next(self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg90,
            Rotation::Deg90 => Rotation::Deg180,
            Rotation::Deg180 => Rotation::Deg270,
            Rotation::Deg270 => Rotation::Deg0,
        }
    }

    /// Width and length trade places on the canvas.
    #[inline]
    pub fn swaps_axes(self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }
}

/// Rejected rotation value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRotation(pub u16);

impl fmt::Display for InvalidRotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rotation must be 0, 90, 180 or 270, got {}", self.0)
    }
}

impl std::error::Error for InvalidRotation {}

impl TryFrom<u16> for Rotation {
    type Error = InvalidRotation;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(Rotation::Deg0),
            90 => Ok(Rotation::Deg90),
            180 => Ok(Rotation::Deg180),
            270 => Ok(Rotation::Deg270),
            other => Err(InvalidRotation(other)),
        }
    }
}

impl From<Rotation> for u16 {
    fn from(rotation: Rotation) -> Self {
        rotation.degrees()
    }
}

/// A measured room as stored and exchanged.
///
/// Dimensions are in centimeters. `position` is a canvas coordinate
/// (room center); it stays `None` until the user drags the room or the
/// layout engine places it, and is never recomputed afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Stable identifier
    pub id: RoomId,
    /// Display name
    pub name: String,
    /// Width (cm)
    pub width: f32,
    /// Length (cm)
    pub length: f32,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Canvas position of the room center
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Point2D>,
    /// Canvas orientation; absent in legacy records
    #[serde(default)]
    pub rotation: Rotation,
}

impl Room {
    /// Create a new unpositioned, unrotated room with a fresh id.
    pub fn new(name: impl Into<String>, width: f32, length: f32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            width,
            length,
            created_at: Utc::now(),
            position: None,
            rotation: Rotation::Deg0,
        }
    }

    /// Builder-style setter for the canvas position.
    pub fn with_position(mut self, position: Point2D) -> Self {
        self.position = Some(position);
        self
    }

    /// Builder-style setter for the rotation.
    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Floor area in square meters.
    #[inline]
    pub fn area_m2(&self) -> f32 {
        self.width * self.length / 10_000.0
    }

    /// (width, length) as drawn on the canvas, in centimeters.
    ///
    /// Swapped for 90 and 270 degree rotations.
    #[inline]
    pub fn footprint(&self) -> (f32, f32) {
        if self.rotation.swaps_axes() {
            (self.length, self.width)
        } else {
            (self.width, self.length)
        }
    }

    /// Check that dimensions and position are usable.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(format!("room {}: invalid width {}", self.id, self.width));
        }
        if !(self.length.is_finite() && self.length > 0.0) {
            return Err(format!("room {}: invalid length {}", self.id, self.length));
        }
        if let Some(position) = self.position
            && !position.is_finite()
        {
            return Err(format!("room {}: non-finite position", self.id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_m2() {
        let room = Room::new("Bedroom", 300.0, 400.0);
        assert!((room.area_m2() - 12.0).abs() < 1e-6);
    }

    #[test]
    fn test_rotation_cycle() {
        let mut r = Rotation::Deg0;
        let seen: Vec<u16> = (0..5)
            .map(|_| {
                let d = r.degrees();
                r = r.next();
                d
            })
            .collect();
        assert_eq!(seen, vec![0, 90, 180, 270, 0]);
    }

    #[test]
    fn test_rotation_try_from() {
        assert_eq!(Rotation::try_from(180), Ok(Rotation::Deg180));
        assert_eq!(Rotation::try_from(45), Err(InvalidRotation(45)));
    }

    #[test]
    fn test_footprint_swaps_on_quarter_turn() {
        let room = Room::new("Hall", 200.0, 500.0);
        assert_eq!(room.footprint(), (200.0, 500.0));
        assert_eq!(
            room.clone().with_rotation(Rotation::Deg90).footprint(),
            (500.0, 200.0)
        );
        assert_eq!(
            room.with_rotation(Rotation::Deg180).footprint(),
            (200.0, 500.0)
        );
    }

    #[test]
    fn test_json_field_names() {
        let room = Room::new("Study", 250.0, 300.0).with_position(Point2D::new(10.0, 20.0));
        let value = serde_json::to_value(&room).unwrap();
        assert!(value.get("createdAt").is_some());
        assert_eq!(value["rotation"], 0);
        assert_eq!(value["position"]["x"], 10.0);
    }

    #[test]
    fn test_missing_rotation_defaults_to_zero() {
        let json = r#"{
            "id": "6f1c2a1e-4b7d-4f61-9a7e-2d3c4b5a6f70",
            "name": "Legacy",
            "width": 320.0,
            "length": 410.5,
            "createdAt": "2024-03-01T12:00:00Z"
        }"#;
        let room: Room = serde_json::from_str(json).unwrap();
        assert_eq!(room.rotation, Rotation::Deg0);
        assert!(room.position.is_none());
    }

    #[test]
    fn test_invalid_rotation_rejected() {
        let json = r#"{
            "id": "6f1c2a1e-4b7d-4f61-9a7e-2d3c4b5a6f70",
            "name": "Odd",
            "width": 320.0,
            "length": 410.5,
            "createdAt": "2024-03-01T12:00:00Z",
            "rotation": 45
        }"#;
        assert!(serde_json::from_str::<Room>(json).is_err());
    }

    #[test]
    fn test_validate() {
        assert!(Room::new("Ok", 100.0, 100.0).validate().is_ok());
        assert!(Room::new("Flat", 0.0, 100.0).validate().is_err());
        assert!(Room::new("Neg", 100.0, -1.0).validate().is_err());
        let bad = Room::new("Nan", 100.0, 100.0).with_position(Point2D::new(f64::NAN, 0.0));
        assert!(bad.validate().is_err());
    }
}
