//! Default value functions for serde deserialization.

pub fn rooms_file() -> String {
    "rooms.json".to_string()
}

pub fn autosave() -> bool {
    true
}
