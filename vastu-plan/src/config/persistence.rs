//! Persistence section.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Where the room list is stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistenceSection {
    /// Room JSON file.
    /// Default: "rooms.json"
    #[serde(default = "defaults::rooms_file")]
    pub rooms_file: String,

    /// Save after every change.
    /// Default: true
    #[serde(default = "defaults::autosave")]
    pub autosave: bool,
}

impl Default for PersistenceSection {
    fn default() -> Self {
        Self {
            rooms_file: defaults::rooms_file(),
            autosave: defaults::autosave(),
        }
    }
}

impl PersistenceSection {
    /// Room file path.
    pub fn rooms_path(&self) -> PathBuf {
        PathBuf::from(&self.rooms_file)
    }
}
