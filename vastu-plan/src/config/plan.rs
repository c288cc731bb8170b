//! Main VastuPlanConfig.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigLoadError;
use super::persistence::PersistenceSection;
use crate::layout::{FloorplanLayoutEngine, LayoutConfig};
use crate::measurement::{
    MeasurementConfig, SteadinessConfig, SteadinessDetector, WallMeasurementSession,
};
use crate::room::{RoomStore, StoreError};
use crate::tracker::{RoomGeometryTracker, TrackerConfig};

/// Full vastu-plan configuration loaded from YAML.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct VastuPlanConfig {
    /// Room outline tracking
    #[serde(default)]
    pub tracker: TrackerConfig,

    /// Two-point wall capture
    #[serde(default)]
    pub measurement: MeasurementConfig,

    /// Impact and steadiness detection
    #[serde(default)]
    pub steadiness: SteadinessConfig,

    /// Floor-plan layout
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Room file persistence
    #[serde(default)]
    pub persistence: PersistenceSection,
}

impl VastuPlanConfig {
    /// Load and validate configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/config.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/config.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check every section.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        let sections = [
            ("tracker", self.tracker.validate()),
            ("measurement", self.measurement.validate()),
            ("steadiness", self.steadiness.validate()),
            ("layout", self.layout.validate()),
        ];
        for (name, result) in sections {
            result.map_err(|e| ConfigLoadError::Validation(format!("{}: {}", name, e)))?;
        }
        if self.persistence.rooms_file.trim().is_empty() {
            return Err(ConfigLoadError::Validation(
                "persistence: rooms_file must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Tracker built from the `tracker` section.
    pub fn room_tracker(&self) -> RoomGeometryTracker {
        RoomGeometryTracker::new(self.tracker.clone())
    }

    /// Measurement session built from the `measurement` section.
    pub fn measurement_session(&self) -> WallMeasurementSession {
        WallMeasurementSession::new(self.measurement.clone())
    }

    /// Steadiness detector built from the `steadiness` section.
    pub fn steadiness_detector(&self) -> SteadinessDetector {
        SteadinessDetector::new(self.steadiness.clone())
    }

    /// Layout engine built from the `layout` section.
    pub fn layout_engine(&self) -> FloorplanLayoutEngine {
        FloorplanLayoutEngine::new(self.layout.clone())
    }

    /// Room store opened from the `persistence` section, autosaving if enabled.
    pub fn room_store(&self) -> Result<RoomStore, StoreError> {
        RoomStore::open_with(&self.persistence)
    }
}
