//! Unified configuration loading for vastu-plan.
//!
//! Loads all configuration from a single YAML file. Every field has a
//! default, so a partial (or empty) file is valid.

mod defaults;
mod error;
mod persistence;
mod plan;

pub use error::ConfigLoadError;
pub use persistence::PersistenceSection;
pub use plan::VastuPlanConfig;
