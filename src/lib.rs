//! PHA Impact - Hazardous Asteroid Impact Scenarios
//!
//! A library crate that matches a user-specified impactor against a NASA
//! NeoWs catalog of potentially hazardous asteroids and assesses the impact:
//! energy, crater geometry, seismic shaking on land and tsunami reach at sea.

pub mod catalog;
pub mod config;
pub mod matching;
pub mod physics;
pub mod profile;
pub mod scenarios;
pub mod simulation;
pub mod types;

#[cfg(test)]
pub mod test_utils;

pub use catalog::{CatalogError, NeoRecord, load_catalog, parse_catalog};
pub use config::{ConfigError, SimulationConfig};
pub use scenarios::{ScenarioError, UserScenario};
pub use simulation::{ImpactResult, SimulationError, Simulator, simulate};
pub use types::TargetType;
