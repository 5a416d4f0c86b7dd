//! Core physical constants and shared value types for impact modeling.

use serde::{Deserialize, Serialize};

/// Physical constants (SI units)

/// Surface gravitational acceleration used by every scaling law (m/s²)
pub const G_EARTH: f64 = 9.81;

/// Kilometers to meters
pub const KM_TO_METERS: f64 = 1000.0;

/// Meters to kilometers
pub const METERS_TO_KM: f64 = 1.0 / KM_TO_METERS;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Seconds per minute
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Joules released by one megaton of TNT
pub const JOULES_PER_MEGATON_TNT: f64 = 4.18e15;

/// Default impactor bulk density: stony asteroid (kg/m³)
pub const ROCK_IMPACTOR_DENSITY: f64 = 3000.0;

/// Default target bulk density: crustal rock (kg/m³)
pub const ROCK_TARGET_DENSITY: f64 = 2700.0;

/// Surface the impactor strikes.
///
/// Selects the crater scaling coefficient and which of the seismic or
/// tsunami blocks a simulation produces.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    #[default]
    #[value(alias = "rock")]
    Land,
    #[value(alias = "water")]
    Ocean,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown target type '{0}' (expected land or ocean)")]
pub struct UnknownTargetType(pub String);

impl TargetType {
    /// Classify a point from its ground elevation: below sea level is ocean.
    ///
    /// Convenience for callers that only have an elevation lookup; the
    /// simulation itself never infers the target type.
    pub fn from_elevation(elevation_m: f64) -> Self {
        if elevation_m < 0.0 {
            TargetType::Ocean
        } else {
            TargetType::Land
        }
    }

    pub fn is_ocean(self) -> bool {
        self == TargetType::Ocean
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TargetType::Land => "land",
            TargetType::Ocean => "ocean",
        }
    }
}

impl std::fmt::Display for TargetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TargetType {
    type Err = UnknownTargetType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "land" | "rock" => Ok(TargetType::Land),
            "ocean" | "water" => Ok(TargetType::Ocean),
            other => Err(UnknownTargetType(other.to_owned())),
        }
    }
}

/// Linear elevation multiplier applied to crater depth and seismic energy.
///
/// `1 + elevation/1000`: every 100 m of elevation adds 10% to the quantity.
/// This is a modeling approximation without a physical derivation.
#[inline]
pub fn elevation_gain(elevation_m: f64) -> f64 {
    1.0 + elevation_m / 1000.0
}
