//! User impact scenarios.
//!
//! A [`UserScenario`] holds everything the physics needs for one run: the
//! impactor, its entry geometry and the target site. It is validated once,
//! before any matching or physics, and resolved into [`ScenarioInputs`] with
//! every optional field filled in.

pub mod presets;

use serde::{Deserialize, Serialize};

use crate::types::{ROCK_IMPACTOR_DENSITY, ROCK_TARGET_DENSITY, TargetType};

pub use presets::{PRESETS, ScenarioPreset, find_preset};

/// Reasons a scenario is rejected. Each variant carries the offending value.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum ScenarioError {
    #[error("impactor diameter must be positive and finite, got {0} m")]
    InvalidDiameter(f64),

    #[error("impact speed must be positive and finite, got {0} m/s")]
    InvalidSpeed(f64),

    #[error("entry angle must lie in [0, 90] degrees, got {0}")]
    InvalidAngle(f64),

    #[error("elevation must be finite, got {0} m")]
    InvalidElevation(f64),

    #[error("water depth must be positive and finite, got {0} m")]
    InvalidWaterDepth(f64),

    #[error("bulk density must be positive and finite, got {0} kg/m³")]
    InvalidDensity(f64),
}

/// One user-specified impact.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserScenario {
    /// Impactor diameter (m).
    pub diameter_m: f64,
    /// Impact speed (m/s).
    pub speed_m_s: f64,
    /// Entry angle from horizontal (degrees, 0–90).
    pub entry_angle_deg: f64,
    pub target_type: TargetType,
    /// Site elevation (m, signed). Absent means sea level.
    #[serde(default)]
    pub elevation_m: Option<f64>,
    /// Water depth at the impact point (m). Only read for ocean targets.
    #[serde(default)]
    pub water_depth_m: Option<f64>,
    #[serde(default = "default_impactor_density")]
    pub impactor_density_kg_m3: f64,
    #[serde(default = "default_target_density")]
    pub target_density_kg_m3: f64,
}

fn default_impactor_density() -> f64 {
    ROCK_IMPACTOR_DENSITY
}

fn default_target_density() -> f64 {
    ROCK_TARGET_DENSITY
}

impl UserScenario {
    /// Rocky impactor striking a land target with rock densities.
    pub const fn land(diameter_m: f64, speed_m_s: f64, entry_angle_deg: f64) -> Self {
        Self {
            diameter_m,
            speed_m_s,
            entry_angle_deg,
            target_type: TargetType::Land,
            elevation_m: None,
            water_depth_m: None,
            impactor_density_kg_m3: ROCK_IMPACTOR_DENSITY,
            target_density_kg_m3: ROCK_TARGET_DENSITY,
        }
    }

    /// Rocky impactor striking an ocean target; water depth defaults at resolve time.
    pub const fn ocean(diameter_m: f64, speed_m_s: f64, entry_angle_deg: f64) -> Self {
        let mut s = Self::land(diameter_m, speed_m_s, entry_angle_deg);
        s.target_type = TargetType::Ocean;
        s
    }

    pub const fn with_elevation(mut self, elevation_m: f64) -> Self {
        self.elevation_m = Some(elevation_m);
        self
    }

    pub const fn with_water_depth(mut self, water_depth_m: f64) -> Self {
        self.water_depth_m = Some(water_depth_m);
        self
    }

    pub const fn with_densities(mut self, impactor_kg_m3: f64, target_kg_m3: f64) -> Self {
        self.impactor_density_kg_m3 = impactor_kg_m3;
        self.target_density_kg_m3 = target_kg_m3;
        self
    }

    /// Reject scenarios no physics can run on.
    ///
    /// Water depth is only checked for ocean targets.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if !is_positive(self.diameter_m) {
            return Err(ScenarioError::InvalidDiameter(self.diameter_m));
        }
        if !is_positive(self.speed_m_s) {
            return Err(ScenarioError::InvalidSpeed(self.speed_m_s));
        }
        if !(0.0..=90.0).contains(&self.entry_angle_deg) {
            return Err(ScenarioError::InvalidAngle(self.entry_angle_deg));
        }
        if let Some(e) = self.elevation_m.filter(|e| !e.is_finite()) {
            return Err(ScenarioError::InvalidElevation(e));
        }
        if self.target_type.is_ocean() {
            if let Some(h) = self.water_depth_m.filter(|&h| !is_positive(h)) {
                return Err(ScenarioError::InvalidWaterDepth(h));
            }
        }
        for rho in [self.impactor_density_kg_m3, self.target_density_kg_m3] {
            if !is_positive(rho) {
                return Err(ScenarioError::InvalidDensity(rho));
            }
        }
        Ok(())
    }

    /// Validate and fill in defaults.
    ///
    /// Ocean targets without a water depth get `default_water_depth_m`; land
    /// targets never carry one.
    pub fn resolve(&self, default_water_depth_m: f64) -> Result<ScenarioInputs, ScenarioError> {
        self.validate()?;
        let water_depth_m = match self.target_type {
            TargetType::Ocean => {
                let h = self.water_depth_m.unwrap_or(default_water_depth_m);
                if !is_positive(h) {
                    return Err(ScenarioError::InvalidWaterDepth(h));
                }
                Some(h)
            }
            TargetType::Land => None,
        };

        Ok(ScenarioInputs {
            diameter_m: self.diameter_m,
            speed_m_s: self.speed_m_s,
            entry_angle_deg: self.entry_angle_deg,
            target_type: self.target_type,
            elevation_m: self.elevation_m.unwrap_or(0.0),
            water_depth_m,
            impactor_density_kg_m3: self.impactor_density_kg_m3,
            target_density_kg_m3: self.target_density_kg_m3,
        })
    }
}

/// Validated scenario with defaults applied; echoed in every result.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScenarioInputs {
    pub diameter_m: f64,
    pub speed_m_s: f64,
    pub entry_angle_deg: f64,
    pub target_type: TargetType,
    pub elevation_m: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_depth_m: Option<f64>,
    pub impactor_density_kg_m3: f64,
    pub target_density_kg_m3: f64,
}

fn is_positive(x: f64) -> bool {
    x.is_finite() && x > 0.0
}
