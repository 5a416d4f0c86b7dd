//! Runtime configuration for a simulation run.
//!
//! [`SimulationConfig`] mirrors every tunable of the matching score and the
//! hazard profiles. It deserializes from TOML with `#[serde(default)]` at every
//! level, so a file only needs the keys it changes:
//!
//! ```toml
//! max_rings = 60
//! reference_time = "2026-01-01T00:00:00Z"
//!
//! [weights]
//! w_speed = 0.5
//!
//! [tsunami]
//! amplitude_cutoff_m = 0.25
//!
//! [seismic]
//! max_range_km = 400.0
//! ```
//!
//! Loaded values are checked by [`SimulationConfig::validate`]: steps, ranges
//! and the speed scale must be positive, weights and cutoffs non-negative.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::matching::MatchWeights;
use crate::profile::{DEFAULT_MAX_RINGS, SeismicParams, TsunamiParams};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid config value {field} = {value}: must be {requirement}")]
    Invalid {
        field: &'static str,
        value: f64,
        requirement: &'static str,
    },
}

/// Every tunable of a simulation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub weights: MatchWeights,
    pub tsunami: TsunamiParams,
    pub seismic: SeismicParams,
    /// Upper bound on rings in any profile.
    pub max_rings: usize,
    /// Fixed "now" for the approach-recency tie-break. `None` uses the wall clock.
    pub reference_time: Option<DateTime<Utc>>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            weights: MatchWeights::default(),
            tsunami: TsunamiParams::default(),
            seismic: SeismicParams::default(),
            max_rings: DEFAULT_MAX_RINGS,
            reference_time: None,
        }
    }
}

impl SimulationConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    /// Load `path`, falling back to defaults (with a warning) when the file is
    /// missing or malformed.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                info!(path = %path.display(), "loaded simulation config");
                config
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "using default simulation config");
                Self::default()
            }
        }
    }

    /// Reject tunables that would make scores or profiles meaningless.
    ///
    /// The ring cap needs no check; zero rings is a legal, empty profile.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let w = &self.weights;
        non_negative("weights.w_diameter", w.w_diameter)?;
        non_negative("weights.w_speed", w.w_speed)?;
        positive("weights.speed_scale_m_s", w.speed_scale_m_s)?;

        let t = &self.tsunami;
        non_negative("tsunami.far_field_exponent", t.far_field_exponent)?;
        positive("tsunami.step_km", t.step_km)?;
        non_negative("tsunami.amplitude_cutoff_m", t.amplitude_cutoff_m)?;
        positive("tsunami.min_range_km", t.min_range_km)?;
        positive("tsunami.max_range_km", t.max_range_km)?;
        if t.max_range_km < t.min_range_km {
            return Err(ConfigError::Invalid {
                field: "tsunami.max_range_km",
                value: t.max_range_km,
                requirement: "at least tsunami.min_range_km",
            });
        }
        non_negative("tsunami.range_per_crater_km", t.range_per_crater_km)?;
        positive("tsunami.default_water_depth_m", t.default_water_depth_m)?;
        for &range_km in &t.sample_ranges_km {
            positive("tsunami.sample_ranges_km", range_km)?;
        }

        let s = &self.seismic;
        for (field, value) in [
            ("seismic.a", s.law.a),
            ("seismic.b", s.law.b),
            ("seismic.c", s.law.c),
            ("seismic.d", s.law.d),
            ("seismic.strong_intensity", s.strong_intensity),
            ("seismic.moderate_intensity", s.moderate_intensity),
            ("seismic.light_intensity", s.light_intensity),
        ] {
            finite(field, value)?;
        }
        positive("seismic.r0", s.law.r0)?;
        positive("seismic.max_range_km", s.max_range_km)?;
        positive("seismic.step_km", s.step_km)?;
        Ok(())
    }

    pub fn with_reference_time(mut self, now: DateTime<Utc>) -> Self {
        self.reference_time = Some(now);
        self
    }

    /// The instant approach recency is measured from.
    pub fn now(&self) -> DateTime<Utc> {
        self.reference_time.unwrap_or_else(Utc::now)
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    require(field, value, value.is_finite(), "finite")
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    require(field, value, value.is_finite() && value > 0.0, "positive and finite")
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    require(field, value, value.is_finite() && value >= 0.0, "non-negative and finite")
}

fn require(
    field: &'static str,
    value: f64,
    ok: bool,
    requirement: &'static str,
) -> Result<(), ConfigError> {
    if ok {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            value,
            requirement,
        })
    }
}
