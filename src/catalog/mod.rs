//! Near-Earth object catalog records and loading.
//!
//! Records mirror the NASA NeoWs JSON layout so that a browse page, a feed
//! page, or a plain array of objects deserializes without reshaping. NeoWs
//! encodes most numbers as strings; every numeric field here accepts either
//! form and treats unparsable values as absent. A record that still fails to
//! decode is dropped on its own; the rest of the catalog survives.
//!
//! Fetching, pagination and rate limiting are the caller's concern. This
//! module only turns already-fetched JSON into [`NeoRecord`]s.

pub mod extract;

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

pub use extract::{ApproachCandidate, MalformedRecord, extract_candidates, parse_approach_time};

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One cataloged near-Earth object.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NeoRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub neo_reference_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub name_limited: Option<String>,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub estimated_diameter: Option<EstimatedDiameter>,
    #[serde(
        default,
        rename = "is_potentially_hazardous_asteroid",
        deserialize_with = "lenient::null_as_default"
    )]
    pub is_hazardous: bool,
    #[serde(default)]
    pub orbital_data: Option<OrbitalData>,
    #[serde(default, rename = "close_approach_data", deserialize_with = "lenient::null_as_default")]
    pub close_approaches: Vec<CloseApproachEvent>,
}

/// Estimated diameter block; only the metric range is used.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct EstimatedDiameter {
    #[serde(default)]
    pub meters: Option<DiameterRange>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct DiameterRange {
    #[serde(default, rename = "estimated_diameter_min", deserialize_with = "lenient::f64_opt")]
    pub min: Option<f64>,
    #[serde(default, rename = "estimated_diameter_max", deserialize_with = "lenient::f64_opt")]
    pub max: Option<f64>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct OrbitalData {
    /// Minimum orbit intersection distance (AU).
    #[serde(default, rename = "minimum_orbit_intersection", deserialize_with = "lenient::f64_opt")]
    pub moid_au: Option<f64>,
    /// Orbit condition code, 0 (well determined) to 9 (most uncertain).
    #[serde(default, deserialize_with = "lenient::u8_opt")]
    pub orbit_uncertainty: Option<u8>,
}

/// A single close approach of a cataloged object to some body.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CloseApproachEvent {
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub orbiting_body: String,
    #[serde(default)]
    pub relative_velocity: Option<RelativeVelocity>,
    #[serde(default)]
    pub miss_distance: Option<MissDistance>,
    /// Date only, e.g. `2029-04-13`.
    #[serde(default)]
    pub close_approach_date: Option<String>,
    /// Date with time of day, e.g. `2029-Apr-13 21:46`.
    #[serde(default)]
    pub close_approach_date_full: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct RelativeVelocity {
    #[serde(default, deserialize_with = "lenient::f64_opt")]
    pub kilometers_per_second: Option<f64>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct MissDistance {
    #[serde(default, deserialize_with = "lenient::f64_opt")]
    pub kilometers: Option<f64>,
}

impl NeoRecord {
    /// Create a bare record with an identifier and name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn hazardous(mut self, is_hazardous: bool) -> Self {
        self.is_hazardous = is_hazardous;
        self
    }

    pub fn with_diameter_m(mut self, min: f64, max: f64) -> Self {
        self.estimated_diameter = Some(EstimatedDiameter {
            meters: Some(DiameterRange {
                min: Some(min),
                max: Some(max),
            }),
        });
        self
    }

    pub fn with_orbit(mut self, moid_au: Option<f64>, orbit_uncertainty: Option<u8>) -> Self {
        self.orbital_data = Some(OrbitalData {
            moid_au,
            orbit_uncertainty,
        });
        self
    }

    pub fn with_approach(mut self, approach: CloseApproachEvent) -> Self {
        self.close_approaches.push(approach);
        self
    }

    /// Stable identifier: `id`, falling back to `neo_reference_id`.
    pub fn identifier(&self) -> &str {
        self.id
            .as_deref()
            .or(self.neo_reference_id.as_deref())
            .unwrap_or("")
    }

    /// Human-readable name: `name`, then `name_limited`, then `designation`,
    /// then the identifier.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.name_limited.as_deref())
            .or(self.designation.as_deref())
            .unwrap_or_else(|| self.identifier())
    }

    /// Estimated (min, max) diameter in meters, when both bounds are present.
    pub fn diameter_range_m(&self) -> Option<(f64, f64)> {
        let range = self.estimated_diameter.as_ref()?.meters?;
        Some((range.min?, range.max?))
    }

    pub fn moid_au(&self) -> Option<f64> {
        self.orbital_data.and_then(|o| o.moid_au)
    }

    pub fn orbit_uncertainty(&self) -> Option<u8> {
        self.orbital_data.and_then(|o| o.orbit_uncertainty)
    }
}

impl CloseApproachEvent {
    /// Create an approach to `body` on a date-only timestamp.
    pub fn new(body: impl Into<String>, speed_km_s: f64, miss_distance_km: f64, date: &str) -> Self {
        Self {
            orbiting_body: body.into(),
            relative_velocity: Some(RelativeVelocity {
                kilometers_per_second: Some(speed_km_s),
            }),
            miss_distance: Some(MissDistance {
                kilometers: Some(miss_distance_km),
            }),
            close_approach_date: Some(date.to_string()),
            close_approach_date_full: None,
        }
    }

    pub fn with_full_date(mut self, full: &str) -> Self {
        self.close_approach_date_full = Some(full.to_string());
        self
    }

    pub fn is_earth(&self) -> bool {
        self.orbiting_body.trim().eq_ignore_ascii_case("earth")
    }

    pub fn speed_km_s(&self) -> Option<f64> {
        self.relative_velocity.and_then(|v| v.kilometers_per_second)
    }

    pub fn miss_distance_km(&self) -> Option<f64> {
        self.miss_distance.and_then(|m| m.kilometers)
    }
}

/// Accepted top-level catalog layouts. Records stay raw so each one decodes
/// independently.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Records(Vec<Value>),
    Browse {
        near_earth_objects: Vec<Value>,
    },
    Feed {
        near_earth_objects: BTreeMap<String, Vec<Value>>,
    },
}

/// Parse a catalog from JSON text.
///
/// Accepts a bare array of objects, a NeoWs browse page, or a NeoWs feed page
/// (whose date-keyed groups are flattened in date order). Only a document that
/// matches none of these layouts is an error; records that fail to decode are
/// skipped and logged.
pub fn parse_catalog(json: &str) -> Result<Vec<NeoRecord>, CatalogError> {
    let raw: Vec<Value> = match serde_json::from_str::<CatalogDocument>(json)? {
        CatalogDocument::Records(records) => records,
        CatalogDocument::Browse { near_earth_objects } => near_earth_objects,
        CatalogDocument::Feed { near_earth_objects } => {
            near_earth_objects.into_values().flatten().collect()
        }
    };
    Ok(decode_records(raw))
}

fn decode_records(raw: Vec<Value>) -> Vec<NeoRecord> {
    let total = raw.len();
    let mut records = Vec::with_capacity(total);
    for (index, value) in raw.into_iter().enumerate() {
        match serde_json::from_value::<NeoRecord>(value) {
            Ok(record) => records.push(record),
            Err(err) => debug!(index, %err, "skipping undecodable catalog record"),
        }
    }

    let skipped = total - records.len();
    if skipped > 0 {
        warn!(skipped, total, "dropped undecodable catalog records");
    }
    records
}

/// Load a catalog from a JSON file on disk.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<NeoRecord>, CatalogError> {
    let json = std::fs::read_to_string(path)?;
    parse_catalog(&json)
}

/// Deserializers for NeoWs numeric fields, which arrive as numbers or strings.
mod lenient {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    pub fn f64_opt<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        let value = match Option::<NumberOrText>::deserialize(d)? {
            Some(NumberOrText::Number(v)) => Some(v),
            Some(NumberOrText::Text(s)) => s.trim().parse::<f64>().ok(),
            None => None,
        };
        Ok(value.filter(|v| v.is_finite()))
    }

    pub fn u8_opt<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u8>, D::Error> {
        Ok(f64_opt(d)?
            .filter(|v| v.fract() == 0.0 && (0.0..=255.0).contains(v))
            .map(|v| v as u8))
    }

    /// An explicit `null` reads as the type's default, like a missing key.
    pub fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + Default,
    {
        Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
    }
}
