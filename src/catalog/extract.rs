//! Earth-approach candidate extraction.
//!
//! Flattens catalog records into one [`ApproachCandidate`] per Earth close
//! approach of a potentially hazardous object. Records that cannot produce a
//! candidate are skipped with a logged [`MalformedRecord`] reason; they never
//! fail the run.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tracing::debug;

use super::{CloseApproachEvent, NeoRecord};
use crate::types::KM_TO_METERS;

/// Orbit-uncertainty code assumed when a record carries none (most uncertain).
pub const DEFAULT_ORBIT_UNCERTAINTY: u8 = 9;

/// Date-time layouts tried after the date/time separator is normalized to `T`.
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%b-%dT%H:%M:%S%.f",
    "%Y-%b-%dT%H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y-%b-%d"];

/// Why a catalog record produced no candidates.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum MalformedRecord {
    #[error("not flagged as potentially hazardous")]
    NotHazardous,

    #[error("missing estimated diameter")]
    MissingDiameter,

    #[error("invalid estimated diameter {0} m")]
    InvalidDiameter(f64),

    #[error("no close approaches to Earth")]
    NoEarthApproach,
}

/// One Earth approach of a hazardous object, normalized for matching.
#[derive(Clone, Debug)]
pub struct ApproachCandidate<'a> {
    pub record: &'a NeoRecord,
    pub approach: &'a CloseApproachEvent,
    /// Mean of the estimated min/max diameter (m). Always finite and positive.
    pub diameter_m: f64,
    /// Relative velocity (m/s). NaN when the catalog omits it.
    pub speed_m_s: f64,
    pub when: Option<DateTime<Utc>>,
    pub miss_distance_km: Option<f64>,
    pub moid_au: Option<f64>,
    pub orbit_uncertainty: u8,
}

impl<'a> ApproachCandidate<'a> {
    pub fn neo_id(&self) -> &'a str {
        self.record.identifier()
    }

    pub fn name(&self) -> &'a str {
        self.record.display_name()
    }
}

/// Mean diameter and Earth approaches of a record that can yield candidates.
fn usable_parts(record: &NeoRecord) -> Result<(f64, Vec<&CloseApproachEvent>), MalformedRecord> {
    if !record.is_hazardous {
        return Err(MalformedRecord::NotHazardous);
    }

    let (min, max) = record
        .diameter_range_m()
        .ok_or(MalformedRecord::MissingDiameter)?;
    let diameter_m = 0.5 * (min + max);
    if !diameter_m.is_finite() || diameter_m <= 0.0 {
        return Err(MalformedRecord::InvalidDiameter(diameter_m));
    }

    let earth: Vec<&CloseApproachEvent> = record
        .close_approaches
        .iter()
        .filter(|a| a.is_earth())
        .collect();
    if earth.is_empty() {
        return Err(MalformedRecord::NoEarthApproach);
    }

    Ok((diameter_m, earth))
}

/// Extract one candidate per (hazardous record, Earth approach) pair.
///
/// Output order follows catalog order, then approach order within a record;
/// ranking relies on this for its final tie-break.
pub fn extract_candidates(catalog: &[NeoRecord]) -> Vec<ApproachCandidate<'_>> {
    let mut candidates = Vec::new();
    let mut skipped = 0usize;

    for record in catalog {
        let (diameter_m, approaches) = match usable_parts(record) {
            Ok(parts) => parts,
            Err(reason) => {
                debug!(id = record.identifier(), %reason, "skipping catalog record");
                skipped += 1;
                continue;
            }
        };

        for approach in approaches {
            candidates.push(ApproachCandidate {
                record,
                approach,
                diameter_m,
                speed_m_s: approach.speed_km_s().map_or(f64::NAN, |v| v * KM_TO_METERS),
                when: parse_approach_time(
                    approach.close_approach_date_full.as_deref(),
                    approach.close_approach_date.as_deref(),
                ),
                miss_distance_km: approach.miss_distance_km(),
                moid_au: record.moid_au(),
                orbit_uncertainty: record
                    .orbit_uncertainty()
                    .unwrap_or(DEFAULT_ORBIT_UNCERTAINTY),
            });
        }
    }

    debug!(
        records = catalog.len(),
        skipped,
        candidates = candidates.len(),
        "extracted approach candidates"
    );
    candidates
}

/// Resolve an approach timestamp to a UTC instant.
///
/// The full date-time is preferred; the date-only field is the fallback.
/// Returns `None` when neither parses.
pub fn parse_approach_time(full: Option<&str>, date: Option<&str>) -> Option<DateTime<Utc>> {
    full.and_then(parse_utc).or_else(|| date.and_then(parse_utc))
}

fn parse_utc(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    // A single space separates date and time; a bare trailing `Z` marks UTC.
    let normalized = raw.replacen(' ', "T", 1);
    let normalized = normalized.strip_suffix('Z').unwrap_or(&normalized);

    for fmt in DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(normalized, fmt) {
            return Some(naive.and_utc());
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(day) = NaiveDate::parse_from_str(normalized, fmt) {
            return day.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
        }
    }
    None
}
