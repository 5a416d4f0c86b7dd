//! Reach summaries derived from the crater and the hazard profiles.

use serde::Serialize;

use super::{SeismicParams, SeismicPoint, TsunamiParams, TsunamiPoint};
use crate::types::METERS_TO_KM;

/// Tolerance when matching a configured sample range to a profile ring (km).
const SAMPLE_RANGE_TOLERANCE_KM: f64 = 1e-6;

/// Damage radii scaled from the final crater diameter (km).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CraterReach {
    pub severe_radius_km: f64,
    pub moderate_radius_km: f64,
    pub light_radius_km: f64,
}

impl CraterReach {
    pub fn from_final_diameter(final_diameter_m: f64) -> Self {
        let d_km = final_diameter_m * METERS_TO_KM;
        Self {
            severe_radius_km: 0.5 * d_km,
            moderate_radius_km: d_km,
            light_radius_km: 1.6 * d_km,
        }
    }
}

/// Headline numbers of a tsunami profile.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TsunamiReach {
    pub max_height_m: f64,
    pub max_at_km: f64,
    /// Farthest ring at or above the cutoff; 0 when none is.
    pub reach_km: f64,
    pub cutoff_m: f64,
    /// Rows at the configured sample ranges that the profile reached.
    pub samples: Vec<TsunamiPoint>,
}

impl TsunamiReach {
    /// Summarize a profile. Returns `None` for an empty profile.
    pub fn from_profile(profile: &[TsunamiPoint], params: &TsunamiParams) -> Option<Self> {
        let first = profile.first()?;
        let mut max_height_m = first.amplitude_m;
        let mut max_at_km = first.range_km;
        let mut reach_km: f64 = 0.0;

        for p in profile {
            // Strict comparison keeps the nearest ring on plateau ties.
            if p.amplitude_m > max_height_m {
                max_height_m = p.amplitude_m;
                max_at_km = p.range_km;
            }
            if p.amplitude_m >= params.amplitude_cutoff_m {
                reach_km = reach_km.max(p.range_km);
            }
        }

        Some(Self {
            max_height_m,
            max_at_km,
            reach_km,
            cutoff_m: params.amplitude_cutoff_m,
            samples: tsunami_samples(profile, &params.sample_ranges_km),
        })
    }
}

/// Profile rows whose range equals one of `ranges_km`, in profile order.
pub fn tsunami_samples(profile: &[TsunamiPoint], ranges_km: &[f64]) -> Vec<TsunamiPoint> {
    profile
        .iter()
        .filter(|p| {
            ranges_km
                .iter()
                .any(|r| (p.range_km - r).abs() <= SAMPLE_RANGE_TOLERANCE_KM)
        })
        .copied()
        .collect()
}

/// Farthest range reaching each intensity threshold (km, 0 when never reached).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SeismicReach {
    pub strong_km: f64,
    pub moderate_km: f64,
    pub light_km: f64,
}

impl SeismicReach {
    pub fn from_profile(profile: &[SeismicPoint], params: &SeismicParams) -> Self {
        let reach = |threshold: f64| {
            profile
                .iter()
                .filter(|p| p.intensity >= threshold)
                .fold(0.0_f64, |r, p| r.max(p.range_km))
        };
        Self {
            strong_km: reach(params.strong_intensity),
            moderate_km: reach(params.moderate_intensity),
            light_km: reach(params.light_intensity),
        }
    }
}

/// Reach figures for every hazard present in a result.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ImpactSummary {
    pub crater: CraterReach,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tsunami: Option<TsunamiReach>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seismic: Option<SeismicReach>,
}
