//! Range-indexed hazard profiles.
//!
//! Both profiles are lazy iterators that walk outward from the impact point in
//! fixed steps (the first ring sits at one step, never at zero range) and stop
//! on an explicit [`Termination`] condition:
//! - Tsunami: amplitude below the visibility cutoff, the adaptive max range,
//!   or the ring cap
//! - Seismic: the fixed max range or the ring cap
//!
//! Once a profile reports its termination it stays exhausted.

pub mod summary;

#[cfg(test)]
mod proptest_profile;

use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::physics::{
    IntensityLaw, arrival_time_min, seismic_intensity, shallow_water_wave_speed_m_s,
    wave_amplitude_m,
};
use crate::types::{KM_TO_METERS, METERS_TO_KM};

pub use summary::{CraterReach, ImpactSummary, SeismicReach, TsunamiReach, tsunami_samples};

/// Upper bound on rings emitted by any profile.
pub const DEFAULT_MAX_RINGS: usize = 80;

/// Tunables of the tsunami profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TsunamiParams {
    /// Far-field decay exponent p in (R_rw / r)^p.
    pub far_field_exponent: f64,
    /// Ring spacing (km).
    pub step_km: f64,
    /// Amplitudes below this end the profile (m).
    pub amplitude_cutoff_m: f64,
    /// Lower clamp of the adaptive max range (km).
    pub min_range_km: f64,
    /// Upper clamp of the adaptive max range (km).
    pub max_range_km: f64,
    /// Unclamped max range per kilometer of transient crater (km/km).
    pub range_per_crater_km: f64,
    /// Water depth used when an ocean scenario gives none (m).
    pub default_water_depth_m: f64,
    /// Ranges reported as sample rows in the summary (km).
    pub sample_ranges_km: Vec<f64>,
}

impl Default for TsunamiParams {
    fn default() -> Self {
        Self {
            far_field_exponent: 1.0,
            step_km: 25.0,
            amplitude_cutoff_m: 0.1,
            min_range_km: 150.0,
            max_range_km: 1200.0,
            range_per_crater_km: 30.0,
            default_water_depth_m: 4000.0,
            sample_ranges_km: vec![100.0, 500.0, 1000.0],
        }
    }
}

/// Tunables of the seismic profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeismicParams {
    #[serde(flatten)]
    pub law: IntensityLaw,
    /// Last range scanned (km).
    pub max_range_km: f64,
    /// Ring spacing (km).
    pub step_km: f64,
    /// Intensity at or above which shaking counts as strong.
    pub strong_intensity: f64,
    pub moderate_intensity: f64,
    pub light_intensity: f64,
}

impl Default for SeismicParams {
    fn default() -> Self {
        Self {
            law: IntensityLaw::default(),
            max_range_km: 800.0,
            step_km: 20.0,
            strong_intensity: 6.0,
            moderate_intensity: 4.5,
            light_intensity: 3.5,
        }
    }
}

/// One ring of the tsunami profile.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TsunamiPoint {
    pub range_km: f64,
    pub amplitude_m: f64,
    pub arrival_time_min: f64,
}

/// One ring of the seismic profile.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SeismicPoint {
    pub range_km: f64,
    pub intensity: f64,
}

/// Why a profile stopped emitting rings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// Amplitude dropped below the visibility cutoff.
    Cutoff,
    /// The next ring would lie beyond the maximum range.
    MaxRange,
    /// The ring cap was reached.
    RingCap,
}

/// Fixed-step walk shared by both profiles.
#[derive(Clone, Debug)]
struct RingWalk {
    step_km: f64,
    max_range_km: f64,
    max_rings: usize,
    emitted: usize,
    termination: Option<Termination>,
}

impl RingWalk {
    fn new(step_km: f64, max_range_km: f64, max_rings: usize) -> Self {
        Self {
            step_km,
            max_range_km,
            max_rings,
            emitted: 0,
            termination: None,
        }
    }

    /// Range of the next ring, or `None` once the walk is over.
    fn next_range_km(&mut self, profile: &'static str) -> Option<f64> {
        if self.termination.is_some() {
            return None;
        }
        if self.emitted >= self.max_rings {
            return self.stop(profile, Termination::RingCap);
        }
        let range_km = self.step_km * (self.emitted + 1) as f64;
        // A non-positive step never moves outward, so no ring lies in range.
        if range_km.is_nan() || range_km <= 0.0 || range_km > self.max_range_km {
            return self.stop(profile, Termination::MaxRange);
        }
        Some(range_km)
    }

    fn remaining(&self) -> usize {
        match self.termination {
            Some(_) => 0,
            None => self.max_rings - self.emitted,
        }
    }

    fn advance(&mut self) {
        self.emitted += 1;
    }

    fn stop(&mut self, profile: &'static str, reason: Termination) -> Option<f64> {
        debug!(profile, rings = self.emitted, ?reason, "profile terminated");
        self.termination = Some(reason);
        None
    }
}

/// Lazy tsunami amplitude-vs-range profile.
#[derive(Clone, Debug)]
pub struct TsunamiProfile {
    walk: RingWalk,
    transient_diameter_m: f64,
    elevation_m: f64,
    far_field_exponent: f64,
    amplitude_cutoff_m: f64,
    wave_speed_m_s: f64,
}

impl TsunamiProfile {
    /// Why the profile ended, once it has.
    pub fn termination(&self) -> Option<Termination> {
        self.walk.termination
    }
}

impl Iterator for TsunamiProfile {
    type Item = TsunamiPoint;

    fn next(&mut self) -> Option<TsunamiPoint> {
        let range_km = self.walk.next_range_km("tsunami")?;
        let range_m = range_km * KM_TO_METERS;
        let amplitude_m = wave_amplitude_m(
            self.transient_diameter_m,
            range_m,
            self.elevation_m,
            self.far_field_exponent,
        );
        if amplitude_m.is_nan() || amplitude_m < self.amplitude_cutoff_m {
            self.walk.stop("tsunami", Termination::Cutoff);
            return None;
        }

        self.walk.advance();
        Some(TsunamiPoint {
            range_km,
            amplitude_m,
            arrival_time_min: arrival_time_min(range_m, self.wave_speed_m_s),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.walk.remaining()))
    }
}

impl FusedIterator for TsunamiProfile {}

/// Lazy seismic intensity-vs-range profile.
#[derive(Clone, Debug)]
pub struct SeismicProfile {
    walk: RingWalk,
    magnitude: f64,
    law: IntensityLaw,
}

impl SeismicProfile {
    pub fn termination(&self) -> Option<Termination> {
        self.walk.termination
    }
}

impl Iterator for SeismicProfile {
    type Item = SeismicPoint;

    fn next(&mut self) -> Option<SeismicPoint> {
        let range_km = self.walk.next_range_km("seismic")?;
        self.walk.advance();
        Some(SeismicPoint {
            range_km,
            intensity: seismic_intensity(self.magnitude, range_km, &self.law),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.walk.remaining()))
    }
}

impl FusedIterator for SeismicProfile {}

/// Adaptive tsunami scan range: `range_per_crater_km · D_tc[km]`, clamped to
/// `[min_range_km, max_range_km]`.
pub fn tsunami_max_range_km(transient_diameter_m: f64, params: &TsunamiParams) -> f64 {
    (params.range_per_crater_km * transient_diameter_m * METERS_TO_KM)
        .max(params.min_range_km)
        .min(params.max_range_km)
}

/// Tsunami profile for an ocean impact.
///
/// # Arguments
/// * `transient_diameter_m` - Transient crater diameter in meters
/// * `water_depth_m` - Water depth at the impact point in meters
/// * `elevation_m` - Site elevation in meters
/// * `params` - Step, cutoff and range tunables
/// * `max_rings` - Hard cap on emitted rings
pub fn build_tsunami_profile(
    transient_diameter_m: f64,
    water_depth_m: f64,
    elevation_m: f64,
    params: &TsunamiParams,
    max_rings: usize,
) -> TsunamiProfile {
    TsunamiProfile {
        walk: RingWalk::new(
            params.step_km,
            tsunami_max_range_km(transient_diameter_m, params),
            max_rings,
        ),
        transient_diameter_m,
        elevation_m,
        far_field_exponent: params.far_field_exponent,
        amplitude_cutoff_m: params.amplitude_cutoff_m,
        wave_speed_m_s: shallow_water_wave_speed_m_s(water_depth_m),
    }
}

/// Seismic profile for a land impact of equivalent magnitude `magnitude`.
pub fn build_seismic_profile(
    magnitude: f64,
    params: &SeismicParams,
    max_rings: usize,
) -> SeismicProfile {
    SeismicProfile {
        walk: RingWalk::new(params.step_km, params.max_range_km, max_rings),
        magnitude,
        law: params.law,
    }
}
