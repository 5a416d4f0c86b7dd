//! Ocean-impact rim wave: amplitude decay and arrival time.

use crate::types::{G_EARTH, SECONDS_PER_MINUTE};

/// Elevation at which the inland damping factor reaches zero (m).
const DAMPING_ELEVATION_M: f64 = 5000.0;

/// Rim-wave source radius: R_rw = 0.75 · D_tc (m).
#[inline]
pub fn near_field_radius_m(transient_diameter_m: f64) -> f64 {
    0.75 * transient_diameter_m
}

/// Base wave height at the rim: D_tc / 14.1 (m).
#[inline]
pub fn base_wave_height_m(transient_diameter_m: f64) -> f64 {
    transient_diameter_m / 14.1
}

/// Linear damping for sites above sea level, clamped at zero.
#[inline]
pub fn elevation_damping(elevation_m: f64) -> f64 {
    (1.0 - elevation_m / DAMPING_ELEVATION_M).max(0.0)
}

/// Shallow-water wave speed c = sqrt(g · h) (m/s).
#[inline]
pub fn shallow_water_wave_speed_m_s(water_depth_m: f64) -> f64 {
    (G_EARTH * water_depth_m).sqrt()
}

/// Wave amplitude at `range_m` from the impact point.
///
/// Flat at the base height inside R_rw, then decays as (R_rw / r)^p.
///
/// # Arguments
/// * `transient_diameter_m` - Transient crater diameter in meters
/// * `range_m` - Distance from the impact point in meters
/// * `elevation_m` - Site elevation in meters
/// * `far_field_exponent` - Decay exponent p beyond R_rw
///
/// # Returns
/// Amplitude in meters
#[inline]
pub fn wave_amplitude_m(
    transient_diameter_m: f64,
    range_m: f64,
    elevation_m: f64,
    far_field_exponent: f64,
) -> f64 {
    let r_rw = near_field_radius_m(transient_diameter_m);
    let base = base_wave_height_m(transient_diameter_m);
    let amplitude = if range_m <= r_rw {
        base
    } else {
        base * (r_rw / range_m).powf(far_field_exponent)
    };
    amplitude * elevation_damping(elevation_m)
}

/// Arrival time (minutes) of a wave travelling at `wave_speed_m_s`.
#[inline]
pub fn arrival_time_min(range_m: f64, wave_speed_m_s: f64) -> f64 {
    range_m / wave_speed_m_s / SECONDS_PER_MINUTE
}
