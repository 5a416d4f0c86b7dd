//! Impact physics: closed-form scaling laws for a single impact.
//!
//! Every function here is pure and takes physical quantities only; nothing
//! in this module knows about the NEO catalog. Angles come in degrees and are
//! converted internally. Gravity is [`crate::types::G_EARTH`] throughout.
//!
//! Crater scaling follows the simplified Collins et al. (2005) relations:
//! - Transient crater from the pi-group scaling fit
//! - Simple/complex final crater split at a 2.56 km transient diameter
//! - Seismic magnitude from the Gutenberg-Richter energy relation
//! - Tsunami rim-wave amplitude with 1/r far-field decay

mod crater;
mod seismic;
mod tsunami;

#[cfg(test)]
mod proptest_physics;

use std::f64::consts::PI;

pub use crater::{
    CraterGeometry, CraterRegime, FinalCrater, LAND_SCALING_COEFFICIENT, MIN_SIN_ENTRY_ANGLE,
    OCEAN_SCALING_COEFFICIENT, SIMPLE_COMPLEX_TRANSITION_M, final_crater, final_crater_depth_m,
    transient_crater_diameter_m,
};
pub use seismic::{IntensityLaw, MmiBand, mmi_band, seismic_intensity, seismic_magnitude};
pub use tsunami::{
    arrival_time_min, base_wave_height_m, elevation_damping, near_field_radius_m,
    shallow_water_wave_speed_m_s, wave_amplitude_m,
};

use crate::types::JOULES_PER_MEGATON_TNT;

/// Mass of a spherical impactor (kg).
#[inline]
pub fn impactor_mass_kg(diameter_m: f64, density_kg_m3: f64) -> f64 {
    density_kg_m3 * (PI / 6.0) * diameter_m.powi(3)
}

/// Kinetic energy of a spherical impactor.
///
/// E = ½ · ρ · (π/6 · d³) · v²
///
/// # Arguments
/// * `diameter_m` - Impactor diameter in meters
/// * `density_kg_m3` - Impactor bulk density in kg/m³
/// * `speed_m_s` - Impact speed in m/s
///
/// # Returns
/// Energy in joules
#[inline]
pub fn energy_joules(diameter_m: f64, density_kg_m3: f64, speed_m_s: f64) -> f64 {
    0.5 * impactor_mass_kg(diameter_m, density_kg_m3) * speed_m_s * speed_m_s
}

/// Convert joules to megatons of TNT.
#[inline]
pub fn megatons_tnt(energy_j: f64) -> f64 {
    energy_j / JOULES_PER_MEGATON_TNT
}
