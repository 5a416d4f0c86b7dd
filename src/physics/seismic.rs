//! Seismic magnitude, Mercalli bands and intensity attenuation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::elevation_gain;

/// Upper (exclusive) magnitude bounds of every band but the last.
const MMI_THRESHOLDS: [f64; 6] = [4.0, 5.0, 6.0, 7.0, 8.0, 9.0];

/// Coarse Modified Mercalli band for an epicentral magnitude.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MmiBand {
    Weak,
    LightModerate,
    ModerateStrong,
    StrongVeryStrong,
    Severe,
    Violent,
    Extreme,
}

impl MmiBand {
    const ORDERED: [MmiBand; 7] = [
        MmiBand::Weak,
        MmiBand::LightModerate,
        MmiBand::ModerateStrong,
        MmiBand::StrongVeryStrong,
        MmiBand::Severe,
        MmiBand::Violent,
        MmiBand::Extreme,
    ];

    /// Band for magnitude `m`. A value exactly on a threshold belongs to the
    /// band above it; NaN falls through to the strongest band.
    pub fn from_magnitude(m: f64) -> Self {
        MMI_THRESHOLDS
            .iter()
            .position(|&t| m < t)
            .map_or(MmiBand::Extreme, |i| Self::ORDERED[i])
    }

    pub fn label(self) -> &'static str {
        match self {
            MmiBand::Weak => "III–IV (Weak)",
            MmiBand::LightModerate => "IV–V (Light–Moderate)",
            MmiBand::ModerateStrong => "VI–VII (Moderate–Strong)",
            MmiBand::StrongVeryStrong => "VII–VIII (Strong–Very strong)",
            MmiBand::Severe => "IX–X (Severe)",
            MmiBand::Violent => "X–XI (Violent)",
            MmiBand::Extreme => "XII (Extreme)",
        }
    }
}

impl fmt::Display for MmiBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coefficients of the intensity-vs-range curve
/// `I(R) = a + b·M − c·log10(R + R0) − d·R`.
///
/// This is a display curve, not a ground-motion prediction equation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntensityLaw {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    /// Range offset (km) keeping the logarithm finite at the epicenter.
    pub r0: f64,
}

impl Default for IntensityLaw {
    fn default() -> Self {
        Self {
            a: -1.5,
            b: 2.0,
            c: 3.0,
            d: 0.003,
            r0: 10.0,
        }
    }
}

/// Equivalent earthquake magnitude of an impact.
///
/// M = 0.67 · log10(max(E · (1 + elevation/1000), 1)) − 5.87
///
/// # Arguments
/// * `energy_j` - Impact kinetic energy in joules
/// * `elevation_m` - Site elevation in meters (signed)
///
/// # Reference
/// Collins, Melosh & Marcus (2005), eq. 40, with a linear elevation gain.
#[inline]
pub fn seismic_magnitude(energy_j: f64, elevation_m: f64) -> f64 {
    0.67 * (energy_j * elevation_gain(elevation_m)).max(1.0).log10() - 5.87
}

#[inline]
pub fn mmi_band(magnitude: f64) -> MmiBand {
    MmiBand::from_magnitude(magnitude)
}

/// Intensity at `range_km` from the epicenter.
#[inline]
pub fn seismic_intensity(magnitude: f64, range_km: f64, law: &IntensityLaw) -> f64 {
    law.a + law.b * magnitude - law.c * (range_km + law.r0).log10() - law.d * range_km
}
