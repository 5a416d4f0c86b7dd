//! Crater scaling: transient cavity, final rim diameter and depth.

use serde::{Deserialize, Serialize};

use crate::types::{DEG_TO_RAD, G_EARTH, KM_TO_METERS, METERS_TO_KM, TargetType, elevation_gain};

/// Scaling coefficient for water-covered targets.
pub const OCEAN_SCALING_COEFFICIENT: f64 = 1.365;

/// Scaling coefficient for rock targets.
pub const LAND_SCALING_COEFFICIENT: f64 = 1.161;

/// Floor on sin(entry angle) so grazing impacts keep a positive crater.
pub const MIN_SIN_ENTRY_ANGLE: f64 = 1e-3;

/// Largest transient diameter that still collapses to a simple crater (m).
pub const SIMPLE_COMPLEX_TRANSITION_M: f64 = 2560.0;

/// Simple-to-complex final crater transition diameter (km).
const COMPLEX_TRANSITION_KM: f64 = 3.2;

/// Guards the rim-height ratio against a zero final diameter.
const DEPTH_EPSILON: f64 = 1e-9;

/// Final crater morphology.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CraterRegime {
    /// Bowl-shaped crater; the transient cavity widens by 25%.
    Simple,
    /// Collapsed crater with central uplift.
    Complex,
}

/// Final crater diameter together with the regime that produced it.
///
/// The regime must travel with the diameter: the depth formula depends on it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FinalCrater {
    pub regime: CraterRegime,
    pub diameter_m: f64,
}

/// Complete crater geometry for one impact.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CraterGeometry {
    pub regime: CraterRegime,
    pub transient_diameter_m: f64,
    pub final_diameter_m: f64,
    pub final_depth_m: f64,
}

impl CraterGeometry {
    /// Run the transient → final → depth chain.
    pub fn compute(
        diameter_m: f64,
        impactor_density: f64,
        target_density: f64,
        speed_m_s: f64,
        angle_deg: f64,
        target: TargetType,
        elevation_m: f64,
    ) -> Self {
        let transient_diameter_m = transient_crater_diameter_m(
            diameter_m,
            impactor_density,
            target_density,
            speed_m_s,
            angle_deg,
            target,
        );
        let FinalCrater { regime, diameter_m: final_diameter_m } = final_crater(transient_diameter_m);
        let final_depth_m =
            final_crater_depth_m(regime, final_diameter_m, transient_diameter_m, elevation_m);

        Self {
            regime,
            transient_diameter_m,
            final_diameter_m,
            final_depth_m,
        }
    }
}

/// Transient crater diameter from pi-group scaling.
///
/// D_tc = C · (ρi/ρt)^(1/3) · d^0.78 · v^0.44 · g^-0.22 · sin(θ)^(1/3)
///
/// # Arguments
/// * `diameter_m` - Impactor diameter in meters
/// * `impactor_density` - Impactor bulk density in kg/m³
/// * `target_density` - Target bulk density in kg/m³
/// * `speed_m_s` - Impact speed in m/s
/// * `angle_deg` - Entry angle from horizontal in degrees
/// * `target` - Selects C: 1.365 for ocean, 1.161 otherwise
///
/// # Returns
/// Transient crater diameter in meters
pub fn transient_crater_diameter_m(
    diameter_m: f64,
    impactor_density: f64,
    target_density: f64,
    speed_m_s: f64,
    angle_deg: f64,
    target: TargetType,
) -> f64 {
    let c = match target {
        TargetType::Ocean => OCEAN_SCALING_COEFFICIENT,
        TargetType::Land => LAND_SCALING_COEFFICIENT,
    };
    let sin_theta = (angle_deg * DEG_TO_RAD).sin().max(MIN_SIN_ENTRY_ANGLE);

    c * (impactor_density / target_density).cbrt()
        * diameter_m.powf(0.78)
        * speed_m_s.powf(0.44)
        * G_EARTH.powf(-0.22)
        * sin_theta.cbrt()
}

/// Final crater from the transient diameter.
///
/// Simple when D_tc ≤ 2.56 km (D_fr = 1.25 · D_tc), otherwise complex with
/// D_fr[km] = 1.17 · D_tc[km]^1.13 · 3.2^0.13.
pub fn final_crater(transient_diameter_m: f64) -> FinalCrater {
    if transient_diameter_m <= SIMPLE_COMPLEX_TRANSITION_M {
        return FinalCrater {
            regime: CraterRegime::Simple,
            diameter_m: 1.25 * transient_diameter_m,
        };
    }

    let transient_km = transient_diameter_m * METERS_TO_KM;
    let final_km = 1.17 * transient_km.powf(1.13) * COMPLEX_TRANSITION_KM.powf(0.13);
    FinalCrater {
        regime: CraterRegime::Complex,
        diameter_m: final_km * KM_TO_METERS,
    }
}

/// Final crater depth (m), scaled by the linear elevation gain.
///
/// Simple: max(D_tc/2 + h_fr − t_br, 0.2 · D_fr), where the rim height is
/// h_fr = 0.07 · D_tc⁴ / D_fr³ and the breccia lens t_br is a tenth of D_tc/2.
/// Complex: 0.4 · D_fr[km]^0.3 km.
pub fn final_crater_depth_m(
    regime: CraterRegime,
    final_diameter_m: f64,
    transient_diameter_m: f64,
    elevation_m: f64,
) -> f64 {
    let depth = match regime {
        CraterRegime::Simple => {
            let half_transient = transient_diameter_m / 2.0;
            let rim_height = 0.07 * transient_diameter_m.powi(4)
                / (final_diameter_m.powi(3) + DEPTH_EPSILON);
            let breccia = (0.1 * half_transient).min(half_transient);
            (half_transient + rim_height - breccia).max(0.2 * final_diameter_m)
        }
        CraterRegime::Complex => 0.4 * (final_diameter_m * METERS_TO_KM).powf(0.3) * KM_TO_METERS,
    };
    depth * elevation_gain(elevation_m)
}
