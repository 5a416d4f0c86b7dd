//! Property-based tests for impact scaling using proptest.
//!
//! These tests verify monotonicity and regime invariants across the range of
//! impactor sizes and speeds the catalog can produce.

use proptest::prelude::*;

use super::*;
use crate::types::{ROCK_IMPACTOR_DENSITY, ROCK_TARGET_DENSITY, TargetType};

fn target() -> impl Strategy<Value = TargetType> {
    prop_oneof![Just(TargetType::Land), Just(TargetType::Ocean)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Larger or faster impactors never make a smaller transient crater.
    #[test]
    fn prop_transient_diameter_monotonic(
        diameter_m in 1.0f64..10_000.0,
        speed_m_s in 1_000.0f64..70_000.0,
        grow in 1.0f64..5.0,
        angle_deg in 0.0f64..=90.0,
        target in target(),
    ) {
        let base = transient_crater_diameter_m(
            diameter_m, ROCK_IMPACTOR_DENSITY, ROCK_TARGET_DENSITY, speed_m_s, angle_deg, target,
        );
        let bigger = transient_crater_diameter_m(
            diameter_m * grow, ROCK_IMPACTOR_DENSITY, ROCK_TARGET_DENSITY, speed_m_s, angle_deg, target,
        );
        let faster = transient_crater_diameter_m(
            diameter_m, ROCK_IMPACTOR_DENSITY, ROCK_TARGET_DENSITY, speed_m_s * grow, angle_deg, target,
        );

        prop_assert!(base > 0.0 && base.is_finite());
        prop_assert!(bigger >= base);
        prop_assert!(faster >= base);
    }

    /// The regime is decided by the transient diameter alone, and the final
    /// crater is never smaller than the transient one.
    #[test]
    fn prop_final_crater_regime_split(transient_m in 1.0f64..200_000.0) {
        let fc = final_crater(transient_m);
        if transient_m <= SIMPLE_COMPLEX_TRANSITION_M {
            prop_assert_eq!(fc.regime, CraterRegime::Simple);
        } else {
            prop_assert_eq!(fc.regime, CraterRegime::Complex);
        }
        prop_assert!(fc.diameter_m >= transient_m);
    }

    /// Crater depth stays positive for sites within a kilometer of sea level.
    #[test]
    fn prop_depth_positive(
        diameter_m in 1.0f64..5_000.0,
        speed_m_s in 5_000.0f64..40_000.0,
        elevation_m in -900.0f64..900.0,
    ) {
        let geom = CraterGeometry::compute(
            diameter_m, ROCK_IMPACTOR_DENSITY, ROCK_TARGET_DENSITY, speed_m_s, 45.0,
            TargetType::Land, elevation_m,
        );
        prop_assert!(geom.final_depth_m > 0.0);
    }

    /// Magnitude is non-decreasing in energy.
    #[test]
    fn prop_magnitude_monotonic_in_energy(
        energy_j in 1.0f64..1e24,
        grow in 1.0f64..1e3,
    ) {
        prop_assert!(seismic_magnitude(energy_j * grow, 0.0) >= seismic_magnitude(energy_j, 0.0));
    }

    /// Tsunami amplitude never grows with distance.
    #[test]
    fn prop_amplitude_non_increasing(
        transient_m in 100.0f64..50_000.0,
        r1_m in 1.0f64..2e6,
        dr_m in 0.0f64..1e6,
    ) {
        let near = wave_amplitude_m(transient_m, r1_m, 0.0, 1.0);
        let far = wave_amplitude_m(transient_m, r1_m + dr_m, 0.0, 1.0);
        prop_assert!(far <= near);
    }
}
