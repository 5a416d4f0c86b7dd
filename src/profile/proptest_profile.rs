//! Property-based tests for profile termination using proptest.

use proptest::prelude::*;

use super::*;
use crate::physics::near_field_radius_m;
use crate::test_utils::assertions;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every tsunami profile is ordered, above cutoff, within range and
    /// non-increasing beyond the rim-wave radius.
    #[test]
    fn prop_tsunami_profile_invariants(
        transient_m in 10.0f64..80_000.0,
        water_depth_m in 10.0f64..11_000.0,
        elevation_m in -500.0f64..6_000.0,
        cutoff_m in 0.01f64..5.0,
        step_km in 1.0f64..100.0,
        max_rings in 0usize..120,
    ) {
        let params = TsunamiParams {
            amplitude_cutoff_m: cutoff_m,
            step_km,
            ..Default::default()
        };
        let points: Vec<_> =
            build_tsunami_profile(transient_m, water_depth_m, elevation_m, &params, max_rings).collect();

        prop_assert!(points.len() <= max_rings);
        assertions::assert_tsunami_invariants(
            &points,
            &params,
            near_field_radius_m(transient_m) * METERS_TO_KM,
        );
    }

    /// Seismic profiles never terminate early: they run to the max range or
    /// the ring cap, whichever comes first.
    #[test]
    fn prop_seismic_profile_length(
        magnitude in -2.0f64..12.0,
        step_km in 1.0f64..100.0,
        max_range_km in 1.0f64..3_000.0,
        max_rings in 0usize..120,
    ) {
        let params = SeismicParams {
            step_km,
            max_range_km,
            ..Default::default()
        };
        let points: Vec<_> = build_seismic_profile(magnitude, &params, max_rings).collect();

        let in_range = (1..).take_while(|&i| step_km * i as f64 <= max_range_km).count();
        prop_assert_eq!(points.len(), in_range.min(max_rings));
        if let Some(first) = points.first() {
            prop_assert_eq!(first.range_km, step_km);
        }
    }
}
