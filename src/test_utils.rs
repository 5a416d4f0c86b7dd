//! Test utilities for catalog, matching and profile tests.
//!
//! Provides fixtures for building NeoWs-shaped records and assertions for the
//! invariants every hazard profile must satisfy.

use crate::catalog::{CloseApproachEvent, NeoRecord};
use crate::profile::{TsunamiParams, TsunamiPoint};

/// Fixtures for creating catalog records.
pub mod fixtures {
    use super::*;

    /// A record with a fixed diameter (min = max) and the given approaches.
    pub fn neo(
        id: &str,
        diameter_m: f64,
        hazardous: bool,
        approaches: Vec<CloseApproachEvent>,
    ) -> NeoRecord {
        approaches.into_iter().fold(
            NeoRecord::new(id, format!("({id})"))
                .hazardous(hazardous)
                .with_diameter_m(diameter_m, diameter_m),
            NeoRecord::with_approach,
        )
    }

    /// An Earth approach with a nominal lunar-distance miss.
    pub fn earth_approach(speed_km_s: f64, date: &str) -> CloseApproachEvent {
        CloseApproachEvent::new("Earth", speed_km_s, 384_400.0, date)
    }

    /// A small catalog mixing usable and unusable records.
    ///
    /// Only `"hazard-180"` and `"hazard-900"` yield candidates.
    pub fn sample_catalog() -> Vec<NeoRecord> {
        vec![
            neo("benign", 180.0, false, vec![earth_approach(21.0, "2030-01-01")]),
            neo("hazard-180", 180.0, true, vec![earth_approach(20.5, "2031-05-05")])
                .with_orbit(Some(0.012), Some(2)),
            neo(
                "mars-crosser",
                200.0,
                true,
                vec![CloseApproachEvent::new("Mars", 21.0, 2e6, "2030-01-01")],
            ),
            neo("hazard-900", 900.0, true, vec![earth_approach(30.0, "2029-09-09")])
                .with_orbit(Some(0.03), Some(5)),
        ]
    }

    /// Three records in the NeoWs browse layout, numbers encoded as strings.
    pub const NEOWS_BROWSE_PAGE: &str = r#"{
        "links": {"self": "http://api.nasa.gov/neo/rest/v1/neo/browse?page=0&size=3"},
        "page": {"size": 3, "total_elements": 3, "total_pages": 1, "number": 0},
        "near_earth_objects": [
            {
                "id": "2099942",
                "neo_reference_id": "2099942",
                "name": "99942 Apophis (2004 MN4)",
                "name_limited": "Apophis",
                "designation": "99942",
                "estimated_diameter": {
                    "meters": {"estimated_diameter_min": 310.0, "estimated_diameter_max": 680.0}
                },
                "is_potentially_hazardous_asteroid": true,
                "orbital_data": {"minimum_orbit_intersection": "0.000194", "orbit_uncertainty": "0"},
                "close_approach_data": [
                    {
                        "close_approach_date": "2029-04-13",
                        "close_approach_date_full": "2029-Apr-13 21:46",
                        "relative_velocity": {"kilometers_per_second": "7.42"},
                        "miss_distance": {"kilometers": "38012"},
                        "orbiting_body": "Earth"
                    },
                    {
                        "close_approach_date": "2029-04-14",
                        "close_approach_date_full": "2029-Apr-14 08:10",
                        "relative_velocity": {"kilometers_per_second": "5.85"},
                        "miss_distance": {"kilometers": "96000"},
                        "orbiting_body": "Moon"
                    }
                ]
            },
            {
                "id": "2101955",
                "neo_reference_id": "2101955",
                "name": "101955 Bennu (1999 RQ36)",
                "estimated_diameter": {
                    "meters": {"estimated_diameter_min": "459", "estimated_diameter_max": "511"}
                },
                "is_potentially_hazardous_asteroid": true,
                "orbital_data": {"minimum_orbit_intersection": "0.00322", "orbit_uncertainty": "0"},
                "close_approach_data": [
                    {
                        "close_approach_date": "2135-09-25",
                        "relative_velocity": {"kilometers_per_second": "6.1"},
                        "miss_distance": {"kilometers": "299000"},
                        "orbiting_body": "Earth"
                    }
                ]
            },
            {
                "id": "3542519",
                "name": "(2010 PK9)",
                "estimated_diameter": {
                    "meters": {"estimated_diameter_min": 102.0, "estimated_diameter_max": 228.0}
                },
                "is_potentially_hazardous_asteroid": false,
                "close_approach_data": [
                    {
                        "close_approach_date": "2027-07-19",
                        "relative_velocity": {"kilometers_per_second": "12.9"},
                        "miss_distance": {"kilometers": "5100000"},
                        "orbiting_body": "Earth"
                    }
                ]
            }
        ]
    }"#;
}

/// Assertions for verifying profile invariants.
pub mod assertions {
    use super::*;

    /// Check a tsunami profile against its parameters.
    ///
    /// Ranges start at one step and advance by one step, never pass the
    /// configured max range, every amplitude is at or above the cutoff,
    /// amplitudes never grow with range, and rings inside the rim-wave
    /// radius share the base amplitude.
    pub fn assert_tsunami_invariants(
        points: &[TsunamiPoint],
        params: &TsunamiParams,
        near_field_km: f64,
    ) {
        let Some(first) = points.first() else {
            return;
        };
        approx::assert_relative_eq!(first.range_km, params.step_km, max_relative = 1e-12);

        for (i, p) in points.iter().enumerate() {
            approx::assert_relative_eq!(
                p.range_km,
                params.step_km * (i + 1) as f64,
                max_relative = 1e-12
            );
            assert!(p.range_km <= params.max_range_km, "ring {i} at {} km", p.range_km);
            assert!(
                p.amplitude_m >= params.amplitude_cutoff_m,
                "ring {i}: {} m below cutoff {} m",
                p.amplitude_m,
                params.amplitude_cutoff_m
            );
            assert!(p.arrival_time_min > 0.0);
            if p.range_km <= near_field_km {
                assert_eq!(p.amplitude_m, first.amplitude_m, "ring {i} inside near field");
            }
        }

        for w in points.windows(2) {
            assert!(
                w[1].amplitude_m <= w[0].amplitude_m,
                "amplitude grew from {} m to {} m",
                w[0].amplitude_m,
                w[1].amplitude_m
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::parse_catalog;

    #[test]
    fn test_neo_fixture_is_hazardous_with_fixed_diameter() {
        let record = fixtures::neo("x", 250.0, true, vec![fixtures::earth_approach(20.0, "2030-01-01")]);
        assert!(record.is_hazardous);
        assert_eq!(record.diameter_range_m(), Some((250.0, 250.0)));
        assert_eq!(record.close_approaches.len(), 1);
        assert!(record.close_approaches[0].is_earth());
    }

    #[test]
    fn test_browse_page_fixture_parses() {
        let records = parse_catalog(fixtures::NEOWS_BROWSE_PAGE).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].diameter_range_m(), Some((459.0, 511.0)));
    }

    #[test]
    fn test_invariants_accept_empty_profile() {
        assertions::assert_tsunami_invariants(&[], &TsunamiParams::default(), 1.0);
    }
}
