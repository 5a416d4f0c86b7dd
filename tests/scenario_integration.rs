//! Integration tests for preset scenarios.

mod common;

use pha_impact::physics::CraterRegime;
use pha_impact::scenarios::{PRESETS, find_preset};
use pha_impact::{SimulationConfig, TargetType};

#[test]
fn test_all_presets_exist() {
    assert!(!PRESETS.is_empty(), "Should have at least one preset defined");
}

#[test]
fn test_preset_unique_ids() {
    let mut ids: Vec<&str> = PRESETS.iter().map(|p| p.id).collect();
    ids.sort();

    for i in 1..ids.len() {
        assert_ne!(ids[i - 1], ids[i], "Duplicate preset ID: {}", ids[i]);
    }
}

#[test]
fn test_every_preset_runs_against_fixture_catalog() {
    let catalog = common::feed_catalog();
    let sim = common::simulator();

    for preset in PRESETS {
        let result = sim
            .simulate(&catalog, &preset.scenario)
            .unwrap_or_else(|e| panic!("preset {} failed: {e}", preset.id));

        match preset.scenario.target_type {
            TargetType::Land => {
                assert!(result.impact.seismic.is_some(), "{} should have seismic", preset.id);
                assert!(result.impact.tsunami.is_none(), "{} should not have tsunami", preset.id);
            }
            TargetType::Ocean => {
                assert!(result.impact.tsunami.is_some(), "{} should have tsunami", preset.id);
                assert!(result.impact.seismic.is_none(), "{} should not have seismic", preset.id);
            }
        }
        assert!(result.impact.energy.joules > 0.0);
        assert!(result.impact.crater.final_diameter_m >= result.impact.crater.transient_diameter_m);
    }
}

#[test]
fn test_crater_regimes_span_presets() {
    let sim = common::simulator();
    let small = sim.assess(&find_preset("chelyabinsk_class").unwrap().scenario).unwrap();
    let large = sim.assess(&find_preset("chicxulub_class").unwrap().scenario).unwrap();
    assert_eq!(small.crater.regime, CraterRegime::Simple);
    assert_eq!(large.crater.regime, CraterRegime::Complex);
}

#[test]
fn test_ocean_preset_without_depth_uses_configured_default() {
    let preset = find_preset("apophis_class_ocean").unwrap();
    assert_eq!(preset.scenario.water_depth_m, None);

    let config = SimulationConfig::from_toml_str("[tsunami]\ndefault_water_depth_m = 2500.0").unwrap();
    let sim = pha_impact::Simulator::new(config);
    let impact = sim.assess(&preset.scenario).unwrap();
    assert_eq!(impact.inputs.water_depth_m, Some(2500.0));
}
