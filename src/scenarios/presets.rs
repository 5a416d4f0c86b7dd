//! Preset impact scenarios.
//!
//! Five illustrative impactors spanning a city-scale airburst-class body to an
//! extinction-class one, split between land and ocean targets. Sizes and
//! speeds are representative, not reconstructions of historical events.

use super::UserScenario;

/// A named, ready-to-run scenario.
#[derive(Clone, Copy, Debug)]
pub struct ScenarioPreset {
    /// Unique identifier, used on the command line.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Brief description of the scenario.
    pub description: &'static str,
    pub scenario: UserScenario,
}

/// All available presets.
pub static PRESETS: &[ScenarioPreset] = &[
    PACIFIC_180M,
    METEOR_CRATER,
    CHELYABINSK_CLASS,
    APOPHIS_CLASS_OCEAN,
    CHICXULUB_CLASS,
];

/// Preset 1: Mid-ocean 180 m impactor (default)
///
/// Stony 180 m body at 21 km/s and 35° into 3.5 km of open ocean. The
/// transient cavity just passes 2.56 km, so the crater is complex, and the
/// tsunami profile starts well above the visibility cutoff.
pub static PACIFIC_180M: ScenarioPreset = ScenarioPreset {
    id: "pacific_180m",
    name: "Pacific 180 m",
    description: "180 m stony impactor, 21 km/s at 35° into 3.5 km deep ocean.",
    scenario: UserScenario::ocean(180.0, 21_000.0, 35.0).with_water_depth(3500.0),
};

/// Preset 2: Meteor Crater class
///
/// Dense 50 m iron body into the Colorado Plateau, about 1.6 km above sea level.
pub static METEOR_CRATER: ScenarioPreset = ScenarioPreset {
    id: "meteor_crater",
    name: "Meteor Crater Class",
    description: "50 m iron impactor at 12.8 km/s and 45° into an elevated desert plateau.",
    scenario: UserScenario::land(50.0, 12_800.0, 45.0)
        .with_elevation(1600.0)
        .with_densities(7800.0, 2500.0),
};

/// Preset 3: Chelyabinsk class (if it had reached the ground)
pub static CHELYABINSK_CLASS: ScenarioPreset = ScenarioPreset {
    id: "chelyabinsk_class",
    name: "Chelyabinsk Class",
    description: "20 m stony body at 19 km/s on a shallow 18° path over land.",
    scenario: UserScenario::land(20.0, 19_000.0, 18.0).with_elevation(200.0),
};

/// Preset 4: Apophis-sized ocean impact
pub static APOPHIS_CLASS_OCEAN: ScenarioPreset = ScenarioPreset {
    id: "apophis_class_ocean",
    name: "Apophis Class Ocean",
    description: "370 m body at 12.6 km/s and 45° into the Atlantic (default depth).",
    scenario: UserScenario::ocean(370.0, 12_600.0, 45.0),
};

/// Preset 5: Chicxulub class
///
/// 10 km impactor onto a continental shelf treated as land; complex crater.
pub static CHICXULUB_CLASS: ScenarioPreset = ScenarioPreset {
    id: "chicxulub_class",
    name: "Chicxulub Class",
    description: "10 km impactor at 20 km/s and 60°. Complex crater, extreme shaking.",
    scenario: UserScenario::land(10_000.0, 20_000.0, 60.0),
};

/// Look up a preset by id.
pub fn find_preset(id: &str) -> Option<&'static ScenarioPreset> {
    PRESETS.iter().find(|p| p.id == id)
}
