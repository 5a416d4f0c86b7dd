//! Simulation orchestrator: catalog match plus impact assessment.
//!
//! A run validates the scenario, extracts and ranks catalog candidates, then
//! computes every physical quantity from the user's own inputs. The matched
//! object is reported alongside the physics but never feeds it.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::catalog::{NeoRecord, extract_candidates};
use crate::config::SimulationConfig;
use crate::matching::{MatchError, ScoredCandidate, pick_best_at};
use crate::physics::{CraterGeometry, MmiBand, energy_joules, megatons_tnt, seismic_magnitude};
use crate::profile::{
    CraterReach, ImpactSummary, SeismicPoint, SeismicReach, TsunamiPoint, TsunamiReach,
    build_seismic_profile, build_tsunami_profile,
};
use crate::scenarios::{ScenarioError, ScenarioInputs, UserScenario};
use crate::types::{KM_TO_METERS, TargetType};

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum SimulationError {
    #[error(transparent)]
    NoCandidates(#[from] MatchError),

    #[error("invalid scenario: {0}")]
    InvalidScenario(#[from] ScenarioError),
}

/// The catalog approach most similar to the user impactor.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MatchSummary {
    pub neo_id: String,
    pub name: String,
    pub score: f64,
    pub diameter_m: f64,
    pub approach_when_utc: Option<DateTime<Utc>>,
    pub approach_speed_km_s: f64,
    pub miss_distance_km: Option<f64>,
    pub moid_au: Option<f64>,
    pub orbit_uncertainty: u8,
}

impl From<&ScoredCandidate<'_>> for MatchSummary {
    fn from(best: &ScoredCandidate<'_>) -> Self {
        let c = &best.candidate;
        Self {
            neo_id: c.neo_id().to_owned(),
            name: c.name().to_owned(),
            score: best.score,
            diameter_m: c.diameter_m,
            approach_when_utc: c.when,
            approach_speed_km_s: c.speed_m_s / KM_TO_METERS,
            miss_distance_km: c.miss_distance_km,
            moid_au: c.moid_au,
            orbit_uncertainty: c.orbit_uncertainty,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EnergyBlock {
    pub joules: f64,
    pub megatons_tnt: f64,
}

/// Land-impact shaking.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeismicBlock {
    pub magnitude: f64,
    pub mmi_band: MmiBand,
    pub mmi_label: &'static str,
    pub profile: Vec<SeismicPoint>,
}

/// Physics of one impact, independent of any catalog match.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ImpactAssessment {
    pub inputs: ScenarioInputs,
    pub energy: EnergyBlock,
    pub crater: CraterGeometry,
    /// Present for land targets only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seismic: Option<SeismicBlock>,
    /// Present for ocean targets only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tsunami: Option<Vec<TsunamiPoint>>,
    pub summary: ImpactSummary,
}

/// Complete outcome of [`Simulator::simulate`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ImpactResult {
    pub matching: MatchSummary,
    #[serde(flatten)]
    pub impact: ImpactAssessment,
}

/// Runs simulations under one configuration.
///
/// Holds no per-run state; a shared reference can serve concurrent runs.
#[derive(Clone, Debug, Default)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Match `scenario` against `catalog` and assess the impact.
    ///
    /// The scenario is validated before the catalog is touched, so an invalid
    /// scenario is reported even when the catalog is empty.
    pub fn simulate(
        &self,
        catalog: &[NeoRecord],
        scenario: &UserScenario,
    ) -> Result<ImpactResult, SimulationError> {
        let inputs = scenario.resolve(self.config.tsunami.default_water_depth_m)?;

        let candidates = extract_candidates(catalog);
        let best = pick_best_at(
            &candidates,
            inputs.diameter_m,
            inputs.speed_m_s,
            &self.config.weights,
            self.config.now(),
        )?;
        let matching = MatchSummary::from(&best);
        info!(
            neo = %matching.neo_id,
            name = %matching.name,
            score = matching.score,
            "matched catalog approach"
        );

        let impact = self.assess_inputs(inputs);
        info!(
            target = %impact.inputs.target_type,
            megatons = impact.energy.megatons_tnt,
            regime = ?impact.crater.regime,
            final_diameter_m = impact.crater.final_diameter_m,
            "simulation complete"
        );

        Ok(ImpactResult { matching, impact })
    }

    /// Physics only: validate `scenario` and assess it without a catalog.
    pub fn assess(&self, scenario: &UserScenario) -> Result<ImpactAssessment, ScenarioError> {
        let inputs = scenario.resolve(self.config.tsunami.default_water_depth_m)?;
        Ok(self.assess_inputs(inputs))
    }

    fn assess_inputs(&self, inputs: ScenarioInputs) -> ImpactAssessment {
        let joules = energy_joules(inputs.diameter_m, inputs.impactor_density_kg_m3, inputs.speed_m_s);
        let energy = EnergyBlock {
            joules,
            megatons_tnt: megatons_tnt(joules),
        };

        let crater = CraterGeometry::compute(
            inputs.diameter_m,
            inputs.impactor_density_kg_m3,
            inputs.target_density_kg_m3,
            inputs.speed_m_s,
            inputs.entry_angle_deg,
            inputs.target_type,
            inputs.elevation_m,
        );

        let mut summary = ImpactSummary {
            crater: CraterReach::from_final_diameter(crater.final_diameter_m),
            tsunami: None,
            seismic: None,
        };

        let (seismic, tsunami) = match inputs.target_type {
            TargetType::Land => {
                let magnitude = seismic_magnitude(joules, inputs.elevation_m);
                let mmi_band = MmiBand::from_magnitude(magnitude);
                let profile: Vec<SeismicPoint> =
                    build_seismic_profile(magnitude, &self.config.seismic, self.config.max_rings)
                        .collect();
                summary.seismic = Some(SeismicReach::from_profile(&profile, &self.config.seismic));
                let block = SeismicBlock {
                    magnitude,
                    mmi_band,
                    mmi_label: mmi_band.label(),
                    profile,
                };
                (Some(block), None)
            }
            TargetType::Ocean => {
                let water_depth_m = inputs
                    .water_depth_m
                    .unwrap_or(self.config.tsunami.default_water_depth_m);
                let profile: Vec<TsunamiPoint> = build_tsunami_profile(
                    crater.transient_diameter_m,
                    water_depth_m,
                    inputs.elevation_m,
                    &self.config.tsunami,
                    self.config.max_rings,
                )
                .collect();
                summary.tsunami = TsunamiReach::from_profile(&profile, &self.config.tsunami);
                (None, Some(profile))
            }
        };

        ImpactAssessment {
            inputs,
            energy,
            crater,
            seismic,
            tsunami,
            summary,
        }
    }
}

/// Run one simulation with the default configuration.
pub fn simulate(
    catalog: &[NeoRecord],
    scenario: &UserScenario,
) -> Result<ImpactResult, SimulationError> {
    Simulator::default().simulate(catalog, scenario)
}
