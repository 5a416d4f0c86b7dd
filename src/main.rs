//! PHA Impact - command-line impact scenario runner
//!
//! Loads a NeoWs catalog, matches the requested impactor against it and
//! prints the impact assessment as pretty JSON on stdout. Logs go to stderr.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pha_impact::scenarios::{PRESETS, find_preset};
use pha_impact::{SimulationConfig, Simulator, TargetType, UserScenario, load_catalog};

#[derive(Parser, Debug)]
#[command(name = "pha-impact", version, about = "Hazardous asteroid impact scenarios")]
struct Cli {
    /// NeoWs catalog JSON (record array, browse page or feed page)
    #[arg(long, required_unless_present = "list_presets")]
    catalog: Option<PathBuf>,
    /// Run a named preset instead of --diameter/--speed/--angle/--target
    #[arg(long, conflicts_with_all = ["diameter", "speed", "angle", "target"])]
    preset: Option<String>,
    /// Impactor diameter in meters
    #[arg(long)]
    diameter: Option<f64>,
    /// Impact speed in m/s
    #[arg(long)]
    speed: Option<f64>,
    /// Entry angle from horizontal in degrees
    #[arg(long)]
    angle: Option<f64>,
    /// Target surface
    #[arg(long, value_enum, ignore_case = true)]
    target: Option<TargetType>,
    /// Site elevation in meters
    #[arg(long, allow_negative_numbers = true)]
    elevation: Option<f64>,
    /// Water depth in meters (ocean targets)
    #[arg(long)]
    water_depth: Option<f64>,
    /// Impactor bulk density in kg/m³
    #[arg(long)]
    impactor_density: Option<f64>,
    /// Target bulk density in kg/m³
    #[arg(long)]
    target_density: Option<f64>,
    /// TOML file overriding simulation tunables
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print the available presets and exit
    #[arg(long, default_value_t = false)]
    list_presets: bool,
}

impl Cli {
    fn scenario(&self) -> Result<UserScenario> {
        let mut scenario = match &self.preset {
            Some(id) => {
                find_preset(id)
                    .with_context(|| format!("unknown preset '{id}' (see --list-presets)"))?
                    .scenario
            }
            None => {
                let (Some(d), Some(v), Some(angle), Some(target)) =
                    (self.diameter, self.speed, self.angle, self.target)
                else {
                    bail!("either --preset or all of --diameter, --speed, --angle and --target are required");
                };
                match target {
                    TargetType::Land => UserScenario::land(d, v, angle),
                    TargetType::Ocean => UserScenario::ocean(d, v, angle),
                }
            }
        };

        if let Some(e) = self.elevation {
            scenario = scenario.with_elevation(e);
        }
        if let Some(h) = self.water_depth {
            scenario = scenario.with_water_depth(h);
        }
        if let Some(rho) = self.impactor_density {
            scenario.impactor_density_kg_m3 = rho;
        }
        if let Some(rho) = self.target_density {
            scenario.target_density_kg_m3 = rho;
        }
        Ok(scenario)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.list_presets {
        for preset in PRESETS {
            println!("{:<22} {:<22} {}", preset.id, preset.name, preset.description);
        }
        return Ok(());
    }

    let scenario = cli.scenario()?;
    let config = match &cli.config {
        Some(path) => SimulationConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SimulationConfig::default(),
    };

    let catalog_path = cli
        .catalog
        .as_ref()
        .context("--catalog is required")?;
    let catalog = load_catalog(catalog_path)
        .with_context(|| format!("loading catalog {}", catalog_path.display()))?;

    let result = Simulator::new(config).simulate(&catalog, &scenario)?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
