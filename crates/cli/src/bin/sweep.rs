use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use meteor_madness::config::load_profile;
use meteor_madness::constants::{DEFAULT_DENSITY_KG_M3, VERTICAL_ANGLE_DEG};
use meteor_madness::export::table;
use meteor_madness::physics::{ImpactParameters, ScalingProfile, compute_impact_with};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Sweep a diameter/velocity grid and emit an impact table CSV"
)]
struct Cli {
    #[arg(long, default_value_t = 10.0)]
    diameter_min: f64,
    #[arg(long, default_value_t = 1000.0)]
    diameter_max: f64,
    #[arg(long, default_value_t = 25)]
    diameter_steps: usize,

    #[arg(long, default_value_t = 11.0)]
    velocity_min: f64,
    #[arg(long, default_value_t = 72.0)]
    velocity_max: f64,
    #[arg(long, default_value_t = 25)]
    velocity_steps: usize,

    /// Impact angle in degrees, fixed across the grid
    #[arg(long, default_value_t = VERTICAL_ANGLE_DEG)]
    angle: f64,

    /// Impactor bulk density in kg/m³, fixed across the grid
    #[arg(long, default_value_t = DEFAULT_DENSITY_KG_M3)]
    density: f64,

    /// Scaling-profile TOML file (defaults to built-in reference constants)
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Output CSV path, `-` for stdout
    #[arg(long, default_value = "-")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.diameter_steps < 2 || cli.velocity_steps < 2 {
        return Err(anyhow::anyhow!("grid needs at least 2 steps per axis"));
    }
    if cli.diameter_max <= cli.diameter_min || cli.velocity_max <= cli.velocity_min {
        return Err(anyhow::anyhow!("grid bounds must satisfy min < max"));
    }

    let profile = match &cli.profile {
        Some(path) => ScalingProfile::from(&load_profile(path)?),
        None => ScalingProfile::reference(),
    };

    let mut writer = table::writer_for_path(&cli.output)?;
    table::write_header(writer.as_mut())?;

    for i in 0..cli.diameter_steps {
        let diameter = grid_value(cli.diameter_min, cli.diameter_max, i, cli.diameter_steps);
        for j in 0..cli.velocity_steps {
            let velocity = grid_value(cli.velocity_min, cli.velocity_max, j, cli.velocity_steps);
            let params = ImpactParameters {
                diameter_m: diameter,
                velocity_km_s: velocity,
                angle_deg: cli.angle,
                density_kg_m3: cli.density,
            };
            let result = compute_impact_with(&profile, &params)?;
            table::Record {
                scenario: "grid",
                params: &params,
                result: &result,
            }
            .write_to(writer.as_mut())?;
        }
    }

    writer.flush()?;
    Ok(())
}

fn grid_value(min: f64, max: f64, index: usize, steps: usize) -> f64 {
    min + (max - min) * index as f64 / (steps - 1) as f64
}
