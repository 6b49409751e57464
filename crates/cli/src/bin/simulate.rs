use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use meteor_madness::config::{find_scenario, load_profile, load_scenarios};
use meteor_madness::constants::{DEFAULT_DENSITY_KG_M3, VERTICAL_ANGLE_DEG};
use meteor_madness::export::report;
use meteor_madness::neo;
use meteor_madness::physics::{ImpactParameters, ScalingProfile, compute_impact_with};

#[derive(Parser)]
#[command(author, version, about = "Asteroid impact calculator")]
struct Cli {
    /// Impactor diameter in metres (ignored with --scenario or --record)
    #[arg(long)]
    diameter: Option<f64>,

    /// Entry velocity in km/s (ignored with --scenario or --record)
    #[arg(long)]
    velocity: Option<f64>,

    /// Impact angle in degrees, (0, 90]
    #[arg(long, default_value_t = VERTICAL_ANGLE_DEG)]
    angle: f64,

    /// Impactor bulk density in kg/m³
    #[arg(long, default_value_t = DEFAULT_DENSITY_KG_M3)]
    density: f64,

    /// Named scenario from the catalog (case-insensitive)
    #[arg(long)]
    scenario: Option<String>,

    /// Scenario catalog path
    #[arg(long, default_value = "configs/scenarios.yaml")]
    catalog: PathBuf,

    /// NeoWs record JSON file; geometry comes from --angle/--density
    #[arg(long)]
    record: Option<PathBuf>,

    /// Scaling-profile TOML file (defaults to built-in reference constants)
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Write a JSON report to this path
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (label, params) = resolve_parameters(&cli)?;
    let (profile_label, profile) = match &cli.profile {
        Some(path) => {
            let cfg = load_profile(path)?;
            (path.display().to_string(), ScalingProfile::from(&cfg))
        }
        None => ("reference".to_string(), ScalingProfile::reference()),
    };

    let result = compute_impact_with(&profile, &params)?;

    println!("=== Impact Summary ===");
    println!("Scenario       : {}", label);
    println!(
        "Impactor       : d = {:.0} m, v = {:.2} km/s, angle = {:.0}°, density = {:.0} kg/m³",
        params.diameter_m, params.velocity_km_s, params.angle_deg, params.density_kg_m3
    );
    println!(
        "Energy         : {:.2} Mt TNT",
        result.kinetic_energy_megatons
    );
    println!(
        "Crater         : diameter = {:.2} km, depth = {:.2} km",
        result.crater_diameter_km, result.crater_depth_km
    );
    println!("Fireball       : {:.2} km", result.fireball_radius_km);
    println!("Blast wave     : {:.2} km", result.blast_radius_km);
    println!(
        "Thermal        : {:.2} km",
        result.thermal_radiation_radius_km
    );
    println!("Seismic        : M {:.1}", result.seismic_magnitude);

    if let Some(path) = &cli.json {
        let meta = report::Metadata {
            scenario: &label,
            profile: &profile_label,
        };
        report::write_report(path, &meta, &params, &result)?;
        println!("Report written : {}", path.display());
    }

    Ok(())
}

fn resolve_parameters(cli: &Cli) -> anyhow::Result<(String, ImpactParameters)> {
    if let Some(path) = &cli.record {
        let record = neo::parse_record(File::open(path)?)?;
        let params = neo::impact_parameters(&record, cli.angle, cli.density)?;
        return Ok((record.name.clone(), params));
    }

    if let Some(name) = &cli.scenario {
        let catalog = load_scenarios(&cli.catalog)?;
        let scenario = find_scenario(&catalog, name)?;
        return Ok((scenario.name.clone(), ImpactParameters::from(scenario)));
    }

    let diameter = cli
        .diameter
        .ok_or_else(|| anyhow::anyhow!("--diameter is required without --scenario or --record"))?;
    let velocity = cli
        .velocity
        .ok_or_else(|| anyhow::anyhow!("--velocity is required without --scenario or --record"))?;

    Ok((
        "ad-hoc".to_string(),
        ImpactParameters {
            diameter_m: diameter,
            velocity_km_s: velocity,
            angle_deg: cli.angle,
            density_kg_m3: cli.density,
        },
    ))
}
