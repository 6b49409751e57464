//! Configuration models and loaders for scenario catalogs and scaling
//! profiles.

use std::fs::File;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use meteor_core::constants::{DEFAULT_DENSITY_KG_M3, VERTICAL_ANGLE_DEG};
use meteor_physics::{ImpactParameters, ScalingProfile};

/// Impact scenario parsed from a YAML catalog.
#[derive(Debug, Deserialize, Clone)]
pub struct ScenarioConfig {
    pub name: String,
    pub diameter_m: f64,
    pub velocity_km_s: f64,
    #[serde(default = "default_angle")]
    pub angle_deg: f64,
    #[serde(default = "default_density")]
    pub density_kg_m3: f64,
}

fn default_angle() -> f64 {
    VERTICAL_ANGLE_DEG
}

fn default_density() -> f64 {
    DEFAULT_DENSITY_KG_M3
}

impl From<&ScenarioConfig> for ImpactParameters {
    fn from(cfg: &ScenarioConfig) -> Self {
        ImpactParameters {
            diameter_m: cfg.diameter_m,
            velocity_km_s: cfg.velocity_km_s,
            angle_deg: cfg.angle_deg,
            density_kg_m3: cfg.density_kg_m3,
        }
    }
}

/// Scaling-profile constants parsed from a TOML file.
///
/// Field-for-field mirror of [`ScalingProfile`], kept separate so catalog
/// files stay decoupled from the runtime representation.
#[derive(Debug, Deserialize, Clone)]
pub struct ProfileConfig {
    pub crater_coefficient: f64,
    pub crater_exponent: f64,
    pub crater_depth_ratio: f64,
    pub fireball_coefficient: f64,
    pub fireball_exponent: f64,
    pub blast_coefficient: f64,
    pub blast_exponent: f64,
    pub thermal_coefficient: f64,
    pub thermal_exponent: f64,
    pub seismic_slope: f64,
    pub seismic_exponent: f64,
    pub seismic_offset: f64,
}

impl From<&ProfileConfig> for ScalingProfile {
    fn from(cfg: &ProfileConfig) -> Self {
        ScalingProfile {
            crater_coefficient: cfg.crater_coefficient,
            crater_exponent: cfg.crater_exponent,
            crater_depth_ratio: cfg.crater_depth_ratio,
            fireball_coefficient: cfg.fireball_coefficient,
            fireball_exponent: cfg.fireball_exponent,
            blast_coefficient: cfg.blast_coefficient,
            blast_exponent: cfg.blast_exponent,
            thermal_coefficient: cfg.thermal_coefficient,
            thermal_exponent: cfg.thermal_exponent,
            seismic_slope: cfg.seismic_slope,
            seismic_exponent: cfg.seismic_exponent,
            seismic_offset: cfg.seismic_offset,
        }
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("scenario '{0}' not found in catalog")]
    ScenarioNotFound(String),
}

/// Load a scenario catalog from a YAML file.
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<ScenarioConfig>, ConfigError> {
    let reader = File::open(path)?;
    Ok(serde_yaml::from_reader(reader)?)
}

/// Load a scaling profile from a TOML file.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<ProfileConfig, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

/// Select a scenario from the catalog by case-insensitive name.
pub fn find_scenario<'a>(
    catalog: &'a [ScenarioConfig],
    name: &str,
) -> Result<&'a ScenarioConfig, ConfigError> {
    let upper = name.to_uppercase();
    catalog
        .iter()
        .find(|s| s.name.to_uppercase() == upper)
        .ok_or_else(|| ConfigError::ScenarioNotFound(name.to_string()))
}
