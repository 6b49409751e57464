//! Typed model of NASA NeoWs near-Earth-object records.
//!
//! Covers the feed envelope and the record fields the calculator cares
//! about. Fetching the feed is out of scope; callers hand in JSON they
//! obtained elsewhere. NeoWs encodes velocities and miss distances as
//! decimal strings, so those parse on demand.

use std::collections::BTreeMap;
use std::io::Read;

use serde::Deserialize;
use thiserror::Error;

use meteor_physics::ImpactParameters;

/// Envelope returned by the NeoWs `feed` endpoint, keyed by date.
#[derive(Debug, Deserialize, Clone)]
pub struct NeoFeed {
    pub near_earth_objects: BTreeMap<String, Vec<NeoRecord>>,
}

impl NeoFeed {
    /// All records in the feed, in date order.
    pub fn asteroids(&self) -> impl Iterator<Item = &NeoRecord> {
        self.near_earth_objects.values().flatten()
    }
}

/// A single near-Earth-object record.
#[derive(Debug, Deserialize, Clone)]
pub struct NeoRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub absolute_magnitude_h: Option<f64>,
    pub estimated_diameter: EstimatedDiameter,
    pub is_potentially_hazardous_asteroid: bool,
    #[serde(default)]
    pub close_approach_data: Vec<CloseApproach>,
}

/// Diameter bounds in metres.
#[derive(Debug, Deserialize, Clone)]
pub struct EstimatedDiameter {
    pub meters: DiameterRange,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DiameterRange {
    pub estimated_diameter_min: f64,
    pub estimated_diameter_max: f64,
}

/// One close-approach event of a record.
#[derive(Debug, Deserialize, Clone)]
pub struct CloseApproach {
    #[serde(default)]
    pub close_approach_date: Option<String>,
    pub relative_velocity: RelativeVelocity,
    pub miss_distance: MissDistance,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RelativeVelocity {
    pub kilometers_per_second: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MissDistance {
    pub kilometers: String,
}

/// Errors surfaced while reading a feed or deriving parameters.
#[derive(Debug, Error)]
pub enum NeoError {
    #[error("failed to parse NeoWs JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("record '{0}' has no close-approach data")]
    MissingCloseApproach(String),
    #[error("record '{name}' carries an unparseable figure '{value}'")]
    InvalidFigure {
        name: String,
        value: String,
        source: std::num::ParseFloatError,
    },
}

/// Parse a feed envelope from a JSON reader.
pub fn parse_feed<R: Read>(reader: R) -> Result<NeoFeed, NeoError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Parse a single record from a JSON reader.
pub fn parse_record<R: Read>(reader: R) -> Result<NeoRecord, NeoError> {
    Ok(serde_json::from_reader(reader)?)
}

impl NeoRecord {
    /// Mean of the estimated diameter bounds (m).
    pub fn mean_diameter_m(&self) -> f64 {
        let range = &self.estimated_diameter.meters;
        0.5 * (range.estimated_diameter_min + range.estimated_diameter_max)
    }

    /// Relative velocity of the first close approach (km/s).
    pub fn approach_velocity_km_s(&self) -> Result<f64, NeoError> {
        let approach = self
            .close_approach_data
            .first()
            .ok_or_else(|| NeoError::MissingCloseApproach(self.name.clone()))?;
        parse_figure(&self.name, &approach.relative_velocity.kilometers_per_second)
    }

    /// Miss distance of the first close approach (km).
    pub fn miss_distance_km(&self) -> Result<f64, NeoError> {
        let approach = self
            .close_approach_data
            .first()
            .ok_or_else(|| NeoError::MissingCloseApproach(self.name.clone()))?;
        parse_figure(&self.name, &approach.miss_distance.kilometers)
    }
}

/// Derive calculator input from a record, supplying the impact geometry
/// and bulk density the feed does not carry.
pub fn impact_parameters(
    record: &NeoRecord,
    angle_deg: f64,
    density_kg_m3: f64,
) -> Result<ImpactParameters, NeoError> {
    Ok(ImpactParameters {
        diameter_m: record.mean_diameter_m(),
        velocity_km_s: record.approach_velocity_km_s()?,
        angle_deg,
        density_kg_m3,
    })
}

fn parse_figure(name: &str, value: &str) -> Result<f64, NeoError> {
    value.parse().map_err(|source| NeoError::InvalidFigure {
        name: name.to_string(),
        value: value.to_string(),
        source,
    })
}
