//! The impact calculator proper: parameters, result record, validation.

use std::f64::consts::PI;

use thiserror::Error;

use meteor_core::{energy, units};

use crate::profile::ScalingProfile;

/// Physical description of an impactor, consumed per call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactParameters {
    /// Impactor diameter in metres. Must be positive and finite.
    pub diameter_m: f64,
    /// Entry velocity in km/s. Must be positive and finite.
    pub velocity_km_s: f64,
    /// Impact angle in degrees, in (0, 90]; 90 is a vertical impact.
    pub angle_deg: f64,
    /// Bulk density in kg/m³. Must be positive and finite.
    pub density_kg_m3: f64,
}

/// Estimated impact effects. All fields are finite and non-negative for
/// any valid input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactResult {
    /// TNT-equivalent released energy, scaled by the vertical component
    /// of the entry velocity.
    pub kinetic_energy_megatons: f64,
    /// Estimated final crater diameter (km).
    pub crater_diameter_km: f64,
    /// Crater depth (km), a fixed fraction of the crater diameter.
    pub crater_depth_km: f64,
    /// Radius of severe blast-wave damage (km).
    pub blast_radius_km: f64,
    /// Radius of significant thermal radiation exposure (km).
    pub thermal_radiation_radius_km: f64,
    /// Equivalent earthquake magnitude.
    pub seismic_magnitude: f64,
    /// Radius of the initial fireball (km).
    pub fireball_radius_km: f64,
}

/// Raised when an input violates the documented domain constraints.
///
/// Out-of-domain values fail; they are never silently clamped. Each
/// variant names the offending field and carries the rejected value.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum InvalidParameterError {
    #[error("diameter must be a positive, finite number of metres (got {0})")]
    Diameter(f64),
    #[error("velocity must be a positive, finite number of km/s (got {0})")]
    Velocity(f64),
    #[error("impact angle must be a finite number in (0, 90] degrees (got {0})")]
    Angle(f64),
    #[error("density must be a positive, finite number of kg/m³ (got {0})")]
    Density(f64),
}

impl ImpactParameters {
    /// Check every domain constraint, reporting the first violation.
    pub fn validate(&self) -> Result<(), InvalidParameterError> {
        if !self.diameter_m.is_finite() || self.diameter_m <= 0.0 {
            return Err(InvalidParameterError::Diameter(self.diameter_m));
        }
        if !self.velocity_km_s.is_finite() || self.velocity_km_s <= 0.0 {
            return Err(InvalidParameterError::Velocity(self.velocity_km_s));
        }
        if !self.angle_deg.is_finite() || self.angle_deg <= 0.0 || self.angle_deg > 90.0 {
            return Err(InvalidParameterError::Angle(self.angle_deg));
        }
        if !self.density_kg_m3.is_finite() || self.density_kg_m3 <= 0.0 {
            return Err(InvalidParameterError::Density(self.density_kg_m3));
        }
        Ok(())
    }

    /// Impactor mass (kg), treating the body as a sphere.
    pub fn mass_kg(&self) -> f64 {
        let radius_m = self.diameter_m / 2.0;
        let volume_m3 = (4.0 / 3.0) * PI * radius_m.powi(3);
        volume_m3 * self.density_kg_m3
    }
}

/// Compute impact effects with the reference scaling profile.
pub fn compute_impact(params: &ImpactParameters) -> Result<ImpactResult, InvalidParameterError> {
    compute_impact_with(&ScalingProfile::reference(), params)
}

/// Compute impact effects with an explicit scaling profile.
///
/// The TNT-equivalent energy is the spherical impactor's kinetic energy
/// scaled by sin(angle), so a vertical impact releases the full energy.
/// Every downstream quantity is a function of that effective energy alone
/// (plus the impactor diameter, for the crater), so equal energies always
/// produce equal radii.
pub fn compute_impact_with(
    profile: &ScalingProfile,
    params: &ImpactParameters,
) -> Result<ImpactResult, InvalidParameterError> {
    params.validate()?;

    let velocity_m_s = units::kms_to_ms(params.velocity_km_s);
    let energy_joules = 0.5 * params.mass_kg() * velocity_m_s * velocity_m_s;
    let energy_mt =
        energy::joules_to_megatons(energy_joules) * units::deg_to_rad(params.angle_deg).sin();

    let crater_diameter_km = profile.crater_coefficient
        * units::m_to_km(params.diameter_m)
        * energy_mt.powf(profile.crater_exponent);

    Ok(ImpactResult {
        kinetic_energy_megatons: energy_mt,
        crater_diameter_km,
        crater_depth_km: profile.crater_depth_ratio * crater_diameter_km,
        blast_radius_km: profile.blast_coefficient * energy_mt.powf(profile.blast_exponent),
        thermal_radiation_radius_km: profile.thermal_coefficient
            * energy_mt.powf(profile.thermal_exponent),
        seismic_magnitude: profile.seismic_slope * energy_mt.powf(profile.seismic_exponent)
            + profile.seismic_offset,
        fireball_radius_km: profile.fireball_coefficient
            * energy_mt.powf(profile.fireball_exponent),
    })
}
