//! Named scaling constants for the impact-effect formulas.
//!
//! The crater law and every damage radius are empirical power laws of the
//! TNT-equivalent energy, not derived from a cited physical model. The
//! coefficients and exponents are therefore grouped into a profile that can
//! be swapped or recalibrated without touching the calculator itself.

/// Constant set driving the crater and damage-radius power laws.
///
/// Crater diameter (km) is `crater_coefficient * diameter_km *
/// energy_mt^crater_exponent`; each radius (km) is `coefficient *
/// energy_mt^exponent`; seismic magnitude is `seismic_slope *
/// energy_mt^seismic_exponent + seismic_offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalingProfile {
    pub crater_coefficient: f64,
    pub crater_exponent: f64,
    /// Crater depth as a fraction of crater diameter.
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

impl ScalingProfile {
    /// Reference constant set.
    ///
    /// Radii and seismic terms follow the portal's backend service; the
    /// crater law keeps the documented energy/size power-law shape with the
    /// coefficient calibrated so a 100 m stony impactor at 20 km/s opens a
    /// roughly half-kilometre crater.
    pub const fn reference() -> Self {
        Self {
            crater_coefficient: 1.8,
            crater_exponent: 0.25,
            crater_depth_ratio: 0.2,
            fireball_coefficient: 0.28,
            fireball_exponent: 0.33,
            blast_coefficient: 1.2,
            blast_exponent: 0.33,
            thermal_coefficient: 2.5,
            thermal_exponent: 0.41,
            seismic_slope: 0.67,
            seismic_exponent: 0.33,
            seismic_offset: 3.87,
        }
    }

    /// Constant set of the browser front end, for comparison runs.
    ///
    /// That variant computed only a crater diameter (`0.1 * diameter_m *
    /// energy^0.25`, restated here with the diameter in km) and a single
    /// blast-style damage radius (`2 * energy^0.33`). Quantities it never
    /// produced fall back to the reference constants.
    pub const fn portal() -> Self {
        Self {
            crater_coefficient: 100.0,
            crater_exponent: 0.25,
            crater_depth_ratio: 0.2,
            fireball_coefficient: 0.28,
            fireball_exponent: 0.33,
            blast_coefficient: 2.0,
            blast_exponent: 0.33,
            thermal_coefficient: 2.5,
            thermal_exponent: 0.41,
            seismic_slope: 0.67,
            seismic_exponent: 0.33,
            seismic_offset: 3.87,
        }
    }
}

impl Default for ScalingProfile {
    fn default() -> Self {
        Self::reference()
    }
}
