//! Core constants and shared unit helpers for the Meteor Madness workspace.

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Joules released by one megaton of TNT.
    pub const JOULES_PER_MEGATON: f64 = 4.184e15;
    /// Default impactor bulk density (kg/m³), typical stony asteroid.
    pub const DEFAULT_DENSITY_KG_M3: f64 = 2_600.0;
    /// Vertical impact angle (degrees).
    pub const VERTICAL_ANGLE_DEG: f64 = 90.0;
    /// Mean Earth radius (km), upper bound for any meaningful damage radius.
    pub const EARTH_RADIUS_KM: f64 = 6_371.0;
}

/// Basic unit conversion helpers.
pub mod units {
    use std::f64::consts::PI;

    /// Convert metres to kilometres.
    #[inline]
    pub fn m_to_km(v: f64) -> f64 {
        v / 1_000.0
    }

    /// Convert kilometres to metres.
    #[inline]
    pub fn km_to_m(v: f64) -> f64 {
        v * 1_000.0
    }

    /// Convert kilometres per second to metres per second.
    #[inline]
    pub fn kms_to_ms(v: f64) -> f64 {
        v * 1_000.0
    }

    /// Convert degrees to radians.
    #[inline]
    pub fn deg_to_rad(v: f64) -> f64 {
        v * PI / 180.0
    }
}

/// Energy conversion helpers.
pub mod energy {
    use super::constants::JOULES_PER_MEGATON;

    /// Convert joules to megatons of TNT equivalent.
    #[inline]
    pub fn joules_to_megatons(j: f64) -> f64 {
        j / JOULES_PER_MEGATON
    }

    /// Convert megatons of TNT equivalent to joules.
    #[inline]
    pub fn megatons_to_joules(mt: f64) -> f64 {
        mt * JOULES_PER_MEGATON
    }
}
