//! Impact-effect calculator: maps asteroid physical parameters to
//! TNT-equivalent energy, crater dimensions, and damage radii.
//!
//! The calculator is a pure function over plain value types. Callers may
//! invoke it from any thread, repeatedly and concurrently; identical input
//! always yields an identical result.

pub mod impact;
pub mod profile;

pub use impact::{
    ImpactParameters, ImpactResult, InvalidParameterError, compute_impact, compute_impact_with,
};
pub use profile::ScalingProfile;
