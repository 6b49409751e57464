//! Impact-effect calculator and supporting catalogs for the Meteor
//! Madness portal.
//!
//! The physics, configuration, NeoWs, and export crates are re-exported
//! here so multiple front-ends (CLI, plotting, web) share one surface.

pub use meteor_config as config;
pub use meteor_core::{constants, energy, units};
pub use meteor_export as export;
pub use meteor_neo as neo;
pub use meteor_physics as physics;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
