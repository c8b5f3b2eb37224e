//! Exact sugar-syrup formulation with volume contraction.
//!
//! Sucrose dissolved in water occupies its *partial specific volume*, so the
//! syrup volume is not the sum of the component volumes. This crate models
//! that at the 20 °C reference point and answers both directions:
//! target volume + ratio -> masses, and masses -> volume, density and °Brix.

pub mod batch;
pub mod batch_config;
pub mod constants;
pub mod error;
pub mod format;
pub mod mixture;
pub mod presets;
pub mod ratio;
pub mod units;

pub use constants::PhysicalConstants;
pub use error::{ConfigError, SyrupError};
pub use mixture::{
    brix_from_fraction, density_from_mass_and_volume, describe_mixture,
    mass_fraction_from_masses, masses_for_target_volume, plan_for_target, volume_from_masses,
    MixtureMasses, MixtureResult, SyrupPlan,
};
pub use ratio::{fraction_from_ratio, MassRatio};
