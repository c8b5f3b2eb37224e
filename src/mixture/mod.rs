// mixture/mod.rs
// Partial-volume mixing model for sucrose + water, plus the two calculation modes built on it

mod derived;
mod forward;
mod inverse;

pub use derived::*;
pub use forward::*;
pub use inverse::*;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::PhysicalConstants;
use crate::error::{ensure_finite, Result};
use crate::ratio::MassRatio;

/// Forward-computed description of a mixture made from known masses.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MixtureResult {
    /// Sugar + water, g.
    pub total_mass: f64,
    /// mL.
    pub final_volume: f64,
    /// g/mL, undefined for an empty mixture.
    pub density: Option<f64>,
    pub mass_fraction: Option<f64>,
    pub brix: Option<f64>,
}

/// Describe the syrup obtained by dissolving `sugar_mass` g of sucrose in
/// `water_mass` g of water.
pub fn describe_mixture(
    sugar_mass: f64,
    water_mass: f64,
    constants: &PhysicalConstants,
) -> Result<MixtureResult> {
    let final_volume = volume_from_masses(sugar_mass, water_mass, constants)?;
    let total_mass = ensure_finite("total_mass", sugar_mass + water_mass)?;
    let mass_fraction = mass_fraction_from_masses(sugar_mass, total_mass);

    let result = MixtureResult {
        total_mass,
        final_volume,
        density: density_from_mass_and_volume(total_mass, final_volume),
        mass_fraction,
        brix: brix_from_fraction(mass_fraction),
    };
    debug!(sugar_mass, water_mass, final_volume, "described mixture");
    Ok(result)
}

/// Everything needed to make a target volume of syrup at a given ratio.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SyrupPlan {
    pub ratio: MassRatio,
    pub mass_fraction: f64,
    pub brix: f64,
    pub masses: MixtureMasses,
    /// Volume of plain water to measure out for `masses.water_mass`, mL.
    pub water_volume: f64,
    /// Forward model evaluated on `masses`; equals the requested volume up to rounding.
    pub check_volume: f64,
    /// g/mL.
    pub density: f64,
}

/// Plan a batch of `final_volume` mL of syrup at the given sugar:water ratio.
pub fn plan_for_target(
    ratio: MassRatio,
    final_volume: f64,
    constants: &PhysicalConstants,
) -> Result<SyrupPlan> {
    let w = ratio.mass_fraction()?;
    let masses = masses_for_target_volume(final_volume, w, constants)?;
    let check_volume = volume_from_masses(masses.sugar_mass, masses.water_mass, constants)?;
    // check_volume > 0 because final_volume > 0 was enforced above
    let density = masses.total_mass / check_volume;

    debug!(%ratio, final_volume, total_mass = masses.total_mass, "planned syrup");
    Ok(SyrupPlan {
        ratio,
        mass_fraction: w,
        brix: 100.0 * w,
        masses,
        water_volume: masses.water_mass * constants.water_specific_volume(),
        check_volume,
        density,
    })
}
