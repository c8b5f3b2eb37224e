// mixture/inverse.rs
// Inverse model: target final volume + sugar mass fraction -> masses

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::constants::PhysicalConstants;
use crate::error::{ensure_finite, Result, SyrupError};

/// Masses (g) that make up one mixture.
///
/// Invariant: `total_mass == sugar_mass + water_mass` and
/// `sugar_mass == w * total_mass` for the fraction that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MixtureMasses {
    pub total_mass: f64,
    pub sugar_mass: f64,
    pub water_mass: f64,
}

/// Volume (mL) occupied by one gram of solution with sugar fraction `w`:
/// `w · v_sugar + (1 - w) / ρ_water`. Strictly positive for valid inputs.
pub fn specific_volume_of_solution(w: f64, constants: &PhysicalConstants) -> f64 {
    w * constants.sucrose_specific_volume + (1.0 - w) / constants.water_density
}

/// Exact sugar and water masses that yield `final_volume` mL of syrup with
/// sugar mass fraction `w`.
///
/// `V = M · (w · v_sugar + (1 - w) / ρ_water)`, solved for `M`.
pub fn masses_for_target_volume(
    final_volume: f64,
    w: f64,
    constants: &PhysicalConstants,
) -> Result<MixtureMasses> {
    constants.validate()?;
    ensure_finite("final_volume", final_volume)?;
    ensure_finite("mass_fraction", w)?;
    if final_volume <= 0.0 {
        return Err(SyrupError::invalid(format!(
            "final volume must be > 0, got {final_volume} mL"
        )));
    }
    if !(0.0..=1.0).contains(&w) {
        return Err(SyrupError::invalid(format!(
            "mass fraction must be within [0, 1], got {w}"
        )));
    }

    let denom = specific_volume_of_solution(w, constants);
    let total_mass = ensure_finite("total_mass", final_volume / denom)?;
    let masses = MixtureMasses {
        total_mass,
        sugar_mass: w * total_mass,
        water_mass: (1.0 - w) * total_mass,
    };
    trace!(final_volume, w, denom, total_mass, "inverse masses");
    Ok(masses)
}
