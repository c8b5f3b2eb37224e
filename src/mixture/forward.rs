// mixture/forward.rs
// Forward model: masses -> final volume, and mass + volume -> density

use tracing::trace;

use crate::constants::PhysicalConstants;
use crate::error::{ensure_finite, Result, SyrupError};

/// Final volume (mL) of a sucrose solution made from the given masses (g).
///
/// Water contributes its ordinary volume `m_water / ρ_water`; dissolved sugar
/// contributes `m_sugar · v_sugar` with the partial specific volume, which is
/// what makes the result smaller than the sum of the unmixed volumes.
/// Both masses zero is a valid degenerate input and yields 0.
pub fn volume_from_masses(
    sugar_mass: f64,
    water_mass: f64,
    constants: &PhysicalConstants,
) -> Result<f64> {
    constants.validate()?;
    ensure_finite("sugar_mass", sugar_mass)?;
    ensure_finite("water_mass", water_mass)?;
    if sugar_mass < 0.0 || water_mass < 0.0 {
        return Err(SyrupError::invalid(format!(
            "masses must be non-negative, got sugar {sugar_mass} g, water {water_mass} g"
        )));
    }

    let volume = ensure_finite(
        "final_volume",
        water_mass / constants.water_density + sugar_mass * constants.sucrose_specific_volume,
    )?;
    trace!(sugar_mass, water_mass, volume, "forward volume");
    Ok(volume)
}

/// Solution density (g/mL). `None` when the volume is not positive, which
/// happens legitimately for an empty mixture, or when the quotient is not finite.
pub fn density_from_mass_and_volume(total_mass: f64, final_volume: f64) -> Option<f64> {
    if final_volume > 0.0 {
        Some(total_mass / final_volume).filter(|rho| rho.is_finite())
    } else {
        None
    }
}
