// Reference physical constants for sucrose + water at 20 °C

use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, Result, SyrupError};

// ====================
// Reference values (20 °C)
// ====================
/// Density of water at 20 °C in g/mL.
pub const RHO_WATER_20C: f64 = 0.9982;
/// Partial specific volume of sucrose dissolved in water in mL/g.
/// Literature values sit around 0.630–0.635 mL/g; 0.632 is the central value.
pub const V_SUCROSE_PARTIAL: f64 = 0.632;

/// The pair of constants the mixing model is evaluated with.
///
/// Passed explicitly into every model call so that callers can override the
/// reference values without any global state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalConstants {
    /// Water density in g/mL.
    pub water_density: f64,
    /// Sucrose partial specific volume in mL/g.
    pub sucrose_specific_volume: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            water_density: RHO_WATER_20C,
            sucrose_specific_volume: V_SUCROSE_PARTIAL,
        }
    }
}

impl PhysicalConstants {
    /// Build a validated pair of constants. Both values must be finite and > 0.
    pub fn new(water_density: f64, sucrose_specific_volume: f64) -> Result<Self> {
        let constants = Self { water_density, sucrose_specific_volume };
        constants.validate()?;
        Ok(constants)
    }

    /// Check the positivity invariant. Deserialized values bypass `new`, so
    /// config loaders call this after parsing.
    pub fn validate(&self) -> Result<()> {
        ensure_finite("water_density", self.water_density)?;
        ensure_finite("sucrose_specific_volume", self.sucrose_specific_volume)?;
        if self.water_density <= 0.0 {
            return Err(SyrupError::invalid(format!(
                "water_density must be > 0, got {}",
                self.water_density
            )));
        }
        if self.sucrose_specific_volume <= 0.0 {
            return Err(SyrupError::invalid(format!(
                "sucrose_specific_volume must be > 0, got {}",
                self.sucrose_specific_volume
            )));
        }
        Ok(())
    }

    /// Volume of one gram of pure water, 1/ρ_water, in mL/g.
    pub fn water_specific_volume(&self) -> f64 {
        1.0 / self.water_density
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_values() {
        let c = PhysicalConstants::default();
        assert_eq!(c.water_density, 0.9982);
        assert_eq!(c.sucrose_specific_volume, 0.632);
    }

    #[test]
    fn non_positive_constants_are_rejected() {
        assert!(PhysicalConstants::new(0.0, 0.632).is_err());
        assert!(PhysicalConstants::new(0.9982, -0.1).is_err());
        assert!(PhysicalConstants::new(f64::NAN, 0.632).is_err());
        assert!(PhysicalConstants::new(1.0, 0.62).is_ok());
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let c: PhysicalConstants = toml::from_str("water_density = 0.9970").unwrap();
        assert_eq!(c.water_density, 0.9970);
        assert_eq!(c.sucrose_specific_volume, V_SUCROSE_PARTIAL);
    }
}
