//! Unit definitions and conversions.
//!
//! Base units:
//! - Volume: millilitre (mL)
//! - Mass: gram (g)
//! - Density: g/mL

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SyrupError;

/// Millilitres in one litre.
pub const ML_PER_L: f64 = 1000.0;
/// Grams in one kilogram.
pub const G_PER_KG: f64 = 1000.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    #[default]
    #[serde(rename = "mL", alias = "ml")]
    Milliliter,
    #[serde(rename = "L", alias = "l")]
    Liter,
}

impl VolumeUnit {
    /// Convert a value expressed in this unit to millilitres.
    pub fn to_milliliters(self, value: f64) -> f64 {
        match self {
            VolumeUnit::Milliliter => value,
            VolumeUnit::Liter => value * ML_PER_L,
        }
    }
}

impl FromStr for VolumeUnit {
    type Err = SyrupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ml" => Ok(VolumeUnit::Milliliter),
            "l" => Ok(VolumeUnit::Liter),
            _ => Err(SyrupError::invalid(format!("unknown volume unit: {s}"))),
        }
    }
}

impl fmt::Display for VolumeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VolumeUnit::Milliliter => write!(f, "mL"),
            VolumeUnit::Liter => write!(f, "L"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassUnit {
    #[default]
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "kg")]
    Kilogram,
}

impl MassUnit {
    /// Convert a value expressed in this unit to grams.
    pub fn to_grams(self, value: f64) -> f64 {
        match self {
            MassUnit::Gram => value,
            MassUnit::Kilogram => value * G_PER_KG,
        }
    }
}

impl FromStr for MassUnit {
    type Err = SyrupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "g" => Ok(MassUnit::Gram),
            "kg" => Ok(MassUnit::Kilogram),
            _ => Err(SyrupError::invalid(format!("unknown mass unit: {s}"))),
        }
    }
}

impl fmt::Display for MassUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MassUnit::Gram => write!(f, "g"),
            MassUnit::Kilogram => write!(f, "kg"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn liters_convert_to_milliliters() {
        assert_eq!(VolumeUnit::Liter.to_milliliters(1.5), 1500.0);
        assert_eq!(VolumeUnit::Milliliter.to_milliliters(250.0), 250.0);
    }

    #[test]
    fn kilograms_convert_to_grams() {
        assert_eq!(MassUnit::Kilogram.to_grams(0.75), 750.0);
        assert_eq!(MassUnit::Gram.to_grams(12.0), 12.0);
    }

    #[test]
    fn unit_parsing_is_case_insensitive() {
        assert_eq!("mL".parse::<VolumeUnit>().unwrap(), VolumeUnit::Milliliter);
        assert_eq!("L".parse::<VolumeUnit>().unwrap(), VolumeUnit::Liter);
        assert_eq!("KG".parse::<MassUnit>().unwrap(), MassUnit::Kilogram);
        assert!("cup".parse::<VolumeUnit>().is_err());
        assert!("lb".parse::<MassUnit>().is_err());
    }
}
