// ratio.rs
// Sugar:water mass ratios and their conversion to a sugar mass fraction

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, Result, SyrupError};

/// A by-mass proportion of sugar to water, e.g. 2:1 for a rich syrup.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MassRatio {
    pub sugar_parts: f64,
    pub water_parts: f64,
}

impl MassRatio {
    /// Build a ratio, rejecting negative parts and the 0:0 ratio.
    pub fn new(sugar_parts: f64, water_parts: f64) -> Result<Self> {
        check_parts(sugar_parts, water_parts)?;
        Ok(Self { sugar_parts, water_parts })
    }

    /// Sugar mass fraction w = sugar / (sugar + water).
    pub fn mass_fraction(&self) -> Result<f64> {
        fraction_from_ratio(self.sugar_parts, self.water_parts)
    }
}

impl fmt::Display for MassRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.sugar_parts, self.water_parts)
    }
}

/// Parses the literal `sugar:water` form, e.g. `"1:1"` or `"1.5:1"`.
impl FromStr for MassRatio {
    type Err = SyrupError;

    fn from_str(s: &str) -> Result<Self> {
        let (sugar, water) = s
            .split_once(':')
            .ok_or_else(|| SyrupError::invalid(format!("ratio must look like sugar:water, got {s:?}")))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<f64>()
                .map_err(|_| SyrupError::invalid(format!("not a number in ratio {s:?}: {part:?}")))
        };
        MassRatio::new(parse(sugar)?, parse(water)?)
    }
}

fn check_parts(sugar_parts: f64, water_parts: f64) -> Result<()> {
    ensure_finite("sugar_parts", sugar_parts)?;
    ensure_finite("water_parts", water_parts)?;
    if sugar_parts < 0.0 || water_parts < 0.0 {
        return Err(SyrupError::invalid(format!(
            "ratio parts must be non-negative, got {sugar_parts}:{water_parts}"
        )));
    }
    if sugar_parts.max(water_parts) <= 0.0 {
        return Err(SyrupError::invalid("ratio 0:0 has no mass fraction"));
    }
    Ok(())
}

/// Convert a sugar:water mass ratio into the sugar mass fraction w in [0, 1].
///
/// `(1, 1)` gives 0.5, `(2, 1)` gives 2/3, `(0, x)` gives 0 and `(x, 0)` gives 1.
pub fn fraction_from_ratio(sugar_parts: f64, water_parts: f64) -> Result<f64> {
    check_parts(sugar_parts, water_parts)?;
    // Scale both parts into [0, 1] first so the sum cannot overflow.
    let largest = sugar_parts.max(water_parts);
    let (sugar, water) = (sugar_parts / largest, water_parts / largest);
    Ok(sugar / (sugar + water))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_ratios() {
        assert_eq!(fraction_from_ratio(1.0, 1.0).unwrap(), 0.5);
        assert!((fraction_from_ratio(2.0, 1.0).unwrap() - 2.0 / 3.0).abs() < 1e-12);
        assert!((fraction_from_ratio(1.0, 2.0).unwrap() - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn endpoints_are_defined() {
        assert_eq!(fraction_from_ratio(0.0, 3.0).unwrap(), 0.0);
        assert_eq!(fraction_from_ratio(3.0, 0.0).unwrap(), 1.0);
    }

    #[test]
    fn zero_and_negative_parts_fail() {
        assert!(matches!(fraction_from_ratio(0.0, 0.0), Err(SyrupError::InvalidInput(_))));
        assert!(matches!(fraction_from_ratio(-1.0, 2.0), Err(SyrupError::InvalidInput(_))));
        assert!(matches!(fraction_from_ratio(1.0, f64::INFINITY), Err(SyrupError::InvalidInput(_))));
    }

    #[test]
    fn huge_parts_do_not_overflow() {
        assert_eq!(fraction_from_ratio(1e308, 1e308).unwrap(), 0.5);
        let rich = fraction_from_ratio(1.5e308, 1e308).unwrap();
        assert!((rich - 0.6).abs() < 1e-12, "w = {rich}");
        assert!(rich > fraction_from_ratio(1e308, 1e308).unwrap());
        assert_eq!(fraction_from_ratio(f64::MAX, 0.0).unwrap(), 1.0);
    }

    #[test]
    fn tiny_parts_keep_their_proportion() {
        let w = fraction_from_ratio(2e-320, 1e-320).unwrap();
        assert!((w - 2.0 / 3.0).abs() < 1e-3, "w = {w}");
    }

    #[test]
    fn parses_literal_ratio() {
        let r: MassRatio = "2:1".parse().unwrap();
        assert_eq!(r, MassRatio { sugar_parts: 2.0, water_parts: 1.0 });
        let r: MassRatio = " 1.5 : 1 ".parse().unwrap();
        assert_eq!(r.sugar_parts, 1.5);
        assert!("2-1".parse::<MassRatio>().is_err());
        assert!("a:1".parse::<MassRatio>().is_err());
        assert!("0:0".parse::<MassRatio>().is_err());
    }
}
