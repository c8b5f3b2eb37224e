use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::error::{Result, SyrupError};
use crate::ratio::MassRatio;

/// A named bar/kitchen syrup strength.
#[derive(Clone, Copy, Debug)]
pub struct Preset {
    pub id: &'static str,
    pub label: &'static str,
    pub ratio: MassRatio,
}

const fn entry(id: &'static str, label: &'static str, sugar_parts: f64, water_parts: f64) -> Preset {
    Preset {
        id,
        label,
        ratio: MassRatio { sugar_parts, water_parts },
    }
}

/// Ordered from thinnest to richest.
pub const PRESET_LIST: [Preset; 3] = [
    entry("light", "Light syrup 1:2", 1.0, 2.0),
    entry("simple", "Simple syrup 1:1", 1.0, 1.0),
    entry("rich", "Rich syrup 2:1", 2.0, 1.0),
];

pub static PRESETS: Lazy<HashMap<&'static str, Preset>> =
    Lazy::new(|| PRESET_LIST.iter().map(|p| (p.id, *p)).collect());

/// Look up a preset by id, ignoring case and surrounding whitespace.
pub fn preset(id: &str) -> Option<&'static Preset> {
    PRESETS.get(id.trim().to_ascii_lowercase().as_str())
}

/// Resolve a preset id (`"simple"`) or a literal `sugar:water` ratio (`"3:2"`).
pub fn parse_ratio(s: &str) -> Result<MassRatio> {
    if let Some(p) = preset(s) {
        return Ok(p.ratio);
    }
    if s.contains(':') {
        return s.parse();
    }
    Err(SyrupError::invalid(format!(
        "unknown preset {s:?}; expected one of light, simple, rich or a sugar:water ratio"
    )))
}
