//! Human-readable magnitudes for display. No rounding happens in the model;
//! it all happens here.

/// Grams below 1 kg, kilograms above.
pub fn format_mass(grams: f64) -> String {
    if grams >= 1000.0 {
        format!("{:.3} kg", grams / 1000.0)
    } else {
        format!("{:.1} g", grams)
    }
}

/// Millilitres below 1 L, litres above.
pub fn format_volume(ml: f64) -> String {
    if ml >= 1000.0 {
        format!("{:.3} L", ml / 1000.0)
    } else {
        format!("{:.1} mL", ml)
    }
}

pub fn format_optional(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", precision, v),
        None => "undefined".to_string(),
    }
}
