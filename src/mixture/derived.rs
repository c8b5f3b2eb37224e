// mixture/derived.rs
// Quantities derived from a finished mixture. None marks an undefined result.

/// Sugar mass fraction `sugar / total`; `None` when there is no mass at all
/// or the quotient is not a finite number.
pub fn mass_fraction_from_masses(sugar_mass: f64, total_mass: f64) -> Option<f64> {
    if total_mass > 0.0 && total_mass.is_finite() {
        Some(sugar_mass / total_mass).filter(|w| w.is_finite())
    } else {
        None
    }
}

/// °Brix = 100 · w. An undefined fraction stays undefined.
pub fn brix_from_fraction(w: Option<f64>) -> Option<f64> {
    w.map(|w| 100.0 * w)
}
