//! Property-based tests for the mixing model using proptest.
//!
//! Covers: inverse/forward round trip, ratio monotonicity and endpoints,
//! mass invariants of the inverse model, undefined propagation.

use proptest::prelude::*;
use syrup_calc::{
    brix_from_fraction, describe_mixture, fraction_from_ratio, mass_fraction_from_masses,
    masses_for_target_volume, volume_from_masses, PhysicalConstants, SyrupError,
};

fn rel_close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol * a.abs().max(b.abs()).max(f64::MIN_POSITIVE)
}

// ── Round trip ───────────────────────────────────────────────────────

proptest! {
    /// Masses computed for a target volume reproduce that volume.
    #[test]
    fn inverse_then_forward_round_trips(
        volume in 1e-3f64..1e6,
        w in 0.0f64..=1.0,
    ) {
        let c = PhysicalConstants::default();
        let m = masses_for_target_volume(volume, w, &c).unwrap();
        let back = volume_from_masses(m.sugar_mass, m.water_mass, &c).unwrap();
        prop_assert!(rel_close(back, volume, 1e-9), "{} vs {}", back, volume);
    }

    /// Round trip also holds with non-reference constants.
    #[test]
    fn round_trip_with_overridden_constants(
        volume in 1.0f64..1e4,
        w in 0.0f64..=1.0,
        rho in 0.9f64..1.1,
        v_sugar in 0.5f64..0.8,
    ) {
        let c = PhysicalConstants::new(rho, v_sugar).unwrap();
        let m = masses_for_target_volume(volume, w, &c).unwrap();
        let back = volume_from_masses(m.sugar_mass, m.water_mass, &c).unwrap();
        prop_assert!(rel_close(back, volume, 1e-9));
    }

    /// total = sugar + water and sugar = w * total.
    #[test]
    fn inverse_masses_are_consistent(
        volume in 1.0f64..1e5,
        w in 0.0f64..=1.0,
    ) {
        let m = masses_for_target_volume(volume, w, &PhysicalConstants::default()).unwrap();
        prop_assert!(rel_close(m.sugar_mass + m.water_mass, m.total_mass, 1e-12));
        prop_assert!(rel_close(m.sugar_mass, w * m.total_mass, 1e-12) || m.sugar_mass == 0.0);
        prop_assert!(m.sugar_mass >= 0.0 && m.water_mass >= 0.0);
    }

    /// Non-positive volumes are always rejected.
    #[test]
    fn non_positive_volume_fails(volume in -1e6f64..=0.0, w in 0.0f64..=1.0) {
        let r = masses_for_target_volume(volume, w, &PhysicalConstants::default());
        prop_assert!(matches!(r, Err(SyrupError::InvalidInput(_))));
    }
}

// ── Ratio conversion ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn fraction_increases_with_sugar(a in 0.0f64..100.0, da in 0.01f64..100.0, b in 0.01f64..100.0) {
        let lo = fraction_from_ratio(a, b).unwrap();
        let hi = fraction_from_ratio(a + da, b).unwrap();
        prop_assert!(hi > lo);
    }

    #[test]
    fn fraction_decreases_with_water(a in 0.01f64..100.0, b in 0.0f64..100.0, db in 0.01f64..100.0) {
        let hi = fraction_from_ratio(a, b).unwrap();
        let lo = fraction_from_ratio(a, b + db).unwrap();
        prop_assert!(lo < hi);
    }

    #[test]
    fn fraction_endpoints(x in 1e-6f64..1e6) {
        prop_assert_eq!(fraction_from_ratio(0.0, x).unwrap(), 0.0);
        prop_assert_eq!(fraction_from_ratio(x, 0.0).unwrap(), 1.0);
    }

    #[test]
    fn fraction_stays_in_unit_interval(a in 0.0f64..1e6, b in 0.0f64..1e6) {
        prop_assume!(a + b > 0.0);
        let w = fraction_from_ratio(a, b).unwrap();
        prop_assert!((0.0..=1.0).contains(&w));
    }
}

// ── Forward model ────────────────────────────────────────────────────

proptest! {
    /// At fixed total mass, more sugar means less volume (v_sugar < 1/rho_water).
    #[test]
    fn volume_shrinks_as_sugar_replaces_water(
        total in 1.0f64..1e4,
        w1 in 0.0f64..0.99,
        dw in 0.001f64..0.01,
    ) {
        let c = PhysicalConstants::default();
        let w2 = (w1 + dw).min(1.0);
        let v1 = volume_from_masses(w1 * total, (1.0 - w1) * total, &c).unwrap();
        let v2 = volume_from_masses(w2 * total, (1.0 - w2) * total, &c).unwrap();
        prop_assert!(v2 < v1);
    }

    /// Describing a non-empty mixture gives defined density and °Brix in range.
    #[test]
    fn describe_non_empty_mixture(sugar in 0.0f64..1e4, water in 0.0f64..1e4) {
        prop_assume!(sugar + water > 0.0);
        let r = describe_mixture(sugar, water, &PhysicalConstants::default()).unwrap();
        let brix = r.brix.unwrap();
        prop_assert!((0.0..=100.0).contains(&brix));
        prop_assert!(r.density.unwrap() > 0.0);
    }
}

#[test]
fn zero_zero_ratio_is_invalid() {
    assert!(matches!(fraction_from_ratio(0.0, 0.0), Err(SyrupError::InvalidInput(_))));
}

#[test]
fn undefined_fraction_stays_undefined() {
    assert_eq!(brix_from_fraction(mass_fraction_from_masses(0.0, 0.0)), None);
}
