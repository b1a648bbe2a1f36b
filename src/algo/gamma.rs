//! Gamma function and harmonic numbers in the working precision.
//!
//! Stirling's asymptotic expansion on a shifted argument, with the
//! Bernoulli coefficients kept as exact rational pairs so that the
//! double-double scalar sees them without f64 rounding. The power and
//! exponential are formed separately, so the result keeps the accuracy of
//! `powf_full` instead of inheriting the absolute error of log Γ.

use crate::cache::CoefTable;
use crate::machine::BesselFloat;
use crate::utils::sinpi;

/// Largest integer whose factorial is exact in the double-double scalar.
const EXACT_FACTORIAL_MAX: f64 = 27.0;

/// B₂ₖ / (2k(2k−1)) for k = 1, …, 16 as (numerator, denominator).
///
/// Both halves are integers below 2⁵³, so the quotient is formed in the
/// working precision.
#[rustfmt::skip]
const STIRLING_COEF: [(f64, f64); 16] = [
    (1.0, 12.0),
    (-1.0, 360.0),
    (1.0, 1260.0),
    (-1.0, 1680.0),
    (1.0, 1188.0),
    (-691.0, 360360.0),
    (1.0, 156.0),
    (-3617.0, 122400.0),
    (43867.0, 244188.0),
    (-174611.0, 125400.0),
    (854513.0, 63756.0),
    (-236364091.0, 1506960.0),
    (8553103.0, 3900.0),
    (-23749461029.0, 657720.0),
    (8615841276005.0, 12460140.0),
    (-7709321041217.0, 505920.0),
];

/// Γ(x) for real x.
///
/// Returns NaN at the poles x = 0, −1, −2, … and for NaN input.
pub(crate) fn gamma<T: BesselFloat>(x: T) -> T {
    let zero = T::zero();
    let one = T::one();
    let half = T::from_f64(0.5);

    if x.is_nan() || (x <= zero && x == x.floor()) {
        return T::nan();
    }

    // Reflection: Γ(x) Γ(1−x) = π / sin(πx)
    if x < half {
        return T::PI() / (sinpi(x) * gamma(one - x));
    }

    if x == x.floor() && x <= T::from_f64(EXACT_FACTORIAL_MAX) {
        let mut f = one;
        let mut k = T::from_f64(2.0);
        while k < x {
            f = f * k;
            k = k + one;
        }
        return f;
    }

    // Γ(x) = Γ(x+n) / (x (x+1) ⋯ (x+n−1)); the series needs x ≥ digits/4
    let min = T::from_f64(f64::from(T::MANTISSA_DIGITS) / 4.0);
    let mut y = x;
    let mut p = one;
    while y < min {
        p = p * y;
        y = y + one;
    }

    stirling(y) / p
}

/// Γ(x) = sqrt(2π) x^(x−1/2) e^(−x) e^(s(x)) for large x.
fn stirling<T: BesselFloat>(x: T) -> T {
    let half = T::from_f64(0.5);
    let two = T::from_f64(2.0);

    let v = x.recip();
    let v2 = v * v;

    let mut s = T::zero();
    for &(num, den) in STIRLING_COEF.iter().rev() {
        s = s * v2 + T::from_f64(num) / T::from_f64(den);
    }
    s = s * v;

    // x^((x−1/2)/2) twice, so the power alone never overflows
    let t = x.powf_full((x - half) * half);
    let sqrt_tau = (two * T::PI()).sqrt();

    sqrt_tau * t * (t * (s - x).exp_full())
}

/// Harmonic numbers H₀ = 0, Hₖ = 1 + 1/2 + ⋯ + 1/k.
pub(crate) fn harmonic_table<T: BesselFloat>() -> CoefTable<T> {
    let mut h = T::zero();
    CoefTable::new(move |k| {
        if k > 0 {
            h = h + T::from_f64(k as f64).recip();
        }
        h
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel(a: f64, b: f64) -> f64 {
        ((a - b) / b).abs()
    }

    #[test]
    fn gamma_integers() {
        let mut f = 1.0;
        for n in 1..=20 {
            assert!(rel(gamma(n as f64), f) < 1e-13, "Γ({n})");
            f *= n as f64;
        }
    }

    #[test]
    fn gamma_half_integers() {
        let sqrt_pi = core::f64::consts::PI.sqrt();
        assert!(rel(gamma(0.5), sqrt_pi) < 1e-13);
        assert!(rel(gamma(1.5), sqrt_pi / 2.0) < 1e-13);
        assert!(rel(gamma(-0.5), -2.0 * sqrt_pi) < 1e-13);
        assert!(rel(gamma(-1.5), 4.0 * sqrt_pi / 3.0) < 1e-13);
    }

    #[test]
    fn gamma_small_argument_accuracy() {
        // within a few ulps
        assert!(rel(gamma(1.25), 0.906_402_477_055_477) < 1e-15);
        assert!(rel(gamma(2.5), 1.329_340_388_179_137) < 1e-15);
        assert!(rel(gamma(0.75), 1.225_416_702_465_177_6) < 1e-15);
        assert_eq!(gamma(7.0), 720.0);
    }

    #[test]
    fn gamma_general_values() {
        // Γ(1/3), Γ(16.75), Γ(-15.25)
        assert!(rel(gamma(1.0 / 3.0), 2.678_938_534_707_747_6) < 1e-13);
        assert!(rel(gamma(16.75), 1.040_060_157_339_679_4e13) < 1e-13);
        assert!(rel(gamma(-15.25), 1.708_806_523_138_138_4e-12) < 1e-12);
    }

    #[test]
    fn gamma_poles_are_nan() {
        assert!(gamma(0.0_f64).is_nan());
        assert!(gamma(-3.0_f64).is_nan());
        assert!(gamma(f64::NAN).is_nan());
    }

    #[cfg(feature = "twofloat")]
    #[test]
    fn gamma_twofloat_half() {
        use num_traits::FloatConst;
        use twofloat::TwoFloat;

        // Γ(1/2)² = π to double-double accuracy
        let g = gamma(TwoFloat::from(0.5));
        let pi = <TwoFloat as FloatConst>::PI();
        let err = ((g * g - pi) / pi).abs();
        assert!(err < TwoFloat::from(1e-29), "{err:?}");

        let g = gamma(TwoFloat::from(16.75));
        let expected = TwoFloat::new_add(10400601573396.795, -0.0008300833589772658);
        let err = ((g - expected) / expected).abs();
        assert!(err < TwoFloat::from(1e-28), "{err:?}");
    }

    #[test]
    fn harmonic_numbers() {
        let h = harmonic_table::<f64>();
        assert_eq!(h.get(0), 0.0);
        assert_eq!(h.get(1), 1.0);
        assert!((h.get(4) - 25.0 / 12.0).abs() < 1e-13);
    }
}
