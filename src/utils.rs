//! Scalar and complex helpers shared by the kernels.

use num_complex::Complex;

use crate::machine::BesselFloat;

/// Exact conversion of a small integer to the working scalar.
#[inline]
pub(crate) fn from_int<T: BesselFloat>(k: i64) -> T {
    T::from_f64(k as f64)
}

/// Multiply a complex number by i: (a+bi)·i = -b+ai.
#[inline]
pub(crate) fn mul_i<T: BesselFloat>(c: Complex<T>) -> Complex<T> {
    Complex::new(-c.im, c.re)
}

/// Multiply a complex number by -i: (a+bi)·(-i) = b-ai.
#[inline]
pub(crate) fn mul_neg_i<T: BesselFloat>(c: Complex<T>) -> Complex<T> {
    Complex::new(c.im, -c.re)
}

/// Exchange real and imaginary parts: (a+bi) → (b+ai).
///
/// Maps the first quadrant onto itself while turning a rotation by ±π/2
/// into a conjugation, which is how the J↔I and Y/K↔I connection
/// formulas reach their kernels.
#[inline]
pub(crate) fn swap_parts<T: BesselFloat>(z: Complex<T>) -> Complex<T> {
    Complex::new(z.im, z.re)
}

/// Whether both parts of `c` are finite.
#[inline]
pub(crate) fn finite<T: BesselFloat>(c: Complex<T>) -> bool {
    c.re.is_finite() && c.im.is_finite()
}

/// a / b with both operands scaled by |Re b| + |Im b| first.
///
/// The plain quotient divides by |b|², which underflows once |b| drops
/// below about 1e-154.
#[inline]
pub(crate) fn cdiv<T: BesselFloat>(a: Complex<T>, b: Complex<T>) -> Complex<T> {
    let s = b.re.abs() + b.im.abs();
    (a / s) / (b / s)
}

/// eᶻ.
#[inline]
pub(crate) fn cexp<T: BesselFloat>(z: Complex<T>) -> Complex<T> {
    let e = z.re.exp_full();
    if z.im == T::zero() {
        return Complex::new(e, z.im);
    }
    let (s, c) = z.im.sin_cos_full();
    Complex::new(e * c, e * s)
}

/// Principal logarithm.
#[inline]
pub(crate) fn cln<T: BesselFloat>(z: Complex<T>) -> Complex<T> {
    Complex::new(zabs(z).ln_full(), z.im.atan2_full(z.re))
}

/// Principal power zᵃ for real a.
#[inline]
pub(crate) fn cpowf<T: BesselFloat>(z: Complex<T>, a: T) -> Complex<T> {
    if a == T::zero() {
        return Complex::from(T::one());
    }
    cexp(cln(z) * a)
}

/// Principal square root.
pub(crate) fn csqrt<T: BesselFloat>(z: Complex<T>) -> Complex<T> {
    if z.re == T::zero() && z.im == T::zero() {
        return z;
    }
    let t = ((z.re.abs() + zabs(z)) * T::from_f64(0.5)).sqrt();
    if z.re >= T::zero() {
        Complex::new(t, z.im / (t + t))
    } else if z.im.is_sign_negative() {
        Complex::new(-z.im / (t + t), -t)
    } else {
        Complex::new(z.im / (t + t), t)
    }
}

/// (sinh x, cosh x).
///
/// Small arguments take the Taylor series so that sinh keeps its relative
/// accuracy near zero.
pub(crate) fn sinh_cosh<T: BesselFloat>(x: T) -> (T, T) {
    let one = T::one();
    if x.abs() < T::from_f64(0.5) {
        let x2 = x * x;
        let mut s = one;
        for n in (1..=16).rev() {
            s = one + x2 * s / from_int(2 * n * (2 * n + 1));
        }
        let s = s * x;
        return (s, (one + s * s).sqrt());
    }
    let e = x.exp_full();
    let r = e.recip();
    let half = T::from_f64(0.5);
    ((e - r) * half, (e + r) * half)
}

/// (sin z, cos z).
pub(crate) fn csin_cos<T: BesselFloat>(z: Complex<T>) -> (Complex<T>, Complex<T>) {
    let (s, c) = z.re.sin_cos_full();
    let (sh, ch) = sinh_cosh(z.im);
    (Complex::new(s * ch, c * sh), Complex::new(c * ch, -(s * sh)))
}

/// Arguments that evaluate to a limiting value instead of a kernel sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SpecialArg {
    /// Either part is NaN, or z is infinite other than along +∞.
    NaN,
    /// Re z = +∞ with a finite imaginary part.
    PositiveInfinity,
    Zero,
}

/// Classify `z` before any folding.
#[inline]
pub(crate) fn special_arg<T: BesselFloat>(z: Complex<T>) -> Option<SpecialArg> {
    if z.re.is_nan() || z.im.is_nan() {
        return Some(SpecialArg::NaN);
    }
    if z.re.is_infinite() || z.im.is_infinite() {
        return if z.re == T::infinity() && z.im.is_finite() {
            Some(SpecialArg::PositiveInfinity)
        } else {
            Some(SpecialArg::NaN)
        };
    }
    if z.re == T::zero() && z.im == T::zero() {
        return Some(SpecialArg::Zero);
    }
    None
}

/// Overflow-safe complex absolute value.
///
/// Computes `|z| = sqrt(re² + im²)` without intermediate overflow by
/// factoring out the larger component:
///   `max * sqrt(1 + (min/max)²)`
#[inline]
pub(crate) fn zabs<T: BesselFloat>(z: Complex<T>) -> T {
    let u = z.re.abs();
    let v = z.im.abs();
    let s = u + v;
    if s == T::zero() {
        return T::zero();
    }
    if u > v {
        let q = v / u;
        u * (T::one() + q * q).sqrt()
    } else {
        let q = u / v;
        v * (T::one() + q * q).sqrt()
    }
}

/// Unbiased binary exponent of `x`, i.e. ⌊log₂|x|⌋.
///
/// Zero maps to `i32::MIN` and non-finite values to `i32::MAX`, so the
/// difference of two exponents is always safe in `i64`.
#[inline]
pub(crate) fn ilogb<T: BesselFloat>(x: T) -> i32 {
    if x == T::zero() {
        return i32::MIN;
    }
    if !x.is_finite() {
        return i32::MAX;
    }
    let Some(hi) = x.to_f64() else {
        return i32::MAX;
    };
    let bits = hi.abs().to_bits();
    let exp = ((bits >> 52) & 0x7ff) as i32;
    if exp == 0 {
        // subnormal hi word
        let mant = bits & ((1u64 << 52) - 1);
        return -1011 - mant.leading_zeros() as i32;
    }
    exp - 1023
}

/// Binary exponent of the larger component of `z`.
#[inline]
pub(crate) fn cilogb<T: BesselFloat>(z: Complex<T>) -> i32 {
    ilogb(z.re.abs().max(z.im.abs()))
}

/// Compute sin(π·x) with exact values at half-integers.
///
/// Reduces the argument modulo 2 first, so `sinpi(n)` is exactly 0 for
/// any integer `n`, and `sinpi(n + 0.5)` is exactly ±1. This avoids the
/// catastrophic rounding errors of `sin(x * PI)` when x is a
/// half-integer (e.g. `sin(1.5 * PI)` = −1.837e-16 instead of 0).
#[inline]
pub(crate) fn sinpi<T: BesselFloat>(x: T) -> T {
    let zero = T::zero();
    let one = T::one();
    let two = T::from_f64(2.0);
    let half = T::from_f64(0.5);
    let one_half = T::from_f64(1.5);
    let pi = T::PI();

    // sinpi is odd: sinpi(-x) = -sinpi(x)
    let (ax, sign) = if x < zero { (-x, -one) } else { (x, one) };

    // Reduce to [0, 2): r = ax mod 2
    let r = ax % two;

    // Exact special values
    if r == zero || r == one {
        return zero;
    }
    if r == half {
        return sign;
    }
    if r == one_half {
        return -sign;
    }

    // Use symmetry to reduce to [0, 0.5]
    let s = if r < half {
        (r * pi).sin_cos_full().0
    } else if r < one {
        ((one - r) * pi).sin_cos_full().0
    } else if r < one_half {
        -((r - one) * pi).sin_cos_full().0
    } else {
        -((two - r) * pi).sin_cos_full().0
    };

    sign * s
}

/// Compute cos(π·x) with exact values at integers and half-integers.
///
/// Reduces the argument modulo 2 first, so `cospi(n + 0.5)` is exactly 0
/// for any integer `n`, and `cospi(n)` is exactly ±1.
#[inline]
pub(crate) fn cospi<T: BesselFloat>(x: T) -> T {
    let zero = T::zero();
    let one = T::one();
    let two = T::from_f64(2.0);
    let half = T::from_f64(0.5);
    let one_half = T::from_f64(1.5);
    let pi = T::PI();

    // cospi is even: cospi(-x) = cospi(x)
    let ax = x.abs();

    // Reduce to [0, 2): r = ax mod 2
    let r = ax % two;

    // Exact special values
    if r == zero {
        return one;
    }
    if r == half || r == one_half {
        return zero;
    }
    if r == one {
        return -one;
    }

    // Use symmetry to reduce to [0, 0.5]
    if r < half {
        (r * pi).sin_cos_full().1
    } else if r < one {
        -((one - r) * pi).sin_cos_full().1
    } else if r < one_half {
        -((r - one) * pi).sin_cos_full().1
    } else {
        ((two - r) * pi).sin_cos_full().1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    // ── zabs tests ──

    #[test]
    fn zabs_3_4_triangle() {
        let z = Complex64::new(3.0, 4.0);
        assert!((zabs(z) - 5.0).abs() < 1e-15);
    }

    #[test]
    fn zabs_large_values_no_overflow() {
        let big = 1.0e300;
        let z = Complex64::new(big, big);
        let result = zabs(z);
        let expected = big * 2.0_f64.sqrt();
        assert!((result - expected).abs() / expected < 1e-15);
    }

    // ── special_arg tests ──

    #[test]
    fn special_arguments() {
        let inf = f64::INFINITY;
        assert_eq!(special_arg(Complex64::new(f64::NAN, 1.0)), Some(SpecialArg::NaN));
        assert_eq!(special_arg(Complex64::new(inf, -3.0)), Some(SpecialArg::PositiveInfinity));
        assert_eq!(special_arg(Complex64::new(inf, inf)), Some(SpecialArg::NaN));
        assert_eq!(special_arg(Complex64::new(-inf, 0.0)), Some(SpecialArg::NaN));
        assert_eq!(special_arg(Complex64::new(-0.0, 0.0)), Some(SpecialArg::Zero));
        assert_eq!(special_arg(Complex64::new(1e-300, 0.0)), None);
    }

    // ── ilogb tests ──

    #[test]
    fn ilogb_powers_of_two() {
        assert_eq!(ilogb(1.0_f64), 0);
        assert_eq!(ilogb(0.75_f64), -1);
        assert_eq!(ilogb(-8.0_f64), 3);
        assert_eq!(ilogb(1.0e-320_f64), -1064);
        assert_eq!(ilogb(0.0_f64), i32::MIN);
        assert_eq!(ilogb(f64::INFINITY), i32::MAX);
    }

    #[test]
    fn cilogb_takes_larger_part() {
        assert_eq!(cilogb(Complex64::new(0.5, -64.0)), 6);
    }

    // ── swap / rotate ──

    #[test]
    fn swap_and_rotate() {
        let z = Complex64::new(1.5, -2.0);
        assert_eq!(swap_parts(z), Complex64::new(-2.0, 1.5));
        assert_eq!(mul_i(z), Complex64::new(2.0, 1.5));
        assert_eq!(mul_neg_i(z), Complex64::new(-2.0, -1.5));
    }

    // ── sinpi / cospi tests ──

    #[test]
    fn sinpi_integers_are_zero() {
        for n in -5..=5 {
            let x = n as f64;
            assert_eq!(sinpi(x), 0.0, "sinpi({x}) should be exactly 0");
        }
    }

    #[test]
    fn sinpi_half_integers() {
        assert_eq!(sinpi(0.5_f64), 1.0);
        assert_eq!(sinpi(1.5_f64), -1.0);
        assert_eq!(sinpi(2.5_f64), 1.0);
        assert_eq!(sinpi(-0.5_f64), -1.0);
        assert_eq!(sinpi(-1.5_f64), 1.0);
    }

    #[test]
    fn sinpi_general_values() {
        let val = sinpi(1.0_f64 / 6.0);
        assert!((val - 0.5).abs() < 1e-15);

        let val = sinpi(0.25_f64);
        assert!((val - core::f64::consts::FRAC_1_SQRT_2).abs() < 1e-15);
    }

    #[test]
    fn cospi_integers_and_half_integers() {
        assert_eq!(cospi(0.0_f64), 1.0);
        assert_eq!(cospi(1.0_f64), -1.0);
        assert_eq!(cospi(-2.0_f64), 1.0);
        for n in -5..=5 {
            let x = n as f64 + 0.5;
            assert_eq!(cospi(x), 0.0, "cospi({x}) should be exactly 0");
        }
    }

    #[test]
    fn cospi_general_values() {
        let val = cospi(1.0_f64 / 3.0);
        assert!((val - 0.5).abs() < 1e-15);
    }

    #[cfg(feature = "twofloat")]
    #[test]
    fn sinpi_twofloat_keeps_extended_precision() {
        use twofloat::TwoFloat;

        // sin(π/6) = 1/2 exactly; f64 alone would leave ~1e-17
        let x = TwoFloat::from(1.0) / TwoFloat::from(6.0);
        let s = sinpi(x) - TwoFloat::from(0.5);
        assert!(s.abs() < TwoFloat::from(1e-26), "{s:?}");
    }

    // ── complex elementary functions ──

    fn near(a: Complex64, b: Complex64, tol: f64) -> bool {
        (a - b).norm() <= tol * b.norm().max(1.0)
    }

    #[test]
    fn cdiv_survives_tiny_operands() {
        let a = Complex64::new(3e-221, 4e-221);
        let b = Complex64::new(1e-221, 2e-221);
        let q = cdiv(a, b);
        assert!(finite(q));
        assert!(near(q, Complex64::new(2.2, -0.4), 1e-15), "{q}");
        assert!(near(cdiv(Complex64::new(1.0, 0.0), Complex64::new(0.0, 2.0)), Complex64::new(0.0, -0.5), 0.0));
    }

    #[test]
    fn finite_checks_both_parts() {
        assert!(finite(Complex64::new(1.0, -2.0)));
        assert!(!finite(Complex64::new(f64::NAN, 0.0)));
        assert!(!finite(Complex64::new(0.0, f64::NEG_INFINITY)));
    }

    #[test]
    fn exp_log_power_match_num_complex() {
        for z in [
            Complex64::new(0.5, 0.0),
            Complex64::new(-2.0, 3.0),
            Complex64::new(3.0, -4.0),
            Complex64::new(-7.5, -0.25),
        ] {
            assert!(near(cexp(z), z.exp(), 1e-15), "{z}");
            assert!(near(cln(z), z.ln(), 1e-15), "{z}");
            assert!(near(cpowf(z, 1.75), z.powf(1.75), 1e-14), "{z}");
            assert!(near(csqrt(z), z.sqrt(), 1e-15), "{z}");
            let (s, c) = csin_cos(z);
            assert!(near(s, z.sin(), 1e-14), "{z}");
            assert!(near(c, z.cos(), 1e-14), "{z}");
        }
        assert_eq!(cpowf(Complex64::new(0.0, 0.0), 0.0), Complex64::new(1.0, 0.0));
    }

    #[test]
    fn branch_cut_follows_sign_of_zero() {
        let pi = core::f64::consts::PI;
        assert!(near(cln(Complex64::new(-1.0, 0.0)), Complex64::new(0.0, pi), 1e-16));
        assert!(near(cln(Complex64::new(-1.0, -0.0)), Complex64::new(0.0, -pi), 1e-16));
        assert_eq!(csqrt(Complex64::new(-4.0, 0.0)), Complex64::new(0.0, 2.0));
        assert_eq!(csqrt(Complex64::new(-4.0, -0.0)), Complex64::new(0.0, -2.0));
        assert!(near(csqrt(Complex64::new(3.0, 4.0)), Complex64::new(2.0, 1.0), 1e-15));
    }

    #[test]
    fn sinh_cosh_small_and_large() {
        for x in [1e-20, 0.1, -0.49, 0.5, 3.0, -12.0] {
            let (s, c) = sinh_cosh(x);
            assert!((s - x.sinh()).abs() <= 1e-15 * x.sinh().abs(), "{x}");
            assert!((c - x.cosh()).abs() <= 1e-15 * x.cosh(), "{x}");
        }
    }

    #[cfg(feature = "twofloat")]
    #[test]
    fn complex_helpers_keep_extended_precision() {
        use twofloat::TwoFloat;

        fn tf(x: f64) -> TwoFloat {
            TwoFloat::from(x)
        }
        let pi = twofloat::consts::PI;

        // e^{iπ/6} = (√3/2, 1/2)
        let z = Complex::new(tf(0.0), pi / tf(6.0));
        let w = cexp(z);
        assert!((w.im - tf(0.5)).abs().hi() < 1e-29, "{w:?}");
        assert!((w.re * w.re - tf(0.75)).abs().hi() < 1e-29, "{w:?}");

        // 4^{1/4} = √2
        let r = cpowf(Complex::new(tf(4.0), tf(0.0)), tf(0.25));
        assert!((r.re * r.re - tf(2.0)).abs().hi() < 1e-29, "{r:?}");
        assert!(r.im.abs().hi() < 1e-30);

        // ln(−1) = iπ
        let l = cln(Complex::new(tf(-1.0), tf(0.0)));
        assert!((l.im - pi).abs().hi() < 1e-29, "{l:?}");

        let q = cdiv(Complex::new(tf(3e-221), tf(4e-221)), Complex::new(tf(1e-221), tf(2e-221)));
        assert!((q.re - tf(2.2)).abs().hi() < 1e-15 && (q.im + tf(0.4)).abs().hi() < 1e-15);
    }
}
