//! Scalar constants and the `BesselFloat` trait.
//!
//! The evaluation engine is generic over the working scalar. Two scalars are
//! provided: `f64`, and the double-double `TwoFloat` (feature `twofloat`),
//! which is the type the region thresholds and iteration caps are tuned for.

use std::sync::OnceLock;

use num_traits::{Float, FloatConst};

use crate::engine::Bessel;

/// Exact bit pattern of an order, used as the key of per-order caches.
///
/// Two orders share a key only if they are the same value, so a cached
/// coefficient table is never reused for a neighbouring order.
pub type OrderKey = (u64, u64);

/// Floating-point trait for Bessel function computation.
///
/// Provides the working precision and the mathematical constants that are
/// not part of [`FloatConst`].
pub trait BesselFloat: Float + FloatConst + core::fmt::Debug + Send + Sync + 'static {
    /// Number of binary digits carried by the scalar.
    ///
    /// An asymptotic series term this many binary orders below the running
    /// sum no longer changes it.
    const MANTISSA_DIGITS: i32;

    /// Infallible conversion from f64.
    ///
    /// All thresholds and table entries originate as f64 literals (or exact
    /// f64 pairs), so this conversion is exact for the supported types.
    fn from_f64(x: f64) -> Self;

    /// Euler–Mascheroni constant γ.
    fn euler_gamma() -> Self;

    /// Apéry's constant ζ(3).
    fn zeta3() -> Self;

    /// Cache key for this value; `-0` and `+0` share a key.
    fn order_key(self) -> OrderKey;

    /// eˣ to the full working precision.
    #[inline]
    fn exp_full(self) -> Self {
        self.exp()
    }

    /// Natural logarithm to the full working precision.
    #[inline]
    fn ln_full(self) -> Self {
        self.ln()
    }

    /// (sin x, cos x) to the full working precision.
    #[inline]
    fn sin_cos_full(self) -> (Self, Self) {
        self.sin_cos()
    }

    /// `self` raised to the real power `b`, for `self > 0`.
    #[inline]
    fn powf_full(self, b: Self) -> Self {
        self.powf(b)
    }

    /// Four-quadrant arctangent of `self / x` to the full working precision.
    #[inline]
    fn atan2_full(self, x: Self) -> Self {
        self.atan2(x)
    }

    /// Process-wide evaluation engine for this scalar type.
    ///
    /// Used by the free functions of the crate root. Its coefficient caches
    /// are lock-protected, so the engine may be shared between threads.
    fn engine() -> &'static Bessel<Self>;
}

impl BesselFloat for f64 {
    const MANTISSA_DIGITS: i32 = 53;

    #[inline]
    fn from_f64(x: f64) -> f64 {
        x
    }

    #[inline]
    fn euler_gamma() -> f64 {
        0.5772156649015329
    }

    #[inline]
    fn zeta3() -> f64 {
        1.2020569031595942
    }

    #[inline]
    fn order_key(self) -> OrderKey {
        ((self + 0.0).to_bits(), 0)
    }

    fn engine() -> &'static Bessel<f64> {
        static ENGINE: OnceLock<Bessel<f64>> = OnceLock::new();
        ENGINE.get_or_init(Bessel::new)
    }
}

#[cfg(feature = "twofloat")]
mod double_double {
    use std::sync::OnceLock;

    use twofloat::TwoFloat;

    use super::{BesselFloat, OrderKey};
    use crate::engine::Bessel;

    // Constants split into three non-overlapping doubles, so that k·c is
    // exact to well below the double-double unit for |k| < 2¹⁰.
    const LN_2: [f64; 3] = [0.6931471805599453, 2.3190468138462996e-17, 5.707708438416212e-34];
    const FRAC_PI_2: [f64; 3] = [1.5707963267948966, 6.123233995736766e-17, -1.4973849048591698e-33];

    /// eˣ is halved this many times before the Taylor sum.
    const EXP_HALVINGS: i32 = 9;
    const EXP_TERMS: u32 = 10;
    const TRIG_TERMS: u32 = 16;

    /// x − k·c.
    #[inline]
    fn reduce(x: TwoFloat, k: f64, c: &[f64; 3]) -> TwoFloat {
        c.iter().fold(x, |r, &p| r - TwoFloat::new_mul(k, p))
    }

    /// Multiply by 2ᵏ in two steps so that neither factor overflows.
    #[inline]
    fn scale(x: TwoFloat, k: i32) -> TwoFloat {
        let h = k / 2;
        x * 2f64.powi(h) * 2f64.powi(k - h)
    }

    fn exp(x: TwoFloat) -> TwoFloat {
        let hi = x.hi();
        if hi.is_nan() {
            return TwoFloat::NAN;
        }
        if hi > 709.8 {
            return TwoFloat::INFINITY;
        }
        if hi < -745.2 {
            return TwoFloat::from(0.0);
        }

        // x = k ln 2 + 2⁹ r
        let k = (hi / LN_2[0]).round();
        let r = reduce(x, k, &LN_2) / 2f64.powi(EXP_HALVINGS);

        // eʳ − 1 = r (1 + r/2 (1 + r/3 (⋯)))
        let mut p = TwoFloat::from(0.0);
        for n in (1..=EXP_TERMS).rev() {
            p = (p + 1.0) * r / f64::from(n);
        }

        // e²ʳ − 1 = (eʳ − 1)(eʳ + 1)
        for _ in 0..EXP_HALVINGS {
            p = p * (p + 2.0);
        }

        scale(p + 1.0, k as i32)
    }

    fn ln(x: TwoFloat) -> TwoFloat {
        let hi = x.hi();
        if !(hi > 0.0) || hi.is_infinite() {
            return TwoFloat::from(hi.ln());
        }
        if hi < 1e-290 {
            return reduce(ln(scale(x, 900)), 900.0, &LN_2);
        }

        // One Newton step on eʸ = x from the double estimate
        let y = hi.ln();
        let t = x * exp(TwoFloat::from(-y));
        (t - 1.0) + y
    }

    fn sin_cos(x: TwoFloat) -> (TwoFloat, TwoFloat) {
        if !x.hi().is_finite() {
            return (TwoFloat::NAN, TwoFloat::NAN);
        }

        // x = q π/2 + r with |r| ≤ π/4
        let q = (x.hi() / FRAC_PI_2[0]).round();
        let r = reduce(x, q, &FRAC_PI_2);
        let r2 = r * r;

        let mut s = TwoFloat::from(1.0);
        let mut c = TwoFloat::from(1.0);
        for n in (1..=TRIG_TERMS).rev() {
            let m = f64::from(2 * n);
            s = 1.0 - r2 * s / (m * (m + 1.0));
            c = 1.0 - r2 * c / (m * (m - 1.0));
        }
        let s = s * r;

        match (q as i64).rem_euclid(4) {
            0 => (s, c),
            1 => (c, -s),
            2 => (-s, -c),
            _ => (-c, s),
        }
    }

    fn atan2(y: TwoFloat, x: TwoFloat) -> TwoFloat {
        let t = y.hi().atan2(x.hi());
        let m = y.hi().abs().max(x.hi().abs());
        if !(m > 0.0) || !m.is_finite() {
            return TwoFloat::from(t);
        }

        // tan(θ − t) = (y cos t − x sin t) / (x cos t + y sin t)
        let (y, x) = (y / m, x / m);
        let (s, c) = sin_cos(TwoFloat::from(t));
        (y * c - x * s) / (x * c + y * s) + t
    }

    // Constants are split as (hi, lo) with |lo| <= ulp(hi)/2.
    impl BesselFloat for TwoFloat {
        const MANTISSA_DIGITS: i32 = 106;

        #[inline]
        fn from_f64(x: f64) -> TwoFloat {
            TwoFloat::from(x)
        }

        #[inline]
        fn euler_gamma() -> TwoFloat {
            TwoFloat::new_add(0.5772156649015329, -4.942915152430645e-18)
        }

        #[inline]
        fn zeta3() -> TwoFloat {
            TwoFloat::new_add(1.2020569031595942, 4.875891010379532e-17)
        }

        #[inline]
        fn order_key(self) -> OrderKey {
            ((self.hi() + 0.0).to_bits(), (self.lo() + 0.0).to_bits())
        }

        fn exp_full(self) -> TwoFloat {
            exp(self)
        }

        fn ln_full(self) -> TwoFloat {
            ln(self)
        }

        fn sin_cos_full(self) -> (TwoFloat, TwoFloat) {
            sin_cos(self)
        }

        fn powf_full(self, b: TwoFloat) -> TwoFloat {
            exp(b * ln(self))
        }

        fn atan2_full(self, x: TwoFloat) -> TwoFloat {
            atan2(self, x)
        }

        fn engine() -> &'static Bessel<TwoFloat> {
            static ENGINE: OnceLock<Bessel<TwoFloat>> = OnceLock::new();
            ENGINE.get_or_init(Bessel::new)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_zero_shares_key() {
        assert_eq!(0.0_f64.order_key(), (-0.0_f64).order_key());
        assert_ne!(0.5_f64.order_key(), 0.25_f64.order_key());
    }

    #[test]
    fn f64_constants() {
        assert!((f64::euler_gamma() - 0.577_215_664_901_532_9).abs() < 1e-16);
        assert!((f64::zeta3() - 1.202_056_903_159_594_2).abs() < 1e-16);
    }

    #[cfg(feature = "twofloat")]
    #[test]
    fn twofloat_constants_carry_low_word() {
        use twofloat::TwoFloat;

        let g = TwoFloat::euler_gamma();
        assert_eq!(g.hi(), 0.5772156649015329);
        assert!(g.lo() != 0.0);

        let a = TwoFloat::from(0.5).order_key();
        let b = (TwoFloat::from(0.5) + TwoFloat::from(1e-20)).order_key();
        assert_ne!(a, b);
    }

    #[cfg(feature = "twofloat")]
    #[test]
    fn twofloat_elementary_functions() {
        use twofloat::TwoFloat;

        let dd = TwoFloat::new_add;
        let close = |a: TwoFloat, b: TwoFloat, tol: f64| ((a - b) / b).abs().hi() < tol;
        let one = TwoFloat::from(1.0);

        let e = dd(2.718_281_828_459_045, 1.445_646_891_729_250_2e-16);
        assert!(close(one.exp_full(), e, 1e-29));
        let v = TwoFloat::from(-20.5).exp_full();
        assert!(close(v, dd(1.250_152_866_386_742_6e-9, 6.448_235_878_237_776e-26), 1e-29));

        let ln10 = dd(2.302_585_092_994_046, -2.170_756_223_382_249_4e-16);
        assert!(close(TwoFloat::from(10.0).ln_full(), ln10, 1e-29));
        let tiny = TwoFloat::from(3.0 * 2f64.powi(-1000));
        assert!(close(tiny.ln_full(), dd(-692.048_568_271_277_2, -9.292_371_000_536_039e-15), 1e-29));

        let (s, c) = one.sin_cos_full();
        assert!(close(s, dd(0.841_470_984_807_896_5, 1.776_845_092_935_536e-18), 1e-29));
        assert!(close(c, dd(0.540_302_305_868_139_8, -4.760_954_612_604_417e-17), 1e-29));

        let sqrt2 = dd(1.414_213_562_373_095_1, -9.667_293_313_452_913e-17);
        assert!(close(TwoFloat::from(4.0).powf_full(TwoFloat::from(0.25)), sqrt2, 1e-29));

        let t = TwoFloat::from(3.0).atan2_full(TwoFloat::from(-4.0));
        assert!(close(t, dd(2.498_091_544_796_509, -4.392_407_599_224_622e-18), 1e-29));
    }

    #[cfg(feature = "twofloat")]
    #[test]
    fn twofloat_exp_limits() {
        use twofloat::TwoFloat;

        assert_eq!(TwoFloat::from(800.0).exp_full().hi(), f64::INFINITY);
        assert_eq!(TwoFloat::from(-800.0).exp_full().hi(), 0.0);
        assert!(TwoFloat::from(-1.0).ln_full().hi().is_nan());
    }
}
