//! Hankel asymptotic expansion for large |z|.
//!
//! With aₖ(ν) = aₖ₋₁ (4ν² − (2k−1)²) / (8k), the four families follow from
//! the sums Σ (∓1)ᵏ aₖ / zᵏ and their even/odd parts. Each sum is cut off
//! once a term sits `MANTISSA_DIGITS` binary orders below the running total.

use std::sync::Arc;

use num_complex::Complex;

use crate::cache::{CoefTable, OrderMap, SinCosPiCache};
use crate::machine::BesselFloat;
use crate::types::Scaling;
use crate::utils::{cdiv, cexp, cilogb, csin_cos, csqrt, from_int};

/// Term caps for the J/Y pair, I and K sums.
const JY_TERMS: usize = 35;
const I_TERMS: usize = 81;
const K_TERMS: usize = 59;

/// Whether `dc` no longer affects `c`.
#[inline]
fn negligible<T: BesselFloat>(c: Complex<T>, dc: Complex<T>) -> bool {
    if dc == Complex::from(T::zero()) {
        return true;
    }
    (cilogb(c) as i64) - (cilogb(dc) as i64) >= T::MANTISSA_DIGITS as i64
}

/// aₖ(ν) of the expansion.
fn hankel_coef_table<T: BesselFloat>(nu: T) -> CoefTable<T> {
    let four_nu2 = T::from_f64(4.0) * nu * nu;
    let mut a = T::one();
    CoefTable::new(move |k| {
        if k > 0 {
            let t = from_int::<T>(2 * k as i64 - 1);
            a = a * (four_nu2 - t * t) / from_int(8 * k as i64);
        }
        a
    })
}

/// Asymptotic kernels with one coefficient table per order.
pub(crate) struct HankelExpansion<T> {
    coef: OrderMap<CoefTable<T>>,
    trig: SinCosPiCache<T>,
}

impl<T: BesselFloat> HankelExpansion<T> {
    pub(crate) fn new() -> Self {
        HankelExpansion {
            coef: OrderMap::new(),
            trig: SinCosPiCache::new(),
        }
    }

    /// J_ν(z).
    pub(crate) fn j(&self, nu: T, z: Complex<T>) -> Complex<T> {
        let (c_even, c_odd) = self.jy_coef(nu, z);
        let (sin, cos) = self.sin_cos_omega(nu, z);

        Self::amplitude(z) * (cos * c_even - sin * c_odd)
    }

    /// Y_ν(z).
    pub(crate) fn y(&self, nu: T, z: Complex<T>) -> Complex<T> {
        let (c_even, c_odd) = self.jy_coef(nu, z);
        let (sin, cos) = self.sin_cos_omega(nu, z);

        Self::amplitude(z) * (sin * c_even + cos * c_odd)
    }

    /// I_ν(z), or e^{−z} I_ν(z) when scaled.
    pub(crate) fn i(&self, nu: T, z: Complex<T>, scaling: Scaling) -> Complex<T> {
        let ci = self.i_coef(nu, z);
        let ck = self.k_coef(nu, z);
        let (sin, cos) = self.trig.sin_cos(nu);
        let phase = Complex::new(sin, -cos);

        let r = csqrt(cdiv(Complex::from(T::one()), z * (T::PI() * T::from_f64(2.0))));

        match scaling {
            Scaling::Unscaled => r * (cexp(z) * ci - phase * cexp(-z) * ck),
            Scaling::Exponential => r * (ci - phase * cexp(-(z + z)) * ck),
        }
    }

    /// K_ν(z), or e^{z} K_ν(z) when scaled.
    pub(crate) fn k(&self, nu: T, z: Complex<T>, scaling: Scaling) -> Complex<T> {
        let c = self.k_coef(nu, z);
        let r = csqrt(Complex::from(T::PI()) / (z * T::from_f64(2.0))) * c;

        match scaling {
            Scaling::Unscaled => r * cexp(-z),
            Scaling::Exponential => r,
        }
    }

    /// sqrt(2 / (πz)).
    #[inline]
    fn amplitude(z: Complex<T>) -> Complex<T> {
        csqrt(Complex::from(T::from_f64(2.0)) / (z * T::PI()))
    }

    /// (sin ω, cos ω) for ω = z − (2ν+1)π/4, with the phase taken exactly.
    fn sin_cos_omega(&self, nu: T, z: Complex<T>) -> (Complex<T>, Complex<T>) {
        let (sp, cp) = self.trig.sin_cos((nu + nu + T::one()) * T::from_f64(0.25));
        let (sz, cz) = csin_cos(z);
        (sz * cp - cz * sp, cz * cp + sz * sp)
    }

    fn table(&self, nu: T) -> Arc<CoefTable<T>> {
        self.coef
            .get_or_insert_with(nu.order_key(), || hankel_coef_table(nu))
    }

    /// (Σ (−1)ᵏ a₂ₖ / z²ᵏ, Σ (−1)ᵏ a₂ₖ₊₁ / z²ᵏ⁺¹).
    fn jy_coef(&self, nu: T, z: Complex<T>) -> (Complex<T>, Complex<T>) {
        let a = self.table(nu).prefix(2 * JY_TERMS + 2);

        let v = (z * z).inv();
        let mut w = -v;

        let mut c_even = Complex::from(a[0]);
        let mut c_odd = Complex::from(a[1]);

        for k in 1..=JY_TERMS {
            let dc_even = w * a[2 * k];
            let dc_odd = w * a[2 * k + 1];

            c_even = c_even + dc_even;
            c_odd = c_odd + dc_odd;

            if negligible(c_even, dc_even) && negligible(c_odd, dc_odd) {
                break;
            }

            w = -(w * v);
        }

        (c_even, c_odd / z)
    }

    /// Σ (−1)ᵏ aₖ / zᵏ.
    fn i_coef(&self, nu: T, z: Complex<T>) -> Complex<T> {
        let a = self.table(nu).prefix(I_TERMS + 1);

        let v = z.inv();
        let mut w = -v;
        let mut c = Complex::from(a[0]);

        for &ak in &a[1..] {
            let dc = w * ak;
            c = c + dc;

            if negligible(c, dc) {
                break;
            }

            w = -(w * v);
        }

        c
    }

    /// Σ aₖ / zᵏ.
    fn k_coef(&self, nu: T, z: Complex<T>) -> Complex<T> {
        let a = self.table(nu).prefix(K_TERMS + 1);

        let v = z.inv();
        let mut w = v;
        let mut c = Complex::from(a[0]);

        for &ak in &a[1..] {
            let dc = w * ak;
            c = c + dc;

            if negligible(c, dc) {
                break;
            }

            w = w * v;
        }

        c
    }
}
