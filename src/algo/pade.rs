//! Yoshida–Padé approximant of K_ν for Re z ≥ 1.
//!
//! For |ν| < 2 the approximant
//!
//!   K_ν(z) ≈ sqrt(π/(2z)) e^{−z} P(1/z) / Q(1/z)
//!
//! is evaluated directly, with P and Q of degree 36 whose coefficients are
//! polynomials in ν². Larger orders recur upward from α = ν − ⌊ν⌋ and α + 1.
//! The coefficients for ν = 0 and ν = 1, which every integer order reaches,
//! are stored precomputed.

use num_complex::Complex;

use super::pade_coef::{ESS, NU0, NU1, PADE_ORDER};
use crate::cache::OrderMap;
use crate::machine::BesselFloat;
use crate::types::Scaling;
use crate::utils::{cdiv, cexp, csqrt, from_int};

/// Numerator and denominator coefficients, highest power of 1/z first.
type PadeCoef<T> = Vec<(T, T)>;

/// Stored (cᵢ, dᵢ) rows in the evaluation order of [`PadeCoef`].
fn stored<T: BesselFloat>(rows: &[[[f64; 2]; 2]]) -> PadeCoef<T> {
    let dd = |[hi, lo]: [f64; 2]| T::from_f64(hi) + T::from_f64(lo);
    rows.iter().rev().map(|&[c, d]| (dd(c), dd(d))).collect()
}

pub(crate) struct YoshidaPade<T> {
    ess: Vec<Vec<T>>,
    cds: OrderMap<PadeCoef<T>>,
}

impl<T: BesselFloat> YoshidaPade<T> {
    pub(crate) fn new() -> Self {
        let ess = ESS
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&[hi, lo]| T::from_f64(hi) + T::from_f64(lo))
                    .collect()
            })
            .collect();

        let cds = OrderMap::new();
        cds.get_or_insert_with(T::zero().order_key(), || stored(&NU0));
        cds.get_or_insert_with(T::one().order_key(), || stored(&NU1));

        YoshidaPade { ess, cds }
    }

    /// K_ν(z), or e^{z} K_ν(z) when scaled. Expects ν ≥ 0.
    pub(crate) fn k(&self, nu: T, z: Complex<T>, scaling: Scaling) -> Complex<T> {
        let two = T::from_f64(2.0);
        if nu < two {
            return self.value(nu, z, scaling);
        }

        let n = nu.floor();
        let alpha = nu - n;
        let steps = n.to_i64().unwrap_or(0);

        let v = z.inv();
        let mut y0 = self.value(alpha, z, scaling);
        let mut y1 = self.value(alpha + T::one(), z, scaling);

        // K_{μ+1} = (2μ/z) K_μ + K_{μ−1}
        for k in 1..steps {
            let mu = from_int::<T>(k) + alpha;
            let next = v * y1 * (two * mu) + y0;
            y0 = y1;
            y1 = next;
        }

        y1
    }

    fn value(&self, nu: T, z: Complex<T>, scaling: Scaling) -> Complex<T> {
        let cds = self
            .cds
            .get_or_insert_with(nu.order_key(), || self.table(nu));

        let t = z.inv();
        let (c0, d0) = cds[0];
        let mut sc = Complex::from(c0);
        let mut sd = Complex::from(d0);
        for &(c, d) in &cds[1..] {
            sc = sc * t + c;
            sd = sd * t + d;
        }

        let y = csqrt(t * (T::PI() / T::from_f64(2.0))) * cdiv(sc, sd);

        match scaling {
            Scaling::Unscaled => y * cexp(-z),
            Scaling::Exponential => y,
        }
    }

    fn table(&self, nu: T) -> PadeCoef<T> {
        let m = PADE_ORDER;
        let nu2 = nu * nu;
        let half = T::from_f64(0.5);

        let mut us = Vec::with_capacity(m + 1);
        let mut u = T::one();
        for _ in 0..=m {
            us.push(u);
            u = u * nu2;
        }

        let vs: Vec<T> = (0..m)
            .map(|i| {
                let r = from_int::<T>((m - i) as i64) + half;
                r * r - nu2
            })
            .collect();

        let mut cds: PadeCoef<T> = self
            .ess
            .iter()
            .enumerate()
            .map(|(i, es)| {
                let d = vs[..i].iter().fold(es[i], |p, &v| p * v);
                let c = es
                    .iter()
                    .zip(&us)
                    .fold(T::zero(), |s, (&e, &u)| s + e * u);
                (c, d)
            })
            .collect();

        cds.reverse();
        cds
    }
}
