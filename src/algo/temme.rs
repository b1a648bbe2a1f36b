//! Temme's series for K_ν(x) on the real axis, 0 < x ≤ 2.
//!
//! With ν = n + α and |α| ≤ 1/2 the series yields K_α and K_{α+1}
//! together; K_ν follows by upward recurrence. Unlike the I_{−ν} − I_ν form
//! of the power series it has no cancellation as α → 0, so it serves the
//! orders close to, but not at, an integer.

use crate::algo::gamma::gamma;
use crate::algo::region::round_order;
use crate::cache::OrderMap;
use crate::machine::BesselFloat;
use crate::types::Scaling;
use crate::utils::{from_int, sinh_cosh, sinpi};

/// g₁(α) = (1/Γ(1−α) − 1/Γ(1+α)) / (2α) as a series in α², hi/lo pairs.
/// The leading coefficient is −γ.
#[rustfmt::skip]
const G1_COEF: [[f64; 2]; 15] = [
    [-5.772156649015329e-1, 4.942915152430645e-18],
    [4.200263503409524e-2, -1.4920306285650505e-18],
    [4.219773455554433e-2, 3.3579992682480134e-18],
    [-7.2189432466631e-3, 3.6006537063394283e-19],
    [2.1524167411495098e-4, -2.3758686180729364e-21],
    [2.013485478078824e-5, -3.0488773972037385e-23],
    [-1.133027231981696e-6, 4.622235212104869e-23],
    [-6.116095104481416e-9, 2.693458298171306e-25],
    [1.18127457048702e-9, 1.0052356155716208e-25],
    [-7.782263439905071e-12, -4.397255556595848e-28],
    [-5.100370287454476e-13, -2.253001461085878e-29],
    [5.348122539423018e-15, 1.6208384686356568e-31],
    [1.1812593016974588e-16, -6.422257838149681e-33],
    [-1.4123806553180319e-18, 7.576946701116294e-35],
    [-1.7144063219273374e-20, -5.230715150426935e-38],
];

/// Upper bound on the number of series terms; x ≤ 2 needs far fewer.
const MAX_TERMS: usize = 48;

/// Order-only factors of the series for one α.
#[derive(Debug, Clone, Copy)]
struct GammaTerms<T> {
    g1: T,
    g2: T,
    /// Γ(1+α)
    gp: T,
    /// Γ(1−α)
    gm: T,
}

fn gamma_terms<T: BesselFloat>(alpha: T) -> GammaTerms<T> {
    let half = T::from_f64(0.5);
    let gp = gamma(T::one() + alpha);
    let gm = gamma(T::one() - alpha);

    let alpha2 = alpha * alpha;
    let mut g1 = T::zero();
    for &[hi, lo] in G1_COEF.iter().rev() {
        g1 = g1 * alpha2 + (T::from_f64(hi) + T::from_f64(lo));
    }
    let g2 = (gm.recip() + gp.recip()) * half;

    GammaTerms { g1, g2, gp, gm }
}

pub(crate) struct TemmeSeries<T> {
    gammas: OrderMap<GammaTerms<T>>,
}

impl<T: BesselFloat> TemmeSeries<T> {
    pub(crate) fn new() -> Self {
        TemmeSeries {
            gammas: OrderMap::new(),
        }
    }

    /// K_ν(x), or e^{x} K_ν(x) when scaled. Expects ν ≥ 0 and 0 < x ≤ 2.
    pub(crate) fn k(&self, nu: T, x: T, scaling: Scaling) -> T {
        let two = T::from_f64(2.0);
        let n = round_order(nu);
        let alpha = nu - from_int::<T>(i64::from(n));

        let (k0, k1) = self.pair(alpha, x);

        let y = if n == 0 {
            k0
        } else {
            // K_{μ+1} = (2μ/x) K_μ + K_{μ−1}
            let s = x.recip();
            let (mut prev, mut cur) = (k0, k1);
            for k in 1..i64::from(n) {
                let next = two * (from_int::<T>(k) + alpha) * s * cur + prev;
                prev = cur;
                cur = next;
            }
            cur
        };

        match scaling {
            Scaling::Unscaled => y,
            Scaling::Exponential => y * x.exp_full(),
        }
    }

    /// (K_α(x), K_{α+1}(x)) for |α| ≤ 1/2.
    fn pair(&self, alpha: T, x: T) -> (T, T) {
        let zero = T::zero();
        let one = T::one();
        let two = T::from_f64(2.0);
        let half = T::from_f64(0.5);

        let g = *self
            .gammas
            .get_or_insert_with(alpha.order_key(), || gamma_terms(alpha));

        let s = x.recip();
        let t = (two * s).ln_full();
        let mu = alpha * t;
        let (sh, ch) = sinh_cosh(mu);
        let shc = if mu == zero { one } else { sh / mu };
        // πα / sin(πα)
        let fc = if alpha == zero {
            one
        } else {
            T::PI() * alpha / sinpi(alpha)
        };

        let r = (x * half).powf_full(alpha);
        let mut f = (g.g1 * ch + g.g2 * t * shc) * fc;
        let mut p = g.gp / (r * two);
        let mut q = g.gm * r * half;

        let eps = T::from_f64(2f64.powi(-T::MANTISSA_DIGITS));
        let alpha2 = alpha * alpha;
        let v = x * x * T::from_f64(0.25);
        let mut u = one;
        let mut c0 = f;
        let mut c1 = p;

        for k in 1..=MAX_TERMS {
            let kf = from_int::<T>(k as i64);
            f = (kf * f + p + q) / (kf * kf - alpha2);
            p = p / (kf - alpha);
            q = q / (kf + alpha);
            u = u * v / kf;

            let d0 = u * f;
            let d1 = u * (p - kf * f);
            c0 = c0 + d0;
            c1 = c1 + d1;

            if d0.abs() <= eps * c0.abs() && d1.abs() <= eps * c1.abs() {
                break;
            }
        }

        (c0, c1 * two * s)
    }

    #[cfg(test)]
    pub(crate) fn cached_orders(&self) -> usize {
        self.gammas.len()
    }
}
