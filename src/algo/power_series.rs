//! Ascending power series around z = 0.
//!
//! J and I share one kernel that sums two terms of the classical series per
//! step. Y and K have a general kernel for non-integer orders and dedicated
//! kernels for integer orders, where the general formula is 0/0.
//!
//! All kernels expect `z` in the closed first quadrant. The sum stops after
//! two consecutive terms that leave it unchanged, or as soon as it stops
//! being finite.

use num_complex::Complex;

use crate::algo::gamma::{gamma, harmonic_table};
use crate::algo::region::{floor_order, nearly_integer};
use crate::cache::{CoefTable, OrderMap, SinCosPiCache};
use crate::machine::BesselFloat;
use crate::types::Scaling;
use crate::utils::{cexp, cilogb, cln, cpowf, finite, from_int};

/// Term caps of the individual series.
const JI_TERMS: usize = 42;
const Y_TERMS: usize = 44;
const K_TERMS: usize = 30;
const K_INT_TERMS: usize = 27;

/// Binary exponent below which (z/2)^ν is treated as zero.
const NEAR_ZERO_EXPONENT: i32 = -950;

/// Adds a term and counts how many in a row did not change the sum.
#[inline]
fn add_term<T: BesselFloat>(c: Complex<T>, dc: Complex<T>, stalls: &mut u32) -> Complex<T> {
    let next = c + dc;
    if next == c || !finite(next) {
        *stalls += 1;
    } else {
        *stalls = 0;
    }
    next
}

/// 1/c, or zero once the running product has left the finite range.
#[inline]
fn finite_recip<T: BesselFloat>(c: T) -> T {
    if c.is_finite() { c.recip() } else { T::zero() }
}

/// Value of J_ν and I_ν as z → 0.
pub(crate) fn ji_zero_limit<T: BesselFloat>(nu: T) -> T {
    if nu == T::zero() {
        T::one()
    } else if nearly_integer(nu).is_some() || nu > T::zero() {
        T::zero()
    } else if floor_order(nu) & 1 == 0 {
        T::neg_infinity()
    } else {
        T::infinity()
    }
}

/// Value of Y_ν as z → 0.
pub(crate) fn y_zero_limit<T: BesselFloat>(nu: T) -> T {
    if nu >= T::zero() {
        return T::neg_infinity();
    }
    if let Some(n) = nearly_integer(nu) {
        return if n & 1 == 0 { T::neg_infinity() } else { T::infinity() };
    }

    let n = floor_order(nu + T::from_f64(0.5));
    let alpha = nu - from_int(n as i64);
    if alpha.abs() == T::from_f64(0.5) {
        T::zero()
    } else if n & 1 == 0 {
        T::neg_infinity()
    } else {
        T::infinity()
    }
}

// ── coefficient tables ──

/// 1 / (Γ(ν+1) ∏ᵢ (ν+2i)(ν+2i−1)·32i(2i−1)).
fn double_fact_denom_table<T: BesselFloat>(nu: T) -> CoefTable<T> {
    let mut c = gamma(nu + T::one());
    CoefTable::new(move |i| {
        if i > 0 {
            let k = from_int::<T>(i as i64);
            let two_k = k + k;
            c = c * (nu + two_k) * (nu + two_k - T::one())
                * from_int((32 * i * (2 * i - 1)) as i64);
        }
        finite_recip(c)
    })
}

/// 1 / (4(ν+1)), then 1 / (4(2i+1)(2i+1+ν)).
fn x2_denom_table<T: BesselFloat>(nu: T) -> CoefTable<T> {
    CoefTable::new(move |i| {
        if i == 0 {
            (T::from_f64(4.0) * (nu + T::one())).recip()
        } else {
            let t = from_int::<T>((2 * i + 1) as i64);
            (T::from_f64(4.0) * t * (t + nu)).recip()
        }
    })
}

/// 1 / Γ(ν+1+i).
fn gamma_denom_table<T: BesselFloat>(nu: T) -> CoefTable<T> {
    let mut c = gamma(nu + T::one());
    CoefTable::new(move |i| {
        if i > 0 {
            c = c * (nu + from_int(i as i64));
        }
        finite_recip(c)
    })
}

/// Γ(ν+1+i).
fn gamma_table<T: BesselFloat>(nu: T) -> CoefTable<T> {
    let mut c = gamma(nu + T::one());
    CoefTable::new(move |i| {
        if i > 0 {
            c = c * (nu + from_int(i as i64));
        }
        c
    })
}

/// 4^ν Γ(ν+1+i) / Γ(−ν+1+i).
fn gamma_pn_table<T: BesselFloat>(nu: T) -> CoefTable<T> {
    let r = T::from_f64(4.0).powf_full(nu);
    let mut gp = gamma(nu + T::one());
    let mut gn = gamma(T::one() - nu);
    CoefTable::new(move |i| {
        if i > 0 {
            let k = from_int::<T>(i as i64);
            gp = gp * (nu + k);
            gn = gn * (k - nu);
        }
        r * gp / gn
    })
}

/// 1 / ∏ᵢ 32i(2i−1).
fn y_coef_table<T: BesselFloat>() -> CoefTable<T> {
    let mut c = T::one();
    CoefTable::new(move |i| {
        if i > 0 {
            c = c * from_int((32 * i * (2 * i - 1)) as i64);
        }
        finite_recip(c)
    })
}

/// 1/4, then 1 / (4(2i+1)³).
fn y0_coef_table<T: BesselFloat>() -> CoefTable<T> {
    CoefTable::new(|i| {
        if i == 0 {
            T::from_f64(0.25)
        } else {
            let t = from_int::<T>((2 * i + 1) as i64);
            (T::from_f64(4.0) * t * t * t).recip()
        }
    })
}

/// (n+4i+2) / (4(2i+1)²(n+2i+1)²).
fn yn_coef_table<T: BesselFloat>(n: usize) -> CoefTable<T> {
    CoefTable::new(move |i| {
        let t = from_int::<T>((2 * i + 1) as i64);
        let s = from_int::<T>((n + 2 * i + 1) as i64);
        from_int::<T>((n + 4 * i + 2) as i64) / (T::from_f64(4.0) * t * t * s * s)
    })
}

/// (n−1−k)! / k! for k = 0, …, n−1.
fn yn_finite_coef<T: BesselFloat>(n: usize) -> Vec<T> {
    let mut fact = Vec::with_capacity(n.max(1));
    fact.push(T::one());
    for i in 1..n {
        let prev = fact[i - 1];
        fact.push(prev * from_int(i as i64));
    }
    (0..n).map(|k| fact[n - 1 - k] / fact[k]).collect()
}

/// 1 / (4ⁱ i!).
fn k_coef_table<T: BesselFloat>() -> CoefTable<T> {
    let mut c = T::one();
    CoefTable::new(move |i| {
        if i > 0 {
            c = c * from_int((4 * i) as i64);
        }
        finite_recip(c)
    })
}

/// 1 / (4ⁱ (i!)²).
fn k0_coef_table<T: BesselFloat>() -> CoefTable<T> {
    let mut c = T::one();
    CoefTable::new(move |i| {
        if i > 0 {
            c = c * from_int((4 * i * i) as i64);
        }
        finite_recip(c)
    })
}

/// 1 / (4ⁱ i! (i+1)!).
fn k1_coef_table<T: BesselFloat>() -> CoefTable<T> {
    let mut c = T::one();
    CoefTable::new(move |i| {
        if i > 0 {
            c = c * from_int((4 * i * (i + 1)) as i64);
        }
        finite_recip(c)
    })
}

/// Power series kernels with their coefficient caches.
pub(crate) struct PowerSeries<T> {
    dfact_denom: OrderMap<CoefTable<T>>,
    x2_denom: OrderMap<CoefTable<T>>,
    gamma_denom: OrderMap<CoefTable<T>>,
    gamma: OrderMap<CoefTable<T>>,
    gamma_pn: OrderMap<CoefTable<T>>,
    yn_coef: OrderMap<CoefTable<T>>,
    yn_finite: OrderMap<Vec<T>>,
    y_coef: CoefTable<T>,
    y0_coef: CoefTable<T>,
    k_coef: CoefTable<T>,
    k0_coef: CoefTable<T>,
    k1_coef: CoefTable<T>,
    harmonic: CoefTable<T>,
    trig: SinCosPiCache<T>,
}

impl<T: BesselFloat> PowerSeries<T> {
    pub(crate) fn new() -> Self {
        PowerSeries {
            dfact_denom: OrderMap::new(),
            x2_denom: OrderMap::new(),
            gamma_denom: OrderMap::new(),
            gamma: OrderMap::new(),
            gamma_pn: OrderMap::new(),
            yn_coef: OrderMap::new(),
            yn_finite: OrderMap::new(),
            y_coef: y_coef_table(),
            y0_coef: y0_coef_table(),
            k_coef: k_coef_table(),
            k0_coef: k0_coef_table(),
            k1_coef: k1_coef_table(),
            harmonic: harmonic_table(),
            trig: SinCosPiCache::new(),
        }
    }

    /// J_ν(z).
    pub(crate) fn j(&self, nu: T, z: Complex<T>) -> Complex<T> {
        if nu < T::zero() {
            if let Some(n) = nearly_integer(nu) {
                let y = self.j(-nu, z);
                return if n & 1 == 0 { y } else { -y };
            }
        }

        self.ji_kernel(nu, z, true, JI_TERMS)
    }

    /// Y_ν(z).
    pub(crate) fn y(&self, nu: T, z: Complex<T>) -> Complex<T> {
        match nearly_integer(nu) {
            Some(n) => self.y_int_kernel(n, z, Y_TERMS),
            None => self.y_kernel(nu, z, Y_TERMS),
        }
    }

    /// I_ν(z), or e^{−z} I_ν(z) when scaled.
    pub(crate) fn i(&self, nu: T, z: Complex<T>, scaling: Scaling) -> Complex<T> {
        let y = if nu < T::zero() && nearly_integer(nu).is_some() {
            self.ji_kernel(-nu, z, false, JI_TERMS)
        } else {
            self.ji_kernel(nu, z, false, JI_TERMS)
        };

        match scaling {
            Scaling::Unscaled => y,
            Scaling::Exponential => y * cexp(-z),
        }
    }

    /// K_ν(z) for ν ≥ 0, or e^{z} K_ν(z) when scaled.
    pub(crate) fn k(&self, nu: T, z: Complex<T>, scaling: Scaling) -> Complex<T> {
        let y = match nearly_integer(nu) {
            Some(n) => self.k_int_kernel(n.unsigned_abs() as usize, z, K_INT_TERMS),
            None => self.k_kernel(nu, z, K_TERMS),
        };

        match scaling {
            Scaling::Unscaled => y,
            Scaling::Exponential => y * cexp(z),
        }
    }

    /// Σ (z/2)^{ν+4k} / (Γ(ν+1) …) · (1 ∓ z² dₖ), two series terms per step.
    fn ji_kernel(&self, nu: T, z: Complex<T>, alternating: bool, terms: usize) -> Complex<T> {
        let one = Complex::from(T::one());
        let key = nu.order_key();

        let r = self
            .dfact_denom
            .get_or_insert_with(key, || double_fact_denom_table(nu))
            .prefix(terms + 1);
        let d = self
            .x2_denom
            .get_or_insert_with(key, || x2_denom_table(nu))
            .prefix(terms + 1);

        let z2 = z * z;
        let z4 = z2 * z2;
        let mut u = cpowf(z * T::from_f64(0.5), nu);

        if !finite(u) || z2 == Complex::from(T::zero()) {
            return Complex::from(ji_zero_limit(nu));
        }

        let mut c = Complex::from(T::zero());
        let mut stalls = 0;
        for k in 0..=terms {
            if stalls >= 2 {
                break;
            }
            let w = z2 * d[k];
            let f = if alternating { one - w } else { one + w };

            c = add_term(c, u * r[k] * f, &mut stalls);
            u = u * z4;

            if !finite(c) {
                break;
            }
        }

        c
    }

    /// Y_ν for non-integer ν, from J_{±ν} combined term by term.
    fn y_kernel(&self, nu: T, z: Complex<T>, terms: usize) -> Complex<T> {
        let zero = T::zero();
        let four = T::from_f64(4.0);
        let key = nu.order_key();

        let g = self
            .gamma
            .get_or_insert_with(key, || gamma_table(nu))
            .prefix(2 * terms + 2);
        let gpn = self
            .gamma_pn
            .get_or_insert_with(key, || gamma_pn_table(nu))
            .prefix(2 * terms + 2);
        let r = self.y_coef.prefix(terms + 1);

        let (sin, cos) = self.trig.sin_cos(nu);
        let p = if cos == zero {
            Complex::from(zero)
        } else {
            cpowf(z, nu + nu) * cos
        };
        let s = cpowf(z * T::from_f64(2.0), nu) * four;

        let z2 = z * z;
        let z4 = z2 * z2;

        if !finite(p)
            || !finite(s)
            || cilogb(s) < NEAR_ZERO_EXPONENT
            || z2 == Complex::from(zero)
        {
            return Complex::from(y_zero_limit(nu));
        }

        let mut c = Complex::from(zero);
        let mut u = Complex::from(sin.recip());
        let mut stalls = 0;
        for k in 0..=terms {
            if stalls >= 2 {
                break;
            }
            let t = 2 * k + 1;
            let tt = from_int::<T>(t as i64);

            let a = s * (tt * g[t]);
            let pa = p / a;
            let qa = Complex::from(gpn[t]) / a;

            let dc = u
                * r[k]
                * ((pa + qa) * (four * tt * nu) - (z2 - four * tt * tt) * (pa - qa));

            c = add_term(c, dc, &mut stalls);
            u = u * z4;

            if !finite(c) {
                break;
            }
        }

        c
    }

    fn y_int_kernel(&self, n: i32, z: Complex<T>, terms: usize) -> Complex<T> {
        if n < 0 {
            let y = self.y_int_kernel(-n, z, terms);
            return if n & 1 == 0 { y } else { -y };
        }

        let z2 = z * z;
        let h = cln(z * T::from_f64(0.5)) + T::euler_gamma();
        if !finite(h) || z2 == Complex::from(T::zero()) {
            return Complex::new(T::neg_infinity(), T::zero());
        }

        match n {
            0 => self.y0_kernel(z, h, terms),
            1 => self.y1_kernel(z, h, terms),
            _ => self.yn_kernel(n as usize, z, h, terms),
        }
    }

    /// `h` is ln(z/2) + γ.
    fn y0_kernel(&self, z: Complex<T>, h: Complex<T>, terms: usize) -> Complex<T> {
        let one = Complex::from(T::one());
        let key = T::zero().order_key();

        let r = self
            .dfact_denom
            .get_or_insert_with(key, || double_fact_denom_table(T::zero()))
            .prefix(terms + 1);
        let d = self
            .x2_denom
            .get_or_insert_with(key, || x2_denom_table(T::zero()))
            .prefix(terms + 1);
        let q = self.y0_coef.prefix(terms + 1);
        let hn = self.harmonic.prefix(2 * terms + 1);

        let z2 = z * z;
        let z4 = z2 * z2;

        let mut c = Complex::from(T::zero());
        let mut u = Complex::from(T::FRAC_2_PI());
        let mut stalls = 0;
        for k in 0..=terms {
            if stalls >= 2 {
                break;
            }
            let dc = u * r[k] * ((h - hn[2 * k]) * (one - z2 * d[k]) + z2 * q[k]);

            c = add_term(c, dc, &mut stalls);
            u = u * z4;
        }

        c
    }

    /// `h` is ln(z/2) + γ.
    fn y1_kernel(&self, z: Complex<T>, h: Complex<T>, terms: usize) -> Complex<T> {
        let one = Complex::from(T::one());
        let n1 = T::one();
        let key = n1.order_key();

        let r = self
            .dfact_denom
            .get_or_insert_with(key, || double_fact_denom_table(n1))
            .prefix(terms + 1);
        let d = self
            .x2_denom
            .get_or_insert_with(key, || x2_denom_table(n1))
            .prefix(terms + 1);
        let q = self
            .yn_coef
            .get_or_insert_with(key, || yn_coef_table(1))
            .prefix(terms + 1);
        let hn = self.harmonic.prefix(2 * terms + 2);

        let h = h * T::from_f64(2.0);
        let z2 = z * z;
        let z4 = z2 * z2;

        let mut c = -(z * T::PI()).inv() * T::from_f64(2.0);
        let mut u = z / (T::PI() * T::from_f64(2.0));
        let mut stalls = 0;
        for k in 0..=terms {
            if stalls >= 2 {
                break;
            }
            let dc = u
                * r[k]
                * ((h - hn[2 * k] - hn[2 * k + 1]) * (one - z2 * d[k]) + z2 * q[k]);

            c = add_term(c, dc, &mut stalls);
            u = u * z4;
        }

        c
    }

    /// Y_n for n ≥ 2: finite sum of n terms plus the logarithmic series.
    /// `h` is ln(z/2) + γ.
    fn yn_kernel(&self, n: usize, z: Complex<T>, h: Complex<T>, terms: usize) -> Complex<T> {
        let one = Complex::from(T::one());
        let nt = from_int::<T>(n as i64);
        let key = nt.order_key();

        let r = self
            .dfact_denom
            .get_or_insert_with(key, || double_fact_denom_table(nt))
            .prefix(terms + 1);
        let d = self
            .x2_denom
            .get_or_insert_with(key, || x2_denom_table(nt))
            .prefix(terms + 1);
        let q = self
            .yn_coef
            .get_or_insert_with(key, || yn_coef_table(n))
            .prefix(terms + 1);
        let f = self
            .yn_finite
            .get_or_insert_with(key, || yn_finite_coef(n));
        let hn = self.harmonic.prefix(2 * terms + n + 1);

        let z2 = z * z;
        let z4 = z2 * z2;

        // −Σ_{k<n} (n−1−k)!/k! (z²/4)^{k−n}
        let w = z2 * T::from_f64(0.25);
        let mut c = Complex::from(T::zero());
        let mut v = one;
        for &fk in f.iter() {
            c = c + v * fk;
            v = v * w;
        }
        c = -(c / v);

        let h = h * T::from_f64(2.0);
        let mut u = one;
        let mut stalls = 0;
        for k in 0..=terms {
            if stalls >= 2 {
                break;
            }
            let dc = u
                * r[k]
                * ((h - hn[2 * k] - hn[2 * k + n]) * (one - z2 * d[k]) + z2 * q[k]);

            c = add_term(c, dc, &mut stalls);
            u = u * z4;
        }

        c * T::FRAC_1_PI() * (z * T::from_f64(0.5)).powi(n as i32)
    }

    /// K_ν for non-integer ν ≥ 0 from I_{±ν}.
    fn k_kernel(&self, nu: T, z: Complex<T>, terms: usize) -> Complex<T> {
        let gp = self
            .gamma_denom
            .get_or_insert_with(nu.order_key(), || gamma_denom_table(nu))
            .prefix(terms + 1);
        let gn = self
            .gamma_denom
            .get_or_insert_with((-nu).order_key(), || gamma_denom_table(-nu))
            .prefix(terms + 1);
        let r = self.k_coef.prefix(terms + 1);

        let tp = cpowf(z * T::from_f64(0.5), nu);
        let tn = tp.inv();
        let z2 = z * z;

        if cilogb(tp) < NEAR_ZERO_EXPONENT || z2 == Complex::from(T::zero()) {
            return Complex::new(T::infinity(), T::zero());
        }

        let mut c = Complex::from(T::zero());
        let mut u = Complex::from(T::PI() / (self.trig.sinpi(nu) * T::from_f64(2.0)));
        let mut stalls = 0;
        for k in 0..=terms {
            if stalls >= 2 {
                break;
            }
            let dc = u * r[k] * (tn * gn[k] - tp * gp[k]);

            c = add_term(c, dc, &mut stalls);
            u = u * z2;

            if !finite(c) {
                break;
            }
        }

        c
    }

    fn k_int_kernel(&self, n: usize, z: Complex<T>, terms: usize) -> Complex<T> {
        let z2 = z * z;
        let h = cln(z * T::from_f64(0.5)) + T::euler_gamma();
        if !finite(h) || z2 == Complex::from(T::zero()) {
            return Complex::new(T::infinity(), T::zero());
        }

        let k0 = self.k0_kernel(z, h, terms);
        if n == 0 {
            return k0;
        }
        let k1 = self.k1_kernel(z, h, terms);
        if n == 1 {
            return k1;
        }

        // K_{k+1} = (2k/z) K_k + K_{k−1}
        let v = z.inv();
        let (mut y0, mut y1) = (k0, k1);
        for k in 1..n {
            let next = v * y1 * from_int::<T>(2 * k as i64) + y0;
            y0 = y1;
            y1 = next;
        }
        y1
    }

    /// `h` is ln(z/2) + γ.
    fn k0_kernel(&self, z: Complex<T>, h: Complex<T>, terms: usize) -> Complex<T> {
        let r = self.k0_coef.prefix(terms + 1);
        let hn = self.harmonic.prefix(terms + 1);

        let h = -h;
        let z2 = z * z;

        let mut c = Complex::from(T::zero());
        let mut u = Complex::from(T::one());
        let mut stalls = 0;
        for k in 0..=terms {
            if stalls >= 2 {
                break;
            }
            c = add_term(c, u * r[k] * (h + hn[k]), &mut stalls);
            u = u * z2;
        }

        c
    }

    /// `h` is ln(z/2) + γ.
    fn k1_kernel(&self, z: Complex<T>, h: Complex<T>, terms: usize) -> Complex<T> {
        let r = self.k1_coef.prefix(terms + 1);
        let hn = self.harmonic.prefix(terms + 2);

        let half = T::from_f64(0.5);
        let z2 = z * z;

        let mut c = z.inv();
        let mut u = z * half;
        let mut stalls = 0;
        for k in 0..=terms {
            if stalls >= 2 {
                break;
            }
            let dc = u * r[k] * (h - (hn[k] + hn[k + 1]) * half);

            c = add_term(c, dc, &mut stalls);
            u = u * z2;
        }

        c
    }
}
