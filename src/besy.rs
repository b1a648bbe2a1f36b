//! Y Bessel function upper interface.
//!
//! Y(ν, z̄) = conj Y(ν, z)
//! Y(ν, −z) = e^{−iπν} Y(ν, z) + 2i cos(πν) J(ν, z)    for Im z ≤ 0
//!
//! For large Im z the value comes from I and K at w = Im z + i Re z:
//!
//! Y(ν, z) = i c conj I(ν, w) − (2/π) conj(c K(ν, w)),  c = e^{iπν/2}

use num_complex::Complex;

use crate::algo::interpolate;
use crate::algo::power_series::y_zero_limit;
use crate::algo::region::{YKernel, YRegion, check_order, i_uses_power_series, select_y};
use crate::besj;
use crate::engine::Bessel;
use crate::machine::BesselFloat;
use crate::types::{Error, Scaling};
use crate::utils::{SpecialArg, mul_i, special_arg, swap_parts};

/// Y_ν(z) with the order validated and degenerate arguments resolved.
pub(crate) fn besy<T: BesselFloat>(
    engine: &Bessel<T>,
    nu: T,
    z: Complex<T>,
) -> Result<Complex<T>, Error> {
    check_order(nu)?;

    let y = match special_arg(z) {
        Some(SpecialArg::NaN) => Complex::new(T::nan(), T::nan()),
        Some(SpecialArg::PositiveInfinity) => Complex::from(T::zero()),
        Some(SpecialArg::Zero) => Complex::from(y_zero_limit(nu)),
        None => fold(engine, nu, z),
    };

    Ok(y)
}

/// Y_ν(z) for finite nonzero z.
pub(crate) fn fold<T: BesselFloat>(engine: &Bessel<T>, nu: T, z: Complex<T>) -> Complex<T> {
    let zero = T::zero();

    if z.im < zero {
        return fold(engine, nu, z.conj()).conj();
    }

    if z.re < zero {
        let (sin, cos) = engine.trig.sin_cos(nu);
        let y = fold(engine, nu, -z);
        let j = besj::fold(engine, nu, -z);

        return Complex::new(cos, -sin) * y + mul_i(j * (cos + cos));
    }

    let region = select_y(nu, z);
    log::trace!("bessely: nu = {nu:?}, z = {z:?}, {region:?}");

    match region {
        YRegion::Hankel => engine.hankel.y(nu, z),
        YRegion::Direct(kernel) => direct(engine, kernel, nu, z),
        YRegion::Connection => connection(engine, nu, z),
    }
}

/// Y_ν(z) from one of the Y kernels.
pub(crate) fn direct<T: BesselFloat>(
    engine: &Bessel<T>,
    kernel: YKernel,
    nu: T,
    z: Complex<T>,
) -> Complex<T> {
    match kernel {
        YKernel::PowerSeries => engine.series.y(nu, z),
        YKernel::PowerSeriesInterpolated => interpolate::y_power_series(&engine.series, nu, z),
        YKernel::Miller => engine.miller.y(nu, z),
        YKernel::MillerInterpolated => interpolate::y_miller(&engine.miller, nu, z),
    }
}

fn connection<T: BesselFloat>(engine: &Bessel<T>, nu: T, z: Complex<T>) -> Complex<T> {
    let w = swap_parts(z);

    let (sin, cos) = engine.trig.sin_cos(nu * T::from_f64(0.5));
    let c = Complex::new(cos, sin);

    let bi = if i_uses_power_series(nu, w) {
        engine.series.i(nu, w, Scaling::Unscaled)
    } else {
        engine.miller.i(nu, w, Scaling::Unscaled)
    };
    let bk = engine.pade.k(nu.abs(), w, Scaling::Unscaled);

    mul_i(c * bi.conj()) - (c * bk).conj() * (T::FRAC_1_PI() * T::from_f64(2.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    fn close(a: Complex64, b: Complex64, tol: f64) -> bool {
        (a - b).norm() <= tol * b.norm()
    }

    fn y(e: &Bessel<f64>, nu: f64, re: f64, im: f64) -> Complex64 {
        besy(e, nu, Complex64::new(re, im)).unwrap_or_default()
    }

    #[test]
    fn real_values_per_region() {
        let e = Bessel::<f64>::new();
        assert!(close(y(&e, 0.0, 1.0, 0.0), Complex64::new(0.088_256_964_215_676_96, 0.0), 1e-13));
        assert!(close(y(&e, 1.0, 2.0, 0.0), Complex64::new(-0.107_032_431_540_937_55, 0.0), 1e-13));
        assert!(close(y(&e, 3.0, 2.0, 0.0), Complex64::new(-1.127_783_776_840_427_8, 0.0), 1e-13));
        assert!(close(y(&e, 0.0, 10.0, 0.0), Complex64::new(0.055_671_167_283_599_39, 0.0), 1e-12));
        assert!(close(y(&e, 1.0, 10.0, 0.0), Complex64::new(0.249_015_424_206_953_9, 0.0), 1e-12));
    }

    #[test]
    fn connection_branch_matches_half_order() {
        // Y_{1/2}(z) = −sqrt(2/(πz)) cos z
        let e = Bessel::<f64>::new();
        let z = Complex64::new(12.0, 9.0);
        assert_eq!(select_y(0.5, z), YRegion::Connection);
        let expected = -(2.0 / (core::f64::consts::PI * z)).sqrt() * z.cos();
        assert!(close(y(&e, 0.5, z.re, z.im), expected, 1e-12));
    }

    #[test]
    fn left_half_plane_half_order() {
        let e = Bessel::<f64>::new();
        let z = Complex64::new(-3.0, 1.5);
        // Y_{1/2} = −J_{−1/2}, continued through the principal branch
        let expected = -(2.0 / (core::f64::consts::PI * z)).sqrt() * z.cos();
        assert!(close(y(&e, 0.5, z.re, z.im), expected, 1e-12));
    }

    #[test]
    fn zero_argument() {
        let e = Bessel::<f64>::new();
        assert_eq!(y(&e, 0.0, 0.0, 0.0).re, f64::NEG_INFINITY);
        assert_eq!(y(&e, -0.5, 0.0, 0.0).re, 0.0);
        assert_eq!(y(&e, -1.0, 0.0, 0.0).re, f64::INFINITY);
    }
}
