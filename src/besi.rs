//! I Bessel function upper interface.
//!
//! I(ν, z̄) = conj I(ν, z)
//! I(ν, −z) = e^{iπν} I(ν, z)    for Im z ≤ 0
//!
//! With exponential scaling the value is e^{−z} I(ν, z) for every z, so the
//! left half-plane picks up an extra e^{−2z}.

use num_complex::Complex;

use crate::algo::power_series::ji_zero_limit;
use crate::algo::region::{IRegion, check_order, select_i};
use crate::engine::Bessel;
use crate::machine::BesselFloat;
use crate::types::{Error, Scaling};
use crate::utils::{SpecialArg, cexp, special_arg};

/// I_ν(z) with the order validated and degenerate arguments resolved.
pub(crate) fn besi<T: BesselFloat>(
    engine: &Bessel<T>,
    nu: T,
    z: Complex<T>,
    scaling: Scaling,
) -> Result<Complex<T>, Error> {
    check_order(nu)?;

    let y = match special_arg(z) {
        Some(SpecialArg::NaN) => Complex::new(T::nan(), T::nan()),
        Some(SpecialArg::PositiveInfinity) => match scaling {
            Scaling::Unscaled => Complex::from(T::infinity()),
            Scaling::Exponential => Complex::from(T::zero()),
        },
        Some(SpecialArg::Zero) => Complex::from(ji_zero_limit(nu)),
        None => fold(engine, nu, z, scaling),
    };

    Ok(y)
}

/// I_ν(z) for finite nonzero z.
pub(crate) fn fold<T: BesselFloat>(
    engine: &Bessel<T>,
    nu: T,
    z: Complex<T>,
    scaling: Scaling,
) -> Complex<T> {
    let zero = T::zero();

    if z.im < zero {
        return fold(engine, nu, z.conj(), scaling).conj();
    }

    if z.re < zero {
        let (sin, cos) = engine.trig.sin_cos(nu);
        let y = Complex::new(cos, sin) * fold(engine, nu, -z, scaling);

        return match scaling {
            Scaling::Unscaled => y,
            Scaling::Exponential => y * cexp(-(z + z)),
        };
    }

    let region = select_i(nu, z);
    log::trace!("besseli: nu = {nu:?}, z = {z:?}, {region:?}");

    match region {
        IRegion::Hankel => engine.hankel.i(nu, z, scaling),
        IRegion::PowerSeries => engine.series.i(nu, z, scaling),
        IRegion::Miller => engine.miller.i(nu, z, scaling),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    fn close(a: Complex64, b: Complex64, tol: f64) -> bool {
        (a - b).norm() <= tol * b.norm()
    }

    fn i(e: &Bessel<f64>, nu: f64, z: Complex64, scaling: Scaling) -> Complex64 {
        besi(e, nu, z, scaling).unwrap_or_default()
    }

    #[test]
    fn real_values_per_region() {
        let e = Bessel::<f64>::new();
        let re = |x: f64| Complex64::new(x, 0.0);
        assert!(close(i(&e, 0.0, re(1.0), Scaling::Unscaled), re(1.266_065_877_752_008_3), 1e-14));
        assert!(close(i(&e, 0.0, re(10.0), Scaling::Unscaled), re(2_815.716_628_466_254_5), 1e-13));
    }

    #[test]
    fn half_order_everywhere() {
        // I_{1/2}(z) = sqrt(2/(πz)) sinh z
        let e = Bessel::<f64>::new();
        for z in [
            Complex64::new(2.0, 1.0),
            Complex64::new(15.0, 20.0),
            Complex64::new(-4.0, 3.0),
            Complex64::new(-30.0, -30.0),
        ] {
            let expected = (2.0 / (core::f64::consts::PI * z)).sqrt() * z.sinh();
            assert!(close(i(&e, 0.5, z, Scaling::Unscaled), expected, 1e-12), "{z}");
        }
    }

    #[test]
    fn scaling_in_both_half_planes() {
        let e = Bessel::<f64>::new();
        for z in [Complex64::new(3.0, 2.0), Complex64::new(-3.0, 2.0)] {
            let y = i(&e, 1.5, z, Scaling::Unscaled);
            let ys = i(&e, 1.5, z, Scaling::Exponential);
            assert!(close(ys, y * (-z).exp(), 1e-13), "{z}");
        }
    }

    #[test]
    fn infinite_argument() {
        let e = Bessel::<f64>::new();
        let z = Complex64::new(f64::INFINITY, 0.0);
        assert_eq!(i(&e, 1.0, z, Scaling::Unscaled).re, f64::INFINITY);
        assert_eq!(i(&e, 1.0, z, Scaling::Exponential), Complex64::new(0.0, 0.0));
    }
}
