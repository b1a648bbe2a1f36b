//! J Bessel function upper interface.
//!
//! J(ν, z̄) = conj J(ν, z)
//! J(ν, −z) = e^{iπν} J(ν, z)                  for Im z ≤ 0
//! J(ν, z)  = e^{iπν/2} conj I(ν, Im z + i Re z)   in the first quadrant

use num_complex::Complex;

use crate::algo::power_series::ji_zero_limit;
use crate::algo::region::{JRegion, check_order, select_j};
use crate::engine::Bessel;
use crate::machine::BesselFloat;
use crate::types::{Error, Scaling};
use crate::utils::{SpecialArg, special_arg, swap_parts};

/// J_ν(z) with the order validated and degenerate arguments resolved.
pub(crate) fn besj<T: BesselFloat>(
    engine: &Bessel<T>,
    nu: T,
    z: Complex<T>,
) -> Result<Complex<T>, Error> {
    check_order(nu)?;

    let y = match special_arg(z) {
        Some(SpecialArg::NaN) => Complex::new(T::nan(), T::nan()),
        Some(SpecialArg::PositiveInfinity) => Complex::from(T::zero()),
        Some(SpecialArg::Zero) => Complex::from(ji_zero_limit(nu)),
        None => fold(engine, nu, z),
    };

    Ok(y)
}

/// J_ν(z) for finite nonzero z.
pub(crate) fn fold<T: BesselFloat>(engine: &Bessel<T>, nu: T, z: Complex<T>) -> Complex<T> {
    let zero = T::zero();

    if z.im < zero {
        return fold(engine, nu, z.conj()).conj();
    }

    if z.re < zero {
        let (sin, cos) = engine.trig.sin_cos(nu);
        return Complex::new(cos, sin) * fold(engine, nu, -z);
    }

    let region = select_j(nu, z);
    log::trace!("besselj: nu = {nu:?}, z = {z:?}, {region:?}");

    match region {
        JRegion::Hankel => engine.hankel.j(nu, z),
        JRegion::PowerSeries => engine.series.j(nu, z),
        JRegion::Miller => engine.miller.j(nu, z),
        JRegion::RotatedI => {
            let half = nu * T::from_f64(0.5);
            let (sin, cos) = engine.trig.sin_cos(half);
            let i = engine.miller.i(nu, swap_parts(z), Scaling::Unscaled);

            Complex::new(cos, sin) * i.conj()
        }
    }
}
