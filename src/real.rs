//! Bessel functions of a real argument x ≥ 0.
//!
//! The real axis has its own region table: the Hankel expansion starts at
//! x = 38.875, Y leaves the power series at orders within 1/8 of an integer,
//! and K below x = 2 switches to Temme's series at those orders instead of
//! interpolating. Negative and NaN arguments give NaN.

use num_complex::Complex;

use crate::algo::interpolate;
use crate::algo::power_series::{ji_zero_limit, y_zero_limit};
use crate::algo::region::{
    IRegion, JRegion, RealKRegion, YKernel, YRegion, check_order, select_i_real, select_j_real,
    select_k_real, select_y_real,
};
use crate::engine::Bessel;
use crate::machine::BesselFloat;
use crate::types::{Error, Scaling};

/// Limiting value at x = 0, x = +∞, or outside the domain.
fn edge<T: BesselFloat>(x: T, at_zero: impl FnOnce() -> T, at_infinity: T) -> Option<T> {
    if x.is_nan() || x < T::zero() {
        Some(T::nan())
    } else if x == T::zero() {
        Some(at_zero())
    } else if x.is_infinite() {
        Some(at_infinity)
    } else {
        None
    }
}

pub(crate) fn besj_real<T: BesselFloat>(engine: &Bessel<T>, nu: T, x: T) -> Result<T, Error> {
    check_order(nu)?;

    if let Some(y) = edge(x, || ji_zero_limit(nu), T::zero()) {
        return Ok(y);
    }

    let region = select_j_real(nu, x);
    log::trace!("besselj_real: nu = {nu:?}, x = {x:?}, {region:?}");

    let z = Complex::from(x);
    let y = match region {
        JRegion::Hankel => engine.hankel.j(nu, z),
        JRegion::PowerSeries => engine.series.j(nu, z),
        JRegion::Miller | JRegion::RotatedI => engine.miller.j(nu, z),
    };

    Ok(y.re)
}

pub(crate) fn besy_real<T: BesselFloat>(engine: &Bessel<T>, nu: T, x: T) -> Result<T, Error> {
    check_order(nu)?;

    if let Some(y) = edge(x, || y_zero_limit(nu), T::zero()) {
        return Ok(y);
    }

    let region = select_y_real(nu, x);
    log::trace!("bessely_real: nu = {nu:?}, x = {x:?}, {region:?}");

    let z = Complex::from(x);
    let y = match region {
        YRegion::Hankel => engine.hankel.y(nu, z),
        YRegion::Direct(YKernel::PowerSeries | YKernel::PowerSeriesInterpolated) => {
            engine.series.y(nu, z)
        }
        YRegion::Direct(YKernel::MillerInterpolated) => {
            interpolate::y_miller(&engine.miller, nu, z)
        }
        YRegion::Direct(YKernel::Miller) | YRegion::Connection => engine.miller.y(nu, z),
    };

    Ok(y.re)
}

pub(crate) fn besi_real<T: BesselFloat>(
    engine: &Bessel<T>,
    nu: T,
    x: T,
    scaling: Scaling,
) -> Result<T, Error> {
    check_order(nu)?;

    let at_infinity = match scaling {
        Scaling::Unscaled => T::infinity(),
        Scaling::Exponential => T::zero(),
    };
    if let Some(y) = edge(x, || ji_zero_limit(nu), at_infinity) {
        return Ok(y);
    }

    let region = select_i_real(x);
    log::trace!("besseli_real: nu = {nu:?}, x = {x:?}, {region:?}");

    let z = Complex::from(x);
    let y = match region {
        IRegion::Hankel => engine.hankel.i(nu, z, scaling),
        IRegion::PowerSeries | IRegion::Miller => engine.series.i(nu, z, scaling),
    };

    Ok(y.re)
}

pub(crate) fn besk_real<T: BesselFloat>(
    engine: &Bessel<T>,
    nu: T,
    x: T,
    scaling: Scaling,
) -> Result<T, Error> {
    check_order(nu)?;

    if let Some(y) = edge(x, T::infinity, T::zero()) {
        return Ok(y);
    }

    let nu = nu.abs();
    let region = select_k_real(nu, x);
    log::trace!("besselk_real: nu = {nu:?}, x = {x:?}, {region:?}");

    let z = Complex::from(x);
    let y = match region {
        RealKRegion::Hankel => engine.hankel.k(nu, z, scaling).re,
        RealKRegion::PowerSeries => engine.series.k(nu, z, scaling).re,
        RealKRegion::Temme => engine.temme.k(nu, x, scaling),
        RealKRegion::Pade => engine.pade.k(nu, z, scaling).re,
    };

    Ok(y)
}
