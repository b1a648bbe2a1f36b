//! K Bessel function upper interface.
//!
//! K is even in ν, so only ν ≥ 0 reaches the kernels.
//!
//! K(ν, z̄) = conj K(ν, z)
//! K(ν, −z) = e^{−iπν} K(ν, z) − iπ I(ν, z)    for Im z ≤ 0
//!
//! Between the near-zero disk and the Padé half-plane K comes from I at z
//! and Y at w = Im z + i Re z:
//!
//! K(ν, z) = (π/2) c (−i c I(ν, z) − conj Y(ν, w)),  c = e^{−iπν/2}

use num_complex::Complex;

use crate::algo::interpolate;
use crate::algo::region::{KRegion, check_order, i_uses_power_series, select_k, y_kernel};
use crate::besi;
use crate::besy;
use crate::engine::Bessel;
use crate::machine::BesselFloat;
use crate::types::{Error, Scaling};
use crate::utils::{SpecialArg, cexp, mul_i, mul_neg_i, special_arg, swap_parts};

/// K_ν(z) with the order validated and degenerate arguments resolved.
pub(crate) fn besk<T: BesselFloat>(
    engine: &Bessel<T>,
    nu: T,
    z: Complex<T>,
    scaling: Scaling,
) -> Result<Complex<T>, Error> {
    check_order(nu)?;

    let y = match special_arg(z) {
        Some(SpecialArg::NaN) => Complex::new(T::nan(), T::nan()),
        Some(SpecialArg::PositiveInfinity) => Complex::from(T::zero()),
        Some(SpecialArg::Zero) => Complex::from(T::infinity()),
        None => fold(engine, nu.abs(), z, scaling),
    };

    Ok(y)
}

/// K_ν(z) for finite nonzero z and ν ≥ 0.
fn fold<T: BesselFloat>(engine: &Bessel<T>, nu: T, z: Complex<T>, scaling: Scaling) -> Complex<T> {
    let zero = T::zero();

    if z.im < zero {
        return fold(engine, nu, z.conj(), scaling).conj();
    }

    if z.re < zero {
        let (sin, cos) = engine.trig.sin_cos(nu);
        let k = Complex::new(cos, -sin) * fold(engine, nu, -z, scaling);
        let i = besi::fold(engine, nu, -z, scaling) * T::PI();

        // e^{z} K(z) = e^{−iπν} e^{2z} (e^{−z} K(−z)) − iπ e^{z} I(−z)
        return match scaling {
            Scaling::Unscaled => k - mul_i(i),
            Scaling::Exponential => k * cexp(z + z) - mul_i(i),
        };
    }

    let region = select_k(nu, z);
    log::trace!("besselk: nu = {nu:?}, z = {z:?}, {region:?}");

    match region {
        KRegion::Hankel => engine.hankel.k(nu, z, scaling),
        KRegion::PowerSeries => engine.series.k(nu, z, scaling),
        KRegion::PowerSeriesInterpolated => {
            interpolate::k_power_series(&engine.series, nu, z, scaling)
        }
        KRegion::Pade => engine.pade.k(nu, z, scaling),
        KRegion::Connection => {
            let y = connection(engine, nu, z);
            match scaling {
                Scaling::Unscaled => y,
                Scaling::Exponential => y * cexp(z),
            }
        }
    }
}

fn connection<T: BesselFloat>(engine: &Bessel<T>, nu: T, z: Complex<T>) -> Complex<T> {
    let w = swap_parts(z);

    let (sin, cos) = engine.trig.sin_cos(nu * T::from_f64(0.5));
    let c = Complex::new(cos, -sin);

    let bi = if i_uses_power_series(nu, z) {
        engine.series.i(nu, z, Scaling::Unscaled)
    } else {
        engine.miller.i(nu, z, Scaling::Unscaled)
    };
    let by = besy::direct(engine, y_kernel(nu, w), nu, w);

    c * (mul_neg_i(c * bi) - by.conj()) * T::FRAC_PI_2()
}
