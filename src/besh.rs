//! Hankel function upper interface.
//!
//! H⁽¹⁾(ν, z) = J(ν, z) + i Y(ν, z)
//! H⁽²⁾(ν, z) = J(ν, z) − i Y(ν, z)
//!
//! Both parts go through their own quadrant folding, so H is continued
//! exactly as J and Y are.

use num_complex::Complex;

use crate::besj::besj;
use crate::besy::besy;
use crate::engine::Bessel;
use crate::machine::BesselFloat;
use crate::types::{Error, HankelKind};
use crate::utils::{mul_i, mul_neg_i};

/// H⁽ᵐ⁾_ν(z) with the order validated and degenerate arguments resolved.
pub(crate) fn besh<T: BesselFloat>(
    engine: &Bessel<T>,
    kind: HankelKind,
    nu: T,
    z: Complex<T>,
) -> Result<Complex<T>, Error> {
    let j = besj(engine, nu, z)?;
    let y = besy(engine, nu, z)?;

    log::trace!("hankel: {kind:?}, nu = {nu:?}, z = {z:?}");

    // mul_i keeps an infinite Y from turning the real part into NaN
    Ok(match kind {
        HankelKind::First => j + mul_i(y),
        HankelKind::Second => j + mul_neg_i(y),
    })
}
