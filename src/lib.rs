//! Cylindrical Bessel functions of complex argument in double-double precision.
//!
//! This crate provides the Bessel functions of the first kind (J), second
//! kind (Y), the modified functions (I, K) and the Hankel functions
//! H⁽¹⁾ and H⁽²⁾ for real orders |ν| ≤ 16 and arbitrary complex arguments.
//!
//! Evaluation is generic over a [`BesselFloat`] scalar: `f64`, or the
//! double-double [`twofloat::TwoFloat`] (feature `twofloat`, on by default),
//! for which the region boundaries and iteration counts are calibrated.
//!
//! Five kernels cover the plane: a power series near the origin, Miller's
//! backward recurrence for moderate |z|, the Hankel asymptotic expansion for
//! |z| ≥ 38.75, a Yoshida–Padé approximant for K, and a cubic blend for Y and
//! K at orders within 2⁻²⁵ of an integer.
//!
//! The `*_real` functions take their own route along the positive real
//! axis, with Temme's series for K at orders near an integer.
//!
//! # Example
//!
//! ```
//! use hiprec_bessel::{besselj, besselk, Scaling};
//! use num_complex::Complex64;
//!
//! let z = Complex64::new(1.0, 0.0);
//! let j = besselj(0.0, z).unwrap();
//! assert!((j.re - 0.7651976865579666).abs() < 1e-14);
//!
//! let k = besselk(0.0, Complex64::new(8.0, 0.0), Scaling::Unscaled).unwrap();
//! assert!((k.re - 1.4647070522281539e-4).abs() < 1e-17);
//! ```
//!
//! # Caches
//!
//! Coefficient tables are built on first use of an order and kept. The free
//! functions share one [`Bessel`] engine per scalar type; construct a
//! separate engine to control the lifetime of its caches.

pub mod machine;
pub mod types;

mod algo;
mod besh;
mod besi;
mod besj;
mod besk;
mod besy;
mod cache;
mod engine;
mod real;
mod utils;

pub use engine::Bessel;
pub use machine::{BesselFloat, OrderKey};
pub use types::{Error, HankelKind, Scaling};

#[cfg(feature = "twofloat")]
pub use twofloat;

use num_complex::Complex;

// ── Complex argument ──

/// Bessel function of the first kind, J_ν(z).
///
/// # Errors
///
/// [`Error::OrderOutOfRange`] if |ν| > 16 or ν is NaN.
pub fn besselj<T: BesselFloat>(nu: T, z: Complex<T>) -> Result<Complex<T>, Error> {
    T::engine().besselj(nu, z)
}

/// Bessel function of the second kind, Y_ν(z).
///
/// # Errors
///
/// [`Error::OrderOutOfRange`] if |ν| > 16 or ν is NaN.
pub fn bessely<T: BesselFloat>(nu: T, z: Complex<T>) -> Result<Complex<T>, Error> {
    T::engine().bessely(nu, z)
}

/// Modified Bessel function of the first kind, I_ν(z).
///
/// With [`Scaling::Exponential`] the result is e^{−z} I_ν(z).
///
/// # Errors
///
/// [`Error::OrderOutOfRange`] if |ν| > 16 or ν is NaN.
pub fn besseli<T: BesselFloat>(nu: T, z: Complex<T>, scaling: Scaling) -> Result<Complex<T>, Error> {
    T::engine().besseli(nu, z, scaling)
}

/// Modified Bessel function of the second kind, K_ν(z).
///
/// With [`Scaling::Exponential`] the result is e^{z} K_ν(z).
///
/// # Errors
///
/// [`Error::OrderOutOfRange`] if |ν| > 16 or ν is NaN.
pub fn besselk<T: BesselFloat>(nu: T, z: Complex<T>, scaling: Scaling) -> Result<Complex<T>, Error> {
    T::engine().besselk(nu, z, scaling)
}

/// Hankel function, H_ν^(m)(z).
///
/// # Errors
///
/// [`Error::OrderOutOfRange`] if |ν| > 16 or ν is NaN.
pub fn hankel<T: BesselFloat>(kind: HankelKind, nu: T, z: Complex<T>) -> Result<Complex<T>, Error> {
    T::engine().hankel(kind, nu, z)
}

/// Hankel function of the first kind, H⁽¹⁾_ν(z) = J_ν(z) + i Y_ν(z).
///
/// # Errors
///
/// [`Error::OrderOutOfRange`] if |ν| > 16 or ν is NaN.
pub fn hankel1<T: BesselFloat>(nu: T, z: Complex<T>) -> Result<Complex<T>, Error> {
    T::engine().hankel1(nu, z)
}

/// Hankel function of the second kind, H⁽²⁾_ν(z) = J_ν(z) − i Y_ν(z).
///
/// # Errors
///
/// [`Error::OrderOutOfRange`] if |ν| > 16 or ν is NaN.
pub fn hankel2<T: BesselFloat>(nu: T, z: Complex<T>) -> Result<Complex<T>, Error> {
    T::engine().hankel2(nu, z)
}

// ── Real argument ──

/// J_ν(x) for real x ≥ 0; NaN for x < 0.
///
/// # Errors
///
/// [`Error::OrderOutOfRange`] if |ν| > 16 or ν is NaN.
pub fn besselj_real<T: BesselFloat>(nu: T, x: T) -> Result<T, Error> {
    T::engine().besselj_real(nu, x)
}

/// Y_ν(x) for real x ≥ 0; NaN for x < 0.
///
/// # Errors
///
/// [`Error::OrderOutOfRange`] if |ν| > 16 or ν is NaN.
pub fn bessely_real<T: BesselFloat>(nu: T, x: T) -> Result<T, Error> {
    T::engine().bessely_real(nu, x)
}

/// I_ν(x) for real x ≥ 0; NaN for x < 0.
///
/// # Errors
///
/// [`Error::OrderOutOfRange`] if |ν| > 16 or ν is NaN.
pub fn besseli_real<T: BesselFloat>(nu: T, x: T, scaling: Scaling) -> Result<T, Error> {
    T::engine().besseli_real(nu, x, scaling)
}

/// K_ν(x) for real x ≥ 0; NaN for x < 0.
///
/// # Errors
///
/// [`Error::OrderOutOfRange`] if |ν| > 16 or ν is NaN.
pub fn besselk_real<T: BesselFloat>(nu: T, x: T, scaling: Scaling) -> Result<T, Error> {
    T::engine().besselk_real(nu, x, scaling)
}
