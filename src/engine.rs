//! The evaluation engine: kernels, their caches, and the public methods.

use num_complex::Complex;

use crate::algo::hankel::HankelExpansion;
use crate::algo::miller::MillerBackward;
use crate::algo::pade::YoshidaPade;
use crate::algo::power_series::PowerSeries;
use crate::algo::temme::TemmeSeries;
use crate::besh::besh;
use crate::besi::besi;
use crate::besj::besj;
use crate::besk::besk;
use crate::besy::besy;
use crate::cache::SinCosPiCache;
use crate::real::{besi_real, besj_real, besk_real, besy_real};
use crate::machine::BesselFloat;
use crate::types::{Error, HankelKind, Scaling};

/// Bessel and Hankel function evaluator for the scalar `T`.
///
/// Owns every coefficient cache. Caches fill on first use of an order and
/// are shared by all methods, so repeated calls at the same order only pay
/// for the sums. An engine is `Sync` and may be shared between threads.
///
/// The free functions of the crate root use the per-type engine returned by
/// [`BesselFloat::engine`]; a separate engine only matters when its caches
/// should be dropped together with it.
///
/// # Example
///
/// ```
/// use hiprec_bessel::Bessel;
/// use num_complex::Complex64;
///
/// let bessel = Bessel::<f64>::new();
/// let j = bessel.besselj(0.0, Complex64::new(1.0, 0.0)).unwrap();
/// assert!((j.re - 0.7651976865579666).abs() < 1e-14);
/// ```
pub struct Bessel<T> {
    pub(crate) series: PowerSeries<T>,
    pub(crate) miller: MillerBackward<T>,
    pub(crate) hankel: HankelExpansion<T>,
    pub(crate) pade: YoshidaPade<T>,
    pub(crate) temme: TemmeSeries<T>,
    pub(crate) trig: SinCosPiCache<T>,
}

impl<T: BesselFloat> Bessel<T> {
    /// Engine with empty caches.
    pub fn new() -> Self {
        Bessel {
            series: PowerSeries::new(),
            miller: MillerBackward::new(),
            hankel: HankelExpansion::new(),
            pade: YoshidaPade::new(),
            temme: TemmeSeries::new(),
            trig: SinCosPiCache::new(),
        }
    }

    /// Bessel function of the first kind, J_ν(z).
    ///
    /// # Errors
    ///
    /// [`Error::OrderOutOfRange`] if |ν| > 16 or ν is NaN.
    pub fn besselj(&self, nu: T, z: Complex<T>) -> Result<Complex<T>, Error> {
        besj(self, nu, z)
    }

    /// Bessel function of the second kind, Y_ν(z).
    ///
    /// # Errors
    ///
    /// [`Error::OrderOutOfRange`] if |ν| > 16 or ν is NaN.
    pub fn bessely(&self, nu: T, z: Complex<T>) -> Result<Complex<T>, Error> {
        besy(self, nu, z)
    }

    /// Modified Bessel function of the first kind, I_ν(z), or e^{−z} I_ν(z)
    /// with [`Scaling::Exponential`].
    ///
    /// # Errors
    ///
    /// [`Error::OrderOutOfRange`] if |ν| > 16 or ν is NaN.
    pub fn besseli(&self, nu: T, z: Complex<T>, scaling: Scaling) -> Result<Complex<T>, Error> {
        besi(self, nu, z, scaling)
    }

    /// Modified Bessel function of the second kind, K_ν(z), or e^{z} K_ν(z)
    /// with [`Scaling::Exponential`].
    ///
    /// # Errors
    ///
    /// [`Error::OrderOutOfRange`] if |ν| > 16 or ν is NaN.
    pub fn besselk(&self, nu: T, z: Complex<T>, scaling: Scaling) -> Result<Complex<T>, Error> {
        besk(self, nu, z, scaling)
    }

    /// Hankel function H⁽¹⁾_ν(z) or H⁽²⁾_ν(z).
    ///
    /// # Errors
    ///
    /// [`Error::OrderOutOfRange`] if |ν| > 16 or ν is NaN.
    pub fn hankel(&self, kind: HankelKind, nu: T, z: Complex<T>) -> Result<Complex<T>, Error> {
        besh(self, kind, nu, z)
    }

    /// H⁽¹⁾_ν(z) = J_ν(z) + i Y_ν(z).
    ///
    /// # Errors
    ///
    /// [`Error::OrderOutOfRange`] if |ν| > 16 or ν is NaN.
    pub fn hankel1(&self, nu: T, z: Complex<T>) -> Result<Complex<T>, Error> {
        besh(self, HankelKind::First, nu, z)
    }

    /// H⁽²⁾_ν(z) = J_ν(z) − i Y_ν(z).
    ///
    /// # Errors
    ///
    /// [`Error::OrderOutOfRange`] if |ν| > 16 or ν is NaN.
    pub fn hankel2(&self, nu: T, z: Complex<T>) -> Result<Complex<T>, Error> {
        besh(self, HankelKind::Second, nu, z)
    }

    /// J_ν(x) for real x; NaN for x < 0.
    ///
    /// # Errors
    ///
    /// [`Error::OrderOutOfRange`] if |ν| > 16 or ν is NaN.
    pub fn besselj_real(&self, nu: T, x: T) -> Result<T, Error> {
        besj_real(self, nu, x)
    }

    /// Y_ν(x) for real x; NaN for x < 0.
    ///
    /// # Errors
    ///
    /// [`Error::OrderOutOfRange`] if |ν| > 16 or ν is NaN.
    pub fn bessely_real(&self, nu: T, x: T) -> Result<T, Error> {
        besy_real(self, nu, x)
    }

    /// I_ν(x) for real x; NaN for x < 0.
    ///
    /// # Errors
    ///
    /// [`Error::OrderOutOfRange`] if |ν| > 16 or ν is NaN.
    pub fn besseli_real(&self, nu: T, x: T, scaling: Scaling) -> Result<T, Error> {
        besi_real(self, nu, x, scaling)
    }

    /// K_ν(x) for real x; NaN for x < 0.
    ///
    /// # Errors
    ///
    /// [`Error::OrderOutOfRange`] if |ν| > 16 or ν is NaN.
    pub fn besselk_real(&self, nu: T, x: T, scaling: Scaling) -> Result<T, Error> {
        besk_real(self, nu, x, scaling)
    }
}

impl<T: BesselFloat> Default for Bessel<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_axis_rejects_negative_argument() {
        let bessel = Bessel::<f64>::new();
        assert!(bessel.besselj_real(0.0, -1.0).is_ok_and(f64::is_nan));
        assert!(bessel.besselk_real(0.5, -2.0, Scaling::Unscaled).is_ok_and(f64::is_nan));
        assert_eq!(bessel.bessely_real(17.0, -1.0), Err(Error::OrderOutOfRange));
    }

    #[test]
    fn real_axis_matches_complex_axis() {
        let bessel = Bessel::<f64>::new();
        let z = |x: f64| Complex::new(x, 0.0);
        let close = |a: f64, b: f64| (a - b).abs() <= 1e-13 * b.abs();
        for (nu, x) in [(0.0, 1.0), (1.5, 6.0), (2.95, 1.5), (3.0, 38.8)] {
            let j = bessel.besselj_real(nu, x).unwrap_or(f64::NAN);
            assert!(close(j, bessel.besselj(nu, z(x)).unwrap_or_default().re), "J {nu} {x}");
            let k = bessel.besselk_real(nu, x, Scaling::Unscaled).unwrap_or(f64::NAN);
            let kc = bessel.besselk(nu, z(x), Scaling::Unscaled).unwrap_or_default().re;
            assert!(close(k, kc), "K {nu} {x}");
        }
    }

    #[test]
    fn engine_is_shareable() {
        fn assert_sync<S: Sync + Send>() {}
        assert_sync::<Bessel<f64>>();
    }
}
