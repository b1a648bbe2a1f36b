//! Region selection for the four function families.
//!
//! Every dispatcher first folds `z` into the closed first quadrant. The
//! functions here then decide, from `ν` and the folded `z` alone, which
//! kernel evaluates the value. They are pure so the boundaries can be tested
//! without evaluating anything.
//!
//! The numeric boundaries are calibration data for double-double accuracy.

use num_complex::Complex;

use crate::machine::BesselFloat;
use crate::types::Error;
use crate::utils::zabs;

/// Largest supported |ν|.
pub(crate) const MAX_ORDER: f64 = 16.0;

/// |ν − round(ν)| below this is treated as an exact integer (2⁻¹⁰⁰⁰).
pub(crate) const NEARLY_INTEGER_EPS: f64 = 9.332636185032189e-302;

/// Distance from an integer inside which Y and K are interpolated (2⁻²⁵).
pub(crate) const INTERPOLATION_THRESHOLD: f64 = 2.9802322387695312e-8;

/// |z| at or above which the Hankel expansion is used.
pub(crate) const HANKEL_THRESHOLD: f64 = 38.75;

/// Largest Im z handled by the direct Miller recurrence for J and Y.
pub(crate) const MILLER_THRESHOLD: f64 = 6.0;

/// Smallest Re z handled by the Padé approximant for K.
pub(crate) const K_PADE_THRESHOLD: f64 = 1.0;

/// |z| at or below which K is summed as a power series.
pub(crate) const K_NEAR_ZERO_THRESHOLD: f64 = 4.0;

/// How much earlier Y leaves the power series compared to J.
pub(crate) const JY_POWER_SERIES_BIAS: f64 = 2.0;

/// x at or above which the real-axis functions use the Hankel expansion.
pub(crate) const REAL_HANKEL_THRESHOLD: f64 = 38.875;

/// x at or below which real K is summed about zero; Padé above.
pub(crate) const REAL_K_NEAR_ZERO_THRESHOLD: f64 = 2.0;

/// Smallest |ν − round(ν)| for which the real Y and K power series are
/// used at a non-integer order (2⁻³).
pub(crate) const REAL_SERIES_MIN_OFFSET: f64 = 0.125;

/// Reject orders outside [−16, 16] and NaN.
#[inline]
pub(crate) fn check_order<T: BesselFloat>(nu: T) -> Result<(), Error> {
    if nu.abs() <= T::from_f64(MAX_ORDER) {
        Ok(())
    } else {
        Err(Error::OrderOutOfRange)
    }
}

/// Nearest integer to `nu`. Callers have validated |ν| ≤ 16.
#[inline]
pub(crate) fn round_order<T: BesselFloat>(nu: T) -> i32 {
    nu.round().to_i32().unwrap_or(0)
}

/// Largest integer not above `nu`.
#[inline]
pub(crate) fn floor_order<T: BesselFloat>(nu: T) -> i32 {
    nu.floor().to_i32().unwrap_or(0)
}

/// `Some(n)` when `nu` is within 2⁻¹⁰⁰⁰ of the integer `n`.
#[inline]
pub(crate) fn nearly_integer<T: BesselFloat>(nu: T) -> Option<i32> {
    let n = round_order(nu);
    if (nu - T::from_f64(n as f64)).abs() < T::from_f64(NEARLY_INTEGER_EPS) {
        Some(n)
    } else {
        None
    }
}

/// Upper bound on the real coordinate for which the power series is used,
/// as a function of the order and the other coordinate.
///
/// `7.5 + |ν|(0.357 + 0.00523|ν|) + x(0.467 − 0.0151|ν|)`
#[inline]
pub(crate) fn power_series_threshold<T: BesselFloat>(nu: T, x: T) -> T {
    let nu_abs = nu.abs();

    T::from_f64(7.5)
        + nu_abs * (T::from_f64(3.57e-1) + nu_abs * T::from_f64(5.23e-3))
        + x * (T::from_f64(4.67e-1) - nu_abs * T::from_f64(1.51e-2))
}

/// Round up to an even count.
#[inline]
fn even_ceil(x: f64) -> usize {
    let m = x.ceil().max(2.0) as usize;
    m.div_ceil(2) * 2
}

/// Starting index of the backward recurrence for J and Y.
#[inline]
pub(crate) fn jy_iteration_start(re: f64) -> usize {
    even_ceil(3.8029e1 + re * 1.6342e0)
}

/// Starting index of the backward recurrence for I.
#[inline]
pub(crate) fn i_iteration_start(re: f64, im: f64) -> usize {
    even_ceil(3.3612e1 + re * 1.3557e0 + im * 1.8485e0 - re * im * 4.3649e-2)
}

/// Whether a Y or K series must be interpolated around `round(ν)`.
#[inline]
pub(crate) fn interpolate_near_round<T: BesselFloat>(nu: T) -> bool {
    nearly_integer(nu).is_none()
        && (nu.round() - nu).abs() < T::from_f64(INTERPOLATION_THRESHOLD)
}

/// Whether a Miller Y must be interpolated, measured from `ceil(ν)`.
///
/// Only orders just below an integer put the fractional part of the
/// recurrence close to zero.
#[inline]
pub(crate) fn interpolate_near_ceil<T: BesselFloat>(nu: T) -> bool {
    nearly_integer(nu).is_none()
        && (nu.ceil() - nu).abs() < T::from_f64(INTERPOLATION_THRESHOLD)
}

/// Kernel for a direct evaluation of Y.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum YKernel {
    PowerSeries,
    PowerSeriesInterpolated,
    Miller,
    MillerInterpolated,
}

/// Kernel for J at a folded argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum JRegion {
    Hankel,
    PowerSeries,
    Miller,
    /// `e^{iπν/2} · conj(I_ν(Im z + i Re z))`, Miller kernel.
    RotatedI,
}

/// Kernel for Y at a folded argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum YRegion {
    Hankel,
    Direct(YKernel),
    /// Combination of I and K at the swapped argument.
    Connection,
}

/// Kernel for I at a folded argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IRegion {
    Hankel,
    PowerSeries,
    Miller,
}

/// Kernel for K at a folded argument, with ν ≥ 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KRegion {
    Hankel,
    PowerSeries,
    PowerSeriesInterpolated,
    Pade,
    /// Combination of I at `z` and Y at the swapped argument.
    Connection,
}

/// Y kernel for `z` below the Hankel radius, ignoring the Miller band.
///
/// Also used for the Y term of the K connection formula, where the Miller
/// recurrence is taken regardless of Im z.
#[inline]
pub(crate) fn y_kernel<T: BesselFloat>(nu: T, z: Complex<T>) -> YKernel {
    let bias = T::from_f64(JY_POWER_SERIES_BIAS);
    if z.re <= power_series_threshold(nu, z.im) - bias {
        if interpolate_near_round(nu) {
            YKernel::PowerSeriesInterpolated
        } else {
            YKernel::PowerSeries
        }
    } else if interpolate_near_ceil(nu) {
        YKernel::MillerInterpolated
    } else {
        YKernel::Miller
    }
}

/// Whether I at `z` is summed as a power series rather than by Miller.
#[inline]
pub(crate) fn i_uses_power_series<T: BesselFloat>(nu: T, z: Complex<T>) -> bool {
    z.im <= power_series_threshold(nu, z.re)
}

/// `z` must lie in the closed first quadrant.
pub(crate) fn select_j<T: BesselFloat>(nu: T, z: Complex<T>) -> JRegion {
    if zabs(z) >= T::from_f64(HANKEL_THRESHOLD) {
        JRegion::Hankel
    } else if z.re <= power_series_threshold(nu, z.im) {
        JRegion::PowerSeries
    } else if z.im <= T::from_f64(MILLER_THRESHOLD) {
        JRegion::Miller
    } else {
        JRegion::RotatedI
    }
}

/// `z` must lie in the closed first quadrant.
pub(crate) fn select_y<T: BesselFloat>(nu: T, z: Complex<T>) -> YRegion {
    let bias = T::from_f64(JY_POWER_SERIES_BIAS);

    if zabs(z) >= T::from_f64(HANKEL_THRESHOLD) {
        YRegion::Hankel
    } else if z.re <= power_series_threshold(nu, z.im) - bias
        || z.im <= T::from_f64(MILLER_THRESHOLD)
    {
        YRegion::Direct(y_kernel(nu, z))
    } else {
        YRegion::Connection
    }
}

/// `z` must lie in the closed first quadrant.
pub(crate) fn select_i<T: BesselFloat>(nu: T, z: Complex<T>) -> IRegion {
    if zabs(z) >= T::from_f64(HANKEL_THRESHOLD) {
        IRegion::Hankel
    } else if i_uses_power_series(nu, z) {
        IRegion::PowerSeries
    } else {
        IRegion::Miller
    }
}

/// `z` must lie in the closed first quadrant and `nu` must be non-negative.
pub(crate) fn select_k<T: BesselFloat>(nu: T, z: Complex<T>) -> KRegion {
    let az = zabs(z);

    if az >= T::from_f64(HANKEL_THRESHOLD) {
        KRegion::Hankel
    } else if az <= T::from_f64(K_NEAR_ZERO_THRESHOLD) {
        if interpolate_near_round(nu) {
            KRegion::PowerSeriesInterpolated
        } else {
            KRegion::PowerSeries
        }
    } else if z.re >= T::from_f64(K_PADE_THRESHOLD) {
        KRegion::Pade
    } else {
        KRegion::Connection
    }
}

/// Kernel for real K at x > 0, with ν ≥ 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RealKRegion {
    Hankel,
    PowerSeries,
    /// Temme's series, for orders near but not at an integer.
    Temme,
    Pade,
}

/// Whether the real Y or K power series is accurate at this order: an
/// integer, or at least 1/8 away from one.
#[inline]
pub(crate) fn real_series_accepts<T: BesselFloat>(nu: T) -> bool {
    nearly_integer(nu).is_some()
        || (nu.round() - nu).abs() >= T::from_f64(REAL_SERIES_MIN_OFFSET)
}

/// `x` must be positive and finite.
pub(crate) fn select_j_real<T: BesselFloat>(nu: T, x: T) -> JRegion {
    if x >= T::from_f64(REAL_HANKEL_THRESHOLD) {
        JRegion::Hankel
    } else if x <= power_series_threshold(nu, T::zero()) {
        JRegion::PowerSeries
    } else {
        JRegion::Miller
    }
}

/// `x` must be positive and finite.
///
/// Off the integers the Miller recurrence carries the near-integer orders,
/// so the power series is never interpolated here.
pub(crate) fn select_y_real<T: BesselFloat>(nu: T, x: T) -> YRegion {
    let bias = T::from_f64(JY_POWER_SERIES_BIAS);

    if x >= T::from_f64(REAL_HANKEL_THRESHOLD) {
        YRegion::Hankel
    } else if x <= power_series_threshold(nu, T::zero()) - bias && real_series_accepts(nu) {
        YRegion::Direct(YKernel::PowerSeries)
    } else if interpolate_near_ceil(nu) {
        YRegion::Direct(YKernel::MillerInterpolated)
    } else {
        YRegion::Direct(YKernel::Miller)
    }
}

/// `x` must be positive and finite.
pub(crate) fn select_i_real<T: BesselFloat>(x: T) -> IRegion {
    if x >= T::from_f64(REAL_HANKEL_THRESHOLD) {
        IRegion::Hankel
    } else {
        IRegion::PowerSeries
    }
}

/// `x` must be positive and finite and `nu` non-negative.
pub(crate) fn select_k_real<T: BesselFloat>(nu: T, x: T) -> RealKRegion {
    if x >= T::from_f64(REAL_HANKEL_THRESHOLD) {
        RealKRegion::Hankel
    } else if x <= T::from_f64(REAL_K_NEAR_ZERO_THRESHOLD) {
        if real_series_accepts(nu) {
            RealKRegion::PowerSeries
        } else {
            RealKRegion::Temme
        }
    } else {
        RealKRegion::Pade
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn constants_are_exact_powers_of_two() {
        assert_eq!(NEARLY_INTEGER_EPS, 2.0_f64.powi(-1000));
        assert_eq!(INTERPOLATION_THRESHOLD, 2.0_f64.powi(-25));
    }

    #[test]
    fn order_range() {
        assert!(check_order(16.0_f64).is_ok());
        assert!(check_order(-16.0_f64).is_ok());
        assert_eq!(check_order(16.5_f64), Err(Error::OrderOutOfRange));
        assert_eq!(check_order(f64::NAN), Err(Error::OrderOutOfRange));
        assert_eq!(check_order(f64::INFINITY), Err(Error::OrderOutOfRange));
    }

    #[test]
    fn nearly_integer_detection() {
        assert_eq!(nearly_integer(3.0_f64), Some(3));
        assert_eq!(nearly_integer(-2.0_f64), Some(-2));
        assert_eq!(nearly_integer(2.5_f64), None);
        assert_eq!(nearly_integer(3.0_f64 + 1e-15), None);
    }

    #[test]
    fn threshold_formula() {
        assert!((power_series_threshold(0.0_f64, 0.0) - 7.5).abs() < 1e-15);
        let expected = 7.5 + 2.0 * (0.357 + 2.0 * 0.00523) + 3.0 * (0.467 - 2.0 * 0.0151);
        assert!((power_series_threshold(-2.0_f64, 3.0) - expected).abs() < 1e-14);
    }

    #[test]
    fn iteration_start_is_even() {
        assert_eq!(jy_iteration_start(0.0), 40);
        assert_eq!(jy_iteration_start(10.0), 56);
        let m = i_iteration_start(3.0, 20.0);
        assert_eq!(m % 2, 0);
        assert!(m >= 2);
    }

    #[test]
    fn interpolation_criteria() {
        let below = 3.0 - 1e-9;
        assert!(interpolate_near_round(below));
        assert!(interpolate_near_ceil(below));

        let above = 3.0 + 1e-9;
        assert!(interpolate_near_round(above));
        assert!(!interpolate_near_ceil(above));

        assert!(!interpolate_near_round(3.0_f64));
        assert!(!interpolate_near_round(3.25_f64));
    }

    #[test]
    fn j_regions() {
        assert_eq!(select_j(0.5, c(40.0, 0.0)), JRegion::Hankel);
        assert_eq!(select_j(0.5, c(3.0, 0.0)), JRegion::PowerSeries);
        assert_eq!(select_j(0.5, c(20.0, 2.0)), JRegion::Miller);
        assert_eq!(select_j(0.5, c(20.0, 20.0)), JRegion::RotatedI);
    }

    #[test]
    fn j_hankel_boundary_is_inclusive() {
        assert_eq!(select_j(1.0, c(38.75, 0.0)), JRegion::Hankel);
        assert_ne!(select_j(1.0, c(38.7499, 0.0)), JRegion::Hankel);
    }

    #[test]
    fn y_regions() {
        assert_eq!(select_y(0.5, c(3.0, 0.0)), YRegion::Direct(YKernel::PowerSeries));
        assert_eq!(select_y(0.5, c(20.0, 2.0)), YRegion::Direct(YKernel::Miller));
        assert_eq!(select_y(0.5, c(20.0, 20.0)), YRegion::Connection);
        assert_eq!(
            select_y(2.0 + 1e-9, c(3.0, 0.0)),
            YRegion::Direct(YKernel::PowerSeriesInterpolated)
        );
        assert_eq!(
            select_y(2.0 - 1e-9, c(20.0, 1.0)),
            YRegion::Direct(YKernel::MillerInterpolated)
        );
        assert_eq!(select_y(2.0 + 1e-9, c(20.0, 1.0)), YRegion::Direct(YKernel::Miller));
    }

    #[test]
    fn y_leaves_power_series_before_j() {
        // 7.5 - 2 < 6 < 7.5
        assert_eq!(select_j(0.0, c(6.0, 0.0)), JRegion::PowerSeries);
        assert_eq!(select_y(0.0, c(6.0, 0.0)), YRegion::Direct(YKernel::Miller));
    }

    #[test]
    fn i_regions() {
        assert_eq!(select_i(0.5, c(39.0, 0.0)), IRegion::Hankel);
        assert_eq!(select_i(0.5, c(20.0, 3.0)), IRegion::PowerSeries);
        assert_eq!(select_i(0.5, c(2.0, 20.0)), IRegion::Miller);
    }

    #[test]
    fn k_regions() {
        assert_eq!(select_k(0.5, c(0.0, 40.0)), KRegion::Hankel);
        assert_eq!(select_k(0.5, c(4.0, 0.0)), KRegion::PowerSeries);
        assert_eq!(select_k(1e-9, c(1.0, 1.0)), KRegion::PowerSeriesInterpolated);
        assert_eq!(select_k(0.5, c(1.0, 8.0)), KRegion::Pade);
        assert_eq!(select_k(0.5, c(0.5, 8.0)), KRegion::Connection);
    }

    #[test]
    fn real_series_offset() {
        assert!(real_series_accepts(3.0_f64));
        assert!(real_series_accepts(3.125_f64));
        assert!(real_series_accepts(-2.5_f64));
        assert!(!real_series_accepts(3.1_f64));
        assert!(!real_series_accepts(-2.95_f64));
        assert!(!real_series_accepts(1.0_f64 + 1e-9));
    }

    #[test]
    fn real_hankel_radius_is_wider() {
        assert_eq!(select_j(1.0, c(38.8, 0.0)), JRegion::Hankel);
        assert_eq!(select_j_real(1.0, 38.8), JRegion::Miller);
        assert_eq!(select_j_real(1.0, 38.875), JRegion::Hankel);
        assert_eq!(select_y_real(1.0, 38.8), YRegion::Direct(YKernel::Miller));
        assert_eq!(select_i_real(38.8), IRegion::PowerSeries);
        assert_eq!(select_i_real(38.875), IRegion::Hankel);
        assert_eq!(select_k_real(1.0, 38.875), RealKRegion::Hankel);
    }

    #[test]
    fn real_j_regions() {
        assert_eq!(select_j_real(0.0, 7.5), JRegion::PowerSeries);
        assert_eq!(select_j_real(0.0, 7.6), JRegion::Miller);
        // 7.5 + 16 (0.357 + 16 · 0.00523)
        assert_eq!(select_j_real(-16.0, 14.5), JRegion::PowerSeries);
        assert_eq!(select_j_real(-16.0, 14.7), JRegion::Miller);
    }

    #[test]
    fn real_y_regions() {
        assert_eq!(select_y_real(0.5, 3.0), YRegion::Direct(YKernel::PowerSeries));
        assert_eq!(select_y_real(2.0, 3.0), YRegion::Direct(YKernel::PowerSeries));
        assert_eq!(select_y_real(2.001, 3.0), YRegion::Direct(YKernel::Miller));
        assert_eq!(select_y_real(-2.95, 4.0), YRegion::Direct(YKernel::Miller));
        assert_eq!(
            select_y_real(3.0 - 1e-9, 1.0),
            YRegion::Direct(YKernel::MillerInterpolated)
        );
        assert_eq!(select_y_real(0.5, 5.6), YRegion::Direct(YKernel::PowerSeries));
        assert_eq!(select_y_real(0.5, 5.7), YRegion::Direct(YKernel::Miller));
    }

    #[test]
    fn real_k_regions() {
        assert_eq!(select_k_real(0.5, 2.0), RealKRegion::PowerSeries);
        assert_eq!(select_k_real(3.0, 0.1), RealKRegion::PowerSeries);
        assert_eq!(select_k_real(2.95, 1.5), RealKRegion::Temme);
        assert_eq!(select_k_real(1e-9, 1.0), RealKRegion::Temme);
        assert_eq!(select_k_real(2.95, 2.5), RealKRegion::Pade);
        assert_eq!(select_k_real(0.5, 3.0), RealKRegion::Pade);
    }
}
