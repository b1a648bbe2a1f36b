//! Cubic blend for Y and K at orders just off an integer.
//!
//! With n = round(ν), s = sign(ν − n) and δ = `INTERPOLATION_THRESHOLD`,
//! the kernel is sampled at n, n + sδ, n + 1.5sδ and n + 2sδ, none of which
//! sits in the ill-conditioned band, and the samples are blended at
//! t = |ν − n| / δ.

use num_complex::Complex;

use super::miller::MillerBackward;
use super::power_series::PowerSeries;
use super::region::INTERPOLATION_THRESHOLD;
use crate::machine::BesselFloat;
use crate::types::Scaling;

/// Y_ν(z) from power-series samples.
pub(crate) fn y_power_series<T: BesselFloat>(
    series: &PowerSeries<T>,
    nu: T,
    z: Complex<T>,
) -> Complex<T> {
    near_integer(nu, |mu| series.y(mu, z))
}

/// Y_ν(z) from Miller samples.
pub(crate) fn y_miller<T: BesselFloat>(
    miller: &MillerBackward<T>,
    nu: T,
    z: Complex<T>,
) -> Complex<T> {
    near_integer(nu, |mu| miller.y(mu, z))
}

/// K_ν(z) from power-series samples, ν ≥ 0.
pub(crate) fn k_power_series<T: BesselFloat>(
    series: &PowerSeries<T>,
    nu: T,
    z: Complex<T>,
    scaling: Scaling,
) -> Complex<T> {
    near_integer(nu, |mu| series.k(mu, z, scaling))
}

fn near_integer<T, F>(nu: T, sample: F) -> Complex<T>
where
    T: BesselFloat,
    F: Fn(T) -> Complex<T>,
{
    let delta = T::from_f64(INTERPOLATION_THRESHOLD);
    let n = nu.round();
    let alpha = nu - n;
    let step = alpha.signum() * delta;

    let y0 = sample(n);
    let y1 = sample(n + step);
    let y2 = sample(n + step * T::from_f64(1.5));
    let y3 = sample(n + step * T::from_f64(2.0));

    cubic(alpha.abs() / delta, y0, y1, y2, y3)
}

/// Cubic through samples at t = 0, 1, 1.5, 2.
fn cubic<T: BesselFloat>(
    t: T,
    y0: Complex<T>,
    y1: Complex<T>,
    y2: Complex<T>,
    y3: Complex<T>,
) -> Complex<T> {
    let c = |a: f64, b: f64, d: f64| T::from_f64(a) + t * (T::from_f64(b) + t * T::from_f64(d));

    let w0 = -c(13.0, -9.0, 2.0) / T::from_f64(6.0);
    let w1 = c(6.0, -7.0, 2.0);
    let w2 = -c(16.0, -24.0, 8.0) / T::from_f64(3.0);
    let w3 = c(3.0, -5.0, 2.0) / T::from_f64(2.0);

    y0 + (y0 * w0 + y1 * w1 + y2 * w2 + y3 * w3) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    fn close(a: Complex64, b: Complex64, tol: f64) -> bool {
        (a - b).norm() <= tol * b.norm()
    }

    #[test]
    fn cubic_hits_the_nodes() {
        let y = [1.0, -2.0, 0.5, 3.0].map(|v| Complex64::new(v, 0.0));
        for (t, expected) in [(0.0, y[0]), (1.0, y[1]), (1.5, y[2]), (2.0, y[3])] {
            let got = cubic(t, y[0], y[1], y[2], y[3]);
            assert!((got - expected).norm() < 1e-14, "t = {t}");
        }
    }

    #[test]
    fn cubic_reproduces_cubics() {
        let p = |t: f64| Complex64::new(1.0 - 2.0 * t + 0.5 * t * t * t, t * t);
        let got = cubic(0.3, p(0.0), p(1.0), p(1.5), p(2.0));
        assert!((got - p(0.3)).norm() < 1e-14);
    }

    #[test]
    fn y_just_above_integer() {
        let series = PowerSeries::<f64>::new();
        let got = y_power_series(&series, 1.0 + 1e-9, Complex64::new(2.0, 0.0));
        let expected = Complex64::new(-0.107_032_432_191_666_92, 0.0);
        assert!(close(got, expected, 1e-6));
    }

    #[test]
    fn y_just_below_integer_miller() {
        let miller = MillerBackward::<f64>::new();
        let got = y_miller(&miller, 1.0 - 2e-8, Complex64::new(8.0, 1.0));
        let expected = Complex64::new(-0.224_534_942_501_514_38, 0.287_152_189_952_886_55);
        assert!(close(got, expected, 1e-6));
    }

    #[test]
    fn k_on_both_sides() {
        let series = PowerSeries::<f64>::new();
        let got = k_power_series(&series, 2.0 + 1.5e-8, Complex64::new(1.5, 0.5), Scaling::Unscaled);
        let expected = Complex64::new(0.340_626_370_688_683_9, -0.414_959_296_257_712_16);
        assert!(close(got, expected, 1e-6));

        let got = k_power_series(&series, 3.0 - 1e-8, Complex64::new(3.0, 0.0), Scaling::Unscaled);
        assert!(close(got, Complex64::new(0.122_170_374_771_437_58, 0.0), 1e-6));
    }

    #[test]
    fn exact_integer_returns_first_sample() {
        let series = PowerSeries::<f64>::new();
        let z = Complex64::new(2.0, 0.0);
        assert_eq!(y_power_series(&series, 1.0, z), series.y(1.0, z));
    }

    #[cfg(feature = "twofloat")]
    #[test]
    fn twofloat_near_integer_y() {
        use twofloat::TwoFloat;

        let series = PowerSeries::<TwoFloat>::new();
        let nu = TwoFloat::from(1.0) + TwoFloat::from(1e-9);
        let z = Complex::new(TwoFloat::from(2.0), TwoFloat::from(0.0));
        let got = y_power_series(&series, nu, z);
        // Y_{1+1e-9}(2) with 1e-9 read as the nearest f64
        let expected = TwoFloat::new_add(-0.10703243219166692, -4.789947540914874e-18);
        let err = ((got.re - expected) / expected).abs();
        assert!(err < TwoFloat::from(1e-20), "{err:?}");
    }
}
