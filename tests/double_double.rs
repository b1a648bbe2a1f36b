//! Double-double accuracy against high-precision reference values.

#![cfg(feature = "twofloat")]

use hiprec_bessel::twofloat::TwoFloat;
use hiprec_bessel::{
    Scaling, besseli, besseli_real, besselj, besselj_real, besselk, besselk_real, bessely,
    bessely_real, hankel1,
};
use num_complex::Complex;
use num_traits::FloatConst;

type C = Complex<TwoFloat>;

fn tf(x: f64) -> TwoFloat {
    TwoFloat::from(x)
}

fn c(re: f64, im: f64) -> C {
    Complex::new(tf(re), tf(im))
}

/// Reference value given as unevaluated hi + lo pairs per component.
fn exact(re: (f64, f64), im: (f64, f64)) -> C {
    Complex::new(TwoFloat::new_add(re.0, re.1), TwoFloat::new_add(im.0, im.1))
}

fn norm1(z: C) -> TwoFloat {
    z.re.abs() + z.im.abs()
}

fn rel_err(a: C, b: C) -> f64 {
    (norm1(a - b) / norm1(b)).hi()
}

#[test]
fn k0_at_eight() {
    let v = besselk_real(tf(0.0), tf(8.0), Scaling::Unscaled).unwrap();
    let expected = TwoFloat::new_add(1.464_707_052_228_154e-4, -4.776_743_919_155_475_6e-21);
    assert!(((v - expected) / expected).abs().hi() < 1e-26, "{v:?}");
}

#[test]
fn j_fractional_order_large_argument() {
    let v = besselj(tf(1.25), c(64.0, -8.0)).unwrap();
    let expected = exact(
        (9.214_592_901_551_1, 4.005_534_578_173_994e-16),
        (-147.615_957_027_358_83, -1.008_578_514_049_846_8e-14),
    );
    assert!(rel_err(v, expected) < 1e-25, "{v:?}");
}

#[test]
fn reference_values() {
    let cases = [
        (
            besselj(tf(0.0), c(1.0, 0.0)),
            exact((0.765_197_686_557_966_6, -5.394_209_422_798_618_7e-17), (0.0, 0.0)),
        ),
        (
            bessely(tf(0.3), c(5.0, 2.0)),
            exact(
                (-0.903_891_564_365_064_2, 3.236_182_301_584_569e-17),
                (-0.887_931_754_917_399_2, 2.147_010_552_765_046e-17),
            ),
        ),
        (
            besseli(tf(2.5), c(3.0, -4.0), Scaling::Unscaled),
            exact(
                (-1.505_376_900_844_460_9, -2.677_672_138_993_180_5e-17),
                (2.055_163_614_885_522, -1.896_309_679_491_725e-17),
            ),
        ),
        (
            besselk(tf(1.25), c(0.5, 0.5), Scaling::Unscaled),
            exact(
                (0.544_262_609_300_328_3, 4.766_388_076_786_634e-17),
                (-1.440_162_368_434_239, 5.472_753_161_849_626e-17),
            ),
        ),
        (
            hankel1(tf(3.5), c(20.0, 1.0)),
            exact(
                (0.009_792_008_394_684_457, 4.013_162_352_936_282e-19),
                (0.066_370_333_066_391_69, 2.583_319_405_896_284e-20),
            ),
        ),
        (
            besselj(tf(7.0), c(12.0, 3.0)),
            exact(
                (-1.029_186_658_402_291, -2.589_135_670_528_223_3e-17),
                (-1.054_076_853_063_647_5, 1.080_288_927_078_591_3e-16),
            ),
        ),
        (
            bessely(tf(2.0), c(4.0, 0.0)),
            exact((0.215_903_594_603_615, -1.020_074_852_464_394_2e-18), (0.0, 0.0)),
        ),
        (
            besseli(tf(0.75), c(45.0, 10.0), Scaling::Unscaled),
            exact(
                (-1.827_104_101_601_732_4e18, 118.272_830_581_374_76),
                (-9.203_940_801_907_857e17, -28.619_037_358_584_645),
            ),
        ),
        (
            besselk(tf(3.0), c(-2.0, 1.0), Scaling::Unscaled),
            exact(
                (-0.774_651_461_878_061_6, -3.442_056_616_821_922e-17),
                (-0.428_793_204_491_517_37, -1.499_096_345_647_542_5e-18),
            ),
        ),
        (
            besselj(tf(-2.5), c(6.0, 1.0)),
            exact(
                (-0.469_943_891_025_475_5, -2.050_810_768_821_847e-17),
                (0.117_373_754_448_712_01, 2.207_014_476_328_118e-18),
            ),
        ),
        (
            bessely(tf(16.0), c(20.0, 0.0)),
            exact((0.176_187_477_953_753_53, 1.824_835_413_829_597_6e-18), (0.0, 0.0)),
        ),
        (
            besselj(tf(16.0), c(1e-3, 0.0)),
            exact((7.292_903_537_141_349e-67, 2.556_298_092_105_557_4e-84), (0.0, 0.0)),
        ),
    ];
    for (n, (v, expected)) in cases.into_iter().enumerate() {
        let v = v.unwrap();
        assert!(rel_err(v, expected) < 1e-24, "case {n}: {v:?}");
    }
}

#[test]
fn near_integer_orders() {
    let d = 2f64.powi(-40);
    let cases = [
        (
            bessely(tf(3.0 + d), c(2.5, 0.5)),
            exact(
                (-0.696_204_354_945_835_8, -1.212_290_058_412_665_5e-17),
                (0.235_823_279_409_836_25, -3.266_328_594_416_511_6e-19),
            ),
        ),
        (
            bessely(tf(3.0 - d), c(2.5, 0.5)),
            exact(
                (-0.696_204_354_945_319_1, 3.073_688_175_224_188e-17),
                (0.235_823_279_409_583_67, 7.260_850_290_987_573e-18),
            ),
        ),
        (
            besselk(tf(2.0 + d), c(1.5, 1.0), Scaling::Unscaled),
            exact(
                (-0.043_189_605_010_944_446, 4.107_595_028_141_599_7e-19),
                (-0.437_395_336_886_157_34, 2.602_538_871_424_263_2e-17),
            ),
        ),
        (
            bessely(tf(3.0 - d), c(18.0, 2.0)),
            exact(
                (0.158_242_043_413_959_28, 3.609_351_164_409_009e-18),
                (0.647_493_757_946_388_2, -6.800_409_161_374_530_4e-18),
            ),
        ),
    ];
    for (n, (v, expected)) in cases.into_iter().enumerate() {
        let v = v.unwrap();
        assert!(rel_err(v, expected) < 1e-22, "case {n}: {v:?}");
    }
}

#[test]
fn wronskians() {
    let pi = <TwoFloat as FloatConst>::PI();
    for (re, im) in [(0.8, 0.1), (5.0, 0.5), (11.0, 1.0), (42.0, 0.3)] {
        let z = c(re, im);
        for nu in [0.0, 1.7, 6.25] {
            let (n0, n1) = (tf(nu), tf(nu + 1.0));

            // J(ν+1) Y(ν) − J(ν) Y(ν+1) = 2/(πz)
            let a = besselj(n1, z).unwrap() * bessely(n0, z).unwrap();
            let b = besselj(n0, z).unwrap() * bessely(n1, z).unwrap();
            let rhs = (z * pi).inv() * tf(2.0);
            let scale = norm1(a) + norm1(b);
            assert!((norm1(a - b - rhs) / scale).hi() < 1e-24, "JY {nu} {re} {im}");

            // I(ν) K(ν+1) + I(ν+1) K(ν) = 1/z
            let w = besseli(n0, z, Scaling::Exponential).unwrap()
                * besselk(n1, z, Scaling::Exponential).unwrap()
                + besseli(n1, z, Scaling::Exponential).unwrap()
                    * besselk(n0, z, Scaling::Exponential).unwrap();
            assert!(rel_err(w, z.inv()) < 1e-24, "IK {nu} {re} {im}");
        }
    }
}

#[test]
fn continuity_across_region_boundaries() {
    let eps = 1e-27;
    let nudge = |x: f64| Complex::new(TwoFloat::new_add(x, eps), tf(0.0));
    let zero = tf(0.0);

    // power series / Miller at Re z = 7.5, then the Hankel radius
    for x in [7.5, 38.75] {
        let a = besselj(zero, c(x, 0.0)).unwrap();
        let b = besselj(zero, nudge(x)).unwrap();
        assert!(rel_err(b, a) < 1e-24, "J at {x}");
    }
    let a = bessely(zero, c(38.75, 0.0)).unwrap();
    let b = bessely(zero, nudge(38.75)).unwrap();
    assert!(rel_err(b, a) < 1e-24);

    // K: power series disk / Padé
    let a = besselk(tf(1.0), c(4.0, 0.0), Scaling::Unscaled).unwrap();
    let b = besselk(tf(1.0), nudge(4.0), Scaling::Unscaled).unwrap();
    assert!(rel_err(b, a) < 1e-24);
}

#[test]
fn real_axis_values() {
    let cases = [
        (
            besselk_real(tf(0.05), tf(0.3), Scaling::Unscaled),
            TwoFloat::new_add(1.375_421_270_935_460_5, 8.661_961_835_813_412e-17),
        ),
        (
            besselk_real(tf(2.95), tf(1.5), Scaling::Unscaled),
            TwoFloat::new_add(1.717_680_630_447_273_1, -2.820_452_261_515_555_5e-17),
        ),
        (
            besselk_real(tf(15.9), tf(1.0), Scaling::Unscaled),
            TwoFloat::new_add(2.989_948_918_606_366e16, 1.636_285_581_843_170_3),
        ),
        (
            bessely_real(tf(2.001), tf(3.0)),
            TwoFloat::new_add(-0.160_863_663_908_293_96, 1.085_515_610_976_658e-17),
        ),
        (
            besselj_real(tf(2.5), tf(38.8)),
            TwoFloat::new_add(-0.118_465_683_216_979_66, -6.214_785_225_329_553e-18),
        ),
        (
            besseli_real(tf(1.5), tf(38.8), Scaling::Unscaled),
            TwoFloat::new_add(4_423_644_060_811_621.0, 0.170_574_464_763_386_42),
        ),
    ];
    for (n, (v, expected)) in cases.into_iter().enumerate() {
        let v = v.unwrap();
        assert!(((v - expected) / expected).abs().hi() < 1e-26, "case {n}: {v:?}");
    }

    // interpolated just below an integer order
    let nu = TwoFloat::from(3.0 - 2f64.powi(-30));
    let v = bessely_real(nu, tf(1.0)).unwrap();
    let expected = TwoFloat::new_add(-5.821_517_597_616_354, -3.641_030_637_430_189e-16);
    assert!(((v - expected) / expected).abs().hi() < 1e-22, "{v:?}");
}

#[test]
fn reference_values_per_kernel() {
    let cases = [
        (
            besselj(tf(0.0), c(10.0, 0.0)),
            exact((-0.245_935_764_451_348_35, 1.353_808_764_108_032e-17), (0.0, 0.0)),
        ),
        (
            bessely(tf(0.0), c(10.0, 0.0)),
            exact((0.055_671_167_283_599_395, -3.112_947_912_174_714e-18), (0.0, 0.0)),
        ),
        (
            besseli(tf(0.0), c(2.0, 20.0), Scaling::Unscaled),
            exact(
                (0.615_110_409_328_958_1, -1.283_091_875_421_388_4e-17),
                (0.257_749_234_549_236_43, 9.078_855_416_690_208e-18),
            ),
        ),
        (
            besselk(tf(0.0), c(0.5, 8.0), Scaling::Unscaled),
            exact(
                (-0.207_382_241_001_260_32, -1.312_286_587_832_994e-18),
                (-0.169_741_985_757_520_25, -1.296_800_428_674_686_7e-17),
            ),
        ),
        (
            besselj(tf(0.0), c(20.0, 20.0)),
            exact(
                (26_598_964.051_830_307, 4.809_921_337_745_102e-10),
                (-25_006_015.587_322_082, -4.395_859_096_534_787e-10),
            ),
        ),
    ];
    for (n, (v, expected)) in cases.into_iter().enumerate() {
        let v = v.unwrap();
        assert!(rel_err(v, expected) < 1e-24, "case {n}: {v:?}");
    }
}

#[test]
fn region_boundaries_stay_finite() {
    let coords = [0.0, 1.0, 3.9, 4.1, 5.9, 6.1, 7.5, 7.6, 14.6, 38.7, 38.8];
    let finite = |v: C| v.re.hi().is_finite() && v.im.hi().is_finite();
    for nu in [-7.5, -2.95, 0.0, 2.0 + 1e-9, 3.0 - 1e-9, 12.5] {
        let nu = tf(nu);
        for re in coords {
            for im in coords {
                if re == 0.0 && im == 0.0 {
                    continue;
                }
                for z in [c(re, im), c(-re, im)] {
                    assert!(finite(besselj(nu, z).unwrap()), "J {nu:?} {z:?}");
                    assert!(finite(bessely(nu, z).unwrap()), "Y {nu:?} {z:?}");
                    assert!(finite(besseli(nu, z, Scaling::Unscaled).unwrap()), "I {nu:?} {z:?}");
                    assert!(finite(besselk(nu, z, Scaling::Unscaled).unwrap()), "K {nu:?} {z:?}");
                }
            }
        }
        for x in [1e-3, 1.99, 2.01, 5.7, 7.6, 38.8, 38.875] {
            let x = tf(x);
            assert!(besselj_real(nu, x).unwrap().hi().is_finite(), "J {nu:?} {x:?}");
            assert!(bessely_real(nu, x).unwrap().hi().is_finite(), "Y {nu:?} {x:?}");
            assert!(
                besselk_real(nu, x, Scaling::Unscaled).unwrap().hi().is_finite(),
                "K {nu:?} {x:?}"
            );
        }
    }
}
