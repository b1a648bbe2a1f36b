use hiprec_bessel::*;
use num_complex::Complex;
use hiprec_bessel::twofloat::TwoFloat;

fn main() {
    let z = Complex::new(1.0_f64, 2.0);

    // -- Complex argument --
    println!("=== Complex argument (f64) ===");
    let j = besselj(0.5, z).unwrap();
    println!("J_0.5({z}) = {j}");

    let y = bessely(1.0, z).unwrap();
    println!("Y_1({z}) = {y}");

    let i = besseli(0.0, z, Scaling::Unscaled).unwrap();
    println!("I_0({z}) = {i}");

    let k = besselk(1.0, z, Scaling::Unscaled).unwrap();
    println!("K_1({z}) = {k}");

    let h1 = hankel1(0.0, z).unwrap();
    println!("H^(1)_0({z}) = {h1}");

    let h2 = hankel2(0.0, z).unwrap();
    println!("H^(2)_0({z}) = {h2}");

    // -- Negative order --
    println!("\n=== Negative order ===");
    let j_neg = besselj(-0.5, z).unwrap();
    println!("J_-0.5({z}) = {j_neg}");

    let k_neg = besselk(-3.0, z, Scaling::Unscaled).unwrap();
    let k_pos = besselk(3.0, z, Scaling::Unscaled).unwrap();
    println!("K_-3({z}) = {k_neg}");
    println!("K_3({z})  = {k_pos}  (should be equal)");

    // -- Scaled computation --
    println!("\n=== Scaled functions ===");
    let k_sc = besselk(1.0, z, Scaling::Exponential).unwrap();
    println!("exp(z)*K_1({z}) = {k_sc}");

    let i_sc = besseli(1.0, z, Scaling::Exponential).unwrap();
    println!("exp(-z)*I_1({z}) = {i_sc}");

    // -- Real argument --
    println!("\n=== Real argument ===");
    println!("K_0(8) = {:e}", besselk_real(0.0, 8.0, Scaling::Unscaled).unwrap());
    println!("J_0(-1) = {} (negative argument)", besselj_real(0.0, -1.0).unwrap());
    println!("J_17(1) = {:?}", besselj_real(17.0, 1.0));

    // -- Double-double --
    println!("\n=== Double-double ===");
    let zt = Complex::new(TwoFloat::from(64.0), TwoFloat::from(-8.0));
    let jt = besselj(TwoFloat::from(1.25), zt).unwrap();
    println!("J_1.25({zt}) = {jt}");

    let engine = Bessel::<TwoFloat>::new();
    let kt = engine.besselk_real(TwoFloat::from(0.0), TwoFloat::from(8.0), Scaling::Unscaled).unwrap();
    println!("K_0(8) = {kt}");
}
