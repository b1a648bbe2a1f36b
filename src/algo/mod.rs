//! Numerical kernels and the region decision table.
//!
//! Every kernel expects its argument already folded into the closed first
//! quadrant; the continuation formulas live in the upper-interface files
//! (`besj.rs`, `besy.rs`, …). All items are `pub(crate)`.
//!
//! - [`power_series`]: series about z = 0, small |z|.
//! - [`miller`]: backward recurrence in the order, moderate |z|.
//! - [`hankel`]: asymptotic expansion, |z| ≥ 38.75.
//! - [`pade`]: rational approximant of K for Re z ≥ 1.
//! - [`interpolate`]: Y and K at orders just off an integer.
//! - [`temme`]: Temme's series for real K near integer orders.

pub(crate) mod gamma;
pub(crate) mod region;

pub(crate) mod hankel;
pub(crate) mod interpolate;
pub(crate) mod miller;
pub(crate) mod pade;
pub(crate) mod pade_coef;
pub(crate) mod power_series;
pub(crate) mod temme;
