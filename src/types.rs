//! Core types for Bessel function computation.

use core::fmt;

use crate::algo::region::MAX_ORDER;

/// Scaling option for the modified Bessel functions.
///
/// The `Exponential` variant returns `factor · f(z)`, where factor is:
/// - I: `exp(-z)`
/// - K: `exp(z)`
///
/// For large positive `Re(z)` this keeps the result representable where the
/// unscaled value would overflow (I) or underflow (K).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scaling {
    /// No scaling applied.
    #[default]
    Unscaled,
    /// Exponential scaling to prevent overflow/underflow.
    Exponential,
}

/// Kind of Hankel function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HankelKind {
    /// H^(1) = J + iY.
    First,
    /// H^(2) = J − iY.
    Second,
}

/// Error type for Bessel function computation.
///
/// Degenerate arguments (NaN, zero, infinity) are not errors; they evaluate
/// to the classical limiting values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// |ν| exceeds the supported maximum, or ν is NaN.
    OrderOutOfRange,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OrderOutOfRange => {
                write!(
                    f,
                    "order out of range: nu with an absolute value greater than {MAX_ORDER} is not supported"
                )
            }
        }
    }
}

impl core::error::Error for Error {}
