//! Error types.

use thiserror::Error;

/// Reasons an exact division can fail.
///
/// The `/` operator folds all of these into the invalid polynomial; use
/// [`Polynomial::checked_div`] to see which one occurred.
///
/// [`Polynomial::checked_div`]: crate::Polynomial::checked_div
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DivisionError {
    /// One of the operands was the invalid polynomial.
    #[error("operand is the invalid polynomial")]
    InvalidOperand,

    /// The divisor has a higher degree than the dividend.
    #[error("divisor degree {divisor} exceeds dividend degree {dividend}")]
    DegreeTooHigh {
        /// Degree of the dividend.
        dividend: i64,
        /// Degree of the divisor.
        divisor: i64,
    },

    /// The divisor is the zero polynomial.
    #[error("division by the zero polynomial")]
    DivisionByZero,

    /// Some quotient coefficient is not an integer, or the remainder is
    /// non-zero.
    #[error("division is not exact over the integers")]
    NotExact,
}
