//! Single monomials `c * x^n`.

use std::fmt;

/// A monomial `coefficient * x^power`.
///
/// Terms carry no invariants of their own; a zero coefficient is allowed
/// and is dropped once the term is folded into a [`Polynomial`].
///
/// [`Polynomial`]: crate::Polynomial
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Term {
    /// The integer coefficient.
    pub coefficient: i64,
    /// The exponent of `x`.
    pub power: u32,
}

impl Term {
    /// Creates the term `coefficient * x^power`.
    #[must_use]
    pub const fn new(coefficient: i64, power: u32) -> Self {
        Self { coefficient, power }
    }

    /// Creates the constant term `c`.
    #[must_use]
    pub const fn constant(c: i64) -> Self {
        Self::new(c, 0)
    }

    /// Returns true if the coefficient is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.coefficient == 0
    }
}

impl From<(i64, u32)> for Term {
    fn from((coefficient, power): (i64, u32)) -> Self {
        Self::new(coefficient, power)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.power {
            0 => write!(f, "{}", self.coefficient),
            1 => write!(f, "{}*x", self.coefficient),
            n => write!(f, "{}*x^{n}", self.coefficient),
        }
    }
}
