//! Ring operations on [`Polynomial`]: addition, scalar and monomial
//! multiplication.
//!
//! Each operation returns the invalid polynomial when any operand is
//! invalid. Coefficient arithmetic uses native `i64` semantics.

use std::ops::{Add, Mul, MulAssign};

use num_traits::Zero;

use crate::polynomial::Polynomial;
use crate::term::Term;

impl Polynomial {
    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        if self.is_invalid() || other.is_invalid() {
            return Self::invalid();
        }

        let len = self.dense_len().max(other.dense_len());
        let mut coeffs = self.to_dense(len);
        for t in &other.terms {
            coeffs[t.power as usize] += t.coefficient;
        }

        // Leading cancellation is left to normalize.
        Self::from_coeffs(&coeffs)
    }

    /// Multiplies every coefficient by `scale`.
    #[must_use]
    pub fn scale(&self, scale: i64) -> Self {
        if self.is_invalid() {
            return Self::invalid();
        }

        let mut result = self.clone();
        result.scale_in_place(scale);
        result
    }

    /// Multiplies every coefficient by `scale` in place.
    ///
    /// The invalid polynomial stays invalid.
    pub fn scale_in_place(&mut self, scale: i64) {
        for t in &mut self.terms {
            t.coefficient *= scale;
        }
        self.normalize();
    }

    /// Multiplies by the monomial `term.coefficient * x^term.power`.
    #[must_use]
    pub fn mul_term(&self, term: Term) -> Self {
        if self.is_invalid() {
            return Self::invalid();
        }

        let shift = term.power as usize;
        let mut coeffs = vec![0; self.dense_len() + shift];
        for t in &self.terms {
            coeffs[t.power as usize + shift] = t.coefficient * term.coefficient;
        }

        Self::from_coeffs(&coeffs)
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Self) -> Self::Output {
        Polynomial::add(&self, &rhs)
    }
}

impl Add<&Polynomial> for Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Self::Output {
        Polynomial::add(&self, rhs)
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Self) -> Self::Output {
        Polynomial::add(self, rhs)
    }
}

impl Mul<i64> for Polynomial {
    type Output = Polynomial;

    fn mul(mut self, rhs: i64) -> Self::Output {
        self.scale_in_place(rhs);
        self
    }
}

impl Mul<i64> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: i64) -> Self::Output {
        self.scale(rhs)
    }
}

impl MulAssign<i64> for Polynomial {
    fn mul_assign(&mut self, rhs: i64) {
        self.scale_in_place(rhs);
    }
}

impl Mul<Term> for Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Term) -> Self::Output {
        self.mul_term(rhs)
    }
}

impl Mul<Term> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Term) -> Self::Output {
        self.mul_term(rhs)
    }
}

impl Zero for Polynomial {
    fn zero() -> Self {
        Polynomial::zero()
    }

    fn is_zero(&self) -> bool {
        Polynomial::is_zero(self)
    }
}
