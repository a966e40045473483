//! Sparse univariate polynomials over `i64`.
//!
//! A [`Polynomial`] is a sparse map from power to coefficient, kept as a
//! vector of [`Term`]s in canonical form. Every constructor and operation
//! ends in [`Polynomial::normalize`], so callers only ever observe
//! canonical values.
//!
//! Failure is signalled by the *invalid* polynomial (degree `-1`, no terms),
//! which absorbs every arithmetic operation it takes part in.

use std::cmp::Reverse;
use std::fmt;

use crate::term::Term;

/// Degree carried by the invalid polynomial.
pub const INVALID_DEGREE: i64 = -1;

/// A univariate polynomial with `i64` coefficients.
///
/// Canonical form:
/// - no two terms share a power
/// - no term has a zero coefficient
/// - terms are sorted by strictly decreasing power
/// - `degree` is the leading power, or `0` when there are no terms
/// - the invalid polynomial has `degree == -1` and no terms
///
/// Note that the zero polynomial has degree `0`, not `-1`; an empty term
/// list with degree `0` is how zero is represented.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "PolynomialRepr", into = "PolynomialRepr")
)]
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Polynomial {
    /// Cached degree, or [`INVALID_DEGREE`].
    pub(crate) degree: i64,
    /// Terms in decreasing power order.
    pub(crate) terms: Vec<Term>,
}

/// Serialized form of a [`Polynomial`].
///
/// Deserialization goes through [`Polynomial::from_terms`], so the stored
/// degree is only consulted to recognise the invalid polynomial.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct PolynomialRepr {
    degree: i64,
    terms: Vec<Term>,
}

#[cfg(feature = "serde")]
impl From<PolynomialRepr> for Polynomial {
    fn from(repr: PolynomialRepr) -> Self {
        if repr.degree < 0 {
            Self::invalid()
        } else {
            Self::from_terms(repr.terms)
        }
    }
}

#[cfg(feature = "serde")]
impl From<Polynomial> for PolynomialRepr {
    fn from(poly: Polynomial) -> Self {
        Self {
            degree: poly.degree,
            terms: poly.terms,
        }
    }
}

impl Polynomial {
    /// Creates the invalid polynomial.
    #[must_use]
    pub const fn invalid() -> Self {
        Self {
            degree: INVALID_DEGREE,
            terms: Vec::new(),
        }
    }

    /// Creates the zero polynomial (degree `0`, no terms).
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            degree: 0,
            terms: Vec::new(),
        }
    }

    /// Creates a polynomial from a list of terms.
    ///
    /// Repeated powers are merged and zero coefficients dropped.
    #[must_use]
    pub fn from_terms<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = Term>,
    {
        // Any non-negative placeholder; normalize computes the real degree.
        let mut poly = Self {
            degree: 1,
            terms: terms.into_iter().collect(),
        };
        poly.normalize();
        poly
    }

    /// Creates a polynomial from dense coefficients in ascending power order.
    ///
    /// `coeffs[i]` is the coefficient of `x^i`. An empty slice yields the
    /// invalid polynomial.
    #[must_use]
    pub fn from_coeffs(coeffs: &[i64]) -> Self {
        let mut poly = Self {
            degree: i64::try_from(coeffs.len()).map_or(i64::MAX, |n| n - 1),
            terms: coeffs
                .iter()
                .zip(0u32..)
                .map(|(&c, power)| Term::new(c, power))
                .collect(),
        };
        poly.normalize();
        poly
    }

    /// Creates the binomial `a*x + b`.
    #[must_use]
    pub fn linear(b: i64, a: i64) -> Self {
        let mut poly = Self {
            degree: 1,
            terms: vec![Term::new(b, 0), Term::new(a, 1)],
        };
        poly.normalize();
        poly
    }

    /// Creates the constant polynomial `c`.
    #[must_use]
    pub fn constant(c: i64) -> Self {
        Self::linear(c, 0)
    }

    /// Restores canonical form.
    ///
    /// Invalid polynomials lose all their terms. Otherwise terms are sorted
    /// by decreasing power, equal powers are summed, zero coefficients are
    /// removed and the degree is recomputed.
    pub(crate) fn normalize(&mut self) {
        if self.degree < 0 {
            self.terms.clear();
            return;
        }

        self.terms.sort_by_key(|t| Reverse(t.power));

        // `dedup_by` hands us (later, kept); fold the later one into the kept one.
        self.terms.dedup_by(|next, kept| {
            if next.power == kept.power {
                kept.coefficient += next.coefficient;
                true
            } else {
                false
            }
        });

        self.terms.retain(|t| !t.is_zero());

        self.degree = self.terms.first().map_or(0, |t| i64::from(t.power));
    }

    /// Returns the degree, `0` for the zero polynomial and `-1` if invalid.
    #[must_use]
    pub const fn degree(&self) -> i64 {
        self.degree
    }

    /// Returns the coefficient of `x^power`, or `0` if absent.
    #[must_use]
    pub fn coeff(&self, power: u32) -> i64 {
        self.terms
            .iter()
            .find(|t| t.power == power)
            .map_or(0, |t| t.coefficient)
    }

    /// Returns the terms in decreasing power order.
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Returns the leading (highest power) term.
    #[must_use]
    pub fn leading_term(&self) -> Option<&Term> {
        self.terms.first()
    }

    /// Returns the number of non-zero terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms (zero or invalid).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns true if this is the invalid polynomial.
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        self.degree == INVALID_DEGREE
    }

    /// Returns true if this is the (valid) zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.degree == 0 && self.terms.is_empty()
    }

    /// Evaluates at `x` using sparse Horner's method.
    ///
    /// The invalid polynomial evaluates to `0`.
    #[must_use]
    pub fn eval(&self, x: i64) -> i64 {
        let Some(lead) = self.terms.first() else {
            return 0;
        };

        let mut acc = 0;
        let mut prev = lead.power;
        for t in &self.terms {
            acc = acc * x.pow(prev - t.power) + t.coefficient;
            prev = t.power;
        }
        acc * x.pow(prev)
    }

    /// Scatters the terms into a dense buffer of length `len`.
    ///
    /// Powers at or beyond `len` are skipped.
    pub(crate) fn to_dense(&self, len: usize) -> Vec<i64> {
        let mut dense = vec![0; len];
        for t in &self.terms {
            if let Some(slot) = dense.get_mut(t.power as usize) {
                *slot += t.coefficient;
            }
        }
        dense
    }

    /// Length of the dense buffer covering powers `0..=degree`.
    ///
    /// Only meaningful for valid polynomials.
    pub(crate) fn dense_len(&self) -> usize {
        usize::try_from(self.degree + 1).unwrap_or(0)
    }
}

impl Default for Polynomial {
    fn default() -> Self {
        Self::invalid()
    }
}

impl FromIterator<Term> for Polynomial {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        Self::from_terms(iter)
    }
}

impl From<&[i64]> for Polynomial {
    fn from(coeffs: &[i64]) -> Self {
        Self::from_coeffs(coeffs)
    }
}

impl From<Vec<i64>> for Polynomial {
    fn from(coeffs: Vec<i64>) -> Self {
        Self::from_coeffs(&coeffs)
    }
}

impl From<Term> for Polynomial {
    fn from(term: Term) -> Self {
        Self::from_terms([term])
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_invalid() {
            return write!(f, "<invalid>");
        }
        if self.terms.is_empty() {
            return write!(f, "0");
        }

        let terms: Vec<String> = self.terms.iter().map(ToString::to_string).collect();
        write!(f, "{}", terms.join(" + "))
    }
}
