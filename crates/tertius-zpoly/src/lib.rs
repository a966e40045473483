//! # tertius-zpoly
//!
//! Sparse univariate polynomials with fixed-width integer coefficients.
//!
//! This crate provides:
//! - `Polynomial`, a canonical sparse map from power to `i64` coefficient
//! - Addition, scalar and monomial multiplication
//! - Exact division over the integers
//!
//! ## Invalid values
//!
//! Operations never panic on well-formed input. Instead, a failed
//! computation yields the *invalid* polynomial (degree `-1`), which absorbs
//! any further arithmetic. `Polynomial::checked_div` reports the reason a
//! division failed as a `DivisionError`.
//!
//! ```
//! use tertius_zpoly::{Polynomial, Term};
//!
//! // (x^2 - 1) / (x - 1) = x + 1
//! let p = Polynomial::from_coeffs(&[-1, 0, 1]);
//! let q = Polynomial::linear(-1, 1);
//! assert_eq!(&p / &q, Polynomial::linear(1, 1));
//!
//! // (x - 1) / (x^2 - 1) fails
//! assert!((&q / &p).is_invalid());
//!
//! assert_eq!(q * Term::new(2, 1), Polynomial::from_coeffs(&[0, -2, 2]));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod arith;
mod division;
pub mod error;
pub mod polynomial;
pub mod term;

#[cfg(test)]
mod proptests;

pub use error::DivisionError;
pub use polynomial::{Polynomial, INVALID_DEGREE};
pub use term::Term;
