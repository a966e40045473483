//! Exact division of integer polynomials.
//!
//! Schoolbook long division that only succeeds when every quotient
//! coefficient is an integer and the final remainder is zero. This is
//! stricter than division over Q: `2x / 4` fails here even though it is
//! `x/2` over the rationals.

use std::ops::Div;

use tracing::{debug, trace};

use crate::error::DivisionError;
use crate::polynomial::Polynomial;
use crate::term::Term;

impl Polynomial {
    /// Divides `self` by `divisor`, requiring an exact integer quotient.
    ///
    /// The zero polynomial divided by any valid polynomial is zero.
    ///
    /// # Errors
    ///
    /// - [`DivisionError::InvalidOperand`] if either side is invalid
    /// - [`DivisionError::DegreeTooHigh`] if `divisor` has the higher degree
    /// - [`DivisionError::DivisionByZero`] if `divisor` is zero
    /// - [`DivisionError::NotExact`] if some leading coefficient does not
    ///   divide evenly or a non-zero remainder is left over
    pub fn checked_div(&self, divisor: &Self) -> Result<Self, DivisionError> {
        if self.is_invalid() || divisor.is_invalid() {
            debug!("division with invalid operand");
            return Err(DivisionError::InvalidOperand);
        }
        if self.is_zero() {
            return Ok(self.clone());
        }
        if divisor.degree > self.degree {
            debug!(
                dividend = self.degree,
                divisor = divisor.degree,
                "divisor degree exceeds dividend degree"
            );
            return Err(DivisionError::DegreeTooHigh {
                dividend: self.degree,
                divisor: divisor.degree,
            });
        }
        let Some(&lead) = divisor.leading_term() else {
            debug!("division by the zero polynomial");
            return Err(DivisionError::DivisionByZero);
        };

        // Both degrees are powers of some term here, so the span fits in u32.
        let Ok(span) = u32::try_from(self.degree - divisor.degree) else {
            return Err(DivisionError::DegreeTooHigh {
                dividend: self.degree,
                divisor: divisor.degree,
            });
        };
        let mut quotient = vec![0; span as usize + 1];
        let mut remainder = self.clone();

        for power in (0..=span).rev() {
            let lead_rem = remainder.coeff(power + lead.power);
            let Some((q, neg_q)) = exact_quotient(lead_rem, lead.coefficient)
                .and_then(|q| q.checked_neg().map(|neg_q| (q, neg_q)))
            else {
                debug!(
                    power,
                    numerator = lead_rem,
                    denominator = lead.coefficient,
                    "leading coefficient does not divide evenly"
                );
                break;
            };

            trace!(power, q, "quotient coefficient");
            quotient[power as usize] = q;
            remainder = remainder.add(&divisor.mul_term(Term::new(neg_q, power)));
        }

        if remainder.is_zero() {
            Ok(Self::from_coeffs(&quotient))
        } else {
            debug!(%remainder, "non-zero remainder");
            Err(DivisionError::NotExact)
        }
    }
}

/// Returns `num / den` if it is an exact integer.
fn exact_quotient(num: i64, den: i64) -> Option<i64> {
    match num.checked_rem(den) {
        Some(0) => num.checked_div(den),
        _ => None,
    }
}

impl Div for Polynomial {
    type Output = Polynomial;

    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(&rhs).unwrap_or_default()
    }
}

impl Div<&Polynomial> for Polynomial {
    type Output = Polynomial;

    fn div(self, rhs: &Polynomial) -> Self::Output {
        self.checked_div(rhs).unwrap_or_default()
    }
}

impl Div for &Polynomial {
    type Output = Polynomial;

    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs).unwrap_or_default()
    }
}
