//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{DivisionError, Polynomial, Term};

    // Strategy for generating small integer coefficients
    fn small_coeff() -> impl Strategy<Value = i64> {
        -100i64..100i64
    }

    // Strategy for generating small dense polynomials (degree 0-4)
    fn small_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec(small_coeff(), 1..=5).prop_map(Polynomial::from)
    }

    // Strategy for generating non-zero polynomials
    fn nonzero_poly() -> impl Strategy<Value = Polynomial> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    // Unsorted term lists with repeated powers and zero coefficients
    fn raw_terms() -> impl Strategy<Value = Vec<Term>> {
        proptest::collection::vec(
            (-20i64..20i64, 0u32..8u32).prop_map(|(c, p)| Term::new(c, p)),
            0..12,
        )
    }

    fn small_x() -> impl Strategy<Value = i64> {
        -5i64..=5i64
    }

    // Full product built from monomial multiplications.
    fn mul_poly(a: &Polynomial, b: &Polynomial) -> Polynomial {
        b.terms()
            .iter()
            .fold(Polynomial::zero(), |acc, &t| acc + a * t)
    }

    proptest! {
        // Canonical form

        #[test]
        fn from_terms_is_canonical(terms in raw_terms()) {
            let p = Polynomial::from_terms(terms);
            prop_assert!(p.terms().windows(2).all(|w| w[0].power > w[1].power));
            prop_assert!(p.terms().iter().all(|t| t.coefficient != 0));
            let expected = p.leading_term().map_or(0, |t| i64::from(t.power));
            prop_assert_eq!(p.degree(), expected);
        }

        #[test]
        fn from_terms_sums_like_powers(terms in raw_terms()) {
            let p = Polynomial::from_terms(terms.clone());
            for power in 0u32..10 {
                let sum: i64 = terms
                    .iter()
                    .filter(|t| t.power == power)
                    .map(|t| t.coefficient)
                    .sum();
                prop_assert_eq!(p.coeff(power), sum);
            }
        }

        #[test]
        fn normalize_idempotent(terms in raw_terms()) {
            let p = Polynomial::from_terms(terms);
            let mut q = p.clone();
            q.normalize();
            prop_assert_eq!(q, p);
        }

        #[test]
        fn constructors_agree(coeffs in proptest::collection::vec(small_coeff(), 1..=6)) {
            let dense = Polynomial::from_coeffs(&coeffs);
            let mut terms: Vec<Term> = coeffs
                .iter()
                .zip(0u32..)
                .map(|(&c, p)| Term::new(c, p))
                .collect();
            terms.reverse();
            let sparse: Polynomial = terms.into_iter().collect();
            prop_assert_eq!(dense, sparse);
        }

        // Addition

        #[test]
        fn add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn add_identity(a in small_poly()) {
            let zero = Polynomial::zero();
            prop_assert_eq!(&a + &zero, a.clone());
            prop_assert_eq!(&zero + &a, a);
        }

        #[test]
        fn additive_inverse(a in small_poly()) {
            prop_assert!((&a + &(&a * -1)).is_zero());
        }

        #[test]
        fn add_invalid_absorbs(a in small_poly()) {
            prop_assert!((&a + &Polynomial::invalid()).is_invalid());
        }

        #[test]
        fn add_degree_bound(a in small_poly(), b in small_poly()) {
            prop_assert!((&a + &b).degree() <= a.degree().max(b.degree()));
        }

        // Multiplication

        #[test]
        fn scale_identity_and_zero(a in small_poly()) {
            prop_assert_eq!(&a * 1, a.clone());
            let z = &a * 0;
            prop_assert!(z.is_zero());
            prop_assert_eq!(z.degree(), 0);
        }

        #[test]
        fn scale_distributes(a in small_poly(), b in small_poly(), k in small_coeff()) {
            prop_assert_eq!(&(&a + &b) * k, &(&a * k) + &(&b * k));
        }

        #[test]
        fn mul_assign_matches_mul(a in small_poly(), k in small_coeff()) {
            let mut m = a.clone();
            m *= k;
            prop_assert_eq!(m, &a * k);
        }

        #[test]
        fn mul_term_eval(a in small_poly(), c in small_coeff(), n in 0u32..4, x in small_x()) {
            let prod = &a * Term::new(c, n);
            prop_assert_eq!(prod.eval(x), a.eval(x) * c * x.pow(n));
        }

        #[test]
        fn mul_term_degree(a in nonzero_poly(), c in 1i64..50, n in 0u32..4) {
            prop_assert_eq!((&a * Term::new(c, n)).degree(), a.degree() + i64::from(n));
        }

        // Evaluation

        #[test]
        fn eval_add(a in small_poly(), b in small_poly(), x in small_x()) {
            prop_assert_eq!((&a + &b).eval(x), a.eval(x) + b.eval(x));
        }

        // Division

        #[test]
        fn div_inverts_mul(a in small_poly(), b in nonzero_poly()) {
            let product = mul_poly(&a, &b);
            prop_assert_eq!(product.checked_div(&b), Ok(a.clone()));
            prop_assert_eq!(mul_poly(&(&product / &b), &b), product);
        }

        #[test]
        fn div_by_higher_degree_is_invalid(a in small_poly(), b in nonzero_poly(), k in 1u32..3) {
            let b = &b * Term::new(1, u32::try_from(a.degree()).unwrap() + k);
            prop_assume!(!a.is_zero());
            prop_assert!((&a / &b).is_invalid());
            let is_degree_error = matches!(
                a.checked_div(&b),
                Err(DivisionError::DegreeTooHigh { .. })
            );
            prop_assert!(is_degree_error);
        }

        #[test]
        fn div_by_self_is_one(a in nonzero_poly()) {
            prop_assert_eq!(&a / &a, Polynomial::constant(1));
        }

        // Equality

        #[test]
        fn equality_symmetric(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a == b, b == a);
            prop_assert_ne!(&a, &Polynomial::invalid());
        }

        #[test]
        fn equality_transitive(coeffs in proptest::collection::vec(small_coeff(), 1..=5)) {
            let a = Polynomial::from_coeffs(&coeffs);
            let b: Polynomial = coeffs
                .iter()
                .zip(0u32..)
                .map(|(&c, p)| Term::new(c, p))
                .collect();
            let c = Polynomial::from_terms(a.terms().iter().copied().chain([Term::new(0, 9)]));
            prop_assert!(a == b && b == c);
            prop_assert_eq!(&a, &c);
        }

        #[test]
        fn equality_transitive_mixed(a in small_poly(), b in small_poly(), c in small_poly()) {
            if a == b && b == c {
                prop_assert_eq!(a, c);
            }
        }

        #[test]
        fn linear_matches_dense(b in small_coeff(), a in small_coeff()) {
            let lin = Polynomial::linear(b, a);
            let dense = Polynomial::from_coeffs(&[b, a]);
            let sparse = Polynomial::from_terms([Term::new(a, 1), Term::constant(b)]);
            prop_assert!(lin == dense && dense == sparse);
            prop_assert_eq!(lin, sparse);
        }

        #[test]
        fn absent_power_coeff_is_zero(a in small_poly(), power in 5u32..64) {
            prop_assert_eq!(a.coeff(power), 0);
        }
    }
}
