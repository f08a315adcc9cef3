//! Property-based tests for polynomial evaluation.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::dense::{evaluate_polynomial, RationalPoly};
    use kummer_integers::Rational;

    fn small_rational() -> impl Strategy<Value = Rational> {
        (-50i64..50i64, 1i64..20i64).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    // Degree 0-5, including the empty sequence
    fn small_poly() -> impl Strategy<Value = RationalPoly> {
        proptest::collection::vec(small_rational(), 0..=6).prop_map(RationalPoly::new)
    }

    fn naive_eval(coeffs: &[Rational], x: &Rational) -> Rational {
        coeffs
            .iter()
            .enumerate()
            .map(|(i, c)| c * &x.pow(i as u32))
            .fold(Rational::from(0i64), |acc, t| acc + t)
    }

    proptest! {
        #[test]
        fn horner_matches_direct_summation(p in small_poly(), x in small_rational()) {
            prop_assert_eq!(evaluate_polynomial(p.coeffs(), &x), naive_eval(p.coeffs(), &x));
        }

        #[test]
        fn scale_commutes_with_eval(p in small_poly(), c in small_rational(), x in small_rational()) {
            prop_assert_eq!(p.scale(&c).eval(&x), &c * &p.eval(&x));
        }

        #[test]
        fn trailing_zeros_do_not_change_value(p in small_poly(), x in small_rational()) {
            let mut padded = p.coeffs().to_vec();
            padded.push(Rational::from(0i64));
            prop_assert_eq!(evaluate_polynomial(&padded, &x), p.eval(&x));
        }

        #[test]
        fn translate_shifts_argument(p in small_poly(), a in small_rational(), x in small_rational()) {
            prop_assert_eq!(p.translate(&a).eval(&x), p.eval(&(&x + &a)));
        }
    }
}
