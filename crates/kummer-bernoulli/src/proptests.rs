//! Property-based tests for Bernoulli identities.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use kummer_integers::{is_fundamental_discriminant, Integer, Rational};
    use kummer_poly::RationalPoly;

    use crate::{
        bernoulli_number, bernoulli_number_vector, bernoulli_polynomial,
        quadratic_bernoulli_number, BernoulliEngine,
    };

    fn small_rational() -> impl Strategy<Value = Rational> {
        (-30i64..30i64, 1i64..12i64).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    fn fundamental() -> impl Strategy<Value = i64> {
        let candidates: Vec<i64> = (-60i64..60i64)
            .filter(|&d| is_fundamental_discriminant(d))
            .collect();
        prop::sample::select(candidates)
    }

    fn sign(n: u32) -> Rational {
        if n % 2 == 0 {
            Rational::from(1i64)
        } else {
            Rational::from(-1i64)
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn number_is_vector_entry(n in 0i64..40, extra in 0i64..8) {
            let vector = bernoulli_number_vector(n + extra).unwrap();
            prop_assert_eq!(bernoulli_number(n).unwrap(), vector[n as usize].clone());
        }

        // B_n(x + 1) - B_n(x) = n x^(n-1)
        #[test]
        fn difference_equation(n in 1u32..16, x in small_rational()) {
            let poly = bernoulli_polynomial(i64::from(n)).unwrap();
            let lhs = poly.eval(&(&x + &Rational::from(1i64))) - poly.eval(&x);
            let rhs = Rational::from(u64::from(n)) * x.pow(n - 1);
            prop_assert_eq!(lhs, rhs);
        }

        // B_n'(x) = n B_{n-1}(x)
        #[test]
        fn derivative_identity(n in 1u32..16) {
            let poly = bernoulli_polynomial(i64::from(n)).unwrap();
            let lower = bernoulli_polynomial(i64::from(n) - 1).unwrap();
            prop_assert_eq!(poly.derivative(), lower.scale(&Rational::from(u64::from(n))));
        }

        // B_n(1 - x) = (-1)^n B_n(x)
        #[test]
        fn reflection_identity(n in 0u32..16, x in small_rational()) {
            let poly = bernoulli_polynomial(i64::from(n)).unwrap();
            let reflected = poly.eval(&(Rational::from(1i64) - &x));
            prop_assert_eq!(reflected, sign(n) * poly.eval(&x));
        }

        // B_n(x + y) through the translated polynomial
        #[test]
        fn translation_identity(n in 0u32..12, y in small_rational(), x in small_rational()) {
            let poly = bernoulli_polynomial(i64::from(n)).unwrap();
            prop_assert_eq!(poly.translate(&y).eval(&x), poly.eval(&(&x + &y)));
        }

        #[test]
        fn quadratic_parity(k in 0i64..10, d in fundamental()) {
            prop_assume!(d != 1);
            let even_character = d > 0;
            let even_weight = k % 2 == 0;
            let value = quadratic_bernoulli_number(k, d).unwrap();
            if even_character != even_weight {
                prop_assert_eq!(value, Rational::from(0i64));
            }
        }

        // The parity shortcut never disagrees with the full character sum.
        #[test]
        fn quadratic_matches_generalized(k in 0i64..8, d in fundamental()) {
            let engine = BernoulliEngine::uncached();
            let chi = engine.character(d).unwrap();
            let generalized = engine
                .generalized_bernoulli_number(k, chi.modulus(), |a| i64::from(chi.value(a)))
                .unwrap();
            prop_assert_eq!(quadratic_bernoulli_number(k, d).unwrap(), generalized);
        }

        #[test]
        fn power_sums_match_brute_force(k in 0u32..8, n in 0u64..40) {
            let engine = BernoulliEngine::default();
            let expected = (1..=n).fold(Integer::new(0), |acc, a| acc + Integer::from(a).pow(k));
            let n = i64::try_from(n).unwrap();
            prop_assert_eq!(engine.sum_of_powers(i64::from(k), n).unwrap(), expected);
        }

        #[test]
        fn polynomial_constant_term_is_number(n in 0i64..30) {
            let poly: RationalPoly = bernoulli_polynomial(n).unwrap();
            prop_assert_eq!(poly.coeff(0), bernoulli_number(n).unwrap());
        }
    }
}
