//! Property-based tests for the arithmetic primitives.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{binomial, is_fundamental_discriminant, jacobi, kronecker, Integer, Rational};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn odd_modulus() -> impl Strategy<Value = u64> {
        (0u64..500u64).prop_map(|n| 2 * n + 1)
    }

    fn fundamental() -> impl Strategy<Value = i64> {
        let candidates: Vec<i64> = (-400i64..400i64)
            .filter(|&d| is_fundamental_discriminant(d))
            .collect();
        prop::sample::select(candidates)
    }

    proptest! {
        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = a.gcd(&b);
            prop_assert!((&a % &g).is_zero());
            prop_assert!((&b % &g).is_zero());
        }

        #[test]
        fn rational_distributive(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int(),
            num_c in small_int(),
            den_c in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a);
            let b = Rational::from_i64(num_b, den_b);
            let c = Rational::from_i64(num_c, den_c);
            prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn rational_multiplicative_inverse(num in non_zero_int(), den in non_zero_int()) {
            let a = Rational::from_i64(num, den);
            prop_assert!((&a * &(Rational::one() / &a)).is_one());
        }

        #[test]
        fn rational_denominator_positive(num in small_int(), den in non_zero_int()) {
            let a = Rational::from_i64(num, den);
            prop_assert_eq!(a.denominator().signum(), 1);
            prop_assert!(a.numerator().gcd(&a.denominator()).is_one());
        }

        // Pascal's rule
        #[test]
        fn binomial_pascal(n in 1u64..60u64, k in 1u64..60u64) {
            prop_assert_eq!(binomial(n, k), binomial(n - 1, k - 1) + binomial(n - 1, k));
        }

        #[test]
        fn jacobi_is_multiplicative(a in 0u64..500u64, b in 0u64..500u64, n in odd_modulus()) {
            prop_assert_eq!(jacobi(a * b, n), jacobi(a, n) * jacobi(b, n));
        }

        // Euler's criterion for odd primes
        #[test]
        fn jacobi_matches_euler_criterion(a in 1u64..1000u64) {
            const P: u64 = 1009;
            let mut power = 1u64;
            for _ in 0..(P - 1) / 2 {
                power = power * a % P;
            }
            let expected = if power == 1 { 1 } else { -1 };
            prop_assert_eq!(jacobi(a, P), expected);
        }

        // χ_d is periodic modulo |d| for fundamental d
        #[test]
        fn kronecker_is_periodic_for_fundamental(d in fundamental(), a in 1u64..400u64) {
            let period = d.unsigned_abs();
            prop_assert_eq!(kronecker(d, a), kronecker(d, a + period));
        }
    }
}
