//! Special values expressed through Bernoulli numbers.
//!
//! - `ζ(-n) = (-1)^n · B_{n+1} / (n+1)`
//! - `L(1-k, χ) = -B_{k,χ} / k`
//! - constant term of the weight-`k` Eisenstein series for `χ`:
//!   `-B_{k,χ} / (2k)`
//! - class number of an imaginary quadratic field of discriminant `d`:
//!   `h(d) = -(w/2) · B_{1,χ_d}`, with `w` the number of roots of unity
//! - power sums `Σ_{a=1}^{n} a^k = (B_{k+1}(n+1) - B_{k+1}(1)) / (k+1)`

use kummer_integers::{is_fundamental_discriminant, Integer, Rational};
use tracing::debug;

use crate::engine::BernoulliEngine;
use crate::error::{check_shifted_index, BernoulliError, Result};

/// Validates a weight `k ≥ 1`.
fn check_weight(k: i64) -> Result<i64> {
    if k < 1 {
        return Err(BernoulliError::invalid("k", k, "must be at least 1"));
    }
    Ok(k)
}

impl BernoulliEngine {
    /// Returns `ζ(-n)` for `n ≥ 0`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`](BernoulliError::InvalidArgument) if `n`
    /// is negative or `n + 1` exceeds [`MAX_INDEX`](crate::MAX_INDEX).
    pub fn zeta_at_negative_integer(&self, n: i64) -> Result<Rational> {
        let n = check_shifted_index("n", n)?;
        let m = i64::from(n) + 1;
        let value = self.bernoulli_number(m)? / Rational::from(m);
        Ok(if n % 2 == 0 { value } else { -value })
    }

    /// Returns `L(1-k, χ_d)` for `k ≥ 1`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`](BernoulliError::InvalidArgument) if
    /// `k < 1` or `d` is not admitted by the configured policy.
    pub fn quadratic_l_value(&self, k: i64, d: i64) -> Result<Rational> {
        let k = check_weight(k)?;
        let b = self.quadratic_bernoulli_number(k, d)?;
        Ok(-b / Rational::from(k))
    }

    /// Returns the constant term `-B_{k,χ_d} / (2k)` of the weight-`k`
    /// Eisenstein series attached to `χ_d`.
    ///
    /// For `d = 1` this is the familiar normalization
    /// `E_k = -B_k/(2k) + Σ σ_{k-1}(n) q^n`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`](BernoulliError::InvalidArgument) if
    /// `k < 1` or `d` is not admitted by the configured policy.
    pub fn eisenstein_constant_term(&self, k: i64, d: i64) -> Result<Rational> {
        let k = check_weight(k)?;
        let b = self.quadratic_bernoulli_number(k, d)?;
        Ok(-b / Rational::from(2 * k))
    }

    /// Returns the class number of the imaginary quadratic field of
    /// fundamental discriminant `d < 0`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`](BernoulliError::InvalidArgument) if `d`
    /// is not a negative fundamental discriminant.
    pub fn class_number(&self, d: i64) -> Result<Integer> {
        if d >= 0 {
            return Err(BernoulliError::invalid("d", d, "must be negative"));
        }
        if !is_fundamental_discriminant(d) {
            return Err(BernoulliError::invalid("d", d, "not a fundamental discriminant"));
        }

        let roots_of_unity: i64 = match d {
            -3 => 6,
            -4 => 4,
            _ => 2,
        };
        let b1 = self.quadratic_bernoulli_number(1, d)?;
        let h = -(b1 * Rational::from(roots_of_unity / 2));
        debug_assert!(h.is_integer(), "class number must be an integer, got {h}");
        debug!(d, h = %h, "class number");
        Ok(h.numerator())
    }

    /// Returns `Σ_{a=1}^{n} a^k`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`](BernoulliError::InvalidArgument) if `k`
    /// or `n` is negative, or `k + 1` exceeds [`MAX_INDEX`](crate::MAX_INDEX).
    pub fn sum_of_powers(&self, k: i64, n: i64) -> Result<Integer> {
        let k = check_shifted_index("k", k)?;
        if n < 0 {
            return Err(BernoulliError::invalid("n", n, "must be non-negative"));
        }

        let degree = i64::from(k) + 1;
        let poly = self.bernoulli_polynomial(degree)?;
        let top = poly.eval(&(Rational::from(n) + Rational::from(1i64)));
        let bottom = poly.eval(&Rational::from(1i64));
        let sum = (top - bottom) / Rational::from(degree);
        debug_assert!(sum.is_integer(), "power sum must be an integer, got {sum}");
        Ok(sum.numerator())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(n: i64, d: i64) -> Rational {
        Rational::from_i64(n, d)
    }

    #[test]
    fn test_zeta_at_negative_integers() {
        let engine = BernoulliEngine::default();
        assert_eq!(engine.zeta_at_negative_integer(0).unwrap(), q(-1, 2));
        assert_eq!(engine.zeta_at_negative_integer(1).unwrap(), q(-1, 12));
        assert_eq!(engine.zeta_at_negative_integer(2).unwrap(), q(0, 1));
        assert_eq!(engine.zeta_at_negative_integer(3).unwrap(), q(1, 120));
        assert_eq!(engine.zeta_at_negative_integer(5).unwrap(), q(-1, 252));
        assert!(engine.zeta_at_negative_integer(-1).is_err());
    }

    #[test]
    fn test_shifted_indices_report_caller_argument() {
        let engine = BernoulliEngine::uncached();
        let top = i64::from(crate::MAX_INDEX);

        let err = engine.zeta_at_negative_integer(top).unwrap_err();
        assert!(matches!(
            err,
            BernoulliError::InvalidArgument { argument: "n", value, .. } if value == top
        ));

        let err = engine.sum_of_powers(top, 3).unwrap_err();
        assert!(matches!(
            err,
            BernoulliError::InvalidArgument { argument: "k", value, .. } if value == top
        ));
        assert!(engine.sum_of_powers(i64::MAX, 3).is_err());
    }

    #[test]
    fn test_l_values() {
        let engine = BernoulliEngine::default();
        // L(0, χ_1) = ζ(0)
        assert_eq!(engine.quadratic_l_value(1, 1).unwrap(), q(-1, 2));
        assert_eq!(engine.quadratic_l_value(1, -4).unwrap(), q(1, 2));
        assert_eq!(engine.quadratic_l_value(1, -3).unwrap(), q(1, 3));
        // L(-1, χ_5) = -2/5
        assert_eq!(engine.quadratic_l_value(2, 5).unwrap(), q(-2, 5));
        // L(-2, χ_{-4}) = E_2 / 2 = -1/2
        assert_eq!(engine.quadratic_l_value(3, -4).unwrap(), q(-1, 2));
        assert!(engine.quadratic_l_value(0, 5).is_err());
    }

    #[test]
    fn test_eisenstein_constants() {
        let engine = BernoulliEngine::default();
        assert_eq!(engine.eisenstein_constant_term(4, 1).unwrap(), q(1, 240));
        assert_eq!(engine.eisenstein_constant_term(6, 1).unwrap(), q(-1, 504));
        assert_eq!(engine.eisenstein_constant_term(12, 1).unwrap(), q(691, 65520));
        assert_eq!(engine.eisenstein_constant_term(2, 5).unwrap(), q(-1, 5));
        assert!(engine.eisenstein_constant_term(-2, 1).is_err());
    }

    #[test]
    fn test_class_numbers() {
        let engine = BernoulliEngine::default();
        let table = [
            (-3, 1),
            (-4, 1),
            (-7, 1),
            (-8, 1),
            (-15, 2),
            (-20, 2),
            (-23, 3),
            (-47, 5),
            (-71, 7),
        ];
        for (d, h) in table {
            assert_eq!(engine.class_number(d).unwrap(), Integer::new(h), "h({d})");
        }
        assert!(engine.class_number(5).is_err());
        assert!(engine.class_number(-12).is_err());
        assert!(engine.class_number(0).is_err());
    }

    #[test]
    fn test_sum_of_powers() {
        let engine = BernoulliEngine::default();
        assert_eq!(engine.sum_of_powers(0, 10).unwrap(), Integer::new(10));
        assert_eq!(engine.sum_of_powers(1, 100).unwrap(), Integer::new(5050));
        assert_eq!(engine.sum_of_powers(3, 10).unwrap(), Integer::new(3025));
        assert_eq!(engine.sum_of_powers(2, 0).unwrap(), Integer::new(0));
        assert!(engine.sum_of_powers(-1, 3).is_err());
        assert!(engine.sum_of_powers(2, -3).is_err());
    }
}
