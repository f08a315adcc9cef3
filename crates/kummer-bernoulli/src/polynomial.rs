//! Bernoulli polynomials.
//!
//! `B_n(x) = Σ_{k=0}^{n} C(n, k) · B_k · x^(n-k)`, so the coefficient of
//! `x^i` is `C(n, i) · B_{n-i}`.

use kummer_integers::{binomial_row, Rational};
use kummer_poly::RationalPoly;

use crate::error::{check_index, Result};
use crate::numbers::fresh_numbers;

/// Builds `B_n(x)` from a prefix holding at least `B_0, ..., B_n`.
pub(crate) fn polynomial_from_numbers(numbers: &[Rational], n: usize) -> RationalPoly {
    let row = binomial_row(n as u64);
    RationalPoly::new(
        row.into_iter()
            .enumerate()
            .map(|(i, c)| Rational::from(c) * &numbers[n - i])
            .collect(),
    )
}

/// Returns the `n`-th Bernoulli polynomial with its `n + 1` coefficients in
/// ascending order.
///
/// # Errors
///
/// Returns [`InvalidArgument`](crate::BernoulliError::InvalidArgument) if
/// `n` is negative or beyond [`MAX_INDEX`](crate::MAX_INDEX).
pub fn bernoulli_polynomial(n: i64) -> Result<RationalPoly> {
    let n = check_index("n", n)?;
    Ok(polynomial_from_numbers(&fresh_numbers(n), n as usize))
}
