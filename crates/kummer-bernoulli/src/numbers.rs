//! Bernoulli numbers.
//!
//! Uses the recurrence obtained from the sum-of-powers identity,
//!
//! ```text
//! B_0 = 1,    B_m = -1/(m+1) · Σ_{j=0}^{m-1} C(m+1, j) · B_j,
//! ```
//!
//! which yields `B_1 = -1/2`. Odd indices from 3 on are zero and are written
//! directly; the corresponding terms are skipped in later sums.

use kummer_integers::{binomial_row, Rational};
use num_traits::{One, Zero};

use crate::error::{check_index, Result};

/// Value of `B_n` when it is known without running the recurrence.
pub(crate) fn closed_form(n: u32) -> Option<Rational> {
    match n {
        0 => Some(Rational::one()),
        1 => Some(Rational::from_i64(-1, 2)),
        _ if n % 2 == 1 => Some(Rational::zero()),
        _ => None,
    }
}

/// Extends `numbers` in place so that it holds `B_0, ..., B_n`.
///
/// Existing entries must already be a correct prefix.
pub(crate) fn extend_bernoulli_numbers(numbers: &mut Vec<Rational>, n: usize) {
    if numbers.is_empty() {
        numbers.push(Rational::one());
    }

    for m in numbers.len()..=n {
        let value = match closed_form(m as u32) {
            Some(value) => value,
            None => {
                let row = binomial_row(m as u64 + 1);
                let sum = numbers
                    .iter()
                    .zip(&row)
                    .filter(|(b, _)| !b.is_zero())
                    .fold(Rational::zero(), |acc, (b, c)| {
                        acc + Rational::from(c.clone()) * b
                    });
                -sum / Rational::from(m as u64 + 1)
            }
        };
        numbers.push(value);
    }
}

/// Computes `B_0, ..., B_n` without validation.
pub(crate) fn fresh_numbers(n: u32) -> Vec<Rational> {
    let mut numbers = Vec::with_capacity(n as usize + 1);
    extend_bernoulli_numbers(&mut numbers, n as usize);
    numbers
}

/// Returns the Bernoulli numbers `B_0, ..., B_n`.
///
/// # Errors
///
/// Returns [`InvalidArgument`](crate::BernoulliError::InvalidArgument) if
/// `n` is negative or beyond [`MAX_INDEX`](crate::MAX_INDEX).
pub fn bernoulli_number_vector(n: i64) -> Result<Vec<Rational>> {
    let n = check_index("n", n)?;
    Ok(fresh_numbers(n))
}

/// Returns the Bernoulli number `B_n`.
///
/// Agrees with `bernoulli_number_vector(m)?[n]` for every `m >= n`.
///
/// # Errors
///
/// Returns [`InvalidArgument`](crate::BernoulliError::InvalidArgument) if
/// `n` is negative or beyond [`MAX_INDEX`](crate::MAX_INDEX).
pub fn bernoulli_number(n: i64) -> Result<Rational> {
    let n = check_index("n", n)?;
    if let Some(value) = closed_form(n) {
        return Ok(value);
    }
    Ok(fresh_numbers(n).swap_remove(n as usize))
}
