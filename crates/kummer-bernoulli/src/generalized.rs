//! Generalized Bernoulli numbers `B_{k,χ}`.
//!
//! For a character `χ` of modulus `N`,
//!
//! ```text
//! B_{k,χ} = N^(k-1) · Σ_{a=1}^{N} χ(a) · B_k(a/N).
//! ```
//!
//! Writing `B_k(x) = Σ c_i x^i`, each summand is
//! `N^(k-1) · Σ c_i a^i / N^i = (1/N) · Σ (c_i N^(k-i)) a^i`, so the sum is
//! evaluated at integer points of a rescaled polynomial and divided by `N`
//! once at the end.

use kummer_integers::{Integer, Rational};
use kummer_poly::RationalPoly;
use num_traits::{One, Zero};
use tracing::trace;

use crate::character::QuadraticCharacter;
use crate::error::{check_index, check_modulus, Result};
use crate::numbers::fresh_numbers;
use crate::polynomial::polynomial_from_numbers;

/// Computes `B_{k,χ}` from a prefix holding at least `B_0, ..., B_k`.
pub(crate) fn twisted_sum<F>(numbers: &[Rational], k: u32, modulus: u64, chi: F) -> Rational
where
    F: Fn(u64) -> i64,
{
    let k = k as usize;
    let poly = polynomial_from_numbers(numbers, k);

    // c_i · N^(k-i), filled from the top degree down.
    let n = Rational::from(modulus);
    let mut rescaled = vec![Rational::zero(); k + 1];
    let mut n_pow = Rational::one();
    for i in (0..=k).rev() {
        rescaled[i] = poly.coeff(i) * &n_pow;
        n_pow = n_pow * &n;
    }
    let rescaled = RationalPoly::new(rescaled);

    let mut sum = Rational::zero();
    for a in 1..=modulus {
        let weight = chi(a);
        if weight == 0 {
            continue;
        }
        let value = rescaled.eval(&Rational::from(a));
        sum = sum + Rational::from_integer(Integer::new(weight)) * value;
    }
    sum / n
}

/// Returns true if the parity of `χ` forces `B_{k,χ} = 0`.
///
/// For a nontrivial modulus, `B_{k,χ}` vanishes unless `χ(-1) = (-1)^k`.
pub(crate) fn vanishes_by_parity(character: &QuadraticCharacter, k: u32) -> bool {
    let sign = if k % 2 == 0 { 1 } else { -1 };
    character.modulus() > 1 && character.parity() != sign
}

/// Computes `B_{k,χ}` for a validated character, taking Bernoulli numbers
/// from `numbers`.
pub(crate) fn quadratic_value<N>(character: &QuadraticCharacter, k: u32, numbers: N) -> Rational
where
    N: FnOnce(u32) -> Vec<Rational>,
{
    if vanishes_by_parity(character, k) {
        trace!(k, d = character.discriminant(), "generalized Bernoulli number vanishes by parity");
        return Rational::zero();
    }
    twisted_sum(&numbers(k), k, character.modulus(), |a| {
        i64::from(character.value(a))
    })
}

/// Computes the generalized Bernoulli number `B_{k,χ}` of an integer-valued
/// character `χ` with the given modulus.
///
/// `chi` is only queried at `1..=modulus`. No parity shortcut is applied,
/// since nothing is assumed about `χ` beyond periodicity.
///
/// # Errors
///
/// Returns [`InvalidArgument`](crate::BernoulliError::InvalidArgument) if
/// `k` is negative or `modulus` is zero.
pub fn generalized_bernoulli_number<F>(k: i64, modulus: u64, chi: F) -> Result<Rational>
where
    F: Fn(u64) -> i64,
{
    let k = check_index("k", k)?;
    check_modulus(modulus)?;
    Ok(twisted_sum(&fresh_numbers(k), k, modulus, chi))
}

/// Computes the generalized Bernoulli number `B_{k,χ_d}` for the quadratic
/// character of a fundamental discriminant `d`.
///
/// `d = 1` gives the trivial character, for which `B_{k,χ_1} = B_k` except
/// `B_{1,χ_1} = +1/2`.
///
/// # Errors
///
/// Returns [`InvalidArgument`](crate::BernoulliError::InvalidArgument) if
/// `k` is negative, or if `d` is zero or not a fundamental discriminant.
pub fn quadratic_bernoulli_number(k: i64, d: i64) -> Result<Rational> {
    let k = check_index("k", k)?;
    let character = QuadraticCharacter::new(d)?;
    Ok(quadratic_value(&character, k, fresh_numbers))
}

/// Computes `B_{k,χ}` for an already constructed quadratic character.
///
/// # Errors
///
/// Returns [`InvalidArgument`](crate::BernoulliError::InvalidArgument) if
/// `k` is negative.
pub fn quadratic_bernoulli_number_for(character: &QuadraticCharacter, k: i64) -> Result<Rational> {
    let k = check_index("k", k)?;
    Ok(quadratic_value(character, k, fresh_numbers))
}
