//! The Bernoulli engine: every operation behind one configurable handle.
//!
//! An engine owns an optional [`BernoulliCache`]; all methods take `&self`,
//! so an engine can be shared across threads (for instance in an `Arc`).
//! Results never depend on whether the cache is enabled.

use kummer_integers::Rational;
use kummer_poly::{evaluate_polynomial, RationalPoly};
use tracing::debug;

use crate::cache::BernoulliCache;
use crate::character::QuadraticCharacter;
use crate::config::EngineConfig;
use crate::error::{check_index, check_modulus, Result};
use crate::generalized::{quadratic_value, twisted_sum};
use crate::numbers::{closed_form, fresh_numbers};
use crate::polynomial::polynomial_from_numbers;

/// Computes Bernoulli numbers, polynomials and quadratic generalized
/// Bernoulli numbers, memoizing Bernoulli numbers when configured to.
#[derive(Debug)]
pub struct BernoulliEngine {
    config: EngineConfig,
    cache: Option<BernoulliCache>,
}

impl Default for BernoulliEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl BernoulliEngine {
    /// Creates an engine with the given configuration.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        debug!(
            memoize = config.memoize,
            cache_limit = config.cache_limit,
            policy = ?config.discriminant_policy,
            "creating Bernoulli engine"
        );
        let cache = config.memoize.then(|| BernoulliCache::new(config.cache_limit));
        Self { config, cache }
    }

    /// Creates an engine without a cache.
    #[must_use]
    pub fn uncached() -> Self {
        Self::new(EngineConfig::uncached())
    }

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The memo cache, if memoization is enabled.
    #[must_use]
    pub fn cache(&self) -> Option<&BernoulliCache> {
        self.cache.as_ref()
    }

    /// `B_0, ..., B_n`, from the cache when there is one.
    fn numbers_upto(&self, n: u32) -> Vec<Rational> {
        match &self.cache {
            Some(cache) => cache.prefix(n as usize),
            None => fresh_numbers(n),
        }
    }

    /// Returns the Bernoulli numbers `B_0, ..., B_n`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`](crate::BernoulliError::InvalidArgument) if
    /// `n` is negative or beyond [`MAX_INDEX`](crate::MAX_INDEX).
    pub fn bernoulli_number_vector(&self, n: i64) -> Result<Vec<Rational>> {
        let n = check_index("n", n)?;
        Ok(self.numbers_upto(n))
    }

    /// Returns the Bernoulli number `B_n`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`](crate::BernoulliError::InvalidArgument) if
    /// `n` is negative or beyond [`MAX_INDEX`](crate::MAX_INDEX).
    pub fn bernoulli_number(&self, n: i64) -> Result<Rational> {
        let n = check_index("n", n)?;
        if let Some(value) = closed_form(n) {
            return Ok(value);
        }
        Ok(match &self.cache {
            Some(cache) => cache.get(n as usize),
            None => fresh_numbers(n).swap_remove(n as usize),
        })
    }

    /// Returns the `n`-th Bernoulli polynomial (`n + 1` ascending
    /// coefficients).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`](crate::BernoulliError::InvalidArgument) if
    /// `n` is negative or beyond [`MAX_INDEX`](crate::MAX_INDEX).
    pub fn bernoulli_polynomial(&self, n: i64) -> Result<RationalPoly> {
        let n = check_index("n", n)?;
        Ok(polynomial_from_numbers(&self.numbers_upto(n), n as usize))
    }

    /// Evaluates an ascending coefficient sequence at `x` (Horner).
    #[must_use]
    pub fn evaluate_polynomial(&self, coeffs: &[Rational], x: &Rational) -> Rational {
        evaluate_polynomial(coeffs, x)
    }

    /// Builds the quadratic character of `d` under the configured
    /// [`DiscriminantPolicy`](crate::DiscriminantPolicy).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`](crate::BernoulliError::InvalidArgument) if
    /// `d` is zero or not admitted by the policy.
    pub fn character(&self, d: i64) -> Result<QuadraticCharacter> {
        QuadraticCharacter::with_policy(d, self.config.discriminant_policy)
    }

    /// Returns the generalized Bernoulli number `B_{k,χ_d}`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`](crate::BernoulliError::InvalidArgument) if
    /// `k` is negative, or if `d` is not admitted by the configured policy.
    pub fn quadratic_bernoulli_number(&self, k: i64, d: i64) -> Result<Rational> {
        let k = check_index("k", k)?;
        let character = self.character(d)?;
        debug!(k, d, modulus = character.modulus(), "computing quadratic Bernoulli number");
        Ok(quadratic_value(&character, k, |k| self.numbers_upto(k)))
    }

    /// Returns `B_{k,χ}` for an already constructed character.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`](crate::BernoulliError::InvalidArgument) if
    /// `k` is negative.
    pub fn quadratic_bernoulli_number_for(
        &self,
        character: &QuadraticCharacter,
        k: i64,
    ) -> Result<Rational> {
        let k = check_index("k", k)?;
        Ok(quadratic_value(character, k, |k| self.numbers_upto(k)))
    }

    /// Returns `B_{k,χ}` for an integer-valued character of the given
    /// modulus.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`](crate::BernoulliError::InvalidArgument) if
    /// `k` is negative or `modulus` is zero.
    pub fn generalized_bernoulli_number<F>(&self, k: i64, modulus: u64, chi: F) -> Result<Rational>
    where
        F: Fn(u64) -> i64,
    {
        let k = check_index("k", k)?;
        check_modulus(modulus)?;
        Ok(twisted_sum(&self.numbers_upto(k), k, modulus, chi))
    }
}
