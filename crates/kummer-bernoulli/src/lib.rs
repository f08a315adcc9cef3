//! # kummer-bernoulli
//!
//! Exact Bernoulli numbers, Bernoulli polynomials and generalized Bernoulli
//! numbers twisted by quadratic characters.
//!
//! ## Conventions
//!
//! Bernoulli numbers follow the `t/(e^t - 1)` generating function, so
//! `B_1 = -1/2` and `B_n(0) = B_n` for every `n`. Generalized Bernoulli
//! numbers use
//!
//! ```text
//! B_{k,χ} = N^(k-1) · Σ_{a=1}^{N} χ(a) · B_k(a/N)
//! ```
//!
//! for a character `χ` of modulus `N`; for the trivial character this gives
//! `B_{1,χ} = +1/2`.
//!
//! ## Entry points
//!
//! The free functions ([`bernoulli_number`], [`bernoulli_number_vector`],
//! [`bernoulli_polynomial`], [`evaluate_polynomial`],
//! [`quadratic_bernoulli_number`]) are pure and recompute everything on each
//! call. [`BernoulliEngine`] offers the same operations backed by a shared
//! memo cache, plus special values of ζ and quadratic L-functions.
//!
//! ```rust
//! use kummer_bernoulli::{bernoulli_number, quadratic_bernoulli_number};
//! use kummer_integers::Rational;
//!
//! assert_eq!(bernoulli_number(6).unwrap(), Rational::from_i64(1, 42));
//! assert_eq!(quadratic_bernoulli_number(1, -4).unwrap(), Rational::from_i64(-1, 2));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cache;
pub mod character;
pub mod config;
pub mod engine;
pub mod error;
pub mod generalized;
pub mod numbers;
pub mod polynomial;
pub mod special_values;

#[cfg(test)]
mod proptests;

pub use cache::BernoulliCache;
pub use character::QuadraticCharacter;
pub use config::{DiscriminantPolicy, EngineConfig};
pub use engine::BernoulliEngine;
pub use error::{BernoulliError, Result, MAX_INDEX};
pub use generalized::{
    generalized_bernoulli_number, quadratic_bernoulli_number, quadratic_bernoulli_number_for,
};
pub use kummer_poly::evaluate_polynomial;
pub use numbers::{bernoulli_number, bernoulli_number_vector};
pub use polynomial::bernoulli_polynomial;
