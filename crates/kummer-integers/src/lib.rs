//! # kummer-integers
//!
//! Exact arithmetic primitives for kummer.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Arbitrary precision rationals (`Rational`), always in lowest terms
//! - Binomial coefficients and Pascal rows
//! - Jacobi and Kronecker symbols, and discriminant predicates
//!
//! Everything above this crate in the workspace is written against these
//! types; nothing else touches `dashu` directly.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

#[macro_use]
mod macros;

pub mod combinatorics;
pub mod integer;
pub mod kronecker;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use combinatorics::{binomial, binomial_row};
pub use integer::Integer;
pub use kronecker::{
    is_discriminant, is_fundamental_discriminant, is_squarefree, jacobi, kronecker,
    kronecker_signed,
};
pub use rational::Rational;
