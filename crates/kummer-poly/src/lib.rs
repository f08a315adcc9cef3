//! # kummer-poly
//!
//! Dense univariate polynomials over the rationals.
//!
//! A polynomial is an ascending coefficient sequence: index `i` holds the
//! coefficient of `x^i`. Sequences are stored exactly as given, so a zero
//! leading coefficient is kept (the degree is then understated, which is
//! legal) and the empty sequence is the zero polynomial.
//!
//! Evaluation is exact and uses Horner's rule.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dense;

#[cfg(test)]
mod proptests;

pub use dense::{evaluate_polynomial, RationalPoly};
