//! # Kummer
//!
//! Exact Bernoulli numbers and the special values built from them.
//!
//! ## Features
//!
//! - **Exact Arithmetic**: arbitrary precision integers and rationals
//! - **Bernoulli Numbers and Polynomials**: with the `B_1 = -1/2` convention
//! - **Quadratic Characters**: Kronecker symbols of fundamental discriminants
//! - **Generalized Bernoulli Numbers**: `B_{k,χ}` for quadratic and
//!   user-supplied integer characters
//! - **Special Values**: `ζ(-n)`, `L(1-k, χ_d)`, Eisenstein constant terms,
//!   imaginary quadratic class numbers, power sums
//!
//! ## Quick Start
//!
//! ```rust
//! use kummer::prelude::*;
//!
//! let engine = BernoulliEngine::default();
//! assert_eq!(engine.bernoulli_number(12).unwrap(), Rational::from_i64(-691, 2730));
//! assert_eq!(engine.class_number(-23).unwrap(), Integer::new(3));
//!
//! let b2 = bernoulli_polynomial(2).unwrap();
//! assert_eq!(evaluate_polynomial(b2.coeffs(), &Rational::from_i64(1, 2)), Rational::from_i64(-1, 12));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use kummer_bernoulli as bernoulli;
pub use kummer_integers as integers;
pub use kummer_poly as poly;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use kummer_bernoulli::{
        bernoulli_number, bernoulli_number_vector, bernoulli_polynomial, evaluate_polynomial,
        generalized_bernoulli_number, quadratic_bernoulli_number, BernoulliEngine, BernoulliError,
        DiscriminantPolicy, EngineConfig, QuadraticCharacter,
    };
    pub use kummer_integers::{Integer, Rational};
    pub use kummer_poly::RationalPoly;
}
