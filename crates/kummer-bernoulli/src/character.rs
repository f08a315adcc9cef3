//! Quadratic characters attached to discriminants.

use kummer_integers::{kronecker, kronecker_signed};
use std::fmt;

use crate::config::DiscriminantPolicy;
use crate::error::{BernoulliError, Result};

/// The real character `χ_d(a) = (d/a)` (Kronecker symbol) modulo `|d|`.
///
/// Constructed only from admissible `d`, so `value` is periodic with period
/// [`modulus`](Self::modulus).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct QuadraticCharacter {
    discriminant: i64,
    modulus: u64,
}

impl QuadraticCharacter {
    /// Creates the character of a fundamental discriminant.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`](BernoulliError::InvalidArgument) unless
    /// `d` is a fundamental discriminant (`d = 1` included).
    pub fn new(d: i64) -> Result<Self> {
        Self::with_policy(d, DiscriminantPolicy::Fundamental)
    }

    /// Creates the character of `d`, admitting `d` according to `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`](BernoulliError::InvalidArgument) if `d`
    /// is zero or not admitted by `policy`.
    pub fn with_policy(d: i64, policy: DiscriminantPolicy) -> Result<Self> {
        if d == 0 {
            return Err(BernoulliError::invalid("d", d, "must be nonzero"));
        }
        if !policy.admits(d) {
            return Err(BernoulliError::invalid("d", d, policy.rejection_reason()));
        }
        Ok(Self {
            discriminant: d,
            modulus: d.unsigned_abs(),
        })
    }

    /// The trivial character (`d = 1`).
    #[must_use]
    pub fn trivial() -> Self {
        Self {
            discriminant: 1,
            modulus: 1,
        }
    }

    /// The discriminant `d`.
    #[must_use]
    pub fn discriminant(&self) -> i64 {
        self.discriminant
    }

    /// The modulus `|d|`.
    #[must_use]
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Returns true for `d = 1`.
    #[must_use]
    pub fn is_trivial(&self) -> bool {
        self.discriminant == 1
    }

    /// `χ(-1)`: `1` for real fields (`d > 0`), `-1` for imaginary ones.
    #[must_use]
    pub fn parity(&self) -> i8 {
        if self.discriminant > 0 {
            1
        } else {
            -1
        }
    }

    /// Returns true if `χ(-1) = 1`.
    #[must_use]
    pub fn is_even(&self) -> bool {
        self.parity() == 1
    }

    /// `χ(a)` for `a ≥ 0`.
    #[must_use]
    pub fn value(&self, a: u64) -> i8 {
        kronecker(self.discriminant, a)
    }

    /// `χ(a)` for any integer `a`.
    #[must_use]
    pub fn value_signed(&self, a: i64) -> i8 {
        kronecker_signed(self.discriminant, a)
    }
}

impl fmt::Display for QuadraticCharacter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "χ_{}", self.discriminant)
    }
}
