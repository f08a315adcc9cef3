//! Error type shared by every Bernoulli operation.

use thiserror::Error;

/// Largest index `n` or `k` accepted by any operation.
///
/// Every operation materializes the prefix `B_0, ..., B_n`, and `B_n` has
/// on the order of `n log n` bits, so indices past this bound are rejected
/// up front.
pub const MAX_INDEX: u32 = 1 << 14;

const OUT_OF_RANGE: &str = "exceeds the supported index range";

/// Errors raised by Bernoulli computations.
///
/// Every operation is a pure computation, so the only failure is an input
/// outside its domain. Errors are raised before any work is done.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BernoulliError {
    /// An integer argument is outside the operation's domain.
    #[error("invalid argument `{argument}` = {value}: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        argument: &'static str,
        /// The rejected value.
        value: i64,
        /// Why the value was rejected.
        reason: &'static str,
    },
}

/// Result type for Bernoulli computations.
pub type Result<T> = std::result::Result<T, BernoulliError>;

impl BernoulliError {
    pub(crate) fn invalid(argument: &'static str, value: i64, reason: &'static str) -> Self {
        Self::InvalidArgument {
            argument,
            value,
            reason,
        }
    }

    /// Name of the rejected parameter.
    #[must_use]
    pub fn argument(&self) -> &'static str {
        match self {
            Self::InvalidArgument { argument, .. } => argument,
        }
    }
}

/// Validates a non-negative index and narrows it to `u32`.
pub(crate) fn check_index(argument: &'static str, value: i64) -> Result<u32> {
    if value < 0 {
        return Err(BernoulliError::invalid(argument, value, "must be non-negative"));
    }
    u32::try_from(value)
        .ok()
        .filter(|&v| v <= MAX_INDEX)
        .ok_or_else(|| BernoulliError::invalid(argument, value, OUT_OF_RANGE))
}

/// Validates an index that is used as `value + 1`.
pub(crate) fn check_shifted_index(argument: &'static str, value: i64) -> Result<u32> {
    let index = check_index(argument, value)?;
    if index == MAX_INDEX {
        return Err(BernoulliError::invalid(argument, value, OUT_OF_RANGE));
    }
    Ok(index)
}

/// Validates a character modulus.
pub(crate) fn check_modulus(modulus: u64) -> Result<()> {
    if modulus == 0 {
        return Err(BernoulliError::invalid("modulus", 0, "must be positive"));
    }
    Ok(())
}
