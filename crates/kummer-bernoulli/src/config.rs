//! Engine configuration.

use kummer_integers::{is_discriminant, is_fundamental_discriminant};

/// Which values of `d` select a quadratic character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum DiscriminantPolicy {
    /// Only fundamental discriminants (including `d = 1`, the trivial
    /// character). The character is then primitive of conductor `|d|`.
    #[default]
    Fundamental,
    /// Any nonzero `d ≡ 0, 1 (mod 4)`. The Kronecker character is then a
    /// possibly imprimitive character modulo `|d|`.
    Discriminant,
}

impl DiscriminantPolicy {
    /// Returns true if `d` is admissible under this policy.
    #[must_use]
    pub fn admits(self, d: i64) -> bool {
        match self {
            Self::Fundamental => is_fundamental_discriminant(d),
            Self::Discriminant => is_discriminant(d),
        }
    }

    pub(crate) fn rejection_reason(self) -> &'static str {
        match self {
            Self::Fundamental => "not a fundamental discriminant",
            Self::Discriminant => "not a discriminant (must be nonzero and ≡ 0 or 1 mod 4)",
        }
    }
}

/// Configuration for a [`BernoulliEngine`](crate::BernoulliEngine).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Keep computed Bernoulli numbers for reuse across calls.
    pub memoize: bool,
    /// Largest index stored in the cache. Larger requests are computed on
    /// top of the cached prefix but not stored.
    pub cache_limit: usize,
    /// Admissible discriminants for quadratic characters.
    pub discriminant_policy: DiscriminantPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            memoize: true,
            cache_limit: 4096,
            discriminant_policy: DiscriminantPolicy::Fundamental,
        }
    }
}

impl EngineConfig {
    /// A configuration with memoization disabled.
    #[must_use]
    pub fn uncached() -> Self {
        Self {
            memoize: false,
            ..Self::default()
        }
    }

    /// Sets whether Bernoulli numbers are memoized.
    #[must_use]
    pub fn with_memoize(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }

    /// Sets the largest cached index.
    #[must_use]
    pub fn with_cache_limit(mut self, cache_limit: usize) -> Self {
        self.cache_limit = cache_limit;
        self
    }

    /// Sets the discriminant policy.
    #[must_use]
    pub fn with_discriminant_policy(mut self, policy: DiscriminantPolicy) -> Self {
        self.discriminant_policy = policy;
        self
    }
}
