//! Shared memo cache of Bernoulli numbers.
//!
//! The cache holds a prefix `B_0, ..., B_m` behind a `RwLock`. Readers
//! share the lock; a request past the prefix takes the write lock and
//! extends it in place with the same recurrence as the uncached path, so
//! cached and uncached results are identical.

use kummer_integers::Rational;
use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::numbers::{closed_form, extend_bernoulli_numbers};

/// A thread-safe, growable prefix of Bernoulli numbers.
#[derive(Debug)]
pub struct BernoulliCache {
    numbers: RwLock<Vec<Rational>>,
    /// Largest index kept.
    limit: usize,
}

impl BernoulliCache {
    /// Creates an empty cache that stores indices up to `limit`.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            numbers: RwLock::new(Vec::new()),
            limit,
        }
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.numbers.read().len()
    }

    /// Returns true if nothing is cached yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.numbers.read().is_empty()
    }

    /// Drops every cached entry.
    pub fn clear(&self) {
        self.numbers.write().clear();
    }

    /// Returns `B_0, ..., B_n`, extending the cache as needed.
    #[must_use]
    pub fn prefix(&self, n: usize) -> Vec<Rational> {
        {
            let numbers = self.numbers.read();
            if numbers.len() > n {
                trace!(n, "Bernoulli cache hit");
                return numbers[..=n].to_vec();
            }
        }

        if n > self.limit {
            let mut numbers = self.prefix(self.limit);
            debug!(from = numbers.len(), to = n, "computing Bernoulli numbers past the cache limit");
            extend_bernoulli_numbers(&mut numbers, n);
            return numbers;
        }

        let mut numbers = self.numbers.write();
        // Another writer may have extended the prefix meanwhile.
        if numbers.len() <= n {
            debug!(from = numbers.len(), to = n, "extending Bernoulli cache");
            extend_bernoulli_numbers(&mut numbers, n);
        }
        numbers[..=n].to_vec()
    }

    /// Returns `B_n`.
    #[must_use]
    pub fn get(&self, n: usize) -> Rational {
        if let Some(value) = u32::try_from(n).ok().and_then(closed_form) {
            return value;
        }
        if let Some(value) = self.numbers.read().get(n) {
            return value.clone();
        }
        self.prefix(n).swap_remove(n)
    }
}

impl Default for BernoulliCache {
    fn default() -> Self {
        Self::new(crate::EngineConfig::default().cache_limit)
    }
}
