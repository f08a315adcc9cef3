//! Binomial coefficients.

use num_traits::One;

use crate::Integer;

/// Computes the binomial coefficient C(n, k).
///
/// Returns zero when `k > n`.
#[must_use]
pub fn binomial(n: u64, k: u64) -> Integer {
    if k > n {
        return Integer::new(0);
    }

    // C(n, k) = C(n, n-k); walk the shorter side.
    let k = k.min(n - k);
    let mut result = Integer::one();
    for i in 0..k {
        // Exact at every step: the running value is C(n, i + 1).
        result = result * Integer::from(n - i) / Integer::from(i + 1);
    }
    result
}

/// Returns the row `[C(n, 0), C(n, 1), ..., C(n, n)]` of Pascal's triangle.
#[must_use]
pub fn binomial_row(n: u64) -> Vec<Integer> {
    let mut row = Vec::with_capacity(usize::try_from(n).unwrap_or(0).saturating_add(1));
    let mut current = Integer::one();
    row.push(current.clone());
    for i in 0..n {
        current = current * Integer::from(n - i) / Integer::from(i + 1);
        row.push(current.clone());
    }
    row
}
