//! Quadratic residue symbols and discriminant predicates.
//!
//! The Kronecker symbol `(d/n)` extends the Jacobi symbol to every integer
//! `n`. For a discriminant `d` (`d ≡ 0, 1 mod 4`) the map `n ↦ (d/n)` is a
//! real Dirichlet character modulo `|d|`; for a fundamental discriminant it
//! is the primitive character of the quadratic field `Q(√d)`.

/// Computes the Jacobi symbol `(a/n)` for odd positive `n`.
///
/// Returns 0 when `gcd(a, n) > 1`.
///
/// # Panics
///
/// Panics if `n` is even or zero.
#[must_use]
pub fn jacobi(a: u64, n: u64) -> i8 {
    assert!(n % 2 == 1, "Jacobi symbol needs an odd positive modulus");

    let mut a = a % n;
    let mut n = n;
    let mut result = 1i8;

    while a != 0 {
        while a % 2 == 0 {
            a /= 2;
            // (2/n) = -1 iff n ≡ ±3 (mod 8)
            if matches!(n % 8, 3 | 5) {
                result = -result;
            }
        }
        std::mem::swap(&mut a, &mut n);
        // Quadratic reciprocity
        if a % 4 == 3 && n % 4 == 3 {
            result = -result;
        }
        a %= n;
    }

    if n == 1 {
        result
    } else {
        0
    }
}

/// Computes the Kronecker symbol `(a/n)` for `n ≥ 0`.
#[must_use]
pub fn kronecker(a: i64, n: u64) -> i8 {
    if n == 0 {
        return i8::from(a == 1 || a == -1);
    }
    if a % 2 == 0 && n % 2 == 0 {
        return 0;
    }

    let twos = n.trailing_zeros();
    let odd = n >> twos;

    // (a/2) is 1 for a ≡ ±1 (mod 8) and -1 for a ≡ ±3 (mod 8); a is odd here
    // whenever twos > 0.
    let mut result = 1i8;
    if twos % 2 == 1 && matches!(a.rem_euclid(8), 3 | 5) {
        result = -result;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let reduced = i128::from(a).rem_euclid(i128::from(odd)) as u64;
    result * jacobi(reduced, odd)
}

/// Computes the Kronecker symbol `(a/n)` for any integer `n`.
///
/// Uses `(a/-1) = -1` for `a < 0` and `1` otherwise.
#[must_use]
pub fn kronecker_signed(a: i64, n: i64) -> i8 {
    let value = kronecker(a, n.unsigned_abs());
    if n < 0 && a < 0 {
        -value
    } else {
        value
    }
}

/// Returns true if no square of a prime divides `n`.
///
/// Zero is not squarefree; one is.
#[must_use]
pub fn is_squarefree(n: u64) -> bool {
    if n == 0 {
        return false;
    }

    let mut n = n;
    let mut p = 2u64;
    while p.saturating_mul(p) <= n {
        if n % p == 0 {
            n /= p;
            if n % p == 0 {
                return false;
            }
        }
        p += if p == 2 { 1 } else { 2 };
    }
    true
}

/// Returns true if `d` is a nonzero discriminant, i.e. `d ≡ 0, 1 (mod 4)`.
#[must_use]
pub fn is_discriminant(d: i64) -> bool {
    d != 0 && matches!(d.rem_euclid(4), 0 | 1)
}

/// Returns true if `d` is a fundamental discriminant.
///
/// That is, `d ≡ 1 (mod 4)` and squarefree, or `d = 4m` with
/// `m ≡ 2, 3 (mod 4)` and `m` squarefree. `d = 1` counts as fundamental
/// (it belongs to the trivial character).
#[must_use]
pub fn is_fundamental_discriminant(d: i64) -> bool {
    match d.rem_euclid(4) {
        1 => is_squarefree(d.unsigned_abs()),
        0 => {
            let m = d / 4;
            matches!(m.rem_euclid(4), 2 | 3) && is_squarefree(m.unsigned_abs())
        }
        _ => false,
    }
}
