//! Dense rational polynomials.

use kummer_integers::{binomial_row, Rational};
use num_traits::Zero;
use std::fmt;

/// Evaluates `Σ coeffs[i] · x^i` exactly using Horner's method.
///
/// The empty sequence evaluates to zero.
#[must_use]
pub fn evaluate_polynomial(coeffs: &[Rational], x: &Rational) -> Rational {
    coeffs
        .iter()
        .rev()
        .fold(Rational::zero(), |acc, c| acc * x + c)
}

/// A dense univariate polynomial with rational coefficients.
///
/// Coefficients are stored in ascending degree order and never normalized
/// behind the caller's back.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct RationalPoly {
    coeffs: Vec<Rational>,
}

impl RationalPoly {
    /// Creates a polynomial from ascending coefficients, kept as given.
    #[must_use]
    pub fn new(coeffs: Vec<Rational>) -> Self {
        Self { coeffs }
    }

    /// Creates the zero polynomial (the empty coefficient sequence).
    #[must_use]
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// Number of stored coefficients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Returns true if no coefficients are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns the coefficient of `x^i` (zero past the end).
    #[must_use]
    pub fn coeff(&self, i: usize) -> Rational {
        self.coeffs.get(i).cloned().unwrap_or_else(Rational::zero)
    }

    /// Returns all coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[Rational] {
        &self.coeffs
    }

    /// Evaluates the polynomial at a point using Horner's method.
    #[must_use]
    pub fn eval(&self, x: &Rational) -> Rational {
        evaluate_polynomial(&self.coeffs, x)
    }

    /// Multiplies every coefficient by `c`.
    #[must_use]
    pub fn scale(&self, c: &Rational) -> Self {
        Self::new(self.coeffs.iter().map(|x| x * c).collect())
    }

    /// Computes the formal derivative.
    #[must_use]
    pub fn derivative(&self) -> Self {
        Self::new(
            self.coeffs
                .iter()
                .enumerate()
                .skip(1)
                .map(|(i, c)| c * &Rational::from(i as u64))
                .collect(),
        )
    }

    /// Returns the polynomial `p(x + a)`.
    ///
    /// Uses the binomial expansion of each `(x + a)^i`; the result has the
    /// same number of coefficients as `self`.
    #[must_use]
    pub fn translate(&self, a: &Rational) -> Self {
        let mut result = vec![Rational::zero(); self.coeffs.len()];
        for (i, c) in self.coeffs.iter().enumerate() {
            if c.is_zero() {
                continue;
            }
            let row = binomial_row(i as u64);
            let mut a_pow = Rational::from(1i64);
            // (x + a)^i = Σ_j C(i, j) a^(i-j) x^j, walked from j = i down.
            for j in (0..=i).rev() {
                let term = c * &(Rational::from(row[j].clone()) * &a_pow);
                result[j] = &result[j] + &term;
                a_pow = a_pow * a;
            }
        }
        Self::new(result)
    }
}

impl From<Vec<Rational>> for RationalPoly {
    fn from(coeffs: Vec<Rational>) -> Self {
        Self::new(coeffs)
    }
}

impl AsRef<[Rational]> for RationalPoly {
    fn as_ref(&self) -> &[Rational] {
        &self.coeffs
    }
}

impl fmt::Display for RationalPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms: Vec<String> = self
            .coeffs
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, c)| !c.is_zero())
            .map(|(i, c)| match i {
                0 => format!("{c}"),
                1 => format!("{c}*x"),
                _ => format!("{c}*x^{i}"),
            })
            .collect();

        if terms.is_empty() {
            write!(f, "0")
        } else {
            write!(f, "{}", terms.join(" + "))
        }
    }
}
