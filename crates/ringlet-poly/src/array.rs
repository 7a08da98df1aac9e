//! Sparse polynomials stored as a term array.
//!
//! This is the contiguous counterpart to [`CircularPoly`](crate::CircularPoly):
//! terms live in a `Vec` sorted by descending exponent, and coefficients are
//! floating point, so near-zero sums are dropped with a tolerance.

use std::fmt;

use rustc_hash::FxHashMap;

/// Coefficients with magnitude at or below this are treated as zero.
pub const EPSILON: f64 = 1e-6;

/// A single term of an [`ArrayPoly`].
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ArrayTerm {
    /// The coefficient.
    pub coefficient: f64,
    /// The exponent.
    pub exponent: u32,
}

impl From<(f64, u32)> for ArrayTerm {
    fn from((coefficient, exponent): (f64, u32)) -> Self {
        Self {
            coefficient,
            exponent,
        }
    }
}

/// A sparse polynomial with terms in a contiguous array.
///
/// Terms are kept sorted by descending exponent.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ArrayPoly {
    terms: Vec<ArrayTerm>,
}

impl ArrayPoly {
    /// Creates the zero polynomial.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the zero polynomial with room for `capacity` terms.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            terms: Vec::with_capacity(capacity),
        }
    }

    /// Creates a polynomial from terms, sorted by descending exponent.
    ///
    /// The sort is stable; duplicate exponents are kept as given.
    #[must_use]
    pub fn from_terms<I>(terms: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ArrayTerm>,
    {
        let mut terms: Vec<ArrayTerm> = terms.into_iter().map(Into::into).collect();
        terms.sort_by(|a, b| b.exponent.cmp(&a.exponent));
        Self { terms }
    }

    /// Returns the terms.
    #[must_use]
    pub fn terms(&self) -> &[ArrayTerm] {
        &self.terms
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of terms that fit without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.terms.capacity()
    }

    /// Adds two polynomials by merging the sorted term arrays.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let (a, b) = (&self.terms, &other.terms);
        let mut result = Self::with_capacity(a.len() + b.len());
        let mut i = 0;
        let mut j = 0;

        while i < a.len() && j < b.len() {
            if a[i].exponent == b[j].exponent {
                let sum = a[i].coefficient + b[j].coefficient;
                if sum.abs() > EPSILON {
                    result.terms.push(ArrayTerm {
                        coefficient: sum,
                        exponent: a[i].exponent,
                    });
                }
                i += 1;
                j += 1;
            } else if a[i].exponent > b[j].exponent {
                result.terms.push(a[i]);
                i += 1;
            } else {
                result.terms.push(b[j]);
                j += 1;
            }
        }

        result.terms.extend_from_slice(&a[i..]);
        result.terms.extend_from_slice(&b[j..]);
        result
    }

    /// Multiplies two polynomials.
    ///
    /// Every pairwise product is accumulated into the term with the same
    /// exponent; near-zero terms are then dropped and the rest sorted.
    ///
    /// # Panics
    ///
    /// Panics if an exponent sum does not fit in a `u32`.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let mut acc: FxHashMap<u32, f64> = FxHashMap::default();

        for ta in &self.terms {
            for tb in &other.terms {
                let exponent = ta
                    .exponent
                    .checked_add(tb.exponent)
                    .unwrap_or_else(|| panic!("exponent overflow in term product"));
                *acc.entry(exponent).or_insert(0.0) += ta.coefficient * tb.coefficient;
            }
        }

        Self::from_terms(
            acc.into_iter()
                .filter(|(_, c)| c.abs() > EPSILON)
                .map(|(exponent, coefficient)| ArrayTerm {
                    coefficient,
                    exponent,
                }),
        )
    }

    /// Evaluates the polynomial at `x`.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.terms
            .iter()
            .map(|t| t.coefficient * num_traits::pow(x, t.exponent as usize))
            .sum()
    }
}

impl fmt::Display for ArrayPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        for (i, term) in self.terms.iter().enumerate() {
            let mut c = term.coefficient;
            if c < 0.0 {
                f.write_str(if i == 0 { "-" } else { " - " })?;
                c = -c;
            } else if i > 0 {
                f.write_str(" + ")?;
            }

            match term.exponent {
                0 => write!(f, "{c}")?,
                1 => write!(f, "{c}x")?,
                e => write!(f, "{c}x^{e}")?,
            }
        }
        Ok(())
    }
}
