//! Polynomial terms.

use std::fmt;

/// A single `coefficient * x^exponent` term.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Term {
    /// The integer coefficient.
    pub coefficient: i64,
    /// The non-negative exponent.
    pub exponent: u32,
}

impl Term {
    /// Creates a term.
    #[must_use]
    pub const fn new(coefficient: i64, exponent: u32) -> Self {
        Self {
            coefficient,
            exponent,
        }
    }

    /// Returns true if the coefficient is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.coefficient == 0
    }

    /// Returns the term with its coefficient sign-flipped.
    #[must_use]
    pub const fn negated(self) -> Self {
        Self::new(-self.coefficient, self.exponent)
    }

    /// Multiplies two terms: coefficients multiply, exponents add.
    ///
    /// # Panics
    ///
    /// Panics if the exponent sum does not fit in a `u32`.
    #[must_use]
    pub const fn mul(self, other: Self) -> Self {
        let Some(exponent) = self.exponent.checked_add(other.exponent) else {
            panic!("exponent overflow in term product");
        };
        Self::new(self.coefficient * other.coefficient, exponent)
    }
}

impl From<(i64, u32)> for Term {
    fn from((coefficient, exponent): (i64, u32)) -> Self {
        Self::new(coefficient, exponent)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x^{}", self.coefficient, self.exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_mul() {
        // (3x^2) * (5x) = 15x^3
        let t = Term::new(3, 2).mul(Term::new(5, 1));
        assert_eq!(t, Term::new(15, 3));
    }

    #[test]
    fn test_term_mul_largest_exponent() {
        let half = u32::MAX / 2;
        let t = Term::new(1, half).mul(Term::new(1, half + 1));
        assert_eq!(t.exponent, u32::MAX);
    }

    #[test]
    #[should_panic(expected = "exponent overflow")]
    fn test_term_mul_exponent_overflow() {
        let _ = Term::new(1, 3_000_000_000).mul(Term::new(1, 3_000_000_000));
    }

    #[test]
    fn test_term_display() {
        assert_eq!(Term::new(-4, 0).to_string(), "-4x^0");
        assert_eq!(Term::from((2, 7)).to_string(), "2x^7");
    }
}
