//! Reading polynomials from the `n c1 e1 ... cn en` text format.
//!
//! Input is a term count followed by that many `(coefficient, exponent)`
//! pairs, separated by any whitespace. [`read_raw`] keeps the pairs exactly as
//! supplied; [`read`] also sorts, merges and drops zero terms so the result
//! is well formed.

use std::io::Read;

use ringlet_core::{NodePool, Term};
use thiserror::Error;
use tracing::debug;

use crate::array::{ArrayPoly, ArrayTerm};
use crate::circular::CircularPoly;

/// Largest exponent the readers accept.
///
/// The product of any two polynomials read from input keeps its exponents
/// within `u32`.
pub const MAX_EXPONENT: u32 = u32::MAX / 2;

/// Errors that can occur while reading a polynomial.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("invalid integer {token:?}")]
    InvalidInteger { token: String },

    #[error("invalid number {token:?}")]
    InvalidNumber { token: String },

    #[error("term count must not be negative, got {count}")]
    NegativeCount { count: i64 },

    #[error("exponent must not be negative, got {exponent}")]
    NegativeExponent { exponent: i64 },

    #[error("exponent {exponent} exceeds the maximum of {max}", max = MAX_EXPONENT)]
    ExponentOverflow { exponent: i64 },

    #[error("failed to read input")]
    Io(#[from] std::io::Error),
}

/// A whitespace tokenizer over owned input.
#[derive(Debug, Clone)]
pub struct Tokens {
    tokens: std::vec::IntoIter<String>,
}

impl Tokens {
    /// Splits `input` on whitespace.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            tokens: input
                .split_whitespace()
                .map(str::to_owned)
                .collect::<Vec<_>>()
                .into_iter(),
        }
    }

    /// Reads all of `reader` and splits it on whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::Io`] if reading fails.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, ReadError> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        Ok(Self::new(&input))
    }

    /// Returns true once every token has been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.tokens.len() == 0
    }

    fn next_token(&mut self, expected: &'static str) -> Result<String, ReadError> {
        self.tokens
            .next()
            .ok_or(ReadError::UnexpectedEnd { expected })
    }

    /// Parses the next token as an integer.
    ///
    /// # Errors
    ///
    /// Fails at end of input or on a malformed token.
    pub fn next_integer(&mut self, expected: &'static str) -> Result<i64, ReadError> {
        let token = self.next_token(expected)?;
        token
            .parse()
            .map_err(|_| ReadError::InvalidInteger { token })
    }

    /// Parses the next token as a floating point number.
    ///
    /// # Errors
    ///
    /// Fails at end of input or on a malformed token.
    pub fn next_number(&mut self, expected: &'static str) -> Result<f64, ReadError> {
        let token = self.next_token(expected)?;
        token
            .parse()
            .map_err(|_| ReadError::InvalidNumber { token })
    }

    fn next_count(&mut self) -> Result<usize, ReadError> {
        let count = self.next_integer("term count")?;
        usize::try_from(count).map_err(|_| ReadError::NegativeCount { count })
    }

    fn next_exponent(&mut self) -> Result<u32, ReadError> {
        let exponent = self.next_integer("exponent")?;
        if exponent < 0 {
            return Err(ReadError::NegativeExponent { exponent });
        }
        u32::try_from(exponent)
            .ok()
            .filter(|&e| e <= MAX_EXPONENT)
            .ok_or(ReadError::ExponentOverflow { exponent })
    }

    fn next_terms(&mut self) -> Result<Vec<Term>, ReadError> {
        let count = self.next_count()?;
        let mut terms = Vec::with_capacity(count.min(1024));
        for _ in 0..count {
            let coefficient = self.next_integer("coefficient")?;
            let exponent = self.next_exponent()?;
            terms.push(Term::new(coefficient, exponent));
        }
        Ok(terms)
    }
}

/// Reads one polynomial, keeping terms exactly in the order supplied.
///
/// Nothing is sorted, merged or dropped, so the result is only well formed
/// if the input already was.
///
/// # Errors
///
/// Fails on truncated input, malformed integers, a negative count or a
/// negative exponent.
pub fn read_raw<'p>(pool: &'p NodePool, tokens: &mut Tokens) -> Result<CircularPoly<'p>, ReadError> {
    let terms = tokens.next_terms()?;
    debug!(terms = terms.len(), "read polynomial verbatim");
    Ok(CircularPoly::from_terms(pool, terms))
}

/// Reads one polynomial and normalizes it.
///
/// Terms are sorted by descending exponent, equal exponents are summed and
/// zero coefficients are dropped.
///
/// # Errors
///
/// Same as [`read_raw`].
pub fn read<'p>(pool: &'p NodePool, tokens: &mut Tokens) -> Result<CircularPoly<'p>, ReadError> {
    let terms = normalize(tokens.next_terms()?);
    debug!(terms = terms.len(), "read normalized polynomial");
    Ok(CircularPoly::from_terms(pool, terms))
}

/// Reads one term-array polynomial; coefficients may be decimal.
///
/// # Errors
///
/// Fails on truncated input, malformed numbers, a negative count or a
/// negative exponent.
pub fn read_array(tokens: &mut Tokens) -> Result<ArrayPoly, ReadError> {
    let count = tokens.next_count()?;
    let mut terms = Vec::with_capacity(count.min(1024));
    for _ in 0..count {
        let coefficient = tokens.next_number("coefficient")?;
        let exponent = tokens.next_exponent()?;
        terms.push(ArrayTerm {
            coefficient,
            exponent,
        });
    }
    Ok(ArrayPoly::from_terms(terms))
}

/// Sorts terms by descending exponent and combines like terms.
fn normalize(mut terms: Vec<Term>) -> Vec<Term> {
    terms.sort_by(|a, b| b.exponent.cmp(&a.exponent));

    let mut merged: Vec<Term> = Vec::with_capacity(terms.len());
    for term in terms {
        match merged.last_mut() {
            Some(last) if last.exponent == term.exponent => last.coefficient += term.coefficient,
            _ => merged.push(term),
        }
    }
    merged.retain(|t| !t.is_zero());
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(p: &CircularPoly<'_>) -> Vec<(i64, u32)> {
        p.terms().map(|t| (t.coefficient, t.exponent)).collect()
    }

    #[test]
    fn test_read_two_polynomials() {
        let pool = NodePool::new();
        let mut tokens = Tokens::new("2 3 2 2 0\n2 1 2\n 5 1");

        let a = read_raw(&pool, &mut tokens).unwrap();
        let b = read_raw(&pool, &mut tokens).unwrap();
        assert!(tokens.is_exhausted());

        assert_eq!(pairs(&a), vec![(3, 2), (2, 0)]);
        assert_eq!(pairs(&b), vec![(1, 2), (5, 1)]);
    }

    #[test]
    fn test_read_raw_keeps_order() {
        let pool = NodePool::new();
        let mut tokens = Tokens::new("3 1 0 4 2 -4 2");

        let p = read_raw(&pool, &mut tokens).unwrap();
        assert_eq!(pairs(&p), vec![(1, 0), (4, 2), (-4, 2)]);
    }

    #[test]
    fn test_read_normalizes() {
        let pool = NodePool::new();
        let mut tokens = Tokens::new("4 1 0 4 2 -4 2 7 5");

        let p = read(&pool, &mut tokens).unwrap();
        assert_eq!(pairs(&p), vec![(7, 5), (1, 0)]);
        assert!(p.is_well_formed());
    }

    #[test]
    fn test_read_zero_terms() {
        let pool = NodePool::new();
        let p = read(&pool, &mut Tokens::new("0")).unwrap();
        assert!(p.is_zero());
    }

    #[test]
    fn test_read_errors() {
        let pool = NodePool::new();

        let err = read_raw(&pool, &mut Tokens::new("2 1 1")).unwrap_err();
        assert!(matches!(err, ReadError::UnexpectedEnd { expected: "coefficient" }));

        let err = read_raw(&pool, &mut Tokens::new("1 x 1")).unwrap_err();
        assert!(matches!(err, ReadError::InvalidInteger { token } if token == "x"));

        let err = read_raw(&pool, &mut Tokens::new("-1")).unwrap_err();
        assert!(matches!(err, ReadError::NegativeCount { count: -1 }));

        let err = read(&pool, &mut Tokens::new("1 3 -2")).unwrap_err();
        assert!(matches!(err, ReadError::NegativeExponent { exponent: -2 }));

        let err = read(&pool, &mut Tokens::new("1 3 99999999999")).unwrap_err();
        assert!(matches!(err, ReadError::ExponentOverflow { .. }));

        // Failed reads leave nothing allocated
        assert_eq!(pool.live_len(), 0);
    }

    #[test]
    fn test_read_bounds_exponents_for_products() {
        let pool = NodePool::new();

        let err = read(&pool, &mut Tokens::new("1 1 3000000000")).unwrap_err();
        assert!(matches!(err, ReadError::ExponentOverflow { exponent: 3_000_000_000 }));
        let err = read_array(&mut Tokens::new("1 1.0 3000000000")).unwrap_err();
        assert!(matches!(err, ReadError::ExponentOverflow { .. }));

        let input = format!("1 1 {MAX_EXPONENT}");
        let a = read_raw(&pool, &mut Tokens::new(&input)).unwrap();
        let b = read(&pool, &mut Tokens::new(&input)).unwrap();
        assert_eq!(pairs(&(&a * &b)), vec![(1, 2 * MAX_EXPONENT)]);

        let arr = read_array(&mut Tokens::new(&input)).unwrap();
        assert_eq!(arr.mul(&arr).terms()[0].exponent, 2 * MAX_EXPONENT);
    }

    #[test]
    fn test_read_array() {
        let mut tokens = Tokens::new("3 1.5 0 -2 3 4 1");
        let p = read_array(&mut tokens).unwrap();
        assert_eq!(p.to_string(), "-2x^3 + 4x + 1.5");

        let err = read_array(&mut Tokens::new("1 abc 2")).unwrap_err();
        assert!(matches!(err, ReadError::InvalidNumber { .. }));
    }

    #[test]
    fn test_from_reader() {
        let input: &[u8] = b"1 5 3\n";
        let mut tokens = Tokens::from_reader(input).unwrap();
        let pool = NodePool::new();
        let p = read(&pool, &mut tokens).unwrap();
        assert_eq!(p.to_string(), "5x^3");
    }
}
