//! Sparse polynomials stored as circular linked lists.
//!
//! Each polynomial is a cycle of term nodes anchored by a sentinel head node
//! that never holds a term. All nodes, the sentinel included, come from a
//! [`NodePool`] and go back to it when the polynomial is dropped, so repeated
//! arithmetic recycles the same nodes instead of allocating.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use ringlet_core::{NodeHandle, NodePool, Term};
use tracing::{debug, error};

/// A sparse integer polynomial in a circular list with a sentinel head.
///
/// Polynomials produced by arithmetic keep their terms in strictly decreasing
/// exponent order with no zero coefficients. Polynomials built verbatim with
/// [`CircularPoly::from_terms`] keep whatever order they were given.
pub struct CircularPoly<'p> {
    pool: &'p NodePool,
    head: NodeHandle,
    len: usize,
}

impl<'p> CircularPoly<'p> {
    /// Creates the zero polynomial: a sentinel linked to itself.
    #[must_use]
    pub fn new(pool: &'p NodePool) -> Self {
        let head = pool.acquire(0, 0);
        Self { pool, head, len: 0 }
    }

    /// Creates a polynomial from terms, in the given order.
    ///
    /// No sorting, merging or validation is performed.
    #[must_use]
    pub fn from_terms<I>(pool: &'p NodePool, terms: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Term>,
    {
        let mut poly = Self::new(pool);
        let mut rear = poly.head;
        for term in terms {
            rear = poly.append(rear, term.into());
        }
        poly
    }

    /// Creates the polynomial `coefficient * x^exponent`.
    #[must_use]
    pub fn monomial(pool: &'p NodePool, coefficient: i64, exponent: u32) -> Self {
        if coefficient == 0 {
            return Self::new(pool);
        }
        Self::from_terms(pool, [Term::new(coefficient, exponent)])
    }

    /// Links a fresh node for `term` after `rear` and returns it.
    fn append(&mut self, rear: NodeHandle, term: Term) -> NodeHandle {
        let node = self.pool.insert_after(rear, term);
        self.len += 1;
        node
    }

    /// Returns the pool this polynomial allocates from.
    #[must_use]
    pub fn pool(&self) -> &'p NodePool {
        self.pool
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.is_empty()
    }

    /// Returns an iterator over the terms in cycle order.
    #[must_use]
    pub fn terms(&self) -> Terms<'_, 'p> {
        Terms {
            poly: self,
            cursor: self.pool.next(self.head),
            remaining: self.len,
        }
    }

    /// Returns the first term after the sentinel.
    #[must_use]
    pub fn leading_term(&self) -> Option<Term> {
        self.terms().next()
    }

    /// Returns the exponent of the leading term, `None` for zero.
    #[must_use]
    pub fn degree(&self) -> Option<u32> {
        self.leading_term().map(|t| t.exponent)
    }

    /// Returns true if exponents strictly decrease and no coefficient is zero.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        let mut previous: Option<u32> = None;
        for term in self.terms() {
            if term.is_zero() || previous.is_some_and(|e| e <= term.exponent) {
                return false;
            }
            previous = Some(term.exponent);
        }
        true
    }

    /// Replaces this polynomial with a copy of `source`.
    ///
    /// The copy is built completely before the old nodes are released, so
    /// assigning a polynomial from itself (or from a clone of itself) is safe.
    pub fn assign(&mut self, source: &CircularPoly<'_>) {
        let copy = Self::from_terms(self.pool, source.terms());
        *self = copy;
    }

    /// Flips the sign of every coefficient in place.
    pub fn negate_in_place(&mut self) {
        let mut cursor = self.pool.next(self.head);
        while cursor != self.head {
            let (term, next) = self.pool.entry(cursor);
            self.pool.set_coefficient(cursor, -term.coefficient);
            cursor = next;
        }
    }

    /// Adds two polynomials by merging their descending exponent cycles.
    ///
    /// Equal exponents are summed and dropped when the sum is zero. The
    /// result is allocated from this polynomial's pool; neither operand is
    /// modified.
    #[must_use]
    pub fn add(&self, other: &CircularPoly<'_>) -> CircularPoly<'p> {
        let mut result = CircularPoly::new(self.pool);
        let mut rear = result.head;

        let mut a = self.terms().peekable();
        let mut b = other.terms().peekable();

        loop {
            let (ta, tb) = match (a.peek(), b.peek()) {
                (Some(&ta), Some(&tb)) => (ta, tb),
                _ => break,
            };

            match ta.exponent.cmp(&tb.exponent) {
                Ordering::Greater => {
                    rear = result.append(rear, ta);
                    a.next();
                }
                Ordering::Less => {
                    rear = result.append(rear, tb);
                    b.next();
                }
                Ordering::Equal => {
                    let sum = ta.coefficient + tb.coefficient;
                    if sum != 0 {
                        rear = result.append(rear, Term::new(sum, ta.exponent));
                    }
                    a.next();
                    b.next();
                }
            }
        }

        // At most one side has terms left
        for term in a.chain(b) {
            rear = result.append(rear, term);
        }

        result
    }

    /// Returns a copy with every coefficient sign-flipped.
    #[must_use]
    pub fn neg(&self) -> CircularPoly<'p> {
        let mut negated = self.clone();
        negated.negate_in_place();
        negated
    }

    /// Subtracts two polynomials as `self + (-other)`.
    #[must_use]
    pub fn sub(&self, other: &CircularPoly<'_>) -> CircularPoly<'p> {
        let mut negated = other.clone();
        negated.negate_in_place();
        self.add(&negated)
    }

    /// Multiplies two polynomials.
    ///
    /// Each term of `self` scales every term of `other` into a scratch
    /// polynomial (in `other`'s order), which is then merged into the running
    /// total with [`CircularPoly::add`]. The scratch and the previous total go
    /// back to the pool after each merge.
    ///
    /// If `other` repeats an exponent, the scratch polynomial repeats it too
    /// and the result may contain duplicate exponents.
    ///
    /// # Panics
    ///
    /// Panics if an exponent sum does not fit in a `u32`. Polynomials from
    /// [`crate::io`] stay within [`crate::io::MAX_EXPONENT`], so one product of
    /// two of them cannot overflow.
    #[must_use]
    pub fn mul(&self, other: &CircularPoly<'_>) -> CircularPoly<'p> {
        debug!(lhs = self.len, rhs = other.len, "multiplying polynomials");

        let mut total = CircularPoly::new(self.pool);
        for ta in self.terms() {
            let scratch = CircularPoly::from_terms(self.pool, other.terms().map(|tb| ta.mul(tb)));
            total = total.add(&scratch);
        }
        total
    }

    /// Evaluates the polynomial at `x`.
    ///
    /// `x^0` is 1 for every `x`, including zero.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn evaluate(&self, x: f64) -> f64 {
        let mut sum = 0.0;
        self.pool.for_each_term(self.head, |term| {
            sum += term.coefficient as f64 * num_traits::pow(x, term.exponent as usize);
        });
        sum
    }

    /// Evaluates the polynomial at an integer point with checked arithmetic.
    ///
    /// Returns `None` if any intermediate value overflows `i64`.
    #[must_use]
    pub fn evaluate_exact(&self, x: i64) -> Option<i64> {
        self.terms().try_fold(0i64, |acc, term| {
            let power = num_traits::checked_pow(x, term.exponent as usize)?;
            acc.checked_add(term.coefficient.checked_mul(power)?)
        })
    }
}

impl Clone for CircularPoly<'_> {
    fn clone(&self) -> Self {
        Self::from_terms(self.pool, self.terms())
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign(source);
    }
}

impl Drop for CircularPoly<'_> {
    fn drop(&mut self) {
        match self.pool.release_cycle(self.head) {
            Ok(released) => debug_assert_eq!(released, self.len + 1),
            Err(err) => error!(%err, head = %self.head, "polynomial cycle is corrupt"),
        }
    }
}

impl PartialEq for CircularPoly<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.terms().eq(other.terms())
    }
}

impl Eq for CircularPoly<'_> {}

impl fmt::Debug for CircularPoly<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.terms().map(|t| (t.coefficient, t.exponent)))
            .finish()
    }
}

impl fmt::Display for CircularPoly<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }

        for (i, term) in self.terms().enumerate() {
            if i > 0 && term.coefficient > 0 {
                f.write_str("+")?;
            }
            write!(f, "{term}")?;
        }
        Ok(())
    }
}

impl<'p> Add<&CircularPoly<'_>> for &CircularPoly<'p> {
    type Output = CircularPoly<'p>;

    fn add(self, rhs: &CircularPoly<'_>) -> CircularPoly<'p> {
        CircularPoly::add(self, rhs)
    }
}

impl<'p> Sub<&CircularPoly<'_>> for &CircularPoly<'p> {
    type Output = CircularPoly<'p>;

    fn sub(self, rhs: &CircularPoly<'_>) -> CircularPoly<'p> {
        CircularPoly::sub(self, rhs)
    }
}

impl<'p> Mul<&CircularPoly<'_>> for &CircularPoly<'p> {
    type Output = CircularPoly<'p>;

    fn mul(self, rhs: &CircularPoly<'_>) -> CircularPoly<'p> {
        CircularPoly::mul(self, rhs)
    }
}

impl<'p> Neg for &CircularPoly<'p> {
    type Output = CircularPoly<'p>;

    fn neg(self) -> CircularPoly<'p> {
        CircularPoly::neg(self)
    }
}

/// Iterator over the terms of a [`CircularPoly`], in cycle order.
pub struct Terms<'a, 'p> {
    poly: &'a CircularPoly<'p>,
    cursor: NodeHandle,
    remaining: usize,
}

impl Iterator for Terms<'_, '_> {
    type Item = Term;

    fn next(&mut self) -> Option<Term> {
        if self.cursor == self.poly.head {
            return None;
        }
        let (term, next) = self.poly.pool.entry(self.cursor);
        self.cursor = next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(term)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Terms<'_, '_> {}
