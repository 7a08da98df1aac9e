//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use ringlet_core::{NodePool, Term};

    use crate::array::ArrayPoly;
    use crate::circular::CircularPoly;

    // Strategy for generating small non-zero coefficients
    fn nonzero_coeff() -> impl Strategy<Value = i64> {
        (-20i64..20i64).prop_filter("coefficient must be non-zero", |c| *c != 0)
    }

    // Strategy for well-formed term lists (descending exponents, degree 0-8)
    fn well_formed_terms() -> impl Strategy<Value = Vec<Term>> {
        proptest::collection::btree_map(0u32..9u32, nonzero_coeff(), 0..6).prop_map(|m| {
            m.into_iter()
                .rev()
                .map(|(e, c)| Term::new(c, e))
                .collect()
        })
    }

    fn small_x() -> impl Strategy<Value = i64> {
        -3i64..=3i64
    }

    proptest! {
        #[test]
        fn poly_add_well_formed(a in well_formed_terms(), b in well_formed_terms()) {
            let pool = NodePool::new();
            let a = CircularPoly::from_terms(&pool, a);
            let b = CircularPoly::from_terms(&pool, b);
            prop_assert!(a.add(&b).is_well_formed());
            prop_assert!(a.sub(&b).is_well_formed());
            prop_assert!(a.mul(&b).is_well_formed());
        }

        #[test]
        fn poly_add_commutative(a in well_formed_terms(), b in well_formed_terms()) {
            let pool = NodePool::new();
            let a = CircularPoly::from_terms(&pool, a);
            let b = CircularPoly::from_terms(&pool, b);
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn poly_mul_commutative(a in well_formed_terms(), b in well_formed_terms()) {
            let pool = NodePool::new();
            let a = CircularPoly::from_terms(&pool, a);
            let b = CircularPoly::from_terms(&pool, b);
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn poly_add_identity(a in well_formed_terms()) {
            let pool = NodePool::new();
            let a = CircularPoly::from_terms(&pool, a);
            let zero = CircularPoly::new(&pool);
            prop_assert_eq!(&a + &zero, a.clone());
            prop_assert_eq!(&zero + &a, a);
        }

        #[test]
        fn poly_additive_inverse(a in well_formed_terms()) {
            let pool = NodePool::new();
            let a = CircularPoly::from_terms(&pool, a);
            prop_assert!((&a - &a).is_zero());
            prop_assert!((&a + &(-&a)).is_zero());
        }

        #[test]
        fn poly_distributive(
            a in well_formed_terms(),
            b in well_formed_terms(),
            c in well_formed_terms()
        ) {
            let pool = NodePool::new();
            let a = CircularPoly::from_terms(&pool, a);
            let b = CircularPoly::from_terms(&pool, b);
            let c = CircularPoly::from_terms(&pool, c);

            // a * (b + c) = a * b + a * c
            let left = &a * &(&b + &c);
            let right = &(&a * &b) + &(&a * &c);
            prop_assert_eq!(left, right);
        }

        // Evaluation properties

        #[test]
        fn poly_eval_add(a in well_formed_terms(), b in well_formed_terms(), x in small_x()) {
            let pool = NodePool::new();
            let a = CircularPoly::from_terms(&pool, a);
            let b = CircularPoly::from_terms(&pool, b);

            let sum = (&a + &b).evaluate_exact(x).unwrap();
            prop_assert_eq!(sum, a.evaluate_exact(x).unwrap() + b.evaluate_exact(x).unwrap());
        }

        #[test]
        fn poly_eval_mul(a in well_formed_terms(), b in well_formed_terms(), x in small_x()) {
            let pool = NodePool::new();
            let a = CircularPoly::from_terms(&pool, a);
            let b = CircularPoly::from_terms(&pool, b);

            let product = &a * &b;
            prop_assert_eq!(
                product.evaluate_exact(x).unwrap(),
                a.evaluate_exact(x).unwrap() * b.evaluate_exact(x).unwrap()
            );

            #[allow(clippy::cast_precision_loss)]
            let xf = x as f64 + 0.5;
            let expected = a.evaluate(xf) * b.evaluate(xf);
            let tolerance = 1e-9 * expected.abs().max(1.0);
            prop_assert!((product.evaluate(xf) - expected).abs() <= tolerance);
        }

        // Node lifecycle

        #[test]
        fn poly_drop_returns_every_node(a in well_formed_terms(), b in well_formed_terms()) {
            let pool = NodePool::new();
            let k = a.len();
            let a = CircularPoly::from_terms(&pool, a);
            let b = CircularPoly::from_terms(&pool, b);

            drop(&a * &b);
            drop(&a - &b);
            prop_assert_eq!(pool.live_len(), a.len() + b.len() + 2);

            let free_before = pool.free_len();
            drop(a);
            prop_assert_eq!(pool.free_len(), free_before + k + 1);

            drop(b);
            prop_assert_eq!(pool.live_len(), 0);
        }

        #[test]
        fn poly_copy_independent(a in well_formed_terms()) {
            let pool = NodePool::new();
            let a = CircularPoly::from_terms(&pool, a);
            let before: Vec<_> = a.terms().collect();

            let mut a2 = a.clone();
            a2.negate_in_place();
            a2.assign(&CircularPoly::monomial(&pool, 1, 0));
            drop(a2);

            prop_assert_eq!(a.terms().collect::<Vec<_>>(), before);
        }

        // Circular list vs term array

        #[test]
        fn circular_matches_array(a in well_formed_terms(), b in well_formed_terms()) {
            let pool = NodePool::new();
            let to_array = |terms: &[Term]| {
                ArrayPoly::from_terms(terms.iter().map(|t| (t.coefficient as f64, t.exponent)))
            };

            let ca = CircularPoly::from_terms(&pool, a.iter().copied());
            let cb = CircularPoly::from_terms(&pool, b.iter().copied());
            let product: Vec<Term> = ca.mul(&cb).terms().collect();
            let sum: Vec<Term> = ca.add(&cb).terms().collect();

            prop_assert_eq!(to_array(&product), to_array(&a).mul(&to_array(&b)));
            prop_assert_eq!(to_array(&sum), to_array(&a).add(&to_array(&b)));
        }
    }
}
