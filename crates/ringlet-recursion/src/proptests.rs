//! Property-based tests for the recursion exercises.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::ackermann::{ackermann_iterative, ackermann_recursive};
    use crate::powerset::powerset;

    proptest! {
        #[test]
        fn ackermann_closed_forms(n in 0u64..200) {
            prop_assert_eq!(ackermann_iterative(1, n), n + 2);
            prop_assert_eq!(ackermann_iterative(2, n), 2 * n + 3);
            prop_assert_eq!(ackermann_recursive(2, n), 2 * n + 3);
        }

        #[test]
        fn ackermann_m3_closed_form(n in 0u64..6) {
            prop_assert_eq!(ackermann_iterative(3, n), (1 << (n + 3)) - 3);
            prop_assert_eq!(ackermann_recursive(3, n), ackermann_iterative(3, n));
        }

        #[test]
        fn powerset_size_and_order(items in proptest::collection::vec(any::<u8>(), 0..8)) {
            let sets = powerset(&items);
            prop_assert_eq!(sets.len(), 1 << items.len());
            prop_assert!(sets[0].is_empty());
            prop_assert_eq!(sets.last().unwrap(), &items);

            // Every subset preserves the input order
            for set in &sets {
                let mut rest = items.iter();
                prop_assert!(set.iter().all(|x| rest.any(|y| y == x)));
            }
        }
    }
}
