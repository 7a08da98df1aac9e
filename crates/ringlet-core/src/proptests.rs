//! Property-based tests for the node pool.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::pool::{NodePool, PoolError};

    #[derive(Clone, Debug)]
    enum Op {
        Acquire(i64, u32),
        Release(usize),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (-50i64..50i64, 0u32..10u32).prop_map(|(c, e)| Op::Acquire(c, e)),
            (0usize..32usize).prop_map(Op::Release),
        ]
    }

    proptest! {
        #[test]
        fn pool_accounting_balances(ops in proptest::collection::vec(op(), 0..64)) {
            let pool = NodePool::new();
            let mut held = Vec::new();

            for op in ops {
                match op {
                    Op::Acquire(c, e) => {
                        let h = pool.acquire(c, e);
                        prop_assert!(!held.contains(&h));
                        prop_assert_eq!(pool.term(h).coefficient, c);
                        held.push(h);
                    }
                    Op::Release(i) if !held.is_empty() => {
                        let h = held.swap_remove(i % held.len());
                        prop_assert_eq!(pool.release(h), Ok(()));
                        prop_assert_eq!(pool.release(h), Err(PoolError::DoubleRelease(h)));
                    }
                    Op::Release(_) => {}
                }

                // Every node is either held or free, never both
                prop_assert_eq!(pool.live_len(), held.len());
                prop_assert_eq!(pool.free_len() + held.len(), pool.node_count());
            }
        }

        #[test]
        fn pool_grows_only_on_miss(n in 1usize..32, rounds in 1usize..4) {
            let pool = NodePool::new();

            for _ in 0..rounds {
                let handles: Vec<_> = (0..n).map(|_| pool.acquire(1, 0)).collect();
                for h in handles {
                    pool.release(h).unwrap();
                }
            }

            prop_assert_eq!(pool.node_count(), n);
            prop_assert_eq!(pool.stats().allocated as usize, n);
        }
    }
}
