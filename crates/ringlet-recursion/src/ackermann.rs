//! The Ackermann function.
//!
//! ```text
//! A(0, n) = n + 1
//! A(m, 0) = A(m - 1, 1)
//! A(m, n) = A(m - 1, A(m, n - 1))
//! ```
//!
//! The function grows faster than any primitive recursive function, so only
//! small arguments (m <= 3, or m = 4 with n = 0) finish in reasonable time.

use tracing::trace;

/// Initial capacity of the explicit call stack.
const STACK_CAPACITY: usize = 1024;

/// Computes `A(m, n)` by direct recursion.
///
/// Deep arguments can exhaust the thread's call stack; prefer
/// [`ackermann_iterative`] for anything beyond `m = 3`.
#[must_use]
pub fn ackermann_recursive(m: u64, n: u64) -> u64 {
    if m == 0 {
        n + 1
    } else if n == 0 {
        ackermann_recursive(m - 1, 1)
    } else {
        ackermann_recursive(m - 1, ackermann_recursive(m, n - 1))
    }
}

/// Computes `A(m, n)` with an explicit stack of pending `m` values.
///
/// Each stack entry stands for an outer call still waiting on the value of
/// its inner call, which is tracked in `n`.
#[must_use]
pub fn ackermann_iterative(m: u64, n: u64) -> u64 {
    let mut stack: Vec<u64> = Vec::with_capacity(STACK_CAPACITY);
    let mut n = n;
    let mut peak = 0;
    stack.push(m);

    while let Some(m) = stack.pop() {
        if m == 0 {
            n += 1;
        } else if n == 0 {
            stack.push(m - 1);
            n = 1;
        } else {
            // A(m - 1, _) waits on A(m, n - 1)
            stack.push(m - 1);
            stack.push(m);
            n -= 1;
        }
        peak = peak.max(stack.len());
    }

    trace!(peak, "ackermann stack depth");
    n
}
