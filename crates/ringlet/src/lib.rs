//! # Ringlet
//!
//! Sparse integer polynomials stored as circular linked lists whose nodes
//! are recycled through a free-list pool.
//!
//! ## Features
//!
//! - **Node pool**: Released nodes are reused before the pool grows
//! - **Circular lists**: Sentinel-headed cycles with merge-based addition
//! - **Term arrays**: A contiguous representation for comparison
//! - **Exercises**: Ackermann and power-set recursion
//!
//! ## Quick Start
//!
//! ```rust
//! use ringlet::prelude::*;
//!
//! let pool = NodePool::new();
//! let a = CircularPoly::from_terms(&pool, [(3, 2), (2, 0)]);
//! let b = CircularPoly::from_terms(&pool, [(1, 2), (5, 1)]);
//!
//! assert_eq!((&a + &b).to_string(), "4x^2+5x^1+2x^0");
//! assert_eq!((&a * &b).evaluate(2.0), 196.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use ringlet_core as core;
pub use ringlet_poly as poly;
pub use ringlet_recursion as recursion;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use ringlet_core::{NodeHandle, NodePool, PoolConfig, PoolError, Term};
    pub use ringlet_poly::{ArrayPoly, CircularPoly, ReadError, Tokens};
    pub use ringlet_recursion::{ackermann_iterative, ackermann_recursive, powerset};
}
