//! # ringlet-core
//!
//! Node storage for ringlet polynomials.
//!
//! This crate provides:
//! - A recycling free-list pool for term nodes
//! - Type-safe 32-bit node handles
//! - The integer `Term` shared by every polynomial representation
//!
//! ## Design Principles
//!
//! - **Index links**: Successor links are handles into the pool, not pointers
//! - **Recycling**: Released nodes are reused before the pool grows
//! - **Checked release**: Double release is reported instead of corrupting the free list

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod handle;
pub mod pool;
pub mod term;

#[cfg(test)]
mod proptests;

pub use handle::NodeHandle;
pub use pool::{NodePool, PoolConfig, PoolError, PoolStats};
pub use term::Term;
