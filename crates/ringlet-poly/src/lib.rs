//! # ringlet-poly
//!
//! Sparse polynomial arithmetic for ringlet.
//!
//! This crate provides:
//! - Circular linked-list polynomials whose nodes come from a recycling pool
//! - Term-array polynomials with floating point coefficients
//! - A reader for the `n c1 e1 ... cn en` text format
//!
//! ## Node Lifecycle
//!
//! A [`CircularPoly`] borrows the [`NodePool`](ringlet_core::NodePool) it was
//! built from. Every node it links, sentinel included, returns to that pool
//! when the polynomial is dropped or reassigned, and arithmetic results draw
//! from the free list before the pool grows.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod array;
pub mod circular;
pub mod io;

#[cfg(test)]
mod proptests;

pub use array::{ArrayPoly, ArrayTerm};
pub use circular::{CircularPoly, Terms};
pub use io::{read, read_array, read_raw, ReadError, Tokens, MAX_EXPONENT};
