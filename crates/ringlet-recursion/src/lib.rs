//! # ringlet-recursion
//!
//! Small recursion exercises that sit next to the polynomial crates.
//!
//! This crate provides:
//! - The Ackermann function, by direct recursion and with an explicit stack
//! - Power-set enumeration by depth-first include/exclude recursion

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ackermann;
pub mod powerset;

#[cfg(test)]
mod proptests;

pub use ackermann::{ackermann_iterative, ackermann_recursive};
pub use powerset::{for_each_subset, format_subset, powerset};
