//! Successor links for pooled term lists.
//!
//! A polynomial cycle and the pool's free list are both chains of
//! [`NodeHandle`]s: each node stores the handle of the node after it. Handles
//! are slot numbers in the issuing [`NodePool`](crate::NodePool), so they are
//! only minted by the pool.

use std::fmt;

/// Link to a slot in a [`NodePool`](crate::NodePool).
///
/// Four bytes, `Copy`, and ordered by slot number. A handle says nothing
/// about whether its slot is currently linked or free; the pool checks that
/// on release.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeHandle(u32);

impl NodeHandle {
    /// Link for slot `slot`, or `None` past the last addressable slot.
    pub(crate) fn from_slot(slot: usize) -> Option<Self> {
        u32::try_from(slot).ok().filter(|&s| s < u32::MAX).map(Self)
    }

    /// Slot number in the issuing pool.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }

    pub(crate) const fn slot(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

impl fmt::Display for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
