//! Recycling node pool.
//!
//! Term nodes live contiguously in a `Vec` and refer to each other through
//! [`NodeHandle`] indices. Nodes that are no longer linked into a polynomial
//! go onto a free list threaded through their `next` field and are handed out
//! again before the pool grows. The pool never shrinks; every node is
//! reclaimed at once when the pool itself is dropped.

use parking_lot::Mutex;
use thiserror::Error;
use tracing::trace;

use crate::handle::NodeHandle;
use crate::term::Term;

/// Errors reported by pool operations that can detect misuse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PoolError {
    #[error("node {0} is already on the free list")]
    DoubleRelease(NodeHandle),

    #[error("node {0} was not issued by this pool")]
    InvalidHandle(NodeHandle),
}

/// Configuration for a [`NodePool`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolConfig {
    /// Number of node slots reserved up front. Reserving does not create
    /// nodes; the free list starts empty regardless.
    pub initial_capacity: usize,
}

impl PoolConfig {
    /// Default slot reservation.
    pub const DEFAULT_CAPACITY: usize = 64;
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_CAPACITY,
        }
    }
}

/// Counters describing pool traffic since creation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Total calls to acquire.
    pub acquired: u64,
    /// Acquisitions served from the free list.
    pub reused: u64,
    /// Acquisitions that had to create a fresh node.
    pub allocated: u64,
    /// Nodes returned to the free list.
    pub released: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NodeState {
    Linked,
    Free,
}

#[derive(Clone, Copy, Debug)]
struct Node {
    term: Term,
    /// Successor in a polynomial cycle, or in the free list. A node linked to
    /// itself has no successor.
    next: NodeHandle,
    state: NodeState,
}

#[derive(Debug, Default)]
struct PoolState {
    nodes: Vec<Node>,
    free_head: Option<NodeHandle>,
    free_len: usize,
    stats: PoolStats,
}

impl PoolState {
    fn node(&self, handle: NodeHandle) -> &Node {
        let node = &self.nodes[handle.slot()];
        debug_assert_eq!(node.state, NodeState::Linked, "{handle} is on the free list");
        node
    }

    fn node_mut(&mut self, handle: NodeHandle) -> &mut Node {
        let node = &mut self.nodes[handle.slot()];
        debug_assert_eq!(node.state, NodeState::Linked, "{handle} is on the free list");
        node
    }

    fn acquire(&mut self, term: Term) -> NodeHandle {
        self.stats.acquired += 1;

        if let Some(handle) = self.free_head {
            let node = &mut self.nodes[handle.slot()];
            self.free_head = (node.next != handle).then_some(node.next);
            node.term = term;
            node.next = handle;
            node.state = NodeState::Linked;
            self.free_len -= 1;
            self.stats.reused += 1;
            return handle;
        }

        let Some(handle) = NodeHandle::from_slot(self.nodes.len()) else {
            panic!("Node pool capacity exceeded");
        };
        self.nodes.push(Node {
            term,
            next: handle,
            state: NodeState::Linked,
        });
        self.stats.allocated += 1;
        trace!(node = %handle, "pool miss, allocated fresh node");
        handle
    }

    fn release(&mut self, handle: NodeHandle) -> Result<(), PoolError> {
        let free_head = self.free_head;
        let node = self
            .nodes
            .get_mut(handle.slot())
            .ok_or(PoolError::InvalidHandle(handle))?;

        if node.state == NodeState::Free {
            return Err(PoolError::DoubleRelease(handle));
        }

        node.state = NodeState::Free;
        node.next = free_head.unwrap_or(handle);
        self.free_head = Some(handle);
        self.free_len += 1;
        self.stats.released += 1;
        Ok(())
    }
}

/// A free-list allocator for term nodes.
///
/// All methods take `&self`; the state sits behind a mutex so one pool can be
/// shared by polynomials on several threads. Every call holds the lock only
/// for its own duration.
#[derive(Debug, Default)]
pub struct NodePool {
    state: Mutex<PoolState>,
}

impl NodePool {
    /// Creates an empty pool with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(PoolConfig::default())
    }

    /// Creates an empty pool with the given configuration.
    #[must_use]
    pub fn with_config(config: PoolConfig) -> Self {
        Self::with_capacity(config.initial_capacity)
    }

    /// Creates an empty pool with room for `capacity` nodes before the
    /// backing storage reallocates.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            state: Mutex::new(PoolState {
                nodes: Vec::with_capacity(capacity),
                ..PoolState::default()
            }),
        }
    }

    /// Takes a node for the given term.
    ///
    /// Reuses the most recently released node when the free list is
    /// non-empty; otherwise creates a new one. The returned node is linked
    /// to itself.
    ///
    /// # Panics
    ///
    /// Panics if the pool would need more than `u32::MAX` nodes.
    pub fn acquire(&self, coefficient: i64, exponent: u32) -> NodeHandle {
        self.state.lock().acquire(Term::new(coefficient, exponent))
    }

    /// Takes a node for `term` and splices it in directly after `node`.
    ///
    /// The new node inherits the old successor of `node`, so a closed cycle
    /// stays closed.
    ///
    /// # Panics
    ///
    /// Panics if `node` was not issued by this pool, or if the pool would
    /// need more than `u32::MAX` nodes.
    pub fn insert_after(&self, node: NodeHandle, term: Term) -> NodeHandle {
        let mut state = self.state.lock();
        let handle = state.acquire(term);
        let successor = state.node(node).next;
        state.node_mut(handle).next = successor;
        state.node_mut(node).next = handle;
        handle
    }

    /// Returns a node to the front of the free list.
    ///
    /// The caller must make sure no polynomial still links `node`; the pool
    /// cannot see polynomial links and would hand the node out again.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::DoubleRelease`] if the node is already free and
    /// [`PoolError::InvalidHandle`] if this pool never issued it.
    pub fn release(&self, node: NodeHandle) -> Result<(), PoolError> {
        self.state.lock().release(node)
    }

    /// Releases every node of the circular list anchored at `head`, terms
    /// first and the sentinel last. Returns the number of nodes released.
    ///
    /// # Errors
    ///
    /// Stops at the first node that cannot be released.
    pub fn release_cycle(&self, head: NodeHandle) -> Result<usize, PoolError> {
        let mut state = self.state.lock();
        if head.slot() >= state.nodes.len() {
            return Err(PoolError::InvalidHandle(head));
        }

        let mut released = 0;
        let mut cursor = state.nodes[head.slot()].next;
        while cursor != head {
            let next = state.nodes[cursor.slot()].next;
            state.release(cursor)?;
            released += 1;
            cursor = next;
        }
        state.release(head)?;

        trace!(head = %head, released = released + 1, "released cycle");
        Ok(released + 1)
    }

    /// Returns the term stored in a linked node.
    ///
    /// # Panics
    ///
    /// Panics if the handle was not issued by this pool.
    #[must_use]
    pub fn term(&self, node: NodeHandle) -> Term {
        self.state.lock().node(node).term
    }

    /// Returns the successor of a linked node.
    ///
    /// # Panics
    ///
    /// Panics if the handle was not issued by this pool.
    #[must_use]
    pub fn next(&self, node: NodeHandle) -> NodeHandle {
        self.state.lock().node(node).next
    }

    /// Returns the term and successor of a linked node under one lock.
    ///
    /// # Panics
    ///
    /// Panics if the handle was not issued by this pool.
    #[must_use]
    pub fn entry(&self, node: NodeHandle) -> (Term, NodeHandle) {
        let state = self.state.lock();
        let node = state.node(node);
        (node.term, node.next)
    }

    /// Overwrites the coefficient of a linked node.
    ///
    /// # Panics
    ///
    /// Panics if the handle was not issued by this pool.
    pub fn set_coefficient(&self, node: NodeHandle, coefficient: i64) {
        self.state.lock().node_mut(node).term.coefficient = coefficient;
    }

    /// Calls `visit` with every term of the cycle anchored at `head`, in
    /// cycle order, holding the lock for the whole walk.
    ///
    /// `visit` must not call back into this pool.
    pub fn for_each_term(&self, head: NodeHandle, mut visit: impl FnMut(Term)) {
        let state = self.state.lock();
        let mut cursor = state.node(head).next;
        while cursor != head {
            let node = state.node(cursor);
            visit(node.term);
            cursor = node.next;
        }
    }

    /// Returns the number of nodes waiting on the free list.
    #[must_use]
    pub fn free_len(&self) -> usize {
        self.state.lock().free_len
    }

    /// Returns the total number of nodes ever created.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.state.lock().nodes.len()
    }

    /// Returns the number of nodes currently linked into some list.
    #[must_use]
    pub fn live_len(&self) -> usize {
        let state = self.state.lock();
        state.nodes.len() - state.free_len
    }

    /// Returns a snapshot of the traffic counters.
    #[must_use]
    pub fn stats(&self) -> PoolStats {
        self.state.lock().stats
    }
}
