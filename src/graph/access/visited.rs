//! Identity-keyed visited tracking for vertex traversals.
//!
//! Every traversal call allocates its own `VisitedSet`, so no state survives
//! between calls and concurrent calls on a shared graph never interfere.
//! Vertices are keyed by address: two vertices with equal payloads are still
//! visited separately.

use std::collections::HashSet;

use crate::graph::Vertex;

/// A per-call set of vertices already seen by a traversal.
#[derive(Debug, Default)]
pub(crate) struct VisitedSet {
    seen: HashSet<usize>,
}

impl VisitedSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.seen.len()
    }

    /// Returns `true` iff the vertex was not yet visited, marking it visited.
    #[inline]
    pub(crate) fn try_visit<T>(&mut self, vertex: &Vertex<'_, '_, T>) -> bool {
        self.seen.insert(vertex.address())
    }

    #[inline]
    pub(crate) fn is_visited<T>(&self, vertex: &Vertex<'_, '_, T>) -> bool {
        self.seen.contains(&vertex.address())
    }

    /// Clears the mark on one vertex, for searches that backtrack.
    #[inline]
    pub(crate) fn unmark<T>(&mut self, vertex: &Vertex<'_, '_, T>) {
        self.seen.remove(&vertex.address());
    }
}
