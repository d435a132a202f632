//! Vertices of a caller-owned, possibly cyclic directed graph.
//!
//! A [`Vertex`] owns its payload but only *borrows* its out-neighbors. All
//! vertices of one graph share the lifetime `'g` of the storage they live in
//! (stack locals, an array, or the boxed slice produced by
//! [`GraphLayout::allocate`](crate::graph::GraphLayout::allocate)), which lets
//! edges form cycles and self-loops without reference counting.
//!
//! Edge lists sit in an [`EdgeCell`] branded by the graph scope:
//! - reading edges requires `&GraphToken<'brand>`
//! - adding or removing edges requires `&mut GraphToken<'brand>`
//!
//! Identity, not value, distinguishes vertices. [`VertexRef`] and
//! [`VertexSet`] compare and hash by address.

use core::{
    fmt,
    hash::{Hash, Hasher},
    ptr,
};
use std::collections::{hash_map, HashMap};

use crate::brand::{EdgeCell, GraphToken};

/// A graph node holding a value and an ordered list of outgoing edges.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_neighbor` | \(O(1)\) amortized | Appends; parallel edges are kept |
/// | `remove_neighbor` | \(O(\text{out-degree})\) | Linear scan by identity |
/// | `neighbors` | \(O(1)\) | Borrows the edge slice |
/// | `out_degree` | \(O(1)\) | Returns `Vec::len` |
pub struct Vertex<'g, 'brand, T> {
    data: T,
    neighbors: EdgeCell<'brand, Vec<&'g Vertex<'g, 'brand, T>>>,
}

impl<'g, 'brand, T> Vertex<'g, 'brand, T> {
    /// Creates an isolated vertex (a leaf) holding `data`.
    pub const fn new(data: T) -> Self {
        Self {
            data,
            neighbors: EdgeCell::new(Vec::new()),
        }
    }

    /// Returns the vertex payload.
    #[inline]
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Adds a directed edge `self -> to`.
    ///
    /// Edges keep insertion order. Parallel edges and self-loops are allowed.
    pub fn add_neighbor(&self, token: &mut GraphToken<'brand>, to: &'g Self) {
        self.neighbors.borrow_mut(token).push(to);
    }

    /// Adds a directed edge from `self` to every vertex in `targets`, in order.
    pub fn connect_all<I>(&self, token: &mut GraphToken<'brand>, targets: I)
    where
        I: IntoIterator<Item = &'g Self>,
    {
        self.neighbors.borrow_mut(token).extend(targets);
    }

    /// Removes every edge `self -> to`. Returns `true` if any edge was removed.
    pub fn remove_neighbor(&self, token: &mut GraphToken<'brand>, to: &Self) -> bool {
        let nbrs = self.neighbors.borrow_mut(token);
        let before = nbrs.len();
        nbrs.retain(|&v| !v.same_vertex(to));
        before != nbrs.len()
    }

    /// Returns the out-neighbors in insertion order.
    #[inline]
    pub fn neighbors<'a>(&'a self, token: &'a GraphToken<'brand>) -> &'a [&'g Self] {
        self.neighbors.borrow(token)
    }

    /// Returns the number of outgoing edges.
    #[inline]
    pub fn out_degree(&self, token: &GraphToken<'brand>) -> usize {
        self.neighbors(token).len()
    }

    /// Returns `true` if the vertex has no outgoing edges.
    ///
    /// A vertex whose only edge is a self-loop is not a leaf.
    #[inline]
    pub fn is_leaf(&self, token: &GraphToken<'brand>) -> bool {
        self.neighbors(token).is_empty()
    }

    /// Returns `true` if `self` and `other` are the same vertex.
    #[inline]
    pub fn same_vertex(&self, other: &Self) -> bool {
        ptr::eq(self, other)
    }

    /// Returns an identity handle to this vertex.
    #[inline]
    pub fn handle(&'g self) -> VertexRef<'g, 'brand, T> {
        VertexRef(self)
    }

    #[inline]
    pub(crate) fn address(&self) -> usize {
        ptr::from_ref(self) as usize
    }
}

impl<T: fmt::Debug> fmt::Debug for Vertex<'_, '_, T> {
    // Edges need the token, so only the payload and identity are shown.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vertex")
            .field("data", &self.data)
            .field("at", &self.address())
            .finish_non_exhaustive()
    }
}

/// A copyable reference to a vertex that compares and hashes by identity.
pub struct VertexRef<'g, 'brand, T>(&'g Vertex<'g, 'brand, T>);

impl<'g, 'brand, T> VertexRef<'g, 'brand, T> {
    /// Returns the referenced vertex.
    #[inline]
    pub fn get(self) -> &'g Vertex<'g, 'brand, T> {
        self.0
    }
}

impl<T> Clone for VertexRef<'_, '_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for VertexRef<'_, '_, T> {}

impl<T> PartialEq for VertexRef<'_, '_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.0.same_vertex(other.0)
    }
}

impl<T> Eq for VertexRef<'_, '_, T> {}

impl<T> Hash for VertexRef<'_, '_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.address().hash(state);
    }
}

impl<'g, 'brand, T> core::ops::Deref for VertexRef<'g, 'brand, T> {
    type Target = Vertex<'g, 'brand, T>;

    fn deref(&self) -> &Self::Target {
        self.0
    }
}

impl<'g, 'brand, T> From<&'g Vertex<'g, 'brand, T>> for VertexRef<'g, 'brand, T> {
    fn from(vertex: &'g Vertex<'g, 'brand, T>) -> Self {
        VertexRef(vertex)
    }
}

impl<T: fmt::Debug> fmt::Debug for VertexRef<'_, '_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.0, f)
    }
}

/// An unordered set of vertices keyed by identity.
///
/// Two distinct vertices carrying equal payloads are two members.
pub struct VertexSet<'g, 'brand, T> {
    members: HashMap<usize, &'g Vertex<'g, 'brand, T>>,
}

impl<'g, 'brand, T> VertexSet<'g, 'brand, T> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            members: HashMap::new(),
        }
    }

    /// Inserts `vertex`. Returns `false` if it was already present.
    pub fn insert(&mut self, vertex: &'g Vertex<'g, 'brand, T>) -> bool {
        self.members.insert(vertex.address(), vertex).is_none()
    }

    /// Returns `true` if this exact vertex is a member.
    pub fn contains(&self, vertex: &Vertex<'g, 'brand, T>) -> bool {
        self.members.contains_key(&vertex.address())
    }

    /// Returns the number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the set has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns `true` if every member of `self` is a member of `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.members.keys().all(|at| other.members.contains_key(at))
    }

    /// Iterates over the members in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &'g Vertex<'g, 'brand, T>> + '_ {
        self.members.values().copied()
    }

    /// Iterates over the members' payloads in arbitrary order.
    pub fn values(&self) -> impl Iterator<Item = &'g T> + use<'_, 'g, 'brand, T> {
        self.members.values().map(|vertex| vertex.data())
    }
}

impl<T> Default for VertexSet<'_, '_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PartialEq for VertexSet<'_, '_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<T> Eq for VertexSet<'_, '_, T> {}

impl<T: fmt::Debug> fmt::Debug for VertexSet<'_, '_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.values()).finish()
    }
}

impl<'g, 'brand, T> FromIterator<&'g Vertex<'g, 'brand, T>> for VertexSet<'g, 'brand, T> {
    fn from_iter<I: IntoIterator<Item = &'g Vertex<'g, 'brand, T>>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'g, 'brand, T> Extend<&'g Vertex<'g, 'brand, T>> for VertexSet<'g, 'brand, T> {
    fn extend<I: IntoIterator<Item = &'g Vertex<'g, 'brand, T>>>(&mut self, iter: I) {
        self.members
            .extend(iter.into_iter().map(|vertex| (vertex.address(), vertex)));
    }
}

impl<'g, 'brand, T> IntoIterator for VertexSet<'g, 'brand, T> {
    type Item = &'g Vertex<'g, 'brand, T>;
    type IntoIter = hash_map::IntoValues<usize, &'g Vertex<'g, 'brand, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_keep_insertion_order_and_duplicates() {
        GraphToken::new(|mut token| {
            let a = Vertex::new('a');
            let b = Vertex::new('b');
            let c = Vertex::new('c');
            a.connect_all(&mut token, [&c, &b, &c]);

            let order: Vec<char> = a.neighbors(&token).iter().map(|v| *v.data()).collect();
            assert_eq!(order, vec!['c', 'b', 'c']);
            assert_eq!(a.out_degree(&token), 3);
            assert!(b.is_leaf(&token));
        });
    }

    #[test]
    fn remove_neighbor_drops_every_parallel_edge() {
        GraphToken::new(|mut token| {
            let a = Vertex::new(1);
            let b = Vertex::new(2);
            a.connect_all(&mut token, [&b, &b]);

            assert!(a.remove_neighbor(&mut token, &b));
            assert!(a.is_leaf(&token));
            assert!(!a.remove_neighbor(&mut token, &b));
        });
    }

    #[test]
    fn self_loop_is_not_a_leaf() {
        GraphToken::new(|mut token| {
            let x = Vertex::new(5);
            x.add_neighbor(&mut token, &x);
            assert!(!x.is_leaf(&token));
            assert!(x.neighbors(&token)[0].same_vertex(&x));
        });
    }

    #[test]
    fn set_membership_is_by_identity_not_value() {
        GraphToken::new(|_token| {
            let first = Vertex::new(7);
            let twin = Vertex::new(7);
            let mut set = VertexSet::new();

            assert!(set.insert(&first));
            assert!(!set.insert(&first));
            assert!(set.contains(&first));
            assert!(!set.contains(&twin));

            assert!(set.insert(&twin));
            assert_eq!(set.len(), 2);
        });
    }

    #[test]
    fn handles_compare_by_address() {
        GraphToken::new(|_token| {
            let a = Vertex::new(1);
            let b = Vertex::new(1);
            assert_eq!(a.handle(), VertexRef::from(&a));
            assert_ne!(a.handle(), b.handle());
            assert_eq!(*a.handle().data(), 1);
        });
    }
}
