//! Read-only depth-first traversals over [`Vertex`] graphs.
//!
//! Every operation takes the graph scope's token by shared reference, so
//! edges cannot change while a traversal runs, and allocates its own visited
//! tracking, so calls are independent and repeatable. An absent start vertex
//! (`None`) is the empty graph: each single-source operation returns its
//! neutral result for it rather than an error.
//!
//! | Operation | Absent start |
//! |-----------|--------------|
//! | [`print_vertex_vals`] | prints nothing |
//! | [`reachable`] | empty set |
//! | [`max`] | `T::min_value()` |
//! | [`leaves`] | empty set |
//! | [`all_odd`] | `true` |
//! | [`has_strictly_increasing_path`] | `Err(InvalidArgument)` |

mod collect;
mod dfs;
mod increasing;
mod numeric;
mod print;

pub use collect::{leaves, reachable};
pub use dfs::{dfs, Dfs};
pub use increasing::{has_strictly_increasing_path, strictly_increasing_path};
pub use numeric::{all_odd, max};
pub use print::{print_vertex_vals, reachable_values, write_vertex_vals};

use std::fmt::Display;
use std::io::{self, Write};

use num_traits::PrimInt;

use crate::error::TraversalError;
use crate::{GraphToken, Vertex, VertexSet};

/// The traversal operations bound to one graph scope's token.
///
/// A thin convenience over the free functions in this module for callers that
/// run several queries against the same graph.
///
/// ```rust
/// use vertex_dfs::{GraphToken, GraphTraversal, Vertex};
///
/// GraphToken::new(|mut token| {
///     let a = Vertex::new(1);
///     let b = Vertex::new(2);
///     let c = Vertex::new(3);
///     a.connect_all(&mut token, [&b, &c]);
///     b.add_neighbor(&mut token, &c);
///
///     let walk = GraphTraversal::new(&token);
///     assert_eq!(walk.reachable(Some(&a)).len(), 3);
///     assert_eq!(walk.max(Some(&a)), 3);
///     assert!(!walk.all_odd(Some(&a)));
///     assert_eq!(walk.has_strictly_increasing_path(Some(&a), Some(&c)), Ok(true));
/// });
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GraphTraversal<'t, 'brand> {
    token: &'t GraphToken<'brand>,
}

impl<'t, 'brand> GraphTraversal<'t, 'brand> {
    /// Binds the operations to `token`.
    pub fn new(token: &'t GraphToken<'brand>) -> Self {
        Self { token }
    }

    /// See [`dfs`].
    pub fn dfs<'g, T>(
        &self,
        start: Option<&'g Vertex<'g, 'brand, T>>,
    ) -> Dfs<'t, 'g, 'brand, T> {
        Dfs::new(self.token, start)
    }

    /// See [`print_vertex_vals`].
    ///
    /// # Errors
    /// Returns the I/O error if standard output cannot be written.
    pub fn print_vertex_vals<'g, T: Display>(
        &self,
        start: Option<&'g Vertex<'g, 'brand, T>>,
    ) -> io::Result<()> {
        print_vertex_vals(self.token, start)
    }

    /// See [`write_vertex_vals`].
    ///
    /// # Errors
    /// Returns the first I/O error raised by `out`.
    pub fn write_vertex_vals<'g, T, W>(
        &self,
        start: Option<&'g Vertex<'g, 'brand, T>>,
        out: &mut W,
    ) -> io::Result<()>
    where
        T: Display,
        W: Write + ?Sized,
    {
        write_vertex_vals(self.token, start, out)
    }

    /// See [`reachable`].
    pub fn reachable<'g, T>(
        &self,
        start: Option<&'g Vertex<'g, 'brand, T>>,
    ) -> VertexSet<'g, 'brand, T> {
        reachable(self.token, start)
    }

    /// See [`max`].
    pub fn max<'g, T: PrimInt>(&self, start: Option<&'g Vertex<'g, 'brand, T>>) -> T {
        max(self.token, start)
    }

    /// See [`leaves`].
    pub fn leaves<'g, T>(
        &self,
        start: Option<&'g Vertex<'g, 'brand, T>>,
    ) -> VertexSet<'g, 'brand, T> {
        leaves(self.token, start)
    }

    /// See [`all_odd`].
    pub fn all_odd<'g, T: PrimInt>(&self, start: Option<&'g Vertex<'g, 'brand, T>>) -> bool {
        all_odd(self.token, start)
    }

    /// See [`has_strictly_increasing_path`].
    ///
    /// # Errors
    /// Returns [`TraversalError::InvalidArgument`] if either endpoint is absent.
    pub fn has_strictly_increasing_path<'g, T: Ord>(
        &self,
        start: Option<&'g Vertex<'g, 'brand, T>>,
        end: Option<&'g Vertex<'g, 'brand, T>>,
    ) -> Result<bool, TraversalError> {
        has_strictly_increasing_path(self.token, start, end)
    }
}
