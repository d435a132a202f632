//! # `vertex_dfs` - Depth-First Traversals over Borrowed Vertex Graphs
//!
//! Read-only depth-first algorithms over a caller-owned directed graph whose
//! vertices borrow one another. Graphs may contain cycles and self-loops;
//! every traversal guards against revisiting with its own identity-keyed
//! visited set, so each call terminates and leaves no state behind.
//!
//! ## Safety Guarantees
//!
//! ### Memory Safety
//! - **Borrowed edges**: vertices hold `&'g` references to their neighbors, so
//!   cyclic graphs need neither reference counting nor `unsafe` in user code.
//! - **Branded edge lists**: a vertex's edges live in an [`EdgeCell`] readable
//!   with `&GraphToken<'brand>` and writable only with `&mut GraphToken<'brand>`.
//!
//! ### Traversal Safety
//! - **No mutation in flight**: traversals borrow the token shared, so the
//!   compiler rejects edge changes while any traversal result borrows it.
//! - **Termination**: pre-order DFS marks a vertex before descending and never
//!   revisits a marked vertex within one call.
//! - **Identity semantics**: sets and visited tracking key on vertex address,
//!   never on payload equality.
//!
//! ## Operations
//!
//! | Operation | Result | Absent start |
//! |-----------|--------|--------------|
//! | [`print_vertex_vals`] | each reachable value on its own line | prints nothing |
//! | [`reachable`] | [`VertexSet`] of reachable vertices | empty set |
//! | [`max`] | largest reachable payload | `T::min_value()` |
//! | [`leaves`] | reachable vertices without edges | empty set |
//! | [`all_odd`] | every reachable payload is odd | `true` |
//! | [`has_strictly_increasing_path`] | path with strictly rising values | `InvalidArgument` |
//!
//! ## Example
//!
//! ```rust
//! use vertex_dfs::{has_strictly_increasing_path, leaves, max, reachable, GraphToken, Vertex};
//!
//! GraphToken::new(|mut token| {
//!     // A(1) -> B(2) -> C(3), A -> C
//!     let a = Vertex::new(1);
//!     let b = Vertex::new(2);
//!     let c = Vertex::new(3);
//!     a.connect_all(&mut token, [&b, &c]);
//!     b.add_neighbor(&mut token, &c);
//!
//!     assert_eq!(reachable(&token, Some(&a)).len(), 3);
//!     assert_eq!(max(&token, Some(&a)), 3);
//!     assert!(leaves(&token, Some(&a)).contains(&c));
//!     assert_eq!(has_strictly_increasing_path(&token, Some(&a), Some(&c)), Ok(true));
//! });
//! ```
//!
//! ## Features
//!
//! - `tracing` (default): structured `trace`/`debug` events from every
//!   traversal under the `vertex_dfs` target.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod brand;
pub mod error;
pub mod graph;
mod log;

pub use brand::{EdgeCell, GraphToken};
pub use error::{Endpoint, LayoutError, TraversalError};
pub use graph::{
    all_odd, dfs, has_strictly_increasing_path, leaves, max, print_vertex_vals, reachable,
    reachable_values, strictly_increasing_path, write_vertex_vals, Dfs, GraphLayout,
    GraphTraversal, Vertex, VertexRef, VertexSet, VertexLayout,
};

// Compile-time layout claims.
const _: () = {
    use core::mem;

    // Tokens are ZSTs.
    assert!(mem::size_of::<GraphToken<'static>>() == 0);

    // `EdgeCell` is `repr(transparent)` over its storage (the brand is a ZST).
    assert!(mem::size_of::<EdgeCell<'static, Vec<u8>>>() == mem::size_of::<Vec<u8>>());

    // `VertexRef` is a single thin pointer.
    assert!(mem::size_of::<VertexRef<'static, 'static, u64>>() == mem::size_of::<usize>());
};
