//! Caller-owned vertex graphs and the depth-first traversals over them.
//!
//! - `vertex`: the [`Vertex`] node type and identity-keyed [`VertexSet`]
//! - `traversal`: the read-only DFS operations
//! - `layout`: serializable [`GraphLayout`] descriptions for building graphs

pub mod layout;
pub mod traversal;
pub mod vertex;
pub(crate) mod access;

pub use layout::{GraphLayout, VertexLayout};
pub use traversal::{
    all_odd, dfs, has_strictly_increasing_path, leaves, max, print_vertex_vals, reachable,
    reachable_values, strictly_increasing_path, write_vertex_vals, Dfs, GraphTraversal,
};
pub use vertex::{Vertex, VertexRef, VertexSet};
