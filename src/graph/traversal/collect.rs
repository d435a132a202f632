//! Set-valued traversals: the reachable closure and its leaves.

use super::dfs::Dfs;
use crate::log::trace_walk;
use crate::{GraphToken, Vertex, VertexSet};

/// Returns every vertex reachable from `start` by directed edges, `start`
/// included.
///
/// Membership is by identity. An absent start yields the empty set.
pub fn reachable<'g, 'brand, T>(
    token: &GraphToken<'brand>,
    start: Option<&'g Vertex<'g, 'brand, T>>,
) -> VertexSet<'g, 'brand, T> {
    let set: VertexSet<'g, 'brand, T> = Dfs::new(token, start).collect();
    trace_walk!(op = "reachable", found = set.len());
    set
}

/// Returns every reachable vertex (`start` included) with no outgoing edges.
///
/// A self-loop counts as an edge, so a vertex pointing only at itself is not
/// a leaf. An absent start yields the empty set.
pub fn leaves<'g, 'brand, T>(
    token: &GraphToken<'brand>,
    start: Option<&'g Vertex<'g, 'brand, T>>,
) -> VertexSet<'g, 'brand, T> {
    let mut walk = Dfs::new(token, start);
    let set: VertexSet<'g, 'brand, T> = walk.by_ref().filter(|v| v.is_leaf(token)).collect();
    trace_walk!(
        op = "leaves",
        visited = walk.visited_count(),
        found = set.len()
    );
    set
}
