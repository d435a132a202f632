//! Strictly increasing path search.
//!
//! The search is a recursive DFS that only descends along edges whose target
//! holds a strictly larger value. Two per-call sets bound the work:
//! - `on_path` holds the vertices of the current path prefix, so no path
//!   revisits a vertex
//! - `exhausted` holds vertices all of whose increasing continuations failed
//!
//! A vertex on an increasing path is smaller than everything after it, so the
//! continuations out of a vertex never depend on the prefix that reached it.
//! That makes `exhausted` valid for the rest of the call.
//!
//! Recursion depth is bounded by the longest strictly increasing path.

use crate::error::{Endpoint, TraversalError};
use crate::graph::access::visited::VisitedSet;
use crate::log::{debug_walk, trace_walk};
use crate::{GraphToken, Vertex};

/// Returns whether a directed path from `start` to `end` exists along which
/// every vertex's value is strictly greater than its predecessor's.
///
/// `start == end` (by identity) is the zero-length path and is `true`
/// without looking at any edge, self-loops included.
///
/// # Errors
/// Returns [`TraversalError::InvalidArgument`] if `start` or `end` is absent.
/// The check happens before any traversal.
pub fn has_strictly_increasing_path<'g, 'brand, T: Ord>(
    token: &GraphToken<'brand>,
    start: Option<&'g Vertex<'g, 'brand, T>>,
    end: Option<&'g Vertex<'g, 'brand, T>>,
) -> Result<bool, TraversalError> {
    Ok(strictly_increasing_path(token, start, end)?.is_some())
}

/// Returns the first strictly increasing path from `start` to `end` found in
/// neighbor order, both endpoints included, or `None` if there is none.
///
/// Any valid path may be returned; it is not necessarily the shortest.
///
/// # Errors
/// Returns [`TraversalError::InvalidArgument`] if `start` or `end` is absent.
pub fn strictly_increasing_path<'g, 'brand, T: Ord>(
    token: &GraphToken<'brand>,
    start: Option<&'g Vertex<'g, 'brand, T>>,
    end: Option<&'g Vertex<'g, 'brand, T>>,
) -> Result<Option<Vec<&'g Vertex<'g, 'brand, T>>>, TraversalError> {
    let start = start.ok_or(TraversalError::InvalidArgument(Endpoint::Start))?;
    let end = end.ok_or(TraversalError::InvalidArgument(Endpoint::End))?;

    if start.same_vertex(end) {
        trace_walk!(op = "increasing_path", "start is end");
        return Ok(Some(vec![start]));
    }

    let mut search = IncreasingSearch {
        token,
        end,
        on_path: VisitedSet::new(),
        exhausted: VisitedSet::new(),
        path: Vec::new(),
    };
    let found = search.descend(start);
    debug_walk!(
        op = "increasing_path",
        found,
        exhausted = search.exhausted.len(),
        "increasing path search finished"
    );
    Ok(found.then_some(search.path))
}

struct IncreasingSearch<'t, 'g, 'brand, T> {
    token: &'t GraphToken<'brand>,
    end: &'g Vertex<'g, 'brand, T>,
    on_path: VisitedSet,
    exhausted: VisitedSet,
    path: Vec<&'g Vertex<'g, 'brand, T>>,
}

impl<'g, 'brand, T: Ord> IncreasingSearch<'_, 'g, 'brand, T> {
    fn descend(&mut self, current: &'g Vertex<'g, 'brand, T>) -> bool {
        self.path.push(current);
        if current.same_vertex(self.end) {
            return true;
        }
        self.on_path.try_visit(current);

        let token = self.token;
        for &next in current.neighbors(token) {
            if self.on_path.is_visited(next) || self.exhausted.is_visited(next) {
                continue;
            }
            if next.data() > current.data() && self.descend(next) {
                return true;
            }
        }

        self.on_path.unmark(current);
        self.exhausted.try_visit(current);
        self.path.pop();
        false
    }
}
