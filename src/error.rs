//! Error types for traversals and graph construction.

use core::fmt;

use thiserror::Error;

/// Which endpoint of a path query was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// The vertex the path starts at.
    Start,
    /// The vertex the path must reach.
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Endpoint::Start => "start",
            Endpoint::End => "end",
        })
    }
}

/// Errors raised by traversal operations.
///
/// Only precondition violations are reported here; an absent start vertex for
/// the single-source operations is the empty graph, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TraversalError {
    /// A required vertex argument was absent.
    #[error("invalid argument: {0} vertex is absent")]
    InvalidArgument(Endpoint),
}

/// Errors raised while materializing a [`GraphLayout`](crate::graph::GraphLayout).
#[derive(Debug, Error)]
pub enum LayoutError {
    /// An edge names a vertex index that does not exist.
    #[error("edge {from} -> {to} is out of bounds for {len} vertices")]
    EdgeOutOfBounds {
        /// Source vertex index.
        from: usize,
        /// Target vertex index.
        to: usize,
        /// Number of vertices in the layout.
        len: usize,
    },
    /// The layout was handed a different number of vertices than it describes.
    #[error("layout describes {expected} vertices but {actual} were supplied")]
    VertexCountMismatch {
        /// Vertex count in the layout.
        expected: usize,
        /// Vertex count supplied by the caller.
        actual: usize,
    },
    /// The JSON document could not be parsed.
    #[error("malformed graph document: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_names_the_endpoint() {
        assert_eq!(
            TraversalError::InvalidArgument(Endpoint::Start).to_string(),
            "invalid argument: start vertex is absent"
        );
        assert_eq!(
            TraversalError::InvalidArgument(Endpoint::End).to_string(),
            "invalid argument: end vertex is absent"
        );
    }

    #[test]
    fn out_of_bounds_message_carries_indices() {
        let err = LayoutError::EdgeOutOfBounds { from: 0, to: 4, len: 2 };
        assert_eq!(err.to_string(), "edge 0 -> 4 is out of bounds for 2 vertices");
    }
}
