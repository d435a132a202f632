//! Serializable adjacency descriptions of vertex graphs.
//!
//! A [`GraphLayout`] is plain data: payloads plus neighbor indices. It can be
//! stored as JSON and materialized into a [`Vertex`] graph in two steps,
//! because the vertices must exist before anything can borrow them:
//!
//! ```rust
//! use vertex_dfs::{graph::GraphLayout, reachable, GraphToken};
//!
//! let layout: GraphLayout<i32> =
//!     GraphLayout::from_json(r#"{"vertices":[{"data":1,"neighbors":[1]},{"data":2}]}"#)?;
//!
//! GraphToken::new(|mut token| {
//!     let vertices = layout.allocate();
//!     layout.wire(&mut token, &vertices)?;
//!     assert_eq!(reachable(&token, vertices.first()).len(), 2);
//!     Ok::<(), vertex_dfs::LayoutError>(())
//! })?;
//! # Ok::<(), vertex_dfs::LayoutError>(())
//! ```

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::LayoutError;
use crate::{GraphToken, Vertex};

/// One vertex of a [`GraphLayout`]: its payload and out-neighbor indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexLayout<T> {
    /// The vertex payload.
    pub data: T,
    /// Indices of the out-neighbors, in edge order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub neighbors: Vec<usize>,
}

/// An index-based description of a directed graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphLayout<T> {
    /// The vertices; a vertex's index is its position here.
    pub vertices: Vec<VertexLayout<T>>,
}

impl<T> GraphLayout<T> {
    /// Creates a layout with no vertices.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Appends an isolated vertex and returns its index.
    pub fn push_vertex(&mut self, data: T) -> usize {
        self.vertices.push(VertexLayout {
            data,
            neighbors: Vec::new(),
        });
        self.vertices.len() - 1
    }

    /// Appends the edge `from -> to`.
    ///
    /// # Errors
    /// Returns [`LayoutError::EdgeOutOfBounds`] if either index is unknown.
    pub fn push_edge(&mut self, from: usize, to: usize) -> Result<(), LayoutError> {
        let len = self.len();
        if from >= len || to >= len {
            return Err(LayoutError::EdgeOutOfBounds { from, to, len });
        }
        self.vertices[from].neighbors.push(to);
        Ok(())
    }

    /// Returns the number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the layout has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(|v| v.neighbors.len()).sum()
    }

    /// Iterates over every edge as `(from, to)`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .flat_map(|(from, v)| v.neighbors.iter().map(move |&to| (from, to)))
    }

    /// Checks that every edge names an existing vertex.
    ///
    /// # Errors
    /// Returns the first out-of-bounds edge.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let len = self.len();
        match self.edges().find(|&(_, to)| to >= len) {
            Some((from, to)) => Err(LayoutError::EdgeOutOfBounds { from, to, len }),
            None => Ok(()),
        }
    }

    /// Creates one unconnected vertex per entry, in index order.
    pub fn allocate<'g, 'brand>(&self) -> Box<[Vertex<'g, 'brand, T>]>
    where
        T: Clone,
    {
        self.vertices
            .iter()
            .map(|v| Vertex::new(v.data.clone()))
            .collect()
    }

    /// Adds this layout's edges to `vertices`, which must be laid out as
    /// [`allocate`](Self::allocate) returns them.
    ///
    /// The layout is validated first; on error no edge has been added.
    ///
    /// # Errors
    /// Returns [`LayoutError::VertexCountMismatch`] if `vertices` has the
    /// wrong length, or [`LayoutError::EdgeOutOfBounds`] for a bad edge.
    pub fn wire<'g, 'brand>(
        &self,
        token: &mut GraphToken<'brand>,
        vertices: &'g [Vertex<'g, 'brand, T>],
    ) -> Result<(), LayoutError> {
        if vertices.len() != self.len() {
            return Err(LayoutError::VertexCountMismatch {
                expected: self.len(),
                actual: vertices.len(),
            });
        }
        self.validate()?;

        for (from, to) in self.edges() {
            vertices[from].add_neighbor(token, &vertices[to]);
        }
        Ok(())
    }
}

impl<T: DeserializeOwned> GraphLayout<T> {
    /// Parses a layout from JSON and validates it.
    ///
    /// # Errors
    /// Returns [`LayoutError::Json`] for malformed input, or
    /// [`LayoutError::EdgeOutOfBounds`] for a dangling edge.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let layout: Self = serde_json::from_str(json)?;
        layout.validate()?;
        Ok(layout)
    }
}

impl<T: Serialize> GraphLayout<T> {
    /// Renders the layout as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns [`LayoutError::Json`] if a payload fails to serialize.
    pub fn to_json(&self) -> Result<String, LayoutError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<T> Default for GraphLayout<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for GraphLayout<T> {
    /// Builds an edgeless layout from payloads.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            vertices: iter
                .into_iter()
                .map(|data| VertexLayout {
                    data,
                    neighbors: Vec::new(),
                })
                .collect(),
        }
    }
}
