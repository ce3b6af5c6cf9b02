//! Weighted edges, vertex labels and the graphs Kruskal runs over.
//!
//! Vertices are dense `usize` ids. [`VertexIndex`] assigns those ids to
//! textual labels in first-seen order so loaders and presenters can translate
//! in both directions.

use std::cmp::Ordering;

use indexmap::IndexSet;

use crate::error::GraphError;

/// An immutable weighted edge between two vertex ids.
///
/// Edges are undirected for spanning-tree purposes; `source` and `target`
/// keep the orientation they were read with so output can echo the input.
///
/// Edges order by ascending weight, then by `source`, then by `target`. This
/// is a strict total order, so a heap of edges always yields the globally
/// lightest remaining edge first and breaks ties deterministically.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    source: usize,
    target: usize,
    weight: i64,
}

impl Edge {
    /// Creates an edge from `source` to `target` carrying `weight`.
    #[must_use]
    pub const fn new(source: usize, target: usize, weight: i64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the source vertex id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the target vertex id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> i64 { self.weight }

    /// Returns `true` when both endpoints are the same vertex.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.source.cmp(&other.source))
            .then_with(|| self.target.cmp(&other.target))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Bijection between vertex labels and dense ids `0..len()`.
///
/// # Examples
/// ```
/// use arbor_core::VertexIndex;
///
/// let mut index = VertexIndex::new();
/// assert_eq!(index.intern("Chicago"), 0);
/// assert_eq!(index.intern("Denver"), 1);
/// assert_eq!(index.intern("Chicago"), 0);
/// assert_eq!(index.label(1), Some("Denver"));
/// assert_eq!(index.id("Boston"), None);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct VertexIndex {
    labels: IndexSet<String>,
}

impl VertexIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for `label`, assigning the next free id on first sight.
    pub fn intern(&mut self, label: &str) -> usize {
        if let Some(id) = self.labels.get_index_of(label) {
            return id;
        }
        self.labels.insert_full(label.to_owned()).0
    }

    /// Returns the id previously assigned to `label`.
    #[must_use]
    pub fn id(&self, label: &str) -> Option<usize> {
        self.labels.get_index_of(label)
    }

    /// Returns the label assigned to `id`.
    #[must_use]
    pub fn label(&self, id: usize) -> Option<&str> {
        self.labels.get_index(id).map(String::as_str)
    }

    /// Returns the number of distinct labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` when no labels have been interned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterates over the labels in id order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

/// An undirected weighted graph over vertex ids `0..vertex_count`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl Graph {
    /// Creates a graph, checking every endpoint against `vertex_count`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertexId`] when an edge names a vertex
    /// outside `[0, vertex_count)`.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{Edge, Graph, GraphError};
    ///
    /// let graph = Graph::new(2, vec![Edge::new(0, 1, 7)]).expect("ids are in range");
    /// assert_eq!(graph.edges().len(), 1);
    ///
    /// let err = Graph::new(2, vec![Edge::new(0, 2, 1)]).expect_err("2 is out of range");
    /// assert_eq!(err, GraphError::InvalidVertexId { vertex: 2, vertex_count: 2 });
    /// ```
    pub fn new(vertex_count: usize, edges: Vec<Edge>) -> Result<Self, GraphError> {
        for edge in &edges {
            for vertex in [edge.source, edge.target] {
                if vertex >= vertex_count {
                    return Err(GraphError::InvalidVertexId {
                        vertex,
                        vertex_count,
                    });
                }
            }
        }
        Ok(Self {
            vertex_count,
            edges,
        })
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the edges in input order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }
}

/// A [`Graph`] paired with the labels its vertex ids were derived from.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LabelledGraph {
    vertices: VertexIndex,
    graph: Graph,
}

impl LabelledGraph {
    /// Returns the label mapping.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertices(&self) -> &VertexIndex { &self.vertices }

    /// Returns the id-level graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn graph(&self) -> &Graph { &self.graph }

    /// Returns the `(source, target)` labels of `edge`, or `None` when either
    /// id is unknown to this graph.
    #[must_use]
    pub fn edge_labels(&self, edge: &Edge) -> Option<(&str, &str)> {
        Some((
            self.vertices.label(edge.source)?,
            self.vertices.label(edge.target)?,
        ))
    }
}

/// Incrementally assembles a [`LabelledGraph`] from labelled edges.
///
/// # Examples
/// ```
/// use arbor_core::GraphBuilder;
///
/// let mut builder = GraphBuilder::new();
/// builder.add_vertex("lonely");
/// let edge = builder.add_edge("A", "B", 5);
/// assert_eq!((edge.source(), edge.target()), (1, 2));
///
/// let labelled = builder.build();
/// assert_eq!(labelled.graph().vertex_count(), 3);
/// assert_eq!(labelled.edge_labels(&edge), Some(("A", "B")));
/// ```
#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
    vertices: VertexIndex,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `label` as a vertex without adding an edge.
    pub fn add_vertex(&mut self, label: &str) -> usize {
        self.vertices.intern(label)
    }

    /// Adds an edge between two labelled vertices, registering unseen labels.
    pub fn add_edge(&mut self, source: &str, target: &str, weight: i64) -> Edge {
        let source = self.vertices.intern(source);
        let target = self.vertices.intern(target);
        let edge = Edge::new(source, target, weight);
        self.edges.push(edge);
        edge
    }

    /// Returns the number of edges added so far.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Finishes the graph.
    #[must_use]
    pub fn build(self) -> LabelledGraph {
        let graph = Graph {
            vertex_count: self.vertices.len(),
            edges: self.edges,
        };
        LabelledGraph {
            vertices: self.vertices,
            graph,
        }
    }
}
