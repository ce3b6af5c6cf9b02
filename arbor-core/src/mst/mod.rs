//! Minimum spanning forest construction with Kruskal's algorithm.
//!
//! A run has two phases. The load phase places every edge of a [`Graph`] into
//! a [`BinaryHeap`]. The selection phase drains that heap in ascending weight
//! order and uses a [`DisjointSet`] to reject edges whose endpoints are
//! already connected, accepting the rest into the forest.

mod union_find;

use tracing::{debug, info, instrument, trace};

use crate::{
    Result,
    builder::LoadStrategy,
    error::MstError,
    graph::{Edge, Graph},
    heap::{BinaryHeap, DEFAULT_CAPACITY, HeapOrder},
};

pub use self::union_find::DisjointSet;

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected the forest is a minimum spanning tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpanningForest {
    edges: Vec<Edge>,
    total_weight: i64,
    vertex_count: usize,
    component_count: usize,
}

impl SpanningForest {
    /// Returns the accepted edges in acceptance order (non-decreasing weight).
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the sum of the accepted edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> i64 { self.total_weight }

    /// Returns the number of vertices the forest spans.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of connected components (trees) in the forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns the number of accepted edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when no edge was accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }
}

/// Configured Kruskal runner.
///
/// Construct one with [`crate::KruskalBuilder`], or use [`kruskal`] for the
/// default configuration.
///
/// # Examples
/// ```
/// use arbor_core::{Edge, Graph, KruskalBuilder, LoadStrategy};
///
/// let graph = Graph::new(
///     4,
///     vec![Edge::new(0, 1, 5), Edge::new(2, 3, 5)],
/// )?;
/// let forest = KruskalBuilder::new()
///     .with_load_strategy(LoadStrategy::Bulk)
///     .build()?
///     .run(&graph)?;
/// assert_eq!(forest.total_weight(), 10);
/// assert_eq!(forest.component_count(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Kruskal {
    load_strategy: LoadStrategy,
    initial_heap_capacity: usize,
    early_exit: bool,
}

impl Default for Kruskal {
    fn default() -> Self {
        Self::new(LoadStrategy::Incremental, DEFAULT_CAPACITY, false)
    }
}

impl Kruskal {
    pub(crate) fn new(
        load_strategy: LoadStrategy,
        initial_heap_capacity: usize,
        early_exit: bool,
    ) -> Self {
        Self {
            load_strategy,
            initial_heap_capacity,
            early_exit,
        }
    }

    /// Returns the configured load strategy.
    #[must_use]
    #[rustfmt::skip]
    pub fn load_strategy(&self) -> LoadStrategy { self.load_strategy }

    /// Returns the initial heap capacity used by incremental loading.
    #[must_use]
    #[rustfmt::skip]
    pub fn initial_heap_capacity(&self) -> usize { self.initial_heap_capacity }

    /// Returns whether selection stops once a spanning tree is complete.
    #[must_use]
    #[rustfmt::skip]
    pub fn early_exit(&self) -> bool { self.early_exit }

    /// Computes the minimum spanning forest of `graph`.
    ///
    /// # Errors
    /// Returns [`MstError::WeightOverflow`] when the total weight does not fit
    /// in an `i64`.
    #[instrument(
        name = "core.kruskal",
        err,
        skip(self, graph),
        fields(
            vertex_count = graph.vertex_count(),
            edge_count = graph.edges().len(),
            strategy = ?self.load_strategy,
        ),
    )]
    pub fn run(&self, graph: &Graph) -> Result<SpanningForest> {
        let heap = self.load(graph.edges());
        let forest = run_selection(graph.vertex_count(), heap, self.early_exit)?;
        info!(
            accepted = forest.len(),
            total_weight = forest.total_weight(),
            components = forest.component_count(),
            "kruskal completed"
        );
        Ok(forest)
    }

    fn load(&self, edges: &[Edge]) -> BinaryHeap<Edge> {
        match self.load_strategy {
            LoadStrategy::Incremental => {
                let mut heap = BinaryHeap::with_capacity(self.initial_heap_capacity);
                heap.extend(edges.iter().copied());
                heap
            }
            LoadStrategy::Bulk => BinaryHeap::from_vec(edges.to_vec()),
        }
    }
}

/// Computes the minimum spanning forest of `graph` with the default
/// configuration.
///
/// # Errors
/// Returns [`MstError::WeightOverflow`] when the total weight does not fit in
/// an `i64`.
///
/// # Examples
/// ```
/// use arbor_core::{Edge, Graph, kruskal};
///
/// let graph = Graph::new(2, vec![Edge::new(0, 1, 7)])?;
/// let forest = kruskal(&graph)?;
/// assert_eq!(forest.edges(), &[Edge::new(0, 1, 7)]);
/// assert_eq!(forest.total_weight(), 7);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn kruskal(graph: &Graph) -> Result<SpanningForest> {
    Kruskal::default().run(graph)
}

/// Runs the selection phase over an already loaded heap of edges.
///
/// The heap is drained to empty. Every edge is checked against
/// `vertex_count` before its endpoints are looked up.
///
/// # Errors
/// Returns [`MstError::InvalidVertexId`] when an edge names a vertex outside
/// `[0, vertex_count)`, [`MstError::WeightOverflow`] when the total weight
/// overflows, and [`MstError::Heap`] when the heap fails while draining.
///
/// # Examples
/// ```
/// use arbor_core::{BinaryHeap, Edge, select};
///
/// let heap = BinaryHeap::from_vec(vec![
///     Edge::new(0, 2, 3),
///     Edge::new(0, 1, 1),
///     Edge::new(1, 2, 2),
/// ]);
/// let forest = select(3, heap)?;
/// assert_eq!(forest.edges(), &[Edge::new(0, 1, 1), Edge::new(1, 2, 2)]);
/// # Ok::<(), arbor_core::MstError>(())
/// ```
#[instrument(name = "core.select", err, skip(heap), fields(edge_count = heap.len()))]
pub fn select<O: HeapOrder<Edge>>(
    vertex_count: usize,
    heap: BinaryHeap<Edge, O>,
) -> Result<SpanningForest> {
    run_selection(vertex_count, heap, false)
}

fn run_selection<O: HeapOrder<Edge>>(
    vertex_count: usize,
    mut heap: BinaryHeap<Edge, O>,
    early_exit: bool,
) -> Result<SpanningForest> {
    let mut sets = DisjointSet::new(vertex_count);
    let tree_size = vertex_count.saturating_sub(1);
    let mut edges = Vec::with_capacity(tree_size.min(heap.len()));
    // Ascending order front-loads negative weights, so only the final sum is
    // range-checked.
    let mut total_weight: i128 = 0;

    while !heap.is_empty() {
        if early_exit && edges.len() == tree_size {
            debug!(
                remaining = heap.len(),
                "spanning tree complete, dropping remaining edges"
            );
            break;
        }

        let edge = heap.delete_min()?;
        check_endpoints(&edge, vertex_count)?;

        let source_root = sets.find(edge.source());
        let target_root = sets.find(edge.target());
        if source_root == target_root {
            trace!(
                source = edge.source(),
                target = edge.target(),
                weight = edge.weight(),
                "edge closes a cycle"
            );
            continue;
        }

        sets.union(source_root, target_root);
        total_weight += i128::from(edge.weight());
        trace!(
            source = edge.source(),
            target = edge.target(),
            weight = edge.weight(),
            "edge accepted"
        );
        edges.push(edge);
    }

    let total_weight = i64::try_from(total_weight).map_err(|_| MstError::WeightOverflow {
        total: total_weight,
        accepted: edges.len(),
    })?;

    Ok(SpanningForest {
        edges,
        total_weight,
        vertex_count,
        component_count: sets.set_count(),
    })
}

fn check_endpoints(edge: &Edge, vertex_count: usize) -> Result<()> {
    if edge.source() >= vertex_count || edge.target() >= vertex_count {
        return Err(MstError::InvalidVertexId {
            source_vertex: edge.source(),
            target_vertex: edge.target(),
            vertex_count,
        });
    }
    Ok(())
}

#[cfg(test)]
mod property;
