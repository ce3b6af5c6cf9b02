//! Type definitions for Kruskal property-based tests.

use test_strategy::Arbitrary;

use crate::graph::Edge;

/// Weight and topology distribution for generated graphs.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum WeightDistribution {
    /// Weights drawn from a wide range, so most are distinct.
    #[weight(2)]
    Unique,
    /// Large groups of edges share identical weights, stressing tie-breaking.
    #[weight(3)]
    ManyIdentical,
    /// Weights straddle zero.
    #[weight(1)]
    Negative,
    /// A random spanning tree plus roughly `0.5n` to `n` extra edges,
    /// including parallel edges and self-loops.
    #[weight(2)]
    Sparse,
    /// Edge probability close to one.
    #[weight(2)]
    Dense,
    /// Several components with no cross-component edges.
    #[weight(2)]
    Disconnected,
}

/// Fixture for Kruskal property tests.
///
/// Captures the vertex count, the generated edges and the distribution used,
/// giving full context when a property fails.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Generated edges in input order.
    pub edges: Vec<Edge>,
    /// Distribution used during generation.
    pub distribution: WeightDistribution,
}
