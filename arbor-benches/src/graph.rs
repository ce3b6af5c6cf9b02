//! Seeded synthetic inputs.
//!
//! Graphs are connected by construction: a random Hamiltonian path links
//! every vertex, then extra random edges (self-loops and parallel edges
//! included) are scattered on top.

use arbor_core::{Edge, Graph};
use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};

use crate::error::BenchSetupError;

/// Shape of a synthetic graph.
#[derive(Clone, Copy, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices; must be non-zero.
    pub vertex_count: usize,
    /// Extra random edges per vertex on top of the spanning path.
    pub edges_per_vertex: usize,
    /// Weights are drawn uniformly from `1..=max_weight`; must be non-zero.
    pub max_weight: u32,
    /// Seed for the random number generator.
    pub seed: u64,
}

/// Generates a connected graph described by `config`.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when `vertex_count` or
/// `max_weight` is zero.
///
/// # Examples
/// ```
/// use arbor_benches::graph::{SyntheticGraphConfig, synthetic_graph};
///
/// let graph = synthetic_graph(&SyntheticGraphConfig {
///     vertex_count: 8,
///     edges_per_vertex: 2,
///     max_weight: 100,
///     seed: 7,
/// })?;
/// assert_eq!(graph.edges().len(), 7 + 16);
/// # Ok::<(), arbor_benches::error::BenchSetupError>(())
/// ```
pub fn synthetic_graph(config: &SyntheticGraphConfig) -> Result<Graph, BenchSetupError> {
    let vertex_count = config.vertex_count;
    if vertex_count == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "vertex_count",
        });
    }
    if config.max_weight == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "max_weight",
        });
    }
    let max_weight = i64::from(config.max_weight);

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut order: Vec<usize> = (0..vertex_count).collect();
    order.shuffle(&mut rng);

    let extra = vertex_count.saturating_mul(config.edges_per_vertex);
    let mut edges = Vec::with_capacity(vertex_count.saturating_sub(1).saturating_add(extra));
    for (&source, &target) in order.iter().zip(order.iter().skip(1)) {
        edges.push(Edge::new(source, target, rng.gen_range(1..=max_weight)));
    }
    for _ in 0..extra {
        edges.push(Edge::new(
            rng.gen_range(0..vertex_count),
            rng.gen_range(0..vertex_count),
            rng.gen_range(1..=max_weight),
        ));
    }

    Ok(Graph::new(vertex_count, edges)?)
}

/// Returns `count` seeded weights drawn from the full `i64` range.
#[must_use]
pub fn random_weights(count: usize, seed: u64) -> Vec<i64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count).map(|_| rng.r#gen::<i64>()).collect()
}
