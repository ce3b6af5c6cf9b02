//! Graph generation strategies for Kruskal property-based tests.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::graph::Edge;

use super::types::{MstFixture, WeightDistribution};

/// Minimum vertex count for most generated graphs.
const MIN_VERTICES: usize = 2;
/// Maximum vertex count for most generated graphs.
const MAX_VERTICES: usize = 48;
/// Maximum vertex count for dense graphs.
const DENSE_MAX_VERTICES: usize = 24;

/// Generates fixtures covering every [`WeightDistribution`].
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific distribution, for targeted rstest
/// cases.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    match distribution {
        WeightDistribution::Unique => {
            random_graph(rng, MAX_VERTICES, 0.3, distribution, |r| r.gen_range(0..1_000_000))
        }
        WeightDistribution::ManyIdentical => {
            let pool: Vec<i64> = (0..rng.gen_range(1..=3))
                .map(|_| rng.gen_range(1..=10))
                .collect();
            random_graph(rng, MAX_VERTICES, 0.4, distribution, move |r| {
                pool[r.gen_range(0..pool.len())]
            })
        }
        WeightDistribution::Negative => {
            random_graph(rng, MAX_VERTICES, 0.3, distribution, |r| r.gen_range(-50..=50))
        }
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => {
            random_graph(rng, DENSE_MAX_VERTICES, 0.9, distribution, |r| r.gen_range(0..100))
        }
        WeightDistribution::Disconnected => generate_disconnected(rng),
    }
}

/// Adds each unordered pair as an edge with probability `edge_probability`,
/// orienting it randomly.
fn random_graph(
    rng: &mut SmallRng,
    max_vertices: usize,
    edge_probability: f64,
    distribution: WeightDistribution,
    mut weight: impl FnMut(&mut SmallRng) -> i64,
) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=max_vertices);
    let mut edges = Vec::new();
    for left in 0..vertex_count {
        for right in (left + 1)..vertex_count {
            if rng.gen_bool(edge_probability) {
                let (source, target) = orient(rng, left, right);
                edges.push(Edge::new(source, target, weight(rng)));
            }
        }
    }
    shuffle(&mut edges, rng);
    MstFixture {
        vertex_count,
        edges,
        distribution,
    }
}

fn generate_sparse(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut order: Vec<usize> = (0..vertex_count).collect();
    shuffle(&mut order, rng);

    let mut edges: Vec<Edge> = order
        .windows(2)
        .map(|pair| Edge::new(pair[0], pair[1], rng.gen_range(0..1_000)))
        .collect();

    let extra = rng.gen_range(vertex_count / 2..=vertex_count);
    for _ in 0..extra {
        let source = rng.gen_range(0..vertex_count);
        let target = rng.gen_range(0..vertex_count);
        edges.push(Edge::new(source, target, rng.gen_range(0..1_000)));
    }
    shuffle(&mut edges, rng);

    MstFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Sparse,
    }
}

fn generate_disconnected(rng: &mut SmallRng) -> MstFixture {
    let sizes: Vec<usize> = (0..rng.gen_range(2..=5))
        .map(|_| rng.gen_range(1..=10))
        .collect();
    let mut edges = Vec::new();
    let mut offset = 0;
    for &size in &sizes {
        for left in 0..size {
            for right in (left + 1)..size {
                if rng.gen_bool(0.5) {
                    edges.push(Edge::new(offset + left, offset + right, rng.gen_range(0..100)));
                }
            }
        }
        offset += size;
    }
    shuffle(&mut edges, rng);

    MstFixture {
        vertex_count: offset,
        edges,
        distribution: WeightDistribution::Disconnected,
    }
}

fn orient(rng: &mut SmallRng, left: usize, right: usize) -> (usize, usize) {
    if rng.gen_bool(0.5) { (left, right) } else { (right, left) }
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle<T>(slice: &mut [T], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}
