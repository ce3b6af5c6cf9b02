//! Structural invariants of Kruskal's output.
//!
//! For any forest produced by [`crate::Kruskal`], verifies:
//!
//! - every accepted edge came from the input multiset;
//! - no accepted edge closes a cycle;
//! - `V - C` edges are accepted for `C` components, never more than `V - 1`;
//! - the reported total equals the recomputed sum;
//! - edges are accepted in non-decreasing weight order.

use std::collections::HashMap;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::graph::{Edge, Graph};
use crate::mst::{SpanningForest, kruskal};

use super::types::MstFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let forest = run_kruskal(fixture)?;

    validate_edges_from_input(&fixture.edges, forest.edges())?;
    validate_acyclicity(fixture.vertex_count, forest.edges())?;
    validate_edge_count(fixture.vertex_count, &forest)?;
    validate_total_weight(&forest)?;
    validate_acceptance_order(forest.edges())?;
    Ok(())
}

pub(super) fn run_kruskal(fixture: &MstFixture) -> Result<SpanningForest, TestCaseError> {
    let graph = Graph::new(fixture.vertex_count, fixture.edges.clone())
        .map_err(|err| TestCaseError::fail(format!("fixture graph is invalid: {err}")))?;
    kruskal(&graph).map_err(|err| {
        TestCaseError::fail(format!(
            "kruskal failed: {err} (distribution={:?}, vertices={}, edges={})",
            fixture.distribution,
            fixture.vertex_count,
            fixture.edges.len(),
        ))
    })
}

fn validate_edges_from_input(input: &[Edge], accepted: &[Edge]) -> TestCaseResult {
    let mut available: HashMap<Edge, usize> = HashMap::new();
    for edge in input {
        *available.entry(*edge).or_default() += 1;
    }
    for edge in accepted {
        let Some(count) = available.get_mut(edge).filter(|count| **count > 0) else {
            return Err(TestCaseError::fail(format!(
                "accepted edge {edge:?} is not in the input"
            )));
        };
        *count -= 1;
    }
    Ok(())
}

fn validate_acyclicity(vertex_count: usize, edges: &[Edge]) -> TestCaseResult {
    let mut labels: Vec<usize> = (0..vertex_count).collect();
    for (index, edge) in edges.iter().enumerate() {
        let (old, new) = (labels[edge.target()], labels[edge.source()]);
        if old == new {
            return Err(TestCaseError::fail(format!(
                "edge {index} ({edge:?}) closes a cycle"
            )));
        }
        for label in &mut labels {
            if *label == old {
                *label = new;
            }
        }
    }
    Ok(())
}

fn validate_edge_count(vertex_count: usize, forest: &SpanningForest) -> TestCaseResult {
    let accepted = forest.len();
    if accepted > vertex_count.saturating_sub(1) {
        return Err(TestCaseError::fail(format!(
            "accepted {accepted} edges for {vertex_count} vertices"
        )));
    }
    if accepted != vertex_count - forest.component_count() {
        return Err(TestCaseError::fail(format!(
            "accepted {accepted} edges but V - C = {vertex_count} - {}",
            forest.component_count()
        )));
    }
    if forest.is_tree() != (accepted + 1 == vertex_count) {
        return Err(TestCaseError::fail(
            "is_tree disagrees with the accepted edge count".to_owned(),
        ));
    }
    Ok(())
}

fn validate_total_weight(forest: &SpanningForest) -> TestCaseResult {
    let recomputed: i64 = forest.edges().iter().map(Edge::weight).sum();
    if recomputed != forest.total_weight() {
        return Err(TestCaseError::fail(format!(
            "total weight {} differs from recomputed {recomputed}",
            forest.total_weight()
        )));
    }
    Ok(())
}

fn validate_acceptance_order(edges: &[Edge]) -> TestCaseResult {
    if let Some(pair) = edges.windows(2).find(|pair| pair[0].weight() > pair[1].weight()) {
        return Err(TestCaseError::fail(format!(
            "edges accepted out of weight order: {:?} before {:?}",
            pair[0], pair[1]
        )));
    }
    Ok(())
}
