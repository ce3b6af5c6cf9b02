//! Prim oracle for Kruskal property verification.
//!
//! An O(V²) Prim over a dense adjacency matrix shares no code with the heap
//! or the disjoint set, so agreement on total weight and component count is
//! independent evidence that Kruskal found a minimum forest.

use crate::graph::Edge;

/// Result of the Prim oracle.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct OracleResult {
    /// Total weight of the minimum spanning forest.
    pub total_weight: i64,
    /// Number of edges in the forest.
    pub edge_count: usize,
    /// Number of connected components.
    pub component_count: usize,
}

/// Computes the minimum spanning forest weight with Prim's algorithm,
/// restarting from every vertex not yet reached.
pub(super) fn prim_forest(vertex_count: usize, edges: &[Edge]) -> OracleResult {
    let matrix = lightest_edges(vertex_count, edges);
    let mut in_tree = vec![false; vertex_count];
    let mut total_weight = 0;
    let mut edge_count = 0;
    let mut component_count = 0;

    for start in 0..vertex_count {
        if in_tree[start] {
            continue;
        }
        component_count += 1;
        let mut best: Vec<Option<i64>> = vec![None; vertex_count];
        best[start] = Some(0);

        while let Some(next) = closest_outside(&best, &in_tree) {
            in_tree[next] = true;
            if next != start {
                total_weight += best[next].unwrap_or_default();
                edge_count += 1;
            }
            for (other, weight) in matrix[next].iter().enumerate() {
                let Some(weight) = *weight else { continue };
                if !in_tree[other] && best[other].is_none_or(|current| weight < current) {
                    best[other] = Some(weight);
                }
            }
        }
    }

    OracleResult {
        total_weight,
        edge_count,
        component_count,
    }
}

/// Builds a symmetric matrix holding the lightest weight between each pair,
/// ignoring self-loops.
fn lightest_edges(vertex_count: usize, edges: &[Edge]) -> Vec<Vec<Option<i64>>> {
    let mut matrix = vec![vec![None; vertex_count]; vertex_count];
    for edge in edges.iter().filter(|edge| !edge.is_self_loop()) {
        let (source, target, weight) = (edge.source(), edge.target(), edge.weight());
        let lightest = matrix[source][target].map_or(weight, |current: i64| current.min(weight));
        matrix[source][target] = Some(lightest);
        matrix[target][source] = Some(lightest);
    }
    matrix
}

fn closest_outside(best: &[Option<i64>], in_tree: &[bool]) -> Option<usize> {
    best.iter()
        .enumerate()
        .filter(|&(vertex, _)| !in_tree[vertex])
        .filter_map(|(vertex, weight)| weight.map(|weight| (weight, vertex)))
        .min()
        .map(|(_, vertex)| vertex)
}

#[cfg(test)]
mod tests {
    use crate::test_utils::edges;

    use super::{OracleResult, prim_forest};

    #[test]
    fn oracle_handles_triangle() {
        let result = prim_forest(3, &edges(&[(0, 1, 1), (1, 2, 2), (0, 2, 3)]));
        assert_eq!(
            result,
            OracleResult {
                total_weight: 3,
                edge_count: 2,
                component_count: 1,
            }
        );
    }

    #[test]
    fn oracle_counts_isolated_vertices() {
        let result = prim_forest(4, &edges(&[(0, 1, 5), (0, 0, -1)]));
        assert_eq!(
            result,
            OracleResult {
                total_weight: 5,
                edge_count: 1,
                component_count: 3,
            }
        );
    }

    #[test]
    fn oracle_prefers_lightest_parallel_edge() {
        let result = prim_forest(2, &edges(&[(0, 1, 9), (1, 0, -2)]));
        assert_eq!(result.total_weight, -2);
    }
}
