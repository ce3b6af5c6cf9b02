//! Oracle and load-strategy equivalence.
//!
//! Kruskal must match the Prim oracle on total weight, edge count and
//! component count. Every load strategy, with or without early exit, must
//! select exactly the same forest, since [`crate::Edge`]'s order is total.

use proptest::prop_assert_eq;
use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::builder::{KruskalBuilder, LoadStrategy};
use crate::graph::Graph;

use super::oracle::{OracleResult, prim_forest};
use super::structural::run_kruskal;
use super::types::MstFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let forest = run_kruskal(fixture)?;
    let oracle = prim_forest(fixture.vertex_count, &fixture.edges);

    prop_assert_eq!(
        OracleResult {
            total_weight: forest.total_weight(),
            edge_count: forest.len(),
            component_count: forest.component_count(),
        },
        oracle,
        "kruskal disagrees with prim for {:?}",
        fixture.distribution
    );
    Ok(())
}

/// Runs the load-strategy equivalence property for the given fixture.
pub(super) fn run_strategy_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = Graph::new(fixture.vertex_count, fixture.edges.clone())
        .map_err(|err| TestCaseError::fail(format!("fixture graph is invalid: {err}")))?;
    let baseline = run_kruskal(fixture)?;

    for strategy in [LoadStrategy::Incremental, LoadStrategy::Bulk] {
        for early_exit in [false, true] {
            let forest = KruskalBuilder::new()
                .with_load_strategy(strategy)
                .with_early_exit(early_exit)
                .build()
                .and_then(|runner| runner.run(&graph))
                .map_err(|err| TestCaseError::fail(format!("kruskal failed: {err}")))?;
            prop_assert_eq!(
                &forest,
                &baseline,
                "strategy {:?} (early_exit={}) selected a different forest",
                strategy,
                early_exit
            );
        }
    }
    Ok(())
}
