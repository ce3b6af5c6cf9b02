//! Property-based tests for the Kruskal orchestrator.
//!
//! Checks Kruskal's output against a Prim oracle, validates structural
//! invariants of the resulting forest (acyclicity, edge count, weight
//! accounting), and confirms that every load strategy selects the same
//! forest.

mod equivalence;
mod oracle;
mod strategies;
mod structural;
mod types;
