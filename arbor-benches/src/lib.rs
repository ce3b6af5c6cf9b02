//! Benchmark support for arbor.
//!
//! Generates seeded synthetic graphs and weight streams for the Criterion
//! benches covering the binary heap and the Kruskal orchestrator.

pub mod error;
pub mod graph;
pub mod params;
