//! Benchmark setup error type.

use arbor_core::{GraphError, MstError};

/// Errors raised while preparing benchmark inputs.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// A generated graph failed validation.
    #[error("synthetic graph is invalid: {0}")]
    Graph(#[from] GraphError),
    /// Kruskal configuration or execution failed.
    #[error("MST computation failed: {0}")]
    Mst(#[from] MstError),
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// The parameter that was zero.
        context: &'static str,
    },
}
