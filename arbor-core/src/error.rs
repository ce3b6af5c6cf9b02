//! Error types for the Arbor core library.
//!
//! Defines the error enums exposed by the public API, their stable
//! machine-readable codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Heap operation that can observe an empty queue.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum HeapOperation {
    /// [`crate::BinaryHeap::find_min`].
    FindMin,
    /// [`crate::BinaryHeap::delete_min`].
    DeleteMin,
}

impl HeapOperation {
    /// Returns the operation name as it appears in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FindMin => "find_min",
            Self::DeleteMin => "delete_min",
        }
    }
}

impl fmt::Display for HeapOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error produced by [`crate::BinaryHeap`] operations.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum HeapError {
    /// The queue was empty when an element was requested.
    #[error("heap underflow: `{operation}` called on an empty heap")]
    Underflow {
        /// Operation that observed the empty queue.
        operation: HeapOperation,
    },
}

define_error_codes! {
    /// Stable codes describing [`HeapError`] variants.
    enum HeapErrorCode for HeapError {
        /// The queue was empty when an element was requested.
        Underflow => Underflow { .. } => "HEAP_UNDERFLOW",
    }
}

/// An error produced while constructing a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// An edge referenced a vertex id outside `[0, vertex_count)`.
    #[error("edge references vertex {vertex}, but vertex_count is {vertex_count}")]
    InvalidVertexId {
        /// The offending vertex id.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge referenced a vertex id outside the graph.
        InvalidVertexId => InvalidVertexId { .. } => "GRAPH_INVALID_VERTEX_ID",
    }
}

/// Errors returned while computing a minimum spanning tree or forest.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// The configured initial heap capacity was zero.
    #[error("initial heap capacity must be at least 1 (got {got})")]
    InvalidHeapCapacity {
        /// The invalid capacity supplied by the caller.
        got: usize,
    },
    /// A heap edge referenced a vertex id outside `[0, vertex_count)`.
    #[error("edge ({source_vertex}, {target_vertex}) references a vertex outside 0..{vertex_count}")]
    InvalidVertexId {
        /// Source endpoint of the offending edge.
        source_vertex: usize,
        /// Target endpoint of the offending edge.
        target_vertex: usize,
        /// Number of vertices the selection phase was started with.
        vertex_count: usize,
    },
    /// The forest weight does not fit in `i64`.
    #[error("total weight {total} of {accepted} accepted edges does not fit in i64")]
    WeightOverflow {
        /// Exact sum of the accepted edge weights.
        total: i128,
        /// Number of accepted edges.
        accepted: usize,
    },
    /// The heap failed while the selection phase was draining it.
    #[error("heap failure during edge selection: {0}")]
    Heap(#[from] HeapError),
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// The configured initial heap capacity was zero.
        InvalidHeapCapacity => InvalidHeapCapacity { .. } => "MST_INVALID_HEAP_CAPACITY",
        /// A heap edge referenced a vertex id outside the graph.
        InvalidVertexId => InvalidVertexId { .. } => "MST_INVALID_VERTEX_ID",
        /// Accumulating the forest weight overflowed.
        WeightOverflow => WeightOverflow { .. } => "MST_WEIGHT_OVERFLOW",
        /// The heap failed while draining edges.
        HeapFailure => Heap(..) => "MST_HEAP_FAILURE",
    }
}

impl MstError {
    /// Retrieve the inner [`HeapErrorCode`] when the error originated in the heap.
    #[must_use]
    pub const fn heap_code(&self) -> Option<HeapErrorCode> {
        match self {
            Self::Heap(error) => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the Kruskal orchestrator.
pub type Result<T> = core::result::Result<T, MstError>;
