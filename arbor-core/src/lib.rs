//! Arbor core library.
//!
//! Computes minimum spanning forests of undirected, integer-weighted graphs
//! with Kruskal's algorithm. The crate provides the three structures the
//! algorithm is built from:
//!
//! - [`BinaryHeap`], an array-backed min-priority queue generic over its
//!   element type and ordering;
//! - [`DisjointSet`], a union-find with path compression and union by
//!   height;
//! - the [`Edge`]/[`Graph`] model together with the [`VertexIndex`] mapping
//!   from textual labels to dense vertex ids.
//!
//! [`Kruskal`] drains a heap of edges in ascending weight order, consulting
//! the disjoint set to reject edges that would close a cycle.
//!
//! # Examples
//! ```
//! use arbor_core::{GraphBuilder, kruskal};
//!
//! let mut builder = GraphBuilder::new();
//! builder.add_edge("A", "B", 1);
//! builder.add_edge("B", "C", 2);
//! builder.add_edge("A", "C", 3);
//! let labelled = builder.build();
//!
//! let forest = kruskal(labelled.graph()).expect("valid graph");
//! assert_eq!(forest.total_weight(), 3);
//! assert!(forest.is_tree());
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod error;
mod graph;
mod heap;
mod mst;

pub use crate::{
    builder::{KruskalBuilder, LoadStrategy},
    error::{
        GraphError, GraphErrorCode, HeapError, HeapErrorCode, HeapOperation, MstError,
        MstErrorCode, Result,
    },
    graph::{Edge, Graph, GraphBuilder, LabelledGraph, VertexIndex},
    heap::{BinaryHeap, DEFAULT_CAPACITY, HeapOrder, NaturalOrder},
    mst::{DisjointSet, Kruskal, SpanningForest, kruskal, select},
};

#[cfg(test)]
pub(crate) mod test_utils;
