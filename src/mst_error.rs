use crate::graph::EdgeId;
use thiserror::Error;

/// Error types produced while ingesting weights or computing a spanning tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MstError {
    #[error("Invalid weight for edge {edge}: {token:?} is not an integer")]
    InvalidWeightFormat {
        /// Edge whose input was rejected.
        edge: EdgeId,
        /// Raw token as supplied.
        token: String,
    },

    #[error("Weight {value} for edge {edge} is outside 0..={}", u32::MAX)]
    WeightOutOfRange { edge: EdgeId, value: i64 },

    #[error("Unknown edge: {0:?}")]
    UnknownEdge(String),

    #[error("Unknown vertex: {0:?}")]
    UnknownVertex(String),

    #[error("Unknown algorithm: {0:?} (expected kruskal or prim)")]
    UnknownAlgorithm(String),

    #[error("No algorithm selected")]
    NoAlgorithmSelected,

    /// The engine could not reach every vertex.
    #[error("Graph is disconnected: selected {selected} edges, need {expected}")]
    DisconnectedGraph {
        /// Number of edges the engine managed to select.
        selected: usize,
        /// `vertex count - 1`.
        expected: usize,
    },

    #[error("Thread pool construction failed: {0}")]
    ThreadPool(String),
}
