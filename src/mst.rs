mod kruskal;
mod prim;

use crate::graph::{Vertex, WeightedEdge, WeightedGraph};
use crate::mst_error::MstError;
use crate::mst_result::{MstEdge, MstResult};
pub use kruskal::Kruskal;
pub use prim::Prim;
use std::fmt;
use std::str::FromStr;

/// Which engine computes the spanning tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Kruskal,
    Prim,
}

impl Algorithm {
    /// Name used in report headers, e.g. `Kruskal's`.
    pub fn display_name(self) -> &'static str {
        match self {
            Algorithm::Kruskal => "Kruskal's",
            Algorithm::Prim => "Prim's",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Kruskal => write!(f, "kruskal"),
            Algorithm::Prim => write!(f, "prim"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = MstError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kruskal" | "kruskal's" => Ok(Algorithm::Kruskal),
            "prim" | "prim's" => Ok(Algorithm::Prim),
            _ => Err(MstError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// A minimum spanning tree engine.
///
/// Implementors only choose edges; connectivity checking and result
/// aggregation are shared by the provided methods.
pub trait MstEngine {
    fn algorithm(&self) -> Algorithm;

    /// Selects tree edges from `edges`, in the order they join the tree.
    ///
    /// On a disconnected input the selection is a partial forest.
    fn select_edges(&self, vertices: &[Vertex], edges: &[WeightedEdge]) -> Vec<MstEdge>;

    /// Computes the spanning tree over an explicit vertex and edge list.
    ///
    /// # Errors
    ///
    /// [`MstError::DisconnectedGraph`] if fewer than `vertices.len() - 1`
    /// edges were selected.
    fn spanning_tree_of(
        &self,
        vertices: &[Vertex],
        edges: &[WeightedEdge],
    ) -> Result<MstResult, MstError> {
        let selected = self.select_edges(vertices, edges);
        let expected = vertices.len().saturating_sub(1);
        if selected.len() < expected {
            log::debug!(
                "{} selected {} of {expected} edges",
                self.algorithm(),
                selected.len()
            );
            return Err(MstError::DisconnectedGraph {
                selected: selected.len(),
                expected,
            });
        }
        let result = MstResult::from_edges(self.algorithm(), selected);
        log::debug!(
            "{} tree: {} edges, total weight {}",
            self.algorithm(),
            result.edges.len(),
            result.total_weight
        );
        Ok(result)
    }

    /// Computes the spanning tree of the weighted fixed topology.
    fn spanning_tree(&self, graph: &WeightedGraph) -> Result<MstResult, MstError> {
        self.spanning_tree_of(graph.vertices(), graph.edges())
    }
}
