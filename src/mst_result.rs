use crate::graph::{EdgeId, Vertex};
use crate::mst::Algorithm;
use std::collections::BTreeSet;
use std::fmt;

/// An edge selected into the spanning tree, in the orientation the engine
/// added it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MstEdge {
    pub source: Vertex,
    pub target: Vertex,
    pub weight: u32,
}

impl MstEdge {
    pub fn new(source: Vertex, target: Vertex, weight: u32) -> MstEdge {
        MstEdge {
            source,
            target,
            weight,
        }
    }

    /// The canonical edge this selection corresponds to, if any.
    pub fn edge_id(&self) -> Option<EdgeId> {
        EdgeId::between(self.source, self.target)
    }
}

/// Display-ready outcome of one spanning-tree computation.
///
/// # Fields
///
/// * `algorithm` - Engine that produced the tree.
/// * `edges` - Selected edges in the order they were added.
/// * `total_weight` - Sum of the selected weights.
/// * `highlighted_edge_ids` - Canonical identities of the selected edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MstResult {
    pub algorithm: Algorithm,
    pub edges: Vec<MstEdge>,
    pub total_weight: u64,
    pub highlighted_edge_ids: BTreeSet<EdgeId>,
}

impl MstResult {
    /// Aggregates the selected edges into a result.
    ///
    /// Selections that do not match a canonical edge in either orientation
    /// are kept in `edges` but cannot be highlighted.
    pub fn from_edges(algorithm: Algorithm, edges: Vec<MstEdge>) -> MstResult {
        let total_weight = edges.iter().map(|edge| u64::from(edge.weight)).sum();
        let highlighted_edge_ids = edges
            .iter()
            .filter_map(|edge| {
                let id = edge.edge_id();
                if id.is_none() {
                    log::warn!("{}-{} is not a canonical edge", edge.source, edge.target);
                }
                id
            })
            .collect();
        MstResult {
            algorithm,
            edges,
            total_weight,
            highlighted_edge_ids,
        }
    }

    /// Whether `edge` is part of the tree.
    pub fn is_highlighted(&self, edge: EdgeId) -> bool {
        self.highlighted_edge_ids.contains(&edge)
    }
}

impl fmt::Display for MstResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Algorithm MST:", self.algorithm.display_name())?;
        for edge in &self.edges {
            writeln!(f, "{} - {} ({})", edge.source, edge.target, edge.weight)?;
        }
        write!(f, "Total weight: {}", self.total_weight)
    }
}
