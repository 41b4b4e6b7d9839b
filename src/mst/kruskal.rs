use crate::disjoint_set::DisjointSet;
use crate::graph::{Vertex, WeightedEdge};
use crate::mst::{Algorithm, MstEngine};
use crate::mst_result::MstEdge;

/// Kruskal's algorithm: scan edges by ascending weight and keep every edge
/// that joins two different components.
///
/// Equal weights are ordered by the normalized vertex pair, so the same
/// assignment always yields the same tree. The scan runs over all edges
/// even after the tree is complete.
///
/// # Example
///
/// ```
/// use mst_algorithm::graph::WeightedGraph;
/// use mst_algorithm::ingest::WeightAssignment;
/// use mst_algorithm::mst::{Kruskal, MstEngine};
///
/// let graph = WeightedGraph::new(&WeightAssignment::default());
/// let result = Kruskal.spanning_tree(&graph).unwrap();
/// assert_eq!(result.edges.len(), 8);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Kruskal;

impl MstEngine for Kruskal {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Kruskal
    }

    fn select_edges(&self, _vertices: &[Vertex], edges: &[WeightedEdge]) -> Vec<MstEdge> {
        let mut sorted = edges.to_vec();
        sorted.sort_by_key(WeightedEdge::order_key);

        let mut components = DisjointSet::new();
        for edge in &sorted {
            components.insert(edge.id.source());
            components.insert(edge.id.target());
        }

        let mut selected = Vec::new();
        for edge in sorted {
            let (source, target) = (edge.id.source(), edge.id.target());
            let root_source = components.find(source);
            let root_target = components.find(target);
            if root_source != root_target {
                log::trace!("kruskal: take {} ({})", edge.id, edge.weight);
                selected.push(MstEdge::new(source, target, edge.weight));
                components.union(root_source, root_target);
            } else {
                log::trace!("kruskal: skip {} ({}), closes a cycle", edge.id, edge.weight);
            }
        }
        selected
    }
}
