use crate::graph::{adjacency, Adjacency, Vertex, WeightedEdge};
use crate::mst::{Algorithm, MstEngine};
use crate::mst_result::MstEdge;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};

/// A candidate edge leaving the current tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrontierEdge {
    from: Vertex,
    to: Vertex,
    weight: u32,
}

impl FrontierEdge {
    fn normalized(&self) -> (Vertex, Vertex) {
        if self.from <= self.to {
            (self.from, self.to)
        } else {
            (self.to, self.from)
        }
    }
}

impl Ord for FrontierEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.normalized().cmp(&other.normalized()))
            .then_with(|| (self.from, self.to).cmp(&(other.from, other.to)))
    }
}

impl PartialOrd for FrontierEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Prim's algorithm: grow a tree from `start`, always taking the lightest
/// frontier edge.
///
/// The frontier uses lazy deletion: it may hold several entries for the same
/// vertex, and entries whose far end is already in the tree are dropped
/// when popped. Ties use the same vertex-pair order as [`Kruskal`](super::Kruskal).
#[derive(Debug, Clone, Copy)]
pub struct Prim {
    start: Vertex,
}

impl Default for Prim {
    /// Starts from vertex `a`.
    fn default() -> Self {
        Self::new(Vertex::A)
    }
}

impl Prim {
    pub fn new(start: Vertex) -> Prim {
        Prim { start }
    }

    pub fn start(&self) -> Vertex {
        self.start
    }
}

fn push_frontier(
    vertex: Vertex,
    adjacency: &Adjacency,
    visited: &HashSet<Vertex>,
    frontier: &mut BinaryHeap<Reverse<FrontierEdge>>,
) {
    let Some(neighbors) = adjacency.get(&vertex) else {
        return;
    };
    for &(to, weight) in neighbors {
        if !visited.contains(&to) {
            frontier.push(Reverse(FrontierEdge {
                from: vertex,
                to,
                weight,
            }));
        }
    }
}

impl MstEngine for Prim {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Prim
    }

    fn select_edges(&self, _vertices: &[Vertex], edges: &[WeightedEdge]) -> Vec<MstEdge> {
        let adjacency = adjacency(edges);
        let mut visited = HashSet::from([self.start]);
        let mut frontier = BinaryHeap::new();
        push_frontier(self.start, &adjacency, &visited, &mut frontier);

        let mut selected = Vec::new();
        while let Some(Reverse(edge)) = frontier.pop() {
            if visited.contains(&edge.to) {
                log::trace!("prim: stale {} - {} ({})", edge.from, edge.to, edge.weight);
                continue;
            }
            log::trace!("prim: take {} - {} ({})", edge.from, edge.to, edge.weight);
            selected.push(MstEdge::new(edge.from, edge.to, edge.weight));
            visited.insert(edge.to);
            push_frontier(edge.to, &adjacency, &visited, &mut frontier);
        }
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{EdgeId, WeightedGraph, VERTICES};
    use crate::ingest::WeightAssignment;
    use crate::mst_error::MstError;

    #[test]
    fn frontier_should_pop_lightest_then_lowest_pair() {
        let mut frontier = BinaryHeap::new();
        for (from, to, weight) in [
            (Vertex::H, Vertex::G, 3),
            (Vertex::A, Vertex::H, 3),
            (Vertex::B, Vertex::C, 5),
            (Vertex::I, Vertex::C, 1),
        ] {
            frontier.push(Reverse(FrontierEdge { from, to, weight }));
        }
        let popped: Vec<(Vertex, Vertex)> = std::iter::from_fn(|| frontier.pop())
            .map(|Reverse(edge)| (edge.from, edge.to))
            .collect();
        assert_eq!(
            popped,
            [
                (Vertex::I, Vertex::C),
                (Vertex::A, Vertex::H),
                (Vertex::H, Vertex::G),
                (Vertex::B, Vertex::C)
            ]
        );
    }

    #[test]
    fn prim_should_grow_from_a_on_classic_weights() {
        let weights = WeightAssignment::from_weights([4, 8, 8, 11, 7, 1, 2, 6, 7, 4, 2, 9, 14, 10]);
        let result = Prim::default()
            .spanning_tree(&WeightedGraph::new(&weights))
            .unwrap();

        assert_eq!(result.total_weight, 37);
        assert_eq!(result.edges.len(), 8);
        assert_eq!(result.edges[0], MstEdge::new(Vertex::A, Vertex::B, 4));
        // every edge leaves the part of the tree built so far
        let mut reached = HashSet::from([Vertex::A]);
        for edge in &result.edges {
            assert!(reached.contains(&edge.source));
            assert!(reached.insert(edge.target));
        }
    }

    #[test]
    fn prim_should_honor_custom_start() {
        let graph = WeightedGraph::new(&WeightAssignment::default());
        let result = Prim::new(Vertex::E).spanning_tree(&graph).unwrap();
        assert_eq!(result.edges[0].source, Vertex::E);
        assert_eq!(result.edges[0], MstEdge::new(Vertex::E, Vertex::D, 0));
    }

    #[test]
    fn prim_should_report_disconnected_input() {
        let edges = [
            WeightedEdge::new(EdgeId::between(Vertex::A, Vertex::B).unwrap(), 2),
            WeightedEdge::new(EdgeId::between(Vertex::F, Vertex::E).unwrap(), 1),
        ];
        assert_eq!(
            Prim::default().spanning_tree_of(&VERTICES, &edges),
            Err(MstError::DisconnectedGraph {
                selected: 1,
                expected: 8
            })
        );
    }
}
