use crate::ingest::WeightAssignment;
use crate::mst_error::MstError;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Number of vertices in the fixed topology.
pub const VERTEX_COUNT: usize = 9;

/// Number of edges in the fixed topology.
pub const EDGE_COUNT: usize = 14;

/// A vertex of the fixed graph, labeled `a` through `i`.
///
/// The declaration order is the vertex order used by every tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Vertex {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
}

/// All vertices of the fixed topology in label order.
pub const VERTICES: [Vertex; VERTEX_COUNT] = [
    Vertex::A,
    Vertex::B,
    Vertex::C,
    Vertex::D,
    Vertex::E,
    Vertex::F,
    Vertex::G,
    Vertex::H,
    Vertex::I,
];

impl Vertex {
    /// Returns the single-letter label of the vertex.
    pub fn label(self) -> char {
        match self {
            Vertex::A => 'a',
            Vertex::B => 'b',
            Vertex::C => 'c',
            Vertex::D => 'd',
            Vertex::E => 'e',
            Vertex::F => 'f',
            Vertex::G => 'g',
            Vertex::H => 'h',
            Vertex::I => 'i',
        }
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Vertex {
    type Err = MstError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        VERTICES
            .iter()
            .copied()
            .find(|vertex| label.len() == 1 && label.eq_ignore_ascii_case(&vertex.to_string()))
            .ok_or_else(|| MstError::UnknownVertex(s.to_string()))
    }
}

/// Identity of one of the fourteen canonical edges.
///
/// An `EdgeId` can only be obtained from [`EDGES`], [`EdgeId::between`] or by
/// parsing, so it always names an edge of the fixed topology. The endpoints
/// keep the canonical orientation (`h-g`, not `g-h`); comparisons use the
/// normalized vertex pair so that `a-b < a-h < b-c < ...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeId {
    index: usize,
    source: Vertex,
    target: Vertex,
}

const fn edge(index: usize, source: Vertex, target: Vertex) -> EdgeId {
    EdgeId {
        index,
        source,
        target,
    }
}

/// The canonical edge list of the fixed topology.
pub const EDGES: [EdgeId; EDGE_COUNT] = [
    edge(0, Vertex::A, Vertex::B),
    edge(1, Vertex::A, Vertex::H),
    edge(2, Vertex::B, Vertex::C),
    edge(3, Vertex::B, Vertex::H),
    edge(4, Vertex::H, Vertex::I),
    edge(5, Vertex::H, Vertex::G),
    edge(6, Vertex::C, Vertex::I),
    edge(7, Vertex::I, Vertex::G),
    edge(8, Vertex::C, Vertex::D),
    edge(9, Vertex::C, Vertex::F),
    edge(10, Vertex::G, Vertex::F),
    edge(11, Vertex::D, Vertex::E),
    edge(12, Vertex::D, Vertex::F),
    edge(13, Vertex::F, Vertex::E),
];

impl EdgeId {
    /// Finds the canonical edge joining `u` and `v`, in either orientation.
    pub fn between(u: Vertex, v: Vertex) -> Option<EdgeId> {
        EDGES.iter().copied().find(|edge| edge.joins(u, v))
    }

    /// Position of the edge in [`EDGES`].
    pub fn index(self) -> usize {
        self.index
    }

    pub fn source(self) -> Vertex {
        self.source
    }

    pub fn target(self) -> Vertex {
        self.target
    }

    /// Endpoints ordered as `(min, max)`.
    pub fn normalized(self) -> (Vertex, Vertex) {
        if self.source <= self.target {
            (self.source, self.target)
        } else {
            (self.target, self.source)
        }
    }

    /// Whether this edge connects `u` and `v`, ignoring orientation.
    pub fn joins(self, u: Vertex, v: Vertex) -> bool {
        (self.source == u && self.target == v) || (self.source == v && self.target == u)
    }
}

impl Ord for EdgeId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.normalized().cmp(&other.normalized())
    }
}

impl PartialOrd for EdgeId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.source, self.target)
    }
}

impl FromStr for EdgeId {
    type Err = MstError;

    /// Accepts `a-b`, `a - b` and the reversed orientation `b-a`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (left, right) = s
            .split_once('-')
            .ok_or_else(|| MstError::UnknownEdge(s.to_string()))?;
        let u: Vertex = left.parse()?;
        let v: Vertex = right.parse()?;
        EdgeId::between(u, v).ok_or_else(|| MstError::UnknownEdge(s.to_string()))
    }
}

/// A canonical edge together with its current weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeightedEdge {
    pub id: EdgeId,
    pub weight: u32,
}

impl WeightedEdge {
    pub fn new(id: EdgeId, weight: u32) -> WeightedEdge {
        WeightedEdge { id, weight }
    }

    /// Sort key: weight first, then the normalized vertex pair.
    pub(crate) fn order_key(&self) -> (u32, (Vertex, Vertex)) {
        (self.weight, self.id.normalized())
    }
}

/// Mapping from a vertex to its `(neighbor, weight)` pairs.
pub type Adjacency = HashMap<Vertex, Vec<(Vertex, u32)>>;

/// Builds the undirected adjacency view of `edges`, inserting every edge in
/// both directions.
pub fn adjacency(edges: &[WeightedEdge]) -> Adjacency {
    let mut adjacency: Adjacency = HashMap::with_capacity(VERTEX_COUNT);
    for edge in edges {
        let (source, target) = (edge.id.source(), edge.id.target());
        adjacency
            .entry(source)
            .or_default()
            .push((target, edge.weight));
        adjacency
            .entry(target)
            .or_default()
            .push((source, edge.weight));
    }
    adjacency
}

/// The fixed topology with a weight attached to every edge.
///
/// # Example
///
/// ```
/// use mst_algorithm::graph::{WeightedGraph, EDGES};
/// use mst_algorithm::ingest::WeightAssignment;
///
/// let mut weights = WeightAssignment::default();
/// weights.set(EDGES[0], 4);
/// let graph = WeightedGraph::new(&weights);
/// assert_eq!(graph.edges()[0].weight, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedGraph {
    edges: Vec<WeightedEdge>,
}

impl WeightedGraph {
    /// Attaches `weights` to the canonical edge list.
    pub fn new(weights: &WeightAssignment) -> WeightedGraph {
        WeightedGraph {
            edges: EDGES
                .iter()
                .map(|&id| WeightedEdge::new(id, weights.get(id)))
                .collect(),
        }
    }

    /// Weighted edges in canonical order.
    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    pub fn vertices(&self) -> &'static [Vertex] {
        &VERTICES
    }

    pub fn adjacency(&self) -> Adjacency {
        adjacency(&self.edges)
    }
}
