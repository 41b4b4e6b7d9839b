use crate::graph::{EdgeId, EDGES, EDGE_COUNT};
use crate::mst_error::MstError;
use std::collections::HashMap;

/// Raw per-edge input as typed by a user. `None` and `Some("")` both mean
/// "left blank".
pub type RawWeights = HashMap<EdgeId, Option<String>>;

/// A weight for each of the canonical edges.
///
/// Built fresh before every computation; edges that were never set weigh 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WeightAssignment {
    weights: [u32; EDGE_COUNT],
}

impl WeightAssignment {
    /// Creates an assignment from weights listed in [`EDGES`] order.
    pub fn from_weights(weights: [u32; EDGE_COUNT]) -> WeightAssignment {
        WeightAssignment { weights }
    }

    pub fn get(&self, edge: EdgeId) -> u32 {
        self.weights[edge.index()]
    }

    pub fn set(&mut self, edge: EdgeId, weight: u32) {
        self.weights[edge.index()] = weight;
    }

    /// Resets every edge back to weight 0.
    pub fn clear(&mut self) {
        self.weights = [0; EDGE_COUNT];
    }

    /// Iterates `(edge, weight)` pairs in canonical edge order.
    pub fn iter(&self) -> impl Iterator<Item = (EdgeId, u32)> + '_ {
        EDGES.iter().map(|&edge| (edge, self.get(edge)))
    }
}

/// Converts raw textual input into a [`WeightAssignment`].
///
/// Blank or absent input yields 0. Any other token must parse as an
/// integer in `0..=u32::MAX`; the first offending edge (in canonical order)
/// fails the whole ingestion and nothing partial is returned.
///
/// # Example
///
/// ```
/// use mst_algorithm::ingest::{ingest_weights, RawWeights};
/// use mst_algorithm::graph::EDGES;
///
/// let mut raw = RawWeights::new();
/// raw.insert(EDGES[0], Some("5".to_string()));
/// let weights = ingest_weights(&raw).unwrap();
/// assert_eq!(weights.get(EDGES[0]), 5);
/// assert_eq!(weights.get(EDGES[1]), 0);
/// ```
pub fn ingest_weights(raw: &RawWeights) -> Result<WeightAssignment, MstError> {
    let mut assignment = WeightAssignment::default();
    for edge in EDGES {
        let token = raw.get(&edge).and_then(|token| token.as_deref());
        assignment.set(edge, parse_weight(edge, token)?);
    }
    Ok(assignment)
}

fn parse_weight(edge: EdgeId, token: Option<&str>) -> Result<u32, MstError> {
    let token = match token {
        None | Some("") => return Ok(0),
        Some(token) => token,
    };
    let value: i64 = token.parse().map_err(|_| {
        log::warn!("Rejected weight {token:?} for edge {edge}");
        MstError::InvalidWeightFormat {
            edge,
            token: token.to_string(),
        }
    })?;
    u32::try_from(value).map_err(|_| MstError::WeightOutOfRange { edge, value })
}

/// Reads `edge=token` lines into [`RawWeights`].
///
/// Blank lines and lines starting with `#` are skipped. The token may be
/// empty (`a-b=`), which later ingests as 0. Edge names accept either
/// orientation. Weight tokens are kept verbatim for [`ingest_weights`].
pub fn raw_weights_from_lines(text: &str) -> Result<RawWeights, MstError> {
    let mut raw = RawWeights::with_capacity(EDGE_COUNT);
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (edge, token) = line.split_once('=').unwrap_or((line, ""));
        let edge: EdgeId = edge.parse()?;
        raw.insert(edge, Some(token.trim().to_string()));
    }
    Ok(raw)
}
