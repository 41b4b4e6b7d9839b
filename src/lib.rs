use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

pub mod disjoint_set;
pub mod graph;
pub mod ingest;
pub mod mst;
mod mst_error;
mod mst_result;

pub use graph::{EdgeId, Vertex, WeightedGraph, EDGES, VERTICES};
pub use ingest::{ingest_weights, WeightAssignment};
pub use mst::{Algorithm, Kruskal, MstEngine, Prim};
pub use mst_error::MstError;
pub use mst_result::{MstEdge, MstResult};

const NUM_THREADS_FOR_BATCH: usize = 4;

/// Computes the minimum spanning tree of the fixed topology under `weights`.
///
/// Prim's algorithm starts from vertex `a`; use [`compute_mst_with`] and
/// [`Prim::new`] for another start.
///
/// # Errors
///
/// * [`MstError::NoAlgorithmSelected`] if `algorithm` is `None`; nothing is
///   computed.
/// * [`MstError::DisconnectedGraph`] if the tree does not span every vertex.
///
/// # Example
///
/// ```
/// use mst_algorithm::{compute_mst, Algorithm, WeightAssignment};
///
/// let weights = WeightAssignment::from_weights([4, 8, 8, 11, 7, 1, 2, 6, 7, 4, 2, 9, 14, 10]);
/// let result = compute_mst(&weights, Some(Algorithm::Kruskal)).unwrap();
/// assert_eq!(result.total_weight, 37);
/// ```
pub fn compute_mst(
    weights: &WeightAssignment,
    algorithm: Option<Algorithm>,
) -> Result<MstResult, MstError> {
    match algorithm.ok_or(MstError::NoAlgorithmSelected)? {
        Algorithm::Kruskal => compute_mst_with(weights, &Kruskal),
        Algorithm::Prim => compute_mst_with(weights, &Prim::default()),
    }
}

/// Computes the spanning tree with an explicitly configured engine.
pub fn compute_mst_with<E: MstEngine + ?Sized>(
    weights: &WeightAssignment,
    engine: &E,
) -> Result<MstResult, MstError> {
    let graph = WeightedGraph::new(weights);
    engine.spanning_tree(&graph)
}

/// Runs independent computations in parallel, one per weight assignment.
///
/// Each run builds its own graph, union-find and frontier. Results keep the
/// order of `assignments`.
///
/// # Errors
///
/// Fails up front with [`MstError::NoAlgorithmSelected`] or
/// [`MstError::ThreadPool`]; per-run failures are reported in place.
pub fn compute_batch(
    assignments: &[WeightAssignment],
    algorithm: Option<Algorithm>,
) -> Result<Vec<Result<MstResult, MstError>>, MstError> {
    let algorithm = algorithm.ok_or(MstError::NoAlgorithmSelected)?;
    let pool = ThreadPoolBuilder::new()
        .num_threads(NUM_THREADS_FOR_BATCH)
        .build()
        .map_err(|e| MstError::ThreadPool(e.to_string()))?;

    log::debug!("running {} {algorithm} computations", assignments.len());
    Ok(pool.install(|| {
        assignments
            .par_iter()
            .map(|weights| compute_mst(weights, Some(algorithm)))
            .collect()
    }))
}
