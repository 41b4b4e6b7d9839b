#[cfg(test)]
mod test {
    extern crate mst_algorithm;
    use mst_algorithm::disjoint_set::DisjointSet;
    use mst_algorithm::ingest::{raw_weights_from_lines, RawWeights};
    use mst_algorithm::{
        compute_batch, compute_mst, ingest_weights, Algorithm, EdgeId, MstError, MstResult,
        Vertex, WeightAssignment, EDGES, VERTICES,
    };
    use rand::Rng;
    use std::collections::HashSet;

    const CLASSIC: &str = "\
a-b=4
a-h=8
b-c=8
b-h=11
h-i=7
h-g=1
c-i=2
i-g=6
c-d=7
c-f=4
g-f=2
d-e=9
d-f=14
f-e=10
";

    fn assert_spanning_tree(result: &MstResult) {
        assert_eq!(result.edges.len(), VERTICES.len() - 1);

        let mut components = DisjointSet::new();
        for vertex in VERTICES {
            components.insert(vertex);
        }
        for edge in &result.edges {
            let root_source = components.find(edge.source);
            let root_target = components.find(edge.target);
            assert_ne!(root_source, root_target, "cycle through {edge:?}");
            components.union(root_source, root_target);
        }
        assert_eq!(components.count_sets(), 1);

        let total: u64 = result.edges.iter().map(|edge| u64::from(edge.weight)).sum();
        assert_eq!(result.total_weight, total);
        assert_eq!(result.highlighted_edge_ids.len(), result.edges.len());
    }

    fn random_weights(max: u32) -> WeightAssignment {
        let mut rng = rand::thread_rng();
        let mut weights = WeightAssignment::default();
        for edge in EDGES {
            weights.set(edge, rng.gen_range(0..=max));
        }
        weights
    }

    #[test]
    fn test_classic_example() {
        let raw = raw_weights_from_lines(CLASSIC).unwrap();
        let weights = ingest_weights(&raw).unwrap();

        let kruskal = compute_mst(&weights, Some(Algorithm::Kruskal)).unwrap();
        let prim = compute_mst(&weights, Some(Algorithm::Prim)).unwrap();
        assert_eq!(kruskal.total_weight, 37);
        assert_eq!(prim.total_weight, 37);
        assert_spanning_tree(&kruskal);
        assert_spanning_tree(&prim);

        let spanned: HashSet<Vertex> = kruskal
            .edges
            .iter()
            .flat_map(|edge| [edge.source, edge.target])
            .collect();
        assert_eq!(spanned.len(), VERTICES.len());
    }

    #[test]
    fn test_random_weights_agree_on_total() {
        for max in [0, 1, 3, 100, u32::MAX] {
            for _ in 0..50 {
                let weights = random_weights(max);
                let kruskal = compute_mst(&weights, Some(Algorithm::Kruskal)).unwrap();
                let prim = compute_mst(&weights, Some(Algorithm::Prim)).unwrap();
                assert_spanning_tree(&kruskal);
                assert_spanning_tree(&prim);
                assert_eq!(kruskal.total_weight, prim.total_weight, "{weights:?}");
            }
        }
    }

    #[test]
    fn test_prim_starts_from_a() {
        for _ in 0..50 {
            let result = compute_mst(&random_weights(20), Some(Algorithm::Prim)).unwrap();
            assert_eq!(result.edges[0].source, Vertex::A);
            assert_spanning_tree(&result);
        }
    }

    #[test]
    fn test_results_are_deterministic() {
        let weights = random_weights(2);
        for algorithm in [Algorithm::Kruskal, Algorithm::Prim] {
            let first = compute_mst(&weights, Some(algorithm)).unwrap();
            let second = compute_mst(&weights, Some(algorithm)).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_ingestion_round_trip() {
        let ab: EdgeId = "a-b".parse().unwrap();
        let mut raw: RawWeights = EDGES.iter().map(|&edge| (edge, Some(String::new()))).collect();
        raw.insert(ab, Some("5".to_string()));

        let weights = ingest_weights(&raw).unwrap();
        for (edge, weight) in weights.iter() {
            assert_eq!(weight, if edge == ab { 5 } else { 0 });
        }
    }

    #[test]
    fn test_ingestion_failure() {
        let ab: EdgeId = "a-b".parse().unwrap();
        let mut raw = RawWeights::new();
        raw.insert(ab, Some("abc".to_string()));
        assert!(matches!(
            ingest_weights(&raw),
            Err(MstError::InvalidWeightFormat { edge, .. }) if edge == ab
        ));
    }

    #[test]
    fn test_batch_matches_sequential() {
        let assignments: Vec<WeightAssignment> = (0..32).map(|_| random_weights(10)).collect();
        let batch = compute_batch(&assignments, Some(Algorithm::Kruskal)).unwrap();
        for (weights, result) in assignments.iter().zip(batch) {
            assert_eq!(result, compute_mst(weights, Some(Algorithm::Kruskal)));
        }
    }
}
