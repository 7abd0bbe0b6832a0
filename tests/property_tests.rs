use flock::cluster::{jaccard_distance, Clustering, KMedoids};
use proptest::prelude::*;

fn doc_strategy() -> impl Strategy<Value = String> {
    // Short documents over a small token alphabet, so overlaps are common.
    prop::collection::vec("[a-e]{1,3}", 1..8).prop_map(|tokens| tokens.join(" "))
}

proptest! {
    #[test]
    fn prop_kmedoids_all_assigned(
        docs in prop::collection::vec(doc_strategy(), 1..20),
        k in 1usize..5
    ) {
        // Skip if k > n
        if k <= docs.len() {
            let model = KMedoids::new(k).with_seed(42);
            let labels = model.fit_predict(&docs).unwrap();

            prop_assert_eq!(labels.len(), docs.len());
            for &l in &labels {
                prop_assert!(l < k);
            }
        }
    }

    #[test]
    fn prop_kmedoids_partition_is_exhaustive_and_disjoint(
        docs in prop::collection::vec(doc_strategy(), 1..20),
        k in 1usize..5
    ) {
        if k <= docs.len() {
            let fit = KMedoids::new(k).with_seed(7).fit(&docs).unwrap();

            prop_assert_eq!(fit.clusters.len(), k);
            prop_assert_eq!(fit.medoids.len(), k);
            prop_assert!(fit.iterations <= 50);

            let mut seen = vec![false; docs.len()];
            for members in &fit.clusters {
                for &idx in members {
                    prop_assert!(!seen[idx], "document {} assigned twice", idx);
                    seen[idx] = true;
                }
            }
            prop_assert!(seen.iter().all(|&s| s));
        }
    }

    #[test]
    fn prop_jaccard_is_a_metric_on_sets(a in doc_strategy(), b in doc_strategy()) {
        let d_ab = jaccard_distance(&a, &b);
        let d_ba = jaccard_distance(&b, &a);

        prop_assert_eq!(d_ab, d_ba);
        prop_assert!((0.0..=1.0).contains(&d_ab));
        prop_assert_eq!(jaccard_distance(&a, &a), 0.0);
    }
}
