//! HITS over the preset graphs.

use linkrank_graph::{HitsConfig, Preset, hits};

use crate::common::{EPS, order, sum_of_squares};

#[test]
fn test_complex_preset_scores_are_well_formed() {
    let graph = Preset::Complex.graph().unwrap();
    let result = hits(&graph, &HitsConfig::default()).unwrap();

    assert_eq!(result.iterations, 10);
    for id in graph.node_ids() {
        let hub = result.hub_scores[id];
        let auth = result.authority_scores[id];
        assert!(hub.is_finite() && hub >= 0.0, "hub {id} = {hub}");
        assert!(auth.is_finite() && auth >= 0.0, "authority {id} = {auth}");
    }
    assert!((sum_of_squares(&result.hub_scores) - 1.0).abs() < EPS);
    assert!((sum_of_squares(&result.authority_scores) - 1.0).abs() < EPS);
}

#[test]
fn test_complex_preset_authority_order_is_reproducible() {
    let graph = Preset::Complex.graph().unwrap();
    let config = HitsConfig::default();

    let first = hits(&graph, &config).unwrap();
    let expected = order(&graph, &first.authority_scores);
    for _ in 0..5 {
        let again = hits(&graph, &config).unwrap();
        assert_eq!(order(&graph, &again.authority_scores), expected);
        assert_eq!(again, first);
    }
}

#[test]
fn test_more_rounds_change_scores() {
    let graph = Preset::Medium.graph().unwrap();
    let one = hits(&graph, &HitsConfig::default().with_iterations(1)).unwrap();
    let ten = hits(&graph, &HitsConfig::default()).unwrap();

    assert_eq!(one.iterations, 1);
    assert_ne!(one.hub_scores, ten.hub_scores);
}
