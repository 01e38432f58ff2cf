//! Property-based tests for the ranking algorithms.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::{Edge, GraphBuilder, GraphData, HitsConfig, Node, PageRankConfig, hits, pagerank};
    use proptest::prelude::*;

    type RawEdge = (usize, usize, Option<f64>);

    fn arb_graph() -> impl Strategy<Value = (usize, Vec<RawEdge>)> {
        (1usize..8).prop_flat_map(|n| {
            let edge = (0..n, 0..n, proptest::option::of(0.05f64..5.0));
            (Just(n), proptest::collection::vec(edge, 0..24))
        })
    }

    fn build(n: usize, edges: &[RawEdge]) -> GraphData {
        let mut builder = GraphBuilder::new();
        for i in 0..n {
            builder = builder.with_node(Node::new(format!("n{i}"), format!("Node {i}")));
        }
        for &(s, t, w) in edges {
            let mut edge = Edge::new(format!("n{s}"), format!("n{t}"));
            edge.weight = w;
            builder = builder.with_edge(edge);
        }
        builder.build().unwrap().0
    }

    proptest! {
        #[test]
        fn test_pagerank_history_is_a_distribution(
            (n, edges) in arb_graph(),
            d in 0.05f64..0.95,
        ) {
            let graph = build(n, &edges);
            let config = PageRankConfig::default().with_damping_factor(d);
            let result = pagerank(&graph, &config).unwrap();

            prop_assert_eq!(result.history.len(), result.iterations + 1);
            for state in result.history.iter().skip(1) {
                let total: f64 = state.values().sum();
                prop_assert!((total - 1.0).abs() < 1e-9);
                prop_assert!(state.values().all(|v| v.is_finite() && *v >= 0.0));
            }
            if result.converged {
                prop_assert!(result.final_delta().unwrap() < config.tolerance);
            } else {
                prop_assert_eq!(result.iterations, config.max_iterations);
            }
        }

        #[test]
        fn test_pagerank_is_deterministic((n, edges) in arb_graph()) {
            let graph = build(n, &edges);
            let config = PageRankConfig::default();
            prop_assert_eq!(pagerank(&graph, &config).unwrap(), pagerank(&graph, &config).unwrap());
        }

        #[test]
        fn test_hits_vectors_are_unit_or_zero(
            (n, edges) in arb_graph(),
            iterations in 1usize..15,
        ) {
            let graph = build(n, &edges);
            let result = hits(&graph, &HitsConfig::default().with_iterations(iterations)).unwrap();

            let hub_sq: f64 = result.hub_scores.values().map(|v| v * v).sum();
            let auth_sq: f64 = result.authority_scores.values().map(|v| v * v).sum();
            if graph.edge_count() > 0 {
                prop_assert!((hub_sq - 1.0).abs() < 1e-9);
                prop_assert!((auth_sq - 1.0).abs() < 1e-9);
            } else {
                prop_assert_eq!(hub_sq, 0.0);
                prop_assert_eq!(auth_sq, 0.0);
            }
            prop_assert!(result
                .hub_scores
                .values()
                .chain(result.authority_scores.values())
                .all(|v| v.is_finite() && *v >= 0.0));
        }
    }
}
