//! Precomputed link structure shared by the ranking algorithms.

use crate::GraphData;
use petgraph::visit::EdgeRef;

/// In/out link lists indexed by dense node position.
///
/// Every edge is recorded once per endpoint, so parallel edges appear
/// multiple times and a self-loop shows up in both lists of its node.
#[derive(Debug)]
pub(crate) struct Adjacency {
    /// For each node, the `(source, weight)` pairs of its incoming edges.
    pub incoming: Vec<Vec<(usize, f64)>>,
    /// For each node, the targets of its outgoing edges.
    pub outgoing: Vec<Vec<usize>>,
    /// For each node, the summed weight of its outgoing edges, or 1.0 for a
    /// node with no outgoing edges.
    pub out_weight: Vec<f64>,
}

impl Adjacency {
    pub fn new(graph: &GraphData) -> Self {
        let n = graph.node_count();
        let mut incoming = vec![Vec::new(); n];
        let mut outgoing = vec![Vec::new(); n];
        let mut out_weight = vec![0.0; n];

        for edge_ref in graph.graph.edge_references() {
            let from = edge_ref.source().index();
            let to = edge_ref.target().index();
            let weight = edge_ref.weight().effective_weight();

            incoming[to].push((from, weight));
            outgoing[from].push(to);
            out_weight[from] += weight;
        }

        // Dangling nodes keep a unit divisor; their mass is not redistributed.
        for (total, targets) in out_weight.iter_mut().zip(&outgoing) {
            if targets.is_empty() {
                *total = 1.0;
            }
        }

        Self {
            incoming,
            outgoing,
            out_weight,
        }
    }

    /// Positions of nodes with no outgoing edges.
    pub fn dangling(&self) -> impl Iterator<Item = usize> + '_ {
        self.outgoing
            .iter()
            .enumerate()
            .filter(|(_, targets)| targets.is_empty())
            .map(|(i, _)| i)
    }
}
