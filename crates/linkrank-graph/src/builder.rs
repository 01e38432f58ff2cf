//! GraphBuilder for constructing validated graphs.
//!
//! Building is two-phase: every node is added first, then every edge, so an
//! edge may name a node that appears later in the definition. Any edge whose
//! endpoint is still unknown after phase 1 fails the build with
//! [`Error::InvalidEdge`]; nothing is partially returned.

use crate::{Edge, GraphData, GraphSpec, Node};
use linkrank_core::{Error, Result};
use std::collections::HashSet;
use std::path::Path;

/// Statistics from a graph build.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildStats {
    /// Number of nodes created.
    pub nodes_created: usize,
    /// Number of edges created.
    pub edges_created: usize,
    /// Edges whose source and target are the same node.
    pub self_loops: usize,
    /// Edges repeating an earlier (source, target) pair.
    pub parallel_edges: usize,
    /// IDs of nodes without outgoing edges, in load order.
    pub dangling_nodes: Vec<String>,
}

/// Builder for [`GraphData`].
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from a serialized graph definition.
    pub fn from_spec(spec: GraphSpec) -> Self {
        Self {
            nodes: spec.nodes,
            edges: spec.edges,
        }
    }

    /// Starts from a JSON graph definition.
    pub fn from_json(json: &str) -> Result<Self> {
        GraphSpec::from_json(json).map(Self::from_spec)
    }

    /// Starts from a JSON graph definition file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        log::debug!("Loaded graph definition from {}", path.display());
        Self::from_json(&content)
    }

    /// Adds a node.
    pub fn with_node(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }

    /// Adds an edge.
    pub fn with_edge(mut self, edge: Edge) -> Self {
        self.edges.push(edge);
        self
    }

    /// Builds and validates the graph.
    pub fn build(self) -> Result<(GraphData, BuildStats)> {
        let mut graph = GraphData::new();
        let mut stats = BuildStats::default();

        // Phase 1: nodes
        for node in self.nodes {
            graph.add_node(node)?;
            stats.nodes_created += 1;
        }

        // Phase 2: edges
        let mut seen_pairs: HashSet<(String, String)> = HashSet::new();
        let mut has_out_edge: HashSet<String> = HashSet::new();
        for edge in self.edges {
            if edge.is_self_loop() {
                stats.self_loops += 1;
            }
            if !seen_pairs.insert((edge.source.clone(), edge.target.clone())) {
                stats.parallel_edges += 1;
            }
            has_out_edge.insert(edge.source.clone());
            graph.add_edge(edge)?;
            stats.edges_created += 1;
        }

        stats.dangling_nodes = graph
            .node_ids()
            .filter(|id| !has_out_edge.contains(*id))
            .map(str::to_string)
            .collect();

        if !stats.dangling_nodes.is_empty() {
            log::debug!(
                "Nodes without outgoing edges: {}",
                stats.dangling_nodes.join(", ")
            );
        }
        log::debug!(
            "Built graph: {} nodes, {} edges ({} self-loops, {} parallel)",
            stats.nodes_created,
            stats.edges_created,
            stats.self_loops,
            stats.parallel_edges
        );

        Ok((graph, stats))
    }
}

/// Loads and validates a graph from a JSON file.
pub fn load_graph(path: impl AsRef<Path>) -> Result<GraphData> {
    let (graph, _stats) = GraphBuilder::from_path(path)?.build()?;
    Ok(graph)
}
