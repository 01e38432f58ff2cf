//! Core graph types.
//!
//! [`GraphSpec`] is the serialized `{ nodes, edges }` form a graph is loaded
//! from. [`GraphData`] is the validated form the ranking algorithms consume:
//! a petgraph `DiGraph` plus an ID lookup table. Node insertion order is
//! preserved and is the iteration order of every algorithm.

use linkrank_core::{Error, Result};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Weight used for edges that don't specify one.
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

/// Scores keyed by node ID.
pub type RankState = BTreeMap<String, f64>;

// ============================================================================
// Node struct
// ============================================================================

/// A node in the graph.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier (e.g., "A").
    pub id: String,
    /// Human-readable name (e.g., "Homepage").
    pub name: String,
}

impl Node {
    /// Creates a node with the given ID and display name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

// ============================================================================
// Edge struct
// ============================================================================

/// A directed edge between two nodes.
///
/// Parallel edges are kept as separate entries; each one contributes to the
/// source's total outgoing weight on its own.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Source node ID.
    pub source: String,
    /// Target node ID.
    pub target: String,
    /// Optional weight; [`DEFAULT_EDGE_WEIGHT`] when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl Edge {
    /// Creates an unweighted edge.
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight: None,
        }
    }

    /// Sets an explicit weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// The weight PageRank uses for this edge.
    pub fn effective_weight(&self) -> f64 {
        self.weight.unwrap_or(DEFAULT_EDGE_WEIGHT)
    }

    /// Whether source and target are the same node.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

// ============================================================================
// GraphSpec struct
// ============================================================================

/// Serialized graph definition: `{ "nodes": [...], "edges": [...] }`.
///
/// `links` is accepted as an alias for `edges`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSpec {
    /// Node definitions, in load order.
    pub nodes: Vec<Node>,
    /// Edge definitions.
    #[serde(default, alias = "links")]
    pub edges: Vec<Edge>,
}

impl GraphSpec {
    /// Parses a graph definition from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the definition as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// ============================================================================
// GraphData struct
// ============================================================================

/// Validated graph data.
///
/// Wraps a petgraph `DiGraph` with an ID lookup table. Nodes are never
/// removed, so node indices stay dense (`0..node_count`).
#[derive(Clone, Debug, Default)]
pub struct GraphData {
    /// The underlying directed graph.
    pub graph: DiGraph<Node, Edge>,
    /// Lookup table: node ID → petgraph NodeIndex.
    pub node_indices: HashMap<String, NodeIndex>,
}

impl GraphData {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Gets a node by ID.
    pub fn get_node(&self, id: &str) -> Option<&Node> {
        self.get_index(id).map(|idx| &self.graph[idx])
    }

    /// Gets the petgraph NodeIndex for a node ID.
    pub fn get_index(&self, id: &str) -> Option<NodeIndex> {
        self.node_indices.get(id).copied()
    }

    /// Checks if a node exists.
    pub fn contains_node(&self, id: &str) -> bool {
        self.node_indices.contains_key(id)
    }

    /// Iterates over node IDs in load order.
    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.iter_nodes().map(|n| n.id.as_str())
    }

    /// Iterates over nodes in load order.
    pub fn iter_nodes(&self) -> impl Iterator<Item = &Node> {
        self.graph.node_indices().map(move |idx| &self.graph[idx])
    }

    /// Iterates over edges in load order.
    pub fn iter_edges(&self) -> impl Iterator<Item = &Edge> {
        self.graph.edge_references().map(|e| e.weight())
    }

    /// Adds a node.
    ///
    /// Node IDs are unique; a repeated ID is rejected with
    /// [`Error::DuplicateNode`].
    pub fn add_node(&mut self, node: Node) -> Result<NodeIndex> {
        if self.node_indices.contains_key(&node.id) {
            return Err(Error::DuplicateNode { id: node.id });
        }
        let id = node.id.clone();
        let idx = self.graph.add_node(node);
        self.node_indices.insert(id, idx);
        Ok(idx)
    }

    /// Adds an edge between two existing nodes.
    ///
    /// Fails with [`Error::InvalidEdge`] if either endpoint is unknown, the
    /// weight is not a positive finite number, or the source's total outgoing
    /// weight would overflow to infinity.
    pub fn add_edge(&mut self, edge: Edge) -> Result<()> {
        if let Some(weight) = edge.weight
            && !(weight.is_finite() && weight > 0.0)
        {
            return Err(Error::invalid_edge(
                &edge.source,
                &edge.target,
                format!("weight must be a positive finite number, got {weight}"),
            ));
        }
        let from_idx = self.get_index(&edge.source).ok_or_else(|| {
            Error::invalid_edge(&edge.source, &edge.target, "unknown source node")
        })?;
        let to_idx = self.get_index(&edge.target).ok_or_else(|| {
            Error::invalid_edge(&edge.source, &edge.target, "unknown target node")
        })?;

        let out_weight: f64 = self
            .graph
            .edges(from_idx)
            .map(|e| e.weight().effective_weight())
            .sum::<f64>()
            + edge.effective_weight();
        if !out_weight.is_finite() {
            return Err(Error::invalid_edge(
                &edge.source,
                &edge.target,
                "total outgoing weight of the source is not finite",
            ));
        }

        self.graph.add_edge(from_idx, to_idx, edge);
        Ok(())
    }

    /// Converts back to the serialized form.
    pub fn to_spec(&self) -> GraphSpec {
        GraphSpec {
            nodes: self.iter_nodes().cloned().collect(),
            edges: self.iter_edges().cloned().collect(),
        }
    }

    /// Builds a [`RankState`] from a score vector indexed like the nodes.
    pub(crate) fn rank_state(&self, values: &[f64]) -> RankState {
        self.graph
            .node_indices()
            .map(|idx| (self.graph[idx].id.clone(), values[idx.index()]))
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
