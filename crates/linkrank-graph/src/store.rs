//! The currently selected graph.
//!
//! A [`GraphStore`] holds one graph at a time. Selecting a preset or loading
//! a file builds the new graph completely before swapping it in, so a failed
//! load leaves the previous graph untouched. Readers take an `Arc` snapshot
//! that stays valid across later swaps.

use crate::builder::load_graph;
use crate::{GraphData, Preset};
use linkrank_core::Result;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Where the current graph came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphSource {
    /// A built-in preset.
    Preset(Preset),
    /// A JSON graph definition file.
    File(PathBuf),
}

impl fmt::Display for GraphSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preset(p) => write!(f, "preset '{p}'"),
            Self::File(path) => write!(f, "file {}", path.display()),
        }
    }
}

/// Holder of the current graph.
#[derive(Clone, Debug)]
pub struct GraphStore {
    current: Arc<GraphData>,
    source: GraphSource,
}

impl GraphStore {
    /// Creates a store holding `graph`.
    pub fn new(graph: GraphData, source: GraphSource) -> Self {
        Self {
            current: Arc::new(graph),
            source,
        }
    }

    /// Creates a store holding a preset graph.
    pub fn from_preset(preset: Preset) -> Result<Self> {
        Ok(Self::new(preset.graph()?, GraphSource::Preset(preset)))
    }

    /// Swaps in a preset graph.
    pub fn select_preset(&mut self, preset: Preset) -> Result<()> {
        let graph = preset.graph()?;
        self.replace(graph, GraphSource::Preset(preset));
        Ok(())
    }

    /// Swaps in a graph loaded from a JSON file.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let graph = load_graph(path)?;
        self.replace(graph, GraphSource::File(path.to_path_buf()));
        Ok(())
    }

    /// Swaps in an already-built graph.
    pub fn replace(&mut self, graph: GraphData, source: GraphSource) {
        log::info!(
            "Selected {source} ({} nodes, {} edges)",
            graph.node_count(),
            graph.edge_count()
        );
        self.current = Arc::new(graph);
        self.source = source;
    }

    /// A read-only snapshot of the current graph.
    pub fn current(&self) -> Arc<GraphData> {
        Arc::clone(&self.current)
    }

    /// Where the current graph came from.
    pub fn source(&self) -> &GraphSource {
        &self.source
    }
}
