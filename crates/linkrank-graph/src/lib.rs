//! # linkrank-graph
//!
//! Weighted directed graphs and link-analysis ranking.
//!
//! Provides:
//! - Graph types ([`Node`], [`Edge`], [`GraphSpec`], [`GraphData`])
//! - Validated construction ([`GraphBuilder`], [`load_graph`])
//! - Built-in example graphs ([`Preset`]) and a [`GraphStore`] for the
//!   current selection
//! - PageRank with convergence tracking and iteration history ([`pagerank`])
//! - HITS hub/authority scores ([`hits`])
//! - Ranking tables ([`ranked`])
//!
//! # Example
//!
//! ```rust
//! use linkrank_graph::{pagerank, PageRankConfig, Preset};
//!
//! let graph = Preset::Simple.graph()?;
//! let result = pagerank(&graph, &PageRankConfig::default().with_max_iterations(100))?;
//!
//! assert!(result.converged);
//! assert!(result.scores["A"] > result.scores["B"]);
//! # Ok::<(), linkrank_core::Error>(())
//! ```

#![forbid(unsafe_code)]

mod adjacency;
pub mod builder;
pub mod history;
pub mod hits;
pub mod pagerank;
pub mod presets;
pub mod ranking;
pub mod store;
pub mod types;

#[cfg(test)]
mod proptests;

pub use builder::{BuildStats, GraphBuilder, load_graph};
pub use history::IterationHistory;
pub use hits::{HitsConfig, HitsResult, hits};
pub use pagerank::{PageRankConfig, PageRankResult, pagerank};
pub use presets::Preset;
pub use ranking::{RankedNode, ranked, top};
pub use store::{GraphSource, GraphStore};
pub use types::{DEFAULT_EDGE_WEIGHT, Edge, GraphData, GraphSpec, Node, RankState};
