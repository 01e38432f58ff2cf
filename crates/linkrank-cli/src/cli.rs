//! Command-line arguments.

use crate::config::GraphConfig;
use clap::{Args, Parser, Subcommand};
use linkrank_graph::{HitsConfig, PageRankConfig, Preset};
use std::path::PathBuf;

/// Rank the pages of a link graph with PageRank or HITS.
#[derive(Parser, Debug)]
#[command(name = "linkrank", author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "LINKRANK_CONFIG")]
    pub config: Option<String>,

    /// Raise the log level (repeatable)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute PageRank scores
    Pagerank(PageRankArgs),
    /// Compute HITS hub and authority scores
    Hits(HitsArgs),
    /// List the built-in graphs
    Presets,
    /// Inspect or edit the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Graph selection shared by the ranking commands.
#[derive(Args, Debug, Clone, Default)]
pub struct GraphArgs {
    /// Built-in graph: simple, medium or complex
    #[arg(long, conflicts_with = "file")]
    pub preset: Option<Preset>,

    /// JSON graph definition file
    #[arg(long)]
    pub file: Option<PathBuf>,
}

impl GraphArgs {
    /// Merges the flags over the configured selection.
    ///
    /// Either flag replaces both configured values, so `--preset` is honoured
    /// even when the config names a file.
    pub fn resolve(&self, config: &GraphConfig) -> GraphConfig {
        match (&self.file, self.preset) {
            (Some(file), _) => GraphConfig {
                preset: config.preset,
                file: Some(file.clone()),
            },
            (None, Some(preset)) => GraphConfig { preset, file: None },
            (None, None) => config.clone(),
        }
    }
}

/// Arguments for `pagerank`.
#[derive(Args, Debug, Clone, Default)]
pub struct PageRankArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Damping factor in (0, 1)
    #[arg(long)]
    pub damping: Option<f64>,

    /// Iteration limit
    #[arg(long)]
    pub max_iterations: Option<usize>,

    /// Convergence tolerance
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Print the full result as JSON
    #[arg(long)]
    pub json: bool,

    /// Also print the score of every node at every iteration
    #[arg(long)]
    pub history: bool,
}

impl PageRankArgs {
    /// Applies any parameter flags over `base`.
    pub fn apply(&self, base: PageRankConfig) -> PageRankConfig {
        let mut config = base;
        if let Some(d) = self.damping {
            config = config.with_damping_factor(d);
        }
        if let Some(n) = self.max_iterations {
            config = config.with_max_iterations(n);
        }
        if let Some(t) = self.tolerance {
            config = config.with_tolerance(t);
        }
        config
    }
}

/// Arguments for `hits`.
#[derive(Args, Debug, Clone, Default)]
pub struct HitsArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Number of rounds
    #[arg(long)]
    pub iterations: Option<usize>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl HitsArgs {
    /// Applies any parameter flags over `base`.
    pub fn apply(&self, base: HitsConfig) -> HitsConfig {
        match self.iterations {
            Some(n) => base.with_iterations(n),
            None => base,
        }
    }
}

/// `config` subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,
    /// Print a value by dotted key (e.g. pagerank.damping_factor)
    Get {
        /// Dotted key
        key: String,
    },
    /// Set a value by dotted key in the config file
    Set {
        /// Dotted key
        key: String,
        /// New value
        value: String,
    },
    /// Write a default config file
    Init {
        /// Where to write it instead of the default location
        #[arg(long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the configuration as environment variables
    Export {
        /// Format as `--env KEY=VALUE` for docker run
        #[arg(long)]
        docker_env: bool,
    },
}
