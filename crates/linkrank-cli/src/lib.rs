//! # linkrank-cli
//!
//! The `linkrank` command: ranks the pages of a link graph with PageRank or
//! HITS and prints the results as tables or JSON.
//!
//! - Argument parsing ([`cli`])
//! - TOML configuration and the `config` subcommands ([`config`],
//!   [`config_handlers`])
//! - Ranking commands and result rendering ([`commands`], [`output`])
//! - Subscriber setup ([`logging`])

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod logging;
pub mod output;

pub use cli::{Cli, Command, ConfigAction};
pub use config::LinkrankConfig;
