//! linkrank CLI
//!
//! PageRank and HITS over weighted directed graphs.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use linkrank_cli::{Cli, LinkrankConfig, commands, logging};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // An unreadable config file still gets the default log level.
    let loaded = LinkrankConfig::load(cli.config.as_deref());
    let level = loaded
        .as_ref()
        .map(|c| c.logging.level.as_str())
        .unwrap_or(logging::DEFAULT_LEVEL);
    logging::init(level, cli.verbose);

    let config = match loaded {
        Ok(config) => config,
        // `config set` and friends must work on a broken file.
        Err(e) if matches!(cli.command, linkrank_cli::Command::Config { .. }) => {
            tracing::warn!("Ignoring unreadable configuration: {e}");
            LinkrankConfig::default()
        }
        Err(e) => return Err(e.into()),
    };

    tracing::debug!(command = ?cli.command, "Running");
    commands::run(cli.command, &config, cli.config.as_deref())?;
    Ok(())
}
