//! The ranking commands.

use crate::cli::{Command, GraphArgs, HitsArgs, PageRankArgs};
use crate::config::{GraphConfig, LinkrankConfig};
use crate::config_handlers::handle_config_command;
use crate::output;
use linkrank_core::Result;
use linkrank_graph::{GraphStore, hits, pagerank, top};

/// Runs `command` against an already-loaded configuration.
///
/// `config_path` is passed through to the `config` subcommands, which read
/// and write the file themselves.
pub fn run(command: Command, config: &LinkrankConfig, config_path: Option<&str>) -> Result<()> {
    match command {
        Command::Pagerank(args) => cmd_pagerank(&args, config),
        Command::Hits(args) => cmd_hits(&args, config),
        Command::Presets => cmd_presets(),
        Command::Config { action } => handle_config_command(config_path, action),
    }
}

/// Builds a store holding the graph selected by flags and configuration.
pub fn open_store(args: &GraphArgs, config: &GraphConfig) -> Result<GraphStore> {
    let selection = args.resolve(config);
    let mut store = GraphStore::from_preset(selection.preset)?;
    if let Some(file) = &selection.file {
        store.load_file(file)?;
    }
    Ok(store)
}

/// Runs PageRank and prints the ranking.
pub fn cmd_pagerank(args: &PageRankArgs, config: &LinkrankConfig) -> Result<()> {
    println!("{}", render_pagerank(args, config)?);
    Ok(())
}

/// Runs HITS and prints hub and authority scores.
pub fn cmd_hits(args: &HitsArgs, config: &LinkrankConfig) -> Result<()> {
    println!("{}", render_hits(args, config)?);
    Ok(())
}

/// Lists the built-in graphs.
pub fn cmd_presets() -> Result<()> {
    println!("{}", output::presets_table()?);
    Ok(())
}

/// The text `pagerank` prints.
pub fn render_pagerank(args: &PageRankArgs, config: &LinkrankConfig) -> Result<String> {
    let store = open_store(&args.graph, &config.graph)?;
    let params = args.apply(config.pagerank);
    let graph = store.current();

    log::debug!("PageRank on {} with {params:?}", store.source());
    let result = pagerank(&graph, &params)?;
    if !result.converged {
        log::warn!(
            "PageRank stopped at the iteration limit ({}) before reaching tolerance {}",
            params.max_iterations,
            params.tolerance
        );
    }

    if args.json {
        return output::to_json(&result);
    }

    let mut sections = vec![
        format!(
            "PageRank over {} ({} nodes, {} edges)",
            store.source(),
            graph.node_count(),
            graph.edge_count()
        ),
        output::convergence_summary(&result),
    ];
    if let Some(leader) = top(&graph, &result.scores) {
        sections.push(format!("Top page: {} ({:.2}%)", leader.name, leader.score * 100.0));
    }
    sections.push(String::new());
    sections.push(output::pagerank_table(&graph, &result));
    if args.history {
        sections.push(String::new());
        sections.push(output::history_table(&graph, &result));
    }
    Ok(sections.join("\n"))
}

/// The text `hits` prints.
pub fn render_hits(args: &HitsArgs, config: &LinkrankConfig) -> Result<String> {
    let store = open_store(&args.graph, &config.graph)?;
    let params = args.apply(config.hits);
    let graph = store.current();

    log::debug!("HITS on {} with {params:?}", store.source());
    let result = hits(&graph, &params)?;

    if args.json {
        return output::to_json(&result);
    }
    Ok([
        format!(
            "HITS over {} ({} rounds, edge weights ignored)",
            store.source(),
            result.iterations
        ),
        String::new(),
        output::hits_table(&graph, &result),
    ]
    .join("\n"))
}
