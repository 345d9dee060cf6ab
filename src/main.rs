use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use source_graph::cli::{Cli, Commands};
use source_graph::config::SourceGraphConfig;
use source_graph::importer::SourceImporter;
use source_graph::walker::walk_project;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Tree { path } => {
            let importer = import(&path, cli.verbose)?;
            print!("{}", importer.contains_tree());
        }
        Commands::Dot { path, exclude_edges } => {
            let importer = import(&path, cli.verbose)?;
            let excluded: HashSet<_> = exclude_edges.into_iter().collect();
            print!("{}", importer.to_dot(&excluded));
        }
        Commands::Stats { path, json } => {
            let importer = import(&path, cli.verbose)?;
            print_stats(&importer, json)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Translate every Java file under `path` (or `path` itself, if it is a file)
/// and run the resolution pass.
fn import(path: &Path, verbose: bool) -> Result<SourceImporter> {
    anyhow::ensure!(path.exists(), "no such file or directory: {}", path.display());

    let mut importer = SourceImporter::new();

    if path.is_file() {
        importer.import_file(path)?;
    } else {
        let config = SourceGraphConfig::load(path);
        let files = walk_project(path, &config, verbose)?;
        for file in &files {
            importer.import_file(file)?;
        }
    }

    importer.post_process();
    Ok(importer)
}

fn print_stats(importer: &SourceImporter, json: bool) -> Result<()> {
    let graph = importer.graph();

    let mut nodes_by_kind: BTreeMap<String, usize> = BTreeMap::new();
    let mut edges_by_kind: BTreeMap<String, usize> = BTreeMap::new();
    let mut edges = 0usize;
    let mut stubs = 0usize;

    for id in graph.node_ids() {
        let node = graph.node(id);
        *nodes_by_kind.entry(node.kind.to_string()).or_default() += 1;
        for edge in &node.outbound {
            edges += 1;
            *edges_by_kind.entry(edge.kind.to_string()).or_default() += 1;
            if !edge.to.is_resolved() {
                stubs += 1;
            }
        }
    }

    if json {
        let stats = serde_json::json!({
            "nodes": graph.len(),
            "nodes_by_kind": nodes_by_kind,
            "edges": edges,
            "edges_by_kind": edges_by_kind,
            "unresolved_stubs": stubs,
            "types": graph.type_cache().len(),
        });
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("Nodes: {}", graph.len());
        for (kind, count) in &nodes_by_kind {
            println!("  {kind}: {count}");
        }
        println!("Edges: {edges}");
        for (kind, count) in &edges_by_kind {
            println!("  {kind}: {count}");
        }
        println!("Known types: {}", graph.type_cache().len());
        println!("Unresolved stubs: {stubs}");
    }

    Ok(())
}
