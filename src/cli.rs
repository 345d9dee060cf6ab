use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::graph::edge::EdgeKind;

/// Translates Java sources into a typed, cross-referenced program graph.
///
/// source-graph walks a project, builds a graph of packages, types, members,
/// and intra-method control flow, resolves cross-file type references, and
/// renders the result as a containment tree or GraphViz DOT.
#[derive(Parser, Debug)]
#[command(
    name = "source-graph",
    version,
    about,
    long_about = None,
    propagate_version = true,
)]
pub struct Cli {
    /// Enable debug-level diagnostics on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the containment tree of a project, one indented line per node.
    Tree {
        /// Path to the project root (or a single .java file).
        path: PathBuf,
    },

    /// Render the project graph as GraphViz DOT on stdout.
    Dot {
        /// Path to the project root (or a single .java file).
        path: PathBuf,

        /// Edge kinds to omit from the rendering (comma-separated:
        /// contains,dependson,references,declares,evaluates,executes).
        #[arg(long, value_delimiter = ',')]
        exclude_edges: Vec<EdgeKind>,
    },

    /// Graph statistics overview: node and edge counts, unresolved stubs.
    Stats {
        /// Path to the project root (or a single .java file).
        path: PathBuf,

        /// Output statistics as JSON instead of human-readable text.
        #[arg(long)]
        json: bool,
    },
}
