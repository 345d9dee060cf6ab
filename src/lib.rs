//! source-graph translates parsed Java sources into a typed, cross-referenced
//! program graph.
//!
//! A run feeds any number of compilation units through a
//! [`SourceImporter`], which builds one shared [`SourceGraph`]: packages,
//! types, members, statement-level control flow, and the edges between them.
//! References that cross file boundaries are held as pending stubs during
//! translation and reconciled in a single resolution pass at the end of the
//! run; whatever stays pending afterwards points outside the analyzed corpus.

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod graph;
pub mod importer;
pub mod parser;
pub mod resolver;
pub mod translator;
pub mod walker;

pub use error::TranslateError;
pub use graph::edge::{Edge, EdgeKind, NodeId, NodeRef};
pub use graph::node::{Node, NodeKind};
pub use graph::SourceGraph;
pub use importer::SourceImporter;
pub use translator::GraphTranslator;
