//! Facade tying translation, resolution, and export together for one run.

use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;
use tracing::info;

use crate::export;
use crate::graph::edge::{EdgeKind, NodeId, NodeRef};
use crate::graph::{traverse, SourceGraph};
use crate::resolver;
use crate::translator::GraphTranslator;

/// Owns a translation run: feed it compilation units in any order, run the
/// resolution pass once, then query or render the graph.
///
/// Each run gets its own importer (and with it, its own graph and symbol
/// table); runs never share state.
pub struct SourceImporter {
    translator: GraphTranslator,
    resolved: bool,
}

impl SourceImporter {
    pub fn new() -> Self {
        Self {
            translator: GraphTranslator::new(),
            resolved: false,
        }
    }

    /// Translate one compilation unit from a source string.
    pub fn import_source(&mut self, source: &str) -> anyhow::Result<()> {
        self.translator.translate(source)
    }

    /// Translate one compilation unit from a file.
    pub fn import_file(&mut self, path: &Path) -> anyhow::Result<()> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        info!(file = %path.display(), "translating");
        self.import_source(&source)
            .with_context(|| format!("failed to translate {}", path.display()))
    }

    /// Run the resolution pass. Call once, after every unit has been fed;
    /// returns the number of references bound.
    pub fn post_process(&mut self) -> usize {
        let roots = self.translator.top_level_nodes().to_vec();
        self.resolved = true;
        resolver::resolve(self.translator.graph_mut(), &roots)
    }

    /// Whether the resolution pass has run.
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    pub fn graph(&self) -> &SourceGraph {
        self.translator.graph()
    }

    /// The run's accumulated symbol table (package/type path → node).
    pub fn type_cache(&self) -> &std::collections::BTreeMap<String, NodeId> {
        self.graph().type_cache()
    }

    /// The set of root containers, one per distinct top-level package or
    /// lexical root seen across all translated units.
    pub fn top_level_nodes(&self) -> &[NodeId] {
        self.translator.top_level_nodes()
    }

    /// Generic traversal entry point over all roots.
    pub fn pre_order<F>(&self, filter: Option<EdgeKind>, visitor: &mut F)
    where
        F: FnMut(Option<EdgeKind>, &NodeRef, usize),
    {
        traverse::pre_order(self.graph(), self.top_level_nodes(), filter, visitor);
    }

    /// DOT rendering of the whole graph, minus the excluded edge kinds.
    pub fn to_dot(&self, excluded: &HashSet<EdgeKind>) -> String {
        export::dot::render_dot(self.graph(), self.top_level_nodes(), excluded)
    }

    /// Indented dump of the containment tree.
    pub fn contains_tree(&self) -> String {
        export::render_contains_tree(self.graph(), self.top_level_nodes())
    }
}

impl Default for SourceImporter {
    fn default() -> Self {
        Self::new()
    }
}
