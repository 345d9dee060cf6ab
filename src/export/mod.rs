pub mod dot;

use std::fmt::Write;

use crate::graph::edge::{EdgeKind, NodeId};
use crate::graph::{traverse, SourceGraph};

const SPACES_PER_TREE_LEVEL: usize = 2;

/// Indented textual dump of the containment tree, one line per node:
/// `Contains->Type:Main`, stubs as `->path`.
pub fn render_contains_tree(graph: &SourceGraph, roots: &[NodeId]) -> String {
    let mut out = String::new();
    traverse::pre_order(graph, roots, Some(EdgeKind::Contains), &mut |kind, to, depth| {
        let indent = " ".repeat(depth * SPACES_PER_TREE_LEVEL);
        let label = match to.node() {
            Some(id) => graph.node(id).to_string(),
            None => to.path().to_owned(),
        };
        let kind = kind.map(|k| k.to_string()).unwrap_or_default();
        writeln!(out, "{indent}{kind}->{label}").unwrap();
    });
    out
}
