//! DOT rendering of the program graph, for external visualization tools.

use std::collections::HashSet;
use std::fmt::Write;

use crate::graph::edge::{EdgeKind, NodeId};
use crate::graph::{traverse, SourceGraph};

/// Escape a string for use inside a double-quoted DOT identifier or label.
fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Render the graph reachable from `roots` as DOT.
///
/// Emits exactly one node statement per distinct path regardless of
/// in-degree, and one edge statement per traversed edge, labeled with its
/// kind. Edge kinds in `excluded` are omitted (Contains is usually excluded
/// when visualizing execution flow, and vice versa). A never-resolved target
/// is emitted as a stub node labeled `Stub:{path}`.
pub fn render_dot(graph: &SourceGraph, roots: &[NodeId], excluded: &HashSet<EdgeKind>) -> String {
    let mut out = String::new();
    writeln!(out, "digraph source_graph {{").unwrap();

    let mut declared: HashSet<String> = HashSet::new();
    traverse::pre_order_edges(graph, roots, excluded, &mut |edge| {
        let from = graph.node(edge.from);
        if declared.insert(from.path.clone()) {
            writeln!(
                out,
                "    node [label=\"{}\"]; \"{}\";",
                escape(&from.to_string()),
                escape(&from.path)
            )
            .unwrap();
        }
        let to_label = match edge.to.node() {
            Some(id) => graph.node(id).to_string(),
            None => format!("Stub:{}", edge.to.path()),
        };
        if declared.insert(edge.to.path().to_owned()) {
            writeln!(
                out,
                "    node [label=\"{}\"]; \"{}\";",
                escape(&to_label),
                escape(edge.to.path())
            )
            .unwrap();
        }
        writeln!(
            out,
            "    \"{}\" -> \"{}\" [label=\"{}\"];",
            escape(&from.path),
            escape(edge.to.path()),
            edge.kind
        )
        .unwrap();
    });

    writeln!(out, "}}").unwrap();
    out
}
