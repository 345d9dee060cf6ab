//! Generic, cycle-safe depth-first walks over the program graph.
//!
//! The execution subgraph may contain cycles (loop bodies), so every walk
//! carries an explicit visited set rather than assuming tree shape. Pending
//! references are visited as leaf stubs and never expanded.

use std::collections::HashSet;

use crate::graph::edge::{Edge, EdgeKind, NodeId, NodeRef};
use crate::graph::SourceGraph;

/// Depth-first pre-order walk from each root over outbound edges, optionally
/// restricted to a single edge kind (e.g. Contains-only to walk the lexical
/// tree).
///
/// The visitor receives `(edge kind or absent, target ref, depth)` in
/// parent-before-children order; roots are reported with the edge kind absent
/// at depth 0. Each node is visited at most once per root, keyed by path.
pub fn pre_order<F>(graph: &SourceGraph, roots: &[NodeId], filter: Option<EdgeKind>, visitor: &mut F)
where
    F: FnMut(Option<EdgeKind>, &NodeRef, usize),
{
    for &root in roots {
        let mut visited = HashSet::new();
        let path = graph.node(root).path.clone();
        visited.insert(path.clone());
        visitor(None, &NodeRef::resolved(root, path), 0);
        visit_children(graph, root, 1, filter, &mut visited, visitor);
    }
}

fn visit_children<F>(
    graph: &SourceGraph,
    id: NodeId,
    depth: usize,
    filter: Option<EdgeKind>,
    visited: &mut HashSet<String>,
    visitor: &mut F,
) where
    F: FnMut(Option<EdgeKind>, &NodeRef, usize),
{
    for edge in &graph.node(id).outbound {
        if filter.is_some_and(|kind| kind != edge.kind) {
            continue;
        }
        if !visited.insert(edge.to.path().to_owned()) {
            continue;
        }
        visitor(Some(edge.kind), &edge.to, depth);
        // A pending target is a stub: reported as a leaf, never expanded.
        if let Some(target) = edge.to.node() {
            visit_children(graph, target, depth + 1, filter, visited, visitor);
        }
    }
}

/// Depth-first walk that reports *edges* rather than nodes.
///
/// Every outbound edge of every reachable node is reported exactly once,
/// except edges whose kind is in `excluded` (those are neither reported nor
/// hidden from reachability — traversal still follows them, so exclusion only
/// affects what the visitor sees). Used by the DOT renderer.
pub fn pre_order_edges<F>(
    graph: &SourceGraph,
    roots: &[NodeId],
    excluded: &HashSet<EdgeKind>,
    visitor: &mut F,
) where
    F: FnMut(&Edge),
{
    for &root in roots {
        let mut visited = HashSet::new();
        visit_edges(graph, root, excluded, &mut visited, visitor);
    }
}

fn visit_edges<F>(
    graph: &SourceGraph,
    id: NodeId,
    excluded: &HashSet<EdgeKind>,
    visited: &mut HashSet<NodeId>,
    visitor: &mut F,
) where
    F: FnMut(&Edge),
{
    if !visited.insert(id) {
        return;
    }
    for edge in &graph.node(id).outbound {
        if !excluded.contains(&edge.kind) {
            visitor(edge);
        }
        if let Some(target) = edge.to.node() {
            visit_edges(graph, target, excluded, visited, visitor);
        }
    }
}
