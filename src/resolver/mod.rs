//! The post-translation resolution pass.
//!
//! Translation leaves some edge targets as pending textual references —
//! forward references within a unit, cross-file references, or symbols
//! outside the corpus entirely. After every compilation unit in the run has
//! been translated, this pass reconciles them against the accumulated type
//! cache. Running it earlier can leave resolvable references permanently
//! stubbed, so callers invoke it exactly once, at the end of the run.

use tracing::debug;

use crate::graph::edge::{EdgeKind, NodeId};
use crate::graph::{traverse, SourceGraph};

/// Walk every top-level node's Contains subtree and resolve each visited
/// node's pending outbound edges. Returns the number of references bound;
/// whatever stays pending afterwards is a permanent stub, not an error.
pub fn resolve(graph: &mut SourceGraph, roots: &[NodeId]) -> usize {
    let mut ids = Vec::new();
    traverse::pre_order(graph, roots, Some(EdgeKind::Contains), &mut |_, to, _| {
        if let Some(id) = to.node() {
            ids.push(id);
        }
    });

    let mut bound = 0;
    for id in ids {
        bound += graph.resolve_outbound_edges(id);
    }
    debug!(bound, "resolution pass complete");
    bound
}
