use crate::graph::edge::{EdgeKind, NodeId};
use crate::graph::SourceGraph;

/// Execution-order bookkeeping for one block-like construct: a method or
/// constructor body, a nested block, or a loop body that has no explicit
/// block and therefore acts as its own implicit scope.
///
/// `linear` is the ordered chain of statements appended so far. The two
/// relay lists bridge control flow across nested block/loop boundaries:
///
/// - `pending_exits`: sources (loop headers, finished bodies) whose Executes
///   successor is "whatever statement comes next in this scope", not yet
///   known when the source finishes.
/// - `continuations`: nodes local to this scope that must be handed to the
///   *enclosing* scope's `pending_exits` once this scope finishes, so the
///   parent can wire the successor edges itself.
pub struct Scope {
    block: NodeId,
    is_method: bool,
    linear: Vec<NodeId>,
    pending_exits: Vec<NodeId>,
    continuations: Vec<NodeId>,
}

impl Scope {
    /// `is_method` marks the top-level scope of a method or constructor
    /// body; its leftover pending exits are wired to the method itself on
    /// exit (fallthrough-to-return).
    pub fn new(block: NodeId, is_method: bool) -> Self {
        Self {
            block,
            is_method,
            linear: Vec::new(),
            pending_exits: Vec::new(),
            continuations: Vec::new(),
        }
    }

    pub fn block(&self) -> NodeId {
        self.block
    }

    pub fn is_method(&self) -> bool {
        self.is_method
    }

    /// The scope's entry statement, if anything was appended.
    pub fn first(&self) -> Option<NodeId> {
        self.linear.first().copied()
    }

    /// The scope's dangling tail statement.
    pub fn last(&self) -> Option<NodeId> {
        self.linear.last().copied()
    }

    pub fn add_pending_exit(&mut self, from: NodeId) {
        self.pending_exits.push(from);
    }

    pub fn add_continuation(&mut self, node: NodeId) {
        self.continuations.push(node);
    }

    pub fn take_pending_exits(&mut self) -> Vec<NodeId> {
        std::mem::take(&mut self.pending_exits)
    }

    pub fn take_continuations(&mut self) -> Vec<NodeId> {
        std::mem::take(&mut self.continuations)
    }

    /// Thread a statement into this scope's execution order:
    ///
    /// 1. Executes edge from the previous statement, if any.
    /// 2. Contains edge from the scope's block — skipped when the statement
    ///    already has a lexical parent, so scope registration never gives a
    ///    node a second Contains parent.
    /// 3. Append to the linear chain.
    /// 4. Drain `pending_exits`: every waiting source now has its successor.
    pub fn append(&mut self, graph: &mut SourceGraph, stmt: NodeId) {
        if let Some(&prev) = self.linear.last() {
            graph.create_edge(prev, stmt, EdgeKind::Executes);
        }
        if !graph.has_contains_parent(stmt) {
            graph.create_edge(self.block, stmt, EdgeKind::Contains);
        }
        self.linear.push(stmt);
        for from in self.pending_exits.drain(..) {
            graph.create_edge(from, stmt, EdgeKind::Executes);
        }
    }
}
