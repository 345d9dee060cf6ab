use crate::graph::edge::NodeId;

/// The current chain of lexical containers during a tree walk
/// (package → type → method → block → ...), plus the accumulated set of
/// roots: nodes that were pushed onto an empty stack.
///
/// Roots are deduplicated, so a package declared by several compilation
/// units appears once in the top-level set.
pub struct ContainerStack {
    stack: Vec<NodeId>,
    roots: Vec<NodeId>,
}

impl ContainerStack {
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            roots: Vec::new(),
        }
    }

    pub fn push(&mut self, node: NodeId) {
        if self.stack.is_empty() && !self.roots.contains(&node) {
            self.roots.push(node);
        }
        self.stack.push(node);
    }

    pub fn peek(&self) -> Option<NodeId> {
        self.stack.last().copied()
    }

    pub fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// One root per distinct top-level container seen across all units.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Drop whatever is left on the stack at the end of a compilation unit
    /// (the package node is pushed on its declaration and has no matching
    /// exit construct).
    pub fn end_unit(&mut self) {
        self.stack.clear();
    }
}

impl Default for ContainerStack {
    fn default() -> Self {
        Self::new()
    }
}
