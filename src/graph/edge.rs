use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Index of a node in the [`SourceGraph`](crate::graph::SourceGraph) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// The relationship an edge asserts between its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// The from-node lexically contains the to-node. Contains edges form a
    /// tree rooted at a package.
    Contains,
    /// File-level import dependency (UML-style "dependency").
    DependsOn,
    /// A declaration's use of a type.
    References,
    /// A scope's introduction of a variable binding.
    Declares,
    /// An expression's use of a sub-expression.
    Evaluates,
    /// Control-flow successor. Executes edges may form cycles (loop bodies).
    Executes,
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EdgeKind::Contains => "Contains",
            EdgeKind::DependsOn => "DependsOn",
            EdgeKind::References => "References",
            EdgeKind::Declares => "Declares",
            EdgeKind::Evaluates => "Evaluates",
            EdgeKind::Executes => "Executes",
        };
        f.write_str(s)
    }
}

impl FromStr for EdgeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "contains" => Ok(EdgeKind::Contains),
            "dependson" => Ok(EdgeKind::DependsOn),
            "references" => Ok(EdgeKind::References),
            "declares" => Ok(EdgeKind::Declares),
            "evaluates" => Ok(EdgeKind::Evaluates),
            "executes" => Ok(EdgeKind::Executes),
            other => Err(format!(
                "unknown edge kind '{other}' (expected one of: contains, dependson, references, declares, evaluates, executes)"
            )),
        }
    }
}

/// A reference cell identified by a path string.
///
/// Either *resolved* (bound to a concrete node in the arena) or *pending*
/// (holds only the path, to be reconciled by the resolution pass). A ref that
/// is still pending after resolution is a permanent, valid "stub": a symbol
/// outside the analyzed corpus.
///
/// Two refs are equal iff their paths are equal, independent of resolution
/// state.
#[derive(Debug, Clone)]
pub struct NodeRef {
    path: String,
    node: Option<NodeId>,
}

impl NodeRef {
    /// A pending reference, keyed only by path.
    pub fn pending(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            node: None,
        }
    }

    /// A reference already bound to a concrete node.
    pub fn resolved(node: NodeId, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            node: Some(node),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn node(&self) -> Option<NodeId> {
        self.node
    }

    pub fn is_resolved(&self) -> bool {
        self.node.is_some()
    }

    /// Bind this ref to `node`. The transition is one-way: once resolved, a
    /// ref never changes target, and re-resolving is a no-op. Returns whether
    /// a pending → resolved transition actually happened.
    pub fn resolve_with(&mut self, node: NodeId) -> bool {
        if self.node.is_some() {
            return false;
        }
        self.node = Some(node);
        true
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for NodeRef {}

impl Hash for NodeRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

/// A directed edge. The source is a concrete node by construction; the target
/// may still be a pending textual reference until the resolution pass runs.
#[derive(Debug, Clone)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeRef,
    pub kind: EdgeKind,
}
