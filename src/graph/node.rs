use std::fmt;

use crate::graph::edge::{Edge, EdgeKind, NodeId};

/// The kind of program construct a node stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A package declaration (the root of a containment tree).
    Package,
    /// A class or interface declaration.
    Type,
    /// A method or constructor declaration.
    Method,
    /// A field declared on a type.
    Field,
    /// A local variable binding.
    Variable,
    /// A braced statement block.
    Block,
    /// A single executable statement.
    Statement,
    /// An expression or sub-expression.
    Expression,
    /// A for-loop header (basic or enhanced).
    Loop,
    /// The apparent kind of an unresolved reference. Never assigned to a real
    /// node; only reported when a query asks for the kind behind a pending
    /// [`NodeRef`](crate::graph::edge::NodeRef).
    Unknown,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NodeKind::Package => "Package",
            NodeKind::Type => "Type",
            NodeKind::Method => "Method",
            NodeKind::Field => "Field",
            NodeKind::Variable => "Variable",
            NodeKind::Block => "Block",
            NodeKind::Statement => "Statement",
            NodeKind::Expression => "Expression",
            NodeKind::Loop => "Loop",
            NodeKind::Unknown => "Unknown",
        };
        f.write_str(s)
    }
}

/// An inbound edge record: who points at this node, and how.
///
/// Maintained alongside the outbound lists so consumers can walk *up* the
/// containment tree (e.g. to find the nearest enclosing package) without a
/// full-graph scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InboundEdge {
    pub from: NodeId,
    pub kind: EdgeKind,
}

/// A node in the program graph.
///
/// Identity is the `path` — the dot-joined chain of declaring containers'
/// identifiers (plus a span suffix for synthetic constructs like blocks and
/// statements). `name` is for display only and need not be unique.
#[derive(Debug)]
pub struct Node {
    /// Display name (the bare identifier, or the statement text).
    pub name: String,
    /// Globally unique identity key.
    pub path: String,
    /// What kind of construct this node stands for.
    pub kind: NodeKind,
    /// Outbound edges, in creation order. Append-only during translation.
    pub outbound: Vec<Edge>,
    /// Inbound edge index, maintained by the graph's edge mutators.
    pub inbound: Vec<InboundEdge>,
}

impl Node {
    pub fn new(name: impl Into<String>, path: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind,
            outbound: Vec::new(),
            inbound: Vec::new(),
        }
    }

    /// Outbound edges of the given kind, in creation order.
    pub fn outbound_of_kind(&self, kind: EdgeKind) -> Vec<&Edge> {
        self.outbound.iter().filter(|e| e.kind == kind).collect()
    }

    /// Inbound edges of the given kind.
    pub fn inbound_of_kind(&self, kind: EdgeKind) -> Vec<InboundEdge> {
        self.inbound.iter().copied().filter(|e| e.kind == kind).collect()
    }
}

/// `{Kind}:{name}` — the label format used by the DOT renderer and the
/// containment dump.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.name)
    }
}
