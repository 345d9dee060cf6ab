pub mod edge;
pub mod node;
pub mod traverse;

use std::collections::{BTreeMap, HashMap};

use tracing::warn;

use edge::{Edge, EdgeKind, NodeId, NodeRef};
use node::{InboundEdge, Node, NodeKind};

/// The in-memory program graph: a node arena with per-node adjacency lists
/// plus O(log n) / O(1) lookup indexes.
///
/// Nodes are created exactly once, during the forward walk of the compilation
/// unit that declares them; packages and types are additionally registered in
/// the type cache (the run's global symbol table) so that pending references
/// can be reconciled later. The whole structure is single-writer: mutated
/// only during translation and the resolution pass, read-only afterwards.
pub struct SourceGraph {
    nodes: Vec<Node>,
    /// path → node for every package and type seen so far in the run.
    /// Ordered so that dumps and lookups are deterministic.
    type_cache: BTreeMap<String, NodeId>,
    /// path → node for every node, used for duplicate detection and test
    /// queries.
    paths: HashMap<String, NodeId>,
}

impl SourceGraph {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            type_cache: BTreeMap::new(),
            paths: HashMap::new(),
        }
    }

    /// Add a node to the arena. Paths are expected to be globally unique; a
    /// collision indicates a translator bug and is logged, with the first
    /// node keeping the path index entry.
    pub fn add_node(&mut self, name: impl Into<String>, path: impl Into<String>, kind: NodeKind) -> NodeId {
        let node = Node::new(name, path, kind);
        let id = NodeId(self.nodes.len());
        if let Some(&existing) = self.paths.get(&node.path) {
            warn!(path = %node.path, ?existing, "duplicate node path");
        } else {
            self.paths.insert(node.path.clone(), id);
        }
        self.nodes.push(node);
        id
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn find_by_path(&self, path: &str) -> Option<NodeId> {
        self.paths.get(path).copied()
    }

    /// Get the package node with this name, creating and caching it on first
    /// sight. Packages are shared across compilation units.
    pub fn get_or_create_package(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.type_cache.get(name) {
            return id;
        }
        let id = self.add_node(name, name, NodeKind::Package);
        self.type_cache.insert(name.to_owned(), id);
        id
    }

    /// Register a type node in the type cache under its path.
    pub fn register_type(&mut self, id: NodeId) {
        let path = self.nodes[id.index()].path.clone();
        self.type_cache.insert(path, id);
    }

    /// Snapshot of the run's symbol table (path → node).
    pub fn type_cache(&self) -> &BTreeMap<String, NodeId> {
        &self.type_cache
    }

    /// Add an edge between two concrete nodes, updating both the source's
    /// outbound list and the target's inbound index.
    pub fn create_edge(&mut self, from: NodeId, to: NodeId, kind: EdgeKind) {
        let to_path = self.nodes[to.index()].path.clone();
        self.nodes[from.index()].outbound.push(Edge {
            from,
            to: NodeRef::resolved(to, to_path),
            kind,
        });
        self.nodes[to.index()].inbound.push(InboundEdge { from, kind });
    }

    /// Add an edge whose target is a pending textual reference. The inbound
    /// index on the target is updated later, if and when the resolution pass
    /// binds the ref.
    pub fn create_pending_edge(&mut self, from: NodeId, to_path: impl Into<String>, kind: EdgeKind) {
        self.nodes[from.index()].outbound.push(Edge {
            from,
            to: NodeRef::pending(to_path),
            kind,
        });
    }

    /// Whether the node already has a lexical parent.
    pub fn has_contains_parent(&self, id: NodeId) -> bool {
        self.nodes[id.index()]
            .inbound
            .iter()
            .any(|e| e.kind == EdgeKind::Contains)
    }

    /// Outbound edges of `id` whose *target* is a node of the given kind.
    /// A pending target has apparent kind [`NodeKind::Unknown`] and therefore
    /// never matches a concrete kind query.
    pub fn edges_to_node_kind(&self, id: NodeId, kind: NodeKind) -> Vec<&Edge> {
        self.nodes[id.index()]
            .outbound
            .iter()
            .filter(|e| self.target_kind(&e.to) == kind)
            .collect()
    }

    /// The apparent kind behind a ref: the node's kind when resolved,
    /// [`NodeKind::Unknown`] when pending.
    pub fn target_kind(&self, to: &NodeRef) -> NodeKind {
        match to.node() {
            Some(id) => self.nodes[id.index()].kind,
            None => NodeKind::Unknown,
        }
    }

    /// Walk inbound Contains edges upward from `id` until a package node is
    /// reached. Returns None when the containment chain ends without one
    /// (a compilation unit with no package declaration).
    pub fn nearest_enclosing_package(&self, id: NodeId) -> Option<NodeId> {
        let mut current = id;
        loop {
            let node = &self.nodes[current.index()];
            if node.kind == NodeKind::Package {
                return Some(current);
            }
            current = node
                .inbound
                .iter()
                .find(|e| e.kind == EdgeKind::Contains)?
                .from;
        }
    }

    /// Resolve every pending outbound edge of `id` against the type cache.
    ///
    /// Lookup is by the pending path directly; if that misses and the path
    /// has no qualifying separator, a second lookup prefixes the name of the
    /// nearest enclosing package of the edge source — the same-package
    /// implicit-visibility approximation. Edges that still miss stay pending
    /// (a permanent stub, not an error). Returns the number of refs bound.
    pub fn resolve_outbound_edges(&mut self, id: NodeId) -> usize {
        let mut bound = 0;
        for i in 0..self.nodes[id.index()].outbound.len() {
            let (path, kind) = {
                let e = &self.nodes[id.index()].outbound[i];
                if e.to.is_resolved() {
                    continue;
                }
                (e.to.path().to_owned(), e.kind)
            };

            let mut target = self.type_cache.get(&path).copied();
            if target.is_none() && !path.contains('.') {
                if let Some(pkg) = self.nearest_enclosing_package(id) {
                    let qualified = format!("{}.{}", self.nodes[pkg.index()].name, path);
                    target = self.type_cache.get(&qualified).copied();
                }
            }

            if let Some(t) = target {
                if self.nodes[id.index()].outbound[i].to.resolve_with(t) {
                    self.nodes[t.index()].inbound.push(InboundEdge { from: id, kind });
                    bound += 1;
                }
            }
        }
        bound
    }
}

impl Default for SourceGraph {
    fn default() -> Self {
        Self::new()
    }
}
