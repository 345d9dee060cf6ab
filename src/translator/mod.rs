//! The tree-walk listener that builds the program graph.
//!
//! One [`GraphTranslator`] serves a whole run: each call to
//! [`translate`](GraphTranslator::translate) walks one compilation unit and
//! accumulates into the shared graph and type cache, so cross-file references
//! can be reconciled by the resolution pass afterwards.

pub mod containers;
pub mod scope;

use tracing::{debug, trace};

use crate::error::TranslateError;
use crate::graph::edge::{EdgeKind, NodeId};
use crate::graph::node::NodeKind;
use crate::graph::SourceGraph;
use crate::parser::{self, SourceListener, Syntax};

use containers::ContainerStack;
use scope::Scope;

/// Display name given to block nodes.
pub const BLOCK_NAME: &str = "{}";
/// Display name given to for-loop nodes.
pub const FOR_LOOP_NAME: &str = "for";

/// Builds nodes and edges while receiving enter/exit notifications for the
/// syntax constructs of one compilation unit at a time.
///
/// State carried across the walk: the container stack (current chain of
/// lexical containers), the scope stack (execution-order bookkeeping per
/// block-like construct), and the expression stack (current nesting of
/// expression evaluation, for Evaluates wiring). The graph and type cache
/// persist across units.
pub struct GraphTranslator {
    graph: SourceGraph,
    containers: ContainerStack,
    scopes: Vec<Scope>,
    /// (start byte, node) pairs; the start byte identifies which syntax node
    /// pushed the entry so exits pop symmetrically.
    expressions: Vec<(usize, NodeId)>,
}

impl GraphTranslator {
    pub fn new() -> Self {
        Self {
            graph: SourceGraph::new(),
            containers: ContainerStack::new(),
            scopes: Vec::new(),
            expressions: Vec::new(),
        }
    }

    /// Walk one compilation unit and add its constructs to the graph.
    ///
    /// On error the unit's partial contribution is left in the graph; the
    /// caller decides whether to discard the run.
    pub fn translate(&mut self, source: &str) -> anyhow::Result<()> {
        let tree = parser::parse_source(source)?;
        let walked = parser::walk(&tree, source, self);
        // The package container has no closing construct; per-unit state
        // must not leak into the next unit either way.
        self.containers.end_unit();
        self.scopes.clear();
        self.expressions.clear();
        walked?;
        Ok(())
    }

    /// One root per distinct top-level package/lexical root seen so far.
    pub fn top_level_nodes(&self) -> &[NodeId] {
        self.containers.roots()
    }

    pub fn graph(&self) -> &SourceGraph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut SourceGraph {
        &mut self.graph
    }

    pub fn into_graph(self) -> SourceGraph {
        self.graph
    }

    // --- containers -------------------------------------------------------

    fn enter_package(&mut self, s: &Syntax) -> Result<(), TranslateError> {
        let Some(name) = s
            .child_of_kind("scoped_identifier")
            .or_else(|| s.child_of_kind("identifier"))
        else {
            return Ok(());
        };
        debug!(package = name.text(), "package declaration");
        let id = self.graph.get_or_create_package(name.text());
        self.containers.push(id);
        Ok(())
    }

    fn enter_import(&mut self, s: &Syntax) -> Result<(), TranslateError> {
        // Only single-type imports carry a dependency edge; wildcard and
        // static imports are consumed without effect.
        if s.has_child_of_kind("asterisk") || s.has_child_of_kind("static") {
            return Ok(());
        }
        let Some(name) = s.child_of_kind("scoped_identifier") else {
            return Ok(());
        };
        let Some(container) = self.containers.peek() else {
            debug!(import = name.text(), "import before any container, skipped");
            return Ok(());
        };
        self.graph
            .create_pending_edge(container, name.text(), EdgeKind::DependsOn);
        Ok(())
    }

    fn enter_type(&mut self, s: &Syntax) -> Result<(), TranslateError> {
        // Enter and exit must push/pop symmetrically even for damaged trees.
        let name = s.field_text("name").unwrap_or("<unnamed>");
        let fqn = match self.containers.peek() {
            Some(parent) => format!("{}.{}", self.graph.node(parent).path, name),
            None => name.to_owned(),
        };
        debug!(%fqn, "type declaration");
        let id = self.graph.add_node(name, fqn, NodeKind::Type);
        if let Some(parent) = self.containers.peek() {
            self.graph.create_edge(parent, id, EdgeKind::Contains);
        }
        self.graph.register_type(id);
        self.containers.push(id);
        Ok(())
    }

    fn enter_method(&mut self, s: &Syntax, construct: &'static str) -> Result<(), TranslateError> {
        let parent = self.containers.peek().ok_or(TranslateError::MissingContainer {
            construct,
            offset: s.start_byte(),
        })?;
        let name = s.field_text("name").unwrap_or("<unnamed>");
        let fqn = format!("{}.{}", self.graph.node(parent).path, name);
        debug!(%fqn, "method declaration");
        let id = self.graph.add_node(name, fqn, NodeKind::Method);
        self.graph.create_edge(parent, id, EdgeKind::Contains);
        self.containers.push(id);
        Ok(())
    }

    fn pop_container(&mut self, construct: &'static str) -> Result<NodeId, TranslateError> {
        self.containers
            .pop()
            .ok_or(TranslateError::ContainerUnderflow { construct })
    }

    // --- declarations -----------------------------------------------------

    fn enter_field(&mut self, s: &Syntax) -> Result<(), TranslateError> {
        let container = self.containers.peek().ok_or(TranslateError::MissingContainer {
            construct: "field declaration",
            offset: s.start_byte(),
        })?;
        let type_name = s.field("type").and_then(|t| reference_type_name(&t));
        for decl in s.fields("declarator") {
            let Some(name) = decl.field_text("name") else {
                continue;
            };
            let path = format!("{}.{}", self.graph.node(container).path, name);
            let field = self.graph.add_node(name, path, NodeKind::Field);
            self.graph.create_edge(container, field, EdgeKind::Contains);
            if let Some(ref ty) = type_name {
                self.graph
                    .create_pending_edge(field, ty.clone(), EdgeKind::References);
            }
        }
        Ok(())
    }

    fn enter_local_variable(&mut self, s: &Syntax) -> Result<(), TranslateError> {
        let container = self.containers.peek().ok_or(TranslateError::MissingContainer {
            construct: "local variable declaration",
            offset: s.start_byte(),
        })?;
        let type_name = s.field("type").and_then(|t| reference_type_name(&t));
        // A basic for's init declaration belongs to the loop header, which is
        // treated as a single atomic point in the execution graph: the
        // binding is declared but never threaded into a scope's linear order.
        let in_for_header = s.parent_kind() == Some("for_statement");
        for decl in s.fields("declarator") {
            let Some(name) = decl.field_text("name") else {
                continue;
            };
            let path = format!("{}.{}", self.graph.node(container).path, name);
            let var = self.graph.add_node(name, path, NodeKind::Variable);
            self.graph.create_edge(container, var, EdgeKind::Declares);
            if let Some(ref ty) = type_name {
                self.graph
                    .create_pending_edge(var, ty.clone(), EdgeKind::References);
            }
            if !in_for_header && decl.field("value").is_some() {
                let scope = self
                    .scopes
                    .last_mut()
                    .ok_or(TranslateError::NoActiveScope { offset: s.start_byte() })?;
                scope.append(&mut self.graph, var);
            }
        }
        Ok(())
    }

    // --- blocks and scopes ------------------------------------------------

    fn enter_block(&mut self, s: &Syntax) -> Result<(), TranslateError> {
        let parent = self.containers.peek().ok_or(TranslateError::MissingContainer {
            construct: "block",
            offset: s.start_byte(),
        })?;
        let parent_path = self.graph.node(parent).path.clone();
        let is_method = self.graph.node(parent).kind == NodeKind::Method;

        let path = format!("{}.block@{}", parent_path, s.start_byte());
        let block = self.graph.add_node(BLOCK_NAME, path, NodeKind::Block);
        self.graph.create_edge(parent, block, EdgeKind::Contains);
        if let Some(enclosing) = self.scopes.last_mut() {
            enclosing.append(&mut self.graph, block);
        }
        if is_method {
            // The method's entry point.
            self.graph.create_edge(parent, block, EdgeKind::Executes);
        }
        self.containers.push(block);
        self.scopes.push(Scope::new(block, is_method));
        Ok(())
    }

    fn exit_block(&mut self) -> Result<(), TranslateError> {
        self.pop_container("block")?;
        let mut scope = self
            .scopes
            .pop()
            .ok_or(TranslateError::ScopeUnderflow { construct: "block" })?;
        if !scope.is_method() {
            // A braced loop body: its dangling tail is a candidate
            // predecessor of whatever follows the loop in the parent block.
            let under_loop = self
                .containers
                .peek()
                .is_some_and(|id| self.graph.node(id).kind == NodeKind::Loop);
            if under_loop {
                if let Some(tail) = scope.last() {
                    scope.add_continuation(tail);
                }
            }
        }
        self.exit_scope(scope)
    }

    /// Finish a scope: wire the block's entry edge, then either tie leftover
    /// pending exits to the enclosing method (fallthrough-to-return) or relay
    /// this scope's continuations and leftovers to the enclosing scope.
    fn exit_scope(&mut self, mut scope: Scope) -> Result<(), TranslateError> {
        if let Some(first) = scope.first() {
            self.graph
                .create_edge(scope.block(), first, EdgeKind::Executes);
        }
        if scope.is_method() {
            let method = self
                .containers
                .peek()
                .ok_or(TranslateError::ContainerUnderflow { construct: "method body" })?;
            if self.graph.node(method).kind != NodeKind::Method {
                return Err(TranslateError::NotAMethodScope {
                    path: self.graph.node(method).path.clone(),
                });
            }
            for from in scope.take_pending_exits() {
                self.graph.create_edge(from, method, EdgeKind::Executes);
            }
        } else if let Some(enclosing) = self.scopes.last_mut() {
            for node in scope.take_continuations() {
                enclosing.add_pending_exit(node);
            }
            for node in scope.take_pending_exits() {
                enclosing.add_pending_exit(node);
            }
        }
        Ok(())
    }

    // --- loops ------------------------------------------------------------

    /// Create the loop node, thread it into the enclosing scope's execution
    /// order, and push it as a container. Shared by both for-statement forms.
    fn new_loop_node(&mut self, s: &Syntax) -> Result<NodeId, TranslateError> {
        let parent = self.containers.peek().ok_or(TranslateError::MissingContainer {
            construct: "for statement",
            offset: s.start_byte(),
        })?;
        let path = format!("{}.for@{}", self.graph.node(parent).path, s.start_byte());
        let id = self.graph.add_node(FOR_LOOP_NAME, path, NodeKind::Loop);
        let scope = self
            .scopes
            .last_mut()
            .ok_or(TranslateError::NoActiveScope { offset: s.start_byte() })?;
        scope.append(&mut self.graph, id);
        self.containers.push(id);
        Ok(id)
    }

    /// An Evaluates edge from the loop header to one of its sub-expressions.
    /// Header expressions stay atomic: they get no Executes wiring and are
    /// not pushed onto the expression stack.
    fn evaluates_header_expression(&mut self, loop_id: NodeId, expr: &Syntax) {
        let path = format!("{}.expr@{}", self.graph.node(loop_id).path, expr.start_byte());
        let id = self.graph.add_node(expr.text(), path, NodeKind::Expression);
        self.graph.create_edge(loop_id, id, EdgeKind::Evaluates);
    }

    fn body_is_block(s: &Syntax) -> bool {
        s.field("body").is_some_and(|b| b.kind() == "block")
    }

    fn enter_basic_for(&mut self, s: &Syntax) -> Result<(), TranslateError> {
        let loop_id = self.new_loop_node(s)?;
        if let Some(condition) = s.field("condition") {
            self.evaluates_header_expression(loop_id, &condition);
        }
        for update in s.fields("update") {
            self.evaluates_header_expression(loop_id, &update);
        }
        if !Self::body_is_block(s) {
            // The unbraced body acts as its own implicit scope, keyed on the
            // loop node itself.
            self.scopes.push(Scope::new(loop_id, false));
        }
        Ok(())
    }

    fn enter_enhanced_for(&mut self, s: &Syntax) -> Result<(), TranslateError> {
        let loop_id = self.new_loop_node(s)?;
        if let Some(name) = s.field_text("name") {
            let path = format!("{}.{}", self.graph.node(loop_id).path, name);
            let var = self.graph.add_node(name, path, NodeKind::Variable);
            self.graph.create_edge(loop_id, var, EdgeKind::Declares);
            if let Some(ty) = s.field("type").and_then(|t| reference_type_name(&t)) {
                self.graph.create_pending_edge(var, ty, EdgeKind::References);
            }
        }
        if let Some(value) = s.field("value") {
            self.evaluates_header_expression(loop_id, &value);
        }
        if !Self::body_is_block(s) {
            self.scopes.push(Scope::new(loop_id, false));
        }
        Ok(())
    }

    fn exit_for(&mut self, s: &Syntax) -> Result<(), TranslateError> {
        let loop_id = self.pop_container("for statement")?;
        if Self::body_is_block(s) {
            // The body block already resolved its own internal chain and
            // forwarded its tail; the header just waits for its successor.
            let scope = self
                .scopes
                .last_mut()
                .ok_or(TranslateError::ScopeUnderflow { construct: "for statement" })?;
            scope.add_pending_exit(loop_id);
        } else {
            let mut scope = self
                .scopes
                .pop()
                .ok_or(TranslateError::ScopeUnderflow { construct: "for statement" })?;
            scope.add_continuation(loop_id);
            if let Some(tail) = scope.last() {
                scope.add_continuation(tail);
            }
            self.exit_scope(scope)?;
        }
        Ok(())
    }

    // --- statements and expressions ---------------------------------------

    fn enter_statement(&mut self, s: &Syntax) -> Result<(), TranslateError> {
        let scope_block = self
            .scopes
            .last()
            .map(|scope| scope.block())
            .ok_or(TranslateError::NoActiveScope { offset: s.start_byte() })?;
        let path = format!("{}.stmt@{}", self.graph.node(scope_block).path, s.start_byte());
        let stmt = self.graph.add_node(s.text().trim(), path, NodeKind::Statement);
        if let Some(scope) = self.scopes.last_mut() {
            scope.append(&mut self.graph, stmt);
        }
        self.expressions.push((s.start_byte(), stmt));
        Ok(())
    }

    fn enter_expression(&mut self, s: &Syntax) -> Result<(), TranslateError> {
        // Only wired inside a statement; loop-header sub-expressions and
        // other free-standing positions are consumed without nodes.
        let Some(&(_, parent)) = self.expressions.last() else {
            return Ok(());
        };
        let path = format!("{}.expr@{}", self.graph.node(parent).path, s.start_byte());
        let expr = self.graph.add_node(s.text(), path, NodeKind::Expression);
        self.graph.create_edge(parent, expr, EdgeKind::Evaluates);
        self.expressions.push((s.start_byte(), expr));
        Ok(())
    }

    fn exit_expression(&mut self, s: &Syntax) {
        if self.expressions.last().map(|&(start, _)| start) == Some(s.start_byte()) {
            self.expressions.pop();
        }
    }
}

impl Default for GraphTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceListener for GraphTranslator {
    fn enter(&mut self, s: &Syntax) -> Result<(), TranslateError> {
        trace!(kind = s.kind(), offset = s.start_byte(), "enter");
        match s.kind() {
            "package_declaration" => self.enter_package(s),
            "import_declaration" => self.enter_import(s),
            "class_declaration" | "interface_declaration" | "enum_declaration" => {
                self.enter_type(s)
            }
            "method_declaration" => self.enter_method(s, "method declaration"),
            "constructor_declaration" => self.enter_method(s, "constructor declaration"),
            "field_declaration" => self.enter_field(s),
            "local_variable_declaration" => self.enter_local_variable(s),
            "block" | "constructor_body" => self.enter_block(s),
            "for_statement" => self.enter_basic_for(s),
            "enhanced_for_statement" => self.enter_enhanced_for(s),
            "expression_statement" => self.enter_statement(s),
            "assignment_expression" | "binary_expression" | "ternary_expression"
            | "method_invocation" | "update_expression" => self.enter_expression(s),
            _ => Ok(()),
        }
    }

    fn exit(&mut self, s: &Syntax) -> Result<(), TranslateError> {
        trace!(kind = s.kind(), offset = s.start_byte(), "exit");
        match s.kind() {
            "class_declaration" | "interface_declaration" | "enum_declaration" => {
                self.pop_container("type declaration").map(|_| ())
            }
            "method_declaration" => self.pop_container("method declaration").map(|_| ()),
            "constructor_declaration" => self.pop_container("constructor declaration").map(|_| ()),
            "block" | "constructor_body" => self.exit_block(),
            "for_statement" | "enhanced_for_statement" => self.exit_for(s),
            "expression_statement" | "assignment_expression" | "binary_expression"
            | "ternary_expression" | "method_invocation" | "update_expression" => {
                self.exit_expression(s);
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

/// The textual name behind a declared type, for reference types only:
/// primitives yield None (there is nothing to resolve against the type
/// cache). Generic types erase to their base name; arrays to their element.
fn reference_type_name(s: &Syntax) -> Option<String> {
    match s.kind() {
        "type_identifier" | "scoped_type_identifier" => Some(s.text().to_owned()),
        "generic_type" => s
            .child_of_kind("type_identifier")
            .or_else(|| s.child_of_kind("scoped_type_identifier"))
            .map(|t| t.text().to_owned()),
        "array_type" => s.field("element").and_then(|e| reference_type_name(&e)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver;

    fn translate(source: &str) -> (SourceGraph, Vec<NodeId>) {
        let mut translator = GraphTranslator::new();
        translator.translate(source).unwrap();
        let roots = translator.top_level_nodes().to_vec();
        let mut graph = translator.into_graph();
        resolver::resolve(&mut graph, &roots);
        (graph, roots)
    }

    fn executes_targets(graph: &SourceGraph, id: NodeId) -> Vec<NodeId> {
        graph
            .node(id)
            .outbound_of_kind(EdgeKind::Executes)
            .iter()
            .filter_map(|e| e.to.node())
            .collect()
    }

    /// The body block a method executes on entry.
    fn method_body(graph: &SourceGraph, method: NodeId) -> NodeId {
        let executions = executes_targets(graph, method);
        assert_eq!(executions.len(), 1, "a method executes exactly its body");
        assert_eq!(graph.node(executions[0]).kind, NodeKind::Block);
        executions[0]
    }

    fn sole_loop_child(graph: &SourceGraph, block: NodeId) -> NodeId {
        let loops = graph.edges_to_node_kind(block, NodeKind::Loop);
        assert!(!loops.is_empty());
        loops[0].to.node().unwrap()
    }

    #[test]
    fn test_simple_class_structure() {
        let (g, roots) = translate("package p; class C { T f; }");
        assert_eq!(roots.len(), 1);
        let pkg = roots[0];
        assert_eq!(g.node(pkg).kind, NodeKind::Package);

        let class = g.find_by_path("p.C").unwrap();
        assert_eq!(g.node(class).kind, NodeKind::Type);
        assert_eq!(g.node(pkg).outbound_of_kind(EdgeKind::Contains)[0].to.node(), Some(class));
        assert!(g.type_cache().contains_key("p.C"));

        let field = g.find_by_path("p.C.f").unwrap();
        assert_eq!(g.node(field).kind, NodeKind::Field);
        let refs = g.node(field).outbound_of_kind(EdgeKind::References);
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].to.path(), "T");
        assert!(!refs[0].to.is_resolved(), "T is outside the corpus");
    }

    #[test]
    fn test_nested_type_paths_are_fully_qualified() {
        let (g, _) = translate("package p; class Outer { class Inner { } }");
        assert!(g.find_by_path("p.Outer").is_some());
        assert!(g.find_by_path("p.Outer.Inner").is_some());
        assert!(g.type_cache().contains_key("p.Outer.Inner"));
    }

    #[test]
    fn test_sequential_statements_thread_linearly() {
        let (g, _) = translate("package p; class C { void m() { a(); b(); c(); } }");
        let method = g.find_by_path("p.C.m").unwrap();
        let block = method_body(&g, method);

        let stmts: Vec<NodeId> = g
            .edges_to_node_kind(block, NodeKind::Statement)
            .iter()
            .filter(|e| e.kind == EdgeKind::Contains)
            .map(|e| e.to.node().unwrap())
            .collect();
        assert_eq!(stmts.len(), 3);

        // Entry edge to the first statement, then a linear chain; the tail
        // has no successor.
        assert_eq!(executes_targets(&g, block), vec![stmts[0]]);
        assert_eq!(executes_targets(&g, stmts[0]), vec![stmts[1]]);
        assert_eq!(executes_targets(&g, stmts[1]), vec![stmts[2]]);
        assert!(executes_targets(&g, stmts[2]).is_empty());
    }

    #[test]
    fn test_statement_evaluates_its_expression() {
        let (g, _) = translate("package p; class C { void m() { x = y + 1; } }");
        let method = g.find_by_path("p.C.m").unwrap();
        let block = method_body(&g, method);
        let stmt = executes_targets(&g, block)[0];

        let evals = g.node(stmt).outbound_of_kind(EdgeKind::Evaluates);
        assert_eq!(evals.len(), 1, "the assignment hangs off the statement");
        let assignment = evals[0].to.node().unwrap();
        assert_eq!(g.node(assignment).kind, NodeKind::Expression);
        // The nested binary expression hangs off the assignment.
        let nested = g.node(assignment).outbound_of_kind(EdgeKind::Evaluates);
        assert_eq!(nested.len(), 1);
        assert_eq!(g.node(nested[0].to.node().unwrap()).name, "y + 1");
    }

    #[test]
    fn test_initialized_local_variable_joins_execution_order() {
        let (g, _) = translate("package p; class C { void m() { int x = 1; touch(x); } }");
        let method = g.find_by_path("p.C.m").unwrap();
        let block = method_body(&g, method);

        let declared = g.node(block).outbound_of_kind(EdgeKind::Declares);
        assert_eq!(declared.len(), 1, "the block declares x");
        let var = declared[0].to.node().unwrap();
        assert_eq!(g.node(var).name, "x");

        // The initializer executes first, then the statement.
        assert_eq!(executes_targets(&g, block), vec![var]);
        let successors = executes_targets(&g, var);
        assert_eq!(successors.len(), 1);
        assert_eq!(g.node(successors[0]).kind, NodeKind::Statement);
    }

    #[test]
    fn test_uninitialized_local_variable_is_declared_but_not_executed() {
        let (g, _) = translate("package p; class C { void m() { int x; a(); } }");
        let method = g.find_by_path("p.C.m").unwrap();
        let block = method_body(&g, method);

        assert_eq!(g.node(block).outbound_of_kind(EdgeKind::Declares).len(), 1);
        // The entry edge goes straight to the statement.
        let first = executes_targets(&g, block);
        assert_eq!(first.len(), 1);
        assert_eq!(g.node(first[0]).kind, NodeKind::Statement);
    }

    #[test]
    fn test_enhanced_for_without_braces() {
        let (g, roots) = translate(
            "package graphtest; \
             class ForLoopingType { \
                 public static void featureTest() { \
                     List<String> dummyList; \
                     for (String s : list) \
                         System.out.println(s); \
                 } \
             }",
        );
        assert_eq!(roots.len(), 1);
        let method = g.find_by_path("graphtest.ForLoopingType.featureTest").unwrap();
        let block = method_body(&g, method);

        // Contains and Executes both reach the loop from the body block.
        assert_eq!(g.edges_to_node_kind(block, NodeKind::Loop).len(), 2);
        let for_loop = sole_loop_child(&g, block);

        // The loop executes its body statement and, on exhaustion, returns
        // control to the method.
        let loop_exec = executes_targets(&g, for_loop);
        assert_eq!(loop_exec.len(), 2);
        let stmts: Vec<NodeId> = loop_exec
            .iter()
            .copied()
            .filter(|&id| g.node(id).kind == NodeKind::Statement)
            .collect();
        assert_eq!(stmts.len(), 1);
        assert_eq!(
            loop_exec
                .iter()
                .filter(|&&id| g.node(id).kind == NodeKind::Method)
                .count(),
            1
        );

        // The body statement has exactly one successor: the method.
        let stmt_exec = executes_targets(&g, stmts[0]);
        assert_eq!(stmt_exec.len(), 1);
        assert_eq!(g.node(stmt_exec[0]).kind, NodeKind::Method);

        // The iteration variable is declared by the loop header.
        let declared = g.node(for_loop).outbound_of_kind(EdgeKind::Declares);
        assert_eq!(declared.len(), 1);
        assert_eq!(g.node(declared[0].to.node().unwrap()).name, "s");
    }

    #[test]
    fn test_enhanced_for_with_braces() {
        let (g, _) = translate(
            "package graphtest; \
             class ForLoopingType { \
                 public static void featureTest() { \
                     List<String> dummyList; \
                     for (String s : list) { \
                         System.out.println(s); \
                     } \
                 } \
             }",
        );
        let method = g.find_by_path("graphtest.ForLoopingType.featureTest").unwrap();
        let outer = method_body(&g, method);
        let for_loop = sole_loop_child(&g, outer);

        // The loop both contains and executes its body block.
        let body_edges = g.edges_to_node_kind(for_loop, NodeKind::Block);
        assert_eq!(body_edges.iter().filter(|e| e.kind == EdgeKind::Contains).count(), 1);
        assert_eq!(body_edges.iter().filter(|e| e.kind == EdgeKind::Executes).count(), 1);
        let body = body_edges[0].to.node().unwrap();

        // Body block wires its statement; the statement's loop-exhaustion
        // successor is the method, as is the loop header's.
        let stmt = executes_targets(&g, body)[0];
        assert_eq!(g.node(stmt).kind, NodeKind::Statement);
        let stmt_exec = executes_targets(&g, stmt);
        assert_eq!(stmt_exec, vec![method]);
        assert!(executes_targets(&g, for_loop).contains(&method));
    }

    #[test]
    fn test_basic_for_with_braces() {
        let (g, _) = translate(
            "package graphtest; \
             class ForLoopingType { \
                 public static void featureTest() { \
                     List<String> dummyList; \
                     for (int i = 0; i < dummyList.length(); i++) { \
                         System.out.println(dummyList.get(i)); \
                     } \
                 } \
             }",
        );
        let method = g.find_by_path("graphtest.ForLoopingType.featureTest").unwrap();
        let outer = method_body(&g, method);
        let for_loop = sole_loop_child(&g, outer);

        // The header declares its induction variable and evaluates the
        // condition and update as one atomic point.
        assert_eq!(g.node(for_loop).outbound_of_kind(EdgeKind::Declares).len(), 1);
        let evals = g.edges_to_node_kind(for_loop, NodeKind::Expression);
        assert_eq!(evals.len(), 2);
        assert!(evals.iter().all(|e| e.kind == EdgeKind::Evaluates));

        // The induction variable never joins the execution order.
        let var = g.node(for_loop).outbound_of_kind(EdgeKind::Declares)[0]
            .to
            .node()
            .unwrap();
        assert!(executes_targets(&g, var).is_empty());
        assert!(g.node(var).inbound_of_kind(EdgeKind::Executes).is_empty());

        // Same body wiring as the enhanced form.
        let body_edges = g.edges_to_node_kind(for_loop, NodeKind::Block);
        assert_eq!(body_edges.iter().filter(|e| e.kind == EdgeKind::Contains).count(), 1);
        assert_eq!(body_edges.iter().filter(|e| e.kind == EdgeKind::Executes).count(), 1);
        let body = body_edges[0].to.node().unwrap();
        let stmt = executes_targets(&g, body)[0];
        assert_eq!(executes_targets(&g, stmt), vec![method]);
        assert!(executes_targets(&g, for_loop).contains(&method));
    }

    #[test]
    fn test_statement_after_loop_follows_loop_header() {
        let (g, _) = translate(
            "package p; class C { void m() { for (String s : xs) { a(); } b(); } }",
        );
        let method = g.find_by_path("p.C.m").unwrap();
        let block = method_body(&g, method);
        let for_loop = sole_loop_child(&g, block);

        // The loop's exhaustion successor is the trailing statement, not the
        // method: the pending exit was consumed inside the body block's
        // parent scope.
        let loop_exec = executes_targets(&g, for_loop);
        let to_stmts: Vec<NodeId> = loop_exec
            .iter()
            .copied()
            .filter(|&id| g.node(id).kind == NodeKind::Statement)
            .collect();
        assert_eq!(to_stmts.len(), 1);
        assert_eq!(g.node(to_stmts[0]).name, "b();");
        assert!(!loop_exec.contains(&method));
    }

    #[test]
    fn test_wildcard_and_static_imports_carry_no_dependency() {
        let (g, roots) = translate(
            "package p; import java.util.*; import static java.lang.Math.max; \
             import java.util.List; class C { }",
        );
        let pkg = roots[0];
        let deps = g.node(pkg).outbound_of_kind(EdgeKind::DependsOn);
        assert_eq!(deps.len(), 1, "only the single-type import counts");
        assert_eq!(deps[0].to.path(), "java.util.List");
    }

    #[test]
    fn test_constructor_body_is_wired_like_a_method_body() {
        let (g, _) = translate("package p; class C { C() { init(); } }");
        let ctor = g.find_by_path("p.C.C").unwrap();
        assert_eq!(g.node(ctor).kind, NodeKind::Method);
        let block = method_body(&g, ctor);
        let stmt = executes_targets(&g, block)[0];
        assert_eq!(g.node(stmt).kind, NodeKind::Statement);
    }

    #[test]
    fn test_unit_state_does_not_leak_between_translations() {
        let mut translator = GraphTranslator::new();
        translator.translate("package p; class A { }").unwrap();
        translator.translate("package q; class B { }").unwrap();
        let g = translator.graph();
        // q.B is contained by q, not by anything left over from the first
        // unit.
        let b = g.find_by_path("q.B").unwrap();
        let parents = g.node(b).inbound_of_kind(EdgeKind::Contains);
        assert_eq!(parents.len(), 1);
        assert_eq!(g.node(parents[0].from).path, "q");
    }
}
