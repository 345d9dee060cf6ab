//! External-parser adapter: tree-sitter-java parsing plus the depth-first
//! listener walk the translator consumes.
//!
//! The graph engine performs no lexing or parsing itself; this module owns
//! the grammar and flattens the syntax tree into enter/exit notifications,
//! one pair per named node, mirroring the tree's nesting.

use anyhow::{anyhow, Context, Result};
use tree_sitter::{Node as TsNode, Parser, Tree};

use crate::error::TranslateError;

/// Parse one compilation unit of Java source.
pub fn parse_source(source: &str) -> Result<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_java::LANGUAGE.into())
        .context("failed to set tree-sitter language for Java")?;
    parser
        .parse(source, None)
        .ok_or_else(|| anyhow!("tree-sitter returned None for compilation unit"))
}

/// A syntax-tree node plus the source text it spans.
///
/// Thin wrapper over `tree_sitter::Node` giving listeners textual and
/// field-based access to a construct's sub-structure.
#[derive(Clone, Copy)]
pub struct Syntax<'a> {
    node: TsNode<'a>,
    source: &'a str,
}

impl<'a> Syntax<'a> {
    pub fn new(node: TsNode<'a>, source: &'a str) -> Self {
        Self { node, source }
    }

    /// Grammar rule name, e.g. `"class_declaration"`.
    pub fn kind(&self) -> &'a str {
        self.node.kind()
    }

    /// The exact source text this node spans.
    pub fn text(&self) -> &'a str {
        &self.source[self.node.byte_range()]
    }

    pub fn start_byte(&self) -> usize {
        self.node.start_byte()
    }

    /// The first child bound to the given grammar field.
    pub fn field(&self, name: &str) -> Option<Syntax<'a>> {
        self.node
            .child_by_field_name(name)
            .map(|n| Syntax::new(n, self.source))
    }

    /// All children bound to the given grammar field (e.g. every
    /// `declarator` of a field declaration).
    pub fn fields(&self, name: &str) -> Vec<Syntax<'a>> {
        let mut cursor = self.node.walk();
        let out = self
            .node
            .children_by_field_name(name, &mut cursor)
            .map(|n| Syntax::new(n, self.source))
            .collect();
        out
    }

    pub fn field_text(&self, name: &str) -> Option<&'a str> {
        self.field(name).map(|s| s.text())
    }

    /// The first child (named or not) of the given kind.
    pub fn child_of_kind(&self, kind: &str) -> Option<Syntax<'a>> {
        for i in 0..self.node.child_count() {
            if let Some(child) = self.node.child(i) {
                if child.kind() == kind {
                    return Some(Syntax::new(child, self.source));
                }
            }
        }
        None
    }

    pub fn has_child_of_kind(&self, kind: &str) -> bool {
        self.child_of_kind(kind).is_some()
    }

    /// Kind of the enclosing syntax node, if any.
    pub fn parent_kind(&self) -> Option<&'a str> {
        self.node.parent().map(|p| p.kind())
    }
}

/// Receiver for the depth-first enter/exit notification stream.
pub trait SourceListener {
    fn enter(&mut self, syntax: &Syntax) -> Result<(), TranslateError>;
    fn exit(&mut self, syntax: &Syntax) -> Result<(), TranslateError>;
}

/// Walk the tree depth-first, issuing enter/exit for every named node.
pub fn walk(tree: &Tree, source: &str, listener: &mut impl SourceListener) -> Result<(), TranslateError> {
    walk_node(tree.root_node(), source, listener)
}

fn walk_node(
    node: TsNode<'_>,
    source: &str,
    listener: &mut impl SourceListener,
) -> Result<(), TranslateError> {
    let syntax = Syntax::new(node, source);
    listener.enter(&syntax)?;
    for i in 0..node.named_child_count() {
        if let Some(child) = node.named_child(i) {
            walk_node(child, source, listener)?;
        }
    }
    listener.exit(&syntax)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records the enter-order kinds so the dispatch contract can be checked
    /// without the full translator.
    struct KindRecorder {
        entered: Vec<String>,
        exited: Vec<String>,
    }

    impl SourceListener for KindRecorder {
        fn enter(&mut self, syntax: &Syntax) -> Result<(), TranslateError> {
            self.entered.push(syntax.kind().to_owned());
            Ok(())
        }
        fn exit(&mut self, syntax: &Syntax) -> Result<(), TranslateError> {
            self.exited.push(syntax.kind().to_owned());
            Ok(())
        }
    }

    #[test]
    fn test_walk_is_depth_first_and_symmetric() {
        let source = "package p; class C { void m() { int x = 1; } }";
        let tree = parse_source(source).unwrap();
        let mut rec = KindRecorder {
            entered: Vec::new(),
            exited: Vec::new(),
        };
        walk(&tree, source, &mut rec).unwrap();

        assert_eq!(rec.entered.len(), rec.exited.len());
        let pos = |list: &[String], kind: &str| list.iter().position(|k| k == kind);
        let class_enter = pos(&rec.entered, "class_declaration").unwrap();
        let method_enter = pos(&rec.entered, "method_declaration").unwrap();
        assert!(class_enter < method_enter, "outer construct entered first");
        let class_exit = pos(&rec.exited, "class_declaration").unwrap();
        let method_exit = pos(&rec.exited, "method_declaration").unwrap();
        assert!(method_exit < class_exit, "inner construct exited first");
    }

    #[test]
    fn test_syntax_field_access() {
        let source = "package p; class C { List<String> xs; }";
        let tree = parse_source(source).unwrap();
        let mut fields = Vec::new();
        struct FieldProbe<'v>(&'v mut Vec<(String, String)>);
        impl SourceListener for FieldProbe<'_> {
            fn enter(&mut self, syntax: &Syntax) -> Result<(), TranslateError> {
                if syntax.kind() == "field_declaration" {
                    let ty = syntax.field_text("type").unwrap_or_default().to_owned();
                    for decl in syntax.fields("declarator") {
                        let name = decl.field_text("name").unwrap_or_default().to_owned();
                        self.0.push((ty.clone(), name));
                    }
                }
                Ok(())
            }
            fn exit(&mut self, _: &Syntax) -> Result<(), TranslateError> {
                Ok(())
            }
        }
        walk(&tree, source, &mut FieldProbe(&mut fields)).unwrap();
        assert_eq!(fields, vec![("List<String>".to_owned(), "xs".to_owned())]);
    }
}
