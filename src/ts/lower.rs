//! Lowers a tree-sitter CST into the declaration + token view.
//!
//! Only the shapes the locator cares about survive lowering: top-level
//! declaration variants, class nodes with their decorator spans, and the
//! flat leaf-token stream. Everything else becomes `DeclKind::Other`.

use tree_sitter::Node;

use crate::syntax::{ClassDecl, DeclKind, Declaration, ParsedUnit};
use crate::token::{Span, Token, TokenKind};

pub(crate) fn lower_unit<'a>(root: Node<'_>, source: &'a str) -> ParsedUnit<'a> {
    let mut tokens = Vec::new();
    collect_tokens(root, source, &mut tokens);

    let mut body = Vec::new();
    let mut cursor = root.walk();
    for child in root.children(&mut cursor) {
        body.push(lower_declaration(child));
    }

    ParsedUnit { body, tokens }
}

fn lower_declaration(node: Node<'_>) -> Declaration {
    let kind = if node.kind() == "export_statement" {
        if has_default_keyword(node) {
            DeclKind::ExportDefault
        } else {
            DeclKind::ExportNamed
        }
    } else {
        DeclKind::Other
    };

    Declaration {
        kind,
        span: span_of(node),
        class: lower_class(node),
    }
}

/// Find the class declaration carried by a top-level node, along with its
/// decorators. The grammar attaches a decorator to whichever construct it
/// lexically precedes, so both the export statement and the class node are
/// consulted.
fn lower_class(node: Node<'_>) -> Option<ClassDecl> {
    let class_node = if node.kind() == "export_statement" {
        node.child_by_field_name("declaration")?
    } else {
        node
    };

    if !matches!(
        class_node.kind(),
        "class_declaration" | "abstract_class_declaration"
    ) {
        return None;
    }

    let mut decorators = Vec::new();
    if node.id() != class_node.id() {
        let mut cursor = node.walk();
        for decorator in node.children_by_field_name("decorator", &mut cursor) {
            decorators.push(span_of(decorator));
        }
    }
    let mut cursor = class_node.walk();
    for decorator in class_node.children_by_field_name("decorator", &mut cursor) {
        decorators.push(span_of(decorator));
    }

    Some(ClassDecl {
        span: span_of(class_node),
        class_start: class_keyword_start(class_node),
        decorators,
    })
}

/// Offset of the `class` keyword itself. The class node's own start covers
/// leading decorators and the `abstract` modifier, which must not count.
fn class_keyword_start(class_node: Node<'_>) -> usize {
    let mut cursor = class_node.walk();
    let start = class_node
        .children(&mut cursor)
        .find(|child| !child.is_named() && child.kind() == "class")
        .map(|child| child.start_byte())
        .unwrap_or_else(|| class_node.start_byte());
    start
}

fn has_default_keyword(node: Node<'_>) -> bool {
    let mut cursor = node.walk();
    let has_default = node
        .children(&mut cursor)
        .any(|child| !child.is_named() && child.kind() == "default");
    has_default
}

fn span_of(node: Node<'_>) -> Span {
    Span::new(node.start_byte(), node.end_byte())
}

/// Collect the leaves of the tree as a flat token stream, in source order.
fn collect_tokens<'a>(node: Node<'_>, source: &'a str, out: &mut Vec<Token<'a>>) {
    if node.child_count() == 0 {
        let range = node.byte_range();
        // missing nodes are zero-length leaves
        if !range.is_empty() {
            let text = &source[range.clone()];
            out.push(Token {
                kind: classify(node, text),
                text,
                span: Span::new(range.start, range.end),
            });
        }
        return;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_tokens(child, source, out);
    }
}

fn classify(node: Node<'_>, text: &str) -> TokenKind {
    let kind = node.kind();
    if kind == "comment" {
        return TokenKind::Comment;
    }
    if !node.is_named() {
        // Anonymous alphabetic leaves are the grammar's keywords; the rest
        // is operators and delimiters.
        return if !text.is_empty() && text.chars().all(|c| c.is_ascii_alphabetic()) {
            TokenKind::Keyword
        } else {
            TokenKind::Punctuation
        };
    }
    if kind.ends_with("identifier") {
        return TokenKind::Identifier;
    }
    // Named leaves whose kind spells their text (`this`, `super`, `true`...)
    if kind == text {
        return TokenKind::Keyword;
    }
    TokenKind::Literal
}
