//! Parser-facing view of one source unit: top-level declarations plus the
//! flat token stream, both expressed in absolute byte offsets.

use crate::token::{Span, Token};

/// Variant tag for a top-level declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    /// `export class ...`, `export function ...`, `export { ... }`
    ExportNamed,
    /// `export default ...`
    ExportDefault,
    /// Any other top-level statement.
    Other,
}

/// A class declaration and its decorators.
#[derive(Debug, Clone)]
pub struct ClassDecl {
    /// Byte range of the whole class node.
    pub span: Span,
    /// Offset of the `class` keyword itself, past any decorators.
    pub class_start: usize,
    /// Byte ranges of the decorators attached to this class, in source order.
    pub decorators: Vec<Span>,
}

/// One top-level declaration of a source unit.
#[derive(Debug, Clone)]
pub struct Declaration {
    pub kind: DeclKind,
    pub span: Span,
    /// The inner class declaration, when this declaration carries one.
    pub class: Option<ClassDecl>,
}

/// A parsed source unit: ordered top-level declarations and the globally
/// ordered token sequence. Owned by one transform invocation and discarded
/// after edit planning.
#[derive(Debug)]
pub struct ParsedUnit<'a> {
    pub body: Vec<Declaration>,
    pub tokens: Vec<Token<'a>>,
}
