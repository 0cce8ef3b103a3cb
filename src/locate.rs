//! Locates the rewrite targets: exported classes carrying decorators.
//!
//! For each match the locator computes the insertion point (the first
//! decorator's start) and the span of the export-related keyword tokens
//! sitting between the decorators and the `class` keyword. Declarations
//! whose keywords already precede the decorators produce no pattern, which
//! makes the rewrite idempotent.

use crate::syntax::{DeclKind, ParsedUnit};
use crate::token::{Span, Token, TokenCursor, TokenKind};

/// A matched occurrence of the target shape, with the offsets needed to
/// describe the rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocatedPattern {
    /// Where the keyword text gets re-inserted: the lowest decorator start.
    pub insert_at: usize,
    /// Original location of the keyword tokens, including the byte that
    /// follows the last one (its trailing separator travels with it).
    pub keyword_span: Span,
}

fn is_export_keyword(tok: &Token<'_>) -> bool {
    tok.kind == TokenKind::Keyword && (tok.text == "export" || tok.text == "default")
}

/// Walk the unit's top-level declarations and collect every located pattern,
/// in source order. The cursor is owned here and consumed front to back;
/// declaration spans ascend, so the bounds it sees never decrease.
pub fn locate_patterns(unit: &ParsedUnit<'_>) -> Vec<LocatedPattern> {
    let mut cursor = TokenCursor::new(&unit.tokens);
    let mut patterns = Vec::new();

    for decl in &unit.body {
        if !matches!(decl.kind, DeclKind::ExportNamed | DeclKind::ExportDefault) {
            continue;
        }
        let Some(class) = &decl.class else {
            continue;
        };
        if class.decorators.is_empty() {
            continue;
        }

        let insert_at = class.decorators.iter().map(|d| d.start).min().unwrap_or(0);
        // The scan bound mirrors the insert point: the minimum decorator
        // end, not the maximum. Decorators are assumed to sit in source
        // order ahead of the class keyword.
        let decorator_end = class.decorators.iter().map(|d| d.end).min().unwrap_or(0);

        // Position the cursor past the decorator region so the keyword scan
        // cannot match tokens inside the decorator expressions themselves.
        cursor.skip_to(decorator_end);
        let keywords = cursor.advance_to(class.class_start, is_export_keyword);

        if let (Some(first), Some(last)) = (keywords.first(), keywords.last()) {
            patterns.push(LocatedPattern {
                insert_at,
                keyword_span: Span::new(first.span.start, last.span.end + 1),
            });
        }
    }

    patterns
}
