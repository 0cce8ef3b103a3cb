//! Flat token stream and the monotonic cursor used to scan it.
//!
//! Tokens are produced once per source unit, sorted ascending by start
//! offset with no overlaps. The cursor consumes each token exactly once;
//! callers must scan with non-decreasing bounds within a unit.

/// Half-open byte range `[start, end)` into a source unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Lexical class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Punctuation,
    Literal,
    Comment,
}

/// An atomic lexical unit, borrowing its text from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub span: Span,
}

/// One-directional, stateful scanner over a token sequence.
///
/// The read position only moves forward. A later call with a smaller bound
/// than a previous one observes no tokens; they were already consumed.
#[derive(Debug)]
pub struct TokenCursor<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(tokens: &'a [Token<'a>]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Consume tokens whose start offset is at most `bound`, collecting
    /// the ones the predicate accepts, in source order.
    ///
    /// Stops before the first token past `bound` without consuming it.
    pub fn advance_to<P>(&mut self, bound: usize, mut predicate: P) -> Vec<Token<'a>>
    where
        P: FnMut(&Token<'a>) -> bool,
    {
        let mut results = Vec::new();
        while let Some(tok) = self.tokens.get(self.pos) {
            if tok.span.start > bound {
                break;
            }
            self.pos += 1;
            if predicate(tok) {
                results.push(*tok);
            }
        }
        results
    }

    /// Consume tokens up to `bound` without collecting any.
    pub fn skip_to(&mut self, bound: usize) {
        self.advance_to(bound, |_| false);
    }
}
