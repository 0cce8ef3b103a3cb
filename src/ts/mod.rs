//! Tree-sitter front end for TypeScript sources.
//!
//! Parsing is a collaborator, not part of the rewrite engine: this module
//! turns raw source text into the [`crate::syntax::ParsedUnit`] view (top-level
//! declarations plus a flat, offset-annotated token stream) that the locator
//! consumes. Nothing downstream touches tree-sitter types.

pub mod errors;
pub mod lower;
pub mod parser;

pub use errors::ParseError;
pub use parser::{Flavor, TsParser};
