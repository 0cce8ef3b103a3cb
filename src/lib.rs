//! Decohoist: hoist export keywords above class decorators in TypeScript
//!
//! A formatting-preserving codemod built on offset-addressed text edits with
//! tree-sitter parsing. It finds exported classes that carry decorators and
//! moves the `export` / `export default` keywords in front of the
//! decorators, leaving every byte outside the edited spans untouched.
//!
//! # Architecture
//!
//! All rewriting compiles down to a single primitive: [`Edit`], an
//! insertion or deletion at an absolute byte offset, applied in one linear
//! pass over the original text. Intelligence lives in span acquisition
//! (the tree-sitter lowering and the token-cursor scans), not in the
//! application logic.
//!
//! Pipeline per source unit: parse ([`ts`]) -> locate ([`locate`]) ->
//! plan + apply ([`edit`]), orchestrated by [`transform::transform`].
//! Units are independent; the [`walk`] module fans them out across worker
//! threads and reports per-unit outcomes.
//!
//! # Example
//!
//! ```
//! use decohoist::{transform, Flavor};
//!
//! let rewritten = transform("@Foo\nexport class Bar {}", Flavor::Ts).unwrap();
//! assert_eq!(rewritten.as_deref(), Some("export @Foo\nclass Bar {}"));
//! ```

pub mod edit;
pub mod locate;
pub mod pool;
pub mod syntax;
pub mod token;
pub mod transform;
pub mod ts;
pub mod walk;

// Re-exports
pub use edit::{apply_edits, plan_edits, Edit};
pub use locate::{locate_patterns, LocatedPattern};
pub use syntax::{ClassDecl, DeclKind, Declaration, ParsedUnit};
pub use token::{Span, Token, TokenCursor, TokenKind};
pub use transform::transform;
pub use ts::{Flavor, ParseError, TsParser};
pub use walk::{collect_units, process_root, Options, Summary};
