use std::path::Path;

use ast_grep_language::{LanguageExt, SupportLang};
use tree_sitter::{Node, Parser};

use crate::syntax::ParsedUnit;
use crate::ts::errors::ParseError;
use crate::ts::lower;

/// Source dialect, derived from the file extension. `Tsx` enables the JSX
/// syntax extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    Ts,
    Tsx,
}

impl Flavor {
    /// Classify a path by extension. Paths that are not candidate units
    /// (anything other than `.ts` / `.tsx`) yield `None`.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "ts" => Some(Flavor::Ts),
            "tsx" => Some(Flavor::Tsx),
            _ => None,
        }
    }

    fn language(self) -> SupportLang {
        match self {
            Flavor::Ts => SupportLang::TypeScript,
            Flavor::Tsx => SupportLang::Tsx,
        }
    }
}

/// Tree-sitter parser wrapper for TypeScript source code.
pub struct TsParser {
    parser: Parser,
    flavor: Flavor,
}

impl TsParser {
    /// Create a parser for the given dialect.
    pub fn new(flavor: Flavor) -> Result<Self, ParseError> {
        let mut parser = Parser::new();
        // Get the tree-sitter Language from ast-grep-language
        let ts_lang = flavor.language().get_ts_language();
        parser
            .set_language(&ts_lang)
            .map_err(|_| ParseError::LanguageSet)?;

        Ok(Self { parser, flavor })
    }

    /// Get the configured dialect.
    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// Parse one source unit into its declaration and token view.
    ///
    /// tree-sitter is error-tolerant, so a unit counts as failed when the
    /// produced tree contains ERROR or missing nodes; the first offending
    /// byte range is carried in the error.
    pub fn parse<'a>(&mut self, source: &'a str) -> Result<ParsedUnit<'a>, ParseError> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or(ParseError::ParseFailed)?;

        if let Some(err) = first_error_node(tree.root_node()) {
            return Err(ParseError::SyntaxError {
                byte_start: err.start_byte(),
                byte_end: err.end_byte(),
            });
        }

        Ok(lower::lower_unit(tree.root_node(), source))
    }
}

fn first_error_node(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(err) = first_error_node(child) {
            return Some(err);
        }
    }

    None
}
