//! Per-unit driver: parse, locate, plan, apply.
//!
//! One call owns the whole pipeline for one source unit. The token cursor
//! and the parsed view live and die inside it; nothing is shared across
//! units beyond the pooled parsers.

use crate::edit::{apply_edits, plan_edits};
use crate::locate::locate_patterns;
use crate::pool;
use crate::ts::{Flavor, ParseError};

/// Rewrite one source unit.
///
/// Returns the rewritten text, or `None` when the unit contains no exported
/// decorated class and must be left untouched. A parse failure is a
/// recoverable per-unit condition for the caller to report and skip.
pub fn transform(source: &str, flavor: Flavor) -> Result<Option<String>, ParseError> {
    let unit = pool::with_parser(flavor, |parser| parser.parse(source))??;

    let patterns = locate_patterns(&unit);
    if patterns.is_empty() {
        return Ok(None);
    }

    let edits = plan_edits(source, &patterns);
    Ok(Some(apply_edits(source, edits)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrite(source: &str) -> Option<String> {
        transform(source, Flavor::Ts).unwrap()
    }

    #[test]
    fn hoists_export_before_decorator() {
        assert_eq!(
            rewrite("@Foo\nexport class Bar {}").as_deref(),
            Some("export @Foo\nclass Bar {}")
        );
    }

    #[test]
    fn hoists_export_default_pair() {
        assert_eq!(
            rewrite("@Foo\nexport default class Bar {}").as_deref(),
            Some("export default @Foo\nclass Bar {}")
        );
    }

    #[test]
    fn inserts_before_the_first_of_multiple_decorators() {
        assert_eq!(
            rewrite("@A\n@B\nexport class C {}").as_deref(),
            Some("export @A\n@B\nclass C {}")
        );
    }

    #[test]
    fn undecorated_class_is_untouched() {
        assert_eq!(rewrite("export class Bar {}"), None);
    }

    #[test]
    fn unexported_decorated_class_is_untouched() {
        assert_eq!(rewrite("@Foo\nclass Bar {}"), None);
    }

    #[test]
    fn rewrite_is_idempotent() {
        let once = rewrite("@Foo\nexport class Bar {}").unwrap();
        assert_eq!(rewrite(&once), None);
    }

    #[test]
    fn surrounding_bytes_survive_exactly() {
        let source = "// header\n\n@Foo({ a: 1 })\nexport class Bar {\n  x = 'y';\n}\n\nconst tail = 1;\n";
        let rewritten = rewrite(source).unwrap();
        assert_eq!(
            rewritten,
            "// header\n\nexport @Foo({ a: 1 })\nclass Bar {\n  x = 'y';\n}\n\nconst tail = 1;\n"
        );
    }

    #[test]
    fn rewrites_every_match_in_one_unit() {
        let source = "@A\nexport class One {}\n\n@B\nexport default class Two {}\n";
        assert_eq!(
            rewrite(source).as_deref(),
            Some("export @A\nclass One {}\n\nexport default @B\nclass Two {}\n")
        );
    }

    #[test]
    fn preserves_internal_spacing_of_the_keyword_run() {
        // the odd spacing between the keywords travels verbatim
        assert_eq!(
            rewrite("@Foo\nexport  default class Bar {}").as_deref(),
            Some("export  default @Foo\nclass Bar {}")
        );
    }

    #[test]
    fn parse_failure_is_an_error_not_a_panic() {
        assert!(transform("class {{{", Flavor::Ts).is_err());
    }

    #[test]
    fn tsx_unit_with_jsx_body_is_rewritten() {
        let source = "@Component\nexport class View {\n  render() {\n    return <div>hi</div>;\n  }\n}\n";
        let rewritten = transform(source, Flavor::Tsx).unwrap().unwrap();
        assert!(rewritten.starts_with("export @Component\nclass View"));
        assert!(rewritten.contains("<div>hi</div>"));
    }
}
