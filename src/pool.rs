//! Thread-local parser pooling.
//!
//! Grammar setup is not free, so each worker thread keeps one parser per
//! dialect and reuses it across units. Creates the parser on first use per
//! thread, reuses for subsequent operations.

use std::cell::RefCell;
use std::thread::LocalKey;

use crate::ts::{Flavor, ParseError, TsParser};

thread_local! {
    static TS_PARSER: RefCell<Option<TsParser>> = const { RefCell::new(None) };
    static TSX_PARSER: RefCell<Option<TsParser>> = const { RefCell::new(None) };
}

/// Execute function with the pooled parser for the given dialect.
pub fn with_parser<F, R>(flavor: Flavor, f: F) -> Result<R, ParseError>
where
    F: FnOnce(&mut TsParser) -> R,
{
    let key: &'static LocalKey<RefCell<Option<TsParser>>> = match flavor {
        Flavor::Ts => &TS_PARSER,
        Flavor::Tsx => &TSX_PARSER,
    };

    key.with(|cell| {
        let mut opt = cell.borrow_mut();
        if opt.is_none() {
            *opt = Some(TsParser::new(flavor)?);
        }
        Ok(f(opt.as_mut().expect("parser was just initialized above")))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pooled_parser_matches_flavor() {
        let flavor = with_parser(Flavor::Tsx, |parser| parser.flavor()).unwrap();
        assert_eq!(flavor, Flavor::Tsx);
    }

    #[test]
    fn pooled_parser_is_reusable() {
        let first = with_parser(Flavor::Ts, |p| p.parse("let a = 1;\n").is_ok()).unwrap();
        let second = with_parser(Flavor::Ts, |p| p.parse("let b = 2;\n").is_ok()).unwrap();
        assert!(first && second);
    }
}
