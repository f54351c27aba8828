#![forbid(unsafe_code)]
//! Sunjar language front end
//!
//! This crate bundles the syntax layer of the Sunjar scripting language: the vocabulary registries from
//! `sunjar_core` and the tokenizer, AST and lexical diagnostics from `sunjar_syntax`. A parser, evaluator, or
//! REPL builds on top of these.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The tokenizer has no failure
//!   path at all; malformed input is encoded in the token stream.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **True invariants**: registry lookups on const tables use `.expect("... info missing")`.
//!
//! ## Examples
//! ```rust
//! use sunjar::lexer::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("10 == 10;");
//! assert_eq!(lexer.next_token().literal, "10");
//! assert_eq!(lexer.next_token().literal, "==");
//! ```

pub use sunjar_core::lang;
pub use sunjar_syntax::{ast, diagnostics, lexer, token_helpers};

use miette::Report;
use sunjar_syntax::lexer::Token;

/// Tokenize `source` and turn every lexical diagnostic into a report annotated with `name` and the source text.
///
/// ## Errors
/// Returns one [`Report`] per diagnostic, in source order.
#[tracing::instrument(skip(source), fields(source_len = source.len()))]
pub fn lex_with_reports(name: &str, source: &str) -> Result<Vec<Token>, Vec<Report>> {
    lexer::lex(source).map_err(|errors| {
        tracing::debug!(error_count = errors.len(), "rejecting source");
        errors
            .into_iter()
            .map(|err| err.into_report(name, source))
            .collect()
    })
}
