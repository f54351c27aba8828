//! Syntax front end for the Sunjar language: tokenizer, AST, lexical diagnostics.
//!
//! This crate is dependency-light and intended for reuse by a parser, an evaluator, and interactive tooling.
//!
//! ## Notes
//! - This crate is intentionally "syntax-only": there is no parser and no evaluation here. A parser pulls tokens
//!   from [`lexer::Lexer`] and assembles the node types in [`ast`].
//! - Vocabulary identity (keywords/operators/punctuation) comes from `sunjar_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use sunjar_syntax::lexer::{self, TokenKind};
//!
//! let tokens = lexer::tokenize("var five = 5;");
//! assert_eq!(tokens.len(), 6);
//! assert_eq!(tokens[1].kind, TokenKind::Ident);
//! assert_eq!(tokens[1].literal, "five");
//! ```
//!
//! ## See also
//! - `sunjar_core::lang` for registry-backed language vocabulary.

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod token_helpers;
