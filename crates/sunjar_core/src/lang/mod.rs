//! Sunjar language vocabulary registries.
//!
//! This module is the "front door" for language-level vocabulary: reserved keywords, operators, and punctuation.
//!
//! Callers work with **stable IDs** (e.g. `KeywordId`, `OperatorId`) and look up spellings/metadata via registry
//! tables instead of comparing strings at call sites.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - The lexer enforces lexical structure; registries provide spellings and metadata for shared use (rendering,
//!   diagnostics, parser precedence).
//!
//! ## Examples
//! ```rust
//! use sunjar_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("if"), Some(KeywordId::If));
//! assert_eq!(keywords::as_str(KeywordId::If), "if");
//! ```

pub mod keywords;
pub mod operators;
pub mod punctuation;
pub mod registry;
