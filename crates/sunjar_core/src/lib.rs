//! Provide the canonical language vocabulary for the Sunjar front end.
//!
//! This crate is intentionally small and dependency-free. It answers "what does this spelling mean?" for the
//! tokenizer, and "how is this id spelled?" for anything that renders source text back out.
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global state, and no syntax-tree types.
//! - Tokenizing lives in `sunjar_syntax::lexer`; this crate only owns spellings and metadata.

pub mod lang;
