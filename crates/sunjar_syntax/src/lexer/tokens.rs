//! Token types for the Sunjar lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Operator(OperatorId)` for operators
//! - `Punctuation(PunctuationId)` for delimiters and separators
//!
//! ## Notes
//! - Every token owns a copy of the text it was scanned from (`literal`), so tokens and the AST built from them
//!   never borrow the source buffer.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use crate::ast::Span;
use sunjar_core::lang::keywords::{self, KeywordId};
use sunjar_core::lang::operators::OperatorId;
use sunjar_core::lang::punctuation::PunctuationId;

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
///
/// ## Notes
/// - Kinds carry no text; the scanned text lives in [`Token::literal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    Ident,
    Int,
    Float,
    /// `terminated` is `false` when end of input was reached before the closing quote.
    String {
        terminated: bool,
    },

    // ========== Special ==========
    /// A character that starts no token. The literal holds that one character.
    Illegal,
    /// End of input; the literal is empty.
    Eof,
}

/// A token with its kind, scanned text and source span.
///
/// ## Notes
/// - For string tokens `literal` excludes the quotes while `span` covers them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, literal: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            literal: literal.into(),
            span,
        }
    }

    /// The end-of-input token positioned at byte offset `at`.
    pub fn eof(at: usize) -> Self {
        Self::new(TokenKind::Eof, String::new(), Span::new(at, at))
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}

/// Resolve a scanned word to its token kind: the keyword if reserved, else [`TokenKind::Ident`].
pub fn lookup_ident(name: &str) -> TokenKind {
    keyword_id(name).map_or(TokenKind::Ident, TokenKind::Keyword)
}
