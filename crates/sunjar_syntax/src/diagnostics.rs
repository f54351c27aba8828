//! Lexical diagnostics for Sunjar.
//!
//! The lexer never fails: it encodes malformed input in the token stream instead. This module is the optional
//! second pass that reads such tokens back out as errors with labelled source spans, rendered through `miette`.
//!
//! ## Examples
//! ```rust
//! use sunjar_syntax::{diagnostics, lexer};
//!
//! let tokens = lexer::tokenize("var x = 5.5.5;");
//! let errors = diagnostics::check(&tokens);
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors[0].to_string(), "malformed number literal \"5.5.5\"");
//! ```

use crate::ast::Span;
use crate::lexer::{Token, TokenKind};
use miette::{Diagnostic, NamedSource, Report, SourceSpan};
use thiserror::Error;

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        (span.start..span.end).into()
    }
}

/// A problem found in an otherwise complete token stream.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum LexDiagnostic {
    #[error("illegal character {literal:?}")]
    #[diagnostic(code(sunjar::lex::illegal_character))]
    IllegalCharacter {
        literal: String,
        #[label("not valid here")]
        span: SourceSpan,
    },

    #[error("unterminated string literal")]
    #[diagnostic(
        code(sunjar::lex::unterminated_string),
        help("add a closing `\"` before the end of the input")
    )]
    UnterminatedString {
        #[label("string starts here")]
        span: SourceSpan,
    },

    #[error("malformed number literal {literal:?}")]
    #[diagnostic(
        code(sunjar::lex::malformed_number),
        help("a number may contain at most one `.` and at least one digit")
    )]
    MalformedNumber {
        literal: String,
        #[label("not a valid number")]
        span: SourceSpan,
    },
}

impl LexDiagnostic {
    /// Source span of the offending token.
    pub fn span(&self) -> Span {
        let span = match self {
            LexDiagnostic::IllegalCharacter { span, .. }
            | LexDiagnostic::UnterminatedString { span }
            | LexDiagnostic::MalformedNumber { span, .. } => span,
        };
        Span::new(span.offset(), span.offset() + span.len())
    }

    /// Attach the named source text so the diagnostic renders with context.
    pub fn into_report(self, name: impl AsRef<str>, source: impl Into<String>) -> Report {
        Report::new(self).with_source_code(NamedSource::new(name, source.into()))
    }

    /// Diagnose a single token, if it encodes malformed input.
    pub fn from_token(token: &Token) -> Option<Self> {
        let span = SourceSpan::from(token.span);
        match token.kind {
            TokenKind::Illegal => Some(LexDiagnostic::IllegalCharacter {
                literal: token.literal.clone(),
                span,
            }),
            TokenKind::String { terminated: false } => Some(LexDiagnostic::UnterminatedString { span }),
            TokenKind::Float if token.literal.parse::<f64>().is_err() => Some(LexDiagnostic::MalformedNumber {
                literal: token.literal.clone(),
                span,
            }),
            _ => None,
        }
    }
}

/// Collect every lexical diagnostic in a token stream, in source order.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn check(tokens: &[Token]) -> Vec<LexDiagnostic> {
    let errors: Vec<LexDiagnostic> = tokens.iter().filter_map(LexDiagnostic::from_token).collect();
    if !errors.is_empty() {
        tracing::debug!(error_count = errors.len(), "lexical diagnostics found");
    }
    errors
}
