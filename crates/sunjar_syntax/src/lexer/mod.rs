//! Lexer for the Sunjar programming language
//!
//! Pull-based: every call to [`Lexer::next_token`] scans exactly one token, with one character of lookahead and
//! no backtracking.
//!
//! Handles:
//! - Keywords (fn, var, return, if, else, true, false, for) and identifiers
//! - Integer, float and string literals
//! - Operators (`==` and `!=` are the only two-character ones) and punctuation
//!
//! The lexer itself never fails. Malformed input becomes an [`TokenKind::Illegal`] token, a string token with
//! `terminated: false`, or a float literal with more than one `.`; [`crate::diagnostics::check`] turns those into
//! reportable diagnostics when a caller wants them.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)

pub mod tokens;

pub use tokens::{Token, TokenKind, keyword_id, lookup_ident};

use crate::ast::Span;
use crate::diagnostics::{self, LexDiagnostic};
use std::iter::{FusedIterator, Peekable};
use std::str::CharIndices;
use sunjar_core::lang::operators::OperatorId;
use sunjar_core::lang::punctuation::PunctuationId;

// ============================================================================
// LEXER STATE
// ============================================================================

/// Lexer for Sunjar source code.
///
/// Borrows the source immutably for its whole lifetime; tokens copy their literal out of it, so they can outlive
/// the lexer and the buffer.
pub struct Lexer<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
    /// Byte offset just past the last consumed character.
    current_pos: usize,
    /// Set once the iterator has yielded `Eof`.
    eof_emitted: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            eof_emitted: false,
        }
    }

    /// Scan and return the next token.
    ///
    /// Once input is exhausted every call returns an `Eof` token positioned at the end of the source.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.current_pos;

        let Some(c) = self.advance() else {
            return Token::eof(start);
        };

        match c {
            // Strings
            '"' => self.scan_string(start),

            // Operators
            '=' => self.operator(start, OperatorId::Assign, ('=', OperatorId::EqEq)),
            '!' => self.operator(start, OperatorId::Bang, ('=', OperatorId::NotEq)),
            '+' => self.op(OperatorId::Plus, start),
            '-' => self.op(OperatorId::Minus, start),
            '*' => self.op(OperatorId::Star, start),
            '/' => self.op(OperatorId::Slash, start),
            '<' => self.op(OperatorId::Lt, start),
            '>' => self.op(OperatorId::Gt, start),

            // Punctuation
            ',' => self.punct(PunctuationId::Comma, start),
            ';' => self.punct(PunctuationId::Semicolon, start),
            ':' => self.punct(PunctuationId::Colon, start),
            '(' => self.punct(PunctuationId::LParen, start),
            ')' => self.punct(PunctuationId::RParen, start),
            '{' => self.punct(PunctuationId::LBrace, start),
            '}' => self.punct(PunctuationId::RBrace, start),
            '[' => self.punct(PunctuationId::LBracket, start),
            ']' => self.punct(PunctuationId::RBracket, start),

            // Numbers
            _ if is_number_char(c) => self.scan_number(start),

            // Identifiers and keywords
            _ if is_ident_char(c) => self.scan_identifier(start),

            _ => self.token(TokenKind::Illegal, start),
        }
    }

    /// Collect every remaining token, ending with exactly one `Eof`.
    pub fn tokenize(self) -> Vec<Token> {
        self.collect()
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn advance(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.current_pos = pos + c.len_utf8();
        Some(c)
    }

    /// Consume characters while `pred` holds for the lookahead.
    fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
    }

    fn skip_whitespace(&mut self) {
        self.advance_while(is_whitespace);
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    // ========================================================================
    // Token construction
    // ========================================================================

    /// Build a token whose literal is everything consumed since `start`.
    fn token(&self, kind: TokenKind, start: usize) -> Token {
        let span = Span::new(start, self.current_pos);
        Token::new(kind, &self.source[start..self.current_pos], span)
    }

    fn op(&self, id: OperatorId, start: usize) -> Token {
        self.token(TokenKind::Operator(id), start)
    }

    fn punct(&self, id: PunctuationId, start: usize) -> Token {
        self.token(TokenKind::Punctuation(id), start)
    }

    /// Match a two-character operator, falling back to the single-character one.
    fn operator(&mut self, start: usize, simple: OperatorId, (next, compound): (char, OperatorId)) -> Token {
        if self.match_char(next) {
            self.op(compound, start)
        } else {
            self.op(simple, start)
        }
    }

    // ========================================================================
    // Literal scanning
    // ========================================================================

    /// Scan a string body after its opening quote. The literal excludes both quotes; the span includes them.
    fn scan_string(&mut self, start: usize) -> Token {
        let body_start = self.current_pos;
        let mut terminated = false;
        let mut body_end = body_start;

        while let Some(c) = self.advance() {
            if c == '"' {
                terminated = true;
                break;
            }
            body_end = self.current_pos;
        }

        Token::new(
            TokenKind::String { terminated },
            &self.source[body_start..body_end],
            Span::new(start, self.current_pos),
        )
    }

    /// Scan a run of digits and dots. Any `.` makes it a float, however many there are.
    fn scan_number(&mut self, start: usize) -> Token {
        self.advance_while(is_number_char);

        let kind = if self.source[start..self.current_pos].contains('.') {
            TokenKind::Float
        } else {
            TokenKind::Int
        };
        self.token(kind, start)
    }

    fn scan_identifier(&mut self, start: usize) -> Token {
        self.advance_while(is_ident_char);

        let spelling = &self.source[start..self.current_pos];
        self.token(lookup_ident(spelling), start)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yield tokens up to and including the first `Eof`, then `None`.
    fn next(&mut self) -> Option<Token> {
        if self.eof_emitted {
            return None;
        }
        let token = self.next_token();
        if token.is_eof() {
            self.eof_emitted = true;
        }
        Some(token)
    }
}

impl FusedIterator for Lexer<'_> {}

// ============================================================================
// Helper functions
// ============================================================================

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Letters and `_` (ASCII-only). Digits never continue an identifier.
fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Digits and `.`; a number may start with either.
fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Tokenize a whole source string. Never fails; the result always ends with one `Eof` token.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}

/// Tokenize a source string and reject it if any lexical diagnostic applies.
///
/// ## Errors
/// Returns every [`LexDiagnostic`] found by [`diagnostics::check`], in source order.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, Vec<LexDiagnostic>> {
    let tokens = Lexer::new(source).tokenize();
    let errors = diagnostics::check(&tokens);
    if errors.is_empty() { Ok(tokens) } else { Err(errors) }
}

// ============================================================================
// TESTS
// ============================================================================
