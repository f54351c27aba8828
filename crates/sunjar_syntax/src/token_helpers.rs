//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it easy to work with
//! ID-based tokens.

use crate::lexer::{Token, TokenKind};
use sunjar_core::lang::keywords::{self, KeywordCategory, KeywordId};
use sunjar_core::lang::operators::OperatorId;
use sunjar_core::lang::punctuation::PunctuationId;

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return the operator id, if this is an operator token.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    /// Return the punctuation id, if this is a punctuation token.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        match self {
            TokenKind::Punctuation(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    /// Return `true` for integer, float and string tokens, and for keywords the registry files under
    /// [`KeywordCategory::Literal`].
    pub fn is_literal(&self) -> bool {
        match self {
            TokenKind::Int | TokenKind::Float | TokenKind::String { .. } => true,
            TokenKind::Keyword(id) => keywords::category(*id) == KeywordCategory::Literal,
            _ => false,
        }
    }

    /// Return `true` for the end-of-input token.
    pub fn is_eof(&self) -> bool {
        matches!(self, TokenKind::Eof)
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    /// Convenience wrapper for `self.kind.operator_id()`.
    pub fn operator_id(&self) -> Option<OperatorId> {
        self.kind.operator_id()
    }

    /// Convenience wrapper for `self.kind.punctuation_id()`.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        self.kind.punctuation_id()
    }

    /// Convenience wrapper for `self.kind.is_eof()`.
    pub fn is_eof(&self) -> bool {
        self.kind.is_eof()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_accessors_only_match_their_own_family() {
        let kind = TokenKind::Operator(OperatorId::Plus);
        assert_eq!(kind.operator_id(), Some(OperatorId::Plus));
        assert_eq!(kind.keyword_id(), None);
        assert_eq!(kind.punctuation_id(), None);
        assert!(kind.is_operator(OperatorId::Plus));
        assert!(!kind.is_operator(OperatorId::Minus));
    }

    #[test]
    fn literal_kinds() {
        assert!(TokenKind::Int.is_literal());
        assert!(TokenKind::String { terminated: false }.is_literal());
        assert!(TokenKind::Keyword(KeywordId::True).is_literal());
        assert!(!TokenKind::Keyword(KeywordId::Var).is_literal());
        assert!(!TokenKind::Ident.is_literal());
    }

    #[test]
    fn literal_keywords_follow_registry_category() {
        for k in keywords::KEYWORDS {
            let literal = TokenKind::Keyword(k.id).is_literal();
            assert_eq!(literal, k.category == KeywordCategory::Literal, "{:?}", k.id);
        }
    }
}
