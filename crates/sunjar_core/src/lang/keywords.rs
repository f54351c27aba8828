//! Define the reserved keyword vocabulary for the Sunjar language.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) that records canonical spellings, aliases and categories.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**, except where explicit aliases are defined.
//! - This registry is intentionally **pure** (no AST/IO/side effects).
//!
//! ## Examples
//! ```rust
//! use sunjar_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("var"), Some(KeywordId::Var));
//! assert_eq!(keywords::from_str("five"), None);
//! assert_eq!(keywords::as_str(KeywordId::Return), "return");
//! ```
//!
//! ## See also
//! - [`crate::lang::operators`] for operator precedence/fixity metadata.

use super::registry::{Since, Stability};

/// Stable identifier for every reserved keyword.
///
/// ## Examples
/// ```rust
/// use sunjar_core::lang::keywords::{self, KeywordId};
///
/// assert_eq!(keywords::from_str("fn"), Some(KeywordId::Fn));
/// assert_eq!(keywords::from_str("function"), Some(KeywordId::Fn)); // alias
/// assert_eq!(keywords::as_str(KeywordId::Fn), "fn");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Control flow
    If,
    Else,
    For,
    Return,

    // Definitions / bindings
    Fn,
    Var,

    // Literals
    True,
    False,
}

/// High-level grouping for documentation and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    ControlFlow,
    Definition,
    Binding,
    Literal,
}

/// Metadata for a keyword.
///
/// ## Notes
/// - `canonical` is the preferred spelling for docs and emission.
/// - `aliases` are additional spellings accepted by the lexer.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub category: KeywordCategory,
    pub since: Since,
    pub stability: Stability,
}

/// Every reserved word of the language. Order only groups related entries.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Control flow
    info(KeywordId::If, "if", &[], KeywordCategory::ControlFlow),
    info(KeywordId::Else, "else", &[], KeywordCategory::ControlFlow),
    info(KeywordId::For, "for", &[], KeywordCategory::ControlFlow),
    info(KeywordId::Return, "return", &[], KeywordCategory::ControlFlow),
    // Definitions / bindings
    info(KeywordId::Fn, "fn", &["function"], KeywordCategory::Definition),
    info(KeywordId::Var, "var", &[], KeywordCategory::Binding),
    // Literals
    info(KeywordId::True, "true", &[], KeywordCategory::Literal),
    info(KeywordId::False, "false", &[], KeywordCategory::Literal),
];

/// Canonical spelling, as printed by the renderer.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Accepted alias spellings.
pub fn aliases(id: KeywordId) -> &'static [&'static str] {
    info_for(id).aliases
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata. Panics only if [`KEYWORDS`] lacks a row for `id`.
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling (canonical or alias).
///
/// This is the identifier-to-keyword resolution the lexer runs on every scanned word.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling is reserved.
/// - `None` otherwise (the word is a plain identifier).
pub fn from_str(s: &str) -> Option<KeywordId> {
    if let Some(k) = KEYWORDS.iter().find(|k| k.canonical == s) {
        return Some(k.id);
    }
    KEYWORDS
        .iter()
        .find(|k| {
            let aliases: &[&str] = k.aliases;
            aliases.contains(&s)
        })
        .map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: KeywordId,
    canonical: &'static str,
    aliases: &'static [&'static str],
    category: KeywordCategory,
) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        aliases,
        category,
        since: Since(0, 1),
        stability: Stability::Stable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(from_str("If"), None);
        assert_eq!(from_str("VAR"), None);
    }

    #[test]
    fn literal_keywords_are_categorized() {
        assert_eq!(category(KeywordId::True), KeywordCategory::Literal);
        assert_eq!(category(KeywordId::False), KeywordCategory::Literal);
        assert_eq!(aliases(KeywordId::Fn), &["function"]);
    }
}
