//! Operator vocabulary.
//!
//! This module defines the canonical operator set along with the metadata a Pratt-style parser needs: binding
//! precedence and whether an operator may appear in prefix and/or infix position.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - `=` is listed here (as [`OperatorId::Assign`]) even though it only appears in `var` statements; it binds at
//!   [`Precedence::Lowest`] so a parser never folds it into an expression.
//!
//! ## Examples
//! ```rust
//! use sunjar_core::lang::operators::{self, OperatorId, Precedence};
//!
//! assert_eq!(operators::from_str("+"), Some(OperatorId::Plus));
//! assert_eq!(operators::precedence(OperatorId::Star), Precedence::Product);
//! assert!(Precedence::Product > Precedence::Sum);
//! ```

use super::registry::{Since, Stability};

/// Binding power, lowest first. Derived ordering is the precedence ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    Lowest,
    /// `==`, `!=`
    Equals,
    /// `<`, `>`
    LessGreater,
    /// `+`, `-`
    Sum,
    /// `*`, `/`
    Product,
    /// `-x`, `!x`
    Prefix,
    /// `f(x)`
    Call,
    /// `xs[i]`
    Index,
}

/// Define whether an operator may be used infix (binary) or prefix (unary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
    Infix,
    Prefix,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,

    // Logical
    Bang,

    // Comparison
    EqEq,
    NotEq,
    Lt,
    Gt,

    // Binding
    Assign,
}

/// Metadata for an operator.
///
/// ## Notes
/// - `precedence` is the *infix* binding power. Prefix operators always bind at [`Precedence::Prefix`].
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub precedence: Precedence,
    pub fixity: &'static [Fixity],
    pub since: Since,
    pub stability: Stability,
}

const INFIX: &[Fixity] = &[Fixity::Infix];
const PREFIX: &[Fixity] = &[Fixity::Prefix];
const PREFIX_OR_INFIX: &[Fixity] = &[Fixity::Prefix, Fixity::Infix];

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Arithmetic
    op(OperatorId::Plus, "+", Precedence::Sum, INFIX),
    op(OperatorId::Minus, "-", Precedence::Sum, PREFIX_OR_INFIX),
    op(OperatorId::Star, "*", Precedence::Product, INFIX),
    op(OperatorId::Slash, "/", Precedence::Product, INFIX),
    // Logical
    op(OperatorId::Bang, "!", Precedence::Prefix, PREFIX),
    // Comparison
    op(OperatorId::EqEq, "==", Precedence::Equals, INFIX),
    op(OperatorId::NotEq, "!=", Precedence::Equals, INFIX),
    op(OperatorId::Lt, "<", Precedence::LessGreater, INFIX),
    op(OperatorId::Gt, ">", Precedence::LessGreater, INFIX),
    // Binding
    op(OperatorId::Assign, "=", Precedence::Lowest, &[]),
];

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Return the spelling of an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Return the infix binding power of an operator.
pub fn precedence(id: OperatorId) -> Precedence {
    info_for(id).precedence
}

/// Return `true` if the operator may start a prefix expression.
pub fn is_prefix(id: OperatorId) -> bool {
    info_for(id).fixity.contains(&Fixity::Prefix)
}

/// Return `true` if the operator may join two operands.
pub fn is_infix(id: OperatorId) -> bool {
    info_for(id).fixity.contains(&Fixity::Infix)
}

/// Resolve an operator spelling to its identifier.
///
/// ## Returns
/// - `Some(OperatorId)` if the spelling exists in [`OPERATORS`].
/// - `None` otherwise.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

// --- helpers -----------------------------------------------------------------

const fn op(id: OperatorId, spelling: &'static str, precedence: Precedence, fixity: &'static [Fixity]) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        precedence,
        fixity,
        since: Since(0, 1),
        stability: Stability::Stable,
    }
}
