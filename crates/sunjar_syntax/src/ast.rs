//! Abstract Syntax Tree definitions for Sunjar
//!
//! The tree is two disjoint sum types: [`Statement`] and [`Expression`]. A node of one kind can never stand where
//! the other is expected, which is how a parser enforces grammar position (only an `Expression` can be a call
//! argument, only a `Statement` can sit in a block).
//!
//! Every node keeps the [`Token`] that introduced it, owns its children outright (`Box`, `Vec`, `Option`), and is
//! immutable once built. Each node renders back to source-equivalent text through [`Node::render`]; the rendering
//! rules live in the `display` submodule.

mod display;

use crate::lexer::{Token, TokenKind};
use std::num::{ParseFloatError, ParseIntError};
use sunjar_core::lang::keywords::KeywordId;
use sunjar_core::lang::operators::OperatorId;
use thiserror::Error;

/// Source location span (byte offsets, half-open)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Byte length; an inverted span counts as empty.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Behaviour shared by every node in the tree.
pub trait Node: std::fmt::Display {
    /// Literal text of the token that introduced this node.
    fn token_literal(&self) -> &str;

    /// Reconstructed source text.
    fn render(&self) -> String {
        self.to_string()
    }
}

/// Error converting a literal token into its typed value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    #[error("expected {expected} token, found {found:?}")]
    UnexpectedToken { expected: &'static str, found: TokenKind },

    #[error("invalid integer literal {literal:?}")]
    InvalidInteger {
        literal: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid float literal {literal:?}")]
    InvalidFloat {
        literal: String,
        #[source]
        source: ParseFloatError,
    },
}

fn expect_kind(token: &Token, expected: &'static str, ok: bool) -> Result<(), LiteralError> {
    if ok {
        Ok(())
    } else {
        Err(LiteralError::UnexpectedToken {
            expected,
            found: token.kind,
        })
    }
}

// ============================================================================
// Program
// ============================================================================

/// A program is a sequence of statements, in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Var(VarStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
    Block(BlockStatement),
}

impl Statement {
    /// The token that introduced this statement.
    pub fn token(&self) -> &Token {
        match self {
            Statement::Var(s) => &s.token,
            Statement::Return(s) => &s.token,
            Statement::Expression(s) => &s.token,
            Statement::Block(s) => &s.token,
        }
    }
}

/// `var <name> = <value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct VarStatement {
    /// The `var` keyword.
    pub token: Token,
    pub name: Identifier,
    pub value: Option<Expression>,
}

/// `return <value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    /// The `return` keyword.
    pub token: Token,
    pub value: Option<Expression>,
}

/// An expression in statement position.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    /// First token of the expression.
    pub token: Token,
    pub expression: Option<Expression>,
}

/// `{ <statements> }`
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    /// The `{` token.
    pub token: Token,
    pub statements: Vec<Statement>,
}

impl VarStatement {
    pub fn new(token: Token, name: Identifier, value: Option<Expression>) -> Self {
        Self { token, name, value }
    }
}

impl ReturnStatement {
    pub fn new(token: Token, value: Option<Expression>) -> Self {
        Self { token, value }
    }
}

impl ExpressionStatement {
    pub fn new(token: Token, expression: Option<Expression>) -> Self {
        Self { token, expression }
    }
}

impl BlockStatement {
    pub fn new(token: Token, statements: Vec<Statement>) -> Self {
        Self { token, statements }
    }
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    Float(FloatLiteral),
    String(StringLiteral),
    Boolean(Boolean),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
    If(IfExpression),
    Function(FunctionLiteral),
    Call(CallExpression),
    For(ForExpression),
    Array(ArrayLiteral),
    Hash(HashLiteral),
    Index(IndexExpression),
}

impl Expression {
    /// The token that introduced this expression.
    pub fn token(&self) -> &Token {
        match self {
            Expression::Identifier(e) => &e.token,
            Expression::Integer(e) => &e.token,
            Expression::Float(e) => &e.token,
            Expression::String(e) => &e.token,
            Expression::Boolean(e) => &e.token,
            Expression::Prefix(e) => &e.token,
            Expression::Infix(e) => &e.token,
            Expression::If(e) => &e.token,
            Expression::Function(e) => &e.token,
            Expression::Call(e) => &e.token,
            Expression::For(e) => &e.token,
            Expression::Array(e) => &e.token,
            Expression::Hash(e) => &e.token,
            Expression::Index(e) => &e.token,
        }
    }
}

// --- leaves ------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token,
    pub name: String,
}

impl Identifier {
    pub fn from_token(token: Token) -> Result<Self, LiteralError> {
        expect_kind(&token, "identifier", token.kind == TokenKind::Ident)?;
        Ok(Self {
            name: token.literal.clone(),
            token,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

impl IntegerLiteral {
    pub fn from_token(token: Token) -> Result<Self, LiteralError> {
        expect_kind(&token, "integer", token.kind == TokenKind::Int)?;
        let value = token
            .literal
            .parse()
            .map_err(|source| LiteralError::InvalidInteger {
                literal: token.literal.clone(),
                source,
            })?;
        Ok(Self { token, value })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FloatLiteral {
    pub token: Token,
    pub value: f64,
}

impl FloatLiteral {
    /// Rejects literals the lexer accepted permissively, such as `5.5.5`.
    pub fn from_token(token: Token) -> Result<Self, LiteralError> {
        expect_kind(&token, "float", token.kind == TokenKind::Float)?;
        let value = token
            .literal
            .parse()
            .map_err(|source| LiteralError::InvalidFloat {
                literal: token.literal.clone(),
                source,
            })?;
        Ok(Self { token, value })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StringLiteral {
    pub token: Token,
    pub value: String,
}

impl StringLiteral {
    pub fn from_token(token: Token) -> Result<Self, LiteralError> {
        expect_kind(&token, "string", matches!(token.kind, TokenKind::String { .. }))?;
        Ok(Self {
            value: token.literal.clone(),
            token,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Boolean {
    pub token: Token,
    pub value: bool,
}

impl Boolean {
    pub fn from_token(token: Token) -> Result<Self, LiteralError> {
        let value = match token.keyword_id() {
            Some(KeywordId::True) => true,
            Some(KeywordId::False) => false,
            _ => {
                return Err(LiteralError::UnexpectedToken {
                    expected: "boolean",
                    found: token.kind,
                });
            }
        };
        Ok(Self { token, value })
    }
}

// --- operators ---------------------------------------------------------------

/// `(<op><right>)`
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpression {
    /// The operator token, e.g. `!`.
    pub token: Token,
    pub operator: OperatorId,
    pub right: Box<Expression>,
}

impl PrefixExpression {
    pub fn new(token: Token, operator: OperatorId, right: Expression) -> Self {
        Self {
            token,
            operator,
            right: Box::new(right),
        }
    }
}

/// `(<left> <op> <right>)`
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpression {
    /// The operator token, e.g. `+`.
    pub token: Token,
    pub left: Box<Expression>,
    pub operator: OperatorId,
    pub right: Box<Expression>,
}

impl InfixExpression {
    pub fn new(token: Token, left: Expression, operator: OperatorId, right: Expression) -> Self {
        Self {
            token,
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }
}

// --- control flow ------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct IfExpression {
    /// The `if` keyword.
    pub token: Token,
    pub condition: Box<Expression>,
    pub consequence: BlockStatement,
    pub alternative: Option<BlockStatement>,
}

impl IfExpression {
    pub fn new(
        token: Token,
        condition: Expression,
        consequence: BlockStatement,
        alternative: Option<BlockStatement>,
    ) -> Self {
        Self {
            token,
            condition: Box::new(condition),
            consequence,
            alternative,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForExpression {
    /// The `for` keyword.
    pub token: Token,
    pub condition: Box<Expression>,
    pub body: BlockStatement,
}

impl ForExpression {
    pub fn new(token: Token, condition: Expression, body: BlockStatement) -> Self {
        Self {
            token,
            condition: Box::new(condition),
            body,
        }
    }
}

// --- functions ---------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionLiteral {
    /// The `fn` keyword.
    pub token: Token,
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
}

impl FunctionLiteral {
    pub fn new(token: Token, parameters: Vec<Identifier>, body: BlockStatement) -> Self {
        Self {
            token,
            parameters,
            body,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    /// The `(` token.
    pub token: Token,
    /// Identifier or function literal.
    pub function: Box<Expression>,
    pub arguments: Vec<Expression>,
}

impl CallExpression {
    pub fn new(token: Token, function: Expression, arguments: Vec<Expression>) -> Self {
        Self {
            token,
            function: Box::new(function),
            arguments,
        }
    }
}

// --- collections -------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayLiteral {
    /// The `[` token.
    pub token: Token,
    pub elements: Vec<Expression>,
}

impl ArrayLiteral {
    pub fn new(token: Token, elements: Vec<Expression>) -> Self {
        Self { token, elements }
    }
}

/// `{k: v, ...}`
///
/// Pairs are kept in source order so rendering is deterministic. Duplicate keys are kept as written; deciding
/// what they mean is up to the evaluator.
#[derive(Debug, Clone, PartialEq)]
pub struct HashLiteral {
    /// The `{` token.
    pub token: Token,
    pub pairs: Vec<(Expression, Expression)>,
}

impl HashLiteral {
    pub fn new(token: Token, pairs: Vec<(Expression, Expression)>) -> Self {
        Self { token, pairs }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndexExpression {
    /// The `[` token.
    pub token: Token,
    pub left: Box<Expression>,
    pub index: Box<Expression>,
}

impl IndexExpression {
    pub fn new(token: Token, left: Expression, index: Expression) -> Self {
        Self {
            token,
            left: Box::new(left),
            index: Box::new(index),
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

macro_rules! impl_from_variant {
    ($sum:ident :: $variant:ident ($node:ty)) => {
        impl From<$node> for $sum {
            fn from(node: $node) -> Self {
                $sum::$variant(node)
            }
        }
    };
}

impl_from_variant!(Statement::Var(VarStatement));
impl_from_variant!(Statement::Return(ReturnStatement));
impl_from_variant!(Statement::Expression(ExpressionStatement));
impl_from_variant!(Statement::Block(BlockStatement));

impl_from_variant!(Expression::Identifier(Identifier));
impl_from_variant!(Expression::Integer(IntegerLiteral));
impl_from_variant!(Expression::Float(FloatLiteral));
impl_from_variant!(Expression::String(StringLiteral));
impl_from_variant!(Expression::Boolean(Boolean));
impl_from_variant!(Expression::Prefix(PrefixExpression));
impl_from_variant!(Expression::Infix(InfixExpression));
impl_from_variant!(Expression::If(IfExpression));
impl_from_variant!(Expression::Function(FunctionLiteral));
impl_from_variant!(Expression::Call(CallExpression));
impl_from_variant!(Expression::For(ForExpression));
impl_from_variant!(Expression::Array(ArrayLiteral));
impl_from_variant!(Expression::Hash(HashLiteral));
impl_from_variant!(Expression::Index(IndexExpression));

// ============================================================================
// Node
// ============================================================================

impl Node for Program {
    fn token_literal(&self) -> &str {
        self.statements.first().map_or("", |s| s.token_literal())
    }
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        &self.token().literal
    }
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        &self.token().literal
    }
}

macro_rules! impl_node {
    ($($node:ty),* $(,)?) => {
        $(
            impl Node for $node {
                fn token_literal(&self) -> &str {
                    &self.token.literal
                }
            }
        )*
    };
}

impl_node!(
    VarStatement,
    ReturnStatement,
    ExpressionStatement,
    BlockStatement,
    Identifier,
    IntegerLiteral,
    FloatLiteral,
    StringLiteral,
    Boolean,
    PrefixExpression,
    InfixExpression,
    IfExpression,
    ForExpression,
    FunctionLiteral,
    CallExpression,
    ArrayLiteral,
    HashLiteral,
    IndexExpression,
);
