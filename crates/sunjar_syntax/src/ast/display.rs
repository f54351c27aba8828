//! Source-text rendering for AST nodes.
//!
//! Rendering is fully parenthesized and whitespace-normalized, so two programs that parse to the same tree render
//! identically. Everything writes into the caller's `Formatter`; no intermediate strings are built per node.

use super::*;
use std::fmt::{self, Display, Formatter};
use sunjar_core::lang::operators;

/// Write `items` separated by `sep`.
fn write_joined<T: Display>(f: &mut Formatter<'_>, items: &[T], sep: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

fn write_optional<T: Display>(f: &mut Formatter<'_>, item: Option<&T>) -> fmt::Result {
    match item {
        Some(item) => write!(f, "{item}"),
        None => Ok(()),
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.statements, "")
    }
}

// ============================================================================
// Statements
// ============================================================================

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Var(s) => Display::fmt(s, f),
            Statement::Return(s) => Display::fmt(s, f),
            Statement::Expression(s) => Display::fmt(s, f),
            Statement::Block(s) => Display::fmt(s, f),
        }
    }
}

impl Display for VarStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} = ", self.token.literal, self.name)?;
        write_optional(f, self.value.as_ref())?;
        f.write_str(";")
    }
}

impl Display for ReturnStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.token.literal)?;
        write_optional(f, self.value.as_ref())?;
        f.write_str(";")
    }
}

impl Display for ExpressionStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_optional(f, self.expression.as_ref())
    }
}

/// Braces are not re-emitted.
impl Display for BlockStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.statements, "")
    }
}

// ============================================================================
// Expressions
// ============================================================================

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(e) => Display::fmt(e, f),
            Expression::Integer(e) => Display::fmt(e, f),
            Expression::Float(e) => Display::fmt(e, f),
            Expression::String(e) => Display::fmt(e, f),
            Expression::Boolean(e) => Display::fmt(e, f),
            Expression::Prefix(e) => Display::fmt(e, f),
            Expression::Infix(e) => Display::fmt(e, f),
            Expression::If(e) => Display::fmt(e, f),
            Expression::Function(e) => Display::fmt(e, f),
            Expression::Call(e) => Display::fmt(e, f),
            Expression::For(e) => Display::fmt(e, f),
            Expression::Array(e) => Display::fmt(e, f),
            Expression::Hash(e) => Display::fmt(e, f),
            Expression::Index(e) => Display::fmt(e, f),
        }
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

// Literals render exactly as scanned, so `5.50` stays `5.50` and strings stay unquoted.
macro_rules! display_as_scanned {
    ($($node:ty),* $(,)?) => {
        $(
            impl Display for $node {
                fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.token.literal)
                }
            }
        )*
    };
}

display_as_scanned!(IntegerLiteral, FloatLiteral, StringLiteral, Boolean);

impl Display for PrefixExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}{})", operators::as_str(self.operator), self.right)
    }
}

impl Display for InfixExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, operators::as_str(self.operator), self.right)
    }
}

impl Display for IfExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "if{} {}", self.condition, self.consequence)?;
        if let Some(alternative) = &self.alternative {
            write!(f, "else {alternative}")?;
        }
        Ok(())
    }
}

impl Display for ForExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "for{} {}", self.condition, self.body)
    }
}

impl Display for FunctionLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.token.literal)?;
        write_joined(f, &self.parameters, ", ")?;
        write!(f, "){}", self.body)
    }
}

impl Display for CallExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.function)?;
        write_joined(f, &self.arguments, ", ")?;
        f.write_str(")")
    }
}

impl Display for ArrayLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        write_joined(f, &self.elements, ", ")?;
        f.write_str("]")
    }
}

impl Display for HashLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}:{value}")?;
        }
        f.write_str("}")
    }
}

impl Display for IndexExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}[{}])", self.left, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;

    /// Pulls tokens out of a snippet in order, so test trees carry real tokens.
    struct Tokens<'a>(Lexer<'a>);

    impl<'a> Tokens<'a> {
        fn new(source: &'a str) -> Self {
            Self(Lexer::new(source))
        }

        fn next(&mut self) -> Token {
            self.0.next_token()
        }

        fn ident(&mut self) -> Identifier {
            Identifier::from_token(self.next()).unwrap()
        }

        fn int(&mut self) -> Expression {
            IntegerLiteral::from_token(self.next()).unwrap().into()
        }
    }

    #[test]
    fn var_statement() {
        let mut t = Tokens::new("var myVar = anotherVar");
        let var = t.next();
        let name = t.ident();
        let _assign = t.next();
        let value = t.ident().into();
        let stmt = VarStatement::new(var, name, Some(value));
        assert_eq!(stmt.render(), "var myVar = anotherVar;");
    }

    #[test]
    fn var_and_return_without_value() {
        let mut t = Tokens::new("var x return");
        let var = t.next();
        let name = t.ident();
        assert_eq!(VarStatement::new(var, name, None).render(), "var x = ;");
        assert_eq!(ReturnStatement::new(t.next(), None).render(), "return ;");
    }

    #[test]
    fn empty_expression_statement_renders_nothing() {
        let mut t = Tokens::new(";");
        assert_eq!(ExpressionStatement::new(t.next(), None).render(), "");
    }

    #[test]
    fn infix_expression_statement() {
        let mut t = Tokens::new("5 + 5");
        let left = t.int();
        let plus = t.next();
        let right = t.int();
        let first = left.token().clone();
        let sum = InfixExpression::new(plus, left, OperatorId::Plus, right);
        let stmt = ExpressionStatement::new(first, Some(sum.into()));
        assert_eq!(stmt.render(), "(5 + 5)");
    }

    #[test]
    fn nested_prefix_and_infix() {
        // -a * b
        let mut t = Tokens::new("- a * b");
        let minus = t.next();
        let a = t.ident().into();
        let neg: Expression = PrefixExpression::new(minus, OperatorId::Minus, a).into();
        let star = t.next();
        let b = t.ident().into();
        let product = InfixExpression::new(star, neg, OperatorId::Star, b);
        assert_eq!(product.render(), "((-a) * b)");
    }

    #[test]
    fn if_without_alternative_has_no_else() {
        let mut t = Tokens::new("if x < y { return x; }");
        let if_tok = t.next();
        let x = t.ident().into();
        let lt = t.next();
        let y = t.ident().into();
        let cond = InfixExpression::new(lt, x, OperatorId::Lt, y);
        let lbrace = t.next();
        let ret = t.next();
        let ret_value = t.ident().into();
        let block = BlockStatement::new(lbrace, vec![ReturnStatement::new(ret, Some(ret_value)).into()]);
        let expr = IfExpression::new(if_tok, cond.into(), block, None);
        assert_eq!(expr.render(), "if(x < y) return x;");
    }

    #[test]
    fn if_with_alternative() {
        let mut t = Tokens::new("if c { x } else { y }");
        let if_tok = t.next();
        let cond = t.ident().into();
        let lbrace = t.next();
        let x: Expression = t.ident().into();
        let consequence = BlockStatement::new(
            lbrace,
            vec![ExpressionStatement::new(x.token().clone(), Some(x)).into()],
        );
        let _rbrace = t.next();
        let _else = t.next();
        let lbrace = t.next();
        let y: Expression = t.ident().into();
        let alternative = BlockStatement::new(
            lbrace,
            vec![ExpressionStatement::new(y.token().clone(), Some(y)).into()],
        );
        let expr = IfExpression::new(if_tok, cond, consequence, Some(alternative));
        assert_eq!(expr.render(), "ifc xelse y");
    }

    #[test]
    fn function_literal_and_call() {
        let mut t = Tokens::new("fn ( x , y ) { x } add ( 1 , 2 )");
        let fn_tok = t.next();
        let _lparen = t.next();
        let x = t.ident();
        let _comma = t.next();
        let y = t.ident();
        let _rparen = t.next();
        let lbrace = t.next();
        let body_x: Expression = t.ident().into();
        let body = BlockStatement::new(
            lbrace,
            vec![ExpressionStatement::new(body_x.token().clone(), Some(body_x)).into()],
        );
        let _rbrace = t.next();
        let func = FunctionLiteral::new(fn_tok, vec![x, y], body);
        assert_eq!(func.render(), "fn(x, y)x");

        let callee = t.ident().into();
        let lparen = t.next();
        let one = t.int();
        let _comma = t.next();
        let two = t.int();
        let call = CallExpression::new(lparen, callee, vec![one, two]);
        assert_eq!(call.render(), "add(1, 2)");
    }

    #[test]
    fn function_keyword_alias_is_rendered_as_written() {
        let mut t = Tokens::new("function {");
        let fn_tok = t.next();
        let body = BlockStatement::new(t.next(), vec![]);
        assert_eq!(FunctionLiteral::new(fn_tok, vec![], body).render(), "function()");
    }

    #[test]
    fn for_expression() {
        let mut t = Tokens::new("for x > 0 { x }");
        let for_tok = t.next();
        let x = t.ident().into();
        let gt = t.next();
        let zero = t.int();
        let cond = InfixExpression::new(gt, x, OperatorId::Gt, zero);
        let lbrace = t.next();
        let body_x: Expression = t.ident().into();
        let body = BlockStatement::new(
            lbrace,
            vec![ExpressionStatement::new(body_x.token().clone(), Some(body_x)).into()],
        );
        assert_eq!(ForExpression::new(for_tok, cond.into(), body).render(), "for(x > 0) x");
    }

    #[test]
    fn array_hash_and_index() {
        let mut t = Tokens::new("[ 1 , 2 ] { \"a\" : 1 , \"b\" : 2 } [");
        let lbracket = t.next();
        let one = t.int();
        let _comma = t.next();
        let two = t.int();
        let _rbracket = t.next();
        let array: Expression = ArrayLiteral::new(lbracket, vec![one, two]).into();
        assert_eq!(array.render(), "[1, 2]");

        let lbrace = t.next();
        let a: Expression = StringLiteral::from_token(t.next()).unwrap().into();
        let _colon = t.next();
        let a_val = t.int();
        let _comma = t.next();
        let b: Expression = StringLiteral::from_token(t.next()).unwrap().into();
        let _colon = t.next();
        let b_val = t.int();
        let hash = HashLiteral::new(lbrace, vec![(a, a_val), (b, b_val)]);
        assert_eq!(hash.render(), "{a:1, b:2}");

        let _rbrace = t.next();
        let lbracket = t.next();
        let zero = IntegerLiteral::from_token(Token::new(TokenKind::Int, "0", Span::default()))
            .unwrap()
            .into();
        assert_eq!(IndexExpression::new(lbracket, array, zero).render(), "([1, 2][0])");
    }

    #[test]
    fn empty_collections() {
        let mut t = Tokens::new("[ {");
        assert_eq!(ArrayLiteral::new(t.next(), vec![]).render(), "[]");
        assert_eq!(HashLiteral::new(t.next(), vec![]).render(), "{}");
    }

    #[test]
    fn literals_render_verbatim() {
        let mut t = Tokens::new("5.50 true \"two words\" 007");
        let float: Expression = FloatLiteral::from_token(t.next()).unwrap().into();
        let boolean: Expression = Boolean::from_token(t.next()).unwrap().into();
        let string: Expression = StringLiteral::from_token(t.next()).unwrap().into();
        let int = t.int();
        assert_eq!(float.render(), "5.50");
        assert_eq!(boolean.render(), "true");
        assert_eq!(string.render(), "two words");
        assert_eq!(int.render(), "007");
    }

    #[test]
    fn program_concatenates_statements() {
        let mut t = Tokens::new("var a = 1 return a");
        let var = t.next();
        let name = t.ident();
        let _assign = t.next();
        let one = t.int();
        let ret = t.next();
        let a = t.ident().into();
        let program = Program::new(vec![
            VarStatement::new(var, name, Some(one)).into(),
            ReturnStatement::new(ret, Some(a)).into(),
        ]);
        assert_eq!(program.render(), "var a = 1;return a;");
        // Rendering has no side effects.
        assert_eq!(program.render(), program.to_string());
    }

    #[test]
    fn prefix_operands_nest_inside_statements() {
        let mut t = Tokens::new("var x = !5; return -x;");
        let var = t.next();
        let name = t.ident();
        let _assign = t.next();
        let bang = t.next();
        let five = t.int();
        let _semi = t.next();
        let ret = t.next();
        let minus = t.next();
        let x = t.ident().into();
        let program = Program::new(vec![
            VarStatement::new(var, name, Some(PrefixExpression::new(bang, OperatorId::Bang, five).into())).into(),
            ReturnStatement::new(ret, Some(PrefixExpression::new(minus, OperatorId::Minus, x).into())).into(),
        ]);
        insta::assert_snapshot!(program.render(), @"var x = (!5);return (-x);");
    }
}
