use std::rc::Rc;

use crate::{
    ast::{Expr, PrefixOperator},
    error::ParseError,
    interpreter::{
        parser::{
            block::parse_block,
            core::{Parser, Precedence, parse_expression},
            statement::parse_definition,
            utils::{parse_expression_list, parse_parameters},
        },
        token::TokenKind,
    },
};

/// Parses an identifier, or an assignment when the identifier is followed
/// by `=`.
///
/// Grammar: `identifier ("=" expression)?`
pub fn parse_identifier(p: &mut Parser<'_>) -> Option<Expr> {
    let name = p.current.text.clone();
    let line = p.current.line;

    if !p.peek.is(TokenKind::Assign) {
        return Some(Expr::Identifier { name, line });
    }

    p.advance();
    p.advance();
    let value = parse_expression(p, Precedence::Lowest)?;

    Some(Expr::Assign { name,
                        value: Box::new(value),
                        line })
}

/// Parses an integer literal.
///
/// Literals that do not fit into an `i64` record
/// [`ParseError::InvalidInteger`].
pub fn parse_integer(p: &mut Parser<'_>) -> Option<Expr> {
    let line = p.current.line;

    match p.current.text.parse::<i64>() {
        Ok(value) => Some(Expr::Integer { value, line }),
        Err(_) => {
            p.record(ParseError::InvalidInteger { token: p.current.clone(),
                                                  line });
            None
        },
    }
}

/// Parses a string literal.
pub fn parse_string(p: &mut Parser<'_>) -> Option<Expr> {
    Some(Expr::Str { value: p.current.text.clone(),
                     line:  p.current.line, })
}

/// Parses `true` or `false`.
pub fn parse_boolean(p: &mut Parser<'_>) -> Option<Expr> {
    Some(Expr::Boolean { value: p.current.is(TokenKind::True),
                         line:  p.current.line, })
}

/// Parses a parenthesized expression, `( expression )`.
pub fn parse_grouped(p: &mut Parser<'_>) -> Option<Expr> {
    p.advance();
    let expr = parse_expression(p, Precedence::Lowest)?;
    p.expect_peek(TokenKind::RParen)?;

    Some(expr)
}

/// Parses a unary `!` or `-` application.
///
/// The operand is parsed at [`Precedence::Prefix`], so `-a * b` is
/// `((-a)*b)`.
pub fn parse_prefix(p: &mut Parser<'_>) -> Option<Expr> {
    let line = p.current.line;
    let op = if p.current.is(TokenKind::Bang) {
        PrefixOperator::Not
    } else {
        PrefixOperator::Negate
    };

    p.advance();
    let operand = parse_expression(p, Precedence::Prefix)?;

    Some(Expr::Prefix { op,
                        operand: Box::new(operand),
                        line })
}

/// Parses an `if` expression with an optional `else` block.
///
/// Syntax:
/// ```text
///     if (<condition>) { <statements> }
///     if (<condition>) { <statements> } else { <statements> }
/// ```
pub fn parse_if(p: &mut Parser<'_>) -> Option<Expr> {
    let line = p.current.line;

    p.expect_peek(TokenKind::LParen)?;
    p.advance();
    let condition = parse_expression(p, Precedence::Lowest)?;
    p.expect_peek(TokenKind::RParen)?;

    p.expect_peek(TokenKind::LBrace)?;
    let consequence = parse_block(p);

    let alternative = if p.peek.is(TokenKind::Else) {
        p.advance();
        p.expect_peek(TokenKind::LBrace)?;
        Some(parse_block(p))
    } else {
        None
    };

    Some(Expr::If { condition: Box::new(condition),
                    consequence,
                    alternative,
                    line })
}

/// Parses a function literal.
///
/// The name is optional: `function add(a, b) { a + b; }` binds itself as
/// `add` when evaluated, `function(a, b) { a + b; }` is anonymous.
pub fn parse_function(p: &mut Parser<'_>) -> Option<Expr> {
    let line = p.current.line;

    let name = if p.peek.is(TokenKind::Identifier) {
        p.advance();
        Some(p.current.text.clone())
    } else {
        None
    };

    p.expect_peek(TokenKind::LParen)?;
    let params = parse_parameters(p)?;

    p.expect_peek(TokenKind::LBrace)?;
    let body = parse_block(p);

    Some(Expr::Function { name,
                          params,
                          body: Rc::new(body),
                          line })
}

/// Parses a C-style `for` loop.
///
/// Syntax:
/// ```text
///     for (def <name> = <init>; <condition>; <post>) { <statements> }
/// ```
pub fn parse_for(p: &mut Parser<'_>) -> Option<Expr> {
    let line = p.current.line;

    p.expect_peek(TokenKind::LParen)?;
    p.expect_peek(TokenKind::Def)?;
    let init = parse_definition(p)?;

    p.expect_peek(TokenKind::Semicolon)?;
    p.advance();
    let condition = parse_expression(p, Precedence::Lowest)?;

    p.expect_peek(TokenKind::Semicolon)?;
    p.advance();
    let post = parse_expression(p, Precedence::Lowest)?;

    p.expect_peek(TokenKind::RParen)?;
    p.expect_peek(TokenKind::LBrace)?;
    let body = parse_block(p);

    Some(Expr::For { init: Box::new(init),
                     condition: Box::new(condition),
                     post: Box::new(post),
                     body,
                     line })
}

/// Parses an array literal, `[a, b, c]`.
pub fn parse_array(p: &mut Parser<'_>) -> Option<Expr> {
    let line = p.current.line;
    let elements = parse_expression_list(p, TokenKind::RBracket)?;

    Some(Expr::Array { elements, line })
}
