use crate::{
    ast::Expr,
    interpreter::{
        parser::core::{Parser, Precedence, parse_expression},
        token::TokenKind,
    },
};

/// Parses a comma-separated list of expressions up to `closing`.
///
/// Shared by call arguments and array literals. Expects `current` to be the
/// opening delimiter and leaves it on `closing`. An immediately encountered
/// closing token produces an empty list.
///
/// Grammar (simplified): `list := (expression ("," expression)*)? closing`
pub(in crate::interpreter::parser) fn parse_expression_list(p: &mut Parser<'_>,
                                                            closing: TokenKind)
                                                            -> Option<Vec<Expr>> {
    let mut items = Vec::new();

    if p.peek.is(closing) {
        p.advance();
        return Some(items);
    }

    p.advance();
    items.push(parse_expression(p, Precedence::Lowest)?);

    while p.peek.is(TokenKind::Comma) {
        p.advance();
        p.advance();
        items.push(parse_expression(p, Precedence::Lowest)?);
    }

    p.expect_peek(closing)?;
    Some(items)
}

/// Parses a parenthesized parameter list `(a, b, c)`.
///
/// Expects `current` to be `(` and leaves it on `)`.
pub(in crate::interpreter::parser) fn parse_parameters(p: &mut Parser<'_>)
                                                       -> Option<Vec<String>> {
    let mut params = Vec::new();

    if p.peek.is(TokenKind::RParen) {
        p.advance();
        return Some(params);
    }

    p.expect_peek(TokenKind::Identifier)?;
    params.push(p.current.text.clone());

    while p.peek.is(TokenKind::Comma) {
        p.advance();
        p.expect_peek(TokenKind::Identifier)?;
        params.push(p.current.text.clone());
    }

    p.expect_peek(TokenKind::RParen)?;
    Some(params)
}
