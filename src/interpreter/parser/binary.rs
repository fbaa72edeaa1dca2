use crate::{
    ast::{Expr, InfixOperator, PostfixOperator},
    interpreter::{
        parser::{
            core::{Parser, Precedence, parse_expression, precedence_of},
            utils::parse_expression_list,
        },
        token::TokenKind,
    },
};

/// Maps an operator token onto its binary operator.
const fn infix_operator(kind: TokenKind) -> Option<InfixOperator> {
    let op = match kind {
        TokenKind::Plus => InfixOperator::Add,
        TokenKind::Minus => InfixOperator::Sub,
        TokenKind::Star => InfixOperator::Mul,
        TokenKind::Slash => InfixOperator::Div,
        TokenKind::Percent => InfixOperator::Mod,
        TokenKind::Less => InfixOperator::Less,
        TokenKind::Greater => InfixOperator::Greater,
        TokenKind::LessEqual => InfixOperator::LessEqual,
        TokenKind::GreaterEqual => InfixOperator::GreaterEqual,
        TokenKind::Equal => InfixOperator::Equal,
        TokenKind::NotEqual => InfixOperator::NotEqual,
        TokenKind::And => InfixOperator::And,
        TokenKind::Or => InfixOperator::Or,
        _ => return None,
    };
    Some(op)
}

/// Parses the right-hand side of a binary operator.
///
/// The right operand is parsed at the operator's own precedence, which makes
/// every binary operator left-associative: `a - b - c` is `((a-b)-c)`.
pub fn parse_infix(p: &mut Parser<'_>, left: Expr) -> Option<Expr> {
    let op = infix_operator(p.current.kind)?;
    let line = p.current.line;
    let precedence = precedence_of(p.current.kind);

    p.advance();
    let right = parse_expression(p, precedence)?;

    Some(Expr::Infix { left: Box::new(left),
                       op,
                       right: Box::new(right),
                       line })
}

/// Parses the argument list of a call, `callee(a, b)`.
pub fn parse_call(p: &mut Parser<'_>, callee: Expr) -> Option<Expr> {
    let line = p.current.line;
    let arguments = parse_expression_list(p, TokenKind::RParen)?;

    Some(Expr::Call { callee: Box::new(callee),
                      arguments,
                      line })
}

/// Parses an index, `collection[index]`.
pub fn parse_index(p: &mut Parser<'_>, collection: Expr) -> Option<Expr> {
    let line = p.current.line;

    p.advance();
    let index = parse_expression(p, Precedence::Lowest)?;
    p.expect_peek(TokenKind::RBracket)?;

    Some(Expr::Index { collection: Box::new(collection),
                       index: Box::new(index),
                       line })
}

/// Parses a postfix `++` or `--`.
///
/// Binds only to the already parsed operand; nothing to the right is
/// consumed.
pub fn parse_postfix(p: &mut Parser<'_>, operand: Expr) -> Option<Expr> {
    let op = if p.current.is(TokenKind::Increment) {
        PostfixOperator::Increment
    } else {
        PostfixOperator::Decrement
    };

    Some(Expr::Postfix { op,
                         operand: Box::new(operand),
                         line: p.current.line })
}
