use tracing::trace;

use crate::{
    ast::{Definition, Statement},
    interpreter::{
        parser::core::{Parser, Precedence, parse_expression},
        token::TokenKind,
    },
};

/// Parses a single statement starting at the current token.
///
/// A statement may be one of:
/// - a definition, `def name = value;`
/// - a return, `return value;` or `return;`
/// - an expression used as a statement.
///
/// On success `current` is left on the statement's last token.
pub fn parse_statement(p: &mut Parser<'_>) -> Option<Statement> {
    trace!(token = %p.current, line = p.current.line, "statement");

    match p.current.kind {
        TokenKind::Def => parse_def_statement(p),
        TokenKind::Return => parse_return_statement(p),
        _ => parse_expression_statement(p),
    }
}

/// Parses `def IDENT = expression` without the trailing semicolon.
///
/// Used directly by `for` loops, whose init clause is followed by a mandatory
/// `;`.
pub fn parse_definition(p: &mut Parser<'_>) -> Option<Definition> {
    let line = p.current.line;

    p.expect_peek(TokenKind::Identifier)?;
    let name = p.current.text.clone();

    p.expect_peek(TokenKind::Assign)?;
    p.advance();

    let value = parse_expression(p, Precedence::Lowest)?;

    Some(Definition { name, value, line })
}

fn parse_def_statement(p: &mut Parser<'_>) -> Option<Statement> {
    let definition = parse_definition(p)?;
    p.skip_semicolon();

    Some(Statement::Def(definition))
}

/// `return` takes no value when it is directly followed by `;`, `}` or the
/// end of input.
fn parse_return_statement(p: &mut Parser<'_>) -> Option<Statement> {
    let line = p.current.line;

    let value = match p.peek.kind {
        TokenKind::Semicolon | TokenKind::RBrace | TokenKind::Eof => None,
        _ => {
            p.advance();
            Some(parse_expression(p, Precedence::Lowest)?)
        },
    };
    p.skip_semicolon();

    Some(Statement::Return { value, line })
}

fn parse_expression_statement(p: &mut Parser<'_>) -> Option<Statement> {
    let line = p.current.line;
    let expr = parse_expression(p, Precedence::Lowest)?;
    p.skip_semicolon();

    Some(Statement::Expression { expr, line })
}
