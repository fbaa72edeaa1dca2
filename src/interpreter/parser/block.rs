use crate::{
    ast::Block,
    interpreter::{
        parser::{core::Parser, statement::parse_statement},
        token::TokenKind,
    },
};

/// Parses a `{ ... }` block.
///
/// Expects `current` to be the opening brace. Statements are parsed until the
/// closing brace or the end of input; `current` is left on whichever of the
/// two ended the block. Statements that fail to parse are dropped, as they are
/// at the top level.
pub fn parse_block(p: &mut Parser<'_>) -> Block {
    let line = p.current.line;
    let mut statements = Vec::new();

    p.advance();
    while !p.current.is(TokenKind::RBrace) && !p.current.is(TokenKind::Eof) {
        if let Some(statement) = parse_statement(p) {
            statements.push(statement);
        }
        p.advance();
    }

    Block { statements, line }
}
