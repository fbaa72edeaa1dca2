use tracing::{debug, trace};

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::Scanner,
        parser::{
            binary::{parse_call, parse_index, parse_infix, parse_postfix},
            statement::parse_statement,
            unary::{
                parse_array, parse_boolean, parse_for, parse_function, parse_grouped,
                parse_identifier, parse_if, parse_integer, parse_prefix, parse_string,
            },
        },
        token::{Token, TokenKind},
    },
};

/// Binding strength of an infix or postfix operator, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Start of an expression; binds nothing.
    Lowest,
    /// `==`, `!=`, `&&`, `||`
    Equals,
    /// `<`, `>`, `<=`, `>=`
    Comparison,
    /// `+`, `-`
    Sum,
    /// `*`, `/`, `%`
    Product,
    /// Unary `!` and `-`.
    Prefix,
    /// `(` after an expression.
    Call,
    /// `[` after an expression.
    Index,
    /// Postfix `++` and `--`.
    Increment,
}

/// Handler invoked when a token begins an expression.
type PrefixFn = fn(&mut Parser<'_>) -> Option<Expr>;
/// Handler invoked when a token follows a complete left-hand expression.
type InfixFn = fn(&mut Parser<'_>, Expr) -> Option<Expr>;

/// The parse behaviour registered for one token kind.
struct ParseRule {
    prefix:     Option<PrefixFn>,
    infix:      Option<InfixFn>,
    precedence: Precedence,
}

impl ParseRule {
    const NONE: Self = Self { prefix:     None,
                              infix:      None,
                              precedence: Precedence::Lowest, };

    const fn prefix(prefix: PrefixFn) -> Self {
        Self { prefix: Some(prefix),
               ..Self::NONE }
    }

    const fn infix(infix: InfixFn, precedence: Precedence) -> Self {
        Self { infix: Some(infix),
               precedence,
               ..Self::NONE }
    }
}

/// The static rule table.
const fn rule_for(kind: TokenKind) -> ParseRule {
    use TokenKind as K;

    match kind {
        K::Identifier => ParseRule::prefix(parse_identifier),
        K::Int => ParseRule::prefix(parse_integer),
        K::Str => ParseRule::prefix(parse_string),
        K::True | K::False => ParseRule::prefix(parse_boolean),
        K::Bang => ParseRule::prefix(parse_prefix),
        K::If => ParseRule::prefix(parse_if),
        K::Function => ParseRule::prefix(parse_function),
        K::For => ParseRule::prefix(parse_for),
        K::Minus => ParseRule { prefix:     Some(parse_prefix),
                                infix:      Some(parse_infix),
                                precedence: Precedence::Sum, },
        K::LParen => ParseRule { prefix:     Some(parse_grouped),
                                 infix:      Some(parse_call),
                                 precedence: Precedence::Call, },
        K::LBracket => ParseRule { prefix:     Some(parse_array),
                                   infix:      Some(parse_index),
                                   precedence: Precedence::Index, },
        K::Equal | K::NotEqual | K::And | K::Or => {
            ParseRule::infix(parse_infix, Precedence::Equals)
        },
        K::Less | K::Greater | K::LessEqual | K::GreaterEqual => {
            ParseRule::infix(parse_infix, Precedence::Comparison)
        },
        K::Plus => ParseRule::infix(parse_infix, Precedence::Sum),
        K::Star | K::Slash | K::Percent => ParseRule::infix(parse_infix, Precedence::Product),
        K::Increment | K::Decrement => ParseRule::infix(parse_postfix, Precedence::Increment),
        K::Illegal
        | K::Eof
        | K::Assign
        | K::Comma
        | K::Semicolon
        | K::RParen
        | K::LBrace
        | K::RBrace
        | K::RBracket
        | K::Def
        | K::Else
        | K::Return
        | K::Break
        | K::Continue => ParseRule::NONE,
    }
}

/// Returns the infix precedence of a token kind.
#[must_use]
pub const fn precedence_of(kind: TokenKind) -> Precedence {
    rule_for(kind).precedence
}

/// A Pratt parser over a [`Scanner`].
///
/// The parser always holds two tokens: `current`, the token being examined,
/// and `peek`, the one after it. Productions return `None` after recording an
/// error; parsing then resumes at the next statement.
///
/// # Example
/// ```
/// use jipl::interpreter::{lexer::Scanner, parser::Parser};
///
/// let mut parser = Parser::new(Scanner::new("1 + 2 * 3;"));
/// let program = parser.parse();
///
/// assert!(parser.errors().is_empty());
/// assert_eq!(program.to_string(), "(1+(2*3))");
/// ```
pub struct Parser<'src> {
    scanner:     Scanner<'src>,
    /// The token being examined.
    pub current: Token,
    /// The token after `current`.
    pub peek:    Token,
    errors:      Vec<ParseError>,
}

impl<'src> Parser<'src> {
    /// Creates a parser and primes the two-token window.
    #[must_use]
    pub fn new(mut scanner: Scanner<'src>) -> Self {
        let current = scanner.next_token();
        let peek = scanner.next_token();

        Self { scanner,
               current,
               peek,
               errors: Vec::new() }
    }

    /// Parses the whole input.
    ///
    /// Always returns a program; statements that failed to parse are left out
    /// and their errors are available through [`Parser::errors`].
    pub fn parse(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current.is(TokenKind::Eof) {
            if let Some(statement) = parse_statement(self) {
                program.statements.push(statement);
            }
            self.advance();
        }

        program
    }

    /// The errors recorded so far, in source order.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Consumes the parser and returns its errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// Shifts `peek` into `current` and pulls a new `peek` from the scanner.
    pub fn advance(&mut self) {
        let next = self.scanner.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
        trace!(token = %self.current, line = self.current.line, "advance");
    }

    /// Advances if `peek` has the given kind; otherwise records an
    /// `UnexpectedToken` error and returns `None`.
    pub fn expect_peek(&mut self, kind: TokenKind) -> Option<()> {
        if self.peek.is(kind) {
            self.advance();
            return Some(());
        }
        self.record(ParseError::UnexpectedToken { expected: kind.to_string(),
                                                  found:    self.peek.clone(),
                                                  line:     self.peek.line, });
        None
    }

    /// Consumes an optional `;` after a statement.
    pub fn skip_semicolon(&mut self) {
        if self.peek.is(TokenKind::Semicolon) {
            self.advance();
        }
    }

    /// Records a parse error.
    pub fn record(&mut self, error: ParseError) {
        debug!(%error, "parse error");
        self.errors.push(error);
    }

    fn peek_precedence(&self) -> Precedence {
        precedence_of(self.peek.kind)
    }
}

/// Parses an expression whose operators bind tighter than `precedence`.
///
/// Starts with the prefix handler of the current token, then folds infix
/// handlers for as long as the upcoming operator binds tighter. On return,
/// `current` is the last token of the expression.
pub fn parse_expression(p: &mut Parser<'_>, precedence: Precedence) -> Option<Expr> {
    let Some(prefix) = rule_for(p.current.kind).prefix else {
        p.record(ParseError::NoPrefixHandler { token: p.current.clone(),
                                               line:  p.current.line, });
        return None;
    };

    let mut left = prefix(p)?;

    while !p.peek.is(TokenKind::Semicolon) && precedence < p.peek_precedence() {
        let Some(infix) = rule_for(p.peek.kind).infix else {
            return Some(left);
        };
        p.advance();
        left = infix(p, left)?;
    }

    Some(left)
}
