use logos::Logos;

use crate::interpreter::token::{Token, TokenKind, lookup_identifier};

/// The raw lexical rules driven by `logos`.
///
/// These are an implementation detail of [`Scanner`]; the parser only ever
/// sees [`Token`] values. Keywords are not listed here because identifier
/// classification happens in [`lookup_identifier`].
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(extras = LexerExtras)]
enum RawToken {
    /// Spaces, tabs, carriage returns and newlines.
    #[regex(r"[ \t\r\n]+", |lex| {
        lex.extras.line += lex.slice().matches('\n').count();
        logos::Skip
    })]
    Whitespace,
    /// A string literal. An unterminated literal runs to the end of input.
    #[regex(r#""[^"\x00]*"?"#)]
    Str,
    /// Identifier-shaped words, including keywords.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Word,
    /// A run of decimal digits.
    #[regex(r"[0-9]+")]
    Int,
    /// `==`
    #[token("==")]
    Equal,
    /// `!=`
    #[token("!=")]
    NotEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `++`
    #[token("++")]
    Increment,
    /// `--`
    #[token("--")]
    Decrement,
    /// `&&`
    #[token("&&")]
    And,
    /// `||`
    #[token("||")]
    Or,
    /// A lone `&`. Reported as illegal.
    #[token("&")]
    Ampersand,
    /// A lone `|`. Reported as illegal.
    #[token("|")]
    Pipe,
    /// `=`
    #[token("=")]
    Assign,
    /// `!`
    #[token("!")]
    Bang,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// The NUL code point terminates input.
    #[token("\0")]
    Nul,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

impl RawToken {
    /// Maps a raw rule onto the public token category.
    const fn kind(self) -> TokenKind {
        match self {
            Self::Str => TokenKind::Str,
            // Keyword classification happens on the text, see `Scanner::next_token`.
            Self::Word => TokenKind::Identifier,
            Self::Int => TokenKind::Int,
            Self::Equal => TokenKind::Equal,
            Self::NotEqual => TokenKind::NotEqual,
            Self::LessEqual => TokenKind::LessEqual,
            Self::GreaterEqual => TokenKind::GreaterEqual,
            Self::Increment => TokenKind::Increment,
            Self::Decrement => TokenKind::Decrement,
            Self::And => TokenKind::And,
            Self::Or => TokenKind::Or,
            Self::Ampersand | Self::Pipe => TokenKind::Illegal,
            Self::Assign => TokenKind::Assign,
            Self::Bang => TokenKind::Bang,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Star => TokenKind::Star,
            Self::Slash => TokenKind::Slash,
            Self::Percent => TokenKind::Percent,
            Self::Less => TokenKind::Less,
            Self::Greater => TokenKind::Greater,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            Self::LBrace => TokenKind::LBrace,
            Self::RBrace => TokenKind::RBrace,
            Self::LBracket => TokenKind::LBracket,
            Self::RBracket => TokenKind::RBracket,
            Self::Comma => TokenKind::Comma,
            Self::Semicolon => TokenKind::Semicolon,
            Self::Whitespace | Self::Nul => TokenKind::Eof,
        }
    }
}

/// Converts source text into tokens on demand.
///
/// Each call to [`Scanner::next_token`] yields exactly one token. Once the end
/// of input (or a NUL code point) is reached, every further call yields
/// [`TokenKind::Eof`].
///
/// The scanner also implements [`Iterator`]; the iterator yields the `Eof`
/// token once and then stops.
///
/// # Example
/// ```
/// use jipl::interpreter::{lexer::Scanner, token::TokenKind};
///
/// let kinds = Scanner::new("def x = 5;").map(|t| t.kind).collect::<Vec<_>>();
///
/// assert_eq!(kinds,
///            vec![TokenKind::Def,
///                 TokenKind::Identifier,
///                 TokenKind::Assign,
///                 TokenKind::Int,
///                 TokenKind::Semicolon,
///                 TokenKind::Eof]);
/// ```
pub struct Scanner<'src> {
    lexer:    logos::Lexer<'src, RawToken>,
    finished: bool,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer:    RawToken::lexer_with_extras(source, LexerExtras::default()),
               finished: false, }
    }

    /// Returns the next token from the input.
    pub fn next_token(&mut self) -> Token {
        if self.finished {
            return Token::eof(self.lexer.extras.line);
        }

        // Skipped whitespace advances the line count inside `next`.
        let raw = self.lexer.next();
        let line = self.lexer.extras.line;

        match raw {
            None | Some(Ok(RawToken::Nul)) => {
                self.finished = true;
                Token::eof(line)
            },
            Some(Ok(RawToken::Word)) => {
                let word = self.lexer.slice();
                Token::new(lookup_identifier(word), word, line)
            },
            Some(Ok(RawToken::Str)) => {
                let slice = self.lexer.slice();
                self.lexer.extras.line += slice.matches('\n').count();

                let body = &slice[1..];
                let body = body.strip_suffix('"').unwrap_or(body);
                Token::new(TokenKind::Str, body, line)
            },
            Some(Ok(raw)) => Token::new(raw.kind(), self.lexer.slice(), line),
            Some(Err(())) => Token::new(TokenKind::Illegal, self.illegal_char(), line),
        }
    }

    /// Returns the single code point that failed to lex.
    ///
    /// The error span is widened to a full code point so that the next token
    /// starts on a character boundary.
    fn illegal_char(&mut self) -> &'src str {
        let source: &'src str = self.lexer.source();
        let span = self.lexer.span();

        let width = source[span.start..].chars().next().map_or(0, char::len_utf8);
        let end = span.start + width;
        if span.end < end {
            self.lexer.bump(end - span.end);
        }

        &source[span.start..self.lexer.span().end]
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        Some(self.next_token())
    }
}
