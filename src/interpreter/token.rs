/// The category of a lexical token.
///
/// Kinds are plain tags; the literal source text is carried separately by
/// [`Token`]. Keywords get their own kinds so the parser can dispatch on them
/// without comparing strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A character no rule accepts, such as a lone `&` or `@`.
    Illegal,
    /// End of input. Also produced for a NUL code point.
    Eof,

    /// Identifier tokens; variable or function names such as `x` or `square`.
    Identifier,
    /// Integer literal tokens, such as `42`. The value is parsed later.
    Int,
    /// String literal tokens. The text excludes the surrounding quotes.
    Str,

    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `!`
    Bang,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `++`
    Increment,
    /// `--`
    Decrement,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,

    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,

    /// `function`
    Function,
    /// `def`
    Def,
    /// `if`
    If,
    /// `else`
    Else,
    /// `for`
    For,
    /// `return`
    Return,
    /// `break`
    Break,
    /// `continue`
    Continue,
    /// `true`
    True,
    /// `false`
    False,
}

/// Reserved words and the kinds they map to.
const KEYWORDS: &[(&str, TokenKind)] = &[("def", TokenKind::Def),
                                         ("if", TokenKind::If),
                                         ("else", TokenKind::Else),
                                         ("for", TokenKind::For),
                                         ("function", TokenKind::Function),
                                         ("return", TokenKind::Return),
                                         ("break", TokenKind::Break),
                                         ("continue", TokenKind::Continue),
                                         ("true", TokenKind::True),
                                         ("false", TokenKind::False)];

/// Classifies an identifier-shaped word as a keyword or a plain identifier.
///
/// # Example
/// ```
/// use jipl::interpreter::token::{TokenKind, lookup_identifier};
///
/// assert_eq!(lookup_identifier("function"), TokenKind::Function);
/// assert_eq!(lookup_identifier("functions"), TokenKind::Identifier);
/// ```
#[must_use]
pub fn lookup_identifier(word: &str) -> TokenKind {
    KEYWORDS.iter()
            .find(|(keyword, _)| *keyword == word)
            .map_or(TokenKind::Identifier, |(_, kind)| *kind)
}

/// A classified lexical unit.
///
/// Tokens are created by the scanner and consumed by the parser; `line` is
/// the 1-based source line the token starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The category of the token.
    pub kind: TokenKind,
    /// The literal source text (string literals without their quotes).
    pub text: String,
    /// The source line where the token starts.
    pub line: usize,
}

impl Token {
    /// Creates a token from its parts.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Self { kind,
               text: text.into(),
               line }
    }

    /// Creates the end-of-input token for the given line.
    #[must_use]
    pub fn eof(line: usize) -> Self {
        Self::new(TokenKind::Eof, "", line)
    }

    /// Returns `true` if this token has the given kind.
    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use TokenKind::{
            And, Assign, Bang, Break, Comma, Continue, Decrement, Def, Else, Eof, Equal, False,
            For, Function, Greater, GreaterEqual, Identifier, If, Illegal, Increment, Int,
            LBrace, LBracket, LParen, Less, LessEqual, Minus, NotEqual, Or, Percent, Plus,
            RBrace, RBracket, RParen, Return, Semicolon, Slash, Star, Str, True,
        };
        let text = match self {
            Illegal => "illegal character",
            Eof => "end of input",
            Identifier => "identifier",
            Int => "integer literal",
            Str => "string literal",
            Assign => "'='",
            Plus => "'+'",
            Minus => "'-'",
            Star => "'*'",
            Slash => "'/'",
            Percent => "'%'",
            Bang => "'!'",
            Equal => "'=='",
            NotEqual => "'!='",
            Increment => "'++'",
            Decrement => "'--'",
            And => "'&&'",
            Or => "'||'",
            Less => "'<'",
            Greater => "'>'",
            LessEqual => "'<='",
            GreaterEqual => "'>='",
            Comma => "','",
            Semicolon => "';'",
            LParen => "'('",
            RParen => "')'",
            LBrace => "'{'",
            RBrace => "'}'",
            LBracket => "'['",
            RBracket => "']'",
            Function => "'function'",
            Def => "'def'",
            If => "'if'",
            Else => "'else'",
            For => "'for'",
            Return => "'return'",
            Break => "'break'",
            Continue => "'continue'",
            True => "'true'",
            False => "'false'",
        };
        write!(f, "{text}")
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "end of input"),
            TokenKind::Str => write!(f, "\"{}\"", self.text),
            _ => write!(f, "'{}'", self.text),
        }
    }
}
