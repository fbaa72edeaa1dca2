use crate::interpreter::token::Token;

/// Represents all errors that can be recorded during parsing.
///
/// Each variant keeps the offending token; [`ParseError::token`] exposes it
/// and the `Display` output is the human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A specific token was required but another one was found.
    #[error("Error on line {line}: Expected {expected}, found {found}.")]
    UnexpectedToken {
        /// Description of what the grammar required here.
        expected: String,
        /// The token encountered.
        found:    Token,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The token cannot start an expression.
    #[error("Error on line {line}: No prefix parse function for {token}.")]
    NoPrefixHandler {
        /// The token that could not be parsed.
        token: Token,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An integer literal does not fit into a 64-bit signed integer.
    #[error("Error on line {line}: Could not parse {token} as integer.")]
    InvalidInteger {
        /// The literal token.
        token: Token,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl ParseError {
    /// Returns the token the error was recorded at.
    #[must_use]
    pub const fn token(&self) -> &Token {
        match self {
            Self::UnexpectedToken { found: token, .. }
            | Self::NoPrefixHandler { token, .. }
            | Self::InvalidInteger { token, .. } => token,
        }
    }

    /// Returns the source line the error was recorded at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::NoPrefixHandler { line, .. }
            | Self::InvalidInteger { line, .. } => *line,
        }
    }
}
