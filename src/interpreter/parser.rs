/// Parser state, precedence levels and the expression loop.
///
/// Holds the `Parser` type with its current/peek token window, the static
/// prefix/infix rule table, and the precedence-climbing `parse_expression`.
pub mod core;

/// Statement parsing.
///
/// Dispatches on the current token to `def`, `return` and expression
/// statements.
pub mod statement;

/// Block parsing.
///
/// Parses brace-delimited statement sequences used as bodies.
pub mod block;

/// Prefix handlers.
///
/// Literals, identifiers, grouping, unary operators and the keyword-introduced
/// expressions `if`, `function` and `for`.
pub mod unary;

/// Infix handlers.
///
/// Binary operators, calls, indexing and postfix increment/decrement.
pub mod binary;

/// Shared parsing helpers.
pub mod utils;

pub use self::core::{Parser, Precedence};
