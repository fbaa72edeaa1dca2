//! # jipl
//!
//! jipl is a small interpreted language with C-like syntax, written in Rust.
//! Source text is scanned into tokens, parsed into a syntax tree by a Pratt
//! parser, and executed by a tree-walking evaluator with lexically scoped
//! closures.
//!
//! ```
//! use jipl::{get_result, interpreter::value::{Environment, Object}};
//!
//! let env = Environment::new_root();
//! let value = get_result("def add = function(a, b) { a + b; }; add(2, 3);", &env).unwrap();
//!
//! assert_eq!(value, Object::Integer(5));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    error::{Error, ParseError},
    interpreter::{
        evaluator::{EvalResult, Evaluator},
        lexer::Scanner,
        parser::Parser,
        value::{Environment, Object},
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expr` types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
/// - Renders nodes back to canonical, fully parenthesized source text.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while parsing or
/// evaluating code. Every error carries the source line it relates to.
///
/// # Responsibilities
/// - Defines error enums for both phases (parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Integrates with `std::error::Error` through `thiserror`.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together scanning, parsing, evaluation and value
/// representations to provide a complete runtime for source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Convert between `i64` values and `usize` lengths without silent
///   truncation.
pub mod util;

/// Creates a scanner over `source`.
///
/// The returned scanner yields tokens lazily, either through
/// [`Scanner::next_token`] or as an iterator.
#[must_use]
pub fn tokenize(source: &str) -> Scanner<'_> {
    Scanner::new(source)
}

/// Parses a token stream into a program.
///
/// Parsing never aborts: the program contains every statement that parsed
/// successfully, and the list holds every recorded error in source order.
///
/// # Examples
/// ```
/// use jipl::{parse, tokenize};
///
/// let (program, errors) = parse(tokenize("-10 / (2 + 3);"));
/// assert!(errors.is_empty());
/// assert_eq!(program.to_string(), "((-10)/(2+3))");
///
/// let (_, errors) = parse(tokenize("def = 5;"));
/// assert!(!errors.is_empty());
/// ```
#[must_use]
pub fn parse(tokens: Scanner<'_>) -> (Program, Vec<ParseError>) {
    let mut parser = Parser::new(tokens);
    let program = parser.parse();

    (program, parser.into_errors())
}

/// Evaluates a program in `env` using the standard builtins.
///
/// Top-level definitions are written into `env`, so evaluating several
/// programs against the same environment lets later ones see earlier
/// definitions.
///
/// # Errors
/// Returns the first runtime error.
pub fn evaluate(program: &Program, env: &Environment) -> EvalResult<Object> {
    Evaluator::new().eval_program(program, env)
}

/// Parses and evaluates `source` in `env`, returning the final value.
///
/// Evaluation only starts if parsing recorded no errors.
///
/// # Errors
/// - [`Error::Parse`] with every parse error if the source does not parse.
/// - [`Error::Runtime`] with the first runtime error otherwise.
///
/// # Examples
/// ```
/// use jipl::{get_result, interpreter::value::{Environment, Object}};
///
/// let env = Environment::new_root();
///
/// // Simple expression: the result will be calculated and no error should occur.
/// assert_eq!(get_result("def x = 5; x + 3;", &env).unwrap(), Object::Integer(8));
///
/// // The definition persists in the environment.
/// assert_eq!(get_result("x * 2;", &env).unwrap(), Object::Integer(10));
///
/// // Example with an intentional error (unknown identifier).
/// assert!(get_result("y + 1;", &env).is_err());
/// ```
pub fn get_result(source: &str, env: &Environment) -> Result<Object, Error> {
    let (program, errors) = parse(tokenize(source));
    if !errors.is_empty() {
        return Err(Error::Parse(errors));
    }

    Ok(evaluate(&program, env)?)
}
