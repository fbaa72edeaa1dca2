/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates statements and expressions
/// against an [`value::Environment`], applies operators and calls functions.
/// It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles bindings, closures, and control flow.
/// - Reports runtime errors such as type mismatches or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The scanner reads the raw source text and produces tokens on demand, each
/// corresponding to a meaningful language element such as a literal, an
/// identifier, an operator, a delimiter or a keyword. This is the first stage
/// of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, text and line.
/// - Handles integer and string literals, identifiers, and operators.
/// - Marks unrecognized characters as illegal tokens instead of failing.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the scanner and constructs a [`crate::ast::Program`]
/// using recursive statement parsing and precedence climbing for expressions.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (statements, expressions).
/// - Records syntax errors with location info and keeps going.
pub mod parser;
/// The token module defines token kinds and the keyword table.
pub mod token;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the objects produced during execution, such as
/// integers, strings, booleans, arrays and functions, together with the
/// lexical environment that stores bindings.
///
/// # Responsibilities
/// - Defines the `Object` enum and its type tags.
/// - Implements closures and the builtin function representation.
/// - Provides the scope chain used for lookup and assignment.
pub mod value;
