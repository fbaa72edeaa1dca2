/// Evaluates a sub-expression and returns a pending `return` from the
/// enclosing function unchanged.
///
/// `if` blocks can yield a `return` wrapper as an ordinary expression value,
/// so every operand must be checked before it is used.
macro_rules! eval_operand {
    ($evaluator:expr, $expr:expr, $env:expr) => {{
        let value = $evaluator.eval($expr, $env)?;
        if value.is_return() {
            return Ok(value);
        }
        value
    }};
}

/// Core evaluation logic.
///
/// Contains the `Evaluator`, the result alias and the dispatch over
/// programs, statements, blocks and expressions.
pub mod core;

/// Prefix and postfix operator evaluation.
///
/// Implements negation, logical NOT and integer increment/decrement.
pub mod unary;

/// Binary operator evaluation.
///
/// Dispatches on the runtime types of both operands to integer, boolean and
/// string operations.
pub mod binary;

/// Array literals and indexing.
pub mod array;

/// Evaluation of for-loop expressions.
///
/// Runs the init definition, condition, body and post expression in the
/// enclosing scope.
pub mod for_loop;

/// Utility evaluation routines.
///
/// Identifier lookup, conditionals, assignment and function literals.
pub mod utils;

/// Function evaluation.
///
/// Handles user-defined and built-in function calls, argument checking, and
/// return value computation.
pub mod function;

pub use self::core::{EvalResult, Evaluator};
