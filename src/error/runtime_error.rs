use crate::interpreter::value::ObjectType;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// A name is bound neither in scope nor as a builtin.
    #[error("Error on line {line}: Identifier not found: {name}.")]
    UnknownIdentifier {
        /// The name that was looked up.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The operands of a binary operator have different types.
    #[error("Error on line {line}: Type mismatch: {left} {operator} {right}.")]
    TypeMismatch {
        /// Type of the left operand.
        left:     ObjectType,
        /// The operator text.
        operator: String,
        /// Type of the right operand.
        right:    ObjectType,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The operator is not defined for the operand type(s).
    #[error("Error on line {line}: Unknown operator: {operation}.")]
    UnknownOperator {
        /// The operation as written, e.g. `-BOOLEAN` or `STRING - STRING`.
        operation: String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// The callee of a call expression is not callable.
    #[error("Error on line {line}: Not a function: {found}.")]
    NotAFunction {
        /// Type of the value that was called.
        found: ObjectType,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// `return` at the top level.
    #[error("Error on line {line}: Return statement outside of a function.")]
    ReturnOutsideFunction {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("Error on line {line}: Argument count mismatch. Expected {expected}, found {found}.")]
    ArgumentCountMismatch {
        /// Number of declared parameters.
        expected: usize,
        /// Number of supplied arguments.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Attempted division or modulo by zero.
    #[error("Error on line {line}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic operation overflowed.
    #[error("Error on line {line}: Integer overflow while trying to compute result.")]
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to access an element outside the collection.
    #[error("Error on line {line}: Index out of bounds. Length is {len}, but found {found} instead.")]
    IndexOutOfBounds {
        /// Length of the indexed collection.
        len:   usize,
        /// The index that was actually requested.
        found: i64,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A value had an unexpected or incompatible type.
    #[error("Error on line {line}: Type error: {details}.")]
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A builtin received an argument it cannot handle.
    #[error("Error on line {line}: Invalid argument: {details}.")]
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}
