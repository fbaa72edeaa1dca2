use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::Object,
    },
};

impl Evaluator {
    /// Evaluates a binary operation between two values.
    ///
    /// Routes to a specialized handler by the runtime types of the operands:
    /// integer/integer, boolean/boolean and string/string pairs are
    /// supported. Operands of different types are a type mismatch.
    ///
    /// # Example
    /// ```
    /// use jipl::{
    ///     ast::InfixOperator,
    ///     interpreter::{evaluator::Evaluator, value::Object},
    /// };
    ///
    /// let result = Evaluator::eval_infix(InfixOperator::Add,
    ///                                    &Object::Integer(3),
    ///                                    &Object::Integer(4),
    ///                                    1);
    /// assert_eq!(result.unwrap(), Object::Integer(7));
    /// ```
    ///
    /// # Errors
    /// - `TypeMismatch` for operands of different types.
    /// - `UnknownOperator` if the operator is undefined for the shared type.
    /// - Arithmetic errors from the integer handlers.
    pub fn eval_infix(op: InfixOperator,
                      left: &Object,
                      right: &Object,
                      line: usize)
                      -> EvalResult<Object> {
        match (left, right) {
            (Object::Integer(a), Object::Integer(b)) => Self::eval_integer_infix(op, *a, *b, line),
            (Object::Boolean(a), Object::Boolean(b)) => Self::eval_logic(op, *a, *b, line),
            (Object::Str(a), Object::Str(b)) => Self::eval_string(op, a, b, line),
            _ if left.object_type() != right.object_type() => {
                Err(RuntimeError::TypeMismatch { left: left.object_type(),
                                                 operator: op.to_string(),
                                                 right: right.object_type(),
                                                 line })
            },
            _ => Err(unknown_operator(op, left, right, line)),
        }
    }

    fn eval_integer_infix(op: InfixOperator, a: i64, b: i64, line: usize) -> EvalResult<Object> {
        use InfixOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Sub,
        };

        match op {
            Add | Sub | Mul | Div | Mod => Self::eval_integer_op(op, a, b, line).map(Object::Integer),
            Less | Greater | LessEqual | GreaterEqual | Equal | NotEqual => {
                Ok(Object::from(Self::eval_comparison(op, a, b)))
            },
            And | Or => Err(unknown_operator(op, &Object::Integer(a), &Object::Integer(b), line)),
        }
    }
}

/// Builds the error for an operator that is undefined on its operand types.
pub(crate) fn unknown_operator(op: InfixOperator,
                               left: &Object,
                               right: &Object,
                               line: usize)
                               -> RuntimeError {
    RuntimeError::UnknownOperator { operation: format!("{} {op} {}",
                                                       left.object_type(),
                                                       right.object_type()),
                                    line }
}
