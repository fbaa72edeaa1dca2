use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
};

impl Evaluator {
    /// Evaluates an integer arithmetic operation.
    ///
    /// All operations are checked. Division truncates toward zero and the
    /// remainder takes the sign of the dividend. The operator must be one of
    /// `Add`, `Sub`, `Mul`, `Div` or `Mod`.
    ///
    /// # Errors
    /// - `DivisionByZero` for `/` or `%` with a zero divisor.
    /// - `Overflow` if the result does not fit into an `i64`.
    ///
    /// # Example
    /// ```
    /// use jipl::{ast::InfixOperator, interpreter::evaluator::Evaluator};
    ///
    /// assert_eq!(Evaluator::eval_integer_op(InfixOperator::Div, 10, 3, 1).unwrap(), 3);
    /// assert_eq!(Evaluator::eval_integer_op(InfixOperator::Mod, 10, 3, 1).unwrap(), 1);
    /// assert!(Evaluator::eval_integer_op(InfixOperator::Div, 1, 0, 1).is_err());
    /// ```
    pub fn eval_integer_op(op: InfixOperator, left: i64, right: i64, line: usize) -> EvalResult<i64> {
        use InfixOperator::{Add, Div, Mod, Mul, Sub};

        if matches!(op, Div | Mod) && right == 0 {
            return Err(RuntimeError::DivisionByZero { line });
        }

        let result = match op {
            Add => left.checked_add(right),
            Sub => left.checked_sub(right),
            Mul => left.checked_mul(right),
            Div => left.checked_div(right),
            Mod => left.checked_rem(right),
            _ => {
                return Err(RuntimeError::TypeError { details: format!("'{op}' is not an arithmetic operator"),
                                                     line });
            },
        };

        result.ok_or(RuntimeError::Overflow { line })
    }
}
