use crate::{
    ast::InfixOperator,
    interpreter::{
        evaluator::{
            binary::core::unknown_operator,
            core::{EvalResult, Evaluator},
        },
        value::Object,
    },
};

impl Evaluator {
    /// Evaluates an operation between two boolean values.
    ///
    /// Supported operators are `==`, `!=`, `&&` and `||`. Both operands have
    /// already been evaluated by the time this runs, so `&&` and `||` do not
    /// short-circuit.
    ///
    /// # Errors
    /// `UnknownOperator` for arithmetic and ordering operators.
    ///
    /// # Example
    /// ```
    /// use jipl::{
    ///     ast::InfixOperator,
    ///     interpreter::{evaluator::Evaluator, value::Object},
    /// };
    ///
    /// let result = Evaluator::eval_logic(InfixOperator::Or, false, true, 1);
    /// assert_eq!(result.unwrap(), Object::Boolean(true));
    /// ```
    pub fn eval_logic(op: InfixOperator, left: bool, right: bool, line: usize) -> EvalResult<Object> {
        use InfixOperator::{And, Equal, NotEqual, Or};

        match op {
            Equal => Ok(Object::from(left == right)),
            NotEqual => Ok(Object::from(left != right)),
            And => Ok(Object::from(left && right)),
            Or => Ok(Object::from(left || right)),
            _ => Err(unknown_operator(op, &Object::from(left), &Object::from(right), line)),
        }
    }
}
