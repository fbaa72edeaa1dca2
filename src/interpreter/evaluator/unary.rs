use crate::{
    ast::{PostfixOperator, PrefixOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::Object,
    },
};

impl Evaluator {
    /// Applies a prefix operator.
    ///
    /// `!` is only defined on booleans and `-` only on integers.
    ///
    /// # Errors
    /// - `UnknownOperator` for any other operand type.
    /// - `Overflow` when negating `i64::MIN`.
    ///
    /// # Example
    /// ```
    /// use jipl::{
    ///     ast::PrefixOperator,
    ///     interpreter::{evaluator::Evaluator, value::Object},
    /// };
    ///
    /// let result = Evaluator::eval_prefix(PrefixOperator::Not, &Object::Boolean(false), 1);
    /// assert_eq!(result.unwrap(), Object::Boolean(true));
    /// ```
    pub fn eval_prefix(op: PrefixOperator, operand: &Object, line: usize) -> EvalResult<Object> {
        match (op, operand) {
            (PrefixOperator::Not, Object::Boolean(b)) => Ok(Object::from(!*b)),
            (PrefixOperator::Negate, Object::Integer(n)) => {
                n.checked_neg()
                 .map(Object::Integer)
                 .ok_or(RuntimeError::Overflow { line })
            },
            _ => Err(RuntimeError::UnknownOperator { operation: format!("{op}{}",
                                                                        operand.object_type()),
                                                     line }),
        }
    }

    /// Applies a postfix operator, producing a new integer.
    ///
    /// # Errors
    /// - `UnknownOperator` if the operand is not an integer.
    /// - `Overflow` if the result does not fit.
    pub fn eval_postfix(op: PostfixOperator, operand: &Object, line: usize) -> EvalResult<Object> {
        let Object::Integer(n) = operand else {
            return Err(RuntimeError::UnknownOperator { operation: format!("{}{op}",
                                                                          operand.object_type()),
                                                       line });
        };

        let result = match op {
            PostfixOperator::Increment => n.checked_add(1),
            PostfixOperator::Decrement => n.checked_sub(1),
        };
        result.map(Object::Integer)
              .ok_or(RuntimeError::Overflow { line })
    }
}
