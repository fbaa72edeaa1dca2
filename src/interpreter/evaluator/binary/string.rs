use std::rc::Rc;

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
    /// Evaluates an operation between two strings.
    ///
    /// `+` concatenates; `==` and `!=` compare contents.
    ///
    /// # Errors
    /// `UnknownOperator` for every other operator.
    pub fn eval_string(op: InfixOperator,
                       left: &Rc<str>,
                       right: &Rc<str>,
                       line: usize)
                       -> EvalResult<Object> {
        match op {
            InfixOperator::Add => Ok(Object::from(format!("{left}{right}"))),
            InfixOperator::Equal => Ok(Object::from(left == right)),
            InfixOperator::NotEqual => Ok(Object::from(left != right)),
            _ => {
                Err(unknown_operator(op,
                                     &Object::Str(Rc::clone(left)),
                                     &Object::Str(Rc::clone(right)),
                                     line))
            },
        }
    }
}
