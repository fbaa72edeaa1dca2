use std::rc::Rc;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::{Environment, Object},
    },
    util::num::checked_index,
};

impl Evaluator {
    /// Evaluates the elements of an array literal left to right.
    pub(crate) fn eval_array_literal(&self,
                                     elements: &[Expr],
                                     env: &Environment)
                                     -> EvalResult<Object> {
        let mut values = Vec::with_capacity(elements.len());
        for element in elements {
            values.push(eval_operand!(self, element, env));
        }

        Ok(Object::Array(Rc::new(values)))
    }

    /// Evaluates `collection[index]`.
    pub(crate) fn eval_index(&self,
                             collection: &Expr,
                             index: &Expr,
                             env: &Environment,
                             line: usize)
                             -> EvalResult<Object> {
        let collection = eval_operand!(self, collection, env);
        let index = eval_operand!(self, index, env);

        Self::index_value(&collection, &index, line)
    }

    /// Indexes an array or a string.
    ///
    /// Arrays yield the element at `index`; strings yield the code point at
    /// `index` as a one-character string. Indices start at zero.
    ///
    /// # Errors
    /// - `IndexOutOfBounds` for negative or too large indices.
    /// - `TypeError` if the collection is not indexable or the index is not
    ///   an integer.
    ///
    /// # Example
    /// ```
    /// use jipl::interpreter::{evaluator::Evaluator, value::Object};
    ///
    /// let word = Object::from("héllo");
    /// let letter = Evaluator::index_value(&word, &Object::Integer(1), 1).unwrap();
    ///
    /// assert_eq!(letter, Object::from("é"));
    /// ```
    pub fn index_value(collection: &Object, index: &Object, line: usize) -> EvalResult<Object> {
        match collection {
            Object::Array(elements) => {
                let i = checked_index(index.as_integer(line)?, elements.len(), line)?;
                Ok(elements[i].clone())
            },
            Object::Str(text) => {
                let position = index.as_integer(line)?;
                let len = text.chars().count();
                let i = checked_index(position, len, line)?;
                text.chars()
                    .nth(i)
                    .map(|c| Object::from(c.to_string()))
                    .ok_or(RuntimeError::IndexOutOfBounds { len,
                                                            found: position,
                                                            line })
            },
            other => Err(RuntimeError::TypeError { details: format!("{} is not indexable",
                                                                    other.object_type()),
                                                   line }),
        }
    }
}
