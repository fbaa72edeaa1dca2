use std::rc::Rc;

use crate::{
    ast::{Block, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::{Environment, Function, Object, UNDEFINED},
    },
};

impl Evaluator {
    /// Resolves a name.
    ///
    /// Scope bindings are searched first, innermost to outermost; builtins
    /// are only consulted when no binding exists, so user definitions shadow
    /// them.
    ///
    /// # Errors
    /// `RuntimeError::UnknownIdentifier` if the name is bound nowhere.
    pub(crate) fn eval_identifier(&self,
                                  name: &str,
                                  env: &Environment,
                                  line: usize)
                                  -> EvalResult<Object> {
        env.get(name)
           .or_else(|| self.builtin(name).map(Object::BuiltIn))
           .ok_or_else(|| RuntimeError::UnknownIdentifier { name: name.to_string(),
                                                            line })
    }

    /// Evaluates an `if` expression.
    ///
    /// Only the boolean `true` selects the consequence; every other value,
    /// including integers, selects the alternative. Without an alternative
    /// the expression yields `undefined`. Both branches run in `env` itself.
    pub(crate) fn eval_if(&self,
                          condition: &Expr,
                          consequence: &Block,
                          alternative: Option<&Block>,
                          env: &Environment)
                          -> EvalResult<Object> {
        let condition = eval_operand!(self, condition, env);

        if condition.is_true() {
            self.eval_block(consequence, env)
        } else if let Some(alternative) = alternative {
            self.eval_block(alternative, env)
        } else {
            Ok(UNDEFINED)
        }
    }

    /// Evaluates `name = value`, rebinding the nearest scope that holds
    /// `name`. Yields the assigned value.
    ///
    /// # Errors
    /// `RuntimeError::UnknownIdentifier` if `name` is not bound in any scope.
    pub(crate) fn eval_assign(&self,
                              name: &str,
                              value: &Expr,
                              env: &Environment,
                              line: usize)
                              -> EvalResult<Object> {
        let value = self.eval(value, env)?;
        if value.is_return() {
            return Ok(value);
        }

        if !env.assign(name, value.clone()) {
            return Err(RuntimeError::UnknownIdentifier { name: name.to_string(),
                                                         line });
        }
        Ok(value)
    }

    /// Creates a closure over `env`.
    ///
    /// A named function is also bound under its name in `env`, which makes it
    /// visible to its own body and allows recursion.
    pub(crate) fn eval_function_literal(name: Option<&str>,
                                        params: &[String],
                                        body: &Rc<Block>,
                                        env: &Environment)
                                        -> Object {
        let function = Object::Function(Rc::new(Function { name:   name.map(str::to_string),
                                                           params: params.to_vec(),
                                                           body:   Rc::clone(body),
                                                           env:    env.clone(), }));

        if let Some(name) = name {
            env.set(name, function.clone());
        }
        function
    }
}
