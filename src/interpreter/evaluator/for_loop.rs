use tracing::debug;

use crate::{
    ast::{Block, Definition, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::{Environment, Object, UNDEFINED},
    },
};

impl Evaluator {
    /// Evaluates a C-style `for` loop.
    ///
    /// The init definition is bound in `env`, so the loop variable stays
    /// visible after the loop ends. Each iteration evaluates the condition,
    /// stops unless it is the boolean `true`, runs the body in `env`, and then
    /// evaluates the post expression. Postfix expressions do not mutate on
    /// their own; when `post` is `name++` or `name--` the new value is written
    /// back to the nearest binding of `name`.
    ///
    /// A `return` inside the body ends the loop and propagates to the
    /// enclosing call. Otherwise the loop yields `undefined`.
    ///
    /// # Errors
    /// Propagates errors from any loop part.
    pub(crate) fn eval_for(&self,
                           init: &Definition,
                           condition: &Expr,
                           post: &Expr,
                           body: &Block,
                           env: &Environment)
                           -> EvalResult<Object> {
        let start = self.eval_definition(init, env)?;
        if start.is_return() {
            return Ok(start);
        }

        let mut iterations = 0_usize;

        loop {
            let test = eval_operand!(self, condition, env);
            if !test.is_true() {
                break;
            }

            let result = self.eval_block(body, env)?;
            if result.is_return() {
                debug!(iterations, "for loop left by return");
                return Ok(result);
            }

            let next = eval_operand!(self, post, env);
            if let Expr::Postfix { operand, line, .. } = post
               && let Expr::Identifier { name, .. } = operand.as_ref()
               && !env.assign(name, next)
            {
                return Err(RuntimeError::UnknownIdentifier { name: name.clone(),
                                                             line: *line, });
            }

            iterations += 1;
        }

        debug!(iterations, "for loop finished");
        Ok(UNDEFINED)
    }
}
