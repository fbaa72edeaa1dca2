use crate::{
    ast::{Block, Definition, Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::function::core::BUILTIN_TABLE,
        value::{Builtin, Environment, Object, UNDEFINED},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// A tree-walking evaluator.
///
/// The evaluator itself holds no program state; all bindings live in the
/// [`Environment`] passed to each call. It only carries the immutable
/// registry of builtins, consulted when a name is not bound in scope.
///
/// ## Usage
///
/// ```
/// use jipl::interpreter::{
///     evaluator::Evaluator,
///     lexer::Scanner,
///     parser::Parser,
///     value::{Environment, Object},
/// };
///
/// let program = Parser::new(Scanner::new("def x = 5; x + 3;")).parse();
/// let env = Environment::new_root();
///
/// let value = Evaluator::new().eval_program(&program, &env).unwrap();
/// assert_eq!(value, Object::Integer(8));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Evaluator {
    builtins: &'static [Builtin],
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Creates an evaluator with the standard builtins `out` and `length`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_builtins(BUILTIN_TABLE)
    }

    /// Creates an evaluator with a custom builtin registry.
    #[must_use]
    pub const fn with_builtins(builtins: &'static [Builtin]) -> Self {
        Self { builtins }
    }

    /// Finds a builtin by name.
    #[must_use]
    pub fn builtin(&self, name: &str) -> Option<Builtin> {
        self.builtins.iter().find(|b| b.name == name).copied()
    }

    /// Evaluates a program and returns the value of its last statement.
    ///
    /// A `return` stops the program early; its value becomes the result.
    /// An empty program evaluates to `undefined`.
    ///
    /// # Errors
    /// The first runtime error stops evaluation and is returned.
    pub fn eval_program(&self, program: &Program, env: &Environment) -> EvalResult<Object> {
        let mut result = UNDEFINED;

        for statement in &program.statements {
            result = self.eval_statement(statement, env)?;
            if result.is_return() {
                return Ok(result.unwrap_return());
            }
        }

        Ok(result)
    }

    /// Evaluates the statements of a block in `env`.
    ///
    /// Blocks do not open a scope of their own; function calls create one
    /// before evaluating their body. A pending `return` is propagated as is,
    /// so the enclosing call can detect it.
    ///
    /// # Errors
    /// The first runtime error stops evaluation and is returned.
    pub fn eval_block(&self, block: &Block, env: &Environment) -> EvalResult<Object> {
        let mut result = UNDEFINED;

        for statement in &block.statements {
            result = self.eval_statement(statement, env)?;
            if result.is_return() {
                break;
            }
        }

        Ok(result)
    }

    /// Evaluates a single statement.
    ///
    /// # Errors
    /// Propagates errors from the evaluated expressions.
    /// `RuntimeError::ReturnOutsideFunction` for a `return` in the root scope.
    pub fn eval_statement(&self, statement: &Statement, env: &Environment) -> EvalResult<Object> {
        match statement {
            Statement::Def(definition) => self.eval_definition(definition, env),
            Statement::Return { value, line } => {
                if !env.has_outer() {
                    return Err(RuntimeError::ReturnOutsideFunction { line: *line });
                }
                let value = match value {
                    Some(expr) => self.eval(expr, env)?.unwrap_return(),
                    None => UNDEFINED,
                };
                Ok(Object::Return(Box::new(value)))
            },
            Statement::Expression { expr, .. } => self.eval(expr, env),
            Statement::Block(block) => self.eval_block(block, env),
        }
    }

    /// Binds a definition in `env` and returns the bound value.
    ///
    /// # Errors
    /// Propagates errors from the value expression.
    pub fn eval_definition(&self, definition: &Definition, env: &Environment) -> EvalResult<Object> {
        let value = self.eval(&definition.value, env)?;
        if value.is_return() {
            return Ok(value);
        }

        Ok(env.set(definition.name.clone(), value))
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Operands are
    /// always evaluated left to right and completely before their operator is
    /// applied, including for `&&` and `||`.
    ///
    /// # Errors
    /// Any runtime error raised by the expression or its sub-expressions.
    pub fn eval(&self, expr: &Expr, env: &Environment) -> EvalResult<Object> {
        match expr {
            Expr::Identifier { name, line } => self.eval_identifier(name, env, *line),
            Expr::Integer { value, .. } => Ok(Object::Integer(*value)),
            Expr::Str { value, .. } => Ok(Object::from(value.as_str())),
            Expr::Boolean { value, .. } => Ok(Object::from(*value)),
            Expr::Prefix { op, operand, line } => {
                let operand = eval_operand!(self, operand, env);
                Self::eval_prefix(*op, &operand, *line)
            },
            Expr::Infix { left, op, right, line } => {
                let left = eval_operand!(self, left, env);
                let right = eval_operand!(self, right, env);
                Self::eval_infix(*op, &left, &right, *line)
            },
            Expr::Postfix { op, operand, line } => {
                let operand = eval_operand!(self, operand, env);
                Self::eval_postfix(*op, &operand, *line)
            },
            Expr::If { condition,
                       consequence,
                       alternative,
                       .. } => self.eval_if(condition, consequence, alternative.as_ref(), env),
            Expr::Function { name, params, body, .. } => {
                Ok(Self::eval_function_literal(name.as_deref(), params, body, env))
            },
            Expr::Call { callee,
                         arguments,
                         line, } => self.eval_call(callee, arguments, env, *line),
            Expr::For { init,
                        condition,
                        post,
                        body,
                        .. } => self.eval_for(init, condition, post, body, env),
            Expr::Assign { name, value, line } => self.eval_assign(name, value, env, *line),
            Expr::Array { elements, .. } => self.eval_array_literal(elements, env),
            Expr::Index { collection,
                          index,
                          line, } => self.eval_index(collection, index, env, *line),
        }
    }
}
