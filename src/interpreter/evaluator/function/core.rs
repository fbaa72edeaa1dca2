use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator},
            function::{length, out},
        },
        value::{Arity, Builtin, Environment, Function, Object},
    },
};

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static registry handed to [`Evaluator::new`]),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// The standard builtins.
        pub static BUILTIN_TABLE: &[Builtin] = &[
            $(
                Builtin { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of the standard builtins.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "out"    => { arity: Arity::Any, func: out::out },
    "length" => { arity: Arity::Exact(1), func: length::length },
}

impl Evaluator {
    /// Evaluates a function call.
    ///
    /// The callee is evaluated first, then the arguments from left to right.
    ///
    /// # Errors
    /// - `NotAFunction` if the callee is neither a closure nor a builtin.
    /// - `ArgumentCountMismatch` if the argument count is not accepted.
    /// - Any error raised while evaluating the arguments or the body.
    pub(crate) fn eval_call(&self,
                            callee: &Expr,
                            arguments: &[Expr],
                            env: &Environment,
                            line: usize)
                            -> EvalResult<Object> {
        let callee = eval_operand!(self, callee, env);

        let mut args = Vec::with_capacity(arguments.len());
        for argument in arguments {
            args.push(eval_operand!(self, argument, env));
        }

        self.apply(&callee, args, line)
    }

    /// Applies a callable value to already evaluated arguments.
    ///
    /// # Errors
    /// See [`Evaluator::eval_call`].
    pub fn apply(&self, callee: &Object, args: Vec<Object>, line: usize) -> EvalResult<Object> {
        match callee {
            Object::Function(function) => self.call_function(function, args, line),
            Object::BuiltIn(builtin) => {
                if !builtin.arity.check(args.len()) {
                    let expected = match builtin.arity {
                        Arity::Exact(n) => n,
                        Arity::Any => args.len(),
                    };
                    return Err(RuntimeError::ArgumentCountMismatch { expected,
                                                                     found: args.len(),
                                                                     line });
                }
                (builtin.func)(&args, line)
            },
            other => Err(RuntimeError::NotAFunction { found: other.object_type(),
                                                      line }),
        }
    }

    /// Executes a user-defined function.
    ///
    /// Parameters are bound positionally in a new child of the function's
    /// captured scope, not of the caller's scope. The result is the value of
    /// an explicit `return`, or else the value of the last statement of the
    /// body.
    #[tracing::instrument(level = "debug", skip_all, fields(function = function.name.as_deref(), line = line))]
    fn call_function(&self,
                     function: &Function,
                     args: Vec<Object>,
                     line: usize)
                     -> EvalResult<Object> {
        if args.len() != function.params.len() {
            return Err(RuntimeError::ArgumentCountMismatch { expected: function.params.len(),
                                                             found: args.len(),
                                                             line });
        }

        let scope = Environment::new_child(&function.env);
        for (param, value) in function.params.iter().zip(args) {
            scope.set(param.as_str(), value);
        }

        Ok(self.eval_block(&function.body, &scope)?.unwrap_return())
    }
}
