use std::{fmt, rc::Rc};

use crate::{
    ast::Block,
    interpreter::{
        evaluator::core::EvalResult,
        value::{core::Object, environment::Environment},
    },
};

/// A user-defined function and the scope it closes over.
///
/// `env` is the environment that was active where the function expression
/// was evaluated; every call runs in a fresh child of it.
pub struct Function {
    /// The name the function was defined under, if any.
    pub name:   Option<String>,
    /// Parameter names in order.
    pub params: Vec<String>,
    /// The function body.
    pub body:   Rc<Block>,
    /// The captured scope.
    pub env:    Environment,
}

// The captured scope usually contains the function itself, so neither
// impl descends into `env`.
impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
         .field("name", &self.name)
         .field("params", &self.params)
         .field("body", &self.body)
         .finish_non_exhaustive()
    }
}

/// Functions are equal only to themselves.
impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Eq for Function {}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "function")?;
        if let Some(name) = &self.name {
            write!(f, " {name}")?;
        }
        write!(f, "({}){}", self.params.join(","), self.body)
    }
}

/// Signature of a host-implemented function.
///
/// A builtin receives the evaluated arguments and the line of the call.
pub type BuiltinFn = fn(&[Object], usize) -> EvalResult<Object>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `Any` accepts any number of arguments, including none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many arguments.
    Exact(usize),
    /// Any number of arguments.
    Any,
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    #[must_use]
    pub const fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::Any => true,
        }
    }
}

/// A host-implemented function exposed under a fixed name.
#[derive(Clone, Copy)]
pub struct Builtin {
    /// The name the builtin is looked up by.
    pub name:  &'static str,
    /// Accepted argument counts.
    pub arity: Arity,
    /// The implementation.
    pub func:  BuiltinFn,
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builtin")
         .field("name", &self.name)
         .field("arity", &self.arity)
         .finish_non_exhaustive()
    }
}

/// Builtins are identified by name.
impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Builtin {}
