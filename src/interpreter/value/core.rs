use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::function::{Builtin, Function},
    },
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every value an expression can produce. Cloning is cheap:
/// strings, arrays and functions are reference counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Object {
    /// A 64-bit signed integer.
    Integer(i64),
    /// An immutable string.
    Str(Rc<str>),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators and logical operations. Used as the
    /// condition of `if` and `for`, where only `true` counts as true.
    Boolean(bool),
    /// The value of expressions that produce nothing, such as an `if` whose
    /// condition failed and that has no `else`.
    Undefined,
    /// An early `return` travelling up to the enclosing call.
    ///
    /// Never observable as the result of a call or a program.
    Return(Box<Self>),
    /// A user-defined function together with its captured scope.
    Function(Rc<Function>),
    /// A host-implemented function.
    BuiltIn(Builtin),
    /// An array of `Object` elements.
    Array(Rc<Vec<Self>>),
}

/// The shared `true` value.
pub const TRUE: Object = Object::Boolean(true);
/// The shared `false` value.
pub const FALSE: Object = Object::Boolean(false);
/// The shared undefined value.
pub const UNDEFINED: Object = Object::Undefined;

/// The runtime type tag of an [`Object`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    /// [`Object::Integer`]
    Integer,
    /// [`Object::Str`]
    Str,
    /// [`Object::Boolean`]
    Boolean,
    /// [`Object::Undefined`]
    Undefined,
    /// [`Object::Return`]
    Return,
    /// [`Object::Function`]
    Function,
    /// [`Object::BuiltIn`]
    BuiltIn,
    /// [`Object::Array`]
    Array,
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Integer => "INTEGER",
            Self::Str => "STRING",
            Self::Boolean => "BOOLEAN",
            Self::Undefined => "UNDEFINED",
            Self::Return => "RETURN",
            Self::Function => "FUNCTION",
            Self::BuiltIn => "BUILTIN",
            Self::Array => "ARRAY",
        };
        write!(f, "{name}")
    }
}

impl From<i64> for Object {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Object {
    fn from(v: bool) -> Self {
        if v { TRUE } else { FALSE }
    }
}

impl From<&str> for Object {
    fn from(v: &str) -> Self {
        Self::Str(Rc::from(v))
    }
}

impl From<String> for Object {
    fn from(v: String) -> Self {
        Self::Str(Rc::from(v))
    }
}

impl From<Vec<Self>> for Object {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl Object {
    /// Returns the runtime type tag.
    ///
    /// # Example
    /// ```
    /// use jipl::interpreter::value::{Object, ObjectType};
    ///
    /// assert_eq!(Object::Integer(3).object_type(), ObjectType::Integer);
    /// assert_eq!(Object::from("hi").object_type().to_string(), "STRING");
    /// ```
    #[must_use]
    pub const fn object_type(&self) -> ObjectType {
        match self {
            Self::Integer(_) => ObjectType::Integer,
            Self::Str(_) => ObjectType::Str,
            Self::Boolean(_) => ObjectType::Boolean,
            Self::Undefined => ObjectType::Undefined,
            Self::Return(_) => ObjectType::Return,
            Self::Function(_) => ObjectType::Function,
            Self::BuiltIn(_) => ObjectType::BuiltIn,
            Self::Array(_) => ObjectType::Array,
        }
    }

    /// Extracts an integer, or returns a type error.
    ///
    /// # Errors
    /// `RuntimeError::TypeError` if the value is not an integer.
    pub fn as_integer(&self, line: usize) -> EvalResult<i64> {
        match self {
            Self::Integer(n) => Ok(*n),
            other => Err(RuntimeError::TypeError { details: format!("expected INTEGER, found {}",
                                                                    other.object_type()),
                                                   line }),
        }
    }

    /// Removes one layer of [`Object::Return`], if present.
    #[must_use]
    pub fn unwrap_return(self) -> Self {
        match self {
            Self::Return(inner) => *inner,
            other => other,
        }
    }

    /// Returns `true` if the value is a pending [`Object::Return`].
    #[must_use]
    pub const fn is_return(&self) -> bool {
        matches!(self, Self::Return(..))
    }

    /// Returns `true` only for the boolean `true`.
    #[must_use]
    pub const fn is_true(&self) -> bool {
        matches!(self, Self::Boolean(true))
    }
}

impl std::fmt::Display for Object {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Undefined => write!(f, "undefined"),
            Self::Return(inner) => write!(f, "{inner}"),
            Self::Function(function) => write!(f, "{function}"),
            Self::BuiltIn(builtin) => write!(f, "builtin function {}", builtin.name),
            Self::Array(a) => {
                write!(f, "[")?;

                for (index, value) in a.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
        }
    }
}
