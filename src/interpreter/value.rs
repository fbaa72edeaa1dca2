/// Runtime objects.
///
/// Defines the `Object` enum produced by evaluation, its type tags and its
/// textual rendering.
pub mod core;
/// Callable objects.
///
/// User-defined closures and host-implemented builtins.
pub mod function;
/// Lexical scopes.
///
/// The `Environment` scope chain shared between the evaluator and the
/// closures it creates.
pub mod environment;

pub use self::{
    core::{FALSE, Object, ObjectType, TRUE, UNDEFINED},
    environment::Environment,
    function::{Arity, Builtin, BuiltinFn, Function},
};
