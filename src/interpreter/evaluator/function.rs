/// Call evaluation and the builtin registry.
///
/// Resolves the callee, checks arity, and runs either a closure body or a
/// builtin.
pub mod core;
/// The `out` builtin.
///
/// Prints each argument to standard output.
pub mod out;
/// The `length` builtin.
///
/// Counts the code points of a string or the elements of an array.
pub mod length;
