use crate::interpreter::{
    evaluator::core::EvalResult,
    value::{Object, UNDEFINED},
};

/// Prints each argument on its own line and returns `undefined`.
///
/// Accepts any number of arguments. Values are formatted using their
/// `Display` implementation, so strings are printed without quotes.
///
/// # Example
/// ```
/// use jipl::interpreter::{evaluator::function::out::out, value::Object};
///
/// // The function prints to stdout, but the doctest only checks the result.
/// let result = out(&[Object::Integer(42), Object::from("hi")], 1).unwrap();
///
/// assert_eq!(result, Object::Undefined);
/// ```
pub fn out(args: &[Object], _line: usize) -> EvalResult<Object> {
    for arg in args {
        println!("{arg}");
    }
    Ok(UNDEFINED)
}
