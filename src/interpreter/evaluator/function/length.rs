use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Object},
    util::num::usize_to_i64_checked,
};

/// Returns the length of a string or an array.
///
/// Strings are measured in code points, not bytes.
///
/// # Errors
/// `InvalidArgument` for any other type.
///
/// # Example
/// ```
/// use jipl::interpreter::{evaluator::function::length::length, value::Object};
///
/// assert_eq!(length(&[Object::from("héllo")], 1).unwrap(), Object::Integer(5));
/// assert!(length(&[Object::Integer(5)], 1).is_err());
/// ```
pub fn length(args: &[Object], line: usize) -> EvalResult<Object> {
    let len = match args.first() {
        Some(Object::Str(text)) => text.chars().count(),
        Some(Object::Array(elements)) => elements.len(),
        Some(other) => {
            return Err(RuntimeError::InvalidArgument { details: format!("length of {} is not supported",
                                                                        other.object_type()),
                                                       line });
        },
        None => {
            return Err(RuntimeError::ArgumentCountMismatch { expected: 1,
                                                             found: 0,
                                                             line });
        },
    };

    Ok(Object::Integer(usize_to_i64_checked(len, line)?))
}
