use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Converts a language-level index into a position inside a collection of
/// length `len`.
///
/// ## Errors
/// Returns `RuntimeError::IndexOutOfBounds` if `index` is negative or not
/// smaller than `len`.
///
/// ## Example
/// ```
/// use jipl::{error::RuntimeError, util::num::checked_index};
///
/// assert_eq!(checked_index(2, 3, 1).unwrap(), 2);
///
/// let err = checked_index(-1, 3, 7).unwrap_err();
/// assert!(matches!(err, RuntimeError::IndexOutOfBounds { found: -1, line: 7, .. }));
/// ```
pub fn checked_index(index: i64, len: usize, line: usize) -> EvalResult<usize> {
    usize::try_from(index).ok()
                          .filter(|&i| i < len)
                          .ok_or(RuntimeError::IndexOutOfBounds { len,
                                                                  found: index,
                                                                  line })
}

/// Converts a host length into a language integer.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` if `value` exceeds `i64::MAX`.
///
/// ## Example
/// ```
/// use jipl::util::num::usize_to_i64_checked;
///
/// assert_eq!(usize_to_i64_checked(42, 0).unwrap(), 42);
/// ```
pub fn usize_to_i64_checked(value: usize, line: usize) -> EvalResult<i64> {
    i64::try_from(value).map_err(|_| RuntimeError::Overflow { line })
}
