/// Numeric conversion helpers.
///
/// Safe conversions between the interpreter's `i64` integers and the `usize`
/// lengths and positions of host collections. Every helper returns an
/// `EvalResult` instead of truncating.
pub mod num;
