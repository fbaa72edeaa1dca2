/// Operand-type dispatch for binary operators.
pub mod core;
/// Integer arithmetic.
pub mod scalar;
/// Integer ordering and equality.
pub mod comparison;
/// Boolean operators.
pub mod logic;
/// String concatenation and equality.
pub mod string;
