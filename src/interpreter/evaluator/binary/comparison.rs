use crate::{ast::InfixOperator, interpreter::evaluator::core::Evaluator};

impl Evaluator {
    /// Compares two integers.
    ///
    /// Non-comparison operators yield `false`; callers only pass `<`, `>`,
    /// `<=`, `>=`, `==` and `!=`.
    ///
    /// # Example
    /// ```
    /// use jipl::{ast::InfixOperator, interpreter::evaluator::Evaluator};
    ///
    /// assert!(Evaluator::eval_comparison(InfixOperator::Less, -2, 3));
    /// assert!(!Evaluator::eval_comparison(InfixOperator::NotEqual, 7, 7));
    /// ```
    #[must_use]
    pub const fn eval_comparison(op: InfixOperator, left: i64, right: i64) -> bool {
        use InfixOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        match op {
            Less => left < right,
            Greater => left > right,
            LessEqual => left <= right,
            GreaterEqual => left >= right,
            Equal => left == right,
            NotEqual => left != right,
            _ => false,
        }
    }
}
