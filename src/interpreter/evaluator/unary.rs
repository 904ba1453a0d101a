use crate::{
    ast::UnaryOperator,
    interpreter::{
        evaluator::core::{EvaluationContext, EvalResult},
        value::core::Value,
    },
};

impl EvaluationContext {
    /// Evaluates a unary operation on a value.
    ///
    /// `Negate` flips the sign of a scalar, or of every sample of an array.
    /// Negating a finite number is always finite, so this never fails.
    ///
    /// # Example
    /// ```
    /// use formula_dispersion::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::EvaluationContext, value::core::Value},
    /// };
    ///
    /// let v = EvaluationContext::eval_unary(UnaryOperator::Negate, &Value::Scalar(5.0)).unwrap();
    /// assert_eq!(v, Value::Scalar(-5.0));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => value.try_map(|v, _| Ok(-v)),
        }
    }
}
