use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, EvaluationContext},
};

impl EvaluationContext {
    /// Evaluates an arithmetic operation on two scalars.
    ///
    /// # Errors
    /// - `DivisionByZero` for `/` with a zero divisor.
    /// - `InvalidPower` for `**` without a real result (see `eval_pow`).
    ///
    /// The finiteness of the result is checked by the caller.
    ///
    /// # Example
    /// ```
    /// use formula_dispersion::{
    ///     ast::BinaryOperator, interpreter::evaluator::core::EvaluationContext, parse_formula,
    /// };
    ///
    /// let node = parse_formula("a * b").unwrap();
    /// let v = EvaluationContext::eval_scalar_op(BinaryOperator::Mul, 3.0, 4.0, 0, &node).unwrap();
    /// assert_eq!(v, 12.0);
    ///
    /// let node = parse_formula("a ** b").unwrap();
    /// assert_eq!(EvaluationContext::eval_scalar_op(BinaryOperator::Pow, 2.0, 3.0, 0, &node), Ok(8.0));
    /// assert!(EvaluationContext::eval_scalar_op(BinaryOperator::Pow, -2.0, 0.5, 0, &node).is_err());
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: f64,
                          right: f64,
                          sample: usize,
                          node: &Expr)
                          -> EvalResult<f64> {
        match op {
            BinaryOperator::Add => Ok(left + right),
            BinaryOperator::Sub => Ok(left - right),
            BinaryOperator::Mul => Ok(left * right),
            BinaryOperator::Div => {
                if right == 0.0 {
                    Err(RuntimeError::DivisionByZero { expr: node.to_string(),
                                                       sample,
                                                       position: node.position() })
                } else {
                    Ok(left / right)
                }
            },
            BinaryOperator::Pow => Self::eval_pow(left, right, sample, node),
        }
    }
}
