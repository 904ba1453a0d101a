use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, EvaluationContext},
    util::num::is_integral,
};

impl EvaluationContext {
    /// Evaluates an exponentiation on two scalars.
    ///
    /// The result must be real: a negative base needs an integral exponent,
    /// and a zero base needs a non-negative one.
    ///
    /// # Parameters
    /// - `base`: The base value.
    /// - `exponent`: The exponent value.
    /// - `sample`: Sample index for error reporting.
    /// - `node`: The `**` node, named in errors.
    ///
    /// # Errors
    /// Returns `InvalidPower` when `base ** exponent` has no real value.
    ///
    /// # Example
    /// ```
    /// use formula_dispersion::{interpreter::evaluator::core::EvaluationContext, parse_formula};
    ///
    /// let node = parse_formula("b ** e").unwrap();
    ///
    /// assert_eq!(EvaluationContext::eval_pow(2.0, 10.0, 0, &node).unwrap(), 1024.0);
    /// assert_eq!(EvaluationContext::eval_pow(-2.0, 3.0, 0, &node).unwrap(), -8.0);
    /// assert!(EvaluationContext::eval_pow(-2.0, 0.5, 0, &node).is_err());
    /// assert!(EvaluationContext::eval_pow(0.0, -1.0, 0, &node).is_err());
    /// ```
    pub fn eval_pow(base: f64, exponent: f64, sample: usize, node: &Expr) -> EvalResult<f64> {
        let undefined = (base < 0.0 && !is_integral(exponent)) || (base == 0.0 && exponent < 0.0);
        if undefined {
            return Err(RuntimeError::InvalidPower { base,
                                                    exponent,
                                                    expr: node.to_string(),
                                                    sample,
                                                    position: node.position() });
        }
        Ok(base.powf(exponent))
    }
}
