use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::{
            core::{EvalResult, EvaluationContext},
            utils::check_finite,
        },
        value::core::Value,
    },
};

impl EvaluationContext {
    /// Evaluates a binary operation between two values.
    ///
    /// Every operator goes through `eval_scalar_op`, applied sample by sample
    /// with [`map_array_binary`](Self::map_array_binary), and every result is
    /// checked to be finite.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `node`: The binary node being evaluated, named in domain errors.
    ///
    /// # Returns
    /// The evaluated value, or the error of the first failing sample.
    ///
    /// # Example
    /// ```
    /// use formula_dispersion::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::EvaluationContext, value::core::Value},
    ///     parse_formula,
    /// };
    /// use ndarray::array;
    ///
    /// let node = parse_formula("x / c").unwrap();
    /// let left = Value::Array(array![1.0, 2.0, 3.0]);
    ///
    /// let ok = EvaluationContext::eval_binary(BinaryOperator::Div,
    ///                                         &left,
    ///                                         &Value::Scalar(2.0),
    ///                                         &node).unwrap();
    /// assert_eq!(ok, Value::Array(array![0.5, 1.0, 1.5]));
    ///
    /// let err = EvaluationContext::eval_binary(BinaryOperator::Div,
    ///                                          &left,
    ///                                          &Value::Scalar(0.0),
    ///                                          &node);
    /// assert!(err.is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       node: &Expr)
                       -> EvalResult<Value> {
        Self::map_array_binary(left, right, &|l, r, sample| {
            check_finite(Self::eval_scalar_op(op, l, r, sample, node)?, sample, node)
        })
    }
}
