use ndarray::Array1;

use crate::interpreter::{
    evaluator::core::{EvalResult, EvaluationContext},
    value::core::Value,
};

impl EvaluationContext {
    /// Applies an element-wise binary operation to one or two values.
    ///
    /// This function unifies all binary evaluation paths:
    /// - Array with array
    /// - Array with scalar
    /// - Scalar with array
    /// - Scalar with scalar
    ///
    /// A scalar operand is broadcast against every sample of an array
    /// operand. Two scalars stay scalar. The scalar operation is supplied via
    /// `f`, which also receives the sample index for error reporting.
    ///
    /// Both arrays of a context share its sample count, so array operands
    /// always have equal lengths.
    ///
    /// # Parameters
    /// - `left`: Left-hand operand.
    /// - `right`: Right-hand operand.
    /// - `f`: Scalar operation `(left, right, sample)`.
    ///
    /// # Returns
    /// A scalar if both operands are scalars, an array otherwise.
    ///
    /// # Example
    /// ```
    /// use formula_dispersion::interpreter::{evaluator::core::EvaluationContext,
    ///                                       value::core::Value};
    /// use ndarray::array;
    ///
    /// let left = Value::Array(array![1.0, 2.0]);
    /// let right = Value::Scalar(10.0);
    ///
    /// let r = EvaluationContext::map_array_binary(&left, &right, &|l, r, _| Ok(l + r)).unwrap();
    ///
    /// assert_eq!(r, Value::Array(array![11.0, 12.0]));
    /// ```
    pub fn map_array_binary<F>(left: &Value, right: &Value, f: &F) -> EvalResult<Value>
        where F: Fn(f64, f64, usize) -> EvalResult<f64>
    {
        match (left, right) {
            (Value::Array(larr), Value::Array(rarr)) => {
                debug_assert_eq!(larr.len(), rarr.len());

                let out = larr.iter()
                              .zip(rarr.iter())
                              .enumerate()
                              .map(|(sample, (l, r))| f(*l, *r, sample))
                              .collect::<EvalResult<Vec<f64>>>()?;
                Ok(Value::Array(Array1::from_vec(out)))
            },
            (Value::Array(_), Value::Scalar(r)) => left.try_map(|l, sample| f(l, *r, sample)),
            (Value::Scalar(l), Value::Array(_)) => right.try_map(|r, sample| f(*l, r, sample)),
            (Value::Scalar(l), Value::Scalar(r)) => Ok(Value::Scalar(f(*l, *r, 0)?)),
        }
    }
}
