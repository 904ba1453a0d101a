use ndarray::Array1;

use crate::interpreter::evaluator::core::EvalResult;

/// Represents the value of a sub-expression during evaluation.
///
/// Literals, constants, per-term `sum[...]` elements and anything computed
/// only from them stay scalar. Only sub-expressions that depend on the
/// independent variable carry one value per sample. A scalar stands for the
/// same value at every sample; [`Value::into_array`] makes that broadcast
/// explicit.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The same value at every sample.
    Scalar(f64),
    /// One value per sample.
    Array(Array1<f64>),
}

impl Value {
    /// Broadcasts the value to `len` samples.
    ///
    /// Arrays are returned unchanged; they always hold one value per sample
    /// already.
    ///
    /// # Example
    /// ```
    /// use formula_dispersion::interpreter::value::core::Value;
    /// use ndarray::array;
    ///
    /// assert_eq!(Value::Scalar(2.5).into_array(3), array![2.5, 2.5, 2.5]);
    /// assert_eq!(Value::Array(array![1.0, 2.0]).into_array(2), array![1.0, 2.0]);
    /// ```
    #[must_use]
    pub fn into_array(self, len: usize) -> Array1<f64> {
        match self {
            Self::Scalar(v) => Array1::from_elem(len, v),
            Self::Array(values) => values,
        }
    }

    /// Applies a fallible function to every element, passing the sample
    /// index along for error reporting.
    ///
    /// A scalar stays scalar and is reported as sample `0`. The first error
    /// aborts the whole map.
    ///
    /// # Errors
    /// Propagates the first error returned by `f`.
    pub fn try_map<F>(&self, f: F) -> EvalResult<Self>
        where F: Fn(f64, usize) -> EvalResult<f64>
    {
        match self {
            Self::Scalar(v) => Ok(Self::Scalar(f(*v, 0)?)),
            Self::Array(values) => {
                let out = values.iter()
                                .enumerate()
                                .map(|(sample, v)| f(*v, sample))
                                .collect::<EvalResult<Vec<f64>>>()?;
                Ok(Self::Array(Array1::from_vec(out)))
            },
        }
    }
}
