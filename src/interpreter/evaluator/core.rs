use std::collections::HashMap;

use ndarray::{Array1, ArrayBase, Data, Dimension, Ix1};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{evaluator::utils::check_finite, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Scalar bindings of the `sum[...]` term being evaluated, from list
/// parameter name to the element of the current term.
pub type Bindings = HashMap<String, f64>;

/// Stores everything a formula can refer to during evaluation.
///
/// The context is read-only while a formula is evaluated. It holds:
/// - the name and sample values of the independent variable (for example the
///   wavelength axis),
/// - named scalar constants,
/// - named lists, consumed only inside `sum[...]`.
///
/// ## Usage
///
/// A context is built once, then any number of parsed formulas can be
/// evaluated against it, from any number of threads.
///
/// ```
/// use formula_dispersion::{EvaluationContext, parse_formula};
///
/// let context = EvaluationContext::from_slice("lbda", &[1.0, 2.0, 3.0])
///     .with_constant("a", 2.0)
///     .with_list("w", vec![1.0, 1.0]);
///
/// let expr = parse_formula("n = a * lbda + sum[w]").unwrap();
/// let result = context.evaluate(&expr).unwrap();
///
/// assert_eq!(result.to_vec(), vec![4.0, 6.0, 8.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationContext {
    independent_name:   String,
    independent_values: Array1<f64>,
    constants:          HashMap<String, f64>,
    lists:              HashMap<String, Vec<f64>>,
}

impl EvaluationContext {
    /// Creates a context over the given sample axis, with no constants and no
    /// lists.
    ///
    /// The samples may be supplied as an array of any dimensionality, but only
    /// rank 1 is accepted.
    ///
    /// # Errors
    /// Returns `RankMismatch` if `independent_values` is not one-dimensional.
    ///
    /// # Example
    /// ```
    /// use formula_dispersion::{ErrorKind, EvaluationContext};
    /// use ndarray::array;
    ///
    /// assert!(EvaluationContext::new("x", &array![1.0, 2.0]).is_ok());
    ///
    /// let err = EvaluationContext::new("x", &array![[1.0, 2.0], [3.0, 4.0]]).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
    /// ```
    pub fn new<S, D>(independent_name: impl Into<String>,
                     independent_values: &ArrayBase<S, D>)
                     -> EvalResult<Self>
        where S: Data<Elem = f64>,
              D: Dimension
    {
        let values = independent_values.view()
                                       .into_dimensionality::<Ix1>()
                                       .map_err(|_| RuntimeError::RankMismatch { found:
                                                                                     independent_values.ndim(), })?;

        Ok(Self { independent_name:   independent_name.into(),
                  independent_values: values.to_owned(),
                  constants:          HashMap::new(),
                  lists:              HashMap::new(), })
    }

    /// Creates a context over samples held in a slice. A slice is always
    /// one-dimensional, so this cannot fail.
    #[must_use]
    pub fn from_slice(independent_name: impl Into<String>, independent_values: &[f64]) -> Self {
        Self { independent_name:   independent_name.into(),
               independent_values: Array1::from_vec(independent_values.to_vec()),
               constants:          HashMap::new(),
               lists:              HashMap::new(), }
    }

    /// Adds (or replaces) a scalar constant.
    #[must_use]
    pub fn with_constant(mut self, name: impl Into<String>, value: f64) -> Self {
        self.constants.insert(name.into(), value);
        self
    }

    /// Adds (or replaces) several scalar constants.
    #[must_use]
    pub fn with_constants<K>(mut self, constants: impl IntoIterator<Item = (K, f64)>) -> Self
        where K: Into<String>
    {
        self.constants
            .extend(constants.into_iter().map(|(name, value)| (name.into(), value)));
        self
    }

    /// Adds (or replaces) a list parameter for use inside `sum[...]`.
    #[must_use]
    pub fn with_list(mut self, name: impl Into<String>, values: impl Into<Vec<f64>>) -> Self {
        self.lists.insert(name.into(), values.into());
        self
    }

    /// Adds (or replaces) several list parameters.
    #[must_use]
    pub fn with_lists<K, V>(mut self, lists: impl IntoIterator<Item = (K, V)>) -> Self
        where K: Into<String>,
              V: Into<Vec<f64>>
    {
        self.lists
            .extend(lists.into_iter().map(|(name, values)| (name.into(), values.into())));
        self
    }

    /// The name of the independent variable.
    #[must_use]
    pub fn independent_name(&self) -> &str {
        &self.independent_name
    }

    /// The samples of the independent variable.
    #[must_use]
    pub const fn independent_values(&self) -> &Array1<f64> {
        &self.independent_values
    }

    /// The number of samples, and therefore the length of every result.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.independent_values.len()
    }

    /// Looks up a scalar constant.
    #[must_use]
    pub fn constant(&self, name: &str) -> Option<f64> {
        self.constants.get(name).copied()
    }

    /// Looks up a list parameter.
    #[must_use]
    pub fn list(&self, name: &str) -> Option<&[f64]> {
        self.lists.get(name).map(Vec::as_slice)
    }

    /// Evaluates a parsed formula, producing one value per sample.
    ///
    /// The tree is only read, so it can be evaluated again against another
    /// context.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` met; no partial result is produced.
    pub fn evaluate(&self, expr: &Expr) -> EvalResult<Array1<f64>> {
        match self.eval(expr, None) {
            Ok(value) => {
                log::debug!("evaluated {expr} over {} samples", self.sample_count());
                Ok(value.into_array(self.sample_count()))
            },
            Err(e) => {
                log::debug!("evaluation of {expr} failed: {e}");
                Err(e)
            },
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the recursive workhorse behind [`evaluate`](Self::evaluate).
    /// The evaluator dispatches based on expression variant: literals,
    /// symbols, unary and binary operations, function calls, aggregates and
    /// assignments.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `bindings`: Element bindings when evaluating a `sum[...]` term.
    ///
    /// # Returns
    /// A scalar, or an array with one value per sample. Literals and resolved
    /// symbols are checked to be finite, like every computed result.
    pub fn eval(&self, expr: &Expr, bindings: Option<&Bindings>) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::Scalar(check_finite(*value, 0, expr)?)),
            Expr::Variable { name, position } => {
                self.eval_variable(name, *position, bindings)?
                    .try_map(|v, sample| check_finite(v, sample, expr))
            },
            Expr::UnaryOp { op, expr: operand, .. } => {
                let value = self.eval(operand, bindings)?;
                Self::eval_unary(*op, &value)
            },
            Expr::BinaryOp { left, op, right, .. } => {
                let left = self.eval(left, bindings)?;
                let right = self.eval(right, bindings)?;
                Self::eval_binary(*op, &left, &right, expr)
            },
            Expr::FunctionCall { name, arguments, .. } => {
                self.eval_function_call(name, arguments, expr, bindings)
            },
            Expr::Sum { body, .. } => self.eval_sum(body, expr, bindings),
            Expr::Assignment { value, .. } => self.eval(value, bindings),
        }
    }

    /// Resolves a symbol.
    ///
    /// The lookup order is: the independent variable, the element bindings
    /// of the current `sum[...]` term, the scalar constants.
    ///
    /// # Errors
    /// - `ListOutsideSum` if the name only exists as a list parameter.
    /// - `UnknownSymbol` if the name is not bound at all.
    ///
    /// # Example
    /// ```
    /// use formula_dispersion::{EvaluationContext, interpreter::value::core::Value};
    ///
    /// let ctx = EvaluationContext::from_slice("x", &[1.0, 2.0]).with_constant("b", 4.0);
    ///
    /// assert_eq!(ctx.eval_variable("b", 0, None).unwrap(), Value::Scalar(4.0));
    /// assert!(ctx.eval_variable("c", 0, None).is_err());
    /// ```
    pub fn eval_variable(&self,
                         name: &str,
                         position: usize,
                         bindings: Option<&Bindings>)
                         -> EvalResult<Value> {
        if name == self.independent_name {
            return Ok(Value::Array(self.independent_values.clone()));
        }
        if let Some(b) = bindings
           && let Some(value) = b.get(name)
        {
            return Ok(Value::Scalar(*value));
        }
        if let Some(value) = self.constants.get(name) {
            return Ok(Value::Scalar(*value));
        }
        if self.lists.contains_key(name) {
            return Err(RuntimeError::ListOutsideSum { name: name.to_owned(),
                                                      position });
        }
        Err(RuntimeError::UnknownSymbol { name: name.to_owned(),
                                          position })
    }
}

/// Evaluates a parsed formula against a context.
///
/// Equivalent to [`EvaluationContext::evaluate`].
///
/// # Errors
/// Returns the first `RuntimeError` met during evaluation.
pub fn evaluate(expr: &Expr, context: &EvaluationContext) -> EvalResult<Array1<f64>> {
    context.evaluate(expr)
}
