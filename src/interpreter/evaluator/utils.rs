use crate::{ast::Expr, error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// The aggregate keyword. It can only appear as `sum[...]`.
pub const SUM_KEYWORD: &str = "sum";

/// Identifiers that can be neither symbols nor assignment targets.
pub const RESERVED_IDENTIFIERS: &[&str] = &[SUM_KEYWORD];

/// Checks whether an identifier is reserved.
///
/// Built-in function names are not reserved: `sin` followed by `(` is a call,
/// a bare `sin` is an ordinary symbol.
///
/// # Example
/// ```
/// use formula_dispersion::interpreter::evaluator::utils::is_reserved_identifier;
///
/// assert!(is_reserved_identifier("sum"));
/// assert!(!is_reserved_identifier("sin"));
/// assert!(!is_reserved_identifier("lbda"));
/// ```
#[must_use]
pub fn is_reserved_identifier(name: &str) -> bool {
    RESERVED_IDENTIFIERS.contains(&name)
}

/// Rejects infinite and NaN results.
///
/// # Parameters
/// - `value`: Result of an operation for one sample.
/// - `sample`: Index of that sample.
/// - `node`: The sub-expression that produced the value.
///
/// # Errors
/// Returns `NonFinite` naming `node` when `value` is not finite.
///
/// # Example
/// ```
/// use formula_dispersion::{interpreter::evaluator::utils::check_finite, parse_formula};
///
/// let node = parse_formula("exp(x)").unwrap();
///
/// assert_eq!(check_finite(1.5, 0, &node), Ok(1.5));
/// assert!(check_finite(f64::INFINITY, 3, &node).is_err());
/// ```
pub fn check_finite(value: f64, sample: usize, node: &Expr) -> EvalResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RuntimeError::NonFinite { expr: node.to_string(),
                                      sample,
                                      position: node.position() })
    }
}
