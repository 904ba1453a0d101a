/// Numeric helpers.
///
/// Small predicates on `f64` values shared by the evaluator, such as the
/// integral-exponent test used by exponentiation.
pub mod num;
