//! Scalar definitions used by the built-in function table.
//!
//! Each built-in is a plain `fn(f64) -> f64` paired with a domain predicate.
//! The standard trigonometric, exponential and logarithmic functions come
//! straight from `f64`, Dawson's integral from `errorfunctions`.

use errorfunctions::RealErrorFunctions;

/// The Heaviside step function: `1` for strictly positive input, `0`
/// otherwise.
///
/// # Example
/// ```
/// use formula_dispersion::interpreter::evaluator::function::builtin::heaviside;
///
/// assert_eq!(heaviside(2.5), 1.0);
/// assert_eq!(heaviside(0.0), 0.0);
/// assert_eq!(heaviside(-1.0), 0.0);
/// ```
#[must_use]
pub fn heaviside(x: f64) -> f64 {
    if x > 0.0 { 1.0 } else { 0.0 }
}

/// Dawson's integral `F(x) = exp(-x²) ∫₀ˣ exp(t²) dt`.
#[must_use]
pub fn dawson(x: f64) -> f64 {
    x.dawson()
}

/// Domain of functions defined for every real number.
#[must_use]
pub const fn everywhere(_: f64) -> bool {
    true
}

/// Domain of `sqrt`.
#[must_use]
pub fn non_negative(x: f64) -> bool {
    x >= 0.0
}

/// Domain of the logarithms.
#[must_use]
pub fn positive(x: f64) -> bool {
    x > 0.0
}
