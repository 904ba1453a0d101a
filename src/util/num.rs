/// Tests whether a finite `f64` has no fractional part.
///
/// ## Example
/// ```
/// use formula_dispersion::util::num::is_integral;
///
/// assert!(is_integral(-3.0));
/// assert!(!is_integral(0.5));
/// assert!(!is_integral(f64::INFINITY));
/// ```
#[must_use]
pub fn is_integral(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}
