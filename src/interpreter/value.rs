/// The intermediate value of a sub-expression.
///
/// Defines the `Value` type, which is either a single scalar or one value per
/// sample, and the explicit broadcasting rule that joins the two.
pub mod core;
