/// Scalar implementations and domain predicates of the built-in functions.
pub mod builtin;

/// The built-in function table and call evaluation.
pub mod core;
