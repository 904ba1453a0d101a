/// Element-wise application of scalar operations over sample arrays.
pub mod array;

/// Operator dispatch.
pub mod core;

/// Exponentiation.
pub mod power;

/// Addition, subtraction, multiplication and division of two scalars.
pub mod scalar;
