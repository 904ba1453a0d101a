/// Binary operator evaluation logic.
///
/// Handles element-wise arithmetic and exponentiation, the broadcasting of
/// scalars against sample arrays, and the domain checks of each operator.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the evaluation context (independent variable, constants and
/// lists), symbol resolution and the recursive evaluation entry point.
pub mod core;

/// Evaluation of `sum[...]` aggregates.
///
/// Finds the lists that drive an aggregate, binds their elements term by term
/// and accumulates the terms.
pub mod sum;

/// Utility functions for evaluation.
///
/// Provides reserved words and the finiteness check shared by every operator.
pub mod utils;

/// Function evaluation.
///
/// Handles built-in function calls, argument checking and the domain of each
/// built-in.
pub mod function;
