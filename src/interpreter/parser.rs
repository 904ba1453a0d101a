/// Entry points of the parser.
///
/// Contains the top-level formula rule (optional leading assignment, trailing
/// token check) and the expression entry point.
pub mod core;

/// Unary and primary expression parsing.
///
/// Handles negation, literals, symbols, built-in calls,
/// parenthesized groups and the `sum[...]` aggregate.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the left-associative additive and multiplicative levels and the
/// right-associative exponent level of the precedence hierarchy.
pub mod binary;

/// Utility functions for the parser.
///
/// Provides helpers for comma-separated lists and closing delimiters.
pub mod utils;
