/// Lexing and parsing errors.
///
/// Defines all error types that can occur while turning formula text into an
/// expression tree: illegal characters, unexpected tokens, unbalanced
/// delimiters and misuse of the reserved `sum` keyword.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while building an evaluation
/// context or evaluating a tree: unresolved symbols, shape mismatches and
/// numerically undefined operations such as division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
use thiserror::Error;

/// The coarse class of a failure.
///
/// Every error produced by this crate maps to exactly one kind, so callers can
/// react to the class of failure without matching individual variants.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The formula contains a character the lexer does not accept.
    MalformedInput,
    /// The token sequence does not form a valid formula.
    Syntax,
    /// A symbol could not be resolved against the evaluation context.
    UnknownSymbol,
    /// The sample axis is not one-dimensional, or the list parameters of one
    /// `sum[...]` disagree in length.
    ShapeMismatch,
    /// A numerically undefined operation was encountered.
    Domain,
}

/// Any failure of [`evaluate_formula`](crate::evaluate_formula).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormulaError {
    /// The formula could not be tokenized or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The formula could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl FormulaError {
    /// Returns the class of this failure.
    ///
    /// # Example
    /// ```
    /// use std::collections::HashMap;
    ///
    /// use formula_dispersion::{ErrorKind, evaluate_formula};
    /// use ndarray::array;
    ///
    /// let err = evaluate_formula("x / 0",
    ///                            "x",
    ///                            &array![1.0, 2.0],
    ///                            &HashMap::new(),
    ///                            &HashMap::new()).unwrap_err();
    ///
    /// assert_eq!(err.kind(), ErrorKind::Domain);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) => e.kind(),
            Self::Runtime(e) => e.kind(),
        }
    }
}
