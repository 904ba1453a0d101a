use thiserror::Error;

use crate::error::ErrorKind;

/// Represents all errors that can occur during lexing or parsing.
///
/// Every variant carries the byte offset of the offending input so the caller
/// can point at it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The lexer met a character outside the formula alphabet.
    #[error("Error at position {position}: Malformed input {fragment:?}.")]
    MalformedInput {
        /// The rejected text.
        fragment: String,
        /// Byte offset in the formula.
        position: usize,
    },
    /// Found an unexpected token while parsing.
    #[error("Error at position {position}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Byte offset in the formula.
        position: usize,
    },
    /// Reached the end of input in the middle of an expression.
    #[error("Error at position {position}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// Byte offset in the formula.
        position: usize,
    },
    /// A closing delimiter was expected but not found.
    #[error("Error at position {position}: Expected closing '{delimiter}' but found {found}.")]
    ExpectedClosing {
        /// The missing delimiter, `)` or `]`.
        delimiter: char,
        /// What was found instead.
        found:     String,
        /// Byte offset in the formula.
        position:  usize,
    },
    /// Found extra tokens after a complete formula.
    #[error("Error at position {position}: Extra tokens after expression: {token}.")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Byte offset in the formula.
        position: usize,
    },
    /// The formula holds no expression at all.
    #[error("Error at position {position}: Formula is empty.")]
    EmptyExpression {
        /// Byte offset in the formula.
        position: usize,
    },
    /// Used a reserved identifier as a symbol or assignment target.
    #[error("Error at position {position}: Identifier '{name}' is reserved.")]
    IdentifierReserved {
        /// The reserved identifier name.
        name:     String,
        /// Byte offset in the formula.
        position: usize,
    },
    /// A `sum[...]` appeared inside another `sum[...]`.
    #[error("Error at position {position}: sum[...] cannot be nested inside another sum[...].")]
    NestedSum {
        /// Byte offset of the inner `sum`.
        position: usize,
    },
    /// Called a function that is not a built-in.
    #[error("Error at position {position}: Unknown function '{name}'.")]
    UnknownFunction {
        /// The name of the function.
        name:     String,
        /// Byte offset in the formula.
        position: usize,
    },
    /// Called a built-in with the wrong number of arguments.
    #[error("Error at position {position}: Function '{name}' takes {expected} argument(s) but {found} were supplied.")]
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// The arity of the built-in.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
        /// Byte offset in the formula.
        position: usize,
    },
}

impl ParseError {
    /// Returns the class of this failure: [`ErrorKind::MalformedInput`] for
    /// lexer failures, [`ErrorKind::Syntax`] otherwise.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedInput { .. } => ErrorKind::MalformedInput,
            _ => ErrorKind::Syntax,
        }
    }

    /// Gets the byte offset the error refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::MalformedInput { position, .. }
            | Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::ExpectedClosing { position, .. }
            | Self::UnexpectedTrailingTokens { position, .. }
            | Self::EmptyExpression { position }
            | Self::IdentifierReserved { position, .. }
            | Self::NestedSum { position }
            | Self::UnknownFunction { position, .. }
            | Self::ArgumentCountMismatch { position, .. } => *position,
        }
    }
}
