use thiserror::Error;

use crate::error::ErrorKind;

/// Represents all errors that can occur while building an evaluation context
/// or evaluating a formula.
///
/// Domain errors name the failing sub-expression (rendered with
/// [`Expr`](crate::ast::Expr)'s `Display`), its byte offset in the formula and
/// the index of the first sample where the operation is undefined.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    /// A symbol is neither the independent variable nor a constant.
    #[error("Error at position {position}: Unknown symbol '{name}'.")]
    UnknownSymbol {
        /// The name of the symbol.
        name:     String,
        /// Byte offset in the formula.
        position: usize,
    },
    /// A call names a function that is not a built-in.
    #[error("Error at position {position}: Unknown function '{name}'.")]
    UnknownFunction {
        /// The name of the function.
        name:     String,
        /// Byte offset in the formula.
        position: usize,
    },
    /// A built-in was called with the wrong number of arguments.
    #[error("Error at position {position}: Function '{name}' expects {expected} argument(s), found {found}.")]
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
    /// A list parameter was referenced outside of a `sum[...]` body.
    #[error("Error at position {position}: '{name}' is a list parameter and can only be used inside sum[...].")]
    ListOutsideSum {
        /// The name of the list parameter.
        name:     String,
        /// Byte offset in the formula.
        position: usize,
    },
    /// The sample axis is not one-dimensional.
    #[error("The independent variable must be one-dimensional, but has rank {found}.")]
    RankMismatch {
        /// The rank that was supplied.
        found: usize,
    },
    /// Two list parameters of one `sum[...]` have different lengths.
    #[error("Error at position {position}: List parameters '{first}' ({first_len} terms) and '{other}' ({other_len} terms) have different lengths.")]
    ListLengthMismatch {
        /// The list that fixed the term count.
        first:     String,
        /// Its length.
        first_len: usize,
        /// The disagreeing list.
        other:     String,
        /// Its length.
        other_len: usize,
        /// Byte offset of the `sum`.
        position:  usize,
    },
    /// A `sum[...]` body references no list parameter.
    #[error("Error at position {position}: {expr} does not reference any list parameter.")]
    EmptyAggregate {
        /// The aggregate.
        expr:     String,
        /// Byte offset of the `sum`.
        position: usize,
    },
    /// Attempted division by zero.
    #[error("Error at position {position}: Division by zero in {expr} at sample {sample}.")]
    DivisionByZero {
        /// The failing sub-expression.
        expr:     String,
        /// Index of the first failing sample.
        sample:   usize,
        /// Byte offset in the formula.
        position: usize,
    },
    /// Exponentiation without a real result.
    #[error("Error at position {position}: {base} ** {exponent} is undefined in {expr} at sample {sample}.")]
    InvalidPower {
        /// The base.
        base:     f64,
        /// The exponent.
        exponent: f64,
        /// The failing sub-expression.
        expr:     String,
        /// Index of the first failing sample.
        sample:   usize,
        /// Byte offset in the formula.
        position: usize,
    },
    /// A built-in function was applied outside its domain.
    #[error("Error at position {position}: {function}({value}) is undefined in {expr} at sample {sample}.")]
    InvalidArgument {
        /// The built-in function.
        function: String,
        /// The offending argument.
        value:    f64,
        /// The failing sub-expression.
        expr:     String,
        /// Index of the first failing sample.
        sample:   usize,
        /// Byte offset in the formula.
        position: usize,
    },
    /// An operation produced an infinite or NaN result.
    #[error("Error at position {position}: {expr} is not finite at sample {sample}.")]
    NonFinite {
        /// The failing sub-expression.
        expr:     String,
        /// Index of the first failing sample.
        sample:   usize,
        /// Byte offset in the formula.
        position: usize,
    },
}

impl RuntimeError {
    /// Returns the class of this failure.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownSymbol { .. }
            | Self::UnknownFunction { .. }
            | Self::ListOutsideSum { .. } => ErrorKind::UnknownSymbol,
            Self::ArgumentCountMismatch { .. } => ErrorKind::Syntax,
            Self::RankMismatch { .. }
            | Self::ListLengthMismatch { .. }
            | Self::EmptyAggregate { .. } => ErrorKind::ShapeMismatch,
            Self::DivisionByZero { .. }
            | Self::InvalidPower { .. }
            | Self::InvalidArgument { .. }
            | Self::NonFinite { .. } => ErrorKind::Domain,
        }
    }
}
