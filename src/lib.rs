//! # formula-dispersion
//!
//! formula-dispersion evaluates user-supplied dispersion formulas, such as
//! refractive-index models, over an array of sample points.
//!
//! A formula is a single arithmetic expression in one independent variable
//! (for example the wavelength `lbda`), scalar constants and list parameters.
//! List parameters are consumed by the `sum[...]` aggregate, which evaluates
//! its body once per list element and adds the terms. The result holds one
//! value per sample.
//!
//! ```
//! use std::collections::HashMap;
//!
//! use formula_dispersion::evaluate_formula;
//! use ndarray::array;
//!
//! let constants = HashMap::from([("eps_inf".to_string(), 2.0)]);
//! let lists = HashMap::from([("a".to_string(), vec![1.0, 0.5])]);
//!
//! let eps = evaluate_formula("eps = eps_inf + sum[a * lbda]",
//!                            "lbda",
//!                            &array![1.0, 2.0],
//!                            &constants,
//!                            &lists).unwrap();
//!
//! // 2 + (1.0 + 0.5) * lbda
//! assert_eq!(eps.to_vec(), vec![3.5, 5.0]);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::collections::HashMap;

use ndarray::{Array1, ArrayBase, Data, Dimension};

/// Defines the structure of parsed formulas.
///
/// This module declares the `Expr` enum and the operator types that represent
/// a formula as a tree. The tree is built by the parser and traversed by the
/// evaluator.
///
/// # Responsibilities
/// - Defines one node type per language construct.
/// - Attaches the byte offset of each construct for error reporting.
/// - Renders trees back to fully parenthesized text.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// parsing or evaluating a formula, and the coarse [`ErrorKind`] each of them
/// belongs to.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches positions and offending fragments for context.
/// - Integrates with `std::error::Error` through `thiserror`.
pub mod error;
/// Orchestrates tokenizing, parsing and evaluation.
///
/// This module ties together the lexer, the parser, the evaluator and the
/// intermediate value representation.
pub mod interpreter;
/// General numeric utilities.
///
/// Provides small numeric predicates that are not specific to a single phase.
pub mod util;

pub use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::{ErrorKind, FormulaError, ParseError, RuntimeError},
    interpreter::{
        evaluator::core::{EvaluationContext, evaluate},
        lexer::{Token, tokenize},
        parser::core::parse,
    },
};

/// Parses formula text into an expression tree.
///
/// The tree is immutable and can be evaluated any number of times against
/// different contexts with [`EvaluationContext::evaluate`].
///
/// # Errors
/// Returns a `ParseError` if the text contains an illegal character or is not
/// a valid formula.
///
/// # Examples
/// ```
/// use formula_dispersion::{ErrorKind, parse_formula};
///
/// let expr = parse_formula("n = 1 + a / lbda ** 2").unwrap();
/// assert_eq!(expr.to_string(), "n = (1 + (a / (lbda ** 2)))");
///
/// let err = parse_formula("eps = ((22)").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Syntax);
/// ```
pub fn parse_formula(formula: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(formula)?;
    let expr = parse(&tokens)?;
    log::debug!("parsed {formula:?} as {expr}");
    Ok(expr)
}

/// Parses and evaluates a formula in one step.
///
/// The independent variable is bound to `independent_values` under
/// `independent_name`. `constants` are visible everywhere, `lists` only inside
/// `sum[...]`. The result has the same length as `independent_values`.
///
/// The rank of `independent_values` is checked first, so a rank other than 1
/// is always reported as [`ErrorKind::ShapeMismatch`], whatever the formula.
///
/// # Errors
/// Returns the first failure, from context building, tokenizing, parsing or
/// evaluation. No partial result is produced.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
///
/// use formula_dispersion::{ErrorKind, evaluate_formula};
/// use ndarray::array;
///
/// let n = evaluate_formula("n = 22 * 44 + 66",
///                          "x",
///                          &array![1.0, 2.0, 3.0],
///                          &HashMap::new(),
///                          &HashMap::new()).unwrap();
/// assert_eq!(n.to_vec(), vec![1034.0, 1034.0, 1034.0]);
///
/// let err = evaluate_formula("x + c",
///                            "x",
///                            &array![1.0],
///                            &HashMap::new(),
///                            &HashMap::new()).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::UnknownSymbol);
/// ```
pub fn evaluate_formula<S, D>(formula: &str,
                              independent_name: &str,
                              independent_values: &ArrayBase<S, D>,
                              constants: &HashMap<String, f64>,
                              lists: &HashMap<String, Vec<f64>>)
                              -> Result<Array1<f64>, FormulaError>
    where S: Data<Elem = f64>,
          D: Dimension
{
    let context =
        EvaluationContext::new(independent_name, independent_values)?
            .with_constants(constants.iter().map(|(name, value)| (name.as_str(), *value)))
            .with_lists(lists.iter().map(|(name, values)| (name.as_str(), values.as_slice())));

    let expr = parse_formula(formula)?;
    Ok(context.evaluate(&expr)?)
}
