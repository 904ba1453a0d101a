/// The evaluator module computes the value of a parsed formula.
///
/// The evaluator traverses the tree against an [`EvaluationContext`], resolves
/// symbols, applies operators and built-in functions sample by sample and
/// expands `sum[...]` aggregates.
///
/// # Responsibilities
/// - Evaluates every node type, broadcasting scalars against sample arrays.
/// - Binds list elements term by term inside `sum[...]`.
/// - Reports runtime errors such as unknown symbols or division by zero.
///
/// [`EvaluationContext`]: evaluator::core::EvaluationContext
pub mod evaluator;
/// The lexer module tokenizes formula text for further parsing.
///
/// The lexer reads the raw text and produces a stream of tokens (numbers,
/// identifiers, operators and delimiters), each paired with its byte offset.
/// This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input characters into tokens with source positions.
/// - Skips spaces and tabs.
/// - Reports characters outside the formula alphabet.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// The parser is a recursive-descent parser with one function per precedence
/// level.
///
/// # Responsibilities
/// - Converts tokens into [`Expr`](crate::ast::Expr) nodes.
/// - Enforces precedence, associativity and balanced delimiters.
/// - Rejects nested aggregates and calls to unknown functions.
pub mod parser;
/// The value module defines the intermediate data type of evaluation.
///
/// A sub-expression is either a scalar or one value per sample.
pub mod value;
