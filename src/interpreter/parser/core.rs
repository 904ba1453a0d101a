use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        evaluator::utils::is_reserved_identifier,
        lexer::Token,
        parser::binary::parse_additive,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete formula from a token sequence.
///
/// The sequence is expected to come from
/// [`tokenize`](crate::interpreter::lexer::tokenize), i.e. to be terminated by
/// [`Token::End`]. The whole sequence must be consumed.
///
/// Grammar: `formula := [ identifier "=" ] expression End`
///
/// # Parameters
/// - `tokens`: `(Token, byte offset)` pairs.
///
/// # Returns
/// The expression tree, wrapped in an [`Expr::Assignment`] when the formula
/// starts with `name =`.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the formula is empty,
/// - the expression is malformed,
/// - tokens remain after a complete expression.
///
/// # Example
/// ```
/// use formula_dispersion::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize("n = 22 * 44 + 66").unwrap();
/// let expr = parse(&tokens).unwrap();
///
/// assert_eq!(expr.to_string(), "n = ((22 * 44) + 66)");
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();

    match iter.peek() {
        None => return Err(ParseError::EmptyExpression { position: 0 }),
        Some((Token::End, position)) => {
            return Err(ParseError::EmptyExpression { position: *position });
        },
        Some(_) => {},
    }

    let expr = parse_assignment(&mut iter)?;

    match iter.next() {
        Some((Token::End, _)) | None => Ok(expr),
        Some((tok, position)) => {
            Err(ParseError::UnexpectedTrailingTokens { token:    tok.to_string(),
                                                       position: *position, })
        },
    }
}

/// Parses an optional leading `name =` followed by an expression.
///
/// Two tokens of lookahead are needed to tell `n = x` from `n * x`; the
/// iterator is cloned for that.
///
/// # Errors
/// Returns `IdentifierReserved` when the target is a reserved word, and
/// propagates any error from the expression itself.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();
    if let Some((Token::Identifier(target), position)) = lookahead.next()
       && let Some((Token::Equals, _)) = lookahead.next()
    {
        if is_reserved_identifier(target) {
            return Err(ParseError::IdentifierReserved { name:     target.clone(),
                                                        position: *position, });
        }
        tokens.next();
        tokens.next();

        let value = parse_expression(tokens)?;
        return Ok(Expr::Assignment { target:   target.clone(),
                                     value:    Box::new(value),
                                     position: *position, });
    }

    parse_expression(tokens)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, addition and subtraction, and
/// recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, byte offset)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_additive(tokens)
}
