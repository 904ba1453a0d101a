use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        evaluator::{function::core::builtin_arity, utils::SUM_KEYWORD},
        lexer::Token,
        parser::{
            binary::parse_exponent,
            core::{ParseResult, parse_expression},
            utils::{expect_closing, parse_comma_separated},
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operator `-` (numeric negation). Negation is
/// right-associative and binds looser than `**`, so `--x` is `-(-x)` and
/// `-x ** 2` is `-(x ** 2)`.
///
/// If no unary operator is present, the function delegates to
/// [`parse_exponent`].
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | exponent
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or an exponent-level expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, position)) = tokens.peek() {
        tokens.next();
        let expr = parse_unary(tokens)?;
        Ok(Expr::UnaryOp { op:       UnaryOperator::Negate,
                           expr:     Box::new(expr),
                           position: *position, })
    } else {
        parse_exponent(tokens)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric literals
/// - symbols
/// - built-in function calls
/// - parenthesized expressions
/// - the `sum[...]` aggregate
///
/// Grammar (simplified):
/// ```text
///     primary := NUMBER
///              | "sum" "[" expression "]"
///              | IDENTIFIER "(" expression ("," expression)* ")"
///              | IDENTIFIER
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { position: 0 })?;

    match peeked {
        (Token::Number(value), position) => {
            tokens.next();
            Ok(Expr::Literal { value:    *value,
                               position: *position, })
        },
        (Token::LParen, _) => parse_grouping(tokens),
        (Token::Identifier(_), _) => parse_identifier_or_function(tokens),
        (Token::End, position) => Err(ParseError::UnexpectedEndOfInput { position: *position }),
        (tok, position) => Err(ParseError::UnexpectedToken { token:    tok.to_string(),
                                                             position: *position, }),
    }
}

/// Parses an expression wrapped in parentheses.
///
/// The tree does not record the parentheses; grouping is expressed by the
/// tree shape.
///
/// # Errors
/// Returns `ExpectedClosing` if the group is not closed by `)`.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next();
    let expr = parse_expression(tokens)?;
    expect_closing(tokens, &Token::RParen, ')')?;
    Ok(expr)
}

/// Parses a symbol, a built-in function call or a `sum[...]` aggregate.
///
/// An identifier directly followed by `(` is a call and must name a built-in
/// with a matching number of arguments. The reserved `sum` must be directly
/// followed by `[`. Any other identifier becomes an [`Expr::Variable`]; whether
/// it can be resolved is only known at evaluation time.
///
/// # Errors
/// Returns a `ParseError` if:
/// - `sum` is used without `[`,
/// - the called function is not a built-in,
/// - the argument count does not match the built-in's arity.
fn parse_identifier_or_function<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, position) = match tokens.next() {
        Some((Token::Identifier(n), position)) => (n, *position),
        Some((tok, position)) => {
            return Err(ParseError::UnexpectedToken { token:    tok.to_string(),
                                                     position: *position, });
        },
        None => {
            return Err(ParseError::UnexpectedEndOfInput { position: 0 });
        },
    };

    if name == SUM_KEYWORD {
        return parse_sum(tokens, position);
    }

    match tokens.peek() {
        Some((Token::LParen, _)) => {
            tokens.next();
            let arity = builtin_arity(name).ok_or_else(|| ParseError::UnknownFunction {
                                                   name: name.clone(),
                                                   position,
                                               })?;
            let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
            if arguments.len() != arity {
                return Err(ParseError::ArgumentCountMismatch { name: name.clone(),
                                                               expected: arity,
                                                               found: arguments.len(),
                                                               position });
            }
            Ok(Expr::FunctionCall { name: name.clone(),
                                    arguments,
                                    position })
        },
        _ => Ok(Expr::Variable { name: name.clone(),
                                 position }),
    }
}

/// Parses the body of a `sum[...]` aggregate.
///
/// The `sum` keyword has already been consumed. The body is a full
/// expression and may not contain another `sum[...]`.
///
/// Grammar: `sum := "sum" "[" expression "]"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned after `sum`.
/// - `position`: Byte offset of the `sum` keyword.
///
/// # Returns
/// An [`Expr::Sum`] node.
///
/// # Errors
/// Returns a `ParseError` if:
/// - `[` does not follow `sum`,
/// - the body fails to parse or contains a nested `sum[...]`,
/// - the closing `]` is missing.
fn parse_sum<'a, I>(tokens: &mut Peekable<I>, position: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::LBracket, _)) => {
            tokens.next();
        },
        _ => {
            return Err(ParseError::IdentifierReserved { name: SUM_KEYWORD.to_string(),
                                                        position });
        },
    }

    let body = parse_expression(tokens)?;
    if let Some(nested) = body.find_sum() {
        return Err(ParseError::NestedSum { position: nested.position() });
    }
    expect_closing(tokens, &Token::RBracket, ']')?;

    Ok(Expr::Sum { body: Box::new(body),
                   position })
}
