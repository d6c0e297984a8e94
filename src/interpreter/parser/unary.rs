use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::{binary_call, next_operator},
            core::{ParseResult, parse_expression},
            utils::parse_comma_separated,
        },
    },
    util::stack::ensure_sufficient_stack,
};

/// Name of the builtin unary minus desugars to.
pub const NEGATE: &str = "neg";

/// Parses a unary expression.
///
/// Supports prefix `-`, desugared into a call of `neg`. Unary minus binds
/// looser than `^`, so `-2^2` is `neg(2^2)`.
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | power
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// A call of `neg` or a power expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if tokens.next_if(|(token, _)| *token == Token::Minus).is_some() {
        let operand = ensure_sufficient_stack(|| parse_unary(tokens))?;
        return Ok(Expr::call(NEGATE, vec![operand]));
    }
    parse_power(tokens)
}

/// Parses exponentiation.
///
/// `^` is right associative and its exponent may carry a sign, so
/// `2^3^2` is `2^(3^2)` and `2^-1` is accepted.
///
/// Grammar: `power := primary ("^" unary)?`
pub(crate) fn parse_power<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let base = parse_primary(tokens)?;
    if let Some(operator) = next_operator(tokens, &["^"]) {
        let exponent = ensure_sufficient_stack(|| parse_unary(tokens))?;
        return Ok(binary_call(operator, base, exponent));
    }
    Ok(base)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - numeric literals
/// - names, with or without an argument list
/// - parenthesized expressions
///
/// Grammar (simplified):
/// ```text
///     primary := number
///              | identifier ( "(" arguments ")" )?
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
    match tokens.next() {
        Some((Token::Number(value), _)) => Ok(Expr::Number(*value)),
        Some((Token::Identifier(name), _)) => {
            if tokens.next_if(|(token, _)| *token == Token::LParen).is_some() {
                let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
                return Ok(Expr::call(name.as_str(), arguments));
            }
            Ok(Expr::name(name.as_str()))
        },
        Some((Token::LParen, _)) => parse_grouping(tokens),
        Some((token, column)) => Err(ParseError::UnexpectedToken { token:  token.to_string(),
                                                                   column: *column, }),
        None => Err(ParseError::UnexpectedEndOfInput { column: 0 }),
    }
}

/// Parses the rest of a parenthesized expression after its `(`.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let inner = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(inner),
        Some((token, column)) => Err(ParseError::ExpectedClosingParen { token:  token.to_string(),
                                                                        column: *column, }),
        None => Err(ParseError::UnexpectedEndOfInput { column: 0 }),
    }
}
