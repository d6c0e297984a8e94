use std::iter::Peekable;

use crate::{
    ast::Expr,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with column information.
///
/// # Returns
/// A tree of `+`/`-` calls.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_multiplicative(tokens)?;
    while let Some(operator) = next_operator(tokens, &["+", "-"]) {
        let right = parse_multiplicative(tokens)?;
        left = binary_call(operator, left, right);
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`, and juxtaposition: a bare
/// identifier right after an operand applies that name to the operand, so
/// `2 pi` becomes `pi(2)`. What that means is left to the evaluator.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary | identifier)*`
///
/// # Parameters
/// - `tokens`: Token stream with column information.
///
/// # Returns
/// A tree of `*`/`/` calls and juxtaposed applications.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_unary(tokens)?;
    loop {
        if let Some(operator) = next_operator(tokens, &["*", "/"]) {
            let right = parse_unary(tokens)?;
            left = binary_call(operator, left, right);
            continue;
        }
        if let Some(name) = parse_juxtaposed_name(tokens) {
            left = Expr::call(name, vec![left]);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Consumes an identifier that is not followed by `(`.
///
/// Returns `None` without consuming anything otherwise; `2 f(3)` is not a
/// juxtaposition.
fn parse_juxtaposed_name<'a, I>(tokens: &mut Peekable<I>) -> Option<String>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();
    let Some((Token::Identifier(name), _)) = lookahead.next() else {
        return None;
    };
    if let Some((Token::LParen, _)) = lookahead.peek() {
        return None;
    }
    tokens.next();
    Some(name.clone())
}

/// Consumes the next token if it is one of `operators`.
///
/// Returns the name of the builtin the operator desugars to.
pub(in crate::interpreter::parser) fn next_operator<'a, I>(tokens: &mut Peekable<I>,
                                                           operators: &[&'static str])
                                                           -> Option<&'static str>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let name = tokens.peek()
                     .and_then(|(token, _)| token.operator_name())
                     .filter(|name| operators.contains(name))?;
    tokens.next();
    Some(name)
}

/// Builds the call an operator desugars to.
pub(in crate::interpreter::parser) fn binary_call(operator: &'static str,
                                                  left: Expr,
                                                  right: Expr)
                                                  -> Expr {
    Expr::call(operator, vec![left, right])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;

    #[test]
    fn next_operator_only_consumes_listed_operators() {
        let tokens = tokenize("* + 1").unwrap();
        let mut tokens = tokens.iter().peekable();

        assert_eq!(next_operator(&mut tokens, &["+", "-"]), None);
        assert_eq!(next_operator(&mut tokens, &["*", "/"]), Some("*"));
        assert_eq!(next_operator(&mut tokens, &["+", "-"]), Some("+"));
        assert_eq!(next_operator(&mut tokens, &["+", "-"]), None);
        assert_eq!(tokens.next(), Some(&(Token::Number(1.0), 5)));
    }
}
