use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses a single statement.
/// A statement may be one of:
/// - an assignment, `x = 2 pi`,
/// - a function definition, `f(x, y) = x^y`,
/// - an expression used as a statement.
///
/// Bindings are attempted first; if none matches, the input is parsed as an
/// expression statement.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, column)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some(statement) = parse_assignment(tokens)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_function_definition(tokens)? {
        return Ok(statement);
    }

    Ok(Statement::Expression(parse_expression(tokens)?))
}

/// Parses an assignment of the form `<identifier> = <expression>`.
///
/// The function performs a limited lookahead: if the next token is an
/// identifier and the following token is `=`, an assignment is parsed.
/// Otherwise it returns `Ok(None)` and does not consume tokens.
///
/// # Returns
/// - `Ok(Some(Statement::Binding))` with no parameters,
/// - `Ok(None)` if no assignment is present.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();
    let Some((Token::Identifier(name), _)) = lookahead.next() else {
        return Ok(None);
    };
    if !matches!(lookahead.next(), Some((Token::Equals, _))) {
        return Ok(None);
    }
    tokens.next();
    tokens.next();

    let body = parse_expression(tokens)?;
    Ok(Some(Statement::Binding { name: name.clone(),
                                 params: Vec::new(),
                                 body }))
}

/// Parses a function definition of the form
/// `<name>(param1, param2, ...) = <expression>`.
///
/// This function identifies a definition by checking:
/// 1. The next token is an identifier.
/// 2. It is immediately followed by `(`.
/// 3. A matching `)` exists.
/// 4. The token after the closing `)` is `=`.
///
/// When these conditions are met, the function name, parameter list, and body
/// expression are parsed. `f() = 1` has an empty parameter list and is an
/// assignment.
///
/// If the input does not match a function definition, the function returns
/// `Ok(None)` without consuming tokens; `f(2) + 1` is left to the expression
/// parser.
///
/// # Errors
/// Returns `InvalidParameterList` if a parameter is not a plain identifier,
/// and propagates errors from the body expression.
fn parse_function_definition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();
    let Some((Token::Identifier(name), _)) = lookahead.next() else {
        return Ok(None);
    };
    let Some((Token::LParen, column)) = lookahead.next() else {
        return Ok(None);
    };

    let mut parens = 1;
    while parens > 0 {
        match lookahead.next() {
            Some((Token::LParen, _)) => parens += 1,
            Some((Token::RParen, _)) => parens -= 1,
            Some(_) => {},
            None => return Ok(None),
        }
    }
    if !matches!(lookahead.peek(), Some((Token::Equals, _))) {
        return Ok(None);
    }

    tokens.next();
    tokens.next();
    let params = parse_comma_separated(tokens, parse_identifier, &Token::RParen)
        .map_err(|_| ParseError::InvalidParameterList { column: *column })?;
    tokens.next();

    let body = parse_expression(tokens)?;
    Ok(Some(Statement::Binding { name: name.clone(),
                                 params,
                                 body }))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        ast::{Expr, Statement},
        error::ParseError,
        interpreter::parser::core::parse,
    };

    fn num(value: f64) -> Expr {
        Expr::Number(value)
    }

    fn call(name: &str, arguments: Vec<Expr>) -> Expr {
        Expr::call(name, arguments)
    }

    fn expression(source: &str) -> Expr {
        match parse(source) {
            Ok(Statement::Expression(expr)) => expr,
            other => panic!("expected an expression for {source:?}, got {other:?}"),
        }
    }

    #[test]
    fn operators_follow_precedence() {
        assert_eq!(expression("1 + 2 * 3"),
                   call("+", vec![num(1.0), call("*", vec![num(2.0), num(3.0)])]));
        assert_eq!(expression("(1 + 2) * 3"),
                   call("*", vec![call("+", vec![num(1.0), num(2.0)]), num(3.0)]));
        assert_eq!(expression("8 - 2 - 1"),
                   call("-", vec![call("-", vec![num(8.0), num(2.0)]), num(1.0)]));
    }

    #[test]
    fn power_is_right_associative_and_binds_tighter_than_negation() {
        assert_eq!(expression("2^3^2"),
                   call("^", vec![num(2.0), call("^", vec![num(3.0), num(2.0)])]));
        assert_eq!(expression("-2^2"),
                   call("neg", vec![call("^", vec![num(2.0), num(2.0)])]));
        assert_eq!(expression("2^-1"),
                   call("^", vec![num(2.0), call("neg", vec![num(1.0)])]));
    }

    #[test]
    fn juxtaposition_applies_the_name() {
        assert_eq!(expression("2 pi"), call("pi", vec![num(2.0)]));
        assert_eq!(expression("3 x * 2"),
                   call("*", vec![call("x", vec![num(3.0)]), num(2.0)]));
        assert_eq!(expression("1 + 2 e"),
                   call("+", vec![num(1.0), call("e", vec![num(2.0)])]));
    }

    #[test]
    fn calls_take_argument_lists() {
        assert_eq!(expression("log(2, 8)"), call("log", vec![num(2.0), num(8.0)]));
        assert_eq!(expression("pi"), Expr::name("pi"));
        assert_eq!(expression("f()"), call("f", vec![]));
    }

    #[test]
    fn bindings() {
        assert_eq!(parse("x = 4"),
                   Ok(Statement::Binding { name:   "x".to_string(),
                                           params: vec![],
                                           body:   num(4.0), }));
        assert_eq!(parse("f(x, y) = x"),
                   Ok(Statement::Binding { name:   "f".to_string(),
                                           params: vec!["x".to_string(), "y".to_string()],
                                           body:   Expr::name("x"), }));
        assert_eq!(parse("f() = 1"),
                   Ok(Statement::Binding { name:   "f".to_string(),
                                           params: vec![],
                                           body:   num(1.0), }));
    }

    #[test]
    fn calls_that_are_not_definitions_stay_expressions() {
        assert_eq!(expression("f(2) + 1"),
                   call("+", vec![call("f", vec![num(2.0)]), num(1.0)]));
    }

    #[test]
    fn errors_carry_columns() {
        assert_eq!(parse("1 +"), Err(ParseError::UnexpectedEndOfInput { column: 4 }));
        assert_eq!(parse(""), Err(ParseError::UnexpectedEndOfInput { column: 1 }));
        assert_eq!(parse("(1 2"),
                   Err(ParseError::ExpectedClosingParen { token:  "2".to_string(),
                                                          column: 4, }));
        assert_eq!(parse("1 2"),
                   Err(ParseError::UnexpectedTrailingTokens { token:  "2".to_string(),
                                                              column: 3, }));
        assert_eq!(parse("f(1) = 2"), Err(ParseError::InvalidParameterList { column: 2 }));
        assert_eq!(parse("* 2"),
                   Err(ParseError::UnexpectedToken { token:  "*".to_string(),
                                                     column: 1, }));
    }
}
