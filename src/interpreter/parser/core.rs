use std::iter::Peekable;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Token, column_of, tokenize},
        parser::{binary::parse_additive, statement::parse_statement},
    },
    util::stack::ensure_sufficient_stack,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses one line of text into a statement.
///
/// The whole input must form a single statement; anything left over is
/// reported as `UnexpectedTrailingTokens`.
///
/// # Example
/// ```
/// use fncalc::{
///     ast::{Expr, Statement},
///     interpreter::parser::core::parse,
/// };
///
/// let statement = parse("1 + 2").unwrap();
/// assert_eq!(statement,
///            Statement::Expression(Expr::call("+",
///                                             vec![Expr::Number(1.0), Expr::Number(2.0)])));
/// ```
pub fn parse(source: &str) -> ParseResult<Statement> {
    let tokens = tokenize(source)?;
    let end = column_of(source, source.len());
    let mut iter = tokens.iter().peekable();

    let statement = parse_statement(&mut iter).map_err(|e| e.at_end_of_input(end))?;

    if let Some((token, column)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token:  token.to_string(),
                                                          column: *column, });
    }

    Ok(statement)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, addition, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, column)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    ensure_sufficient_stack(|| parse_additive(tokens))
}

impl ParseError {
    /// Fills in the column of an end-of-input error raised without one.
    ///
    /// The parsing functions only see tokens, so they report running out of
    /// input at column 0; [`parse`] knows where the text ends.
    #[must_use]
    pub fn at_end_of_input(self, column: usize) -> Self {
        match self {
            Self::UnexpectedEndOfInput { column: 0 } => Self::UnexpectedEndOfInput { column },
            other => other,
        }
    }
}
