use std::fmt;

use logos::Logos;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\f\r\n]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5` or `2.1e-10`.
    ///
    /// An exponent is only part of the literal when digits follow it:
    /// `2e-1` is the number `0.2` while `2e` is `2` followed by the name `e`,
    /// and `2e - 1` (with spaces) is `2 e` minus one.
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// Identifier tokens; constant or function names such as `x` or `log2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `=`
    #[token("=")]
    Equals,
}

impl Token {
    /// Name of the builtin a binary operator token desugars to.
    #[must_use]
    pub const fn operator_name(&self) -> Option<&'static str> {
        match self {
            Self::Plus => Some("+"),
            Self::Minus => Some("-"),
            Self::Star => Some("*"),
            Self::Slash => Some("/"),
            Self::Caret => Some("^"),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Caret => write!(f, "^"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Comma => write!(f, ","),
            Self::Equals => write!(f, "="),
        }
    }
}

/// Splits `source` into tokens paired with their 1-based column.
///
/// # Errors
/// Returns `ParseError::InvalidCharacter` for the first piece of text that is
/// not a token.
///
/// # Example
/// ```
/// use fncalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2 pi").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number(2.0), 1), (Token::Identifier("pi".to_string()), 3)]);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);
    let (mut offset, mut column) = (0, 1);

    while let Some(token) = lexer.next() {
        let start = lexer.span().start;
        column += source[offset..start].chars().count();
        offset = start;
        match token {
            Ok(tok) => tokens.push((tok, column)),
            Err(()) => {
                return Err(ParseError::InvalidCharacter { text: lexer.slice().to_string(),
                                                          column });
            },
        }
    }

    Ok(tokens)
}

/// Converts a byte offset into a 1-based character column.
pub fn column_of(source: &str, offset: usize) -> usize {
    source[..offset].chars().count() + 1
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn exponents_need_digits() {
        assert_eq!(tokenize("2e-1").unwrap(), vec![(Token::Number(0.2), 1)]);
        assert_eq!(tokenize("2e+1").unwrap(), vec![(Token::Number(20.0), 1)]);
        assert_eq!(tokenize("2e").unwrap(),
                   vec![(Token::Number(2.0), 1), (Token::Identifier("e".to_string()), 2)]);
        assert_eq!(tokenize("2e - 1").unwrap(),
                   vec![(Token::Number(2.0), 1),
                        (Token::Identifier("e".to_string()), 2),
                        (Token::Minus, 4),
                        (Token::Number(1.0), 6)]);
    }

    #[test]
    fn numbers_in_every_form() {
        let tokens = tokenize("12 1.5 .5 2e3 1.5e-3").unwrap();
        let values = tokens.into_iter()
                           .map(|(token, _)| token)
                           .collect::<Vec<_>>();

        assert_eq!(values,
                   vec![Token::Number(12.0),
                        Token::Number(1.5),
                        Token::Number(0.5),
                        Token::Number(2000.0),
                        Token::Number(0.0015)]);
    }

    #[test]
    fn columns_count_characters() {
        let tokens = tokenize("f(x) =  x^2").unwrap();
        let columns = tokens.iter().map(|(_, column)| *column).collect::<Vec<_>>();

        assert_eq!(columns, vec![1, 2, 3, 4, 6, 9, 10, 11]);
    }

    #[test]
    fn invalid_characters_are_reported() {
        assert_eq!(tokenize("1 + $"),
                   Err(ParseError::InvalidCharacter { text:   "$".to_string(),
                                                      column: 5, }));
    }
}
