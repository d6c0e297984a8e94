use thiserror::Error;

/// Represents all errors that can occur during lexing or parsing.
///
/// The rendered messages span two lines: the location, then the detail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found an unexpected token while parsing.
    #[error("column {column}:\nUnexpected token '{token}'.")]
    UnexpectedToken {
        /// The token encountered.
        token:  String,
        /// The 1-based source column where the error occurred.
        column: usize,
    },
    /// Reached the end of input unexpectedly.
    #[error("column {column}:\nUnexpected end of input.")]
    UnexpectedEndOfInput {
        /// The 1-based source column where the input ended.
        column: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("column {column}:\nExpected closing parenthesis ')' but found '{token}'.")]
    ExpectedClosingParen {
        /// The token found instead.
        token:  String,
        /// The 1-based source column where the error occurred.
        column: usize,
    },
    /// Found extra tokens after a complete statement.
    #[error("column {column}:\nExtra tokens after expression, starting at '{token}'.")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:  String,
        /// The 1-based source column where the error occurred.
        column: usize,
    },
    /// The lexer met text that is not part of the language.
    #[error("column {column}:\nInvalid character sequence '{text}'.")]
    InvalidCharacter {
        /// The offending text.
        text:   String,
        /// The 1-based source column where the error occurred.
        column: usize,
    },
    /// The parameter list of a function definition was malformed.
    #[error("column {column}:\nInvalid parameter list. Example: f(x, y) = x * y")]
    InvalidParameterList {
        /// The 1-based source column where the error occurred.
        column: usize,
    },
}
