use thiserror::Error;

use crate::error::{EvalError, ParseError};

/// Either phase of turning text into a new environment can fail.
///
/// The rendering is a single line: parser messages have their line breaks
/// replaced by spaces.
///
/// # Example
/// ```
/// use fncalc::error::{EvalError, InterpretError, ParseError};
///
/// let err = InterpretError::from(EvalError::Redefinition("pi".to_string()));
/// assert_eq!(err.to_string(), "Evaluation Error: Cannot redefine built-in 'pi'.");
///
/// let err = InterpretError::from(ParseError::UnexpectedEndOfInput { column: 3 });
/// assert_eq!(err.to_string(), "Parse Error column 3: Unexpected end of input.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterpretError {
    /// The text could not be turned into a statement.
    #[error("Parse Error {}", .0.to_string().replace('\n', " "))]
    Parse(#[from] ParseError),
    /// The statement could not be evaluated.
    #[error("Evaluation Error: {0}")]
    Eval(#[from] EvalError),
}
