/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of a
/// statement. Parse errors include syntax mistakes, unexpected tokens and
/// malformed parameter lists detected before evaluation.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while reducing an expression
/// or applying a statement to an environment.
pub mod eval_error;
/// The combined error surfaced by the session entry points.
pub mod interpret_error;

pub use eval_error::EvalError;
pub use interpret_error::InterpretError;
pub use parse_error::ParseError;
