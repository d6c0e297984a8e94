/// Binary operator parsing.
///
/// Parses the left-associative additive and multiplicative levels, including
/// juxtaposition such as `2 pi`.
pub mod binary;
/// Core parsing entry points.
///
/// Holds the `ParseResult` alias, the expression entry point and `parse`,
/// which turns a whole line of text into a statement.
pub mod core;
/// Statement parsing.
///
/// Distinguishes assignments and function definitions from bare
/// expressions.
pub mod statement;
/// Unary, power and primary expression parsing.
pub mod unary;
/// Helpers shared by the parsing functions.
pub mod utils;
