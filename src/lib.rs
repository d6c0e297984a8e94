//! # fncalc
//!
//! fncalc is the evaluation core of a calculator language written in Rust.
//! It turns a statement (an expression, a constant definition or a function
//! definition) and an environment into a new environment, recording results
//! and definitions along the way.
//!
//! ```
//! use fncalc::{default_env, evaluate_text};
//!
//! let (env, value) = evaluate_text(&default_env(), "r = 2").unwrap();
//! assert_eq!(value, Some(2.0));
//!
//! let (_, value) = evaluate_text(&env, "2 pi r").unwrap();
//! assert_eq!(value, Some(4.0 * std::f64::consts::PI));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Statement,
    error::InterpretError,
    interpreter::{
        environment::builtin,
        evaluator::{core::Context, statement::Evaluation},
        parser::core::parse,
    },
};

/// Defines the structure of parsed statements.
///
/// This module declares the `Expr` and `Statement` enums: numbers, named
/// calls, bare expressions and bindings. The AST is built by the parser and
/// read by the evaluator.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing
/// or evaluating a statement, and the single-line rendering the session entry
/// points expose.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Attaches source columns to parse errors.
/// - Combines both phases into `InterpretError`.
pub mod error;
/// Orchestrates the process of evaluating statements.
///
/// This module ties together lexing, parsing, environments and evaluation,
/// and exposes the session type that threads an environment through
/// successive statements.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, environment and evaluator.
/// - Provides entry points for parsing and evaluating user input.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities shared by the parser and the evaluator.
pub mod util;

pub use interpreter::{
    environment::{core::Environment, function::Function},
    evaluator::core::{DEFAULT_MAX_DEPTH, EvalConfig},
    session::Session,
};

/// Returns the builtin environment.
///
/// The table holds the arithmetic operators (`+ - * / ^` and `neg`), the
/// constants `pi` and `e`, the native functions `sin cos tan sqrt ln`, and
/// `cbrt root log log2 log10`, which are defined in terms of the other
/// entries. It is built once; every call returns a handle to the same table.
///
/// # Example
/// ```
/// use fncalc::default_env;
///
/// let env = default_env();
/// assert!(env.lookup("log10").is_some());
/// assert!(env.lookup("ans").is_none());
/// ```
pub fn default_env() -> Environment {
    builtin::table().clone()
}

/// Applies a parsed statement to `env`.
///
/// Returns the extended environment and the value produced, if any. `env` is
/// left untouched either way.
///
/// # Example
/// ```
/// use fncalc::{
///     ast::{Expr, Statement},
///     default_env, evaluate,
///     error::{EvalError, InterpretError},
/// };
///
/// let redefine = Statement::Binding { name:   "pi".to_string(),
///                                     params: vec![],
///                                     body:   Expr::Number(4.0), };
///
/// assert_eq!(evaluate(&default_env(), &redefine).unwrap_err(),
///            InterpretError::Eval(EvalError::Redefinition("pi".to_string())));
/// ```
pub fn evaluate(env: &Environment, statement: &Statement) -> Result<Evaluation, InterpretError> {
    Ok(Context::default().eval_statement(env, statement)?)
}

/// Parses `text` as one statement and applies it to `env`.
///
/// # Example
/// ```
/// use fncalc::{default_env, evaluate_text};
///
/// let (env, _) = evaluate_text(&default_env(), "1+1").unwrap();
/// let (_, value) = evaluate_text(&env, "ans+1").unwrap();
///
/// assert_eq!(value, Some(3.0));
/// ```
pub fn evaluate_text(env: &Environment, text: &str) -> Result<Evaluation, InterpretError> {
    let statement = parse(text)?;
    evaluate(env, &statement)
}
