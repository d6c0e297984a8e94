/// Core evaluation logic for expressions.
///
/// Contains the evaluation context, name lookup, arity dispatch, implicit
/// multiplication and closure application.
pub mod core;

/// Statement evaluation.
///
/// Implements the transition from an environment and a statement to a new
/// environment: bare expressions, assignments and function definitions.
pub mod statement;
