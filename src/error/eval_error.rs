use thiserror::Error;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A name was not bound in the environment.
    #[error("Undefined name '{0}'.")]
    UndefinedName(String),
    /// A callable was applied to a number of arguments it does not accept.
    #[error("Wrong number of arguments for '{0}'.")]
    Arity(String),
    /// A statement tried to rebind a name from the builtin table.
    #[error("Cannot redefine built-in '{0}'.")]
    Redefinition(String),
    /// Closure application nested deeper than the configured limit.
    #[error("Recursion limit of {limit} exceeded while calling '{name}'.")]
    RecursionLimit {
        /// The closure whose application crossed the limit.
        name:  String,
        /// The configured maximum depth.
        limit: usize,
    },
}
