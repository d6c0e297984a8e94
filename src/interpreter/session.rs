use tracing::debug;

use crate::{
    ast::Statement,
    error::InterpretError,
    interpreter::{
        environment::core::Environment,
        evaluator::core::{Context, EvalConfig},
        parser::core::parse,
    },
};

/// One evolving environment threaded through successive statements.
///
/// Each successful statement replaces the session environment with the one
/// it produced; a failed statement leaves it as it was.
///
/// # Example
/// ```
/// use fncalc::Session;
///
/// let mut session = Session::new();
/// assert_eq!(session.eval("f(x) = x^2").unwrap(), None);
/// assert_eq!(session.eval("f(3)").unwrap(), Some(9.0));
/// assert_eq!(session.eval("ans + 1").unwrap(), Some(10.0));
///
/// assert!(session.eval("pi = 4").is_err());
/// assert_eq!(session.eval("ans").unwrap(), Some(10.0));
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    env:    Environment,
    config: EvalConfig,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Starts a session from the builtin table with default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EvalConfig::default())
    }

    /// Starts a session from the builtin table with the given limits.
    #[must_use]
    pub fn with_config(config: EvalConfig) -> Self {
        Self { env: crate::default_env(),
               config }
    }

    /// Parses `text` as one statement and evaluates it.
    ///
    /// Returns the produced value, or `None` for function definitions.
    pub fn eval(&mut self, text: &str) -> Result<Option<f64>, InterpretError> {
        let statement = parse(text).inspect_err(|e| debug!(%e, "parse failed"))?;
        self.eval_statement(&statement)
    }

    /// Evaluates an already parsed statement.
    pub fn eval_statement(&mut self, statement: &Statement) -> Result<Option<f64>, InterpretError> {
        let (env, value) = Context::new(self.config).eval_statement(&self.env, statement)?;
        self.env = env;
        Ok(value)
    }

    /// The current environment.
    #[must_use]
    pub const fn env(&self) -> &Environment {
        &self.env
    }

    /// The limits statements are evaluated with.
    #[must_use]
    pub const fn config(&self) -> EvalConfig {
        self.config
    }
}
