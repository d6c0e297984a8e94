use std::sync::Arc;

use crate::{ast::Expr, interpreter::environment::core::Environment};

/// A callable value bound in an [`Environment`].
#[derive(Debug, Clone)]
pub enum Function {
    /// A body evaluated against the environment captured at definition.
    Closure(Closure),
    /// A native function of one argument.
    NativeUnary(fn(f64) -> f64),
    /// A native function of two arguments.
    NativeBinary(fn(f64, f64) -> f64),
}

/// A body expression paired with its parameter names and the environment
/// visible where it was defined.
///
/// Parameters and body are shared, so cloning a closure never copies the
/// expression tree.
#[derive(Debug, Clone)]
pub struct Closure {
    /// Environment the body is evaluated in, below the parameter bindings.
    pub env:    Environment,
    /// Parameter names in call order.
    pub params: Arc<[String]>,
    /// The body expression.
    pub body:   Arc<Expr>,
}

impl Function {
    /// Wraps a number as a closure with no parameters over an empty
    /// environment, so constants go through the same call machinery as
    /// functions.
    ///
    /// # Example
    /// ```
    /// use fncalc::interpreter::environment::function::Function;
    ///
    /// assert_eq!(Function::constant(4.0).constant_value(), Some(4.0));
    /// ```
    #[must_use]
    pub fn constant(value: f64) -> Self {
        Self::closure(Environment::empty(), Vec::new(), Expr::Number(value))
    }

    /// Wraps a definition as a closure capturing `env`.
    #[must_use]
    pub fn closure(env: Environment, params: Vec<String>, body: Expr) -> Self {
        Self::Closure(Closure { env,
                                params: params.into(),
                                body: Arc::new(body) })
    }

    /// Returns the number of arguments an exact call expects.
    #[must_use]
    pub fn arity(&self) -> usize {
        match self {
            Self::Closure(closure) => closure.params.len(),
            Self::NativeUnary(_) => 1,
            Self::NativeBinary(_) => 2,
        }
    }

    /// Returns the value of a closure that is a plain number, as produced by
    /// [`Function::constant`].
    #[must_use]
    pub fn constant_value(&self) -> Option<f64> {
        match self {
            Self::Closure(Closure { params, body, .. }) if params.is_empty() => match **body {
                Expr::Number(value) => Some(value),
                Expr::Call { .. } => None,
            },
            _ => None,
        }
    }
}
