use tracing::debug;

use crate::{
    ast::Statement,
    error::EvalError,
    interpreter::{
        environment::{builtin::is_builtin, core::Environment, function::Function},
        evaluator::core::{Context, EvalResult},
    },
};

/// Name bound to the value of the most recent bare expression.
pub const ANS: &str = "ans";

/// The environment after a statement, and the value it produced if any.
pub type Evaluation = (Environment, Option<f64>);

impl Context {
    /// Applies a statement to an environment.
    ///
    /// - A bare expression is evaluated now; its value is bound to `ans`.
    /// - `x = expr` is evaluated now; its value is bound to `x`.
    /// - `f(x, ...) = expr` is not evaluated; `f` is bound to a closure over
    ///   `env` as it is at this point, so `f` cannot see itself.
    ///
    /// Bindings may not reuse a builtin name. `env` itself is never changed;
    /// on error the caller simply keeps using it.
    ///
    /// # Example
    /// ```
    /// use fncalc::{
    ///     ast::{Expr, Statement},
    ///     default_env,
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let square = Statement::Binding { name:   "sq".to_string(),
    ///                                   params: vec!["x".to_string()],
    ///                                   body:   Expr::call("*",
    ///                                                      vec![Expr::name("x"),
    ///                                                           Expr::name("x")]), };
    ///
    /// let mut context = Context::default();
    /// let (env, value) = context.eval_statement(&default_env(), &square).unwrap();
    /// assert_eq!(value, None);
    ///
    /// let call = Statement::Expression(Expr::call("sq", vec![Expr::Number(3.0)]));
    /// let (_, value) = context.eval_statement(&env, &call).unwrap();
    /// assert_eq!(value, Some(9.0));
    /// ```
    pub fn eval_statement(&mut self,
                          env: &Environment,
                          statement: &Statement)
                          -> EvalResult<Evaluation> {
        match statement {
            Statement::Expression(expr) => {
                let value = self.eval(env, expr)?;
                debug!(value, "evaluated expression");
                Ok((env.extend(ANS, Function::constant(value)), Some(value)))
            },
            Statement::Binding { name, params, body } => {
                if is_builtin(name) {
                    return Err(EvalError::Redefinition(name.clone()));
                }

                if params.is_empty() {
                    let value = self.eval(env, body)?;
                    debug!(name = name.as_str(), value, "assigned constant");
                    Ok((env.extend(name.as_str(), Function::constant(value)), Some(value)))
                } else {
                    debug!(name = name.as_str(), arity = params.len(), "defined function");
                    let function = Function::closure(env.clone(), params.clone(), body.clone());
                    Ok((env.extend(name.as_str(), function), None))
                }
            },
        }
    }
}
