use tracing::trace;

use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::environment::{
        core::Environment,
        function::{Closure, Function},
    },
    util::stack::ensure_sufficient_stack,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Default limit on nested applications of closures with parameters.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Tunable limits of the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalConfig {
    /// Maximum number of closure applications that may be in progress at
    /// once, or `None` to let the stack grow without bound.
    pub max_depth: Option<usize>,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self { max_depth: Some(DEFAULT_MAX_DEPTH) }
    }
}

/// Stores the state of a single evaluation.
///
/// Environments are passed in explicitly and never stored here; the context
/// only tracks how deeply closure applications are nested so runaway
/// definitions end in an error instead of a crash.
///
/// ## Usage
///
/// A `Context` is created for each statement. [`crate::evaluate`] and
/// [`crate::interpreter::session::Session`] do that for you.
#[derive(Debug, Default)]
pub struct Context {
    config: EvalConfig,
    depth:  usize,
}

impl Context {
    /// Creates a context with the given limits.
    #[must_use]
    pub const fn new(config: EvalConfig) -> Self {
        Self { config, depth: 0 }
    }

    /// Reduces an expression to a number under `env`.
    ///
    /// Numbers evaluate to themselves. A call looks its name up in `env` and
    /// dispatches on the callable found and the number of arguments:
    ///
    /// - a closure without parameters given one argument multiplies its
    ///   value by the argument (`2 pi`),
    /// - a closure given exactly as many arguments as it has parameters
    ///   evaluates its body in its captured environment, extended with the
    ///   parameters bound to the argument values,
    /// - native functions take exactly one or two arguments,
    /// - anything else is an [`EvalError::Arity`].
    ///
    /// Arguments are evaluated left to right in the caller's environment.
    ///
    /// # Example
    /// ```
    /// use fncalc::{
    ///     ast::Expr,
    ///     default_env,
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let two_pi = Expr::call("pi", vec![Expr::Number(2.0)]);
    /// let value = Context::default().eval(&default_env(), &two_pi).unwrap();
    ///
    /// assert!((value - 2.0 * std::f64::consts::PI).abs() < 1e-12);
    /// ```
    pub fn eval(&mut self, env: &Environment, expr: &Expr) -> EvalResult<f64> {
        ensure_sufficient_stack(|| match expr {
            Expr::Number(value) => Ok(*value),
            Expr::Call { name, arguments } => {
                let function = env.lookup(name)
                                  .ok_or_else(|| EvalError::UndefinedName(name.clone()))?;
                self.apply(env, name, function, arguments)
            },
        })
    }

    /// Applies `function`, found under `name`, to unevaluated `arguments`.
    fn apply(&mut self,
             env: &Environment,
             name: &str,
             function: &Function,
             arguments: &[Expr])
             -> EvalResult<f64> {
        match (function, arguments) {
            (Function::Closure(closure), [factor]) if closure.params.is_empty() => {
                let value = self.eval(&closure.env, &closure.body)?;
                let factor = self.eval(env, factor)?;
                Ok(value * factor)
            },
            (Function::Closure(closure), []) if closure.params.is_empty() => {
                self.eval(&closure.env, &closure.body)
            },
            (Function::Closure(closure), _) if closure.params.len() == arguments.len() => {
                self.call_closure(env, name, closure, arguments)
            },
            (Function::NativeUnary(f), [x]) => Ok(f(self.eval(env, x)?)),
            (Function::NativeBinary(f), [left, right]) => {
                let left = self.eval(env, left)?;
                let right = self.eval(env, right)?;
                Ok(f(left, right))
            },
            _ => Err(EvalError::Arity(name.to_owned())),
        }
    }

    /// Evaluates the body of a closure with parameters.
    ///
    /// Parameter bindings are prepended to the captured environment, never
    /// to the caller's, so they shadow captured names of the same spelling
    /// and nothing else.
    fn call_closure(&mut self,
                    env: &Environment,
                    name: &str,
                    closure: &Closure,
                    arguments: &[Expr])
                    -> EvalResult<f64> {
        let mut scope = closure.env.clone();
        for (param, argument) in closure.params.iter().zip(arguments) {
            let value = self.eval(env, argument)?;
            scope = scope.extend(param.as_str(), Function::constant(value));
        }

        if let Some(limit) = self.config.max_depth
           && self.depth >= limit
        {
            return Err(EvalError::RecursionLimit { name: name.to_owned(),
                                                   limit });
        }

        self.depth += 1;
        trace!(function = name, depth = self.depth, "applying closure");
        let result = self.eval(&scope, &closure.body);
        self.depth -= 1;
        result
    }

    /// Current number of closure applications in progress.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_env;

    fn eval(expr: &Expr) -> EvalResult<f64> {
        Context::default().eval(&default_env(), expr)
    }

    fn num(value: f64) -> Expr {
        Expr::Number(value)
    }

    #[test]
    fn numbers_evaluate_to_themselves() {
        assert_eq!(eval(&num(42.5)), Ok(42.5));
    }

    #[test]
    fn native_binary_operators() {
        assert_eq!(eval(&Expr::call("-", vec![num(7.0), num(2.0)])), Ok(5.0));
        assert_eq!(eval(&Expr::call("^", vec![num(2.0), num(10.0)])), Ok(1024.0));
        assert_eq!(eval(&Expr::call("neg", vec![num(3.0)])), Ok(-3.0));
    }

    #[test]
    fn constants_accept_zero_or_one_argument() {
        assert_eq!(eval(&Expr::name("pi")), Ok(std::f64::consts::PI));
        assert_eq!(eval(&Expr::call("e", vec![num(2.0)])), Ok(2.0 * std::f64::consts::E));
        assert_eq!(eval(&Expr::call("e", vec![num(1.0), num(2.0)])),
                   Err(EvalError::Arity("e".to_string())));
    }

    #[test]
    fn natives_reject_other_argument_counts() {
        assert_eq!(eval(&Expr::name("sin")), Err(EvalError::Arity("sin".to_string())));
        assert_eq!(eval(&Expr::call("+", vec![num(1.0)])), Err(EvalError::Arity("+".to_string())));
    }

    #[test]
    fn closure_bodies_see_captured_not_caller_bindings() {
        // `f(x) = x + y` defined where y = 1, called where y = 100.
        let defined = default_env().extend("y", Function::constant(1.0));
        let body = Expr::call("+", vec![Expr::name("x"), Expr::name("y")]);
        let f = Function::closure(defined, vec!["x".to_string()], body);
        let caller = default_env().extend("f", f)
                                  .extend("y", Function::constant(100.0));

        let value = Context::default().eval(&caller, &Expr::call("f", vec![Expr::name("y")]));
        assert_eq!(value, Ok(101.0));
    }

    #[test]
    fn nested_native_calls_do_not_exhaust_the_stack() {
        let expr = (0..200_000).fold(num(1.0), |operand, _| Expr::call("neg", vec![operand]));
        assert_eq!(eval(&expr), Ok(1.0));
    }

    #[test]
    fn depth_is_restored_after_errors() {
        let mut context = Context::new(EvalConfig { max_depth: Some(1) });
        let result = context.eval(&default_env(), &Expr::call("log2", vec![num(8.0)]));

        assert_eq!(result,
                   Err(EvalError::RecursionLimit { name:  "log".to_string(),
                                                   limit: 1, }));
        assert_eq!(context.depth(), 0);
    }
}
