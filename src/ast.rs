use crate::util::stack::ensure_sufficient_stack;

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every operator, constant reference and function application is a
/// [`Expr::Call`]; the parser desugars `a + b` into `Call { name: "+", .. }`,
/// `-a` into a call of `neg` and a bare `pi` into a call with no arguments.
///
/// Long operator chains nest deeply, so cloning grows the stack on demand
/// and dropping walks the tree with an explicit work list.
#[derive(Debug, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number(f64),
    /// A named call with an ordered argument list.
    Call {
        /// Name that is looked up in the environment.
        name:      String,
        /// Arguments, evaluated left to right in the caller's environment.
        arguments: Vec<Self>,
    },
}

impl Expr {
    /// Builds a call node.
    ///
    /// ## Example
    /// ```
    /// use fncalc::ast::Expr;
    ///
    /// let expr = Expr::call("+", vec![Expr::Number(1.0), Expr::Number(2.0)]);
    /// assert!(matches!(expr, Expr::Call { ref name, .. } if name == "+"));
    /// ```
    #[must_use]
    pub fn call(name: impl Into<String>, arguments: Vec<Self>) -> Self {
        Self::Call { name: name.into(),
                     arguments }
    }

    /// Builds a reference to a name, i.e. a call without arguments.
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self::call(name, Vec::new())
    }
}

impl Clone for Expr {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| match self {
            Self::Number(value) => Self::Number(*value),
            Self::Call { name, arguments } => Self::Call { name:      name.clone(),
                                                           arguments: arguments.clone(), },
        })
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let Self::Call { arguments, .. } = self else {
            return;
        };
        let mut pending = std::mem::take(arguments);
        while let Some(mut expr) = pending.pop() {
            if let Self::Call { arguments, .. } = &mut expr {
                pending.append(arguments);
            }
        }
    }
}

/// Represents a top-level statement.
///
/// Statements are the units parsed from a single line of input.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A standalone expression evaluated for its result.
    Expression(Expr),
    /// A binding: `x = expr` when `params` is empty, `f(x, y) = expr`
    /// otherwise.
    Binding {
        /// The bound name.
        name:   String,
        /// Parameter names, empty for an eager assignment.
        params: Vec<String>,
        /// The body expression.
        body:   Expr,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn left_deep_sum(terms: usize) -> Expr {
        (1..terms).fold(Expr::Number(1.0), |left, _| {
                      Expr::call("+", vec![left, Expr::Number(1.0)])
                  })
    }

    #[test]
    fn deep_trees_clone_and_drop() {
        let expr = left_deep_sum(200_000);
        let copy = expr.clone();
        drop(expr);

        let Expr::Call { ref name, ref arguments } = copy else {
            panic!("expected a call, got a number");
        };
        assert_eq!(name, "+");
        assert_eq!(arguments.len(), 2);
        drop(copy);
    }
}
