use std::{fmt, sync::Arc};

use crate::interpreter::environment::{builtin, function::Function};

/// An ordered mapping from names to [`Function`]s.
///
/// Lookup returns the most recently added binding for a name. Extending an
/// environment never touches the original: the new binding is prepended to a
/// shared tail, so older environments stay valid and cloning is cheap.
///
/// # Example
/// ```
/// use fncalc::interpreter::environment::{core::Environment, function::Function};
///
/// let outer = Environment::empty().extend("x", Function::constant(1.0));
/// let inner = outer.extend("x", Function::constant(2.0));
///
/// assert_eq!(inner.lookup("x").and_then(Function::constant_value), Some(2.0));
/// assert_eq!(outer.lookup("x").and_then(Function::constant_value), Some(1.0));
/// ```
#[derive(Clone, Default)]
pub struct Environment {
    frame: Option<Arc<Frame>>,
}

enum Frame {
    /// Stands for the whole builtin table. Lookups that reach it continue in
    /// the table returned by [`builtin::table`].
    Builtins,
    Binding {
        name:     String,
        function: Function,
        next:     Environment,
    },
}

impl Environment {
    /// Creates an environment with no bindings.
    #[must_use]
    pub const fn empty() -> Self {
        Self { frame: None }
    }

    /// Creates an environment that resolves every name against the builtin
    /// table, whatever the table contains once it is finished.
    ///
    /// Builtin closures capture this instead of a snapshot, which lets them
    /// refer to entries defined after them in the table.
    #[must_use]
    pub fn builtin_scope() -> Self {
        Self { frame: Some(Arc::new(Frame::Builtins)) }
    }

    /// Returns a new environment with `name` bound to `function` in front of
    /// every binding of `self`.
    #[must_use]
    pub fn extend(&self, name: impl Into<String>, function: Function) -> Self {
        Self { frame: Some(Arc::new(Frame::Binding { name: name.into(),
                                                     function,
                                                     next: self.clone() })) }
    }

    /// Looks up the most recent binding of `name`.
    pub fn lookup(&self, name: &str) -> Option<&Function> {
        let mut current: &Environment = self;
        while let Some(frame) = &current.frame {
            match frame.as_ref() {
                Frame::Builtins => current = builtin::table(),
                Frame::Binding { name: bound,
                                 function,
                                 next, } => {
                    if bound == name {
                        return Some(function);
                    }
                    current = next;
                },
            }
        }
        None
    }

    /// Iterates over every bound name, newest first. Shadowed bindings are
    /// included.
    pub fn names(&self) -> Names<'_> {
        Names { current: self }
    }
}

/// Iterator over the names of an [`Environment`], see
/// [`Environment::names`].
pub struct Names<'a> {
    current: &'a Environment,
}

impl<'a> Iterator for Names<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let current = self.current;
            match current.frame.as_deref()? {
                Frame::Builtins => self.current = builtin::table(),
                Frame::Binding { name, next, .. } => {
                    self.current = next;
                    return Some(name);
                },
            }
        }
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

impl Drop for Environment {
    // Long sessions build long chains; unlink them iteratively.
    fn drop(&mut self) {
        let mut frame = self.frame.take();
        while let Some(shared) = frame {
            match Arc::try_unwrap(shared) {
                Ok(Frame::Binding { mut next, .. }) => frame = next.frame.take(),
                Ok(Frame::Builtins) | Err(_) => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_of(env: &Environment, name: &str) -> Option<f64> {
        env.lookup(name).and_then(Function::constant_value)
    }

    #[test]
    fn lookup_prefers_the_newest_binding() {
        let env = Environment::empty().extend("a", Function::constant(1.0))
                                      .extend("b", Function::constant(2.0))
                                      .extend("a", Function::constant(3.0));

        assert_eq!(value_of(&env, "a"), Some(3.0));
        assert_eq!(value_of(&env, "b"), Some(2.0));
        assert!(env.lookup("c").is_none());
    }

    #[test]
    fn extending_leaves_the_original_untouched() {
        let base = Environment::empty().extend("a", Function::constant(1.0));
        let left = base.extend("b", Function::constant(2.0));
        let right = base.extend("b", Function::constant(5.0));

        assert!(base.lookup("b").is_none());
        assert_eq!(value_of(&left, "b"), Some(2.0));
        assert_eq!(value_of(&right, "b"), Some(5.0));
        assert_eq!(value_of(&right, "a"), Some(1.0));
    }

    #[test]
    fn names_are_listed_newest_first() {
        let env = Environment::empty().extend("x", Function::constant(1.0))
                                      .extend("y", Function::constant(2.0))
                                      .extend("x", Function::constant(3.0));

        assert_eq!(env.names().collect::<Vec<_>>(), ["x", "y", "x"]);
    }

    #[test]
    fn builtin_scope_resolves_against_the_table() {
        let scope = Environment::builtin_scope();

        assert!(scope.lookup("log").is_some());
        assert!(scope.lookup("ans").is_none());
        assert_eq!(scope.names().count(), builtin::BUILTIN_NAMES.len());
    }

    #[test]
    fn dropping_a_long_chain_does_not_recurse() {
        let mut env = Environment::empty();
        for i in 0..200_000 {
            env = env.extend("x", Function::constant(f64::from(i)));
        }
        assert_eq!(value_of(&env, "x"), Some(199_999.0));
        drop(env);
    }
}
