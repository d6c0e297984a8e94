use std::{
    f64::consts::{E, PI},
    sync::LazyLock,
};

use crate::{
    ast::Expr,
    interpreter::environment::{core::Environment, function::Function},
};

/// Defines the builtin table by generating its constructor and a name list.
///
/// Each entry maps a string name to an expression producing its
/// [`Function`]. The identifier given before the entries names the
/// builtin scope the entry expressions may capture.
///
/// The macro produces:
/// - `BUILTIN_NAMES` (public list of builtin names, in table order),
/// - `entries` (the `(name, function)` pairs the table is folded from).
macro_rules! builtin_table {
    (
        $scope:ident;
        $( $name:literal => $function:expr ),* $(,)?
    ) => {
        /// Every name bound by the default environment, in table order.
        pub const BUILTIN_NAMES: &[&str] = &[
            $($name,)*
        ];

        fn entries($scope: &Environment) -> Vec<(&'static str, Function)> {
            vec![
                $(($name, $function),)*
            ]
        }
    };
}

builtin_table! {
    scope;
    "^"     => Function::NativeBinary(f64::powf),
    "neg"   => Function::NativeUnary(|x| -x),
    "*"     => Function::NativeBinary(|a, b| a * b),
    "/"     => Function::NativeBinary(|a, b| a / b),
    "+"     => Function::NativeBinary(|a, b| a + b),
    "-"     => Function::NativeBinary(|a, b| a - b),
    "pi"    => Function::constant(PI),
    "e"     => Function::constant(E),
    "sin"   => Function::NativeUnary(f64::sin),
    "cos"   => Function::NativeUnary(f64::cos),
    "tan"   => Function::NativeUnary(f64::tan),
    "sqrt"  => Function::NativeUnary(f64::sqrt),
    "ln"    => Function::NativeUnary(f64::ln),
    "cbrt"  => derived(scope, &["x"], call("root", [var("x"), num(3.0)])),
    "root"  => derived(scope, &["x", "k"], call("^", [var("x"), call("/", [num(1.0), var("k")])])),
    "log"   => derived(scope, &["b", "x"], call("/", [call("ln", [var("x")]), call("ln", [var("b")])])),
    "log2"  => derived(scope, &["x"], call("log", [num(2.0), var("x")])),
    "log10" => derived(scope, &["x"], call("log", [num(10.0), var("x")])),
}

static TABLE: LazyLock<Environment> = LazyLock::new(|| {
    entries(&Environment::builtin_scope()).into_iter()
                                          .rev()
                                          .fold(Environment::empty(), |env, (name, function)| {
                                              env.extend(name, function)
                                          })
});

/// Returns the finished builtin table.
///
/// Built on first use and never modified afterwards.
pub fn table() -> &'static Environment {
    &TABLE
}

/// Returns `true` if `name` belongs to the builtin table, no matter what the
/// live environment shadows it with.
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_NAMES.contains(&name)
}

fn derived(scope: &Environment, params: &[&str], body: Expr) -> Function {
    Function::closure(scope.clone(),
                      params.iter().map(ToString::to_string).collect(),
                      body)
}

fn call<const N: usize>(name: &str, arguments: [Expr; N]) -> Expr {
    Expr::call(name, arguments.into())
}

fn var(name: &str) -> Expr {
    Expr::name(name)
}

const fn num(value: f64) -> Expr {
    Expr::Number(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_name_is_bound() {
        for name in BUILTIN_NAMES {
            assert!(table().lookup(name).is_some(), "builtin '{name}' is missing");
        }
        assert_eq!(table().names().collect::<Vec<_>>(), BUILTIN_NAMES);
    }

    #[test]
    fn derived_entries_capture_the_builtin_scope() {
        let Some(Function::Closure(cbrt)) = table().lookup("cbrt") else {
            panic!("cbrt should be a closure");
        };
        // `root` is listed after `cbrt` and must still be visible.
        assert!(cbrt.env.lookup("root").is_some());
        assert_eq!(&*cbrt.params, ["x".to_string()]);
    }

    #[test]
    fn arities_match_the_table() {
        let arity = |name: &str| table().lookup(name).map(Function::arity);

        assert_eq!(arity("neg"), Some(1));
        assert_eq!(arity("^"), Some(2));
        assert_eq!(arity("pi"), Some(0));
        assert_eq!(arity("log"), Some(2));
        assert_eq!(arity("log10"), Some(1));
    }

    #[test]
    fn reserved_names_come_from_the_table_only() {
        assert!(is_builtin("pi"));
        assert!(is_builtin("log2"));
        assert!(!is_builtin("ans"));
        assert!(!is_builtin("f"));
    }
}
