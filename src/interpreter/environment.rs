/// The persistent, shadow-by-prepend environment.
///
/// Defines `Environment`, an immutable linked list of name bindings whose
/// unchanged tails are shared between every environment extended from them.
pub mod core;
/// Callable values stored in an environment.
///
/// Defines the `Function` enum (closures and native unary/binary functions)
/// and the constructors that wrap constants and definitions as closures.
pub mod function;
/// The builtin table.
///
/// Builds the default environment once. Derived entries such as `log2` are
/// closures that resolve their siblings against the finished table.
pub mod builtin;
