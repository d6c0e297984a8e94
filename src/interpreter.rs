/// The evaluator module reduces expressions and applies statements.
///
/// The evaluator looks names up in an environment, checks arity, applies
/// closures and native functions, and turns statements into new
/// environments. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates expressions to 64-bit floating point values.
/// - Records results and definitions by extending environments.
/// - Reports undefined names, arity mismatches and redefinitions.
pub mod evaluator;
/// The environment module defines bindings and callable values.
///
/// An environment is a persistent list of name bindings; older environments
/// remain valid after they are extended. The builtin table is constructed
/// here as well.
///
/// # Responsibilities
/// - Defines `Environment`, `Function` and `Closure`.
/// - Builds the self-referential default environment.
pub mod environment;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads a line of text and produces a stream of tokens: numbers,
/// identifiers, operators and delimiters, each paired with its column.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source columns.
/// - Reports lexical errors for invalid input.
pub mod lexer;
/// The parser module builds statements from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// a [`crate::ast::Statement`], desugaring every operator into a call.
///
/// # Responsibilities
/// - Converts tokens into expressions and statements.
/// - Validates grammar, reporting errors with column info.
pub mod parser;
/// Sessions thread one environment through successive statements.
pub mod session;
