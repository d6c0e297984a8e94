/// Stack growth for deeply recursive code paths.
///
/// The parser and the evaluator both recurse on the shape of their input.
/// Wrapping the recursive step keeps deep nesting from overflowing the
/// native stack.
pub mod stack;
