/// Runtime errors.
///
/// Contains the errors that abort a running script, such as reading a variable
/// that was never bound with `let`. Lexing never fails: stray lexemes are
/// dropped and oversized literals only fail once a statement resolves them.
pub mod runtime_error;

pub use runtime_error::RuntimeError;
