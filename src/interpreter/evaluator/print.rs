use std::io::Write;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Writes a value to the output sink.
///
/// The value is formatted using its `Display` implementation: the decimal
/// integer or `true`/`false`. A newline follows when `newline` is set, which
/// is the difference between `println` and `print`.
///
/// # Errors
/// Returns [`RuntimeError::OutputFailed`] if the sink rejects the write.
///
/// # Example
/// ```
/// use quill::interpreter::{evaluator::print::print, value::core::Value};
///
/// let mut out = Vec::new();
/// print(&Value::Int(42), true, &mut out, 1).unwrap();
/// print(&Value::Bool(false), false, &mut out, 2).unwrap();
///
/// assert_eq!(out, b"42\nfalse");
/// ```
pub fn print(value: &Value, newline: bool, out: &mut dyn Write, line: usize) -> EvalResult<()> {
    let written = if newline {
        writeln!(out, "{value}")
    } else {
        write!(out, "{value}")
    };

    written.map_err(|e| RuntimeError::OutputFailed { details: e.to_string(),
                                                     line })
}
