//! # quill
//!
//! quill is an interpreter for a tiny line-oriented scripting language written
//! in Rust. Every statement is a keyword followed by its operands and a `;`:
//!
//! ```text
//! // bind, compute and print
//! let x 10 ;
//! let y x ;
//! println y ;
//! ```
//!
//! Scripts are turned into tokens, split into statements and evaluated one
//! statement at a time against a single variable environment.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{self, Write};

use crate::interpreter::{
    evaluator::core::Context,
    lexer::{Token, tokenize},
    parser::statement::split_statements,
    value::core::Value,
};

/// Provides unified error types for lexing and evaluation.
///
/// This module defines all errors that can stop a script. It standardizes
/// error reporting and carries the source line of each failure.
///
/// # Responsibilities
/// - Defines error enums for the lexer and the evaluator.
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of script execution.
///
/// This module ties together lexing, statement splitting, evaluation and the
/// value representation.
///
/// # Responsibilities
/// - Coordinates the lexer, the statement splitter and the evaluator.
/// - Defines the runtime value type.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Evaluates an already tokenized script.
///
/// The tokens are split into statements which are then evaluated in order in
/// a fresh [`Context`]. Output of `print` and `println` goes to `out`.
///
/// # Returns
/// The last value an operator statement produced, if any.
///
/// # Errors
/// Returns an error as soon as a statement fails; later statements do not run.
pub fn execute(tokens: &[(Token, usize)],
               out: &mut dyn Write)
               -> Result<Option<Value>, Box<dyn std::error::Error>> {
    let statements = split_statements(tokens);
    let mut context = Context::new();

    Ok(context.eval_statements(&statements, out)?)
}

/// Runs a whole script, writing its output to `out`.
///
/// # Returns
/// The last value an operator statement produced, if any.
///
/// # Errors
/// Returns an error if a statement aborts the run.
///
/// # Examples
/// ```
/// use quill::{interpreter::value::core::Value, run};
///
/// let mut out = Vec::new();
/// let last = run("let x 5 ;\nprintln x ;\nadd x 2 ;", &mut out).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "5\n");
/// assert_eq!(last, Some(Value::Int(7)));
///
/// // `y` is never bound.
/// let mut out = Vec::new();
/// assert!(run("let x y ;", &mut out).is_err());
/// ```
pub fn run<W: Write>(source: &str,
                     out: &mut W)
                     -> Result<Option<Value>, Box<dyn std::error::Error>> {
    execute(&tokenize(source), out)
}

/// Runs a script against standard output.
///
/// When `auto_print` is set, the last value an operator statement produced is
/// printed on its own line after the script finished successfully.
///
/// # Errors
/// Returns an error if evaluation fails, or if standard output cannot be
/// written.
///
/// # Examples
/// ```
/// use quill::get_result;
///
/// assert!(get_result("let result 2 ;", false).is_ok());
/// assert!(get_result("println missing ;", false).is_err());
/// ```
pub fn get_result(source: &str, auto_print: bool) -> Result<(), Box<dyn std::error::Error>> {
    run_to_stdout(&tokenize(source), auto_print)
}

/// Evaluates tokens against standard output, flushing whatever was printed
/// even when the run fails.
///
/// # Errors
/// Returns the evaluation error, or an I/O error from standard output.
pub fn run_to_stdout(tokens: &[(Token, usize)],
                     auto_print: bool)
                     -> Result<(), Box<dyn std::error::Error>> {
    let mut out = io::stdout().lock();

    let result = execute(tokens, &mut out);
    out.flush()?;
    let result = result?;

    if auto_print && let Some(value) = result {
        writeln!(out, "{value}")?;
    }

    Ok(())
}
