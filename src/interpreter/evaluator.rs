/// Core evaluation logic and context management.
///
/// Contains the runtime context that owns the variable environment, operand
/// resolution and the statement dispatcher.
pub mod core;

/// Binary operator evaluation.
///
/// Implements `eq` and the integer arithmetic keywords.
pub mod binary;

/// Output statements.
///
/// Writes values for `print` and `println`.
pub mod print;
