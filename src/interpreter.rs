/// The evaluator module executes statements against the environment.
///
/// The evaluator matches each statement against the shapes the language
/// knows, resolves operands, performs the operation and writes output.
///
/// # Responsibilities
/// - Owns the variable environment of a run.
/// - Evaluates `let`, `eq`, the arithmetic keywords, `print` and `println`.
/// - Reports runtime errors such as reading an unbound variable.
pub mod evaluator;
/// The lexer module tokenizes source code.
///
/// The lexer drops comment lines, splits the remaining text on whitespace and
/// classifies every lexeme as a keyword, literal, identifier or separator.
/// Lexemes that fit none of these are dropped.
pub mod lexer;
/// The parser module groups tokens into statements.
///
/// There is no syntax tree: a statement is the run of tokens up to and
/// including the next separator.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
pub mod value;
