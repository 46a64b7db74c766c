/// Statement splitting.
///
/// Groups the flat token stream into statements, each closed by a `;`
/// separator. There is no syntax tree; a statement is the run of tokens that
/// the evaluator matches against the shapes it knows.
pub mod statement;
