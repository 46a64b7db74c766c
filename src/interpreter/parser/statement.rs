use crate::interpreter::lexer::Token;

/// A run of tokens closed by a separator.
///
/// The closing [`Token::Separator`] is kept as the last element. Every token
/// keeps the line it was read from, so errors point at the operand that caused
/// them even when a statement spans several lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// `(Token, line)` pairs, separator included.
    pub tokens: Vec<(Token, usize)>,
}

impl Statement {
    /// The line the statement starts on.
    #[must_use]
    pub fn line(&self) -> usize {
        self.tokens.first().map_or(0, |(_, line)| *line)
    }
}

/// Partitions a token stream into statements.
///
/// Tokens are accumulated until a separator is seen, which closes the current
/// statement. Tokens left over after the final separator never form a
/// statement and are dropped.
///
/// # Parameters
/// - `tokens`: `(Token, line)` pairs as produced by the lexer.
///
/// # Example
/// ```
/// use quill::interpreter::{lexer::tokenize, parser::statement::split_statements};
///
/// let tokens = tokenize("let x 1 ;\nprintln x ;\nprintln x");
/// let statements = split_statements(&tokens);
///
/// assert_eq!(statements.len(), 2);
/// assert_eq!(statements[1].line(), 2);
/// ```
#[must_use]
pub fn split_statements(tokens: &[(Token, usize)]) -> Vec<Statement> {
    let mut statements = Vec::new();
    let mut current = Vec::new();

    for (token, line) in tokens {
        current.push((token.clone(), *line));

        if *token == Token::Separator {
            statements.push(Statement { tokens: std::mem::take(&mut current) });
        }
    }

    statements
}
