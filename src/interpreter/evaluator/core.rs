use std::{collections::HashMap, io::Write};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::BinaryOperator, print::print},
        lexer::{Keyword, Token},
        parser::statement::Statement,
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// A token that supplies a value to a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand<'a> {
    /// A literal carrying its value.
    Literal(Value),
    /// A variable name, resolved against the environment.
    Identifier(&'a str),
    /// An integer literal outside the `i64` range; resolving it fails.
    Oversized(&'a str),
}

impl<'a> Operand<'a> {
    /// Views a token as an operand, or `None` for keywords and separators.
    #[must_use]
    pub fn from_token(token: &'a Token) -> Option<Self> {
        match token {
            Token::Literal(value) => Some(Self::Literal(*value)),
            Token::Identifier(name) => Some(Self::Identifier(name)),
            Token::OversizedLiteral(digits) => Some(Self::Oversized(digits)),
            Token::Keyword(_) | Token::Separator => None,
        }
    }
}

/// Stores the runtime evaluation context.
///
/// The context owns the variable environment of one script run. It starts
/// empty, is only changed by `let`, and lives as long as the run does. Two
/// contexts never share state.
#[derive(Debug, Default)]
pub struct Context {
    /// A mapping from variable names to their current values.
    pub variables: HashMap<String, Value>,
}

impl Context {
    /// Creates a new evaluation context with an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self { variables: HashMap::new() }
    }

    /// Looks up a variable by name.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Binds `name` to `value`, replacing any previous binding whatever its
    /// kind.
    pub fn define(&mut self, name: &str, value: Value) {
        self.variables.insert(name.to_string(), value);
    }

    /// Resolves an operand to a value.
    ///
    /// Literals resolve to themselves, identifiers to a copy of their bound
    /// value.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UnknownVariable`] if an identifier is not bound,
    /// or [`RuntimeError::LiteralTooLarge`] for an oversized literal.
    pub fn resolve(&self, operand: Operand<'_>, line: usize) -> EvalResult<Value> {
        match operand {
            Operand::Literal(value) => Ok(value),
            Operand::Oversized(literal) => {
                Err(RuntimeError::LiteralTooLarge { literal: literal.to_string(),
                                                    line })
            },
            Operand::Identifier(name) => {
                self.get_variable(name)
                    .copied()
                    .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                                   line })
            },
        }
    }

    /// Evaluates a single statement.
    ///
    /// A statement is recognized only when it is a keyword, followed by
    /// exactly as many operands as the keyword takes, followed by the
    /// separator. Anything else does nothing and resolves no operand.
    ///
    /// # Parameters
    /// - `statement`: Statement to evaluate.
    /// - `out`: Sink for `print` and `println`.
    ///
    /// # Returns
    /// The result of `eq` or an arithmetic keyword. `let`, `print` and
    /// `println` act through the environment and the sink and return `None`,
    /// as do skipped statements and operators undefined for their operands.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::{
    ///     evaluator::core::Context,
    ///     lexer::tokenize,
    ///     parser::statement::split_statements,
    ///     value::core::Value,
    /// };
    ///
    /// let tokens = tokenize("let x 4 ; mul x 3 ;");
    /// let mut context = Context::new();
    /// let mut out = Vec::new();
    /// let mut last = None;
    ///
    /// for statement in split_statements(&tokens) {
    ///     last = context.eval_statement(&statement, &mut out).unwrap();
    /// }
    ///
    /// assert_eq!(last, Some(Value::Int(12)));
    /// assert!(out.is_empty());
    /// ```
    pub fn eval_statement(&mut self,
                          statement: &Statement,
                          out: &mut dyn Write)
                          -> EvalResult<Option<Value>> {
        let [(Token::Keyword(keyword), _), rest @ .., (Token::Separator, _)] =
            statement.tokens.as_slice()
        else {
            return Ok(None);
        };

        let Some(operands) = rest.iter()
                                 .map(|(token, line)| Operand::from_token(token).map(|o| (o, *line)))
                                 .collect::<Option<Vec<_>>>()
        else {
            return Ok(None);
        };

        if operands.len() != keyword.arity() {
            return Ok(None);
        }

        match (*keyword, operands.as_slice()) {
            (Keyword::Let, [(Operand::Identifier(name), _), (value, line)]) => {
                let value = self.resolve(*value, *line)?;
                self.define(name, value);
                Ok(None)
            },
            (Keyword::Print | Keyword::Println, [(operand, line)]) => {
                let value = self.resolve(*operand, *line)?;
                print(&value, *keyword == Keyword::Println, out, *line)?;
                Ok(None)
            },
            (keyword, [(left, left_line), (right, right_line)]) => {
                let Some(op) = BinaryOperator::from_keyword(keyword) else {
                    return Ok(None);
                };
                let left = self.resolve(*left, *left_line)?;
                let right = self.resolve(*right, *right_line)?;
                Ok(Self::eval_binary(op, &left, &right))
            },
            _ => Ok(None),
        }
    }

    /// Evaluates a sequence of statements in order.
    ///
    /// Stops at the first error; statements evaluated before it keep their
    /// effects.
    ///
    /// # Returns
    /// The last value an operator statement produced.
    pub fn eval_statements(&mut self,
                           statements: &[Statement],
                           out: &mut dyn Write)
                           -> EvalResult<Option<Value>> {
        let mut result = None;

        for statement in statements {
            if let Some(value) = self.eval_statement(statement, out)? {
                result = Some(value);
            }
        }

        Ok(result)
    }
}
