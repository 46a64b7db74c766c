use logos::Logos;

use crate::interpreter::value::core::Value;

/// Marker that turns a whole line into a comment when it starts the trimmed
/// line.
pub const COMMENT_MARKER: &str = "//";

/// The reserved words of the language.
///
/// Every statement starts with exactly one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `let`
    Let,
    /// `print`
    Print,
    /// `println`
    Println,
    /// `eq`
    Eq,
    /// `add`
    Add,
    /// `sub`
    Sub,
    /// `mul`
    Mul,
    /// `div`
    Div,
}

impl Keyword {
    /// The number of operands the keyword takes between itself and the
    /// separator.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Print | Self::Println => 1,
            Self::Let | Self::Eq | Self::Add | Self::Sub | Self::Mul | Self::Div => 2,
        }
    }

    /// The keyword as written in source.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Let => "let",
            Self::Print => "print",
            Self::Println => "println",
            Self::Eq => "eq",
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
        }
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors raised by the generated lexer while classifying a single lexeme.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub enum LexingError {
    /// The input matches no token pattern.
    #[default]
    Unrecognized,
    /// The input is an integer literal that does not fit into an `i64`.
    LiteralTooLarge,
}

/// Represents a lexical token in the source input.
///
/// Tokens are produced from whitespace separated lexemes. Keywords and boolean
/// spellings take precedence over identifiers because their literal patterns
/// outrank the identifier regex.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(error = LexingError)]
pub enum Token {
    /// One of the reserved words, such as `let` or `println`.
    #[token("let", |_| Keyword::Let)]
    #[token("print", |_| Keyword::Print)]
    #[token("println", |_| Keyword::Println)]
    #[token("eq", |_| Keyword::Eq)]
    #[token("add", |_| Keyword::Add)]
    #[token("sub", |_| Keyword::Sub)]
    #[token("mul", |_| Keyword::Mul)]
    #[token("div", |_| Keyword::Div)]
    Keyword(Keyword),
    /// Integer literals such as `42` and the booleans `true` and `false`.
    #[regex(r"[0-9]+", parse_integer)]
    #[token("true", |_| Value::Bool(true))]
    #[token("false", |_| Value::Bool(false))]
    Literal(Value),
    /// Variable names such as `x`, `total_2` or `_tmp`.
    #[regex(r"_?[A-Za-z][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `;`
    #[token(";")]
    Separator,
    /// An integer literal that does not fit into an `i64`, kept as written.
    ///
    /// It only fails once a statement tries to resolve it, so it is harmless
    /// in skipped statements and in trailing tokens.
    OversizedLiteral(String),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Keyword(k) => write!(f, "keyword `{k}`"),
            Self::Literal(v) => write!(f, "{} literal `{v}`", v.kind()),
            Self::Identifier(name) => write!(f, "identifier `{name}`"),
            Self::Separator => write!(f, "separator `;`"),
            Self::OversizedLiteral(digits) => write!(f, "oversized int literal `{digits}`"),
        }
    }
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Ok(Value::Int)`: The parsed value.
/// - `Err(LexingError::LiteralTooLarge)`: If the digits overflow an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<Value, LexingError> {
    lex.slice()
       .parse()
       .map(Value::Int)
       .map_err(|_| LexingError::LiteralTooLarge)
}

/// Classifies a single lexeme.
///
/// The lexeme must match one token pattern as a whole; `x;` or `5x` are not
/// split into several tokens but dropped entirely. Integer literals outside
/// the `i64` range become [`Token::OversizedLiteral`].
///
/// # Returns
/// - `Some(token)`: The lexeme is a token.
/// - `None`: The lexeme matches no pattern and is skipped.
///
/// # Example
/// ```
/// use quill::interpreter::lexer::{Keyword, Token, classify};
///
/// assert_eq!(classify("let"), Some(Token::Keyword(Keyword::Let)));
/// assert_eq!(classify("x;"), None);
/// ```
#[must_use]
pub fn classify(lexeme: &str) -> Option<Token> {
    let mut lexer = Token::lexer(lexeme);
    let whole = 0..lexeme.len();

    match lexer.next() {
        Some(Ok(token)) if lexer.span() == whole => Some(token),
        Some(Err(LexingError::LiteralTooLarge)) if lexer.span() == whole => {
            Some(Token::OversizedLiteral(lexeme.to_string()))
        },
        _ => None,
    }
}

/// Turns a whole script into a token stream.
///
/// Lines whose trimmed content starts with [`COMMENT_MARKER`] are discarded.
/// All other content is split on whitespace, and every lexeme is classified
/// with [`classify`]. Each token is paired with the 1-based line it came from.
///
/// # Example
/// ```
/// use quill::interpreter::{
///     lexer::{Keyword, Token, tokenize},
///     value::core::Value,
/// };
///
/// let tokens = tokenize("// header\nprintln 7 ;");
///
/// assert_eq!(tokens,
///            vec![(Token::Keyword(Keyword::Println), 2),
///                 (Token::Literal(Value::Int(7)), 2),
///                 (Token::Separator, 2)]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<(Token, usize)> {
    let mut tokens = Vec::new();

    for (index, line) in source.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with(COMMENT_MARKER) {
            continue;
        }

        tokens.extend(trimmed.split_whitespace()
                             .filter_map(classify)
                             .map(|token| (token, index + 1)));
    }

    tokens
}
