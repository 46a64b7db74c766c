/// Represents a runtime value in the interpreter.
///
/// The language knows exactly two kinds of values. A value never changes kind
/// after it has been created; rebinding a variable replaces the whole value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value {
    /// A 64 bit signed integer, produced by literals such as `42` and by the
    /// arithmetic keywords.
    Int(i64),
    /// A boolean, produced by `true`, `false` and by `eq`.
    Bool(bool),
}

/// The kind of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// See [`Value::Int`].
    Int,
    /// See [`Value::Bool`].
    Bool,
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl Value {
    /// Returns the kind tag of this value.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::value::core::{Value, ValueKind};
    ///
    /// assert_eq!(Value::Int(3).kind(), ValueKind::Int);
    /// assert_eq!(Value::from(true).kind(), ValueKind::Bool);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Int(_) => ValueKind::Int,
            Self::Bool(_) => ValueKind::Bool,
        }
    }

    /// Returns the integer payload, or `None` for booleans.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Bool(_) => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int => write!(f, "int"),
            Self::Bool => write!(f, "bool"),
        }
    }
}
