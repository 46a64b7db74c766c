use crate::interpreter::{evaluator::core::Context, lexer::Keyword, value::core::Value};

/// The two-operand keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
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

impl BinaryOperator {
    /// Maps a keyword to its operator, or `None` for keywords that are not
    /// binary operators.
    #[must_use]
    pub const fn from_keyword(keyword: Keyword) -> Option<Self> {
        match keyword {
            Keyword::Eq => Some(Self::Eq),
            Keyword::Add => Some(Self::Add),
            Keyword::Sub => Some(Self::Sub),
            Keyword::Mul => Some(Self::Mul),
            Keyword::Div => Some(Self::Div),
            Keyword::Let | Keyword::Print | Keyword::Println => None,
        }
    }
}

impl Context {
    /// Evaluates a binary operator on two resolved operands.
    ///
    /// Operators that are undefined for the given operand kinds produce no
    /// value instead of failing.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::{
    ///     evaluator::{binary::BinaryOperator, core::Context},
    ///     value::core::Value,
    /// };
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add, &Value::Int(2), &Value::Int(3));
    /// assert_eq!(result, Some(Value::Int(5)));
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add, &Value::Int(2), &Value::Bool(true));
    /// assert_eq!(result, None);
    /// ```
    #[must_use]
    pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> Option<Value> {
        match op {
            BinaryOperator::Eq => Self::eval_equality(left, right),
            _ => Self::eval_arithmetic(op, left, right),
        }
    }

    /// Compares two values of the same kind.
    ///
    /// Mixed kinds (`Int` against `Bool`) are not comparable and yield `None`.
    #[must_use]
    pub fn eval_equality(left: &Value, right: &Value) -> Option<Value> {
        match (left, right) {
            (Value::Int(l), Value::Int(r)) => Some(Value::Bool(l == r)),
            (Value::Bool(l), Value::Bool(r)) => Some(Value::Bool(l == r)),
            _ => None,
        }
    }

    /// Evaluates `add`, `sub`, `mul` or `div` on two integers.
    ///
    /// Division truncates toward zero. Overflow, division by zero and
    /// non-integer operands yield `None`.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::{
    ///     evaluator::{binary::BinaryOperator, core::Context},
    ///     value::core::Value,
    /// };
    ///
    /// let result = Context::eval_arithmetic(BinaryOperator::Div, &Value::Int(10), &Value::Int(3));
    /// assert_eq!(result, Some(Value::Int(3)));
    ///
    /// let result = Context::eval_arithmetic(BinaryOperator::Div, &Value::Int(1), &Value::Int(0));
    /// assert_eq!(result, None);
    /// ```
    #[must_use]
    pub fn eval_arithmetic(op: BinaryOperator, left: &Value, right: &Value) -> Option<Value> {
        let (Some(l), Some(r)) = (left.as_int(), right.as_int()) else {
            return None;
        };

        let result = match op {
            BinaryOperator::Add => l.checked_add(r),
            BinaryOperator::Sub => l.checked_sub(r),
            BinaryOperator::Mul => l.checked_mul(r),
            BinaryOperator::Div => l.checked_div(r),
            BinaryOperator::Eq => None,
        };

        result.map(Value::Int)
    }
}
