//! Filter expressions for WHERE clauses.
//!
//! Each comparison variant pairs a predicate template (column + operator)
//! with a bound value. The value is carried as data and rendered as a `$n`
//! placeholder, never as literal SQL text.

use crate::Value;

/// A filter expression.
///
/// Represents a condition in a WHERE clause. Can be composed with
/// `And`, `Or`, and `Not` for complex boolean logic.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    // Comparisons
    /// column = value
    Eq(String, Value),
    /// column != value
    Ne(String, Value),
    /// column < value
    Lt(String, Value),
    /// column <= value
    Lte(String, Value),
    /// column > value
    Gt(String, Value),
    /// column >= value
    Gte(String, Value),

    // Pattern matching
    /// column contains the fragment as a substring. The fragment is bound
    /// as a parameter and matched literally (LIKE metacharacters escaped).
    Contains(String, String),

    // Nulls
    /// column IS NULL
    IsNull(String),
    /// column IS NOT NULL
    IsNotNull(String),

    // Boolean logic
    /// expr AND expr AND ...
    And(Vec<Expr>),
    /// expr OR expr OR ...
    Or(Vec<Expr>),
    /// NOT expr
    Not(Box<Expr>),
}

impl Expr {
    /// Create an equality expression: column = value
    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Expr::Eq(column.into(), value.into())
    }

    /// Create a not-equal expression: column != value
    pub fn ne(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Expr::Ne(column.into(), value.into())
    }

    /// Create a less-than expression: column < value
    pub fn lt(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Expr::Lt(column.into(), value.into())
    }

    /// Create a less-than-or-equal expression: column <= value
    pub fn lte(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Expr::Lte(column.into(), value.into())
    }

    /// Create a greater-than expression: column > value
    pub fn gt(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Expr::Gt(column.into(), value.into())
    }

    /// Create a greater-than-or-equal expression: column >= value
    pub fn gte(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Expr::Gte(column.into(), value.into())
    }

    /// Create a substring-containment expression.
    pub fn contains(column: impl Into<String>, fragment: impl Into<String>) -> Self {
        Expr::Contains(column.into(), fragment.into())
    }

    /// Create an IS NULL expression
    pub fn is_null(column: impl Into<String>) -> Self {
        Expr::IsNull(column.into())
    }

    /// Create an IS NOT NULL expression
    pub fn is_not_null(column: impl Into<String>) -> Self {
        Expr::IsNotNull(column.into())
    }

    /// Combine expressions with AND
    pub fn and(exprs: impl IntoIterator<Item = Expr>) -> Self {
        Expr::And(exprs.into_iter().collect())
    }

    /// Combine expressions with OR
    pub fn or(exprs: impl IntoIterator<Item = Expr>) -> Self {
        Expr::Or(exprs.into_iter().collect())
    }

    /// Negate an expression
    pub fn not(expr: Expr) -> Self {
        Expr::Not(Box::new(expr))
    }
}
