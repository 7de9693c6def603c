//! Query description types.

use crate::{Expr, Value};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

/// A SELECT query description.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectQuery {
    /// Table name
    pub table: String,
    /// Columns to select (empty = *)
    pub columns: Vec<String>,
    /// WHERE conditions (ANDed together, order preserved)
    pub filters: Vec<Expr>,
    /// ORDER BY clauses
    pub order: Vec<(String, SortDir)>,
    /// LIMIT
    pub limit: Option<u64>,
    /// OFFSET
    pub offset: Option<u64>,
}

impl SelectQuery {
    /// Create a new SELECT query for a table.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            filters: Vec::new(),
            order: Vec::new(),
            limit: None,
            offset: None,
        }
    }

    /// Select specific columns.
    pub fn columns(mut self, cols: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.columns = cols.into_iter().map(Into::into).collect();
        self
    }

    /// Add a filter condition.
    pub fn filter(mut self, expr: Expr) -> Self {
        self.filters.push(expr);
        self
    }

    /// Add an ORDER BY clause.
    pub fn order_by(mut self, column: impl Into<String>, dir: SortDir) -> Self {
        self.order.push((column.into(), dir));
        self
    }

    /// Set LIMIT.
    pub fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    /// Set OFFSET.
    pub fn offset(mut self, n: u64) -> Self {
        self.offset = Some(n);
        self
    }
}

/// An INSERT query description.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertQuery {
    /// Table name
    pub table: String,
    /// Column names
    pub columns: Vec<String>,
    /// Values to insert
    pub values: Vec<Value>,
    /// Columns to return (RETURNING clause)
    pub returning: Vec<String>,
}

impl InsertQuery {
    /// Create a new INSERT query for a table.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            values: Vec::new(),
            returning: Vec::new(),
        }
    }

    /// Set the columns and values to insert.
    pub fn values(
        mut self,
        data: impl IntoIterator<Item = (impl Into<String>, impl Into<Value>)>,
    ) -> Self {
        let (cols, vals): (Vec<_>, Vec<_>) =
            data.into_iter().map(|(c, v)| (c.into(), v.into())).unzip();
        self.columns = cols;
        self.values = vals;
        self
    }

    /// Set RETURNING columns.
    pub fn returning(mut self, cols: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.returning = cols.into_iter().map(Into::into).collect();
        self
    }
}

/// A DELETE query description.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteQuery {
    /// Table name
    pub table: String,
    /// WHERE conditions
    pub filters: Vec<Expr>,
}

impl DeleteQuery {
    /// Create a new DELETE query for a table.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            filters: Vec::new(),
        }
    }

    /// Add a filter condition.
    pub fn filter(mut self, expr: Expr) -> Self {
        self.filters.push(expr);
        self
    }
}
