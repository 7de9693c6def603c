//! SQL rendering.
//!
//! Converts query descriptions to parameterized SQL strings for Postgres.

use crate::{DeleteQuery, Expr, InsertQuery, SelectQuery, SortDir, Value, escape_like};

/// Result of building a query: SQL string and parameter values.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltQuery {
    /// The SQL string with $1, $2, etc. placeholders
    pub sql: String,
    /// The parameter values in order
    pub params: Vec<Value>,
}

/// Builds SQL from query descriptions, tracking parameter indices.
struct SqlBuilder {
    sql: String,
    params: Vec<Value>,
}

impl SqlBuilder {
    fn new() -> Self {
        Self {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push(&mut self, s: &str) {
        self.sql.push_str(s);
    }

    fn push_param(&mut self, value: Value) {
        self.params.push(value);
        self.sql.push('$');
        self.sql.push_str(&self.params.len().to_string());
    }

    fn push_ident(&mut self, name: &str) {
        // Quote identifier to handle reserved words and special chars
        self.sql.push('"');
        for c in name.chars() {
            if c == '"' {
                self.sql.push('"');
            }
            self.sql.push(c);
        }
        self.sql.push('"');
    }

    fn build_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Eq(col, val) => self.build_cmp(col, "=", val),
            Expr::Ne(col, val) => self.build_cmp(col, "!=", val),
            Expr::Lt(col, val) => self.build_cmp(col, "<", val),
            Expr::Lte(col, val) => self.build_cmp(col, "<=", val),
            Expr::Gt(col, val) => self.build_cmp(col, ">", val),
            Expr::Gte(col, val) => self.build_cmp(col, ">=", val),
            Expr::Contains(col, fragment) => {
                // The fragment travels as a bound value; escaping makes LIKE
                // metacharacters match literally.
                self.push_ident(col);
                self.push(" LIKE '%' || ");
                self.push_param(Value::String(escape_like(fragment)));
                self.push(" || '%'");
            }
            Expr::IsNull(col) => {
                self.push_ident(col);
                self.push(" IS NULL");
            }
            Expr::IsNotNull(col) => {
                self.push_ident(col);
                self.push(" IS NOT NULL");
            }
            Expr::And(exprs) => {
                if exprs.is_empty() {
                    self.push("TRUE");
                } else {
                    self.push("(");
                    for (i, e) in exprs.iter().enumerate() {
                        if i > 0 {
                            self.push(" AND ");
                        }
                        self.build_expr(e);
                    }
                    self.push(")");
                }
            }
            Expr::Or(exprs) => {
                if exprs.is_empty() {
                    self.push("FALSE");
                } else {
                    self.push("(");
                    for (i, e) in exprs.iter().enumerate() {
                        if i > 0 {
                            self.push(" OR ");
                        }
                        self.build_expr(e);
                    }
                    self.push(")");
                }
            }
            Expr::Not(e) => {
                self.push("NOT (");
                self.build_expr(e);
                self.push(")");
            }
        }
    }

    fn build_cmp(&mut self, col: &str, op: &str, val: &Value) {
        self.push_ident(col);
        self.push(" ");
        self.push(op);
        self.push(" ");
        self.push_param(val.clone());
    }

    fn build_where(&mut self, filters: &[Expr]) {
        if filters.is_empty() {
            return;
        }
        self.push(" WHERE ");
        for (i, expr) in filters.iter().enumerate() {
            if i > 0 {
                self.push(" AND ");
            }
            self.build_expr(expr);
        }
    }

    fn finish(self) -> BuiltQuery {
        BuiltQuery {
            sql: self.sql,
            params: self.params,
        }
    }
}

impl SelectQuery {
    /// Build the SELECT query.
    pub fn build(&self) -> BuiltQuery {
        let mut b = SqlBuilder::new();

        b.push("SELECT ");
        if self.columns.is_empty() {
            b.push("*");
        } else {
            for (i, col) in self.columns.iter().enumerate() {
                if i > 0 {
                    b.push(", ");
                }
                b.push_ident(col);
            }
        }

        b.push(" FROM ");
        b.push_ident(&self.table);

        b.build_where(&self.filters);

        if !self.order.is_empty() {
            b.push(" ORDER BY ");
            for (i, (col, dir)) in self.order.iter().enumerate() {
                if i > 0 {
                    b.push(", ");
                }
                b.push_ident(col);
                match dir {
                    SortDir::Asc => b.push(" ASC"),
                    SortDir::Desc => b.push(" DESC"),
                }
            }
        }

        if let Some(limit) = self.limit {
            b.push(" LIMIT ");
            b.push(&limit.to_string());
        }

        if let Some(offset) = self.offset {
            b.push(" OFFSET ");
            b.push(&offset.to_string());
        }

        b.finish()
    }

    /// Build a COUNT(*) query (ignores columns, order, limit, offset).
    pub fn build_count(&self) -> BuiltQuery {
        let mut b = SqlBuilder::new();

        b.push("SELECT COUNT(*) FROM ");
        b.push_ident(&self.table);

        b.build_where(&self.filters);

        b.finish()
    }

    /// Build an EXISTS query (ignores columns, order, limit, offset).
    pub fn build_exists(&self) -> BuiltQuery {
        let mut b = SqlBuilder::new();

        b.push("SELECT EXISTS (SELECT 1 FROM ");
        b.push_ident(&self.table);

        b.build_where(&self.filters);

        b.push(")");

        b.finish()
    }
}

impl InsertQuery {
    /// Build the INSERT query.
    pub fn build(&self) -> BuiltQuery {
        let mut b = SqlBuilder::new();

        b.push("INSERT INTO ");
        b.push_ident(&self.table);

        if !self.columns.is_empty() {
            b.push(" (");
            for (i, col) in self.columns.iter().enumerate() {
                if i > 0 {
                    b.push(", ");
                }
                b.push_ident(col);
            }
            b.push(") VALUES (");
            for (i, val) in self.values.iter().enumerate() {
                if i > 0 {
                    b.push(", ");
                }
                b.push_param(val.clone());
            }
            b.push(")");
        } else {
            b.push(" DEFAULT VALUES");
        }

        if !self.returning.is_empty() {
            b.push(" RETURNING ");
            for (i, col) in self.returning.iter().enumerate() {
                if i > 0 {
                    b.push(", ");
                }
                b.push_ident(col);
            }
        }

        b.finish()
    }
}

impl DeleteQuery {
    /// Build the DELETE query.
    pub fn build(&self) -> BuiltQuery {
        let mut b = SqlBuilder::new();

        b.push("DELETE FROM ");
        b.push_ident(&self.table);

        b.build_where(&self.filters);

        b.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_simple() {
        let q = SelectQuery::new("users").build();
        assert_eq!(q.sql, r#"SELECT * FROM "users""#);
        assert!(q.params.is_empty());
    }

    #[test]
    fn test_select_with_columns() {
        let q = SelectQuery::new("users")
            .columns(["id", "name", "email"])
            .build();
        assert_eq!(q.sql, r#"SELECT "id", "name", "email" FROM "users""#);
    }

    #[test]
    fn test_select_with_filter() {
        let q = SelectQuery::new("users")
            .filter(Expr::eq("active", true))
            .build();
        assert_eq!(q.sql, r#"SELECT * FROM "users" WHERE "active" = $1"#);
        assert_eq!(q.params, vec![Value::Bool(true)]);
    }

    #[test]
    fn test_select_with_multiple_filters() {
        let q = SelectQuery::new("users")
            .filter(Expr::contains("name", "jo"))
            .filter(Expr::eq("active", true))
            .build();
        assert_eq!(
            q.sql,
            r#"SELECT * FROM "users" WHERE "name" LIKE '%' || $1 || '%' AND "active" = $2"#
        );
        assert_eq!(
            q.params,
            vec![Value::String("jo".into()), Value::Bool(true)]
        );
    }

    #[test]
    fn test_select_with_order_and_limit() {
        let q = SelectQuery::new("users")
            .order_by("created_date", SortDir::Desc)
            .limit(10)
            .offset(20)
            .build();
        assert_eq!(
            q.sql,
            r#"SELECT * FROM "users" ORDER BY "created_date" DESC LIMIT 10 OFFSET 20"#
        );
    }

    #[test]
    fn test_contains_escapes_like_metacharacters() {
        let q = SelectQuery::new("users")
            .filter(Expr::contains("name", "50%_off"))
            .build();
        // The raw fragment never appears in the SQL text
        assert!(!q.sql.contains("50%_off"));
        assert_eq!(q.params, vec![Value::String("50\\%\\_off".into())]);
    }

    #[test]
    fn test_contains_hostile_fragment_stays_bound() {
        let q = SelectQuery::new("users")
            .filter(Expr::contains("name", "'; DROP TABLE users; --"))
            .build();
        assert!(!q.sql.contains("DROP TABLE"));
        assert_eq!(q.params.len(), 1);
    }

    #[test]
    fn test_comparison_operators() {
        let q = SelectQuery::new("users")
            .filter(Expr::gte("id", 100i64))
            .filter(Expr::lt("id", 200i64))
            .filter(Expr::ne("email", ""))
            .build();
        assert_eq!(
            q.sql,
            r#"SELECT * FROM "users" WHERE "id" >= $1 AND "id" < $2 AND "email" != $3"#
        );
        assert_eq!(
            q.params,
            vec![Value::I64(100), Value::I64(200), Value::String(String::new())]
        );
    }

    #[test]
    fn test_count() {
        let q = SelectQuery::new("users")
            .filter(Expr::eq("active", true))
            .order_by("name", SortDir::Asc)
            .limit(10)
            .build_count();
        assert_eq!(q.sql, r#"SELECT COUNT(*) FROM "users" WHERE "active" = $1"#);
    }

    #[test]
    fn test_exists() {
        let q = SelectQuery::new("users")
            .filter(Expr::eq("email", "alice@example.com"))
            .build_exists();
        assert_eq!(
            q.sql,
            r#"SELECT EXISTS (SELECT 1 FROM "users" WHERE "email" = $1)"#
        );
        assert_eq!(q.params, vec![Value::String("alice@example.com".into())]);
    }

    #[test]
    fn test_insert() {
        let q = InsertQuery::new("users")
            .values([("name", "Alice"), ("email", "alice@example.com")])
            .returning(["id", "name", "email"])
            .build();
        assert_eq!(
            q.sql,
            r#"INSERT INTO "users" ("name", "email") VALUES ($1, $2) RETURNING "id", "name", "email""#
        );
        assert_eq!(q.params.len(), 2);
    }

    #[test]
    fn test_delete() {
        let q = DeleteQuery::new("users")
            .filter(Expr::eq("id", 42i64))
            .build();
        assert_eq!(q.sql, r#"DELETE FROM "users" WHERE "id" = $1"#);
        assert_eq!(q.params, vec![Value::I64(42)]);
    }

    #[test]
    fn test_or_expression() {
        let q = SelectQuery::new("users")
            .filter(Expr::or([
                Expr::eq("email", "a@example.com"),
                Expr::eq("email", "b@example.com"),
            ]))
            .build();
        assert_eq!(
            q.sql,
            r#"SELECT * FROM "users" WHERE ("email" = $1 OR "email" = $2)"#
        );
    }

    #[test]
    fn test_not_expression() {
        let q = SelectQuery::new("users")
            .filter(Expr::not(Expr::is_null("created_date")))
            .build();
        assert_eq!(
            q.sql,
            r#"SELECT * FROM "users" WHERE NOT ("created_date" IS NULL)"#
        );
    }

    #[test]
    fn test_empty_and_or() {
        let q = SelectQuery::new("users").filter(Expr::and([])).build();
        assert_eq!(q.sql, r#"SELECT * FROM "users" WHERE TRUE"#);

        let q = SelectQuery::new("users").filter(Expr::or([])).build();
        assert_eq!(q.sql, r#"SELECT * FROM "users" WHERE FALSE"#);
    }
}
