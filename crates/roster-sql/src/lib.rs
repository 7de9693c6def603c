//! Parameterized SQL descriptions.
//!
//! Queries are described as data (predicates with bound values, ordering,
//! pagination) and rendered to a SQL string with `$1, $2, …` placeholders.
//! User-supplied text only ever travels in the parameter vector, never in
//! the SQL text itself.
//!
//! # Example
//!
//! ```
//! use roster_sql::{Expr, SelectQuery, SortDir};
//!
//! let built = SelectQuery::new("users")
//!     .columns(["id", "name"])
//!     .filter(Expr::contains("name", "jo"))
//!     .filter(Expr::eq("active", true))
//!     .order_by("name", SortDir::Asc)
//!     .limit(20)
//!     .offset(0)
//!     .build();
//!
//! assert!(built.sql.starts_with("SELECT"));
//! assert_eq!(built.params.len(), 2);
//! ```

mod build;
mod expr;
mod stmt;
mod value;

pub use build::BuiltQuery;
pub use expr::Expr;
pub use stmt::{DeleteQuery, InsertQuery, SelectQuery, SortDir};
pub use value::Value;

/// Quote a SQL identifier (table or column name).
///
/// Always quotes to avoid issues with reserved keywords like `user`,
/// `order`, `group`. Doubles any embedded quotes.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Escape LIKE metacharacters so a pattern fragment matches literally.
///
/// The backslash is Postgres's default ESCAPE character.
pub fn escape_like(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len());
    for c in fragment.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_ident_doubles_quotes() {
        assert_eq!(quote_ident("users"), "\"users\"");
        assert_eq!(quote_ident("we\"ird"), "\"we\"\"ird\"");
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("jo"), "jo");
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
    }
}
