//! Snapshot tests for SQL rendering.

use roster_sql::*;

#[test]
fn test_listing_select() {
    let q = SelectQuery::new("users")
        .columns(["id", "name", "email", "active", "created_date"])
        .filter(Expr::contains("name", "jo"))
        .filter(Expr::eq("active", true))
        .order_by("name", SortDir::Asc)
        .limit(20)
        .offset(0);

    let result = q.build();
    insta::assert_snapshot!(
        result.sql,
        @r#"SELECT "id", "name", "email", "active", "created_date" FROM "users" WHERE "name" LIKE '%' || $1 || '%' AND "active" = $2 ORDER BY "name" ASC LIMIT 20 OFFSET 0"#
    );
    assert_eq!(
        result.params,
        vec![Value::String("jo".into()), Value::Bool(true)]
    );
}

#[test]
fn test_select_descending_with_composed_filters() {
    let q = SelectQuery::new("users")
        .filter(Expr::and([
            Expr::eq("active", true),
            Expr::not(Expr::is_null("created_date")),
        ]))
        .order_by("created_date", SortDir::Desc)
        .limit(5)
        .offset(10);

    let result = q.build();
    insta::assert_snapshot!(
        result.sql,
        @r#"SELECT * FROM "users" WHERE ("active" = $1 AND NOT ("created_date" IS NULL)) ORDER BY "created_date" DESC LIMIT 5 OFFSET 10"#
    );
}

#[test]
fn test_insert_returning() {
    let q = InsertQuery::new("users")
        .values([
            ("name", Value::String("Alice Smith".into())),
            ("email", Value::String("alice@example.com".into())),
            ("active", Value::Bool(true)),
        ])
        .returning(["id", "name", "email", "active", "created_date"]);

    let result = q.build();
    insta::assert_snapshot!(
        result.sql,
        @r#"INSERT INTO "users" ("name", "email", "active") VALUES ($1, $2, $3) RETURNING "id", "name", "email", "active", "created_date""#
    );
}

#[test]
fn test_delete_by_id() {
    let q = DeleteQuery::new("users").filter(Expr::eq("id", 7i64));

    let result = q.build();
    insta::assert_snapshot!(result.sql, @r#"DELETE FROM "users" WHERE "id" = $1"#);
    assert_eq!(result.params, vec![Value::I64(7)]);
}

#[test]
fn test_exists_by_email() {
    let q = SelectQuery::new("users").filter(Expr::eq("email", "alice@example.com"));

    let result = q.build_exists();
    insta::assert_snapshot!(
        result.sql,
        @r#"SELECT EXISTS (SELECT 1 FROM "users" WHERE "email" = $1)"#
    );
}
