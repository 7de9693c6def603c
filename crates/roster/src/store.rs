//! Query execution against Postgres.
//!
//! The store is the only module that talks to the database. It takes pure
//! query descriptions, binds their parameters, and maps rows back to
//! records. Connection, statement, and row resources are scoped by
//! tokio_postgres and released on every exit path.

use roster_sql::{BuiltQuery, DeleteQuery, Expr, InsertQuery, SelectQuery, Value};
use tokio_postgres::Client;
use tracing::debug;

use crate::bind::{SqlParam, borrow_params};
use crate::record::{SELECT_COLUMNS, TABLE, columns};
use crate::{ListingParams, NewUser, Result, UserRecord, text};

/// A user store over a Postgres client.
pub struct UserStore<'a> {
    client: &'a Client,
}

impl<'a> UserStore<'a> {
    /// Create a store over an existing client.
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List users matching the given parameters, ordered and paginated.
    pub async fn list(&self, params: &ListingParams) -> Result<Vec<UserRecord>> {
        let built = params.build()?.into_select().build();
        let rows = self.query(&built).await?;
        debug!(rows = rows.len(), "listed users");
        rows.iter().map(UserRecord::from_row).collect()
    }

    /// Count users matching the given parameters (ignores pagination).
    pub async fn count(&self, params: &ListingParams) -> Result<u64> {
        let built = params.build()?.into_select().build_count();
        let row = self.query_one(&built).await?;
        let count: i64 = row.try_get(0)?;
        Ok(count as u64)
    }

    /// Insert a user and return the stored record, id and timestamp
    /// assigned by the database.
    pub async fn create(&self, user: &NewUser) -> Result<UserRecord> {
        let built = InsertQuery::new(TABLE)
            .values([
                (columns::NAME, Value::String(user.name.clone())),
                (columns::EMAIL, Value::String(user.email.clone())),
                (columns::ACTIVE, Value::Bool(user.active)),
            ])
            .returning(SELECT_COLUMNS)
            .build();
        let row = self.query_one(&built).await?;
        let record = UserRecord::from_row(&row)?;
        debug!(id = record.id, "created user");
        Ok(record)
    }

    /// Delete a user by id. Returns whether a row was deleted.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let built = DeleteQuery::new(TABLE)
            .filter(Expr::eq(columns::ID, id))
            .build();
        let affected = self.execute(&built).await?;
        debug!(id, deleted = affected > 0, "deleted user");
        Ok(affected > 0)
    }

    /// Check whether a user with the given email exists.
    ///
    /// The email is normalized the same way [`NewUser`] normalizes it on
    /// insert, so lookups match regardless of caller casing.
    pub async fn exists_by_email(&self, email: &str) -> Result<bool> {
        let built = SelectQuery::new(TABLE)
            .filter(Expr::eq(columns::EMAIL, text::normalize_email(email)))
            .build_exists();
        let row = self.query_one(&built).await?;
        Ok(row.try_get(0)?)
    }

    async fn query(&self, built: &BuiltQuery) -> Result<Vec<tokio_postgres::Row>> {
        debug!(sql = %built.sql, params = built.params.len(), "executing query");
        let params: Vec<SqlParam> = built.params.iter().map(SqlParam).collect();
        Ok(self.client.query(&built.sql, &borrow_params(&params)).await?)
    }

    async fn query_one(&self, built: &BuiltQuery) -> Result<tokio_postgres::Row> {
        debug!(sql = %built.sql, params = built.params.len(), "executing query");
        let params: Vec<SqlParam> = built.params.iter().map(SqlParam).collect();
        Ok(self
            .client
            .query_one(&built.sql, &borrow_params(&params))
            .await?)
    }

    async fn execute(&self, built: &BuiltQuery) -> Result<u64> {
        debug!(sql = %built.sql, params = built.params.len(), "executing statement");
        let params: Vec<SqlParam> = built.params.iter().map(SqlParam).collect();
        Ok(self
            .client
            .execute(&built.sql, &borrow_params(&params))
            .await?)
    }
}
