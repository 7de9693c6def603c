//! User records and row mapping.

use chrono::{DateTime, Utc};

use crate::text;
use crate::{Error, Result};

/// The user table name.
pub const TABLE: &str = "users";

/// Column names for the user table.
pub mod columns {
    pub const ID: &str = "id";
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const ACTIVE: &str = "active";
    pub const CREATED_DATE: &str = "created_date";
}

/// All columns selected when mapping full records, in declaration order.
pub const SELECT_COLUMNS: [&str; 5] = [
    columns::ID,
    columns::NAME,
    columns::EMAIL,
    columns::ACTIVE,
    columns::CREATED_DATE,
];

/// A user row, freshly mapped from the store.
///
/// `id` is assigned by the store and immutable once assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    /// Map a Postgres row to a record by column name.
    pub fn from_row(row: &tokio_postgres::Row) -> Result<Self> {
        Ok(Self {
            id: row.try_get(columns::ID)?,
            name: row.try_get(columns::NAME)?,
            email: row.try_get(columns::EMAIL)?,
            active: row.try_get(columns::ACTIVE)?,
            created_at: row.try_get(columns::CREATED_DATE)?,
        })
    }
}

/// Input for creating a user.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub active: bool,
}

impl NewUser {
    /// Build a new user from name parts, normalizing the email.
    ///
    /// Fails with [`Error::InvalidArgument`] if the resulting name or the
    /// email is empty.
    pub fn new(first_name: &str, last_name: &str, email: &str, active: bool) -> Result<Self> {
        let name = text::full_name(first_name, last_name);
        let email = text::normalize_email(email);
        if name.is_empty() {
            return Err(Error::InvalidArgument("name must not be empty".into()));
        }
        if email.is_empty() {
            return Err(Error::InvalidArgument("email must not be empty".into()));
        }
        Ok(Self {
            name,
            email,
            active,
        })
    }
}
