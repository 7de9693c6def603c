//! User listing and storage for Postgres.
//!
//! This crate separates query *construction* from query *execution*:
//!
//! - [`ListingParams::build`] deterministically translates listing inputs
//!   (text filter, active flag, sort hint, pagination) into a
//!   [`QueryDescription`], a pure value with no injection surface. All
//!   user-supplied text travels as bound parameters.
//! - [`UserStore`] executes descriptions against a
//!   [`tokio_postgres::Client`] and maps rows to [`UserRecord`] values.
//!
//! Sort hints are a closed enumeration ([`SortField`]); an unrecognized
//! hint falls back to ordering by `id` ascending instead of failing, so a
//! listing endpoint stays available even with malformed optional inputs.
//!
//! # Example
//!
//! ```no_run
//! # async fn run() -> roster::Result<()> {
//! use roster::{ConnectInfo, ListingParams, SortField, UserStore};
//!
//! let client = ConnectInfo::from_env()?.connect().await?;
//! let store = UserStore::new(&client);
//!
//! let params = ListingParams::new(20, 0)
//!     .filter("jo")
//!     .sort_by(SortField::Name);
//! let users = store.list(&params).await?;
//! # Ok(())
//! # }
//! ```

mod bind;
mod config;
mod error;
mod listing;
mod record;
mod store;
pub mod text;

pub use bind::SqlParam;
pub use config::ConnectInfo;
pub use error::Error;
pub use listing::{ListingParams, QueryDescription, SortField};
pub use record::{NewUser, UserRecord, columns};
pub use store::UserStore;

// Re-export the description layer for callers that compose their own queries.
pub use roster_sql::{Expr, SortDir, Value};

/// Result type for roster operations.
pub type Result<T> = std::result::Result<T, Error>;
