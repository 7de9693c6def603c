//! Connection settings.
//!
//! Settings come from the environment (with `.env` support), never from
//! literals compiled into the code. `DATABASE_URL` wins; otherwise the
//! discrete `PG*` variables are composed into a connection string.

use tokio_postgres::{Client, NoTls};

use crate::{Error, Result};

/// Where and how to connect to Postgres.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectInfo {
    conn_str: String,
}

impl ConnectInfo {
    /// Use a ready-made connection string or URL.
    pub fn new(conn_str: impl Into<String>) -> Self {
        Self {
            conn_str: conn_str.into(),
        }
    }

    /// Compose a key/value connection string from discrete parts.
    pub fn from_parts(
        host: &str,
        port: u16,
        user: &str,
        password: Option<&str>,
        dbname: &str,
    ) -> Self {
        let mut conn_str = format!("host={host} port={port} user={user} dbname={dbname}");
        if let Some(password) = password {
            conn_str.push_str(" password=");
            conn_str.push_str(password);
        }
        Self { conn_str }
    }

    /// Read connection settings from the environment.
    ///
    /// Loads `.env` if present, then uses `DATABASE_URL`, falling back to
    /// `PGHOST`/`PGPORT`/`PGUSER`/`PGPASSWORD`/`PGDATABASE`. Fails with
    /// [`Error::Config`] if neither is set.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();

        if let Ok(url) = std::env::var("DATABASE_URL") {
            if !url.is_empty() {
                return Ok(Self::new(url));
            }
        }

        let Ok(host) = std::env::var("PGHOST") else {
            return Err(Error::Config(
                "neither DATABASE_URL nor PGHOST is set".into(),
            ));
        };
        let port = match std::env::var("PGPORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| Error::Config(format!("PGPORT is not a port number: {raw}")))?,
            Err(_) => 5432,
        };
        let user = std::env::var("PGUSER").unwrap_or_else(|_| "postgres".into());
        let password = std::env::var("PGPASSWORD").ok();
        let dbname = std::env::var("PGDATABASE").unwrap_or_else(|_| user.clone());

        Ok(Self::from_parts(
            &host,
            port,
            &user,
            password.as_deref(),
            &dbname,
        ))
    }

    /// The connection string passed to tokio_postgres.
    pub fn as_str(&self) -> &str {
        &self.conn_str
    }

    /// Connect and drive the connection on a background task.
    pub async fn connect(&self) -> Result<Client> {
        let (client, connection) = tokio_postgres::connect(&self.conn_str, NoTls).await?;
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::error!("connection error: {e}");
            }
        });
        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts() {
        let info = ConnectInfo::from_parts("localhost", 5432, "app", Some("secret"), "mydb");
        assert_eq!(
            info.as_str(),
            "host=localhost port=5432 user=app dbname=mydb password=secret"
        );
    }

    #[test]
    fn test_from_parts_without_password() {
        let info = ConnectInfo::from_parts("db.internal", 6432, "app", None, "mydb");
        assert_eq!(info.as_str(), "host=db.internal port=6432 user=app dbname=mydb");
    }
}
