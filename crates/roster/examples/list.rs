//! List users from the configured database.
//!
//! Reads connection settings from the environment (`DATABASE_URL` or
//! `PG*` variables, `.env` supported):
//!
//! ```sh
//! DATABASE_URL=postgres://localhost/mydb cargo run --example list
//! ```

use roster::{ConnectInfo, ListingParams, SortField, UserStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = ConnectInfo::from_env()?.connect().await?;
    let store = UserStore::new(&client);

    let params = ListingParams::new(20, 0).sort_by(SortField::Name);
    for user in store.list(&params).await? {
        let state = if user.active { "active" } else { "inactive" };
        println!("{:>6}  {}  <{}>  {}", user.id, user.name, user.email, state);
    }

    Ok(())
}
