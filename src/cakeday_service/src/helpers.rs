use std::{str::FromStr, time::Duration};

use cakeday_adapters::{
    config::settings::DatabaseSetting,
    persistence::{DashMapSessionStore, SqliteAccountStore},
};
use secrecy::ExposeSecret;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use tokio::task::JoinHandle;

const MIN_PURGE_INTERVAL: Duration = Duration::from_secs(1);

/// Open the configured SQLite database and bring its schema up to date
///
/// The database file is created when missing, and the `users` table is created
/// when it does not exist yet.
pub async fn configure_sqlite(settings: &DatabaseSetting) -> Result<SqliteAccountStore, sqlx::Error> {
    let pool = get_sqlite_pool(settings.url.expose_secret(), settings.max_connections).await?;

    let account_store = SqliteAccountStore::new(pool);
    account_store.migrate().await?;

    Ok(account_store)
}

/// Create a SQLite connection pool
///
/// # Arguments
/// * `url` - Database connection URL
/// * `max_connections` - Pool size; forced to 1 for in-memory databases
pub async fn get_sqlite_pool(url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

    // Every connection to `:memory:` opens a separate database.
    if url.contains(":memory:") {
        return SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await;
    }

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Periodically drop expired sessions so abandoned logins do not pile up.
///
/// A zero `every` is raised to one second.
pub fn spawn_session_purge(session_store: DashMapSessionStore, every: Duration) -> JoinHandle<()> {
    let every = every.max(MIN_PURGE_INTERVAL);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        loop {
            interval.tick().await;
            let purged = session_store.purge_expired();
            if purged > 0 {
                tracing::debug!(purged, "Purged expired sessions");
            }
        }
    })
}
