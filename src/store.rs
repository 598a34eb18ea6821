//! Database bootstrap: create the database if missing and open the shared pool.

use crate::config::DatabaseConfig;
use crate::error::AppError;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use sqlx::{ConnectOptions, Connection};
use std::time::Duration;

/// How long a request waits for a pooled connection before failing.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// Connect to the server without selecting a database and create `config.name` if it does not exist.
pub async fn ensure_database_exists(config: &DatabaseConfig) -> Result<(), AppError> {
    if config.name.is_empty() {
        return Ok(());
    }
    let mut conn = config.server_options().connect().await?;
    sqlx::query(&format!(
        "CREATE DATABASE IF NOT EXISTS {}",
        quote_ident(&config.name)
    ))
    .execute(&mut conn)
    .await?;
    conn.close().await?;
    tracing::info!(database = %config.name, "database ready");
    Ok(())
}

/// Bounded pool; requests beyond `max_connections` queue for a free connection.
pub async fn connect_pool(config: &DatabaseConfig) -> Result<MySqlPool, AppError> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_with(config.connect_options())
        .await?;
    Ok(pool)
}

fn quote_ident(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}
