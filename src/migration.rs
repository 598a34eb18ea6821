//! Versioned DDL for the products table. Applied names are recorded in `_migrations`.

use crate::error::AppError;
use sqlx::MySqlPool;
use std::collections::HashSet;

/// Migrations in apply order. Names are permanent once released.
pub const MIGRATIONS: &[(&str, &str)] = &[(
    "20250219000000-create-products",
    r#"
    CREATE TABLE IF NOT EXISTS products (
        id BIGINT NOT NULL AUTO_INCREMENT,
        name VARCHAR(255) NOT NULL,
        price BIGINT NOT NULL,
        stock BIGINT NOT NULL,
        created_at TIMESTAMP(6) NOT NULL DEFAULT CURRENT_TIMESTAMP(6),
        updated_at TIMESTAMP(6) NOT NULL DEFAULT CURRENT_TIMESTAMP(6),
        PRIMARY KEY (id)
    )
    "#,
)];

const BOOKKEEPING_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS _migrations (
        name VARCHAR(255) NOT NULL,
        applied_at TIMESTAMP(6) NOT NULL DEFAULT CURRENT_TIMESTAMP(6),
        PRIMARY KEY (name)
    )
"#;

/// Apply every migration not yet recorded. Returns the names applied by this call.
pub async fn apply_migrations(pool: &MySqlPool) -> Result<Vec<&'static str>, AppError> {
    sqlx::query(BOOKKEEPING_DDL).execute(pool).await?;

    let applied: HashSet<String> = sqlx::query_scalar::<_, String>("SELECT name FROM _migrations")
        .fetch_all(pool)
        .await?
        .into_iter()
        .collect();

    let mut newly_applied = Vec::new();
    for (name, sql) in pending(MIGRATIONS, &applied) {
        sqlx::query(sql).execute(pool).await?;
        sqlx::query("INSERT INTO _migrations (name) VALUES (?)")
            .bind(name)
            .execute(pool)
            .await?;
        tracing::info!(migration = name, "applied migration");
        newly_applied.push(name);
    }
    Ok(newly_applied)
}

fn pending<'a>(
    all: &'a [(&'static str, &'static str)],
    applied: &'a HashSet<String>,
) -> impl Iterator<Item = (&'static str, &'static str)> + 'a {
    all.iter()
        .copied()
        .filter(move |(name, _)| !applied.contains(*name))
}
