//! MySQL-backed product store.

use crate::error::StoreError;
use crate::model::{Product, ProductFields};
use crate::service::ProductStore;
use async_trait::async_trait;
use sqlx::MySqlPool;
use std::time::Instant;

const SELECT_ALL: &str =
    "SELECT id, name, price, stock, created_at, updated_at FROM products ORDER BY id";
const SELECT_BY_ID: &str =
    "SELECT id, name, price, stock, created_at, updated_at FROM products WHERE id = ?";
const INSERT: &str = "INSERT INTO products (name, price, stock) VALUES (?, ?, ?)";
const UPDATE: &str = "UPDATE products SET name = ?, price = ?, stock = ?, updated_at = CURRENT_TIMESTAMP(6) WHERE id = ?";
const DELETE: &str = "DELETE FROM products WHERE id = ?";
const COUNT: &str = "SELECT COUNT(*) FROM products";

/// Logged prefix length of each statement.
const SQL_LOG_CHARS: usize = 50;

#[derive(Clone, Debug)]
pub struct MySqlProductStore {
    pool: MySqlPool,
    log_queries: bool,
}

impl MySqlProductStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            pool,
            log_queries: true,
        }
    }

    /// Toggle per-statement timing logs (off in test mode).
    pub fn with_query_logging(mut self, enabled: bool) -> Self {
        self.log_queries = enabled;
        self
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    fn log_query(&self, sql: &str, started: Instant, rows: u64) {
        if !self.log_queries {
            return;
        }
        let prefix: String = sql.chars().take(SQL_LOG_CHARS).collect();
        tracing::debug!(
            sql = %prefix,
            duration_ms = started.elapsed().as_millis() as u64,
            rows,
            "executed query"
        );
    }
}

#[async_trait]
impl ProductStore for MySqlProductStore {
    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        let started = Instant::now();
        let rows = sqlx::query_as::<_, Product>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;
        self.log_query(SELECT_ALL, started, rows.len() as u64);
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, StoreError> {
        let started = Instant::now();
        let row = sqlx::query_as::<_, Product>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        self.log_query(SELECT_BY_ID, started, u64::from(row.is_some()));
        Ok(row)
    }

    async fn create(&self, fields: &ProductFields) -> Result<i64, StoreError> {
        let started = Instant::now();
        let result = sqlx::query(INSERT)
            .bind(&fields.name)
            .bind(fields.price)
            .bind(fields.stock)
            .execute(&self.pool)
            .await?;
        self.log_query(INSERT, started, result.rows_affected());
        i64::try_from(result.last_insert_id())
            .map_err(|_| StoreError::Unavailable("insert id out of range".into()))
    }

    async fn update(&self, id: i64, fields: &ProductFields) -> Result<Option<Product>, StoreError> {
        let started = Instant::now();
        let result = sqlx::query(UPDATE)
            .bind(&fields.name)
            .bind(fields.price)
            .bind(fields.stock)
            .bind(id)
            .execute(&self.pool)
            .await?;
        self.log_query(UPDATE, started, result.rows_affected());
        self.find_by_id(id).await
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let started = Instant::now();
        let result = sqlx::query(DELETE).bind(id).execute(&self.pool).await?;
        self.log_query(DELETE, started, result.rows_affected());
        Ok(())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let started = Instant::now();
        let count: i64 = sqlx::query_scalar(COUNT).fetch_one(&self.pool).await?;
        self.log_query(COUNT, started, 1);
        Ok(count)
    }
}
