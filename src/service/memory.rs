//! In-process product store. Behaves like the MySQL table: ids are never reused
//! and rows come back in id order.

use crate::error::StoreError;
use crate::model::{Product, ProductFields};
use crate::service::ProductStore;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct MemoryProductStore {
    state: RwLock<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    rows: BTreeMap<i64, Product>,
    last_id: i64,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// `now`, or one microsecond past `previous` if the clock has not moved on.
fn next_timestamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.state.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, StoreError> {
        Ok(self.state.read().await.rows.get(&id).cloned())
    }

    async fn create(&self, fields: &ProductFields) -> Result<i64, StoreError> {
        let mut state = self.state.write().await;
        state.last_id += 1;
        let id = state.last_id;
        let now = Utc::now();
        state.rows.insert(
            id,
            Product {
                id,
                name: fields.name.clone(),
                price: fields.price,
                stock: fields.stock,
                created_at: now,
                updated_at: now,
            },
        );
        Ok(id)
    }

    async fn update(&self, id: i64, fields: &ProductFields) -> Result<Option<Product>, StoreError> {
        let mut state = self.state.write().await;
        let Some(row) = state.rows.get_mut(&id) else {
            return Ok(None);
        };
        row.name = fields.name.clone();
        row.price = fields.price;
        row.stock = fields.stock;
        row.updated_at = next_timestamp(row.updated_at);
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        self.state.write().await.rows.remove(&id);
        Ok(())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        Ok(self.state.read().await.rows.len() as i64)
    }
}
