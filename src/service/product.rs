use crate::error::StoreError;
use crate::model::{Product, ProductFields};
use async_trait::async_trait;

/// Single-statement operations over the products table.
///
/// No operation spans a transaction; a caller that reads then writes may race
/// with another request on the same id.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// All products, ascending by id.
    async fn find_all(&self) -> Result<Vec<Product>, StoreError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, StoreError>;

    /// Insert and return the new id.
    async fn create(&self, fields: &ProductFields) -> Result<i64, StoreError>;

    /// Overwrite all writable columns, refresh `updated_at`, and return the re-read row.
    async fn update(&self, id: i64, fields: &ProductFields) -> Result<Option<Product>, StoreError>;

    /// Delete by id. Deleting a missing id is not an error.
    async fn delete(&self, id: i64) -> Result<(), StoreError>;

    async fn count(&self) -> Result<i64, StoreError>;
}
