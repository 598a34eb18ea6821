//! Data access for products: the store trait and its MySQL and in-memory backends.

mod memory;
mod mysql;
mod product;
pub use memory::MemoryProductStore;
pub use mysql::MySqlProductStore;
pub use product::ProductStore;
