//! Product API: CRUD over a MySQL-backed product catalog, with `{ message, data }` envelopes.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod seed;
pub mod service;
pub mod state;
pub mod store;

pub use config::{AppConfig, DatabaseConfig, RunMode};
pub use error::{AppError, ConfigError, StoreError};
pub use migration::apply_migrations;
pub use model::{Product, ProductFields, ProductInput};
pub use response::Envelope;
pub use routes::{app, common_routes, product_routes};
pub use seed::seed_demo_products;
pub use service::{MemoryProductStore, MySqlProductStore, ProductStore};
pub use state::AppState;
pub use store::{connect_pool, ensure_database_exists};
