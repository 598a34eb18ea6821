//! Shared application state for all routes.

use crate::service::ProductStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProductStore>,
}

impl AppState {
    pub fn new<S>(store: S) -> Self
    where
        S: ProductStore + 'static,
    {
        Self {
            store: Arc::new(store),
        }
    }
}
