#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use product_api::{
    app, AppState, MemoryProductStore, Product, ProductFields, ProductStore, StoreError,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Router over a fresh in-memory store, plus a handle to that store.
pub fn memory_app() -> (Router, Arc<MemoryProductStore>) {
    let store = Arc::new(MemoryProductStore::new());
    let state = AppState {
        store: store.clone(),
    };
    (app(state), store)
}

pub fn app_with<S: ProductStore + 'static>(store: S) -> Router {
    app(AppState::new(store))
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub fn product(json: &Value) -> Product {
    serde_json::from_value(json.clone()).unwrap()
}

/// Every call fails as if the database were unreachable.
pub struct UnavailableStore;

fn unavailable<T>() -> Result<T, StoreError> {
    Err(StoreError::Unavailable("connection refused".into()))
}

#[async_trait]
impl ProductStore for UnavailableStore {
    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        unavailable()
    }
    async fn find_by_id(&self, _id: i64) -> Result<Option<Product>, StoreError> {
        unavailable()
    }
    async fn create(&self, _fields: &ProductFields) -> Result<i64, StoreError> {
        unavailable()
    }
    async fn update(&self, _id: i64, _fields: &ProductFields) -> Result<Option<Product>, StoreError> {
        unavailable()
    }
    async fn delete(&self, _id: i64) -> Result<(), StoreError> {
        unavailable()
    }
    async fn count(&self) -> Result<i64, StoreError> {
        unavailable()
    }
}

/// Panics on every call.
pub struct PanickingStore;

#[async_trait]
impl ProductStore for PanickingStore {
    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        panic!("store exploded")
    }
    async fn find_by_id(&self, _id: i64) -> Result<Option<Product>, StoreError> {
        panic!("store exploded")
    }
    async fn create(&self, _fields: &ProductFields) -> Result<i64, StoreError> {
        panic!("store exploded")
    }
    async fn update(&self, _id: i64, _fields: &ProductFields) -> Result<Option<Product>, StoreError> {
        panic!("store exploded")
    }
    async fn delete(&self, _id: i64) -> Result<(), StoreError> {
        panic!("store exploded")
    }
    async fn count(&self) -> Result<i64, StoreError> {
        panic!("store exploded")
    }
}
