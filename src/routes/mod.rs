//! Route table and the global layers wrapped around it.

mod common;
mod product;
pub use common::common_routes;
pub use product::product_routes;

use crate::error::unhandled_response;
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, response::Response, Router};
use std::any::Any;
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

/// Largest accepted request body. A longer body fails extraction and gets the generic 500.
pub const BODY_LIMIT_BYTES: usize = 100 * 1024;

/// Full application: every route plus request tracing, the body limit, and the
/// error boundary that turns a panicking handler into a generic 500.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes())
        .merge(product_routes(state))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(
            ServiceBuilder::new()
                .layer(CatchPanicLayer::custom(handle_panic))
                .layer(TraceLayer::new_for_http()),
        )
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");
    tracing::error!(panic = %detail, "handler panicked");
    unhandled_response()
}
