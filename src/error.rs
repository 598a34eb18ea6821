//! Typed errors and HTTP mapping.

use crate::response;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use thiserror::Error;

/// Body of every unexpected failure that reaches the error boundary.
pub const UNHANDLED_MESSAGE: &str = "Something went wrong!";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {name}: '{value}'")]
    InvalidValue { name: &'static str, value: String },
}

/// Failure of the data-access layer. Controllers see it as a generic failure.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{message}: {source}")]
    Store {
        message: &'static str,
        #[source]
        source: StoreError,
    },
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("unhandled: {0}")]
    Unhandled(String),
}

impl AppError {
    /// Adapter for `map_err`: tags a store failure with the message the client sees.
    pub fn store(message: &'static str) -> impl FnOnce(StoreError) -> AppError {
        move |source| AppError::Store { message, source }
    }
}

/// 500 response produced by the error boundary.
pub fn unhandled_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(response::error(UNHANDLED_MESSAGE, Value::Null)),
    )
        .into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(message) => {
                (StatusCode::BAD_REQUEST, Json(response::basic(message, Value::Null))).into_response()
            }
            AppError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(response::item::<Value>(message, None))).into_response()
            }
            AppError::Store { message, source } => {
                tracing::error!(error = %source, "{}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(response::error(message, Value::Null)),
                )
                    .into_response()
            }
            other => {
                tracing::error!(error = %other, "unhandled error");
                unhandled_response()
            }
        }
    }
}
