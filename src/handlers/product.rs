//! Product CRUD handlers: list, read, create, update, delete.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::model::{parse_leading_integer, ProductInput};
use crate::response;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::fmt::Display;

const LIST_FAILED: &str = "Error fetching products";
const READ_FAILED: &str = "Error fetching product";
const CREATE_FAILED: &str = "Error creating product";
const UPDATE_FAILED: &str = "Error updating product";
const DELETE_FAILED: &str = "Error deleting product";

fn not_found(id: impl Display) -> AppError {
    AppError::NotFound(format!("Product with id {} not found", id))
}

/// Path id, read the way `parseInt` would. An id with no leading digits is NaN and matches no row.
fn parse_id(id_str: &str) -> Result<i64, AppError> {
    parse_leading_integer(id_str).ok_or_else(|| not_found("NaN"))
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let products = state
        .store
        .find_all()
        .await
        .map_err(AppError::store(LIST_FAILED))?;
    Ok((
        StatusCode::OK,
        Json(response::list("Products retrieved successfully", Some(products))),
    ))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let product = state
        .store
        .find_by_id(id)
        .await
        .map_err(AppError::store(READ_FAILED))?
        .ok_or_else(|| not_found(id))?;
    Ok((
        StatusCode::OK,
        Json(response::item("Product retrieved successfully", Some(product))),
    ))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<ProductInput>,
) -> Result<impl IntoResponse, AppError> {
    let fields = input.into_new_fields()?;
    let id = state
        .store
        .create(&fields)
        .await
        .map_err(AppError::store(CREATE_FAILED))?;
    let product = state
        .store
        .find_by_id(id)
        .await
        .map_err(AppError::store(CREATE_FAILED))?;
    tracing::info!(id, name = %fields.name, "product created");
    Ok((
        StatusCode::CREATED,
        Json(response::item("Product created successfully", product)),
    ))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    JsonBody(input): JsonBody<ProductInput>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let existing = state
        .store
        .find_by_id(id)
        .await
        .map_err(AppError::store(UPDATE_FAILED))?
        .ok_or_else(|| not_found(id))?;
    let fields = input.merge(&existing)?;
    let updated = state
        .store
        .update(id, &fields)
        .await
        .map_err(AppError::store(UPDATE_FAILED))?;
    Ok((
        StatusCode::OK,
        Json(response::item("Product updated successfully", updated)),
    ))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let existing = state
        .store
        .find_by_id(id)
        .await
        .map_err(AppError::store(DELETE_FAILED))?
        .ok_or_else(|| not_found(id))?;
    state
        .store
        .delete(id)
        .await
        .map_err(AppError::store(DELETE_FAILED))?;
    tracing::info!(id, "product deleted");
    Ok((
        StatusCode::OK,
        Json(response::item("Product deleted successfully", Some(existing))),
    ))
}
