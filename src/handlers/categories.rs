// src/handlers/categories.rs

use axum::{
    extract::{Path, State, rejection::PathRejection},
    response::IntoResponse,
};

use crate::{
    error::AppError,
    models::response::Success,
    services::{ServiceError, questions},
    store::SharedStore,
};

/// Lists every category as an `{id: type}` map.
///
/// Any failure here is a 500.
pub async fn list_categories(State(store): State<SharedStore>) -> Result<impl IntoResponse, AppError> {
    let categories = questions::list_categories(store.as_ref())
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    Ok(Success::new(categories))
}

/// Lists the questions filed under a category id.
///
/// An empty result and a store fault are both reported as 400.
pub async fn questions_by_category(
    State(store): State<SharedStore>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    // A non-integer id does not name a route
    let Path(category_id) = path.map_err(|e| AppError::NotFound(e.body_text()))?;

    let list = questions::questions_by_category(store.as_ref(), category_id)
        .await
        .map_err(|e| match e {
            ServiceError::Store(e) => AppError::BadRequest(format!(
                "Failed to list category {}: {}",
                category_id, e
            )),
            other => AppError::BadRequest(other.to_string()),
        })?;

    Ok(Success::new(list))
}
