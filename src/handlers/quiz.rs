// src/handlers/quiz.rs

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};

use crate::{
    error::AppError,
    models::{quiz::QuizRequest, response::Success},
    services::quiz,
    store::SharedStore,
};

/// Serves the next quiz question the player has not seen yet.
///
/// Returns `question: {}` once the candidate set is used up. Failures are 422.
pub async fn next_question(
    State(store): State<SharedStore>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload.map_err(|e| AppError::Unprocessable(e.body_text()))?;

    let response = quiz::next_question(store.as_ref(), req)
        .await
        .map_err(|e| AppError::Unprocessable(format!("Failed to pick quiz question: {}", e)))?;

    Ok(Success::new(response))
}
