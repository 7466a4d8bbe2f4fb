// src/handlers/questions.rs

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    response::IntoResponse,
};
use serde::Deserialize;

use crate::{
    config::Config,
    error::AppError,
    models::{
        question::CreateQuestionRequest,
        response::{Created, Deleted, Success},
    },
    services::{ServiceError, questions},
    store::SharedStore,
};

/// Query parameters for listing questions.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// 1-indexed. Missing or non-numeric means the first page.
    pub page: Option<String>,
}

impl ListParams {
    fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(1)
    }
}

/// Body of a search request.
#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
}

/// Lists one page of questions together with every category.
///
/// An empty page is a 404; so is any other failure on this endpoint.
pub async fn list_questions(
    State(store): State<SharedStore>,
    State(config): State<Config>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let params = params.map(|Query(p)| p).unwrap_or_default();

    let page = questions::list_questions(store.as_ref(), params.page(), config.questions_per_page)
        .await
        .map_err(|e| match e {
            ServiceError::Store(e) => AppError::NotFound(format!("Failed to list questions: {}", e)),
            other => AppError::NotFound(other.to_string()),
        })?;

    Ok(Success::new(page))
}

/// Deletes a question by ID.
pub async fn delete_question(
    State(store): State<SharedStore>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path.map_err(|e| AppError::NotFound(e.body_text()))?;

    let deleted = questions::delete_question(store.as_ref(), id)
        .await
        .map_err(|e| match e {
            ServiceError::NotFound(msg) => AppError::NotFound(msg),
            other => {
                AppError::Unprocessable(format!("Failed to delete question {}: {}", id, other))
            }
        })?;

    Ok(Success::new(Deleted {
        message: "Question deleted successfully.",
        deleted,
    }))
}

/// Creates a new question. Validation failures and store faults are both 400.
pub async fn create_question(
    State(store): State<SharedStore>,
    payload: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let question = questions::create_question(store.as_ref(), payload)
        .await
        .map_err(|e| match e {
            ServiceError::Store(e) => {
                AppError::BadRequest(format!("Failed to create question: {}", e))
            }
            other => AppError::BadRequest(other.to_string()),
        })?;

    Ok(Success::new(Created {
        message: "Question created successfully.",
        created: question.id,
    }))
}

/// Finds questions whose text contains `searchTerm`, ignoring case.
///
/// No match, a missing term and a store fault are all 422.
pub async fn search_questions(
    State(store): State<SharedStore>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::Unprocessable(e.body_text()))?;

    let found = questions::search_questions(store.as_ref(), payload.search_term)
        .await
        .map_err(|e| match e {
            ServiceError::Store(e) => {
                AppError::Unprocessable(format!("Failed to search questions: {}", e))
            }
            other => AppError::Unprocessable(other.to_string()),
        })?;

    Ok(Success::new(found))
}
