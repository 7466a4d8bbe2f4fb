// src/models/response.rs

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::models::{category::CategoryMap, question::Question};

/// Wraps a payload as `{"success": true, ...payload}`.
#[derive(Debug, Serialize)]
pub struct Success<T> {
    success: bool,
    #[serde(flatten)]
    body: T,
}

impl<T> Success<T> {
    pub fn new(body: T) -> Self {
        Self {
            success: true,
            body,
        }
    }
}

impl<T: Serialize> IntoResponse for Success<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryList {
    pub categories: CategoryMap,
}

/// One page of the full question listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub categories: CategoryMap,
    /// Size of the whole table, not of this page.
    pub total_questions: usize,
    pub current_category: String,
}

/// Unpaginated result of a search or a category filter.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionList {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
}

#[derive(Debug, Serialize)]
pub struct Deleted {
    pub message: &'static str,
    pub deleted: i64,
}

#[derive(Debug, Serialize)]
pub struct Created {
    pub message: &'static str,
    pub created: i64,
}
