// src/routes.rs

use axum::{
    Router,
    http::{Method, header},
    routing::{delete, get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    error::{method_not_allowed_fallback, not_found_fallback},
    handlers::{categories, questions, quiz},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Registers the category, question, search and quiz endpoints.
/// * Answers unknown paths and unsupported methods with the JSON error body.
/// * Applies global middleware (Trace, CORS for any origin).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let category_routes = Router::new()
        .route("/categories", get(categories::list_categories))
        .route(
            "/categories/{id}/questions",
            get(categories::questions_by_category),
        );

    let question_routes = Router::new()
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/questions/{id}", delete(questions::delete_question))
        .route("/search", post(questions::search_questions));

    let quiz_routes = Router::new().route("/quizzes", post(quiz::next_question));

    Router::new()
        .merge(category_routes)
        .merge(question_routes)
        .merge(quiz_routes)
        .fallback(not_found_fallback)
        .method_not_allowed_fallback(method_not_allowed_fallback)
        // Global Middleware (applied from outside in)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
