// src/routes.rs

use axum::{
    Router,
    http::Method,
    routing::{delete, get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    error::ApiError,
    handlers::{categories, questions, quiz},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Wires every endpoint of the trivia API.
/// * Applies global middleware (Trace, CORS open to any origin).
/// * Installs fallbacks so unknown paths and wrong verbs get the uniform
///   JSON error body instead of an empty response.
/// * Injects global state (Database Pool, Config).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ]);

    Router::new()
        .route("/categories", get(categories::list_categories))
        .route(
            "/categories/{id}/questions",
            get(categories::questions_by_category),
        )
        // GET lists, POST searches -- the original frontend contract.
        .route(
            "/questions",
            get(questions::list_questions).post(questions::search_questions),
        )
        .route("/questions/{id}", delete(questions::delete_question))
        .route("/newquestions", post(questions::create_question))
        .route("/quizzes", post(quiz::play_quiz))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn not_found() -> ApiError {
    ApiError::NotFound("unknown path".to_string())
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed("verb not supported on this path".to_string())
}
