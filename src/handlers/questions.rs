// src/handlers/questions.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use sqlx::PgPool;
use validator::Validate;

use crate::{
    error::ApiError,
    models::{
        category::{Category, category_map},
        question::{CreateQuestionRequest, Question, SearchRequest},
    },
    utils::pagination::{paginate, parse_page},
};

/// Query parameters for paginated listings.
///
/// `page` is kept as a raw string so that a non-numeric value falls back
/// to page 1 instead of rejecting the request.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

/// Lists all questions, paginated, together with the total count and the
/// category id-to-label mapping.
///
/// An empty page (zero total questions, or a page past the end) is a 404.
pub async fn list_questions(
    State(pool): State<PgPool>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, ApiError> {
    let all_questions: Vec<Question> = sqlx::query_as(
        "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
    )
    .fetch_all(&pool)
    .await?;

    let all_categories: Vec<Category> =
        sqlx::query_as(r#"SELECT id, type FROM categories ORDER BY id"#)
            .fetch_all(&pool)
            .await?;

    let page = parse_page(params.page.as_deref());
    let current = paginate(&all_questions, page);

    if current.is_empty() {
        return Err(ApiError::NotFound(format!("no questions on page {}", page)));
    }

    Ok(Json(json!({
        "success": true,
        "questions": current,
        "total_questions": all_questions.len(),
        "categories": category_map(&all_categories),
    })))
}

/// Deletes a question by id and returns a fresh listing.
///
/// The existence pre-check distinguishes a missing id (404) from a failed
/// delete (422); any database failure after the pre-check is 422.
pub async fn delete_question(
    State(pool): State<PgPool>,
    Path(question_id): Path<i64>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, ApiError> {
    sqlx::query_scalar::<_, i64>("SELECT id FROM questions WHERE id = $1")
        .bind(question_id)
        .fetch_optional(&pool)
        .await
        .map_err(|e| ApiError::Unprocessable(e.to_string()))?
        .ok_or_else(|| ApiError::NotFound(format!("question {} not found", question_id)))?;

    sqlx::query("DELETE FROM questions WHERE id = $1")
        .bind(question_id)
        .execute(&pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete question {}: {:?}", question_id, e);
            ApiError::Unprocessable(e.to_string())
        })?;

    let all_questions: Vec<Question> = sqlx::query_as(
        "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
    )
    .fetch_all(&pool)
    .await
    .map_err(|e| ApiError::Unprocessable(e.to_string()))?;

    let all_categories: Vec<Category> =
        sqlx::query_as(r#"SELECT id, type FROM categories ORDER BY id"#)
            .fetch_all(&pool)
            .await
            .map_err(|e| ApiError::Unprocessable(e.to_string()))?;

    let page = parse_page(params.page.as_deref());

    Ok(Json(json!({
        "success": true,
        "Questions": paginate(&all_questions, page),
        "The deleted question id is": question_id,
        "Number of questions": all_questions.len(),
        "Categories": all_categories,
    })))
}

/// Creates a new question and echoes its fields back.
/// Validation and persistence failures are both 422.
pub async fn create_question(
    State(pool): State<PgPool>,
    Json(payload): Json<CreateQuestionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::Unprocessable(e.to_string()))?;

    let created: Question = sqlx::query_as(
        r#"
        INSERT INTO questions (question, answer, category, difficulty)
        VALUES ($1, $2, $3, $4)
        RETURNING id, question, answer, category, difficulty
        "#,
    )
    .bind(&payload.question)
    .bind(&payload.answer)
    .bind(payload.category)
    .bind(payload.difficulty)
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to create question: {:?}", e);
        ApiError::Unprocessable(e.to_string())
    })?;

    Ok(Json(json!({
        "success": true,
        "question": created.question,
        "answer": created.answer,
        "category": created.category,
        "difficulty": created.difficulty,
    })))
}

/// Case-insensitive substring search over question text.
/// No match is a 200 with an empty list, not an error.
pub async fn search_questions(
    State(pool): State<PgPool>,
    Json(req): Json<SearchRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let pattern = format!("%{}%", req.search_term);

    let matches: Vec<Question> = sqlx::query_as(
        "SELECT id, question, answer, category, difficulty FROM questions \
         WHERE question ILIKE $1 ORDER BY id",
    )
    .bind(pattern)
    .fetch_all(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to search questions: {:?}", e);
        ApiError::Unprocessable(e.to_string())
    })?;

    Ok(Json(json!({
        "success": true,
        "questions": matches,
        "total_questions": matches.len(),
    })))
}
