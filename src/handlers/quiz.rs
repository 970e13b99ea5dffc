// src/handlers/quiz.rs

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use serde_json::json;
use sqlx::PgPool;

use crate::{
    error::ApiError,
    models::question::{Question, QuizRequest},
};

/// Picks the next quiz question at random.
///
/// The candidate set is every question when `quiz_category.id` is 0, else
/// the questions of that category. Once `previous_questions` covers the
/// whole candidate set the quiz is complete and `question` is null; that
/// is a success, not an error. Previously-asked ids are excluded from the
/// random pick in both branches.
///
/// The service is stateless: the caller accumulates `previous_questions`
/// across rounds and sends the full list each time.
pub async fn play_quiz(
    State(pool): State<PgPool>,
    body: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    // A missing or malformed body is the caller's fault, never 500.
    let Json(req) = body.map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let category_id = req.quiz_category.id;

    let candidates: i64 = if category_id == 0 {
        sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(&pool)
            .await?
    } else {
        sqlx::query_scalar("SELECT COUNT(*) FROM questions WHERE category = $1")
            .bind(category_id)
            .fetch_one(&pool)
            .await?
    };

    if req.previous_questions.len() as i64 >= candidates {
        return Ok(Json(json!({
            "success": true,
            "question": null,
        })));
    }

    let question: Option<Question> = sqlx::query_as(
        "SELECT id, question, answer, category, difficulty FROM questions \
         WHERE ($1 = 0 OR category = $1) AND id <> ALL($2) \
         ORDER BY RANDOM() LIMIT 1",
    )
    .bind(category_id)
    .bind(&req.previous_questions)
    .fetch_optional(&pool)
    .await?;

    Ok(Json(json!({
        "success": true,
        "question": question,
    })))
}
