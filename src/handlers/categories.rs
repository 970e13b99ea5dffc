// src/handlers/categories.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde_json::json;
use sqlx::PgPool;

use crate::{
    error::ApiError,
    handlers::questions::PageParams,
    models::{
        category::{Category, category_map},
        question::Question,
    },
    utils::pagination::{paginate, parse_page},
};

/// Lists all categories as an `{id: type}` mapping.
/// An empty store is a 404.
pub async fn list_categories(
    State(pool): State<PgPool>,
) -> Result<impl IntoResponse, ApiError> {
    let all_categories: Vec<Category> =
        sqlx::query_as(r#"SELECT id, type FROM categories ORDER BY id"#)
            .fetch_all(&pool)
            .await?;

    if all_categories.is_empty() {
        return Err(ApiError::NotFound("no categories exist".to_string()));
    }

    Ok(Json(json!({
        "success": true,
        "Categories": category_map(&all_categories),
    })))
}

/// Lists the questions of one category, paginated.
///
/// An empty page is a 404 whether the category has no questions at all or
/// the requested page is past the end.
pub async fn questions_by_category(
    State(pool): State<PgPool>,
    Path(category_id): Path<i64>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, ApiError> {
    let all_questions: Vec<Question> = sqlx::query_as(
        "SELECT id, question, answer, category, difficulty FROM questions \
         WHERE category = $1 ORDER BY id",
    )
    .bind(category_id)
    .fetch_all(&pool)
    .await?;

    let page = parse_page(params.page.as_deref());
    let current = paginate(&all_questions, page);

    if current.is_empty() {
        return Err(ApiError::NotFound(format!(
            "no questions for category {} on page {}",
            category_id, page
        )));
    }

    Ok(Json(json!({
        "questions": current,
        "totalQuestions": all_questions.len(),
    })))
}
