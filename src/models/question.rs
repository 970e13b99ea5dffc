// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

/// Represents the 'questions' table in the database.
///
/// Serialized as-is for every endpoint; the response shape is the
/// "formatted" question the frontend consumes.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    /// The question text itself.
    pub question: String,

    /// The correct answer text.
    pub answer: String,

    /// Category id. An opaque integer reference; no cascade behavior.
    pub category: i64,

    /// Difficulty rating, 1 (easiest) to 5.
    pub difficulty: i32,
}

/// DTO for creating a new question via POST /newquestions.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, max = 1000))]
    pub question: String,
    #[validate(length(min = 1, max = 500))]
    pub answer: String,
    pub category: i64,
    #[validate(range(min = 1, max = 5))]
    pub difficulty: i32,
}

/// DTO for searching questions via POST /questions.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

/// DTO for requesting the next quiz question via POST /quizzes.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Vec<i64>,
    pub quiz_category: QuizCategory,
}

/// Category selector inside a quiz request. Id 0 means "any category".
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: i64,
}
