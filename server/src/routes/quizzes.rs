use axum::extract::State;
use axum::routing::post;
use axum::Router;
use db::Question;
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;
use sqlx::SqlitePool;

use crate::error::{ApiError, Json};
use crate::telemetry::QUIZ_CNTR;
use crate::AppState;

#[derive(Deserialize)]
struct QuizRequest {
    #[serde(default)]
    previous_questions: Vec<i64>,
    quiz_category: QuizCategory,
}

// Frontends send the category id either as a number or a numeric string;
// 0 means "any category".
#[derive(Deserialize)]
struct QuizCategory {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    id: i64,
}

#[derive(Serialize)]
struct QuizResponse {
    success: bool,
    question: Question,
}

async fn next_quiz_question(
    State(pool): State<SqlitePool>,
    Json(body): Json<QuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let category = (body.quiz_category.id != 0).then_some(body.quiz_category.id);
    let question = db::questions::quiz_question(&pool, &body.previous_questions, category)
        .await?
        .ok_or(ApiError::NotFound)?;

    QUIZ_CNTR
        .with_label_values(&[question.category.to_string().as_str()])
        .inc();

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

pub fn quiz_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(next_quiz_question))
        .with_state(state)
}
