use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::Router;
use db::Question;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::error::{ApiError, Json, Query};
use crate::pagination::{paginate, PageQuery};
use crate::routes::{Confirmation, QuestionPage};
use crate::AppState;

#[derive(Deserialize)]
struct NewQuestion {
    question: Option<String>,
    answer: Option<String>,
    category: Option<i64>,
    difficulty: Option<i64>,
}

#[derive(Deserialize)]
struct SearchBody {
    #[serde(rename = "searchTerm")]
    search_term: String,
}

#[derive(Serialize)]
struct QuestionListing {
    success: bool,
    questions: Vec<Question>,
    categories: BTreeMap<i64, String>,
    total_questions: usize,
    current_category: Option<i64>,
}

async fn list_questions(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
) -> Result<Json<QuestionListing>, ApiError> {
    let selection = db::questions::get_questions(&state.pool).await?;
    let current = paginate(&selection, page.page(), state.page_size);
    if current.is_empty() {
        return Err(ApiError::NotFound);
    }
    let categories = db::categories::get_categories(&state.pool)
        .await?
        .into_iter()
        .map(|c| (c.id, c.name))
        .collect();
    Ok(Json(QuestionListing {
        success: true,
        questions: current.to_vec(),
        categories,
        total_questions: selection.len(),
        current_category: None,
    }))
}

async fn create_question(
    State(pool): State<SqlitePool>,
    Json(body): Json<NewQuestion>,
) -> Result<(StatusCode, Json<Confirmation>), ApiError> {
    // All four fields must be present and truthy; empty strings and zero
    // are rejected the same as absent fields.
    let (question, answer, category, difficulty) = match (
        body.question.as_deref(),
        body.answer.as_deref(),
        body.category,
        body.difficulty,
    ) {
        (Some(question), Some(answer), Some(category), Some(difficulty))
            if !question.is_empty() && !answer.is_empty() && category != 0 && difficulty != 0 =>
        {
            (question, answer, category, difficulty)
        }
        _ => return Err(ApiError::BadRequest),
    };
    db::questions::create_question(&pool, question, answer, category, difficulty).await?;
    Ok((
        StatusCode::CREATED,
        Json(Confirmation {
            success: true,
            message: "Question successfully added",
        }),
    ))
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    Path(question_id): Path<i64>,
) -> Result<Json<Confirmation>, ApiError> {
    db::questions::delete_question(&pool, question_id).await?;
    Ok(Json(Confirmation {
        success: true,
        message: "Question successfully deleted",
    }))
}

async fn search_questions(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
    Json(body): Json<SearchBody>,
) -> Result<Json<QuestionPage>, ApiError> {
    let matches = db::questions::search_questions(&state.pool, &body.search_term).await?;
    let current = paginate(&matches, page.page(), state.page_size);
    if current.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(QuestionPage {
        success: true,
        questions: current.to_vec(),
        total_questions: matches.len(),
        current_category: None,
    }))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/{question_id}", delete(delete_question))
        .with_state(state)
}
