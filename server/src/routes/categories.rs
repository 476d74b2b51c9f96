use axum::extract::{Path, State};
use axum::routing::get;
use axum::Router;
use serde::Serialize;
use sqlx::SqlitePool;

use crate::error::{ApiError, Json, Query};
use crate::pagination::{paginate, PageQuery};
use crate::routes::QuestionPage;
use crate::AppState;

#[derive(Serialize)]
struct CategoryListing {
    success: bool,
    categories: Vec<String>,
}

async fn list_categories(
    State(pool): State<SqlitePool>,
) -> Result<Json<CategoryListing>, ApiError> {
    let categories = db::categories::get_categories(&pool).await?;
    if categories.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(CategoryListing {
        success: true,
        categories: categories.into_iter().map(|c| c.name).collect(),
    }))
}

/// No existence check on the category itself: an unknown id yields zero
/// questions and therefore the same 404 as an existing-but-empty category.
async fn questions_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
    Query(page): Query<PageQuery>,
) -> Result<Json<QuestionPage>, ApiError> {
    let selection = db::questions::get_questions_for_category(&state.pool, category_id).await?;
    let current = paginate(&selection, page.page(), state.page_size);
    if current.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(QuestionPage {
        success: true,
        questions: current.to_vec(),
        total_questions: selection.len(),
        current_category: Some(category_id),
    }))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(list_categories))
        .route(
            "/categories/{category_id}/questions",
            get(questions_by_category),
        )
        .with_state(state)
}
