mod categories;
mod questions;
mod quizzes;

pub use categories::category_router;
pub use questions::questions_router;
pub use quizzes::quiz_router;

use db::Question;
use serde::Serialize;

/// Envelope shared by every endpoint returning a page of questions.
/// `current_category` is the category the page was filtered by, or `None`
/// for the category-agnostic listings.
#[derive(Serialize)]
pub(crate) struct QuestionPage {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<i64>,
}

#[derive(Serialize)]
pub(crate) struct Confirmation {
    pub success: bool,
    pub message: &'static str,
}
