use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

pub async fn get_questions(pool: &SqlitePool) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty FROM questions ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_question(pool: &SqlitePool, question_id: i64) -> sqlx::Result<Question> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty FROM questions WHERE questions.id = ?
        "#,
    )
    .bind(question_id)
    .fetch_one(pool)
    .await
}

pub async fn get_questions_for_category(
    pool: &SqlitePool,
    category: i64,
) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty FROM questions WHERE questions.category = ? ORDER BY id
        "#,
    )
    .bind(category)
    .fetch_all(pool)
    .await
}

/// Case-insensitive substring match against the question text. LIKE
/// wildcards in the term are not escaped.
pub async fn search_questions(pool: &SqlitePool, term: &str) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty FROM questions
        WHERE LOWER(question) LIKE '%' || LOWER(?) || '%' ORDER BY id
        "#,
    )
    .bind(term)
    .fetch_all(pool)
    .await
}

pub async fn create_question(
    pool: &SqlitePool,
    question: &str,
    answer: &str,
    category: i64,
    difficulty: i64,
) -> sqlx::Result<i64> {
    let id = sqlx::query(
        r#"
INSERT INTO questions (question, answer, category, difficulty) VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(question)
    .bind(answer)
    .bind(category)
    .bind(difficulty)
    .execute(pool)
    .await?
    .last_insert_rowid();

    Ok(id)
}

pub async fn update_question(pool: &SqlitePool, question: Question) -> sqlx::Result<()> {
    sqlx::query(
        r#"
        UPDATE questions SET question=?, answer=?, category=?, difficulty=? WHERE questions.id = ?
        "#,
    )
    .bind(question.question)
    .bind(question.answer)
    .bind(question.category)
    .bind(question.difficulty)
    .bind(question.id)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn delete_question(pool: &SqlitePool, question_id: i64) -> sqlx::Result<()> {
    get_question(pool, question_id).await?;

    sqlx::query(
        r#"
        DELETE FROM questions WHERE questions.id = ?
        "#,
    )
    .bind(question_id)
    .execute(pool)
    .await?;
    Ok(())
}

/// Picks one question uniformly at random among those whose id is not in
/// `previous`, restricted to `category` when given. `None` when every
/// candidate has been excluded.
pub async fn quiz_question(
    pool: &SqlitePool,
    previous: &[i64],
    category: Option<i64>,
) -> sqlx::Result<Option<Question>> {
    let mut query: QueryBuilder<Sqlite> =
        QueryBuilder::new("SELECT id, question, answer, category, difficulty FROM questions");
    let mut clause = " WHERE";
    if !previous.is_empty() {
        query.push(clause).push(" id NOT IN (");
        let mut ids = query.separated(", ");
        for question_id in previous {
            ids.push_bind(*question_id);
        }
        query.push(")");
        clause = " AND";
    }
    if let Some(category) = category {
        query.push(clause).push(" category = ").push_bind(category);
    }
    query.push(" ORDER BY RANDOM() LIMIT 1");

    query.build_query_as::<Question>().fetch_optional(pool).await
}

/// Reconciles the stored questions with the given set, preserving ids.
pub async fn import_questions(pool: &SqlitePool, questions: Vec<Question>) -> sqlx::Result<()> {
    let existing = get_questions(pool).await?;
    let existing_ids: HashSet<i64> = existing.iter().map(|q| q.id).collect();
    let new_ids: HashSet<i64> = questions.iter().map(|q| q.id).collect();
    for question_id in existing_ids.difference(&new_ids) {
        delete_question(pool, *question_id).await?;
    }
    for question in questions {
        if existing_ids.contains(&question.id) {
            update_question(pool, question).await?;
        } else {
            sqlx::query(
                r#"
        INSERT INTO questions (id, question, answer, category, difficulty) VALUES (?, ?, ?, ?, ?)
                "#,
            )
            .bind(question.id)
            .bind(question.question)
            .bind(question.answer)
            .bind(question.category)
            .bind(question.difficulty)
            .execute(pool)
            .await?;
        }
    }
    Ok(())
}
