use crate::db::connection::DbPool;
use crate::db::models::{Question, QuestionOption};
use sqlx::Error;

pub async fn get_question(pool: &DbPool, question_id: i64) -> Result<Option<Question>, Error> {
    let row = sqlx::query_as::<_, Question>(
        "SELECT id, question, description, hidden, user_id, company_id, created_at \
         FROM questions WHERE id = $1",
    )
    .bind(question_id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn get_question_options(
    pool: &DbPool,
    question_id: i64,
) -> Result<Vec<QuestionOption>, Error> {
    let rows = sqlx::query_as::<_, QuestionOption>(
        "SELECT qo.question_id, o.id AS option_id, o.label \
         FROM questions_options qo \
         JOIN options o ON o.id = qo.option_id \
         WHERE qo.question_id = $1 \
         ORDER BY o.id",
    )
    .bind(question_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn create_question(
    pool: &DbPool,
    question: &str,
    description: &str,
    hidden: bool,
    user_id: i64,
    company_id: i64,
) -> Result<i64, Error> {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO questions (question, description, hidden, user_id, company_id) \
         VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind(question)
    .bind(description)
    .bind(hidden)
    .bind(user_id)
    .bind(company_id)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// Full-field overwrite. Returns the number of rows affected so callers can
/// distinguish a missing id from a successful edit.
pub async fn update_question(
    pool: &DbPool,
    question_id: i64,
    question: &str,
    description: &str,
    hidden: bool,
    user_id: i64,
    company_id: Option<i64>,
) -> Result<u64, Error> {
    let result = sqlx::query(
        "UPDATE questions SET question = $2, description = $3, hidden = $4, user_id = $5, \
         company_id = COALESCE($6, company_id) WHERE id = $1",
    )
    .bind(question_id)
    .bind(question)
    .bind(description)
    .bind(hidden)
    .bind(user_id)
    .bind(company_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

pub async fn delete_question(pool: &DbPool, question_id: i64) -> Result<u64, Error> {
    let result = sqlx::query("DELETE FROM questions WHERE id = $1")
        .bind(question_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

pub async fn get_tenant_questions(pool: &DbPool, company_id: i64) -> Result<Vec<Question>, Error> {
    let rows = sqlx::query_as::<_, Question>(
        "SELECT id, question, description, hidden, user_id, company_id, created_at \
         FROM questions WHERE company_id = $1 ORDER BY id",
    )
    .bind(company_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
