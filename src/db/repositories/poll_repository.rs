use crate::db::connection::DbPool;
use crate::db::models::PollQuestionRow;
use sqlx::Error;

/// Flat rows for the poll listing, pre-sorted so the in-memory grouping only
/// has to walk them once: sort_order ascending, ties broken by option id.
pub async fn get_poll_question_rows(
    pool: &DbPool,
    poll_id: i64,
) -> Result<Vec<PollQuestionRow>, Error> {
    let rows = sqlx::query_as::<_, PollQuestionRow>(
        "SELECT q.id AS question_id, q.question, q.description, q.hidden, pq.sort_order, \
                o.id AS option_id, o.label \
         FROM poll_questions pq \
         JOIN questions q ON q.id = pq.question_id \
         LEFT JOIN questions_options qo ON qo.question_id = q.id \
         LEFT JOIN options o ON o.id = qo.option_id \
         WHERE pq.poll_id = $1 \
         ORDER BY pq.sort_order ASC, o.id ASC",
    )
    .bind(poll_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Bulk upsert of poll assignments. sort_order is the 0-based position in the
/// submitted list; re-assigning an already-assigned question repositions it.
pub async fn assign_questions(
    pool: &DbPool,
    poll_id: i64,
    question_ids: &[i64],
) -> Result<(), Error> {
    let sort_orders: Vec<i32> = (0..question_ids.len() as i32).collect();

    sqlx::query(
        "INSERT INTO poll_questions (poll_id, question_id, is_draft, sort_order) \
         SELECT $1, question_id, FALSE, sort_order \
         FROM UNNEST($2::BIGINT[], $3::INT[]) AS incoming(question_id, sort_order) \
         ON CONFLICT (poll_id, question_id) DO UPDATE SET sort_order = EXCLUDED.sort_order",
    )
    .bind(poll_id)
    .bind(question_ids)
    .bind(&sort_orders)
    .execute(pool)
    .await?;

    Ok(())
}

/// Idempotent: removing a pairing that does not exist is not an error.
pub async fn unassign_question(
    pool: &DbPool,
    poll_id: i64,
    question_id: i64,
) -> Result<(), Error> {
    sqlx::query("DELETE FROM poll_questions WHERE poll_id = $1 AND question_id = $2")
        .bind(poll_id)
        .bind(question_id)
        .execute(pool)
        .await?;

    Ok(())
}
