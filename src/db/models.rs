use serde::{Deserialize, Serialize};
use sqlx::types::chrono::{DateTime, Utc};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub description: String,
    pub hidden: bool,
    pub user_id: i64,
    pub company_id: i64,
    #[sqlx(try_from = "DateTime<Utc>")]
    pub created_at: DateTime<Utc>,
}

/// A catalog option joined to a question through questions_options.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct QuestionOption {
    pub question_id: i64,
    pub option_id: i64,
    pub label: String,
}

/// One flat row of the poll listing join. option_id and label are NULL for
/// questions with no attached options.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PollQuestionRow {
    pub question_id: i64,
    pub question: String,
    pub description: String,
    pub hidden: bool,
    pub sort_order: i32,
    pub option_id: Option<i64>,
    pub label: Option<String>,
}
