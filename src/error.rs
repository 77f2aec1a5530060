use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuestionError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Invalid request: {0}")]
    InvalidRequest(&'static str),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Database error: {0}")]
    Database(String),
}

impl IntoResponse for QuestionError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            QuestionError::MissingField(_) => (StatusCode::BAD_REQUEST, "Missing required field"),
            QuestionError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "Invalid request"),
            QuestionError::NotFound(_) => (StatusCode::NOT_FOUND, "Not found"),
            QuestionError::Database(msg) => {
                error!("store call failed: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error")
            }
        };

        // Store failures are logged above; the caller only gets the generic text.
        let details = match &self {
            QuestionError::Database(_) => error_message.to_string(),
            other => other.to_string(),
        };

        let body = Json(json!({
            "error": error_message,
            "details": details
        }));

        (status, body).into_response()
    }
}

impl From<sqlx::Error> for QuestionError {
    fn from(error: sqlx::Error) -> Self {
        QuestionError::Database(error.to_string())
    }
}
