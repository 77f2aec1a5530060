use crate::db::connection::DbPool;
use crate::questions;
use axum::{
    Router,
    extract::Extension,
    http::header::{ACCEPT, CONTENT_TYPE},
    routing::{delete, get, post, put},
};
use tokio::time::{Duration, interval};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::error;

#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
}

impl AppState {
    pub fn new(db: DbPool) -> Self {
        let db_clone = db.clone();
        tokio::spawn(async move {
            let mut interval = interval(Duration::from_secs(60));
            loop {
                interval.tick().await;
                match db_clone.acquire().await {
                    Ok(conn) => {
                        drop(conn);
                    }
                    Err(e) => {
                        error!("Database connection health check failed: {}", e);
                    }
                }
            }
        });

        AppState { db }
    }
}

pub fn app(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(questions::liveness))
        .route("/getQuestion/:id", get(questions::get_question))
        .route("/getOptions/:questionId", get(questions::get_options))
        .route("/createQuestion", post(questions::create_question))
        .route("/editQuestion", put(questions::edit_question))
        .route("/deleteQuestion", delete(questions::delete_question))
        .route("/getAllQuestions/:pollId", get(questions::get_all_questions))
        .route(
            "/assignQuestionsToPoll",
            post(questions::assign_questions_to_poll),
        )
        .route(
            "/unassignQuestionFromPoll",
            delete(questions::unassign_question_from_poll),
        )
        .route(
            "/getTenantQuestions/:companyId",
            get(questions::get_tenant_questions),
        )
        .layer(Extension(app_state))
        .layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::mirror_request())
                .allow_credentials(true)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::PUT,
                    axum::http::Method::DELETE,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([CONTENT_TYPE, ACCEPT]),
        )
}
