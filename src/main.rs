use crate::db::connection::{DbConfig, init_db};
use crate::startup::AppState;
use axum::{http::StatusCode, response::IntoResponse};
use std::net::SocketAddr;

#[macro_use]
extern crate tracing;

mod db;
mod error;
mod questions;
mod startup;

#[tokio::main]
async fn main() {
    if std::env::var("RUST_LOG").is_err() {
        unsafe {
            std::env::set_var("RUST_LOG", "INFO");
        }
    }
    // initialize tracing
    tracing_subscriber::fmt::init();

    dotenvy::dotenv().ok();

    let config = DbConfig::from_env()
        .expect("DB_HOST, DB_USER, DB_PASS and DB_NAME must be set");

    let pool = init_db(&config.connection_url())
        .await
        .expect("Unable to connect to the database");

    let app_state = AppState::new(pool);

    let app = startup::app(app_state).fallback(handler_404);

    let addr = SocketAddr::from(([0, 0, 0, 0], 8003));
    info!("listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Unable to spawn tcp listener");

    axum::serve(listener, app).await.unwrap();
}

async fn handler_404() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "nothing to see here")
}
