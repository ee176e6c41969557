pub mod health;
pub mod page;

use axum::{http::Uri, routing::get, Router};

use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::handle_page))
        .route("/health", get(health::health_handler))
        .route("/api/v1/content", get(page::handle_content))
        .route("/api/v1/layout", get(page::handle_layout))
        .fallback(not_found)
        .with_state(state)
}
