use axum::{extract::State, response::Html, Json};

use crate::layout::Layout;
use crate::models::ContentModel;
use crate::state::AppState;

/// GET /
pub async fn handle_page(State(state): State<AppState>) -> Html<String> {
    Html(state.html_now())
}

/// GET /api/v1/content
pub async fn handle_content(State(state): State<AppState>) -> Json<ContentModel> {
    Json(state.content.as_ref().clone())
}

/// GET /api/v1/layout
pub async fn handle_layout(State(state): State<AppState>) -> Json<Layout> {
    Json(state.layout_now())
}
