use axum::{extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

use super::{AppState, WebError};

/// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, WebError> {
    state.store().ping().await?;
    Ok((StatusCode::OK, "OK"))
}
