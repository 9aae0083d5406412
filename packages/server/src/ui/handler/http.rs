//! Service endpoints.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{ui::error::ApiError, ui::state::AppState, usecase::RoomUseCaseError};

/// Welcome message
pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({"message": "Welcome to Ludo World API"}))
}

/// Health check endpoint
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let rooms = state
        .room_repository
        .count()
        .await
        .map_err(RoomUseCaseError::from)?;
    Ok(Json(serde_json::json!({"status": "ok", "rooms": rooms})))
}
