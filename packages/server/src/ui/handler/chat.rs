//! Chat endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    domain::{MessageContent, PlayerId, PlayerName, RoomCode},
    infrastructure::dto::http::{MessageDto, PostMessageRequest, PostMessageResponse},
    ui::{error::ApiError, extractor::ApiJson, state::AppState},
    usecase::{ListMessagesUseCase, PostMessageUseCase},
};

/// `POST /chat`
pub async fn post_message(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<PostMessageRequest>,
) -> Result<Json<PostMessageResponse>, ApiError> {
    let room_code = RoomCode::try_from(payload.room_code)?;
    let player_id = payload.player_id.map(PlayerId::try_from).transpose()?;
    let player_name = payload.player_name.map(PlayerName::try_from).transpose()?;
    let content = MessageContent::try_from(payload.text)?;

    let usecase = PostMessageUseCase::new(state.chat_repository.clone());
    let id = usecase
        .execute(room_code, player_id, player_name, content)
        .await?;

    Ok(Json(PostMessageResponse {
        id: id.as_str().to_string(),
    }))
}

/// `GET /chat/{room_code}`
pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    Path(room_code): Path<String>,
) -> Result<Json<Vec<MessageDto>>, ApiError> {
    // A code that cannot be valid has no history.
    let Ok(room_code) = RoomCode::try_from(room_code) else {
        return Ok(Json(Vec::new()));
    };

    let usecase = ListMessagesUseCase::new(state.chat_repository.clone());
    let messages = usecase.execute(room_code).await?;

    Ok(Json(messages.iter().map(MessageDto::from).collect()))
}
