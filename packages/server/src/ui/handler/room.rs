//! Room lifecycle and turn endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    domain::{PlayerId, PlayerName, RoomCode},
    infrastructure::dto::http::{
        CreateRoomRequest, JoinRoomRequest, RollDiceRequest, RollDiceResponse, RoomDto,
    },
    ui::{error::ApiError, extractor::ApiJson, state::AppState},
    usecase::{
        CreateRoomUseCase, GetRoomUseCase, JoinRoomUseCase, RollDiceUseCase, StartGameUseCase,
    },
};

/// A code that fails validation can never match a stored room.
fn existing_room_code(code: String) -> Result<RoomCode, ApiError> {
    RoomCode::try_from(code.clone()).map_err(|_| ApiError::NotFound(code))
}

/// `POST /rooms/create`
pub async fn create_room(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<CreateRoomRequest>,
) -> Result<Json<RoomDto>, ApiError> {
    let player_name = PlayerName::try_from(payload.player_name)?;
    let room_code = payload.room_code.map(RoomCode::try_from).transpose()?;

    let usecase = CreateRoomUseCase::new(state.room_repository.clone());
    let room = usecase.execute(player_name, room_code).await?;

    Ok(Json(RoomDto::from(&room)))
}

/// `POST /rooms/join`
pub async fn join_room(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<JoinRoomRequest>,
) -> Result<Json<RoomDto>, ApiError> {
    let room_code = existing_room_code(payload.room_code)?;
    let player_name = PlayerName::try_from(payload.player_name)?;

    let usecase = JoinRoomUseCase::new(state.room_repository.clone());
    let (room, _) = usecase.execute(room_code, player_name).await?;

    Ok(Json(RoomDto::from(&room)))
}

/// `GET /rooms/{code}`
pub async fn get_room(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Json<RoomDto>, ApiError> {
    let room_code = existing_room_code(code)?;

    let usecase = GetRoomUseCase::new(state.room_repository.clone());
    let room = usecase.execute(room_code).await?;

    Ok(Json(RoomDto::from(&room)))
}

/// `POST /rooms/{code}/start`
pub async fn start_game(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Json<RoomDto>, ApiError> {
    let room_code = existing_room_code(code)?;

    let usecase = StartGameUseCase::new(state.room_repository.clone());
    let room = usecase.execute(room_code).await?;

    Ok(Json(RoomDto::from(&room)))
}

/// `POST /rooms/{code}/roll`
pub async fn roll_dice(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
    ApiJson(payload): ApiJson<RollDiceRequest>,
) -> Result<Json<RollDiceResponse>, ApiError> {
    if let Some(body_code) = payload.room_code.as_deref()
        && body_code != code
    {
        tracing::debug!(
            "Roll body names room '{}' but path names '{}'; using the path",
            body_code,
            code
        );
    }
    let room_code = existing_room_code(code)?;
    // Checked against the room's turn after the room is loaded.
    let player_id = PlayerId::from_claim(payload.player_id);

    let usecase = RollDiceUseCase::new(state.room_repository.clone());
    let (roll, room) = usecase.execute(room_code, player_id).await?;

    Ok(Json(RollDiceResponse {
        roll: roll.value(),
        room: RoomDto::from(&room),
    }))
}
