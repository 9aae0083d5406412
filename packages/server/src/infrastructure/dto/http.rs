//! HTTP API request and response DTOs.
//!
//! Identifiers are exposed as `_id` to keep the document-store shape clients
//! already consume.

use ludo_shared::time::millis_to_rfc3339;
use serde::{Deserialize, Serialize};

use crate::domain::{ChatMessage, Color, Player, Room, RoomStatus};

/// Body of `POST /rooms/create`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoomRequest {
    pub player_name: String,
    #[serde(default)]
    pub room_code: Option<String>,
}

/// Body of `POST /rooms/join`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinRoomRequest {
    pub player_name: String,
    pub room_code: String,
}

/// Body of `POST /rooms/{code}/roll`
///
/// The path code is authoritative; `room_code` is accepted for older clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollDiceRequest {
    #[serde(default)]
    pub room_code: Option<String>,
    pub player_id: String,
}

/// Body of `POST /chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostMessageRequest {
    pub room_code: String,
    #[serde(default)]
    pub player_id: Option<String>,
    #[serde(default)]
    pub player_name: Option<String>,
    pub text: String,
}

/// Room state returned by every room endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub code: String,
    pub created_by: String,
    pub status: RoomStatus,
    pub max_players: usize,
    pub players: Vec<PlayerDto>,
    pub current_turn: Option<String>,
    pub last_roll: Option<u8>,
    pub created_at: String, // ISO 8601
}

/// Player entry of a room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub color: Color,
    pub tokens: Vec<i8>,
    pub is_bot: bool,
}

/// Response of `POST /rooms/{code}/roll`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollDiceResponse {
    pub roll: u8,
    pub room: RoomDto,
}

/// Response of `POST /chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostMessageResponse {
    #[serde(rename = "_id")]
    pub id: String,
}

/// Chat line returned by `GET /chat/{room_code}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub room_code: String,
    pub player_id: Option<String>,
    pub player_name: Option<String>,
    pub text: String,
    pub created_at: String, // ISO 8601
}

/// Error body, `{"detail": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDto {
    pub detail: String,
}

impl From<&Player> for PlayerDto {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id.as_str().to_string(),
            name: player.name.as_str().to_string(),
            color: player.color,
            tokens: player.tokens.positions().iter().map(|t| t.value()).collect(),
            is_bot: player.is_bot,
        }
    }
}

impl From<&Room> for RoomDto {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id.as_str().to_string(),
            code: room.code.as_str().to_string(),
            created_by: room.created_by.as_str().to_string(),
            status: room.status,
            max_players: room.max_players,
            players: room.players.iter().map(PlayerDto::from).collect(),
            current_turn: room.current_turn.as_ref().map(|id| id.as_str().to_string()),
            last_roll: room.last_roll.map(|roll| roll.value()),
            created_at: millis_to_rfc3339(room.created_at.value()),
        }
    }
}

impl From<&ChatMessage> for MessageDto {
    fn from(message: &ChatMessage) -> Self {
        Self {
            id: message.id.as_str().to_string(),
            room_code: message.room_code.as_str().to_string(),
            player_id: message.player_id.as_ref().map(|id| id.as_str().to_string()),
            player_name: message
                .player_name
                .as_ref()
                .map(|name| name.as_str().to_string()),
            text: message.content.as_str().to_string(),
            created_at: millis_to_rfc3339(message.sent_at.value()),
        }
    }
}
