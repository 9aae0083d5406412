//! Domain layer for the game server.
//!
//! This module contains the room and turn rules, which are independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod factory;
pub mod repository;
pub mod value_object;

pub use entity::{ChatMessage, MAX_PLAYERS, MIN_PLAYERS_TO_START, Player, Room, RoomStatus};
pub use error::{RepositoryError, RoomError, ValueObjectError};
pub use factory::{MessageIdFactory, RoomCodeFactory, RoomIdFactory};
pub use repository::{ChatRepository, RoomRepository};
pub use value_object::{
    Color, DiceValue, MessageContent, MessageId, PlayerId, PlayerName, RoomCode, RoomId,
    Timestamp, TokenPosition, Tokens,
};
