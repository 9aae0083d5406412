//! Domain layer error definitions.

use thiserror::Error;

use super::value_object::{PlayerId, RoomCode};
use super::entity::RoomStatus;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// PlayerName validation error
    #[error("PlayerName cannot be empty")]
    PlayerNameEmpty,

    /// PlayerName too long error
    #[error("PlayerName cannot exceed {max} characters (got {actual})")]
    PlayerNameTooLong { max: usize, actual: usize },

    /// RoomCode validation error
    #[error("RoomCode cannot be empty")]
    RoomCodeEmpty,

    /// RoomCode too long error
    #[error("RoomCode cannot exceed {max} characters (got {actual})")]
    RoomCodeTooLong { max: usize, actual: usize },

    /// RoomId validation error
    #[error("RoomId cannot be empty")]
    RoomIdEmpty,

    /// PlayerId validation error
    #[error("PlayerId cannot be empty")]
    PlayerIdEmpty,

    /// PlayerId too long error
    #[error("PlayerId cannot exceed {max} characters (got {actual})")]
    PlayerIdTooLong { max: usize, actual: usize },

    /// Token position outside of base..=home
    #[error("Token position must be between {min} and {max} (got {actual})")]
    TokenPositionOutOfRange { min: i8, max: i8, actual: i64 },

    /// Dice value outside of 1..=6
    #[error("Dice value must be between 1 and 6 (got {0})")]
    DiceValueOutOfRange(u8),

    /// MessageContent validation error
    #[error("MessageContent cannot be empty")]
    MessageContentEmpty,

    /// MessageContent too long error
    #[error("MessageContent cannot exceed {max} characters (got {actual})")]
    MessageContentTooLong { max: usize, actual: usize },
}

/// Errors related to Room state transitions
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoomError {
    /// The room has left the waiting state
    #[error("Game already started")]
    GameAlreadyStarted,

    /// All seats are taken
    #[error("Room is full: maximum {capacity} players allowed")]
    RoomFull { capacity: usize },

    /// Starting requires at least two players
    #[error("Need at least {required} players (current: {current})")]
    NotEnoughPlayers { required: usize, current: usize },

    /// Dice can only be rolled while playing
    #[error("Game not started")]
    GameNotStarted,

    /// Another player holds the turn
    #[error("Not your turn: player {0} cannot roll now")]
    NotYourTurn(PlayerId),

    /// Status may only move forward
    #[error("Invalid status transition from {from} to {to}")]
    InvalidStatusTransition { from: RoomStatus, to: RoomStatus },
}

/// Errors reported by repository implementations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Another room already uses this code
    #[error("Room code already exists: {0}")]
    DuplicateCode(RoomCode),

    /// No room stored under this code
    #[error("Room not found: {0}")]
    RoomNotFound(RoomCode),

    /// The stored room changed since it was read
    #[error("Room {code} was modified concurrently (expected version {expected}, found {actual})")]
    VersionConflict {
        code: RoomCode,
        expected: u64,
        actual: u64,
    },
}
