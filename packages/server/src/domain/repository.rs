//! Repository traits.
//!
//! Storage is abstracted behind these traits and injected into the use cases.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;

use super::{ChatMessage, RepositoryError, Room, RoomCode};

/// Room storage keyed by join code.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Fetch a room by its join code.
    async fn find_by_code(&self, code: &RoomCode) -> Result<Option<Room>, RepositoryError>;

    /// Store a new room.
    ///
    /// The code check and the insert are atomic; a taken code yields
    /// `RepositoryError::DuplicateCode`.
    async fn insert(&self, room: Room) -> Result<(), RepositoryError>;

    /// Conditionally replace a stored room.
    ///
    /// Succeeds only when the stored version equals `room.version`, and
    /// returns the room as stored with its version bumped by one. A stale
    /// write yields `RepositoryError::VersionConflict`.
    async fn update(&self, room: Room) -> Result<Room, RepositoryError>;

    /// Number of stored rooms.
    async fn count(&self) -> Result<usize, RepositoryError>;
}

/// Append-only chat storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// Append a message to its room's history.
    async fn append(&self, message: ChatMessage) -> Result<(), RepositoryError>;

    /// Latest `limit` messages of a room, oldest first.
    async fn recent(
        &self,
        room_code: &RoomCode,
        limit: usize,
    ) -> Result<Vec<ChatMessage>, RepositoryError>;
}
