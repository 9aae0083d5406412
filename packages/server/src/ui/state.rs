//! Shared application state.

use std::sync::Arc;

use crate::{
    domain::{ChatRepository, RoomRepository},
    infrastructure::repository::{InMemoryChatRepository, InMemoryRoomRepository},
};

/// Shared application state
pub struct AppState {
    /// Room storage（データアクセス層の抽象化）
    pub room_repository: Arc<dyn RoomRepository>,
    /// Chat storage
    pub chat_repository: Arc<dyn ChatRepository>,
}

impl AppState {
    pub fn new(
        room_repository: Arc<dyn RoomRepository>,
        chat_repository: Arc<dyn ChatRepository>,
    ) -> Self {
        Self {
            room_repository,
            chat_repository,
        }
    }

    /// State backed by the in-memory repositories
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryRoomRepository::new()),
            Arc::new(InMemoryChatRepository::new()),
        )
    }
}
