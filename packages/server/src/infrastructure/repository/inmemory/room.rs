//! InMemory Room Repository 実装
//!
//! ドメイン層が定義する RoomRepository trait の具体的な実装。
//! HashMap をインメモリ DB として使用します。
//!
//! ## 並行更新
//!
//! `update` はバージョン番号による compare-and-swap です。
//! 読み込み後に他のリクエストが同じルームを更新していた場合は
//! `RepositoryError::VersionConflict` を返し、上書き（lost update）を防ぎます。

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{RepositoryError, Room, RoomCode, RoomRepository};

/// インメモリ Room Repository 実装
///
/// ルームコードをキーとする HashMap を保持します。
/// ドメイン層の RoomRepository trait を実装します（依存性の逆転）。
#[derive(Default)]
pub struct InMemoryRoomRepository {
    rooms: Arc<Mutex<HashMap<RoomCode, Room>>>,
}

impl InMemoryRoomRepository {
    /// 新しい InMemoryRoomRepository を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn find_by_code(&self, code: &RoomCode) -> Result<Option<Room>, RepositoryError> {
        let rooms = self.rooms.lock().await;
        Ok(rooms.get(code).cloned())
    }

    async fn insert(&self, room: Room) -> Result<(), RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        if rooms.contains_key(&room.code) {
            return Err(RepositoryError::DuplicateCode(room.code));
        }
        rooms.insert(room.code.clone(), room);
        Ok(())
    }

    async fn update(&self, mut room: Room) -> Result<Room, RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        let stored = rooms
            .get_mut(&room.code)
            .ok_or_else(|| RepositoryError::RoomNotFound(room.code.clone()))?;

        if stored.version != room.version {
            return Err(RepositoryError::VersionConflict {
                code: room.code,
                expected: room.version,
                actual: stored.version,
            });
        }

        room.version += 1;
        *stored = room.clone();
        Ok(room)
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        let rooms = self.rooms.lock().await;
        Ok(rooms.len())
    }
}
