//! InMemory Chat Repository 実装
//!
//! ルームコードごとにメッセージを挿入順で保持します。
//! ルームの状態とは独立しており、整合性の要件は「挿入順で取得できること」のみです。
//! 保持件数を超えた古いメッセージは追加時に破棄されます。

use std::{
    collections::{HashMap, VecDeque},
    sync::Arc,
};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ChatMessage, ChatRepository, RepositoryError, RoomCode};

/// ルームごとに保持するメッセージ数の既定値
pub const DEFAULT_RETENTION_PER_ROOM: usize = 500;

/// インメモリ Chat Repository 実装
pub struct InMemoryChatRepository {
    messages: Arc<Mutex<HashMap<RoomCode, VecDeque<ChatMessage>>>>,
    retention: usize,
}

impl InMemoryChatRepository {
    /// 新しい InMemoryChatRepository を作成
    pub fn new() -> Self {
        Self::with_retention(DEFAULT_RETENTION_PER_ROOM)
    }

    /// ルームごとの保持件数を指定して作成（最低 1 件）
    pub fn with_retention(retention: usize) -> Self {
        Self {
            messages: Arc::new(Mutex::new(HashMap::new())),
            retention: retention.max(1),
        }
    }
}

impl Default for InMemoryChatRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatRepository for InMemoryChatRepository {
    async fn append(&self, message: ChatMessage) -> Result<(), RepositoryError> {
        let mut messages = self.messages.lock().await;
        let history = messages.entry(message.room_code.clone()).or_default();
        history.push_back(message);
        while history.len() > self.retention {
            history.pop_front();
        }
        Ok(())
    }

    async fn recent(
        &self,
        room_code: &RoomCode,
        limit: usize,
    ) -> Result<Vec<ChatMessage>, RepositoryError> {
        let messages = self.messages.lock().await;
        let Some(history) = messages.get(room_code) else {
            return Ok(Vec::new());
        };
        let start = history.len().saturating_sub(limit);
        Ok(history.iter().skip(start).cloned().collect())
    }
}
