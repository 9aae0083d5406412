//! UseCase: チャット投稿処理
//!
//! ルームの状態とは独立しており、ルームの存在確認も行いません。

use std::sync::Arc;

use ludo_shared::time::now_millis;

use crate::domain::{
    ChatMessage, ChatRepository, MessageContent, MessageId, MessageIdFactory, PlayerId,
    PlayerName, RoomCode, Timestamp,
};

use super::error::ChatUseCaseError;

/// チャット投稿のユースケース
pub struct PostMessageUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ChatRepository>,
}

impl PostMessageUseCase {
    /// 新しい PostMessageUseCase を作成
    pub fn new(repository: Arc<dyn ChatRepository>) -> Self {
        Self { repository }
    }

    /// メッセージを投稿し、採番された ID を返す
    pub async fn execute(
        &self,
        room_code: RoomCode,
        player_id: Option<PlayerId>,
        player_name: Option<PlayerName>,
        content: MessageContent,
    ) -> Result<MessageId, ChatUseCaseError> {
        let message = ChatMessage {
            id: MessageIdFactory::generate(),
            room_code,
            player_id,
            player_name,
            content,
            sent_at: Timestamp::new(now_millis()),
        };
        let id = message.id.clone();
        let room_code = message.room_code.clone();

        self.repository.append(message).await?;

        tracing::debug!("Message {} posted to room '{}'", id.as_str(), room_code);
        Ok(id)
    }
}
