//! UseCase: チャット履歴取得処理

use std::sync::Arc;

use crate::domain::{ChatMessage, ChatRepository, RoomCode};

use super::error::ChatUseCaseError;

/// 1 回の取得で返すメッセージの最大件数
pub const CHAT_HISTORY_LIMIT: usize = 50;

/// チャット履歴取得のユースケース
pub struct ListMessagesUseCase {
    repository: Arc<dyn ChatRepository>,
}

impl ListMessagesUseCase {
    pub fn new(repository: Arc<dyn ChatRepository>) -> Self {
        Self { repository }
    }

    /// 最新 `CHAT_HISTORY_LIMIT` 件を古い順に返す
    pub async fn execute(&self, room_code: RoomCode) -> Result<Vec<ChatMessage>, ChatUseCaseError> {
        let messages = self
            .repository
            .recent(&room_code, CHAT_HISTORY_LIMIT)
            .await?;
        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{MessageContent, PlayerName},
        infrastructure::repository::InMemoryChatRepository,
        usecase::PostMessageUseCase,
    };

    #[tokio::test]
    async fn test_list_messages_caps_at_limit_oldest_first() {
        // テスト項目: 大量投稿後も最新 50 件が古い順に返される
        // given (前提条件): 120 件投稿済み
        let repository = Arc::new(InMemoryChatRepository::new());
        let post = PostMessageUseCase::new(repository.clone());
        let code = RoomCode::new("ROOM1".to_string()).unwrap();
        for i in 0..120 {
            post.execute(
                code.clone(),
                None,
                Some(PlayerName::new("alice".to_string()).unwrap()),
                MessageContent::new(format!("msg {i}")).unwrap(),
            )
            .await
            .unwrap();
        }
        let usecase = ListMessagesUseCase::new(repository);

        // when (操作):
        let messages = usecase.execute(code).await.unwrap();

        // then (期待する結果):
        assert_eq!(messages.len(), CHAT_HISTORY_LIMIT);
        assert_eq!(messages[0].content.as_str(), "msg 70");
        assert_eq!(messages[49].content.as_str(), "msg 119");
    }

    #[tokio::test]
    async fn test_list_messages_empty_room() {
        // テスト項目: 投稿のないルームでは空のリストが返される
        let usecase = ListMessagesUseCase::new(Arc::new(InMemoryChatRepository::new()));
        let code = RoomCode::new("QUIET".to_string()).unwrap();
        assert!(usecase.execute(code).await.unwrap().is_empty());
    }
}
