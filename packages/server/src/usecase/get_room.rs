//! UseCase: ルーム取得処理

use std::sync::Arc;

use crate::domain::{Room, RoomCode, RoomRepository};

use super::error::RoomUseCaseError;

/// ルーム取得のユースケース
pub struct GetRoomUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl GetRoomUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// コードでルームを取得する。存在しない場合は `RoomNotFound`
    pub async fn execute(&self, room_code: RoomCode) -> Result<Room, RoomUseCaseError> {
        self.repository
            .find_by_code(&room_code)
            .await?
            .ok_or(RoomUseCaseError::RoomNotFound(room_code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{PlayerName, RepositoryError, repository::MockRoomRepository},
        infrastructure::repository::InMemoryRoomRepository,
        usecase::CreateRoomUseCase,
    };

    #[tokio::test]
    async fn test_get_room_success() {
        // テスト項目: 作成したルームをコードで取得できる
        // given (前提条件):
        let repository = Arc::new(InMemoryRoomRepository::new());
        let created = CreateRoomUseCase::new(repository.clone())
            .execute(PlayerName::new("alice".to_string()).unwrap(), None)
            .await
            .unwrap();
        let usecase = GetRoomUseCase::new(repository);

        // when (操作):
        let room = usecase.execute(created.code.clone()).await.unwrap();

        // then (期待する結果):
        assert_eq!(room.id, created.id);
        assert_eq!(room.players, created.players);
    }

    #[tokio::test]
    async fn test_get_room_not_found() {
        // テスト項目: 存在しないコードでは RoomNotFound になる
        // given (前提条件):
        let usecase = GetRoomUseCase::new(Arc::new(InMemoryRoomRepository::new()));
        let code = RoomCode::new("NOPE00".to_string()).unwrap();

        // when (操作):
        let result = usecase.execute(code.clone()).await;

        // then (期待する結果):
        assert_eq!(result.unwrap_err(), RoomUseCaseError::RoomNotFound(code));
    }

    #[tokio::test]
    async fn test_get_room_repository_error_is_propagated() {
        // テスト項目: Repository のエラーはそのまま返される
        // given (前提条件):
        let code = RoomCode::new("ABC123".to_string()).unwrap();
        let mut repository = MockRoomRepository::new();
        let failing = code.clone();
        repository
            .expect_find_by_code()
            .returning(move |_| Err(RepositoryError::RoomNotFound(failing.clone())));
        let usecase = GetRoomUseCase::new(Arc::new(repository));

        // when (操作):
        let result = usecase.execute(code.clone()).await;

        // then (期待する結果):
        assert_eq!(
            result.unwrap_err(),
            RoomUseCaseError::Repository(RepositoryError::RoomNotFound(code))
        );
    }
}
