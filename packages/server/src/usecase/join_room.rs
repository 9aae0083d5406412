//! UseCase: ルーム参加処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinRoomUseCase::execute() メソッド
//! - 参加者への ID・色の割り当て、満席・開始済みの拒否
//!
//! ### なぜこのテストが必要か
//! - 参加順がそのまま手番順になるため、ID の連番が崩れてはならない
//! - 同時参加で参加者が上書きされる（lost update）ことを防ぐ
//!
//! ### どのような状況を想定しているか
//! - 正常系：作成者 + 3 人の順次参加
//! - 異常系：存在しないルーム、満席、開始済み
//! - エッジケース：同じルームへの同時参加

use std::sync::Arc;

use crate::domain::{PlayerId, PlayerName, Room, RoomCode, RoomRepository};

use super::{error::RoomUseCaseError, room_update::update_room};

/// ルーム参加のユースケース
pub struct JoinRoomUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl JoinRoomUseCase {
    /// 新しい JoinRoomUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// ルーム参加を実行
    ///
    /// # Returns
    ///
    /// * `Ok((Room, PlayerId))` - 更新後のルームと新しい参加者の ID
    /// * `Err(RoomUseCaseError)` - 参加失敗
    pub async fn execute(
        &self,
        room_code: RoomCode,
        player_name: PlayerName,
    ) -> Result<(Room, PlayerId), RoomUseCaseError> {
        let (room, player_id) = update_room(self.repository.as_ref(), &room_code, |room| {
            room.join(player_name.clone()).map(|player| player.id.clone())
        })
        .await?;

        tracing::info!(
            "Player '{}' joined room '{}' as {} ({}/{})",
            player_name,
            room.code,
            player_id,
            room.players.len(),
            room.max_players
        );
        Ok((room, player_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{Color, RoomError},
        infrastructure::repository::InMemoryRoomRepository,
        usecase::{CreateRoomUseCase, StartGameUseCase},
    };
    use std::collections::HashSet;
    use tokio::task::JoinSet;

    fn player_name(name: &str) -> PlayerName {
        PlayerName::new(name.to_string()).unwrap()
    }

    async fn create_room(repository: Arc<InMemoryRoomRepository>) -> Room {
        CreateRoomUseCase::new(repository)
            .execute(player_name("alice"), None)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_sequential_joins_assign_ids_and_colors() {
        // テスト項目: 3 人が順に参加すると 4 人になり、色と ID が参加順に割り当てられる
        // given (前提条件):
        let repository = Arc::new(InMemoryRoomRepository::new());
        let room = create_room(repository.clone()).await;
        let usecase = JoinRoomUseCase::new(repository.clone());

        // when (操作):
        for name in ["bob", "carol", "dave"] {
            usecase
                .execute(room.code.clone(), player_name(name))
                .await
                .unwrap();
        }

        // then (期待する結果):
        let room = repository.find_by_code(&room.code).await.unwrap().unwrap();
        assert_eq!(room.players.len(), 4);
        for (index, player) in room.players.iter().enumerate() {
            assert_eq!(
                player.id.as_str(),
                format!("{}-p{}", room.id.as_str(), index)
            );
            assert_eq!(player.color, Color::PALETTE[index]);
            assert!(!player.is_bot);
        }
    }

    #[tokio::test]
    async fn test_join_returns_new_player_id() {
        // テスト項目: 参加した本人の ID が返される
        // given (前提条件):
        let repository = Arc::new(InMemoryRoomRepository::new());
        let room = create_room(repository.clone()).await;
        let usecase = JoinRoomUseCase::new(repository);

        // when (操作):
        let (updated, player_id) = usecase
            .execute(room.code.clone(), player_name("bob"))
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(player_id, updated.players[1].id);
        let seat = updated.seat_of(&player_id).unwrap();
        assert_eq!(seat, 1);
        assert_eq!(updated.players[seat].color, Color::Green);
    }

    #[tokio::test]
    async fn test_join_unknown_room_fails() {
        // テスト項目: 存在しないルームへの参加は RoomNotFound になる
        // given (前提条件):
        let repository = Arc::new(InMemoryRoomRepository::new());
        let usecase = JoinRoomUseCase::new(repository);
        let code = RoomCode::new("NOPE00".to_string()).unwrap();

        // when (操作):
        let result = usecase.execute(code.clone(), player_name("bob")).await;

        // then (期待する結果):
        assert_eq!(result.unwrap_err(), RoomUseCaseError::RoomNotFound(code));
    }

    #[tokio::test]
    async fn test_join_full_room_fails() {
        // テスト項目: 4 人のルームへの参加は RoomFull になる
        // given (前提条件):
        let repository = Arc::new(InMemoryRoomRepository::new());
        let room = create_room(repository.clone()).await;
        let usecase = JoinRoomUseCase::new(repository.clone());
        for name in ["bob", "carol", "dave"] {
            usecase
                .execute(room.code.clone(), player_name(name))
                .await
                .unwrap();
        }

        // when (操作):
        let result = usecase.execute(room.code.clone(), player_name("eve")).await;

        // then (期待する結果):
        assert_eq!(
            result.unwrap_err(),
            RoomUseCaseError::Room(RoomError::RoomFull { capacity: 4 })
        );
        let room = repository.find_by_code(&room.code).await.unwrap().unwrap();
        assert_eq!(room.players.len(), 4);
    }

    #[tokio::test]
    async fn test_join_started_room_fails() {
        // テスト項目: 開始済みのルームへの参加は GameAlreadyStarted になる
        // given (前提条件):
        let repository = Arc::new(InMemoryRoomRepository::new());
        let room = create_room(repository.clone()).await;
        let usecase = JoinRoomUseCase::new(repository.clone());
        usecase
            .execute(room.code.clone(), player_name("bob"))
            .await
            .unwrap();
        StartGameUseCase::new(repository.clone())
            .execute(room.code.clone())
            .await
            .unwrap();

        // when (操作):
        let result = usecase.execute(room.code.clone(), player_name("late")).await;

        // then (期待する結果):
        assert_eq!(
            result.unwrap_err(),
            RoomUseCaseError::Room(RoomError::GameAlreadyStarted)
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_joins_do_not_lose_updates() {
        // テスト項目: 同時参加しても参加者が上書きされず、ID と色が重複しない
        // given (前提条件):
        let repository = Arc::new(InMemoryRoomRepository::new());
        let room = create_room(repository.clone()).await;

        // when (操作): 3 人が同時に参加する
        let mut tasks = JoinSet::new();
        for name in ["bob", "carol", "dave"] {
            let usecase = JoinRoomUseCase::new(repository.clone());
            let code = room.code.clone();
            tasks.spawn(async move { usecase.execute(code, player_name(name)).await });
        }
        let mut joined_ids = HashSet::new();
        while let Some(result) = tasks.join_next().await {
            let (_, player_id) = result.unwrap().unwrap();
            joined_ids.insert(player_id);
        }

        // then (期待する結果): 全員が別々の席に着いている
        let room = repository.find_by_code(&room.code).await.unwrap().unwrap();
        assert_eq!(joined_ids.len(), 3);
        assert_eq!(room.players.len(), 4);
        let ids: HashSet<_> = room.players.iter().map(|p| p.id.clone()).collect();
        let colors: HashSet<_> = room.players.iter().map(|p| p.color).collect();
        assert_eq!(ids.len(), 4);
        assert_eq!(colors.len(), 4);
        assert!(joined_ids.is_subset(&ids));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_joins_never_overfill_room() {
        // テスト項目: 空席より多い同時参加では、超過分だけが RoomFull になる
        // given (前提条件):
        let repository = Arc::new(InMemoryRoomRepository::new());
        let room = create_room(repository.clone()).await;

        // when (操作): 空席 3 に対して 8 人が同時に参加する
        let mut tasks = JoinSet::new();
        for i in 0..8 {
            let usecase = JoinRoomUseCase::new(repository.clone());
            let code = room.code.clone();
            tasks.spawn(async move {
                usecase
                    .execute(code, player_name(&format!("guest{i}")))
                    .await
            });
        }
        let mut joined = 0;
        let mut full = 0;
        while let Some(result) = tasks.join_next().await {
            match result.unwrap() {
                Ok(_) => joined += 1,
                Err(RoomUseCaseError::Room(RoomError::RoomFull { .. })) => full += 1,
                Err(e) => panic!("unexpected error: {e}"),
            }
        }

        // then (期待する結果):
        assert_eq!(joined, 3);
        assert_eq!(full, 5);
        let room = repository.find_by_code(&room.code).await.unwrap().unwrap();
        assert_eq!(room.players.len(), 4);
    }
}
