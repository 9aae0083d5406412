//! UseCase: ゲーム開始処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - StartGameUseCase::execute() メソッド
//! - waiting → playing の遷移と最初の手番の決定
//!
//! ### どのような状況を想定しているか
//! - 正常系：2 人以上での開始（最初の参加者が先手）
//! - 異常系：存在しないルーム、1 人での開始、二重開始

use std::sync::Arc;

use crate::domain::{Room, RoomCode, RoomRepository};

use super::{error::RoomUseCaseError, room_update::update_room};

/// ゲーム開始のユースケース
pub struct StartGameUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl StartGameUseCase {
    /// 新しい StartGameUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// ゲーム開始を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Room)` - `playing` に遷移し、最初の参加者の手番になったルーム
    /// * `Err(RoomUseCaseError)` - 開始失敗
    pub async fn execute(&self, room_code: RoomCode) -> Result<Room, RoomUseCaseError> {
        let (room, ()) =
            update_room(self.repository.as_ref(), &room_code, |room| room.start()).await?;

        tracing::info!(
            "Game started in room '{}' with {} players, first turn: {}",
            room.code,
            room.players.len(),
            room.players[0].id
        );
        Ok(room)
    }
}
