//! UseCase: ルーム作成処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - CreateRoomUseCase::execute() メソッド
//! - コード指定あり／なしでのルーム作成、作成者の初期状態
//!
//! ### なぜこのテストが必要か
//! - ルームコードは参加用トークンを兼ねるため一意でなければならない
//! - 自動生成コードの衝突時に再生成されることを保証する
//!
//! ### どのような状況を想定しているか
//! - 正常系：コード自動生成、コード指定
//! - 異常系：指定コードの重複
//! - エッジケース：生成コードの衝突（再生成、上限到達）

use std::sync::Arc;

use ludo_shared::time::now_millis;

use crate::domain::{
    PlayerName, RepositoryError, Room, RoomCode, RoomCodeFactory, RoomIdFactory, RoomRepository,
    Timestamp,
};

use super::error::RoomUseCaseError;

/// 自動生成コードが衝突した場合の生成試行回数
pub const CODE_GENERATION_ATTEMPTS: usize = 8;

/// ルーム作成のユースケース
pub struct CreateRoomUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl CreateRoomUseCase {
    /// 新しい CreateRoomUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// ルーム作成を実行
    ///
    /// # Arguments
    ///
    /// * `player_name` - 作成者の表示名
    /// * `room_code` - 指定コード（`None` の場合は自動生成）
    ///
    /// # Returns
    ///
    /// * `Ok(Room)` - 作成者が `p0` として着席した待機中のルーム
    /// * `Err(RoomUseCaseError)` - 作成失敗
    pub async fn execute(
        &self,
        player_name: PlayerName,
        room_code: Option<RoomCode>,
    ) -> Result<Room, RoomUseCaseError> {
        if let Some(code) = room_code {
            return self.insert_room(code, player_name).await;
        }

        let mut attempt = 1;
        loop {
            let code = RoomCodeFactory::generate()?;
            match self.insert_room(code, player_name.clone()).await {
                Err(RoomUseCaseError::RoomCodeConflict(code))
                    if attempt < CODE_GENERATION_ATTEMPTS =>
                {
                    tracing::warn!("Generated room code '{}' collided, regenerating", code);
                    attempt += 1;
                }
                result => return result,
            }
        }
    }

    /// ルームを 1 回の書き込みで保存する（ID は事前に生成済み）
    async fn insert_room(
        &self,
        code: RoomCode,
        player_name: PlayerName,
    ) -> Result<Room, RoomUseCaseError> {
        let room = Room::create(
            RoomIdFactory::generate()?,
            code,
            player_name,
            Timestamp::new(now_millis()),
        );

        match self.repository.insert(room.clone()).await {
            Ok(()) => {
                tracing::info!(
                    "Room '{}' created by '{}' ({})",
                    room.code,
                    room.players[0].name,
                    room.created_by
                );
                Ok(room)
            }
            Err(RepositoryError::DuplicateCode(code)) => {
                Err(RoomUseCaseError::RoomCodeConflict(code))
            }
            Err(e) => Err(e.into()),
        }
    }
}
