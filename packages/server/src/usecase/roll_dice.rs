//! UseCase: サイコロ処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RollDiceUseCase::execute() メソッド
//! - 出目の記録と手番の巡回
//!
//! ### なぜこのテストが必要か
//! - 手番のプレイヤー以外はロールできないこと（単一行動者）を保証する
//! - 失敗したロールが `last_roll` や `current_turn` を変更しないことを保証する
//!
//! ### どのような状況を想定しているか
//! - 正常系：全員が順にロールし、最初のプレイヤーに手番が戻る
//! - 異常系：存在しないルーム、開始前、手番違い

use std::sync::Arc;

use crate::domain::{DiceValue, PlayerId, Room, RoomCode, RoomRepository};

use super::{error::RoomUseCaseError, room_update::update_room};

/// サイコロのユースケース
pub struct RollDiceUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl RollDiceUseCase {
    /// 新しい RollDiceUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// サイコロを振る
    ///
    /// # Arguments
    ///
    /// * `room_code` - ルームコード
    /// * `player_id` - ロールするプレイヤー（手番である必要がある）
    ///
    /// # Returns
    ///
    /// * `Ok((DiceValue, Room))` - 出目と、手番が次に移ったルーム
    /// * `Err(RoomUseCaseError)` - ロール失敗
    pub async fn execute(
        &self,
        room_code: RoomCode,
        player_id: PlayerId,
    ) -> Result<(DiceValue, Room), RoomUseCaseError> {
        let roll = DiceValue::roll(&mut rand::rng());

        let (room, ()) = update_room(self.repository.as_ref(), &room_code, |room| {
            room.roll_dice(&player_id, roll)
        })
        .await?;

        tracing::info!(
            "Player {} rolled {} in room '{}', next turn: {}",
            player_id,
            roll.value(),
            room.code,
            room.current_turn
                .as_ref()
                .map(PlayerId::as_str)
                .unwrap_or("-")
        );
        Ok((roll, room))
    }
}
