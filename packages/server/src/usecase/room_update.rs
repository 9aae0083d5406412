//! 楽観的ロックによるルーム更新
//!
//! 読み込み → ドメイン操作 → 条件付き書き込み を 1 回の試行とし、
//! `RepositoryError::VersionConflict` の場合だけ読み込みからやり直します。
//! ドメインエラーはリトライせず、そのまま呼び出し元に返します。
//! ドメイン操作は検証に失敗すると何も書き込まないため、失敗した操作の途中状態は観測されません。

use crate::domain::{RepositoryError, Room, RoomCode, RoomError, RoomRepository};

use super::error::RoomUseCaseError;

/// 1 回の操作で許す書き込み試行回数
pub const MAX_UPDATE_ATTEMPTS: usize = 8;

/// `apply` をルームに適用し、条件付き更新で保存する
///
/// # Returns
///
/// * `Ok((Room, T))` - 保存後のルームと `apply` の戻り値
/// * `Err(RoomUseCaseError)` - ルームが存在しない、ドメインエラー、またはリトライ上限超過
pub(crate) async fn update_room<F, T>(
    repository: &dyn RoomRepository,
    code: &RoomCode,
    mut apply: F,
) -> Result<(Room, T), RoomUseCaseError>
where
    F: FnMut(&mut Room) -> Result<T, RoomError>,
{
    for attempt in 1..=MAX_UPDATE_ATTEMPTS {
        let mut room = repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| RoomUseCaseError::RoomNotFound(code.clone()))?;

        let output = apply(&mut room)?;

        match repository.update(room).await {
            Ok(stored) => return Ok((stored, output)),
            Err(RepositoryError::VersionConflict {
                expected, actual, ..
            }) => {
                tracing::warn!(
                    "Concurrent update on room '{}' (attempt {}/{}, read version {}, stored {})",
                    code,
                    attempt,
                    MAX_UPDATE_ATTEMPTS,
                    expected,
                    actual
                );
                tokio::task::yield_now().await;
            }
            Err(RepositoryError::RoomNotFound(code)) => {
                return Err(RoomUseCaseError::RoomNotFound(code));
            }
            Err(e) => return Err(e.into()),
        }
    }

    tracing::error!(
        "Giving up on room '{}' after {} conflicting updates",
        code,
        MAX_UPDATE_ATTEMPTS
    );
    Err(RoomUseCaseError::Contention(code.clone()))
}
