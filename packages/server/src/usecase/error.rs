//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::{RepositoryError, RoomCode, RoomError, ValueObjectError};

/// ルーム操作のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoomUseCaseError {
    /// 指定コードのルームが存在しない
    #[error("Room not found: {0}")]
    RoomNotFound(RoomCode),

    /// ルームコードが既に使われている
    #[error("Room code already exists: {0}")]
    RoomCodeConflict(RoomCode),

    /// ドメインの状態遷移ルール違反
    #[error(transparent)]
    Room(#[from] RoomError),

    /// 同時更新が続き、更新をリトライ上限まで適用できなかった
    #[error("Room {0} is busy, please retry")]
    Contention(RoomCode),

    /// ID・コードの生成に失敗した
    #[error("Failed to generate identifier: {0}")]
    Generation(#[from] ValueObjectError),

    /// Repository のエラー
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// チャット操作のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChatUseCaseError {
    /// Repository のエラー
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}
