//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。

pub mod create_room;
pub mod error;
pub mod get_room;
pub mod join_room;
pub mod list_messages;
pub mod post_message;
pub mod roll_dice;
pub mod room_update;
pub mod start_game;

pub use create_room::CreateRoomUseCase;
pub use error::{ChatUseCaseError, RoomUseCaseError};
pub use get_room::GetRoomUseCase;
pub use join_room::JoinRoomUseCase;
pub use list_messages::{CHAT_HISTORY_LIMIT, ListMessagesUseCase};
pub use post_message::PostMessageUseCase;
pub use roll_dice::RollDiceUseCase;
pub use start_game::StartGameUseCase;
