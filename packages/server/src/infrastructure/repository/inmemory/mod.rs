//! インメモリ Repository 実装

pub mod chat;
pub mod room;

pub use chat::InMemoryChatRepository;
pub use room::InMemoryRoomRepository;
