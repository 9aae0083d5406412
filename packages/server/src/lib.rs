//! Ludo World game server library.
//!
//! Rooms, player seating, turn order and dice rolls for a multiplayer Ludo
//! board game, plus a small room-scoped chat, served over HTTP.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::ServerConfig;
pub use ui::run as run_server;
