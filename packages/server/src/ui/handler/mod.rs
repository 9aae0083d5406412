//! Handler modules for HTTP endpoints.

pub mod chat;
pub mod http;
pub mod room;

pub use chat::{list_messages, post_message};
pub use http::{health_check, root};
pub use room::{create_room, get_room, join_room, roll_dice, start_game};
