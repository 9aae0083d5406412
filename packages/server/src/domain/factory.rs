//! Domain factories for creating domain entities and value objects.

use rand::Rng;

use super::{MessageId, RoomCode, RoomId, error::ValueObjectError};

/// Factory for generating RoomId instances.
///
/// Ids are generated before the room is stored, so creation is a single write.
pub struct RoomIdFactory;

impl RoomIdFactory {
    /// Generate a new RoomId with a random UUID v4.
    pub fn generate() -> Result<RoomId, ValueObjectError> {
        let uuid = uuid::Uuid::new_v4();
        RoomId::from_uuid(uuid)
    }
}

/// Factory for generating join codes.
pub struct RoomCodeFactory;

impl RoomCodeFactory {
    /// Characters a generated code is drawn from
    pub const ALPHABET: &'static [u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

    /// Length of a generated code
    pub const LENGTH: usize = 6;

    /// Generate a random join code.
    ///
    /// Codes double as unguessable join tokens, so each character is an
    /// independent draw from the thread-local CSPRNG.
    pub fn generate() -> Result<RoomCode, ValueObjectError> {
        Self::generate_with(&mut rand::rng())
    }

    /// Generate a join code from the given random source.
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Result<RoomCode, ValueObjectError> {
        let code: String = (0..Self::LENGTH)
            .map(|_| char::from(Self::ALPHABET[rng.random_range(0..Self::ALPHABET.len())]))
            .collect();
        RoomCode::new(code)
    }
}

/// Factory for chat message ids.
pub struct MessageIdFactory;

impl MessageIdFactory {
    pub fn generate() -> MessageId {
        MessageId::from_uuid(uuid::Uuid::new_v4())
    }
}
