//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::ValueObjectError;

/// Maximum length of a player display name (in characters)
pub const PLAYER_NAME_MAX_CHARS: usize = 32;

/// Maximum length of a room code supplied by a client
pub const ROOM_CODE_MAX_CHARS: usize = 32;

/// Maximum length of a player identifier
pub const PLAYER_ID_MAX_LEN: usize = 100;

/// Maximum length of a chat message (in characters)
pub const MESSAGE_CONTENT_MAX_CHARS: usize = 2000;

/// Room identifier value object.
///
/// Opaque storage identity of a room. Player ids are derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(String);

impl RoomId {
    /// Create a new RoomId.
    pub fn new(id: String) -> Result<Self, ValueObjectError> {
        if id.is_empty() {
            return Err(ValueObjectError::RoomIdEmpty);
        }
        Ok(Self(id))
    }

    /// Create a RoomId from a UUID, using its hyphenated form.
    pub fn from_uuid(uuid: uuid::Uuid) -> Result<Self, ValueObjectError> {
        Self::new(uuid.to_string())
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Room join code value object.
///
/// Short, human-shareable token that clients use to find a room.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomCode(String);

impl RoomCode {
    /// Create a new RoomCode.
    ///
    /// # Arguments
    ///
    /// * `code` - The join code string
    ///
    /// # Returns
    ///
    /// A Result containing the RoomCode or an error if validation fails
    pub fn new(code: String) -> Result<Self, ValueObjectError> {
        if code.is_empty() {
            return Err(ValueObjectError::RoomCodeEmpty);
        }
        let len = code.chars().count();
        if len > ROOM_CODE_MAX_CHARS {
            return Err(ValueObjectError::RoomCodeTooLong {
                max: ROOM_CODE_MAX_CHARS,
                actual: len,
            });
        }
        Ok(Self(code))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RoomCode {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for RoomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Player identifier value object.
///
/// Derived from the room id and the join index: `<room-id>-p<index>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(String);

impl PlayerId {
    /// Create a PlayerId from a client-supplied string.
    pub fn new(id: String) -> Result<Self, ValueObjectError> {
        if id.is_empty() {
            return Err(ValueObjectError::PlayerIdEmpty);
        }
        let len = id.len();
        if len > PLAYER_ID_MAX_LEN {
            return Err(ValueObjectError::PlayerIdTooLong {
                max: PLAYER_ID_MAX_LEN,
                actual: len,
            });
        }
        Ok(Self(id))
    }

    /// The id of the player seated at `index` (0-based join order).
    pub fn for_seat(room_id: &RoomId, index: usize) -> Self {
        Self(format!("{}-p{}", room_id.as_str(), index))
    }

    /// Wrap an id a client claims to hold, without validation.
    ///
    /// Only ever compared against stored ids; a malformed claim simply
    /// matches no seat.
    pub fn from_claim(id: String) -> Self {
        Self(id)
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PlayerId {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Player display name value object.
///
/// Free text without uniqueness constraint. Surrounding whitespace is trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerName(String);

impl PlayerName {
    /// Create a new PlayerName.
    pub fn new(name: String) -> Result<Self, ValueObjectError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValueObjectError::PlayerNameEmpty);
        }
        let len = trimmed.chars().count();
        if len > PLAYER_NAME_MAX_CHARS {
            return Err(ValueObjectError::PlayerNameTooLong {
                max: PLAYER_NAME_MAX_CHARS,
                actual: len,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PlayerName {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Player color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    /// Assignment order of colors.
    pub const PALETTE: [Color; 4] = [Color::Red, Color::Green, Color::Yellow, Color::Blue];

    /// First palette color not in `taken`.
    ///
    /// When every color is taken, falls back to `PALETTE[taken.len() % 4]`.
    pub fn next_available(taken: &[Color]) -> Color {
        Self::PALETTE
            .into_iter()
            .find(|color| !taken.contains(color))
            .unwrap_or(Self::PALETTE[taken.len() % Self::PALETTE.len()])
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position of a single token.
///
/// `-1` is the base, `0..=56` the track, `57` home.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct TokenPosition(i8);

impl TokenPosition {
    pub const BASE: TokenPosition = TokenPosition(-1);
    pub const TRACK_END: TokenPosition = TokenPosition(56);
    pub const HOME: TokenPosition = TokenPosition(57);

    /// Create a TokenPosition, rejecting values outside base..=home.
    pub fn new(value: i64) -> Result<Self, ValueObjectError> {
        if value < i64::from(Self::BASE.0) || value > i64::from(Self::HOME.0) {
            return Err(ValueObjectError::TokenPositionOutOfRange {
                min: Self::BASE.0,
                max: Self::HOME.0,
                actual: value,
            });
        }
        // Range checked above, so the cast is lossless.
        Ok(Self(value as i8))
    }

    pub fn value(&self) -> i8 {
        self.0
    }

    pub fn is_in_base(&self) -> bool {
        *self == Self::BASE
    }
}

impl TryFrom<i64> for TokenPosition {
    type Error = ValueObjectError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TokenPosition> for i64 {
    fn from(position: TokenPosition) -> Self {
        i64::from(position.0)
    }
}

/// Number of tokens each player owns
pub const TOKENS_PER_PLAYER: usize = 4;

/// The four tokens of a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tokens([TokenPosition; TOKENS_PER_PLAYER]);

impl Tokens {
    /// All tokens in base.
    pub fn in_base() -> Self {
        Self([TokenPosition::BASE; TOKENS_PER_PLAYER])
    }

    pub fn positions(&self) -> &[TokenPosition; TOKENS_PER_PLAYER] {
        &self.0
    }
}

impl Default for Tokens {
    fn default() -> Self {
        Self::in_base()
    }
}

/// A single die result, always within 1..=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DiceValue(u8);

impl DiceValue {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    pub fn new(value: u8) -> Result<Self, ValueObjectError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValueObjectError::DiceValueOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Roll a fair die.
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.random_range(Self::MIN..=Self::MAX))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for DiceValue {
    type Error = ValueObjectError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DiceValue> for u8 {
    fn from(value: DiceValue) -> Self {
        value.0
    }
}

/// Chat message identifier value object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(String);

impl MessageId {
    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Message content value object.
///
/// Represents the text of a chat message with validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageContent(String);

impl MessageContent {
    /// Create a new MessageContent.
    pub fn new(content: String) -> Result<Self, ValueObjectError> {
        if content.trim().is_empty() {
            return Err(ValueObjectError::MessageContentEmpty);
        }
        let len = content.chars().count();
        if len > MESSAGE_CONTENT_MAX_CHARS {
            return Err(ValueObjectError::MessageContentTooLong {
                max: MESSAGE_CONTENT_MAX_CHARS,
                actual: len,
            });
        }
        Ok(Self(content))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for MessageContent {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Timestamp value object.
///
/// Represents a Unix timestamp in milliseconds (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the inner i64 value.
    pub fn value(&self) -> i64 {
        self.0
    }
}
