//! Core domain models for the game server.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{
    error::RoomError,
    value_object::{
        Color, DiceValue, MessageContent, MessageId, PlayerId, PlayerName, RoomCode, RoomId,
        Timestamp, Tokens,
    },
};

/// Number of seats in every room
pub const MAX_PLAYERS: usize = 4;

/// Players required before a game can start
pub const MIN_PLAYERS_TO_START: usize = 2;

/// Lifecycle state of a room. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    Waiting,
    Playing,
    Finished,
}

impl RoomStatus {
    fn rank(self) -> u8 {
        match self {
            RoomStatus::Waiting => 0,
            RoomStatus::Playing => 1,
            RoomStatus::Finished => 2,
        }
    }

    /// Move to `next`, rejecting anything that is not a forward step.
    pub fn transition_to(self, next: RoomStatus) -> Result<RoomStatus, RoomError> {
        if next.rank() <= self.rank() {
            return Err(RoomError::InvalidStatusTransition {
                from: self,
                to: next,
            });
        }
        Ok(next)
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RoomStatus::Waiting => "waiting",
            RoomStatus::Playing => "playing",
            RoomStatus::Finished => "finished",
        };
        f.write_str(s)
    }
}

/// Represents one game session and its seated players
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Storage identity, assigned before the first write
    pub id: RoomId,
    /// Join code shared with other players
    pub code: RoomCode,
    /// Id of the player who created the room
    pub created_by: PlayerId,
    pub status: RoomStatus,
    pub max_players: usize,
    /// Seated players in join order, which is also turn order
    pub players: Vec<Player>,
    /// Player allowed to roll next; unset until the game starts
    pub current_turn: Option<PlayerId>,
    pub last_roll: Option<DiceValue>,
    pub created_at: Timestamp,
    /// Storage revision, bumped by the repository on every update
    pub version: u64,
}

impl Room {
    /// Create a waiting room with the creator seated first.
    pub fn create(
        id: RoomId,
        code: RoomCode,
        creator_name: PlayerName,
        created_at: Timestamp,
    ) -> Self {
        let creator = Player::new(
            PlayerId::for_seat(&id, 0),
            creator_name,
            Color::next_available(&[]),
        );
        Self {
            created_by: creator.id.clone(),
            id,
            code,
            status: RoomStatus::Waiting,
            max_players: MAX_PLAYERS,
            players: vec![creator],
            current_turn: None,
            last_roll: None,
            created_at,
            version: 0,
        }
    }

    /// Seat a new player.
    ///
    /// # Errors
    ///
    /// * `RoomError::GameAlreadyStarted` if the room is no longer waiting
    /// * `RoomError::RoomFull` if every seat is taken
    pub fn join(&mut self, name: PlayerName) -> Result<&Player, RoomError> {
        if self.status != RoomStatus::Waiting {
            return Err(RoomError::GameAlreadyStarted);
        }
        if self.is_full() {
            return Err(RoomError::RoomFull {
                capacity: self.max_players,
            });
        }

        let index = self.players.len();
        let player = Player::new(PlayerId::for_seat(&self.id, index), name, self.next_color());
        self.players.push(player);
        Ok(&self.players[index])
    }

    /// Start the game; the first joiner takes the first turn.
    ///
    /// # Errors
    ///
    /// * `RoomError::GameAlreadyStarted` if the room is no longer waiting
    /// * `RoomError::NotEnoughPlayers` if fewer than two players are seated
    pub fn start(&mut self) -> Result<(), RoomError> {
        if self.status != RoomStatus::Waiting {
            return Err(RoomError::GameAlreadyStarted);
        }
        if self.players.len() < MIN_PLAYERS_TO_START {
            return Err(RoomError::NotEnoughPlayers {
                required: MIN_PLAYERS_TO_START,
                current: self.players.len(),
            });
        }
        let first = self.players[0].id.clone();

        self.status = self.status.transition_to(RoomStatus::Playing)?;
        self.current_turn = Some(first);
        Ok(())
    }

    /// Record a roll by `player_id` and pass the turn to the next seat.
    ///
    /// The turn always rotates; a six grants no extra roll.
    ///
    /// # Errors
    ///
    /// * `RoomError::GameNotStarted` if the room is not playing
    /// * `RoomError::NotYourTurn` if `player_id` does not hold the turn
    pub fn roll_dice(&mut self, player_id: &PlayerId, roll: DiceValue) -> Result<(), RoomError> {
        if self.status != RoomStatus::Playing {
            return Err(RoomError::GameNotStarted);
        }
        if self.current_turn.as_ref() != Some(player_id) {
            return Err(RoomError::NotYourTurn(player_id.clone()));
        }
        let Some(index) = self.seat_of(player_id) else {
            return Err(RoomError::NotYourTurn(player_id.clone()));
        };
        let next = self.players[(index + 1) % self.players.len()].id.clone();

        self.last_roll = Some(roll);
        self.current_turn = Some(next);
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.players.len() >= self.max_players
    }

    /// Color for the next player to join
    pub fn next_color(&self) -> Color {
        let taken: Vec<Color> = self.players.iter().map(|p| p.color).collect();
        Color::next_available(&taken)
    }

    /// Join index of a player
    pub fn seat_of(&self, player_id: &PlayerId) -> Option<usize> {
        self.players.iter().position(|p| &p.id == player_id)
    }
}

/// A participant seated in a room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: PlayerName,
    pub color: Color,
    pub tokens: Tokens,
    pub is_bot: bool,
}

impl Player {
    /// Create a human player with every token in base
    pub fn new(id: PlayerId, name: PlayerName, color: Color) -> Self {
        Self {
            id,
            name,
            color,
            tokens: Tokens::in_base(),
            is_bot: false,
        }
    }
}

/// A chat line posted to a room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub room_code: RoomCode,
    pub player_id: Option<PlayerId>,
    pub player_name: Option<PlayerName>,
    pub content: MessageContent,
    pub sent_at: Timestamp,
}
