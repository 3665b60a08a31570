use serde::Serialize;

use crate::action::PlayerId;
use crate::card::{Card, Color, MAX_PLAYERS, MIN_PLAYERS};
use crate::error::GameError;
use crate::rotation::Direction;

/// Global constants for a running game.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct GameSettings {
    pub num_players: usize,
    pub hand_size: usize,
    pub total_cards: usize,
    pub reshuffle_on_recycle: bool,
}

impl GameSettings {
    pub fn new(num_players: usize, hand_size: usize, total_cards: usize) -> Result<Self, GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
            return Err(GameError::InvalidConfiguration(
                "players must be between 2 and 10",
            ));
        }
        if hand_size == 0 {
            return Err(GameError::InvalidConfiguration(
                "must deal at least one card to each player",
            ));
        }
        if num_players * hand_size + 1 > total_cards {
            return Err(GameError::InvalidConfiguration(
                "deck does not contain enough cards to deal hands",
            ));
        }
        Ok(Self {
            num_players,
            hand_size,
            total_cards,
            reshuffle_on_recycle: false,
        })
    }
}

/// Public portion of a player's state that all opponents may observe.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct PlayerPublicState {
    pub id: PlayerId,
    pub name: String,
    pub hand_size: usize,
    pub is_current: bool,
    pub has_won: bool,
}

/// Status of the entire game.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Finished { winner: PlayerId },
    Cancelled,
}

/// Where the engine stands between calls.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub enum TurnPhase {
    Dealing,
    AwaitingMove { player: PlayerId },
    Done,
}

/// Snapshot of the table, free of references into the engine.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct GameStateView {
    pub settings: GameSettings,
    pub phase: TurnPhase,
    pub status: GameStatus,
    pub round: usize,
    pub current_player: PlayerId,
    pub direction: Direction,
    pub draw_pile_count: usize,
    pub discard_pile_count: usize,
    pub active_count: usize,
    pub top_card: Option<Card>,
    pub active_color: Option<Color>,
    pub players: Vec<PlayerPublicState>,
}

impl GameStateView {
    /// Cards on the table: every hand, both piles and the active stack.
    pub fn cards_in_play(&self) -> usize {
        self.players.iter().map(|p| p.hand_size).sum::<usize>()
            + self.draw_pile_count
            + self.discard_pile_count
            + self.active_count
    }
}
