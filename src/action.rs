use serde::Serialize;

use crate::card::{Card, Rank};

/// Zero-based index of a player within the game.
pub type PlayerId = usize;

/// Side effect triggered by the rank of a played card.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum Effect {
    None,
    Skip,
    Reverse,
    Draw(usize),
}

impl Effect {
    pub fn of(card: &Card) -> Self {
        match card.rank() {
            Rank::Skip => Effect::Skip,
            Rank::Reverse => Effect::Reverse,
            Rank::DrawTwo => Effect::Draw(2),
            Rank::WildDrawFour => Effect::Draw(4),
            Rank::Number(_) | Rank::Wild => Effect::None,
        }
    }
}

/// Result of a single call to [`crate::Game::play_turn`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum TurnOutcome {
    /// The submitted card was illegal; it went back to the hand and the same
    /// player moves again. Not counted as a round.
    Rejected { player: PlayerId, cards: Vec<Card> },
    /// The player played a card from hand.
    Played { player: PlayerId, card: Card },
    /// The player passed, drew a legal card and it was played immediately.
    DrewAndPlayed { player: PlayerId, card: Card },
    /// The player passed and kept the drawn card.
    Drew { player: PlayerId },
}

impl TurnOutcome {
    pub fn player(&self) -> PlayerId {
        match self {
            TurnOutcome::Rejected { player, .. }
            | TurnOutcome::Played { player, .. }
            | TurnOutcome::DrewAndPlayed { player, .. }
            | TurnOutcome::Drew { player } => *player,
        }
    }

    /// Whether the turn counted as a completed round.
    pub fn completed(&self) -> bool {
        !matches!(self, TurnOutcome::Rejected { .. })
    }
}
