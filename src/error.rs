use thiserror::Error;

use crate::action::PlayerId;
use crate::card::{CardKind, Rank};

/// Errors that can occur when manipulating the game state.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid card: {0}")]
    InvalidCard(#[from] CardError),
    #[error(transparent)]
    EmptyPile(#[from] EmptyPile),
    #[error("draw pile and discard pile are both empty")]
    DeckExhausted,
    #[error("playing {0} cards at once is not implemented")]
    UnsupportedMultiPlay(usize),
    #[error("top card is wild but no active color has been chosen")]
    MissingActiveColor,
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
    #[error("player index {0} is out of range")]
    InvalidPlayer(PlayerId),
    #[error("game has not been dealt yet")]
    NotStarted,
    #[error("game has already been dealt")]
    AlreadyStarted,
    #[error("game is already over")]
    GameOver,
    #[error("game cancelled at the player's request")]
    Cancelled,
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}

/// Card constructed from a kind/rank/color combination that does not exist.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CardError {
    #[error("number {0} is out of range (expected 0-9)")]
    NumberOutOfRange(u8),
    #[error("rank {rank:?} does not belong to {kind:?} cards")]
    KindMismatch { kind: CardKind, rank: Rank },
    #[error("{0:?} cards require a color")]
    MissingColor(Rank),
    #[error("{0:?} cards cannot carry a color")]
    UnexpectedColor(Rank),
}

/// Draw or peek on a pile without cards.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("cannot draw from an empty pile")]
pub struct EmptyPile;

/// Console input that does not name a command or a card in hand.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("invalid card number {0}, please try again")]
    CardOutOfRange(usize),
    #[error("invalid input '{0}'")]
    Unrecognized(String),
}
