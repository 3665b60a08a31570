use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CardError, GameError};

pub const DECK_SIZE: usize = 108;
pub const HAND_SIZE: usize = 7;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 10;
pub const MAX_NUMBER: u8 = 9;
pub const COPIES_PER_COLORED_CARD: usize = 2;
pub const COPIES_PER_WILD_CARD: usize = 4;

/// One of the four card colors.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
}

impl Color {
    pub const ALL: [Color; 4] = [Color::Red, Color::Green, Color::Blue, Color::Yellow];

    /// Position used when sorting cards; colorless cards sort before every color.
    fn sort_rank(self) -> u8 {
        match self {
            Color::Red => 1,
            Color::Green => 2,
            Color::Blue => 3,
            Color::Yellow => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Broad category of a card.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Numeric,
    Action,
    Wild,
}

/// Face value of a card.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl Rank {
    pub fn kind(self) -> CardKind {
        match self {
            Rank::Number(_) => CardKind::Numeric,
            Rank::Skip | Rank::Reverse | Rank::DrawTwo => CardKind::Action,
            Rank::Wild | Rank::WildDrawFour => CardKind::Wild,
        }
    }

    fn code(self) -> u8 {
        match self {
            Rank::Number(n) => n,
            Rank::Skip => 11,
            Rank::Reverse => 12,
            Rank::DrawTwo => 13,
            Rank::WildDrawFour => 21,
            Rank::Wild => 22,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Number(n) => write!(f, "{n}"),
            Rank::Skip => f.write_str("skip"),
            Rank::Reverse => f.write_str("reverse"),
            Rank::DrawTwo => f.write_str("draw2"),
            Rank::Wild => f.write_str("wild"),
            Rank::WildDrawFour => f.write_str("draw4"),
        }
    }
}

/// A single UNO card.
///
/// The color is present exactly when the card is not wild; every constructor
/// upholds this, so a `Card` value is always a real card.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
pub struct Card {
    rank: Rank,
    color: Option<Color>,
}

impl Card {
    /// Builds a card from loose parts, rejecting combinations that do not exist.
    pub fn new(kind: CardKind, rank: Rank, color: Option<Color>) -> Result<Self, CardError> {
        if rank.kind() != kind {
            return Err(CardError::KindMismatch { kind, rank });
        }
        if let Rank::Number(n) = rank {
            if n > MAX_NUMBER {
                return Err(CardError::NumberOutOfRange(n));
            }
        }
        match (kind, color) {
            (CardKind::Wild, Some(_)) => Err(CardError::UnexpectedColor(rank)),
            (CardKind::Wild, None) => Ok(Self { rank, color: None }),
            (_, None) => Err(CardError::MissingColor(rank)),
            (_, Some(color)) => Ok(Self {
                rank,
                color: Some(color),
            }),
        }
    }

    pub fn number(color: Color, value: u8) -> Result<Self, CardError> {
        Self::new(CardKind::Numeric, Rank::Number(value), Some(color))
    }

    pub fn skip(color: Color) -> Self {
        Self::colored(Rank::Skip, color)
    }

    pub fn reverse(color: Color) -> Self {
        Self::colored(Rank::Reverse, color)
    }

    pub fn draw_two(color: Color) -> Self {
        Self::colored(Rank::DrawTwo, color)
    }

    pub fn wild() -> Self {
        Self {
            rank: Rank::Wild,
            color: None,
        }
    }

    pub fn wild_draw_four() -> Self {
        Self {
            rank: Rank::WildDrawFour,
            color: None,
        }
    }

    fn colored(rank: Rank, color: Color) -> Self {
        Self {
            rank,
            color: Some(color),
        }
    }

    #[inline]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    #[inline]
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    #[inline]
    pub fn kind(&self) -> CardKind {
        self.rank.kind()
    }

    #[inline]
    pub fn is_numeric(&self) -> bool {
        self.kind() == CardKind::Numeric
    }

    #[inline]
    pub fn is_action(&self) -> bool {
        self.kind() == CardKind::Action
    }

    #[inline]
    pub fn is_wild(&self) -> bool {
        self.kind() == CardKind::Wild
    }

    /// Draw cards that could one day be chained; only the active stack handling looks at this.
    #[inline]
    pub fn is_stackable(&self) -> bool {
        matches!(self.rank, Rank::DrawTwo | Rank::WildDrawFour)
    }

    /// Standard UNO scoring value of a card left in hand.
    pub fn points(&self) -> u32 {
        match self.rank {
            Rank::Number(n) => u32::from(n),
            Rank::Skip | Rank::Reverse | Rank::DrawTwo => 20,
            Rank::Wild | Rank::WildDrawFour => 50,
        }
    }

    /// Checks whether this card may be played on `top` given the active color.
    ///
    /// Wild cards are always playable. On a wild top card the active color must
    /// be known and decides alone; otherwise color or rank must match.
    pub fn can_play_on(&self, top: &Card, active_color: Option<Color>) -> Result<bool, GameError> {
        if self.is_wild() {
            return Ok(true);
        }
        if top.is_wild() {
            let active = active_color.ok_or(GameError::MissingActiveColor)?;
            return Ok(self.color == Some(active));
        }
        Ok(self.color == top.color || self.rank == top.rank)
    }

    fn sort_key(&self) -> (u8, u8) {
        (self.color.map_or(0, Color::sort_rank), self.rank.code())
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.color {
            Some(color) => write!(f, "{}({})", self.rank, color),
            None => write!(f, "{}", self.rank),
        }
    }
}

/// Decides whether `played` is a legal move on top of `top`.
///
/// An empty move is a pass and always legal. More than one card is rejected
/// because simultaneous plays are not supported.
pub fn is_valid_play(
    top: &Card,
    played: &[Card],
    active_color: Option<Color>,
) -> Result<bool, GameError> {
    match played {
        [] => Ok(true),
        [card] => card.can_play_on(top, active_color),
        cards => Err(GameError::UnsupportedMultiPlay(cards.len())),
    }
}

/// Builds the full 108-card deck in deterministic order (unshuffled).
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for value in 1..=MAX_NUMBER {
        for color in Color::ALL {
            for _ in 0..COPIES_PER_COLORED_CARD {
                deck.push(Card {
                    rank: Rank::Number(value),
                    color: Some(color),
                });
            }
        }
    }
    for color in Color::ALL {
        deck.push(Card {
            rank: Rank::Number(0),
            color: Some(color),
        });
    }
    for rank in [Rank::Skip, Rank::Reverse, Rank::DrawTwo] {
        for color in Color::ALL {
            for _ in 0..COPIES_PER_COLORED_CARD {
                deck.push(Card::colored(rank, color));
            }
        }
    }
    for _ in 0..COPIES_PER_WILD_CARD {
        deck.push(Card::wild_draw_four());
    }
    for _ in 0..COPIES_PER_WILD_CARD {
        deck.push(Card::wild());
    }
    deck
}
