use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::card::{Card, full_deck};
use crate::error::{EmptyPile, GameError};

/// Ordered stack of cards; the top is the end of the sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    pub fn new() -> Self {
        Self::default()
    }

    /// The full 108-card deck in deterministic order.
    pub fn full() -> Self {
        Self { cards: full_deck() }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn extend<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }

    pub fn draw(&mut self) -> Result<Card, EmptyPile> {
        self.cards.pop().ok_or(EmptyPile)
    }

    pub fn peek_top(&self) -> Result<&Card, EmptyPile> {
        self.cards.last().ok_or(EmptyPile)
    }

    /// Removes up to `limit` copies of `card`, or every copy when `limit` is 0.
    ///
    /// Missing copies are not an error; fewer (possibly zero) cards come back.
    pub fn remove_matching(&mut self, card: &Card, limit: usize) -> Vec<Card> {
        let limit = if limit == 0 { self.cards.len() } else { limit };
        let mut removed = Vec::new();
        while removed.len() < limit {
            let Some(position) = self.cards.iter().position(|c| c == card) else {
                break;
            };
            removed.push(self.cards.remove(position));
        }
        removed
    }

    pub fn remove_at(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    /// Empties the pile, returning its cards bottom first.
    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn sort(&mut self) {
        self.cards.sort();
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Read-only view of the cards, bottom first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl From<Vec<Card>> for Pile {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for Pile {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

/// A card taken from the draw pile, with the size of the recycle it needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Drawn {
    pub card: Card,
    /// Number of discards moved back into the draw pile first (0 when none).
    pub recycled: usize,
}

/// Draw pile plus discard pile, refilling the former from the latter on demand.
#[derive(Clone, Debug)]
pub struct Deck {
    draw_pile: Pile,
    discard_pile: Pile,
    reshuffle_on_recycle: bool,
}

impl Deck {
    pub fn new(draw_pile: Pile, discard_pile: Pile, reshuffle_on_recycle: bool) -> Self {
        Self {
            draw_pile,
            discard_pile,
            reshuffle_on_recycle,
        }
    }

    /// Draws the top card, recycling the discard pile when the draw pile is empty.
    ///
    /// Fails with [`GameError::DeckExhausted`] only when both piles are empty.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Drawn, GameError> {
        if let Ok(card) = self.draw_pile.draw() {
            return Ok(Drawn { card, recycled: 0 });
        }
        let recycled = self.recycle(rng);
        let card = self
            .draw_pile
            .draw()
            .map_err(|_| GameError::DeckExhausted)?;
        Ok(Drawn { card, recycled })
    }

    pub fn discard<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.discard_pile.extend(cards);
    }

    pub fn draw_pile(&self) -> &Pile {
        &self.draw_pile
    }

    pub fn discard_pile(&self) -> &Pile {
        &self.discard_pile
    }

    pub fn len(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draw_pile.is_empty() && self.discard_pile.is_empty()
    }

    fn recycle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let cards = self.discard_pile.take_all();
        let moved = cards.len();
        self.draw_pile.extend(cards);
        if self.reshuffle_on_recycle {
            self.draw_pile.shuffle(rng);
        }
        debug!(
            moved,
            reshuffled = self.reshuffle_on_recycle,
            "recycled discard pile into draw pile"
        );
        moved
    }
}
