use crate::card::{Card, Color};
use crate::error::GameError;
use crate::pile::Pile;

/// A player's cards, kept sorted after every addition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hand {
    pile: Pile,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, card: Card) {
        self.pile.push(card);
        self.pile.sort();
    }

    pub fn add_all<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.pile.extend(cards);
        self.pile.sort();
    }

    /// Takes up to `count` copies of `card` out of the hand; 0 takes every copy.
    pub fn play(&mut self, card: &Card, count: usize) -> Vec<Card> {
        self.pile.remove_matching(card, count)
    }

    /// Takes the card at a zero-based position of the sorted hand.
    pub fn remove_at(&mut self, index: usize) -> Option<Card> {
        self.pile.remove_at(index)
    }

    /// Cards that may legally be played on `top`.
    pub fn playable(&self, top: &Card, active_color: Color) -> Result<Vec<Card>, GameError> {
        let mut playable = Vec::new();
        for card in self.pile.iter() {
            if card.can_play_on(top, Some(active_color))? {
                playable.push(*card);
            }
        }
        Ok(playable)
    }

    pub fn points(&self) -> u32 {
        self.pile.iter().map(Card::points).sum()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.pile.contains(card)
    }

    pub fn cards(&self) -> &[Card] {
        self.pile.cards()
    }

    pub fn len(&self) -> usize {
        self.pile.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pile.is_empty()
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        let mut hand = Self::new();
        hand.add_all(cards);
        hand
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(color: Color, value: u8) -> Card {
        Card::number(color, value).expect("valid number card")
    }

    #[test]
    fn hand_stays_sorted() {
        let mut hand = Hand::new();
        hand.add(num(Color::Yellow, 1));
        hand.add(Card::wild());
        hand.add_all([num(Color::Red, 8), num(Color::Red, 2)]);
        assert_eq!(
            hand.cards(),
            &[
                Card::wild(),
                num(Color::Red, 2),
                num(Color::Red, 8),
                num(Color::Yellow, 1)
            ]
        );
    }

    #[test]
    fn play_by_value_removes_copies() {
        let mut hand = Hand::from(vec![num(Color::Red, 2), num(Color::Red, 2), num(Color::Blue, 3)]);
        assert_eq!(hand.play(&num(Color::Red, 2), 1), vec![num(Color::Red, 2)]);
        assert_eq!(hand.len(), 2);
        assert!(hand.play(&num(Color::Green, 9), 1).is_empty());
        assert_eq!(hand.len(), 2);
    }

    #[test]
    fn play_with_zero_count_takes_every_copy() {
        let mut hand = Hand::from(vec![
            Card::skip(Color::Blue),
            num(Color::Red, 2),
            Card::skip(Color::Blue),
        ]);
        assert_eq!(
            hand.play(&Card::skip(Color::Blue), 0),
            vec![Card::skip(Color::Blue), Card::skip(Color::Blue)]
        );
        assert_eq!(hand.cards(), &[num(Color::Red, 2)]);
    }

    #[test]
    fn playable_filters_by_top_card() -> Result<(), GameError> {
        let hand = Hand::from(vec![
            num(Color::Blue, 5),
            num(Color::Green, 3),
            Card::wild_draw_four(),
        ]);
        let playable = hand.playable(&num(Color::Red, 5), Color::Red)?;
        assert_eq!(playable, vec![Card::wild_draw_four(), num(Color::Blue, 5)]);
        Ok(())
    }

    #[test]
    fn points_sum_card_values() {
        let hand = Hand::from(vec![num(Color::Blue, 5), Card::skip(Color::Red), Card::wild()]);
        assert_eq!(hand.points(), 75);
    }
}
