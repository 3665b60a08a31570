use std::collections::VecDeque;

use crate::bot::Bot;
use crate::card::{Card, Color};
use crate::error::GameError;
use crate::hand::Hand;

/// Deterministic bot replaying a queue of moves and colors.
///
/// Each queued move lists the cards to submit; cards not present in the hand
/// are left out. Once the queue is empty the bot passes, and once the color
/// queue is empty it picks red.
#[derive(Clone, Debug, Default)]
pub struct ScriptedBot {
    moves: VecDeque<Vec<Card>>,
    colors: VecDeque<Color>,
}

impl ScriptedBot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn play(mut self, card: Card) -> Self {
        self.moves.push_back(vec![card]);
        self
    }

    pub fn play_many(mut self, cards: Vec<Card>) -> Self {
        self.moves.push_back(cards);
        self
    }

    pub fn pass(mut self) -> Self {
        self.moves.push_back(Vec::new());
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.colors.push_back(color);
        self
    }
}

impl Bot for ScriptedBot {
    fn decide_move(
        &mut self,
        hand: &mut Hand,
        _top_card: &Card,
        _active_color: Color,
    ) -> Result<Vec<Card>, GameError> {
        let Some(wanted) = self.moves.pop_front() else {
            return Ok(Vec::new());
        };
        Ok(wanted
            .iter()
            .flat_map(|card| hand.play(card, 1))
            .collect())
    }

    fn choose_color(&mut self, _hand: &Hand) -> Result<Color, GameError> {
        Ok(self.colors.pop_front().unwrap_or(Color::Red))
    }
}
