use rand::Rng;
use rand::seq::SliceRandom;

use crate::bot::Bot;
use crate::card::{Card, Color};
use crate::error::GameError;
use crate::hand::Hand;

/// Baseline bot that plays a uniformly random legal card, or passes.
pub struct RandomBot<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomBot<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Bot for RandomBot<R> {
    fn decide_move(
        &mut self,
        hand: &mut Hand,
        top_card: &Card,
        active_color: Color,
    ) -> Result<Vec<Card>, GameError> {
        let playable = hand.playable(top_card, active_color)?;
        let Some(card) = playable.choose(&mut self.rng).copied() else {
            return Ok(Vec::new());
        };
        Ok(hand.play(&card, 1))
    }

    fn choose_color(&mut self, _hand: &Hand) -> Result<Color, GameError> {
        Ok(Color::ALL[self.rng.gen_range(0..Color::ALL.len())])
    }
}
