use crate::card::{Card, Color};
use crate::error::GameError;
use crate::hand::Hand;

/// Interface for the decision maker sitting in a seat.
pub trait Bot {
    /// Picks the cards to play on `top_card`: none to pass, one to play.
    ///
    /// Implementations take the chosen card out of `hand` themselves. The
    /// engine puts it back if the move turns out to be illegal.
    fn decide_move(
        &mut self,
        hand: &mut Hand,
        top_card: &Card,
        active_color: Color,
    ) -> Result<Vec<Card>, GameError>;

    /// Picks the active color after this seat placed a wild card, or when the
    /// opening card is wild.
    fn choose_color(&mut self, hand: &Hand) -> Result<Color, GameError>;
}
