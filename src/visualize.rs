use std::fmt::Write;

use crate::card::Card;
use crate::io::GameEvent;
use crate::rotation::Direction;
use crate::state::{GameStateView, GameStatus};

pub const HELP_TEXT: &str = "\
At your turn, select a card to play by entering the number next to it when prompted. \
Alternatively, you can enter:
   0   to pass (draws a card for you)
   d   to display your hand
   h   to display this help message
   q   to exit the game";

/// Numbered, single-line listing of a hand (numbers start at 1).
pub fn render_hand(cards: &[Card]) -> String {
    if cards.is_empty() {
        return String::from("   (empty)");
    }
    let mut out = String::from("  ");
    for (idx, card) in cards.iter().enumerate() {
        let _ = write!(out, " {}. {}  ", idx + 1, card);
    }
    out.trim_end().to_string()
}

/// Multi-line table summary: piles, top card, direction and hand sizes.
pub fn render_state(state: &GameStateView) -> String {
    let mut out = String::new();
    let status = match state.status {
        GameStatus::Ongoing => String::from("Ongoing"),
        GameStatus::Finished { winner } => {
            let name = state
                .players
                .get(winner)
                .map_or("?", |player| player.name.as_str());
            format!("Finished (winner: {name})")
        }
        GameStatus::Cancelled => String::from("Cancelled"),
    };
    let _ = writeln!(out, "Game status: {status}");
    let _ = writeln!(out, "Round: {}", state.round);
    let _ = writeln!(
        out,
        "Draw pile: {}  |  Discard pile: {}  |  Active stack: {}",
        state.draw_pile_count, state.discard_pile_count, state.active_count
    );
    let top = state
        .top_card
        .map(|card| card.to_string())
        .unwrap_or_else(|| String::from("--"));
    let color = state
        .active_color
        .map(|color| color.name().to_ascii_uppercase())
        .unwrap_or_else(|| String::from("--"));
    let _ = writeln!(out, "Top card: {top}  |  Active color: {color}");
    let _ = writeln!(out, "Direction: {}", direction_label(state.direction));
    let _ = writeln!(out, "Players:");
    for player in &state.players {
        let current_tag = if player.is_current { " <- current" } else { "" };
        let _ = writeln!(
            out,
            "  [{}] {} - {} card(s){}",
            player.id, player.name, player.hand_size, current_tag
        );
    }
    out
}

/// One console line per narration event.
pub fn describe_event(event: &GameEvent) -> String {
    match event {
        GameEvent::GameStarted { players, hand_size } => format!(
            "Starting a {players}-player game of UNO! Each player has been dealt {hand_size} cards."
        ),
        GameEvent::RoundStarted {
            round,
            draw_pile,
            discard_pile,
            cards_in_play,
        } => format!(
            "\nROUND #{round}: the draw pile has {draw_pile} cards and the discard pile has {discard_pile} cards. Total cards in play: {cards_in_play}."
        ),
        GameEvent::TurnStarted {
            name,
            top_card,
            active_color,
            ..
        } => format!(
            "{name}'s turn. The active color is {} and the top card is {top_card}.",
            active_color.name().to_ascii_uppercase()
        ),
        GameEvent::ColorChosen { name, color, .. } => {
            format!("{name} chose {}.", color.name().to_ascii_uppercase())
        }
        GameEvent::CardPlayed { name, card, .. } => format!("{name} played {card}."),
        GameEvent::InvalidMove { name, cards, .. } => {
            let cards = cards
                .iter()
                .map(Card::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            format!("Not a valid move for {name} ({cards})! Please choose another card.")
        }
        GameEvent::CardDrawn { name, .. } => {
            format!("{name} drew a card and added it to their hand.")
        }
        GameEvent::DrawnCardPlayed { name, card, .. } => {
            format!("{name} had no playable card, drew {card} and played it.")
        }
        GameEvent::Skipped { name, .. } => format!("Skipping {name}!"),
        GameEvent::Reversed { direction } => format!(
            "Reversing gameplay direction, now {}!",
            direction_label(*direction)
        ),
        GameEvent::DrawPenalty { name, count, .. } => format!(
            "{name} draws {count} cards from the draw pile and skips their turn!"
        ),
        GameEvent::Recycled { cards } => format!(
            "The draw pile is empty! Moving {cards} cards from the discard pile back into it."
        ),
        GameEvent::GameOver {
            name,
            rounds,
            scores,
            ..
        } => {
            let mut out = format!("{name} is done after {rounds} rounds and wins the game!");
            for (player, points) in scores {
                let _ = write!(out, "\n  {player:<20} | {points:>5}");
            }
            out
        }
        GameEvent::Cancelled => String::from("Game cancelled."),
    }
}

fn direction_label(direction: Direction) -> &'static str {
    match direction {
        Direction::Clockwise => "clockwise",
        Direction::CounterClockwise => "counter-clockwise",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Color;
    use crate::state::{GameSettings, PlayerPublicState, TurnPhase};

    #[test]
    fn hand_listing_is_one_based() {
        let cards = [Card::wild(), Card::skip(Color::Red)];
        assert_eq!(render_hand(&cards), "   1. wild   2. skip(red)");
        assert_eq!(render_hand(&[]), "   (empty)");
    }

    #[test]
    fn state_summary_names_the_winner() {
        let players = ["Ann", "Bob"]
            .iter()
            .enumerate()
            .map(|(id, name)| PlayerPublicState {
                id,
                name: name.to_string(),
                hand_size: if id == 1 { 0 } else { 3 },
                is_current: id == 0,
                has_won: id == 1,
            })
            .collect();
        let state = GameStateView {
            settings: GameSettings::new(2, 7, 108).expect("valid settings"),
            phase: TurnPhase::Done,
            status: GameStatus::Finished { winner: 1 },
            round: 12,
            current_player: 0,
            direction: Direction::CounterClockwise,
            draw_pile_count: 80,
            discard_pile_count: 24,
            active_count: 1,
            top_card: Some(Card::reverse(Color::Green)),
            active_color: Some(Color::Green),
            players,
        };
        let text = render_state(&state);
        assert!(text.contains("Game status: Finished (winner: Bob)"));
        assert!(text.contains("Top card: reverse(green)  |  Active color: GREEN"));
        assert!(text.contains("Direction: counter-clockwise"));
        assert!(text.contains("  [0] Ann - 3 card(s) <- current"));
    }

    #[test]
    fn describes_turn_and_penalty() {
        let turn = GameEvent::TurnStarted {
            player: 0,
            name: "Ann".into(),
            top_card: Card::draw_two(Color::Blue),
            active_color: Color::Blue,
        };
        assert_eq!(
            describe_event(&turn),
            "Ann's turn. The active color is BLUE and the top card is draw2(blue)."
        );
        let penalty = GameEvent::DrawPenalty {
            player: 1,
            name: "Bo".into(),
            count: 4,
        };
        assert!(describe_event(&penalty).contains("draws 4 cards"));
    }
}
