//! UNO rules engine and turn loop for console play with human and automated seats.

pub mod action;
pub mod bot;
pub mod bots;
pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod io;
pub mod pile;
pub mod rotation;
pub mod score;
pub mod state;
pub mod visualize;

pub use crate::action::{Effect, PlayerId, TurnOutcome};
pub use crate::bot::Bot;
pub use crate::bots::{
    HumanBot, RandomBot, ScriptedBot, SharedLines, create_bot_from_spec, label_for_spec,
};
pub use crate::card::{Card, CardKind, Color, Rank, full_deck, is_valid_play};
pub use crate::error::{CardError, EmptyPile, GameError, InputError};
pub use crate::game::{Game, GameBuilder, GameConfig, GameOutcome};
pub use crate::hand::Hand;
pub use crate::io::{ConsoleNarrator, EventLog, GameEvent, Narrator, SilentNarrator};
pub use crate::pile::{Deck, Drawn, Pile};
pub use crate::rotation::{Direction, Rotation};
pub use crate::score::winner_points;
pub use crate::state::{GameSettings, GameStateView, GameStatus, PlayerPublicState, TurnPhase};
pub use crate::visualize::{describe_event, render_hand, render_state};
