use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use serde::Serialize;

use crate::action::PlayerId;
use crate::card::{Card, Color};
use crate::error::InputError;
use crate::rotation::Direction;
use crate::visualize::describe_event;

/// Narration emitted by the engine. Purely observational.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    GameStarted {
        players: usize,
        hand_size: usize,
    },
    RoundStarted {
        round: usize,
        draw_pile: usize,
        discard_pile: usize,
        cards_in_play: usize,
    },
    TurnStarted {
        player: PlayerId,
        name: String,
        top_card: Card,
        active_color: Color,
    },
    ColorChosen {
        player: PlayerId,
        name: String,
        color: Color,
    },
    CardPlayed {
        player: PlayerId,
        name: String,
        card: Card,
    },
    InvalidMove {
        player: PlayerId,
        name: String,
        cards: Vec<Card>,
    },
    CardDrawn {
        player: PlayerId,
        name: String,
    },
    DrawnCardPlayed {
        player: PlayerId,
        name: String,
        card: Card,
    },
    Skipped {
        player: PlayerId,
        name: String,
    },
    Reversed {
        direction: Direction,
    },
    DrawPenalty {
        player: PlayerId,
        name: String,
        count: usize,
    },
    Recycled {
        cards: usize,
    },
    GameOver {
        winner: PlayerId,
        name: String,
        rounds: usize,
        scores: Vec<(String, u32)>,
    },
    Cancelled,
}

/// Receives narration; never influences the game.
pub trait Narrator {
    fn notify(&mut self, event: &GameEvent);
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentNarrator;

impl Narrator for SilentNarrator {
    fn notify(&mut self, _event: &GameEvent) {}
}

/// Writes one human-readable line per event.
pub struct ConsoleNarrator<W: Write> {
    out: W,
}

impl<W: Write> ConsoleNarrator<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl ConsoleNarrator<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Narrator for ConsoleNarrator<W> {
    fn notify(&mut self, event: &GameEvent) {
        let _ = writeln!(self.out, "{}", describe_event(event));
    }
}

/// Records events behind a shared handle so they can be read after the game
/// took ownership of its narrator.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<GameEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<GameEvent> {
        self.events.borrow().clone()
    }
}

impl Narrator for EventLog {
    fn notify(&mut self, event: &GameEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

/// A line typed by an interactive player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Zero-based index into the sorted hand.
    Play(usize),
    Pass,
    ShowHand,
    Help,
    Quit,
}

/// Parses a prompt answer: `0` passes, `1..=hand_len` picks a card,
/// `d`, `h` and `q` show the hand, show help and quit.
pub fn parse_command(input: &str, hand_len: usize) -> Result<Command, InputError> {
    let trimmed = input.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "q" | "quit" => return Ok(Command::Quit),
        "d" => return Ok(Command::ShowHand),
        "h" | "help" => return Ok(Command::Help),
        _ => {}
    }
    let Ok(choice) = trimmed.parse::<usize>() else {
        return Err(InputError::Unrecognized(trimmed.to_string()));
    };
    match choice {
        0 => Ok(Command::Pass),
        n if n <= hand_len => Ok(Command::Play(n - 1)),
        n => Err(InputError::CardOutOfRange(n)),
    }
}

/// Accepts a color name or its first letter.
pub fn parse_color(input: &str) -> Option<Color> {
    match input.trim().to_ascii_lowercase().as_str() {
        "r" | "red" => Some(Color::Red),
        "g" | "green" => Some(Color::Green),
        "b" | "blue" => Some(Color::Blue),
        "y" | "yellow" => Some(Color::Yellow),
        _ => None,
    }
}
