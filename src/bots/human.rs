use std::cell::RefCell;
use std::io::{self, BufRead, Read, Stdin, Stdout, Write};
use std::rc::Rc;

use crate::bot::Bot;
use crate::card::{Card, Color};
use crate::error::GameError;
use crate::hand::Hand;
use crate::io::{Command, parse_color, parse_command};
use crate::visualize::{HELP_TEXT, render_hand};

/// Interactive bot that queries a human through a line-based console.
///
/// Quitting, or closing the input, cancels the game.
pub struct HumanBot<R: BufRead, W: Write> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanBot<R, W> {
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, GameError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Err(GameError::Cancelled);
        }
        Ok(line)
    }
}

impl HumanBot<SharedLines<Stdin>, Stdout> {
    /// Seat reading from the process-wide stdin buffer, so several human
    /// seats can take turns on the same terminal or pipe.
    pub fn stdio(name: impl Into<String>) -> Self {
        Self::new(name, SharedLines::new(io::stdin()), io::stdout())
    }
}

/// Line-at-a-time input that several seats may read from in turn.
pub trait LineSource {
    fn read_line(&self, buf: &mut String) -> io::Result<usize>;
}

impl LineSource for Stdin {
    fn read_line(&self, buf: &mut String) -> io::Result<usize> {
        Stdin::read_line(self, buf)
    }
}

impl<R: BufRead> LineSource for Rc<RefCell<R>> {
    fn read_line(&self, buf: &mut String) -> io::Result<usize> {
        self.borrow_mut().read_line(buf)
    }
}

/// Reader that pulls a single line from its source per refill and never
/// buffers ahead, leaving later lines for the other seats.
pub struct SharedLines<S: LineSource> {
    source: S,
    line: Vec<u8>,
    pos: usize,
}

impl<S: LineSource> SharedLines<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            line: Vec::new(),
            pos: 0,
        }
    }
}

impl<S: LineSource> BufRead for SharedLines<S> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        if self.pos >= self.line.len() {
            let mut line = String::new();
            self.source.read_line(&mut line)?;
            self.line = line.into_bytes();
            self.pos = 0;
        }
        Ok(&self.line[self.pos..])
    }

    fn consume(&mut self, amt: usize) {
        self.pos = (self.pos + amt).min(self.line.len());
    }
}

impl<S: LineSource> Read for SharedLines<S> {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        let available = self.fill_buf()?;
        let n = available.len().min(out.len());
        out[..n].copy_from_slice(&available[..n]);
        self.consume(n);
        Ok(n)
    }
}

impl<R: BufRead, W: Write> Bot for HumanBot<R, W> {
    fn decide_move(
        &mut self,
        hand: &mut Hand,
        top_card: &Card,
        active_color: Color,
    ) -> Result<Vec<Card>, GameError> {
        writeln!(
            self.output,
            "{}'S CURRENT HAND (top card {top_card}, active color {}):",
            self.name.to_uppercase(),
            active_color.name().to_ascii_uppercase()
        )?;
        writeln!(self.output, "{}", render_hand(hand.cards()))?;
        loop {
            let line = self.read_line("Please select a card to play from your hand: ")?;
            match parse_command(&line, hand.len()) {
                Ok(Command::Play(index)) => {
                    if let Some(card) = hand.remove_at(index) {
                        return Ok(vec![card]);
                    }
                }
                Ok(Command::Pass) => return Ok(Vec::new()),
                Ok(Command::ShowHand) => writeln!(self.output, "{}", render_hand(hand.cards()))?,
                Ok(Command::Help) => writeln!(self.output, "{HELP_TEXT}")?,
                Ok(Command::Quit) => {
                    writeln!(self.output, "Exiting the game.")?;
                    return Err(GameError::Cancelled);
                }
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    fn choose_color(&mut self, _hand: &Hand) -> Result<Color, GameError> {
        loop {
            let line = self.read_line("Choose the active color (r/g/b/y): ")?;
            if let Some(color) = parse_color(&line) {
                return Ok(color);
            }
            if matches!(parse_command(&line, 0), Ok(Command::Quit)) {
                writeln!(self.output, "Exiting the game.")?;
                return Err(GameError::Cancelled);
            }
            writeln!(self.output, "Unknown color '{}'.", line.trim())?;
        }
    }
}
