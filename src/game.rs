use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, info, warn};

use crate::action::{Effect, PlayerId, TurnOutcome};
use crate::bot::Bot;
use crate::card::{Card, Color, HAND_SIZE, full_deck, is_valid_play};
use crate::error::GameError;
use crate::hand::Hand;
use crate::io::{GameEvent, Narrator, SilentNarrator};
use crate::pile::{Deck, Pile};
use crate::rotation::{Direction, Rotation};
use crate::score::{standings, winner_points};
use crate::state::{GameSettings, GameStateView, GameStatus, PlayerPublicState, TurnPhase};

const DEFAULT_SEED: u64 = 0x5EED_CA4D_0F00_0001;

/// Configuration required to bootstrap a game instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: u64,
    pub hand_size: usize,
    /// Shuffle the draw pile after the discard pile has been moved into it.
    /// Off by default: the recycled cards keep their discard order.
    pub reshuffle_on_recycle: bool,
    /// Stop [`Game::run`] after this many completed rounds.
    pub max_rounds: Option<usize>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            hand_size: HAND_SIZE,
            reshuffle_on_recycle: false,
            max_rounds: None,
        }
    }
}

/// How a call to [`Game::run`] ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Won {
        winner: PlayerId,
        name: String,
        rounds: usize,
        points: u32,
    },
    Cancelled {
        rounds: usize,
    },
    RoundLimit {
        rounds: usize,
    },
}

/// Builder that seats players and enables deterministic deck injection for tests.
pub struct GameBuilder {
    config: GameConfig,
    deck: Option<Vec<Card>>,
    seats: Vec<(String, Box<dyn Bot>)>,
    narrator: Box<dyn Narrator>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            deck: None,
            seats: Vec::new(),
            narrator: Box::new(SilentNarrator),
        }
    }

    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Use `deck` as the draw pile, unshuffled; the last card is drawn first.
    pub fn with_deck(mut self, deck: Vec<Card>) -> Self {
        self.deck = Some(deck);
        self
    }

    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.config.hand_size = hand_size;
        self
    }

    pub fn with_reshuffle_on_recycle(mut self, reshuffle: bool) -> Self {
        self.config.reshuffle_on_recycle = reshuffle;
        self
    }

    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.config.max_rounds = Some(max_rounds);
        self
    }

    pub fn with_narrator(mut self, narrator: impl Narrator + 'static) -> Self {
        self.narrator = Box::new(narrator);
        self
    }

    /// Seats a player; seating order is turn order.
    pub fn with_player(self, name: impl Into<String>, bot: impl Bot + 'static) -> Self {
        self.with_boxed_player(name, Box::new(bot))
    }

    pub fn with_boxed_player(mut self, name: impl Into<String>, bot: Box<dyn Bot>) -> Self {
        self.seats.push((name.into(), bot));
        self
    }

    pub fn build(self) -> Result<Game, GameError> {
        Game::from_builder(self)
    }
}

struct Seat {
    name: String,
    hand: Hand,
    bot: Box<dyn Bot>,
}

/// Core UNO engine: owns the piles, the hands and the rotation for one game.
pub struct Game {
    settings: GameSettings,
    seats: Vec<Seat>,
    rotation: Rotation,
    deck: Deck,
    active: Pile,
    active_color: Option<Color>,
    status: GameStatus,
    phase: TurnPhase,
    round: usize,
    max_rounds: Option<usize>,
    rng: StdRng,
    narrator: Box<dyn Narrator>,
}

impl Game {
    pub fn builder() -> GameBuilder {
        GameBuilder::new()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn settings(&self) -> GameSettings {
        self.settings
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Completed rounds; rejected moves do not count.
    pub fn round(&self) -> usize {
        self.round
    }

    pub fn current_player(&self) -> PlayerId {
        self.rotation.current()
    }

    pub fn direction(&self) -> Direction {
        self.rotation.direction()
    }

    pub fn top_card(&self) -> Option<Card> {
        self.active.peek_top().ok().copied()
    }

    pub fn active_color(&self) -> Option<Color> {
        self.active_color
    }

    pub fn hand(&self, player: PlayerId) -> Result<&Hand, GameError> {
        self.seats
            .get(player)
            .map(|seat| &seat.hand)
            .ok_or(GameError::InvalidPlayer(player))
    }

    pub fn player_name(&self, player: PlayerId) -> Result<&str, GameError> {
        self.seats
            .get(player)
            .map(|seat| seat.name.as_str())
            .ok_or(GameError::InvalidPlayer(player))
    }

    pub fn is_finished(&self) -> bool {
        !matches!(self.status, GameStatus::Ongoing)
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.status {
            GameStatus::Finished { winner } => Some(winner),
            _ => None,
        }
    }

    /// Points left in each seat's hand, lowest first.
    pub fn scores(&self) -> Vec<(String, u32)> {
        let names: Vec<String> = self.seats.iter().map(|seat| seat.name.clone()).collect();
        standings(&names, &self.remaining_points())
    }

    pub fn state_view(&self) -> GameStateView {
        let current = self.rotation.current();
        let players = self
            .seats
            .iter()
            .enumerate()
            .map(|(idx, seat)| PlayerPublicState {
                id: idx,
                name: seat.name.clone(),
                hand_size: seat.hand.len(),
                is_current: idx == current,
                has_won: self.winner() == Some(idx),
            })
            .collect();
        GameStateView {
            settings: self.settings,
            phase: self.phase,
            status: self.status,
            round: self.round,
            current_player: current,
            direction: self.rotation.direction(),
            draw_pile_count: self.deck.draw_pile().len(),
            discard_pile_count: self.deck.discard_pile().len(),
            active_count: self.active.len(),
            top_card: self.top_card(),
            active_color: self.active_color,
            players,
        }
    }

    /// Deals the hands and reveals the opening card.
    pub fn start(&mut self) -> Result<(), GameError> {
        if !matches!(self.phase, TurnPhase::Dealing) {
            return Err(GameError::AlreadyStarted);
        }
        let result = self.deal();
        self.guard(result)
    }

    /// Runs one move attempt of the current player through validation,
    /// effect resolution and rotation.
    pub fn play_turn(&mut self) -> Result<TurnOutcome, GameError> {
        match self.phase {
            TurnPhase::Dealing => return Err(GameError::NotStarted),
            TurnPhase::Done => return Err(GameError::GameOver),
            TurnPhase::AwaitingMove { .. } => {}
        }
        let result = self.take_turn();
        self.guard(result)
    }

    /// Deals if needed, then plays until someone wins, a player quits or the
    /// round limit is hit.
    pub fn run(&mut self) -> Result<GameOutcome, GameError> {
        if matches!(self.phase, TurnPhase::Dealing) {
            match self.start() {
                Ok(()) => {}
                Err(GameError::Cancelled) => return Ok(GameOutcome::Cancelled { rounds: 0 }),
                Err(err) => return Err(err),
            }
        }
        loop {
            if let Some(winner) = self.winner() {
                let remaining = self.remaining_points();
                return Ok(GameOutcome::Won {
                    winner,
                    name: self.seats[winner].name.clone(),
                    rounds: self.round,
                    points: winner_points(&remaining, winner),
                });
            }
            if matches!(self.status, GameStatus::Cancelled) {
                return Ok(GameOutcome::Cancelled { rounds: self.round });
            }
            if self.max_rounds.is_some_and(|limit| self.round >= limit) {
                debug!(rounds = self.round, "round limit reached");
                return Ok(GameOutcome::RoundLimit { rounds: self.round });
            }
            match self.play_turn() {
                Ok(_) => {}
                Err(GameError::Cancelled) => {
                    return Ok(GameOutcome::Cancelled { rounds: self.round });
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn from_builder(builder: GameBuilder) -> Result<Self, GameError> {
        let GameBuilder {
            config,
            deck,
            seats,
            narrator,
        } = builder;
        let mut rng = StdRng::seed_from_u64(config.seed);
        let deck = match deck {
            Some(deck) => deck,
            None => {
                let mut deck = full_deck();
                deck.shuffle(&mut rng);
                deck
            }
        };
        let mut settings = GameSettings::new(seats.len(), config.hand_size, deck.len())?;
        settings.reshuffle_on_recycle = config.reshuffle_on_recycle;

        let seats = seats
            .into_iter()
            .map(|(name, bot)| Seat {
                name,
                hand: Hand::new(),
                bot,
            })
            .collect::<Vec<_>>();

        Ok(Game {
            settings,
            rotation: Rotation::new(seats.len()),
            seats,
            deck: Deck::new(Pile::from(deck), Pile::new(), config.reshuffle_on_recycle),
            active: Pile::new(),
            active_color: None,
            status: GameStatus::Ongoing,
            phase: TurnPhase::Dealing,
            round: 0,
            max_rounds: config.max_rounds,
            rng,
            narrator,
        })
    }

    fn deal(&mut self) -> Result<(), GameError> {
        for _ in 0..self.settings.hand_size {
            for seat in self.rotation.seats() {
                let card = self.draw_card()?;
                self.seats[seat].hand.add(card);
            }
        }
        debug!(
            players = self.seats.len(),
            hand_size = self.settings.hand_size,
            "dealt hands"
        );
        self.narrate(GameEvent::GameStarted {
            players: self.seats.len(),
            hand_size: self.settings.hand_size,
        });

        let opening = self.draw_card()?;
        self.active.push(opening);
        let current = self.rotation.current();
        self.active_color = Some(self.color_for(current, &opening)?);
        self.phase = TurnPhase::AwaitingMove { player: current };
        Ok(())
    }

    fn take_turn(&mut self) -> Result<TurnOutcome, GameError> {
        let player = self.rotation.current();
        let top = *self.active.peek_top()?;
        let active_color = self.active_color.ok_or(GameError::MissingActiveColor)?;

        self.narrate(GameEvent::RoundStarted {
            round: self.round + 1,
            draw_pile: self.deck.draw_pile().len(),
            discard_pile: self.deck.discard_pile().len(),
            cards_in_play: self.cards_in_play(),
        });
        self.narrate(GameEvent::TurnStarted {
            player,
            name: self.seats[player].name.clone(),
            top_card: top,
            active_color,
        });

        let cards = {
            let seat = &mut self.seats[player];
            seat.bot.decide_move(&mut seat.hand, &top, active_color)?
        };
        let valid = match is_valid_play(&top, &cards, Some(active_color)) {
            Ok(valid) => valid,
            Err(err) => {
                self.seats[player].hand.add_all(cards);
                return Err(err);
            }
        };
        if !valid {
            warn!(player, cards = ?cards, "rejected illegal move");
            self.narrate(GameEvent::InvalidMove {
                player,
                name: self.seats[player].name.clone(),
                cards: cards.clone(),
            });
            self.seats[player].hand.add_all(cards.iter().copied());
            return Ok(TurnOutcome::Rejected { player, cards });
        }

        let outcome = match cards.first() {
            Some(&card) => {
                self.narrate(GameEvent::CardPlayed {
                    player,
                    name: self.seats[player].name.clone(),
                    card,
                });
                self.resolve(player, card)?;
                TurnOutcome::Played { player, card }
            }
            None => {
                let card = self.draw_card()?;
                if card.can_play_on(&top, Some(active_color))? {
                    self.narrate(GameEvent::DrawnCardPlayed {
                        player,
                        name: self.seats[player].name.clone(),
                        card,
                    });
                    self.resolve(player, card)?;
                    TurnOutcome::DrewAndPlayed { player, card }
                } else {
                    self.seats[player].hand.add(card);
                    self.narrate(GameEvent::CardDrawn {
                        player,
                        name: self.seats[player].name.clone(),
                    });
                    self.rotation.advance(false);
                    TurnOutcome::Drew { player }
                }
            }
        };

        self.round += 1;
        if self.seats[player].hand.is_empty() {
            self.finish(player);
        } else {
            self.phase = TurnPhase::AwaitingMove {
                player: self.rotation.current(),
            };
        }
        Ok(outcome)
    }

    /// Places `card` on the table, applies its effect and moves the rotation on.
    fn resolve(&mut self, player: PlayerId, card: Card) -> Result<(), GameError> {
        if card.is_stackable() {
            self.active.push(card);
        } else {
            let flushed = self.active.take_all();
            self.deck.discard(flushed);
            self.active.push(card);
        }
        self.active_color = Some(self.color_for(player, &card)?);
        let skip = self.apply_effect(card)?;
        self.rotation.advance(skip);
        Ok(())
    }

    /// Returns whether the next seat loses its turn.
    fn apply_effect(&mut self, card: Card) -> Result<bool, GameError> {
        let next = self.rotation.peek_next(false);
        match Effect::of(&card) {
            Effect::None => Ok(false),
            Effect::Skip => {
                self.narrate(GameEvent::Skipped {
                    player: next,
                    name: self.seats[next].name.clone(),
                });
                Ok(true)
            }
            Effect::Reverse if self.seats.len() > 2 => {
                self.rotation.reverse();
                self.narrate(GameEvent::Reversed {
                    direction: self.rotation.direction(),
                });
                Ok(false)
            }
            Effect::Reverse => {
                self.narrate(GameEvent::Skipped {
                    player: next,
                    name: self.seats[next].name.clone(),
                });
                Ok(true)
            }
            Effect::Draw(count) => {
                self.narrate(GameEvent::DrawPenalty {
                    player: next,
                    name: self.seats[next].name.clone(),
                    count,
                });
                for _ in 0..count {
                    let drawn = self.draw_card()?;
                    self.seats[next].hand.add(drawn);
                }
                debug!(player = next, count, "applied draw penalty");
                Ok(true)
            }
        }
    }

    /// Active color after `player` placed `card`: its own color, or the one
    /// the player picks for a wild card.
    fn color_for(&mut self, player: PlayerId, card: &Card) -> Result<Color, GameError> {
        if let Some(color) = card.color() {
            return Ok(color);
        }
        let color = {
            let seat = &mut self.seats[player];
            seat.bot.choose_color(&seat.hand)?
        };
        self.narrate(GameEvent::ColorChosen {
            player,
            name: self.seats[player].name.clone(),
            color,
        });
        Ok(color)
    }

    fn draw_card(&mut self) -> Result<Card, GameError> {
        let drawn = self.deck.draw(&mut self.rng)?;
        if drawn.recycled > 0 {
            self.narrate(GameEvent::Recycled {
                cards: drawn.recycled,
            });
        }
        Ok(drawn.card)
    }

    fn finish(&mut self, winner: PlayerId) {
        self.status = GameStatus::Finished { winner };
        self.phase = TurnPhase::Done;
        let scores = self.scores();
        info!(winner, rounds = self.round, "game over");
        self.narrate(GameEvent::GameOver {
            winner,
            name: self.seats[winner].name.clone(),
            rounds: self.round,
            scores,
        });
    }

    /// Marks the game as cancelled when a player asked to quit.
    fn guard<T>(&mut self, result: Result<T, GameError>) -> Result<T, GameError> {
        if matches!(result, Err(GameError::Cancelled)) {
            self.status = GameStatus::Cancelled;
            self.phase = TurnPhase::Done;
            self.narrate(GameEvent::Cancelled);
        }
        result
    }

    fn remaining_points(&self) -> Vec<u32> {
        self.seats.iter().map(|seat| seat.hand.points()).collect()
    }

    fn cards_in_play(&self) -> usize {
        self.seats.iter().map(|seat| seat.hand.len()).sum::<usize>()
            + self.deck.len()
            + self.active.len()
    }

    fn narrate(&mut self, event: GameEvent) {
        self.narrator.notify(&event);
    }
}
