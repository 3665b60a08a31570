use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use tracing::Level;

use unobot::bots::registry::is_human_spec;
use unobot::visualize::{HELP_TEXT, render_state};
use unobot::{ConsoleNarrator, GameBuilder, GameOutcome, SilentNarrator, create_bot_from_spec};

const DEFAULT_SEED: u64 = 0xDEC0_1DED_5EED_F00D;
const EXIT_SUCCESS: u8 = 0;
const EXIT_FAILURE: u8 = 1;
const EXIT_CANCELLED: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "uno", about = "Play UNO in the console against automated players.")]
struct Args {
    /// Seed for shuffling and for automated players without their own seed
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Cards dealt to each player
    #[arg(long = "hand-size", default_value_t = unobot::card::HAND_SIZE)]
    hand_size: usize,

    /// Shuffle the draw pile after the discard pile is recycled into it
    #[arg(long = "reshuffle-on-recycle")]
    reshuffle_on_recycle: bool,

    /// Stop after this many rounds
    #[arg(long = "max-rounds")]
    max_rounds: Option<usize>,

    /// Hide the turn-by-turn narration
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,

    /// Print engine diagnostics and the final table summary to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Seats in turn order: human[:name] or ai[:seed] (2-10 total)
    seats: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);
    let (code, message) = closing(&run(args));
    if code == EXIT_FAILURE {
        eprintln!("{message}");
    } else {
        println!("{message}");
    }
    ExitCode::from(code)
}

/// Exit status and last line for how the session ended. Only a finished game
/// gets the farewell.
fn closing(result: &Result<GameOutcome, Box<dyn Error>>) -> (u8, String) {
    match result {
        Ok(GameOutcome::Won { .. }) | Ok(GameOutcome::RoundLimit { .. }) => {
            (EXIT_SUCCESS, String::from("Thank you for playing UNO!"))
        }
        Ok(GameOutcome::Cancelled { rounds }) => (
            EXIT_CANCELLED,
            format!("\nGame ended by a player after {rounds} rounds. See you next time!"),
        ),
        Err(err) => (EXIT_FAILURE, format!("Error: {err}")),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<GameOutcome, Box<dyn Error>> {
    let seats = if args.seats.is_empty() {
        vec![String::from("human"), String::from("ai")]
    } else {
        args.seats
    };

    let mut builder = GameBuilder::new()
        .with_seed(args.seed)
        .with_hand_size(args.hand_size)
        .with_reshuffle_on_recycle(args.reshuffle_on_recycle);
    if let Some(limit) = args.max_rounds {
        builder = builder.with_max_rounds(limit);
    }
    builder = if args.quiet {
        builder.with_narrator(SilentNarrator)
    } else {
        builder.with_narrator(ConsoleNarrator::stdout())
    };
    for (index, spec) in seats.iter().enumerate() {
        let (name, bot) = create_bot_from_spec(spec, index, args.seed);
        builder = builder.with_boxed_player(name, bot);
    }

    let mut game = builder.build()?;
    if seats.iter().any(|spec| is_human_spec(spec)) {
        println!("{HELP_TEXT}\n");
    }
    let outcome = game.run()?;
    if args.verbose {
        eprint!("{}", render_state(&game.state_view()));
    }
    match &outcome {
        GameOutcome::Won {
            name,
            rounds,
            points,
            ..
        } => {
            println!("\n{name} won after {rounds} rounds, scoring {points} points.");
            for (player, left) in game.scores() {
                println!("  {player:<20} | {left:>5} left in hand");
            }
        }
        GameOutcome::RoundLimit { rounds } => {
            println!("\nStopped after {rounds} rounds without a winner.");
        }
        GameOutcome::Cancelled { .. } => {}
    }
    Ok(outcome)
}
