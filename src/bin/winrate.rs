use std::collections::HashMap;
use std::error::Error;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use plotters::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use unobot::bots::registry::is_human_spec;
use unobot::{GameBuilder, GameOutcome, create_bot_from_spec, label_for_spec};

/// Default base seed for deterministic runs.
const DEFAULT_SEED: u64 = 0xC0FFEE_u64 << 32 | 0x5EED_u64;

#[derive(Parser, Debug)]
#[command(
    name = "winrate",
    about = "Run many automated UNO games and plot per-seat win rates."
)]
struct Args {
    /// Number of games to simulate
    #[arg(short = 'g', long = "games", default_value_t = 200)]
    games: usize,

    /// Base RNG seed (deck and player RNGs are derived deterministically)
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Output chart file (png)
    #[arg(short = 'o', long = "out", default_value = "winrates.png")]
    out: PathBuf,

    /// Show a textual summary only (no chart)
    #[arg(long = "no-chart", action = ArgAction::SetTrue)]
    no_chart: bool,

    /// Safety cap on rounds per game; longer games count as unfinished
    #[arg(long = "max-rounds", default_value_t = 2000)]
    max_rounds: usize,

    /// Shuffle the draw pile whenever the discard pile is recycled
    #[arg(long = "reshuffle-on-recycle")]
    reshuffle_on_recycle: bool,

    /// Player specs, e.g. ai ai:7 ai (2-10 total)
    players: Vec<String>,
}

struct Tally {
    label: String,
    wins: usize,
    seats: usize,
    points: u64,
}

fn main() {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(std::io::stderr)
        .init();
    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    if args.players.len() < 2 {
        return Err("please provide at least two player specs (e.g., ai ai)".into());
    }
    // A human seat would block waiting for input.
    if args.players.iter().any(|spec| is_human_spec(spec)) {
        return Err("human players are not supported in winrate runs".into());
    }

    let mut tallies: HashMap<String, Tally> = HashMap::new();
    let mut unfinished = 0usize;
    let mut total_rounds = 0usize;
    let players_per_game = args.players.len();

    for game_idx in 0..args.games {
        // Permute seating each game for fairness.
        let mut order: Vec<usize> = (0..players_per_game).collect();
        let mut seat_rng = StdRng::seed_from_u64(args.seed ^ 0x9E37_79B9 ^ (game_idx as u64));
        order.shuffle(&mut seat_rng);

        let mut builder = GameBuilder::new()
            .with_seed(mix_seed(args.seed, game_idx as u64, 0x5EED_15))
            .with_max_rounds(args.max_rounds)
            .with_reshuffle_on_recycle(args.reshuffle_on_recycle);
        let mut labels = Vec::with_capacity(players_per_game);
        for (seat, src_idx) in order.iter().enumerate() {
            let spec = &args.players[*src_idx];
            let label = format!("{}#{}", label_for_spec(spec), src_idx + 1);
            let bot_seed = mix_seed(args.seed, game_idx as u64, seat as u64);
            let (_, bot) = create_bot_from_spec(spec, seat, bot_seed);
            builder = builder.with_boxed_player(label.clone(), bot);
            tallies
                .entry(label.clone())
                .or_insert_with(|| Tally {
                    label: label.clone(),
                    wins: 0,
                    seats: 0,
                    points: 0,
                })
                .seats += 1;
            labels.push(label);
        }

        let mut game = builder.build()?;
        match game.run()? {
            GameOutcome::Won {
                winner,
                rounds,
                points,
                ..
            } => {
                total_rounds += rounds;
                if let Some(tally) = tallies.get_mut(&labels[winner]) {
                    tally.wins += 1;
                    tally.points += u64::from(points);
                }
            }
            GameOutcome::RoundLimit { .. } | GameOutcome::Cancelled { .. } => unfinished += 1,
        }
    }

    let mut results: Vec<Tally> = tallies.into_values().collect();
    results.sort_by(|a, b| {
        rate(b)
            .partial_cmp(&rate(a))
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.label.cmp(&b.label))
    });

    println!("Win rates (per seat):");
    for tally in &results {
        let avg_points = if tally.seats > 0 {
            tally.points as f64 / tally.seats as f64
        } else {
            0.0
        };
        println!(
            "  {:<12}  {}/{}  ({:.2}%)   avg pts: {:>7.2}",
            tally.label,
            tally.wins,
            tally.seats,
            rate(tally) * 100.0,
            avg_points
        );
    }
    let finished = args.games - unfinished;
    if finished > 0 {
        println!(
            "\nAverage game length: {:.1} rounds",
            total_rounds as f64 / finished as f64
        );
    }
    if unfinished > 0 {
        println!("Note: {unfinished} game(s) hit the round limit without a winner.");
    }

    if !args.no_chart {
        render_bar_chart(&args.out, &results)?;
        println!("\nChart written to {}", args.out.display());
    }
    Ok(())
}

fn rate(tally: &Tally) -> f64 {
    if tally.seats > 0 {
        tally.wins as f64 / tally.seats as f64
    } else {
        0.0
    }
}

fn mix_seed(base: u64, a: u64, b: u64) -> u64 {
    let mut z =
        base ^ (a.wrapping_mul(0x9E37_79B97F4A7C15)) ^ (b.wrapping_mul(0xBF58_476D1CE4E5B9));
    z ^= z >> 12;
    z ^= z << 25;
    z ^= z >> 27;
    z
}

fn render_bar_chart(out: &PathBuf, data: &[Tally]) -> Result<(), Box<dyn Error>> {
    let labels: Vec<String> = data.iter().map(|tally| tally.label.clone()).collect();
    let values: Vec<f64> = data.iter().map(|tally| rate(tally) * 100.0).collect();
    let max_value = values.iter().cloned().fold(0.0_f64, f64::max);

    let root = BitMapBackend::new(out, (1000, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| format!("{e}"))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("UNO Win Rates (per seat)", ("sans-serif", 28).into_font())
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0..labels.len(), 0.0f64..(max_value * 1.1).max(10.0))
        .map_err(|e| format!("{e}"))?;

    chart
        .configure_mesh()
        .y_desc("Win rate (%)")
        .x_desc("Seat spec")
        .x_labels(labels.len())
        .x_label_formatter(&|idx| {
            if *idx < labels.len() {
                labels[*idx].clone()
            } else {
                idx.to_string()
            }
        })
        .y_label_formatter(&|v| format!("{v:.0}"))
        .light_line_style(WHITE.mix(0.0))
        .draw()
        .map_err(|e| format!("{e}"))?;

    chart
        .draw_series(values.iter().enumerate().map(|(i, value)| {
            Rectangle::new(
                [(i, 0.0), (i + 1, *value)],
                Palette99::pick(i).mix(0.8).filled(),
            )
        }))
        .map_err(|e| format!("{e}"))?;
    chart
        .draw_series(values.iter().enumerate().map(|(i, value)| {
            Text::new(
                format!("{value:.1}%"),
                (i, *value + max_value * 0.02),
                ("sans-serif", 14).into_font(),
            )
        }))
        .map_err(|e| format!("{e}"))?;

    root.present().map_err(|e| format!("{e}"))?;
    Ok(())
}
