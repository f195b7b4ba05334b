//! AI Simulator CLI - fast in-memory bot-vs-bot game simulation.
//!
//! Runs games entirely in memory through the engine's public API, allowing
//! rapid iteration on decision strategies without any transport overhead.

mod simulator;

use clap::{Parser, ValueEnum};
use rand::Rng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use engine::ai::{HeuristicStrategy, RandomStrategy};
use engine::HouseRules;
use simulator::{run_game, summarize, SimulationConfig};

#[derive(Parser)]
#[command(name = "ai-simulator")]
#[command(about = "Fast in-memory game simulator for decision strategies")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Number of seats at the table (2-4)
    #[arg(long, default_value = "4")]
    players: usize,

    /// Strategy for all seats (shortcut to set every seat the same)
    #[arg(long, conflicts_with_all = ["seat0", "seat1", "seat2", "seat3"])]
    seats: Option<StrategyArg>,

    /// Strategy for seat 0
    #[arg(long, default_value = "heuristic")]
    seat0: StrategyArg,

    /// Strategy for seat 1
    #[arg(long, default_value = "heuristic")]
    seat1: StrategyArg,

    /// Strategy for seat 2
    #[arg(long, default_value = "random")]
    seat2: StrategyArg,

    /// Strategy for seat 3
    #[arg(long, default_value = "random")]
    seat3: StrategyArg,

    /// Base seed for deterministic games; game `i` uses `seed + i`
    #[arg(long)]
    seed: Option<u64>,

    /// Disable draw stacking
    #[arg(long)]
    no_stacking: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit per-game results and the summary as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    Random,
    Heuristic,
}

impl StrategyArg {
    fn name(self) -> &'static str {
        match self {
            StrategyArg::Random => RandomStrategy::NAME,
            StrategyArg::Heuristic => HeuristicStrategy::NAME,
        }
    }
}

fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    if !(2..=4).contains(&args.players) {
        eprintln!("--players must be between 2 and 4");
        std::process::exit(2);
    }

    let per_seat = [args.seat0, args.seat1, args.seat2, args.seat3];
    let seats: Vec<&'static str> = (0..args.players)
        .map(|i| args.seats.unwrap_or(per_seat[i]).name())
        .collect();

    let rules = HouseRules {
        allow_stacking: !args.no_stacking,
        ..HouseRules::default()
    };
    let config = SimulationConfig {
        seats: seats.clone(),
        rules,
    };

    let base_seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!(games = args.games, ?seats, base_seed, "starting simulation");

    let mut results = Vec::with_capacity(args.games as usize);
    for i in 0..u64::from(args.games) {
        match run_game(&config, base_seed.wrapping_add(i)) {
            Ok(result) => {
                if args.json {
                    match serde_json::to_string(&result) {
                        Ok(line) => println!("{line}"),
                        Err(err) => warn!(%err, "failed to encode game result"),
                    }
                } else {
                    info!(
                        game = i,
                        winner = ?result.winner_strategy,
                        moves = result.moves,
                        "game complete"
                    );
                }
                results.push(result);
            }
            Err(err) => {
                warn!(game = i, %err, "game failed");
            }
        }
    }

    let summary = summarize(config.seats.len(), &results);
    if args.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(body) => println!("{body}"),
            Err(err) => warn!(%err, "failed to encode summary"),
        }
    } else {
        info!(
            games = summary.games,
            total_moves = summary.total_moves,
            average_moves = summary.average_moves,
            "simulation finished"
        );
        for (seat, (strategy, wins)) in seats.iter().zip(&summary.wins_per_seat).enumerate() {
            info!(seat, strategy = *strategy, wins = *wins, "seat results");
        }
    }

    if summary.games < args.games as usize {
        std::process::exit(1);
    }
}
