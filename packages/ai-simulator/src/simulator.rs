//! In-memory game runner: seats bots, starts a session, drives it to
//! conclusion, and collects per-game metrics.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use engine::events::NullSink;
use engine::{
    FinalScore, GameError, HouseRules, ParticipantId, Session, SessionId, SessionPhase,
};

pub struct SimulationConfig {
    pub seats: Vec<&'static str>,
    pub rules: HouseRules,
}

/// Outcome of a single simulated game.
#[derive(Debug, Clone, Serialize)]
pub struct GameResult {
    pub seed: u64,
    pub winner_seat: Option<usize>,
    pub winner_strategy: Option<String>,
    pub moves: usize,
    pub scores: Vec<FinalScore>,
}

/// Run one fully bot-driven game to conclusion.
pub fn run_game(config: &SimulationConfig, seed: u64) -> Result<GameResult, GameError> {
    let session = Session::new(
        SessionId::generate(),
        config.rules.clone(),
        Arc::new(NullSink),
    );

    let mut seat_ids: Vec<ParticipantId> = Vec::with_capacity(config.seats.len());
    for (seat, strategy) in config.seats.iter().enumerate() {
        let id = session.add_bot(
            format!("{strategy}-{seat}"),
            strategy,
            Some(seed.wrapping_add(seat as u64)),
        )?;
        seat_ids.push(id);
    }

    session.start(Some(seed))?;
    let moves = session.advance_bots()?;
    debug!(seed, moves, "game finished");

    let winner = match session.phase() {
        SessionPhase::Concluded { winner } => winner,
        phase => {
            return Err(GameError::invariant(format!(
                "bot game stalled in phase {}",
                phase.name()
            )))
        }
    };
    let winner_seat = winner.and_then(|w| seat_ids.iter().position(|&id| id == w));

    Ok(GameResult {
        seed,
        winner_seat,
        winner_strategy: winner_seat.map(|s| config.seats[s].to_string()),
        moves,
        scores: session.snapshot().final_scores,
    })
}

/// Aggregate over a batch of games.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub games: usize,
    pub wins_per_seat: Vec<usize>,
    pub total_moves: usize,
    pub average_moves: f64,
}

pub fn summarize(seat_count: usize, results: &[GameResult]) -> Summary {
    let mut wins_per_seat = vec![0usize; seat_count];
    let mut total_moves = 0usize;
    for result in results {
        if let Some(seat) = result.winner_seat {
            wins_per_seat[seat] += 1;
        }
        total_moves += result.moves;
    }
    Summary {
        games: results.len(),
        wins_per_seat,
        total_moves,
        average_moves: if results.is_empty() {
            0.0
        } else {
            total_moves as f64 / results.len() as f64
        },
    }
}
