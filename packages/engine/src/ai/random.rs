//! Random strategy - makes uniform random legal moves.
//!
//! Reference implementation of the [`DecisionStrategy`](super::DecisionStrategy)
//! trait: thread-safe interior mutability around the RNG, deterministic
//! behavior via optional seeding, and no panics.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{Decision, DecisionStrategy, DecisionView, StrategyError};
use crate::domain::CardColor;

/// Strategy that plays a uniformly random legal card, resolves wilds to a
/// random color, and always declares honestly.
pub struct RandomStrategy {
    /// `Mutex` for interior mutability: trait methods take `&self` but the
    /// RNG needs mutable access.
    rng: Mutex<StdRng>,
}

impl RandomStrategy {
    pub const NAME: &'static str = "random";
    pub const VERSION: &'static str = "1.0.0";

    /// `Some(seed)` gives reproducible behavior for tests and simulations;
    /// `None` seeds from system entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl DecisionStrategy for RandomStrategy {
    fn decide(&self, view: &DecisionView<'_>) -> Result<Decision, StrategyError> {
        // Always work from the legal move set, never the raw hand.
        let playable = view.playable();
        if playable.is_empty() {
            return Ok(Decision::Draw);
        }

        let mut rng = self
            .rng
            .lock()
            .map_err(|e| StrategyError::Internal(format!("RNG lock poisoned: {e}")))?;

        let card = playable
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| StrategyError::Internal("failed to choose a random card".into()))?;

        let chosen_color = if card.is_wild() {
            let color = CardColor::CONCRETE
                .choose(&mut *rng)
                .copied()
                .ok_or_else(|| StrategyError::Internal("failed to choose a color".into()))?;
            Some(color)
        } else {
            None
        };

        Ok(Decision::Play {
            card,
            chosen_color,
            declare: view.hand.len() == 2,
        })
    }
}
