//! Heuristic strategy - deterministic priority-based play.

use super::trait_def::{Decision, DecisionStrategy, DecisionView, StrategyError};
use crate::domain::{Card, CardColor, CardKind};

/// Strategy that spends action cards early, follows its strongest color,
/// and keeps wild-draw-four as a last resort.
///
/// Deterministic: the same view always yields the same decision, which makes
/// it the baseline opponent for simulator comparisons.
#[derive(Debug, Default)]
pub struct HeuristicStrategy;

impl HeuristicStrategy {
    pub const NAME: &'static str = "heuristic";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new() -> Self {
        Self
    }

    /// Count of concrete-color cards per color in `hand`.
    fn color_count(hand: &[Card], color: CardColor) -> usize {
        hand.iter().filter(|c| c.color == color).count()
    }

    /// Preferred resolution color for a wild: the color we hold most of.
    fn strongest_color(hand: &[Card]) -> CardColor {
        CardColor::CONCRETE
            .into_iter()
            .max_by_key(|&color| Self::color_count(hand, color))
            .unwrap_or(CardColor::Red)
    }

    fn priority(card: Card, hand: &[Card]) -> usize {
        let base = match card.kind {
            CardKind::DrawTwo => 500,
            CardKind::Skip => 400,
            CardKind::Reverse => 350,
            CardKind::Number(n) => 100 + usize::from(n),
            CardKind::Wild => 50,
            CardKind::WildDrawFour => 0,
        };
        // Prefer shedding from the color we hold most of.
        base + Self::color_count(hand, card.color)
    }
}

impl DecisionStrategy for HeuristicStrategy {
    fn decide(&self, view: &DecisionView<'_>) -> Result<Decision, StrategyError> {
        let playable = view.playable();
        if playable.is_empty() {
            return Ok(Decision::Draw);
        }

        let card = playable
            .iter()
            .copied()
            .max_by_key(|&c| Self::priority(c, view.hand))
            .ok_or_else(|| StrategyError::InvalidMove("no playable card to rank".into()))?;

        let chosen_color = if card.is_wild() {
            // Resolve to the strongest color of what remains after this play.
            let remaining: Vec<Card> = view
                .hand
                .iter()
                .copied()
                .filter(|&c| c != card)
                .collect();
            Some(Self::strongest_color(&remaining))
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
