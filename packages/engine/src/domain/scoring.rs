//! Final scoring of non-winners' remaining hands.

use serde::{Deserialize, Serialize};

use super::cards_types::{Card, CardKind};
use super::participant::{Participant, ParticipantId};

/// Injectable point-value policy.
///
/// Numbered cards always score their face value; the two tiers below cover
/// action cards (skip, reverse, draw-two) and wild kinds. The tiers are
/// configuration, not constants: ranking collaborators disagree on the
/// canonical table, so the engine takes whatever it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreTable {
    pub action_card: u32,
    pub wild_card: u32,
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self {
            action_card: 20,
            wild_card: 50,
        }
    }
}

impl ScoreTable {
    pub fn card_points(&self, card: Card) -> u32 {
        match card.kind {
            CardKind::Number(n) => u32::from(n),
            CardKind::Skip | CardKind::Reverse | CardKind::DrawTwo => self.action_card,
            CardKind::Wild | CardKind::WildDrawFour => self.wild_card,
        }
    }

    pub fn hand_points(&self, hand: &[Card]) -> u32 {
        hand.iter().map(|&c| self.card_points(c)).sum()
    }
}

/// One participant's final score line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalScore {
    pub participant: ParticipantId,
    pub points: u32,
}

/// Score every participant's remaining hand against `table`.
///
/// The winner (if any) scores 0. Results are ordered best placement first:
/// winner, then ascending remaining-hand points.
pub fn score_hands(
    participants: &[Participant],
    winner: Option<ParticipantId>,
    table: &ScoreTable,
) -> Vec<FinalScore> {
    let mut scores: Vec<FinalScore> = participants
        .iter()
        .map(|p| FinalScore {
            participant: p.id,
            points: if Some(p.id) == winner {
                0
            } else {
                table.hand_points(&p.hand)
            },
        })
        .collect();
    scores.sort_by_key(|s| (Some(s.participant) != winner, s.points));
    scores
}
