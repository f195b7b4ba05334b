use serde::Deserialize;

use super::scoring::ScoreTable;

pub const MIN_PARTICIPANTS: usize = 2;
pub const MAX_PARTICIPANTS: usize = 4;

/// Deck composition per color: one 0, two each of 1..=9, two skips, two
/// reverses, two draw-twos; plus four wilds and four wild-draw-fours.
pub const DECK_SIZE: usize = 108;

pub const DEFAULT_STARTING_HAND: u8 = 7;
pub const DEFAULT_DECLARATION_PENALTY: u8 = 2;
pub const DEFAULT_MAX_HISTORY: usize = 128;

/// House rules injected at session creation.
///
/// Everything policy-shaped lives here rather than in constants so the owning
/// process can configure it per room.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HouseRules {
    /// Permit stacking draw cards onto an outstanding draw obligation.
    pub allow_stacking: bool,
    /// Cards dealt to each participant at start.
    pub starting_hand_size: u8,
    /// Cards drawn by a participant caught holding one undeclared card.
    pub declaration_penalty: u8,
    /// Point values used to score non-winners' remaining hands.
    pub score_table: ScoreTable,
    /// Command history bound; oldest entries are compacted away past this.
    pub max_history: usize,
}

impl Default for HouseRules {
    fn default() -> Self {
        Self {
            allow_stacking: true,
            starting_hand_size: DEFAULT_STARTING_HAND,
            declaration_penalty: DEFAULT_DECLARATION_PENALTY,
            score_table: ScoreTable::default(),
            max_history: DEFAULT_MAX_HISTORY,
        }
    }
}
