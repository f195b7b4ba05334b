//! Card legality: which cards may be played on the current discard top.

use super::cards_types::{Card, CardKind};
use super::rules::HouseRules;

/// Legality predicate for playing `candidate` on `top`.
///
/// With no outstanding draw obligation: wild kinds are always legal,
/// otherwise the candidate must match the top's color or kind (same number
/// or same action kind). While `pending_draw > 0` legality narrows to
/// stacking responses only — a draw-two on a draw-two top, or a wild-draw-four
/// on either draw top — and only when the house rule allows stacking.
///
/// `top` is the discard top, so its color is always concrete: wilds resolve
/// their color when played.
pub fn is_legal_play(candidate: Card, top: Card, pending_draw: u8, rules: &HouseRules) -> bool {
    if pending_draw > 0 {
        if !rules.allow_stacking {
            return false;
        }
        return match candidate.kind {
            CardKind::DrawTwo => top.kind == CardKind::DrawTwo,
            CardKind::WildDrawFour => top.kind.is_draw_effect(),
            _ => false,
        };
    }

    match candidate.kind {
        CardKind::Wild | CardKind::WildDrawFour => true,
        _ => candidate.color == top.color || candidate.kind == top.kind,
    }
}

/// All cards in `hand` that are currently legal to play.
pub fn playable_cards(hand: &[Card], top: Card, pending_draw: u8, rules: &HouseRules) -> Vec<Card> {
    hand.iter()
        .copied()
        .filter(|&c| is_legal_play(c, top, pending_draw, rules))
        .collect()
}

/// True if `hand` holds at least one legal response to the current top.
pub fn has_playable_card(hand: &[Card], top: Card, pending_draw: u8, rules: &HouseRules) -> bool {
    hand.iter()
        .any(|&c| is_legal_play(c, top, pending_draw, rules))
}
