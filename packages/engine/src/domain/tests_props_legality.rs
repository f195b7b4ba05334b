/// Property-based tests for the play-legality predicate
use proptest::prelude::*;

use crate::domain::cards_logic::{is_legal_play, playable_cards};
use crate::domain::rules::HouseRules;
use crate::domain::test_gens;
use crate::domain::CardKind;

proptest! {
    /// Property: wild kinds are legal on any top while no draw is pending.
    #[test]
    fn prop_wild_always_legal_without_pending(top in test_gens::colored_card()) {
        let rules = HouseRules::default();
        prop_assert!(is_legal_play(crate::domain::Card::wild(), top, 0, &rules));
        prop_assert!(is_legal_play(crate::domain::Card::wild_draw_four(), top, 0, &rules));
    }

    /// Property: a color or kind match is always legal while no draw is
    /// pending.
    #[test]
    fn prop_color_or_kind_match_is_legal(
        candidate in test_gens::colored_card(),
        top in test_gens::colored_card(),
    ) {
        let rules = HouseRules::default();
        let legal = is_legal_play(candidate, top, 0, &rules);
        if candidate.color == top.color || candidate.kind == top.kind {
            prop_assert!(legal);
        } else {
            prop_assert!(!legal);
        }
    }

    /// Property: with stacking disabled, nothing is playable under an
    /// outstanding draw obligation.
    #[test]
    fn prop_no_play_under_pending_without_stacking(
        hand in test_gens::hand(10),
        top in test_gens::colored_card(),
        pending in 1u8..=8,
    ) {
        let rules = HouseRules { allow_stacking: false, ..HouseRules::default() };
        prop_assert!(playable_cards(&hand, top, pending, &rules).is_empty());
    }

    /// Property: under an outstanding obligation only draw kinds survive the
    /// filter, whatever the hand.
    #[test]
    fn prop_only_draw_kinds_stack(
        hand in test_gens::hand(10),
        top in test_gens::colored_card(),
        pending in 1u8..=8,
    ) {
        let rules = HouseRules::default();
        for card in playable_cards(&hand, top, pending, &rules) {
            prop_assert!(
                matches!(card.kind, CardKind::DrawTwo | CardKind::WildDrawFour),
                "{card} must not stack"
            );
        }
    }

    /// Property: the playable set is always a sub-multiset of the hand.
    #[test]
    fn prop_playable_subset_of_hand(
        hand in test_gens::hand(10),
        top in test_gens::colored_card(),
        pending in 0u8..=4,
    ) {
        let rules = HouseRules::default();
        let playable = playable_cards(&hand, top, pending, &rules);
        for card in &playable {
            let in_hand = hand.iter().filter(|&&c| c == *card).count();
            let in_playable = playable.iter().filter(|&&c| c == *card).count();
            prop_assert!(in_playable <= in_hand);
        }
    }
}
