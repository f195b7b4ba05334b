// Proptest generators for domain types.

use proptest::prelude::*;

use super::cards_types::{Card, CardColor, CardKind};

/// Generate one of the four concrete colors.
pub fn concrete_color() -> impl Strategy<Value = CardColor> {
    prop_oneof![
        Just(CardColor::Red),
        Just(CardColor::Blue),
        Just(CardColor::Green),
        Just(CardColor::Yellow),
    ]
}

/// Generate a colored (non-wild) card.
pub fn colored_card() -> impl Strategy<Value = Card> {
    (concrete_color(), colored_kind()).prop_map(|(color, kind)| Card { kind, color })
}

fn colored_kind() -> impl Strategy<Value = CardKind> {
    prop_oneof![
        (0u8..=9).prop_map(CardKind::Number),
        Just(CardKind::Skip),
        Just(CardKind::Reverse),
        Just(CardKind::DrawTwo),
    ]
}

/// Generate any card, wild kinds carrying the unresolved color.
pub fn card() -> impl Strategy<Value = Card> {
    prop_oneof![
        4 => colored_card(),
        1 => Just(Card::wild()),
        1 => Just(Card::wild_draw_four()),
    ]
}

/// Generate a hand of up to `max` cards. Duplicates are legal: the deck
/// carries most cards twice.
pub fn hand(max: usize) -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec(card(), 0..=max)
}
