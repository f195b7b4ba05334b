use crate::domain::cards_logic::{has_playable_card, is_legal_play, playable_cards};
use crate::domain::cards_types::{Card, CardColor};
use crate::domain::rules::HouseRules;
use crate::domain::try_parse_cards;

fn card(token: &str) -> Card {
    token.parse().expect("hardcoded valid card token")
}

#[test]
fn wild_kinds_are_always_legal_without_pending_draw() {
    let rules = HouseRules::default();
    for top in ["R5", "GS", "BD2"] {
        assert!(is_legal_play(Card::wild(), card(top), 0, &rules));
        assert!(is_legal_play(Card::wild_draw_four(), card(top), 0, &rules));
    }
}

#[test]
fn color_match_is_legal() {
    let rules = HouseRules::default();
    assert!(is_legal_play(card("R5"), card("R9"), 0, &rules));
    assert!(is_legal_play(card("RS"), card("R0"), 0, &rules));
}

#[test]
fn kind_match_is_legal_across_colors() {
    let rules = HouseRules::default();
    // Matching numbers and matching special types.
    assert!(is_legal_play(card("B7"), card("G7"), 0, &rules));
    assert!(is_legal_play(card("YS"), card("RS"), 0, &rules));
    assert!(is_legal_play(card("BR"), card("GR"), 0, &rules));
    assert!(is_legal_play(card("BD2"), card("GD2"), 0, &rules));
}

#[test]
fn mismatched_color_and_kind_is_illegal() {
    let rules = HouseRules::default();
    assert!(!is_legal_play(card("B7"), card("G8"), 0, &rules));
    assert!(!is_legal_play(card("YS"), card("RR"), 0, &rules));
}

#[test]
fn resolved_wild_top_matches_on_its_chosen_color() {
    let rules = HouseRules::default();
    let top = Card::wild().with_color(CardColor::Blue);
    assert!(is_legal_play(card("B3"), top, 0, &rules));
    assert!(!is_legal_play(card("R3"), top, 0, &rules));
}

#[test]
fn pending_draw_narrows_to_stacking_cards() {
    let rules = HouseRules::default();
    let top = card("RD2");
    // Draw-two stacks on draw-two.
    assert!(is_legal_play(card("BD2"), top, 2, &rules));
    // Wild-draw-four stacks on either draw top.
    assert!(is_legal_play(Card::wild_draw_four(), top, 2, &rules));
    assert!(is_legal_play(
        Card::wild_draw_four(),
        Card::wild_draw_four().with_color(CardColor::Red),
        4,
        &rules
    ));
    // Everything else is shut out, including a color match and a plain wild.
    assert!(!is_legal_play(card("R5"), top, 2, &rules));
    assert!(!is_legal_play(Card::wild(), top, 2, &rules));
}

#[test]
fn draw_two_does_not_stack_on_wild_draw_four() {
    let rules = HouseRules::default();
    let top = Card::wild_draw_four().with_color(CardColor::Blue);
    assert!(!is_legal_play(card("BD2"), top, 4, &rules));
}

#[test]
fn stacking_disabled_blocks_all_plays_under_pending_draw() {
    let rules = HouseRules {
        allow_stacking: false,
        ..HouseRules::default()
    };
    let top = card("RD2");
    assert!(!is_legal_play(card("BD2"), top, 2, &rules));
    assert!(!is_legal_play(Card::wild_draw_four(), top, 2, &rules));
}

#[test]
fn playable_cards_filters_the_hand() {
    let rules = HouseRules::default();
    let hand = try_parse_cards(["R5", "B5", "G8", "W"]).unwrap();
    let playable = playable_cards(&hand, card("R8"), 0, &rules);
    assert_eq!(playable, try_parse_cards(["R5", "G8", "W"]).unwrap());
}

#[test]
fn has_playable_card_matches_the_filter() {
    let rules = HouseRules::default();
    let hand = try_parse_cards(["B3", "G7"]).unwrap();
    assert!(!has_playable_card(&hand, card("R5"), 0, &rules));
    assert!(has_playable_card(&hand, card("B9"), 0, &rules));
    // Under a draw obligation the same hand offers no response.
    assert!(!has_playable_card(&hand, card("RD2"), 2, &rules));
}
