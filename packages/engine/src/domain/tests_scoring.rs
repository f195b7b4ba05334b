use crate::domain::participant::Participant;
use crate::domain::scoring::{score_hands, ScoreTable};
use crate::domain::try_parse_cards;

#[test]
fn card_points_follow_the_table() {
    let table = ScoreTable::default();
    let hand = try_parse_cards(["R0", "B9", "GS", "YR", "RD2", "W", "W4"]).unwrap();
    let points: Vec<u32> = hand.iter().map(|&c| table.card_points(c)).collect();
    assert_eq!(points, vec![0, 9, 20, 20, 20, 50, 50]);
    assert_eq!(table.hand_points(&hand), 169);
}

#[test]
fn custom_table_overrides_tiers() {
    let table = ScoreTable {
        action_card: 10,
        wild_card: 40,
    };
    let hand = try_parse_cards(["GS", "W4", "B3"]).unwrap();
    assert_eq!(table.hand_points(&hand), 53);
}

#[test]
fn winner_scores_zero_and_leads_the_placement_order() {
    let mut a = Participant::human("a");
    let mut b = Participant::human("b");
    let mut c = Participant::human("c");
    a.hand = Vec::new();
    b.hand = try_parse_cards(["W4", "R9"]).unwrap(); // 59
    c.hand = try_parse_cards(["B2", "G3"]).unwrap(); // 5

    let scores = score_hands(
        &[a.clone(), b.clone(), c.clone()],
        Some(a.id),
        &ScoreTable::default(),
    );
    assert_eq!(scores.len(), 3);
    assert_eq!(scores[0].participant, a.id);
    assert_eq!(scores[0].points, 0);
    // Non-winners ordered by ascending remaining points.
    assert_eq!(scores[1].participant, c.id);
    assert_eq!(scores[1].points, 5);
    assert_eq!(scores[2].participant, b.id);
    assert_eq!(scores[2].points, 59);
}

#[test]
fn abandonment_scores_have_no_winner() {
    let mut a = Participant::human("a");
    a.hand = try_parse_cards(["R1"]).unwrap();
    let scores = score_hands(&[a.clone()], None, &ScoreTable::default());
    assert_eq!(scores[0].points, 1);
}
