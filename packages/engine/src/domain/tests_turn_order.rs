use crate::domain::participant::ParticipantId;
use crate::domain::turn_order::TurnSequencer;

fn ring_of(n: usize) -> (TurnSequencer, Vec<ParticipantId>) {
    let ids: Vec<ParticipantId> = (0..n).map(|_| ParticipantId::new()).collect();
    let mut ring = TurnSequencer::new();
    for &id in &ids {
        ring.add(id);
    }
    (ring, ids)
}

#[test]
fn add_appends_before_current() {
    let (ring, ids) = ring_of(4);
    // First added stays current; the rest follow in insertion order.
    assert_eq!(ring.current(), Some(ids[0]));
    assert_eq!(ring.order_from_current(), ids);
}

#[test]
fn advance_full_circle_returns_to_start() {
    for n in 2..=4 {
        let (mut ring, ids) = ring_of(n);
        for _ in 0..n {
            ring.advance();
        }
        assert_eq!(ring.current(), Some(ids[0]), "ring of {n}");
    }
}

#[test]
fn reverse_then_advance_equals_retreat() {
    let (mut ring, ids) = ring_of(4);
    ring.reverse_direction();
    ring.advance();
    // One step counter-clockwise from ids[0] is the last seat.
    assert_eq!(ring.current(), Some(ids[3]));
    ring.reverse_direction();
    ring.advance();
    assert_eq!(ring.current(), Some(ids[0]));
}

#[test]
fn peek_next_does_not_mutate() {
    let (mut ring, ids) = ring_of(3);
    assert_eq!(ring.peek_next(), Some(ids[1]));
    assert_eq!(ring.current(), Some(ids[0]));
    ring.reverse_direction();
    assert_eq!(ring.peek_next(), Some(ids[2]));
    assert_eq!(ring.current(), Some(ids[0]));
}

#[test]
fn skip_one_returns_the_skipped_participant() {
    let (mut ring, ids) = ring_of(4);
    let skipped = ring.skip_one();
    assert_eq!(skipped, Some(ids[1]));
    assert_eq!(ring.current(), Some(ids[2]));
}

#[test]
fn skip_on_two_ring_retains_the_turn() {
    let (mut ring, ids) = ring_of(2);
    let skipped = ring.skip_one();
    assert_eq!(skipped, Some(ids[1]));
    assert_eq!(ring.current(), Some(ids[0]));
}

#[test]
fn remove_relinks_neighbors() {
    let (mut ring, ids) = ring_of(4);
    ring.remove(ids[1]).unwrap();
    assert_eq!(ring.len(), 3);
    assert_eq!(ring.order_from_current(), vec![ids[0], ids[2], ids[3]]);
    assert!(!ring.contains(ids[1]));
}

#[test]
fn removing_current_moves_to_next_in_active_direction() {
    let (mut ring, ids) = ring_of(3);
    ring.remove(ids[0]).unwrap();
    assert_eq!(ring.current(), Some(ids[1]));

    let (mut ring, ids) = ring_of(3);
    ring.reverse_direction();
    ring.remove(ids[0]).unwrap();
    assert_eq!(ring.current(), Some(ids[2]));
}

#[test]
fn removing_down_to_one_keeps_a_valid_ring() {
    let (mut ring, ids) = ring_of(2);
    ring.remove(ids[1]).unwrap();
    assert_eq!(ring.len(), 1);
    assert_eq!(ring.current(), Some(ids[0]));
    // Self-linked single node: stepping stays in place.
    assert_eq!(ring.peek_next(), Some(ids[0]));

    ring.remove(ids[0]).unwrap();
    assert!(ring.is_empty());
    assert_eq!(ring.current(), None);
}

#[test]
fn remove_unknown_id_is_an_error() {
    let (mut ring, _) = ring_of(2);
    assert!(ring.remove(ParticipantId::new()).is_err());
}

#[test]
fn freed_slots_are_reused() {
    let (mut ring, ids) = ring_of(4);
    ring.remove(ids[2]).unwrap();
    let newcomer = ParticipantId::new();
    ring.add(newcomer);
    assert_eq!(ring.len(), 4);
    // Newcomer acts last in the current rotation.
    assert_eq!(
        ring.order_from_current(),
        vec![ids[0], ids[1], ids[3], newcomer]
    );
}
