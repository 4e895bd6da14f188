//! Match flow: opening lead, round closure, finishing order.

use crate::domain::fixtures::CardFixtures;
use crate::domain::match_state::{Action, MatchOutcome, MatchState};
use crate::domain::{GameEvent, Placement};
use crate::errors::domain::ValidationKind;

fn start(seats: &[&[&str]]) -> MatchState {
    let (state, _) = MatchState::start(CardFixtures::hands(seats)).unwrap();
    state
}

fn play(state: &mut MatchState, seat: usize, tokens: &[&str]) -> Vec<GameEvent> {
    state
        .play(seat, &CardFixtures::parse_hardcoded(tokens))
        .unwrap()
}

#[test]
fn holder_of_the_lowest_card_opens_and_must_use_it() {
    let (mut state, events) = MatchState::start(CardFixtures::hands(&[
        &["5S", "6S", "7S", "8S", "9S"],
        &["3C", "TD", "JD", "QH", "KH"],
        &["4D", "4H", "AS", "AC", "AD"],
    ]))
    .unwrap();

    assert_eq!(state.current_actor(), Some(1));
    assert!(events.contains(&GameEvent::RoundOpened {
        round_no: 1,
        opener: 1,
        required_card: Some(CardFixtures::card("3C")),
    }));

    let err = state
        .play(1, &CardFixtures::parse_hardcoded(&["TD"]))
        .unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::MissingRequiredCard));

    let err = state.pass(1).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::PassNotAllowed));

    play(&mut state, 1, &["3C"]);
    assert_eq!(state.current_actor(), Some(2));
    assert_eq!(state.round().required_card(), None);
}

#[test]
fn two_seat_match_ends_when_one_hand_empties() {
    let mut state = start(&[&["3S", "9D"], &["4S", "5C", "6D", "7H", "8S"]]);

    play(&mut state, 0, &["3S"]);
    let events = state.pass(1).unwrap();
    assert!(events.contains(&GameEvent::RoundClosed {
        round_no: 1,
        winner: 0
    }));
    assert_eq!(state.current_actor(), Some(0));

    let events = play(&mut state, 0, &["9D"]);
    assert!(state.is_finished());
    assert_eq!(state.outcome(), Some(&MatchOutcome::Ranked));
    assert_eq!(state.ranking(), &[0, 1]);
    assert_eq!(state.current_actor(), None);
    assert!(!events
        .iter()
        .any(|e| matches!(e, GameEvent::TurnBecame { .. })));
    assert_eq!(
        events.last(),
        Some(&GameEvent::MatchFinished {
            placements: vec![
                Placement { seat: 0, place: 1 },
                Placement { seat: 1, place: 2 },
            ]
        })
    );
}

#[test]
fn next_seat_opens_when_the_round_winner_has_finished() {
    let mut state = start(&[
        &["3S", "AH"],
        &["4S"],
        &["5S", "6S", "7D", "8D", "9C"],
    ]);

    play(&mut state, 0, &["3S"]);
    let events = play(&mut state, 1, &["4S"]);
    assert!(events.contains(&GameEvent::SeatFinished { seat: 1, place: 1 }));
    assert_eq!(state.current_actor(), Some(2));

    let events = state.pass(2).unwrap();
    assert!(events.contains(&GameEvent::RoundClosed {
        round_no: 1,
        winner: 1
    }));
    assert!(events.contains(&GameEvent::RoundOpened {
        round_no: 2,
        opener: 2,
        required_card: None
    }));
    assert_eq!(state.current_actor(), Some(2));
    assert_eq!(state.round().rotation(), &[2, 0]);
}

#[test]
fn finished_seat_keeps_the_lead_until_beaten() {
    let mut state = start(&[
        &["3S", "5D", "6D", "JC", "QC"],
        &["9S"],
        &["4C", "KD", "AD", "AS", "TH", "8H"],
    ]);

    play(&mut state, 0, &["3S"]);
    play(&mut state, 1, &["9S"]);
    assert_eq!(state.round().leader(), Some(1));
    play(&mut state, 2, &["KD"]);
    assert_eq!(state.round().leader(), Some(2));
    assert_eq!(state.round().rotation(), &[0, 2]);
    assert_eq!(state.current_actor(), Some(0));
}

#[test]
fn rejected_actions_change_nothing() {
    let mut state = start(&[&["3S", "9D"], &["4S", "5C", "6D", "7H", "8S"]]);
    let before_cards = state.accounted_cards();

    let err = state.pass(1).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::NotYourTurn));
    let err = state
        .play(0, &CardFixtures::parse_hardcoded(&["4S"]))
        .unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::CardNotInHand));

    assert_eq!(state.current_actor(), Some(0));
    assert_eq!(state.hand(0).map(|h| h.len()), Some(2));
    assert_eq!(state.accounted_cards(), before_cards);
    assert!(state.discards().is_empty());
}

#[test]
fn actions_after_the_match_are_refused() {
    let mut state = start(&[&["3S", "9D"], &["4S", "5C", "6D", "7H", "8S"]]);
    state.apply(0, &Action::Play(CardFixtures::parse_hardcoded(&["3S"]))).unwrap();
    state.apply(1, &Action::Pass).unwrap();
    state.apply(0, &Action::Play(CardFixtures::parse_hardcoded(&["9D"]))).unwrap();

    let err = state.apply(1, &Action::Pass).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::MatchOver));
}

#[test]
fn seat_count_and_deal_are_validated() {
    let err = MatchState::start(CardFixtures::hands(&[&["3S"]])).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::InvalidSeatCount));

    let err = MatchState::deal(5, 7).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::InvalidSeatCount));

    let err = MatchState::start(CardFixtures::hands(&[&["3S"], &["3S", "4D"]])).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::InvalidDeal));

    let err = MatchState::start(CardFixtures::hands(&[&["3S"], &[]])).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::InvalidDeal));
}

#[test]
fn dealt_match_gives_each_seat_thirteen_cards() {
    let (state, events) = MatchState::deal(3, 42).unwrap();
    assert_eq!(state.seat_count(), 3);
    for seat in state.seats() {
        assert_eq!(seat.hand.len(), 13);
    }
    let dealt = events
        .iter()
        .filter(|e| matches!(e, GameEvent::HandDealt { .. }))
        .count();
    assert_eq!(dealt, 3);
}

#[test]
fn view_hides_other_hands() {
    let state = start(&[&["3S", "9D"], &["4S", "5C", "6D", "7H", "8S"]]);
    let view = state.view_for(1).unwrap();
    assert_eq!(view.hand.len(), 5);
    assert!(!view.is_my_turn);
    assert!(!view.can_pass);
    assert_eq!(view.opponents.len(), 1);
    assert_eq!(view.opponents[0].cards_left, 2);

    let opener = state.view_for(0).unwrap();
    assert!(opener.is_my_turn);
    assert_eq!(opener.required_card, Some(CardFixtures::card("3S")));
    assert!(opener
        .legal_plays()
        .iter()
        .all(|p| p.cards().contains(&CardFixtures::card("3S"))));
}

#[test]
fn acting_seat_rejections_leave_lead_and_rotation_alone() {
    let mut state = start(&[
        &["3S", "6D", "8H", "TC", "QD"],
        &["4S", "4C", "7H", "9C", "JD", "KS"],
        &["5S", "5D", "9H", "JC", "AS", "KD"],
    ]);
    play(&mut state, 0, &["3S"]);
    let lead = state.round().lead().cloned();
    let rotation = state.round().rotation().to_vec();
    assert_eq!(rotation, vec![0, 1, 2]);

    for (tokens, kind) in [
        (&["4S", "4C"][..], ValidationKind::Incomparable),
        (&["4S", "7H"][..], ValidationKind::InvalidCombination),
    ] {
        let err = state
            .play(1, &CardFixtures::parse_hardcoded(tokens))
            .unwrap_err();
        assert_eq!(err.kind(), Some(&kind));
        assert_eq!(state.round().lead().cloned(), lead);
        assert_eq!(state.round().rotation(), rotation.as_slice());
        assert_eq!(state.current_actor(), Some(1));
        assert_eq!(state.hand(1).unwrap().len(), 6);
    }

    play(&mut state, 1, &["9C"]);
    let lead = state.round().lead().cloned();
    let err = state
        .play(2, &CardFixtures::parse_hardcoded(&["5S"]))
        .unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::NotHighEnough));
    assert_eq!(state.round().lead().cloned(), lead);
    assert_eq!(state.current_actor(), Some(2));
    assert_eq!(state.hand(2).unwrap().len(), 6);
}
