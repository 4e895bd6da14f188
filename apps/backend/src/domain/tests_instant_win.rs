//! Instant-win detection on dealt hands.

use crate::domain::fixtures::CardFixtures;
use crate::domain::hand::Hand;
use crate::domain::instant_win::{detect, WinKind};
use crate::domain::match_state::MatchState;
use crate::domain::GameEvent;

fn hand(tokens: &[&str]) -> Hand {
    Hand::new(CardFixtures::parse_hardcoded(tokens))
}

#[test]
fn dragon_run_ignores_suits() {
    let h = hand(&[
        "3H", "4S", "5D", "6C", "7H", "8H", "9S", "TD", "JC", "QH", "KS", "AD", "2C",
    ]);
    assert_eq!(detect(&h), Some(WinKind::DragonRun));
}

#[test]
fn dragon_run_wins_over_four_twos_check() {
    // Twelve run ranks plus one two cannot hold four twos; priority still
    // puts the dragon first for any hand matching both in a larger deal.
    let h = hand(&[
        "3S", "4S", "5S", "6S", "7S", "8S", "9S", "TS", "JS", "QS", "KS", "AS", "2S", "2C",
        "2D", "2H",
    ]);
    assert_eq!(detect(&h), Some(WinKind::DragonRun));
}

#[test]
fn four_twos() {
    let h = hand(&[
        "2S", "2C", "2D", "2H", "3S", "5D", "7H", "8C", "9S", "JD", "QH", "KC", "AS",
    ]);
    assert_eq!(detect(&h), Some(WinKind::FourTwos));
}

#[test]
fn six_pairs_counts_a_quad_as_two() {
    let h = hand(&[
        "3S", "3C", "3D", "3H", "5S", "5C", "7D", "7H", "9S", "9C", "JD", "JH", "KS",
    ]);
    assert_eq!(detect(&h), Some(WinKind::SixPairs));

    let five_pairs = hand(&[
        "3S", "3C", "5S", "5C", "7D", "7H", "9S", "9C", "JD", "JH", "KS", "AD", "QC",
    ]);
    assert_eq!(detect(&five_pairs), None);
}

#[test]
fn four_groups_only_counts_distinct_ranks() {
    // Uneven split 4/4/3/2 still counts; possibly unintended but kept.
    let h = hand(&[
        "4S", "4C", "4D", "4H", "8S", "8C", "8D", "8H", "JS", "JC", "JD", "KS", "KC",
    ]);
    assert_eq!(detect(&h), Some(WinKind::FourGroups));
}

#[test]
fn three_groups_cannot_occur_in_thirteen_cards() {
    // Thirteen cards need at least four ranks, so this win only fires for
    // smaller hands such as the twelve below.
    let h = hand(&[
        "4S", "4C", "4D", "4H", "8S", "8C", "8D", "8H", "JS", "JC", "JD", "JH",
    ]);
    assert_eq!(detect(&h), Some(WinKind::ThreeGroups));
}

#[test]
fn ordinary_hand_has_no_instant_win() {
    let h = hand(&[
        "3S", "4C", "5D", "6H", "7S", "9C", "TD", "JH", "QS", "KC", "AD", "AH", "3H",
    ]);
    assert_eq!(detect(&h), None);
}

#[test]
fn instant_win_ends_the_match_before_any_round() {
    let hands = CardFixtures::hands(&[
        &[
            "3H", "4S", "5D", "6C", "7H", "8H", "9S", "TD", "JC", "QH", "KS", "AD", "2C",
        ],
        &[
            "3S", "4C", "5S", "6D", "7C", "3C", "9C", "TS", "JD", "QD", "KD", "AH", "AS",
        ],
    ]);
    let (state, events) = MatchState::start(hands).unwrap();

    assert!(state.is_finished());
    assert_eq!(state.current_actor(), None);
    assert_eq!(state.round_no(), 0);
    assert!(events
        .iter()
        .any(|e| matches!(e, GameEvent::InstantWin { seat: 0, kind: WinKind::DragonRun })));
    assert!(!events.iter().any(|e| matches!(e, GameEvent::RoundOpened { .. })));

    let places: Vec<(usize, usize)> = state
        .placements()
        .iter()
        .map(|p| (p.seat, p.place))
        .collect();
    assert_eq!(places, vec![(0, 1), (1, 2)]);
}
