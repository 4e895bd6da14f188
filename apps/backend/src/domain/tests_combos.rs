//! Classification and comparison of plays.

use crate::domain::combos::{classify, compare, Comparison, Play, Shape};
use crate::domain::fixtures::CardFixtures;
use crate::domain::Rank;
use crate::errors::domain::ValidationKind;

fn play(tokens: &[&str]) -> Play {
    classify(&CardFixtures::parse_hardcoded(tokens)).unwrap()
}

fn classify_err(tokens: &[&str]) -> ValidationKind {
    classify(&CardFixtures::parse_hardcoded(tokens))
        .unwrap_err()
        .kind()
        .cloned()
        .unwrap()
}

#[test]
fn triple_of_fours_is_lower_than_triple_of_fives() {
    let fours = play(&["4S", "4C", "4D"]);
    assert_eq!(fours.shape(), Shape::Triple);
    assert_eq!(fours.group_rank(), Some(Rank::Four));

    let fives = play(&["5S", "5C", "5H"]);
    assert_eq!(compare(&fours, &fives), Comparison::Lower);
    assert_eq!(compare(&fives, &fours), Comparison::Higher);
}

#[test]
fn four_twos_form_an_unbeatable_quad() {
    let twos = play(&["2S", "2C", "2D", "2H"]);
    assert_eq!(twos.shape(), Shape::Quad);
    assert_eq!(twos.group_rank(), Some(Rank::Two));

    for challenger in [play(&["2H"]), play(&["AH"]), play(&["2D", "2H"])] {
        assert_ne!(compare(&challenger, &twos), Comparison::Higher);
    }
}

#[test]
fn straight_versus_broken_run() {
    let run = play(&["3S", "4S", "5S", "6S", "7S"]);
    assert_eq!(run.shape(), Shape::Straight);
    assert_eq!(run.len(), 5);

    assert_eq!(
        classify_err(&["3S", "4S", "5S", "5C", "5D"]),
        ValidationKind::InvalidCombination
    );
}

#[test]
fn selection_order_does_not_matter() {
    let a = play(&["7S", "5D", "6H"]);
    let b = play(&["5D", "6H", "7S"]);
    assert_eq!(a, b);
    assert_eq!(a.cards()[0], CardFixtures::card("5D"));
}

#[test]
fn three_and_four_cards_prefer_straights() {
    assert_eq!(play(&["9S", "TD", "JH"]).shape(), Shape::Straight);
    assert_eq!(play(&["9S", "9D", "9H"]).shape(), Shape::Triple);
    assert_eq!(play(&["JS", "QD", "KH", "AC"]).shape(), Shape::Straight);
    assert_eq!(play(&["QS", "QD", "QH", "QC"]).shape(), Shape::Quad);
}

#[test]
fn twos_never_join_runs() {
    assert_eq!(
        classify_err(&["KS", "AS", "2S"]),
        ValidationKind::InvalidCombination
    );
    assert_eq!(
        classify_err(&["KS", "KD", "AS", "AD", "2S", "2D"]),
        ValidationKind::InvalidCombination
    );
}

#[test]
fn invalid_small_selections() {
    assert_eq!(classify_err(&["3S", "4S"]), ValidationKind::InvalidCombination);
    assert_eq!(
        classify_err(&["3S", "3C", "4S", "4C"]),
        ValidationKind::InvalidCombination
    );
    assert_eq!(
        classify_err(&["3S", "3C", "4S", "4C", "5S"]),
        ValidationKind::InvalidCombination
    );
    assert_eq!(classify_err(&["3S", "3S"]), ValidationKind::DuplicateCard);
    assert_eq!(classify_err(&[]), ValidationKind::InvalidCombination);
}

#[test]
fn sequential_pairs_classify() {
    let run = play(&["5S", "5C", "6D", "6H", "7S", "7C"]);
    assert_eq!(run.shape(), Shape::SequentialPairs);
    assert!(run.is_bomb());
    assert_eq!(
        classify_err(&["5S", "5C", "6D", "6H", "8S", "8C"]),
        ValidationKind::InvalidCombination
    );
}

#[test]
fn singles_and_pairs_break_ties_by_suit() {
    assert_eq!(compare(&play(&["9H"]), &play(&["9S"])), Comparison::Higher);
    assert_eq!(
        compare(&play(&["9S", "9H"]), &play(&["9C", "9D"])),
        Comparison::Higher
    );
    assert_eq!(compare(&play(&["2S"]), &play(&["AH"])), Comparison::Higher);
}

#[test]
fn straights_compare_only_at_equal_length() {
    let short = play(&["3S", "4S", "5S"]);
    let long = play(&["3C", "4C", "5C", "6C"]);
    assert_eq!(compare(&long, &short), Comparison::Incomparable);
    assert_eq!(compare(&short, &long), Comparison::Incomparable);

    let higher = play(&["3H", "4H", "5H"]);
    assert_eq!(compare(&higher, &short), Comparison::Higher);
}

#[test]
fn a_play_compared_with_itself_is_equal() {
    let p = play(&["8S", "9S", "TS"]);
    assert_eq!(compare(&p, &p), Comparison::Equal);
}

#[test]
fn shape_mismatch_is_incomparable() {
    assert_eq!(
        compare(&play(&["9S", "9C"]), &play(&["3S"])),
        Comparison::Incomparable
    );
    assert_eq!(
        compare(&play(&["9S", "9C", "9D"]), &play(&["3S", "4S", "5S"])),
        Comparison::Incomparable
    );
}

#[test]
fn quads_bomb_single_and_pair_twos() {
    let quad = play(&["3S", "3C", "3D", "3H"]);
    assert_eq!(compare(&quad, &play(&["2H"])), Comparison::Higher);
    assert_eq!(compare(&quad, &play(&["2S", "2H"])), Comparison::Higher);
    assert_eq!(
        compare(&quad, &play(&["2S", "2C", "2H"])),
        Comparison::Incomparable
    );
    // Only twos can be bombed.
    assert_eq!(compare(&quad, &play(&["AH"])), Comparison::Incomparable);
    // The bomb is one-way.
    assert_eq!(compare(&play(&["2H"]), &quad), Comparison::Incomparable);
}

#[test]
fn sequential_pairs_bomb_by_length() {
    let three = play(&["3S", "3C", "4S", "4C", "5S", "5C"]);
    let four = play(&["3S", "3C", "4S", "4C", "5S", "5C", "6S", "6C"]);
    let five = play(&["3S", "3C", "4S", "4C", "5S", "5C", "6S", "6C", "7S", "7C"]);
    let single_two = play(&["2S"]);
    let pair_two = play(&["2S", "2D"]);
    let triple_two = play(&["2S", "2D", "2H"]);

    assert_eq!(compare(&three, &single_two), Comparison::Higher);
    assert_eq!(compare(&three, &pair_two), Comparison::Incomparable);

    assert_eq!(compare(&four, &pair_two), Comparison::Higher);
    assert_eq!(compare(&four, &triple_two), Comparison::Incomparable);

    assert_eq!(compare(&five, &triple_two), Comparison::Higher);
}

#[test]
fn error_message_names_both_attempted_shapes() {
    let err = classify(&CardFixtures::parse_hardcoded(&["3S", "5S", "9D"])).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("straight or triple"), "{msg}");
}
