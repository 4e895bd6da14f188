// Proptest generators for domain types.
// Card sets are drawn from the real deck so they never repeat a card.

use proptest::prelude::*;
use proptest::sample::subsequence;

use crate::domain::dealing::full_deck;
use crate::domain::{Card, Rank, Suit};

pub fn suit() -> impl Strategy<Value = Suit> {
    prop::sample::select(Suit::ALL.to_vec())
}

pub fn rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(Rank::ALL.to_vec())
}

/// Ranks that may appear in runs.
pub fn run_rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(
        Rank::ALL
            .iter()
            .copied()
            .filter(|r| !r.is_highest())
            .collect::<Vec<_>>(),
    )
}

pub fn card() -> impl Strategy<Value = Card> {
    (rank(), suit()).prop_map(|(rank, suit)| Card { rank, suit })
}

/// Distinct cards, ascending, between `min` and `max` of them.
pub fn distinct_cards(min: usize, max: usize) -> impl Strategy<Value = Vec<Card>> {
    subsequence(full_deck(), min..=max)
}

/// A straight of `len` cards starting at a random rank, random suits.
pub fn straight(len: usize) -> impl Strategy<Value = Vec<Card>> {
    let starts = 12 - len + 1;
    (0..starts, prop::collection::vec(suit(), len)).prop_map(move |(start, suits)| {
        suits
            .into_iter()
            .enumerate()
            .map(|(i, suit)| Card {
                rank: Rank::ALL[start + i],
                suit,
            })
            .collect()
    })
}

/// Two distinct cards of the same rank.
pub fn pair_of(rank: impl Strategy<Value = Rank>) -> impl Strategy<Value = [Card; 2]> {
    (rank, subsequence(Suit::ALL.to_vec(), 2))
        .prop_map(|(rank, suits)| [Card::new(rank, suits[0]), Card::new(rank, suits[1])])
}

pub fn seat_count() -> impl Strategy<Value = usize> {
    2usize..=4
}

pub fn seed() -> impl Strategy<Value = u64> {
    any::<u64>()
}
