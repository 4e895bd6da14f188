//! Deterministic card dealing logic.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::domain::{Card, Rank, Suit};

pub const DECK_SIZE: usize = 52;
pub const HANDS_PER_DEAL: usize = 4;
pub const HAND_SIZE: usize = DECK_SIZE / HANDS_PER_DEAL;

/// Generate a full 52-card deck in game order.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for rank in Rank::ALL {
        for suit in Suit::ALL {
            deck.push(Card { rank, suit });
        }
    }
    deck
}

/// Deal the whole deck into four hands of thirteen, deterministically per seed.
///
/// Each table owns its generator; nothing here touches process-global RNG
/// state. Hands are sorted for convenience. Matches with fewer than four
/// seats take the first hands and discard the rest.
pub fn deal_hands(seed: u64) -> [Vec<Card>; HANDS_PER_DEAL] {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    deal_with_rng(&mut rng)
}

fn deal_with_rng(rng: &mut ChaCha20Rng) -> [Vec<Card>; HANDS_PER_DEAL] {
    let mut deck = full_deck();
    deck.shuffle(rng);

    let mut hands: [Vec<Card>; HANDS_PER_DEAL] = Default::default();
    for (i, chunk) in deck.chunks(HAND_SIZE).enumerate() {
        let mut hand = chunk.to_vec();
        hand.sort();
        hands[i] = hand;
    }
    hands
}
