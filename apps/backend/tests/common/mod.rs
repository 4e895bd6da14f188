#![allow(dead_code)]

// tests/common/mod.rs
use tienlen::domain::Card;

pub mod proptest_prelude;

// Logging is auto-installed for every test binary that includes this module
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Parse hardcoded tokens such as `"3S"` or `"TH"`.
pub fn cards(tokens: &[&str]) -> Vec<Card> {
    tokens
        .iter()
        .map(|t| t.parse().expect("valid card token"))
        .collect()
}

/// 1-based positions of `chosen` inside a sorted `hand`.
pub fn positions_of(hand: &[Card], chosen: &[Card]) -> Vec<usize> {
    chosen
        .iter()
        .map(|c| {
            hand.iter()
                .position(|h| h == c)
                .map(|i| i + 1)
                .expect("chosen card is in hand")
        })
        .collect()
}
