//! Hand-level instant wins, checked once per seat right after the deal.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use super::cards_types::{Rank, FOUR_TWOS};
use super::hand::Hand;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WinKind {
    /// Every rank below two at least once.
    DragonRun,
    /// All four twos.
    FourTwos,
    /// Exactly three distinct ranks.
    ThreeGroups,
    /// Exactly four distinct ranks.
    FourGroups,
    /// Six pairs, a four of a kind counting as two.
    SixPairs,
}

impl fmt::Display for WinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WinKind::DragonRun => "dragon sequence",
            WinKind::FourTwos => "four twos",
            WinKind::ThreeGroups => "three quads",
            WinKind::FourGroups => "four triples",
            WinKind::SixPairs => "six pairs",
        };
        f.write_str(name)
    }
}

/// Check a freshly dealt hand; first matching pattern wins.
///
/// The group rules only count distinct ranks, so an uneven split over three
/// or four ranks also qualifies.
pub fn detect(hand: &Hand) -> Option<WinKind> {
    let ranks: BTreeSet<Rank> = hand.iter().map(|c| c.rank).collect();
    if Rank::ALL
        .iter()
        .filter(|r| !r.is_highest())
        .all(|r| ranks.contains(r))
    {
        return Some(WinKind::DragonRun);
    }
    if FOUR_TWOS.iter().all(|c| hand.contains(c)) {
        return Some(WinKind::FourTwos);
    }

    let counts = hand.rank_counts();
    match counts.len() {
        3 => return Some(WinKind::ThreeGroups),
        4 => return Some(WinKind::FourGroups),
        _ => {}
    }
    let pairs: usize = counts.values().map(|n| n / 2).sum();
    if pairs == 6 {
        return Some(WinKind::SixPairs);
    }
    None
}
