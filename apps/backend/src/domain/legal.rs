//! Enumerate plays a seat could legally make against the current lead.
//!
//! Singles and same-rank groups are enumerated exhaustively. For runs the
//! choice of suit per rank only matters at the top card (and for a required
//! card), so each run of ranks yields its lowest cards plus the variants
//! that change its strength or include the required card.

use std::collections::{BTreeMap, BTreeSet};

use super::combos::{classify, compare, Comparison, Play};
use super::{Card, Rank};

fn by_rank(hand: &[Card]) -> BTreeMap<Rank, Vec<Card>> {
    let mut groups: BTreeMap<Rank, Vec<Card>> = BTreeMap::new();
    for card in hand {
        groups.entry(card.rank).or_default().push(*card);
    }
    for cards in groups.values_mut() {
        cards.sort();
    }
    groups
}

/// All `size`-subsets of a group of at most four cards.
fn subsets(cards: &[Card], size: usize) -> Vec<Vec<Card>> {
    (0u32..(1 << cards.len()))
        .filter(|mask| mask.count_ones() as usize == size)
        .map(|mask| {
            cards
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, c)| *c)
                .collect()
        })
        .collect()
}

/// Maximal stretches of consecutive non-two ranks held at least `min` times.
fn rank_runs(groups: &BTreeMap<Rank, Vec<Card>>, min: usize) -> Vec<Vec<Rank>> {
    let mut runs: Vec<Vec<Rank>> = Vec::new();
    let mut current: Vec<Rank> = Vec::new();
    for (rank, cards) in groups {
        if rank.is_highest() || cards.len() < min {
            continue;
        }
        let extends = current
            .last()
            .is_some_and(|prev| prev.index() + 1 == rank.index());
        if !extends && !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
        current.push(*rank);
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

fn straight_candidates(
    groups: &BTreeMap<Rank, Vec<Card>>,
    required: Option<Card>,
    out: &mut BTreeSet<Vec<Card>>,
) {
    for run in rank_runs(groups, 1) {
        for start in 0..run.len() {
            for end in (start + 3)..=run.len() {
                let window = &run[start..end];
                let base: Vec<Card> = window.iter().map(|r| groups[r][0]).collect();
                let top = window.len() - 1;
                for card in &groups[&window[top]] {
                    let mut v = base.clone();
                    v[top] = *card;
                    out.insert(v);
                }
                if let Some(req) = required {
                    if let Some(i) = window.iter().position(|r| *r == req.rank) {
                        let mut v = base.clone();
                        v[i] = req;
                        out.insert(v);
                    }
                }
            }
        }
    }
}

fn pair_run_candidates(
    groups: &BTreeMap<Rank, Vec<Card>>,
    required: Option<Card>,
    out: &mut BTreeSet<Vec<Card>>,
) {
    for run in rank_runs(groups, 2) {
        for start in 0..run.len() {
            for end in (start + 3)..=run.len() {
                let window = &run[start..end];
                let base: Vec<[Card; 2]> = window
                    .iter()
                    .map(|r| [groups[r][0], groups[r][1]])
                    .collect();
                let flatten = |pairs: &[[Card; 2]]| -> Vec<Card> {
                    pairs.iter().flat_map(|p| p.iter().copied()).collect()
                };
                out.insert(flatten(&base));

                let top = window.len() - 1;
                let top_cards = &groups[&window[top]];
                let mut strongest = base.clone();
                strongest[top] = [top_cards[top_cards.len() - 2], top_cards[top_cards.len() - 1]];
                out.insert(flatten(&strongest));

                if let Some(req) = required {
                    if let Some(i) = window.iter().position(|r| *r == req.rank) {
                        if !base[i].contains(&req) {
                            let mut v = base.clone();
                            v[i] = [base[i][0], req];
                            out.insert(flatten(&v));
                        }
                    }
                }
            }
        }
    }
}

/// Plays from `hand` that would be accepted right now.
///
/// `lead` is the play to beat (none when opening); `required` must be part
/// of the play when set. Results are ordered weakest first by top card.
pub fn legal_plays(hand: &[Card], lead: Option<&Play>, required: Option<Card>) -> Vec<Play> {
    let groups = by_rank(hand);
    let mut candidates: BTreeSet<Vec<Card>> = BTreeSet::new();

    for card in hand {
        candidates.insert(vec![*card]);
    }
    for cards in groups.values() {
        for size in 2..=cards.len() {
            candidates.extend(subsets(cards, size));
        }
    }
    straight_candidates(&groups, required, &mut candidates);
    pair_run_candidates(&groups, required, &mut candidates);

    let mut plays: Vec<Play> = candidates
        .into_iter()
        .filter(|cards| required.map_or(true, |req| cards.contains(&req)))
        .filter_map(|cards| classify(&cards).ok())
        .filter(|play| lead.map_or(true, |l| compare(play, l) == Comparison::Higher))
        .collect();
    plays.sort_by_key(|p| (p.max_card(), p.len()));
    plays
}
