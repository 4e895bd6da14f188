//! Combination rules: classify a selection into a play shape and rank two
//! plays against each other, including the bomb overrides on twos.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use super::cards_types::{describe_cards, Card, Rank};
use crate::errors::domain::{DomainError, ValidationKind};

/// Shape of a play without its cards; names a round type.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Single,
    Pair,
    Triple,
    Quad,
    Straight,
    SequentialPairs,
}

impl Shape {
    /// Plural name used for round types ("Straights round").
    pub const fn plural(self) -> &'static str {
        match self {
            Shape::Single => "singles",
            Shape::Pair => "pairs",
            Shape::Triple => "triples",
            Shape::Quad => "quads",
            Shape::Straight => "straights",
            Shape::SequentialPairs => "sequential pairs",
        }
    }
}

/// A classified play. Cards are stored in ascending game order.
///
/// Values are produced by [`classify`]; hand-built values must keep the
/// cards sorted and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "shape", content = "cards", rename_all = "snake_case")]
pub enum Play {
    Single(Card),
    Pair([Card; 2]),
    Triple([Card; 3]),
    Quad([Card; 4]),
    Straight(Vec<Card>),
    SequentialPairs(Vec<Card>),
}

/// Outcome of comparing a proposed play with the leading play.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Comparison {
    Higher,
    Lower,
    /// Keys coincide; only a play against itself gets here.
    Equal,
    /// Different round type and no bomb override applies.
    Incomparable,
}

impl From<Ordering> for Comparison {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Comparison::Higher,
            Ordering::Less => Comparison::Lower,
            Ordering::Equal => Comparison::Equal,
        }
    }
}

impl Play {
    pub fn shape(&self) -> Shape {
        match self {
            Play::Single(_) => Shape::Single,
            Play::Pair(_) => Shape::Pair,
            Play::Triple(_) => Shape::Triple,
            Play::Quad(_) => Shape::Quad,
            Play::Straight(_) => Shape::Straight,
            Play::SequentialPairs(_) => Shape::SequentialPairs,
        }
    }

    pub fn cards(&self) -> &[Card] {
        match self {
            Play::Single(card) => std::slice::from_ref(card),
            Play::Pair(cards) => cards,
            Play::Triple(cards) => cards,
            Play::Quad(cards) => cards,
            Play::Straight(cards) | Play::SequentialPairs(cards) => cards,
        }
    }

    pub fn len(&self) -> usize {
        self.cards().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards().is_empty()
    }

    /// Highest card; rank first, suit as tiebreak.
    pub fn max_card(&self) -> Card {
        match self {
            Play::Single(card) => *card,
            Play::Pair(cards) => cards[1],
            Play::Triple(cards) => cards[2],
            Play::Quad(cards) => cards[3],
            Play::Straight(cards) | Play::SequentialPairs(cards) => cards[cards.len() - 1],
        }
    }

    /// Rank shared by every card of a single, pair, triple or quad.
    pub fn group_rank(&self) -> Option<Rank> {
        match self {
            Play::Single(card) => Some(card.rank),
            Play::Pair([card, ..]) => Some(card.rank),
            Play::Triple([card, ..]) => Some(card.rank),
            Play::Quad([card, ..]) => Some(card.rank),
            Play::Straight(_) | Play::SequentialPairs(_) => None,
        }
    }

    /// Single, pair or triple made of the highest rank.
    pub fn is_highest_group(&self) -> bool {
        matches!(
            self,
            Play::Single(_) | Play::Pair(_) | Play::Triple(_)
        ) && self.group_rank().is_some_and(Rank::is_highest)
    }

    /// Quads and sequential pairs can cut twos.
    pub fn is_bomb(&self) -> bool {
        matches!(self, Play::Quad(_) | Play::SequentialPairs(_))
    }
}

impl fmt::Display for Play {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", describe_cards(self.cards()))
    }
}

fn invalid(detail: impl Into<String>) -> DomainError {
    DomainError::validation(ValidationKind::InvalidCombination, detail)
}

fn ranks_of(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.rank.label())
        .collect::<Vec<_>>()
        .join(", ")
}

fn check_straight(sorted: &[Card]) -> Result<(), String> {
    if sorted.len() < 3 {
        return Err("Straights must have at least 3 cards.".into());
    }
    if sorted.iter().any(|c| c.rank.is_highest()) {
        return Err("Straights cannot contain ranks of 2.".into());
    }
    let consecutive = sorted
        .windows(2)
        .all(|w| w[1].rank.index() == w[0].rank.index() + 1);
    if !consecutive {
        return Err(format!(
            "Straights must be sequential in rank. Current cards: {}",
            ranks_of(sorted)
        ));
    }
    Ok(())
}

fn check_same_rank(sorted: &[Card], name: &str) -> Result<(), String> {
    let first = sorted[0].rank;
    if sorted.iter().all(|c| c.rank == first) {
        Ok(())
    } else {
        Err(format!(
            "{name} must all be the same rank: {}",
            describe_cards(sorted)
        ))
    }
}

fn check_sequential_pairs(sorted: &[Card]) -> Result<(), String> {
    if sorted.len() < 6 {
        return Err("Sequential pairs must have at least 6 cards.".into());
    }
    if sorted.len() % 2 != 0 {
        return Err("Sequential pairs must have an even number of cards.".into());
    }
    if sorted.iter().any(|c| c.rank.is_highest()) {
        return Err("Sequential pairs cannot contain ranks of 2.".into());
    }
    if sorted.chunks(2).any(|pair| pair[0].rank != pair[1].rank) {
        return Err(format!(
            "Sequential pairs must have pairs. Current cards: {}",
            ranks_of(sorted)
        ));
    }
    let consecutive = sorted
        .chunks(2)
        .collect::<Vec<_>>()
        .windows(2)
        .all(|w| w[1][0].rank.index() == w[0][0].rank.index() + 1);
    if !consecutive {
        return Err(format!(
            "Sequential pairs must be sequential in rank. Current cards: {}",
            ranks_of(sorted)
        ));
    }
    Ok(())
}

/// Classify a selection of cards into a play.
///
/// Longer selections try a straight first and fall back to the same-rank or
/// paired shape of that size; the error names both attempted shapes.
pub fn classify(cards: &[Card]) -> Result<Play, DomainError> {
    let mut sorted = cards.to_vec();
    sorted.sort();
    if sorted.windows(2).any(|w| w[0] == w[1]) {
        return Err(DomainError::validation(
            ValidationKind::DuplicateCard,
            "A card cannot be selected twice.",
        ));
    }

    match sorted.len() {
        0 => Err(invalid("Cards are not a valid combination.")),
        1 => Ok(Play::Single(sorted[0])),
        2 => {
            let (a, b) = (sorted[0], sorted[1]);
            if a.rank == b.rank {
                Ok(Play::Pair([a, b]))
            } else {
                Err(invalid(format!(
                    "Pairs must be the same rank: {} does not match {}.",
                    a.rank.label(),
                    b.rank.label()
                )))
            }
        }
        3 => match check_straight(&sorted) {
            Ok(()) => Ok(Play::Straight(sorted)),
            Err(straight) => match check_same_rank(&sorted, "Triples") {
                Ok(()) => Ok(Play::Triple([sorted[0], sorted[1], sorted[2]])),
                Err(triple) => Err(invalid(format!(
                    "Cards are not a valid straight or triple combination. {straight} {triple}"
                ))),
            },
        },
        4 => match check_straight(&sorted) {
            Ok(()) => Ok(Play::Straight(sorted)),
            Err(straight) => match check_same_rank(&sorted, "Quads") {
                Ok(()) => Ok(Play::Quad([sorted[0], sorted[1], sorted[2], sorted[3]])),
                Err(quad) => Err(invalid(format!(
                    "Cards are not a valid straight or quad combination. {straight} {quad}"
                ))),
            },
        },
        _ => match check_straight(&sorted) {
            Ok(()) => Ok(Play::Straight(sorted)),
            Err(straight) => match check_sequential_pairs(&sorted) {
                Ok(()) => Ok(Play::SequentialPairs(sorted)),
                Err(pairs) => Err(invalid(format!(
                    "Cards are not a valid straight or sequential pairs. {straight} {pairs}"
                ))),
            },
        },
    }
}

/// Bomb overrides: quads and sequential pairs cutting plays of twos.
fn bomb_beats(new: &Play, lead: &Play) -> bool {
    if !lead.is_highest_group() {
        return false;
    }
    match (new, lead) {
        (Play::Quad(_), Play::Single(_) | Play::Pair(_)) => true,
        (Play::SequentialPairs(_), Play::Single(_)) => true,
        (Play::SequentialPairs(cards), Play::Pair(_)) => cards.len() > 6,
        (Play::SequentialPairs(cards), Play::Triple(_)) => cards.len() > 8,
        _ => false,
    }
}

/// Compare a proposed play against the current leading play.
pub fn compare(new: &Play, lead: &Play) -> Comparison {
    if bomb_beats(new, lead) {
        return Comparison::Higher;
    }
    match (new, lead) {
        (Play::Single(_), Play::Single(_)) | (Play::Pair(_), Play::Pair(_)) => {
            new.max_card().cmp(&lead.max_card()).into()
        }
        (Play::Triple(_), Play::Triple(_)) | (Play::Quad(_), Play::Quad(_)) => {
            new.group_rank().cmp(&lead.group_rank()).into()
        }
        (Play::Straight(a), Play::Straight(b))
        | (Play::SequentialPairs(a), Play::SequentialPairs(b))
            if a.len() == b.len() =>
        {
            new.max_card().cmp(&lead.max_card()).into()
        }
        _ => Comparison::Incomparable,
    }
}
