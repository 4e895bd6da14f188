//! A seat's hand: an ordered set of cards that only ever shrinks.

use std::collections::{BTreeMap, BTreeSet};

use super::cards_types::{Card, Rank};
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: BTreeSet<Card>,
}

impl Hand {
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Cards in game order, lowest first.
    pub fn sorted(&self) -> Vec<Card> {
        self.cards.iter().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn lowest(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Number of cards held per rank.
    pub fn rank_counts(&self) -> BTreeMap<Rank, usize> {
        let mut counts = BTreeMap::new();
        for card in &self.cards {
            *counts.entry(card.rank).or_insert(0) += 1;
        }
        counts
    }

    /// Resolve 1-based positions in the sorted hand to cards.
    pub fn select_positions(&self, positions: &[usize]) -> Result<Vec<Card>, DomainError> {
        let sorted = self.sorted();
        positions
            .iter()
            .map(|&pos| {
                pos.checked_sub(1)
                    .and_then(|i| sorted.get(i).copied())
                    .ok_or_else(|| {
                        DomainError::validation(
                            ValidationKind::InvalidSelection,
                            format!("Please enter only numbers from 1-{}.", sorted.len()),
                        )
                    })
            })
            .collect()
    }

    /// Check a selection is non-empty, duplicate-free and fully held.
    pub fn check_selection(&self, cards: &[Card]) -> Result<(), DomainError> {
        if cards.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::EmptySelection,
                "Select at least one card.",
            ));
        }
        let mut seen = BTreeSet::new();
        for card in cards {
            if !seen.insert(*card) {
                return Err(DomainError::validation(
                    ValidationKind::DuplicateCard,
                    format!("{card} selected more than once."),
                ));
            }
            if !self.cards.contains(card) {
                return Err(DomainError::validation(
                    ValidationKind::CardNotInHand,
                    format!("{card} is not in your hand."),
                ));
            }
        }
        Ok(())
    }

    /// Remove a checked selection. Callers validate with `check_selection` first.
    pub(crate) fn remove_all(&mut self, cards: &[Card]) {
        for card in cards {
            self.cards.remove(card);
        }
    }
}
