//! Card parsing from string tokens (e.g., "3S", "TH", "10H", "2C")

use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

fn parse_error(s: &str) -> DomainError {
    DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"))
}

impl FromStr for Rank {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s {
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" | "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            "2" => Rank::Two,
            _ => return Err(parse_error(s)),
        };
        Ok(rank)
    }
}

impl FromStr for Suit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "S" | "♠" => Ok(Suit::Spades),
            "C" | "♣" => Ok(Suit::Clubs),
            "D" | "♦" => Ok(Suit::Diamonds),
            "H" | "♥" => Ok(Suit::Hearts),
            _ => Err(parse_error(s)),
        }
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_uppercase();
        // Suit is always the last character; the rank is everything before it.
        let Some((split, _)) = token.char_indices().last() else {
            return Err(parse_error(s));
        };
        if split == 0 {
            return Err(parse_error(s));
        }
        let (rank_part, suit_part) = token.split_at(split);
        let rank = rank_part.parse::<Rank>().map_err(|_| parse_error(s))?;
        let suit = suit_part.parse::<Suit>().map_err(|_| parse_error(s))?;
        Ok(Card { rank, suit })
    }
}

/// Non-panicking helper to parse card tokens into Card instances.
/// Returns Result<Vec<Card>, DomainError> if any token is invalid.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
