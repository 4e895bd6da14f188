//! Error codes for the table protocol.
//!
//! This module defines all error codes sent to clients alongside a rejection.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear on the wire.

use core::fmt;

use serde::Serialize;

use crate::errors::domain::ValidationKind;

/// Centralized error codes for rejected actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Play validation
    /// Selection is not a recognized combination
    InvalidCombination,
    /// Wrong round type for the leading play
    Incomparable,
    /// Play does not beat the leading play
    NotHighEnough,
    /// First play of the match omits the lowest card
    MissingRequiredCard,
    /// Out of turn
    NotYourTurn,
    /// Pass without a leading play
    PassNotAllowed,
    /// No cards selected
    EmptySelection,
    /// Card not in hand
    CardNotInHand,
    /// Card selected twice
    DuplicateCard,
    /// Match already over
    MatchOver,

    // Setup
    /// Seat count outside 2..=4
    InvalidSeatCount,
    /// Dealt hands are malformed
    InvalidDeal,

    // Protocol
    /// Parse card error
    ParseCard,
    /// Bad hand position
    InvalidSelection,
    /// Lobby rule violation
    LobbyError,

    /// Internal error (explicit problem code)
    InternalError,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidCombination => "INVALID_COMBINATION",
            Self::Incomparable => "INCOMPARABLE",
            Self::NotHighEnough => "NOT_HIGH_ENOUGH",
            Self::MissingRequiredCard => "MISSING_REQUIRED_CARD",
            Self::NotYourTurn => "NOT_YOUR_TURN",
            Self::PassNotAllowed => "PASS_NOT_ALLOWED",
            Self::EmptySelection => "EMPTY_SELECTION",
            Self::CardNotInHand => "CARD_NOT_IN_HAND",
            Self::DuplicateCard => "DUPLICATE_CARD",
            Self::MatchOver => "MATCH_OVER",

            Self::InvalidSeatCount => "INVALID_SEAT_COUNT",
            Self::InvalidDeal => "INVALID_DEAL",

            Self::ParseCard => "PARSE_CARD",
            Self::InvalidSelection => "INVALID_SELECTION",
            Self::LobbyError => "LOBBY_ERROR",

            Self::InternalError => "INTERNAL_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl From<&ValidationKind> for ErrorCode {
    fn from(kind: &ValidationKind) -> Self {
        match kind {
            ValidationKind::InvalidCombination => Self::InvalidCombination,
            ValidationKind::Incomparable => Self::Incomparable,
            ValidationKind::NotHighEnough => Self::NotHighEnough,
            ValidationKind::MissingRequiredCard => Self::MissingRequiredCard,
            ValidationKind::NotYourTurn => Self::NotYourTurn,
            ValidationKind::PassNotAllowed => Self::PassNotAllowed,
            ValidationKind::EmptySelection => Self::EmptySelection,
            ValidationKind::CardNotInHand => Self::CardNotInHand,
            ValidationKind::DuplicateCard => Self::DuplicateCard,
            ValidationKind::MatchOver => Self::MatchOver,
            ValidationKind::InvalidSeatCount => Self::InvalidSeatCount,
            ValidationKind::InvalidDeal => Self::InvalidDeal,
            ValidationKind::ParseCard => Self::ParseCard,
            ValidationKind::InvalidSelection => Self::InvalidSelection,
            ValidationKind::Lobby => Self::LobbyError,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
