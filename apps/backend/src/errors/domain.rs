//! Domain-level error type used by the rules engine, the table service and
//! the protocol layer.
//!
//! Every rejection a player can cause is a `Validation` error: it is local,
//! recoverable and leaves all state untouched. `Invariant` is reserved for
//! internal bookkeeping that should never be observable.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::errors::ErrorCode;

/// Validation kinds; one per user-correctable rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Selection does not form any recognized shape.
    InvalidCombination,
    /// Shape cannot be compared with the current leading play.
    Incomparable,
    /// Comparable play that does not beat the lead.
    NotHighEnough,
    /// Opening play of the first round omits the required low card.
    MissingRequiredCard,
    /// Action from a seat that is not the current actor.
    NotYourTurn,
    /// Pass while no leading play exists.
    PassNotAllowed,
    /// Empty selection.
    EmptySelection,
    /// Selected card is not held by the acting seat.
    CardNotInHand,
    /// Same card selected twice.
    DuplicateCard,
    /// Action after the match has ended.
    MatchOver,
    /// Seat count outside 2..=4.
    InvalidSeatCount,
    /// Dealt hands are malformed (overlapping or too few).
    InvalidDeal,
    /// Card token could not be parsed.
    ParseCard,
    /// Hand position out of range or not a number.
    InvalidSelection,
    /// Lobby rule violation (name taken, table full, not host).
    Lobby,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input/user validation or rule violation
    Validation(ValidationKind, String),
    /// Internal invariant breach
    Invariant(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(_, d) => write!(f, "{d}"),
            DomainError::Invariant(d) => write!(f, "invariant violated: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::Invariant(detail.into())
    }

    pub fn kind(&self) -> Option<&ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(kind),
            DomainError::Invariant(_) => None,
        }
    }

    /// Wire code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::Validation(kind, _) => ErrorCode::from(kind),
            DomainError::Invariant(_) => ErrorCode::InternalError,
        }
    }
}
