//! Events emitted by the match; consumers render them for each seat.

use serde::Serialize;

use super::combos::Play;
use super::instant_win::WinKind;
use super::round::SeatId;
use super::Card;
use crate::errors::ErrorCode;

/// Who should receive an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    All,
    Seat(SeatId),
}

impl Audience {
    pub fn includes(self, seat: SeatId) -> bool {
        match self {
            Audience::All => true,
            Audience::Seat(s) => s == seat,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub seat: SeatId,
    /// 1 is first. Instant-win matches share places.
    pub place: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// Private: the cards a seat was dealt.
    HandDealt { seat: SeatId, cards: Vec<Card> },

    InstantWin { seat: SeatId, kind: WinKind },

    RoundOpened {
        round_no: u32,
        opener: SeatId,
        required_card: Option<Card>,
    },

    /// Edge-triggered: the turn moved to `seat`.
    TurnBecame {
        seat: SeatId,
        leading: Option<Play>,
        required_card: Option<Card>,
        can_pass: bool,
    },

    PlayAccepted {
        seat: SeatId,
        play: Play,
        cards_left: usize,
    },

    Passed { seat: SeatId },

    /// Private: an action was refused; state is unchanged.
    PlayRejected {
        seat: SeatId,
        code: ErrorCode,
        reason: String,
    },

    SeatFinished { seat: SeatId, place: usize },

    RoundClosed { round_no: u32, winner: SeatId },

    MatchFinished { placements: Vec<Placement> },
}

impl GameEvent {
    pub fn audience(&self) -> Audience {
        match self {
            GameEvent::HandDealt { seat, .. } | GameEvent::PlayRejected { seat, .. } => {
                Audience::Seat(*seat)
            }
            _ => Audience::All,
        }
    }
}
