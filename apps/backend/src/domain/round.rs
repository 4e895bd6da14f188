//! One sub-round: a leading play and the rotation of seats still in it.
//!
//! Turn order is a vector of seat ids plus a cursor. Playing moves the actor
//! to the back (cursor advances); passing or emptying a hand removes the
//! actor from the rotation. The round closes once one member remains.

use serde::Serialize;

use super::combos::{classify, compare, Comparison, Play};
use super::hand::Hand;
use super::Card;
use crate::errors::domain::{DomainError, ValidationKind};

pub type SeatId = usize;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RoundPhase {
    /// No leading play yet.
    Opening,
    /// A leading play exists; others beat it or pass.
    Led,
    /// One rotation member left.
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lead {
    pub seat: SeatId,
    pub play: Play,
}

/// What an accepted play did to the round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    pub play: Play,
    /// The actor's hand is now empty.
    pub finished: bool,
    /// The round closed as a result.
    pub closed: bool,
}

#[derive(Debug, Clone)]
pub struct Round {
    rotation: Vec<SeatId>,
    cursor: usize,
    lead: Option<Lead>,
    required: Option<Card>,
}

impl Round {
    /// Open a round. `order` starts with the opener, in table order.
    pub fn open(order: Vec<SeatId>, required: Option<Card>) -> Self {
        Self {
            rotation: order,
            cursor: 0,
            lead: None,
            required,
        }
    }

    pub fn phase(&self) -> RoundPhase {
        if self.rotation.len() <= 1 && self.lead.is_some() {
            RoundPhase::Closed
        } else if self.lead.is_some() {
            RoundPhase::Led
        } else {
            RoundPhase::Opening
        }
    }

    /// Seat expected to act, if the round is still open.
    pub fn actor(&self) -> Option<SeatId> {
        if self.phase() == RoundPhase::Closed {
            return None;
        }
        self.rotation.get(self.cursor).copied()
    }

    pub fn lead(&self) -> Option<&Lead> {
        self.lead.as_ref()
    }

    /// Required card, only while nothing has been played.
    pub fn required_card(&self) -> Option<Card> {
        match self.lead {
            None => self.required,
            Some(_) => None,
        }
    }

    pub fn rotation(&self) -> &[SeatId] {
        &self.rotation
    }

    /// Current leader; the winner once closed.
    pub fn leader(&self) -> Option<SeatId> {
        self.lead.as_ref().map(|l| l.seat)
    }

    pub(crate) fn require_actor(&self, seat: SeatId) -> Result<(), DomainError> {
        match self.actor() {
            Some(actor) if actor == seat => Ok(()),
            Some(actor) => Err(DomainError::validation(
                ValidationKind::NotYourTurn,
                format!("Not your turn. Waiting on seat {actor}."),
            )),
            None => Err(DomainError::invariant("round is closed")),
        }
    }

    /// Validate a selection against this round without changing anything.
    pub fn check_play(&self, hand: &Hand, cards: &[Card]) -> Result<Play, DomainError> {
        hand.check_selection(cards)?;
        if let Some(required) = self.required_card() {
            if !cards.contains(&required) {
                return Err(DomainError::validation(
                    ValidationKind::MissingRequiredCard,
                    format!("First round, first play requires {required}."),
                ));
            }
        }
        let play = classify(cards)?;
        let Some(lead) = &self.lead else {
            return Ok(play);
        };
        match compare(&play, &lead.play) {
            Comparison::Higher => Ok(play),
            Comparison::Lower | Comparison::Equal => Err(DomainError::validation(
                ValidationKind::NotHighEnough,
                format!("Combination must be higher than {}.", lead.play),
            )),
            Comparison::Incomparable => Err(DomainError::validation(
                ValidationKind::Incomparable,
                format!(
                    "Round is {}. Play only this combination of cards.",
                    lead.play.shape().plural()
                ),
            )),
        }
    }

    /// Submit a play for `seat`. On error nothing changes.
    pub fn submit(
        &mut self,
        seat: SeatId,
        hand: &mut Hand,
        cards: &[Card],
    ) -> Result<PlayOutcome, DomainError> {
        self.require_actor(seat)?;
        let play = self.check_play(hand, cards)?;

        hand.remove_all(play.cards());
        self.lead = Some(Lead {
            seat,
            play: play.clone(),
        });

        let finished = hand.is_empty();
        if finished {
            self.remove_actor();
        } else {
            self.cursor = (self.cursor + 1) % self.rotation.len();
        }

        Ok(PlayOutcome {
            play,
            finished,
            closed: self.phase() == RoundPhase::Closed,
        })
    }

    /// Pass for `seat`; returns whether the round closed.
    pub fn pass(&mut self, seat: SeatId) -> Result<bool, DomainError> {
        self.require_actor(seat)?;
        if self.lead.is_none() {
            return Err(DomainError::validation(
                ValidationKind::PassNotAllowed,
                "New round. Play any combination to start.",
            ));
        }
        self.remove_actor();
        Ok(self.phase() == RoundPhase::Closed)
    }

    fn remove_actor(&mut self) {
        self.rotation.remove(self.cursor);
        if self.rotation.is_empty() {
            self.cursor = 0;
        } else {
            self.cursor %= self.rotation.len();
        }
    }
}
