//! Match orchestration: deal, instant wins, successive rounds, finishing
//! order. Every accepted action returns the events it produced; rejected
//! actions return an error and leave the match untouched.

use std::collections::BTreeSet;

use tracing::debug;

use super::dealing::{deal_hands, HANDS_PER_DEAL};
use super::events::{GameEvent, Placement};
use super::hand::Hand;
use super::instant_win::{detect, WinKind};
use super::player_view::{OpponentView, PlayerView};
use super::round::{Round, SeatId};
use super::Card;
use crate::errors::domain::{DomainError, ValidationKind};

pub const MIN_SEATS: usize = 2;
pub const MAX_SEATS: usize = HANDS_PER_DEAL;

/// A seat's move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Play(Vec<Card>),
    Pass,
}

#[derive(Debug, Clone)]
pub struct Seat {
    pub id: SeatId,
    pub hand: Hand,
    /// Finishing place once the hand is empty (or the match ended).
    pub place: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Finished by emptying hands; ranking is the finishing order.
    Ranked,
    /// Ended right after the deal.
    InstantWin { winners: Vec<(SeatId, WinKind)> },
}

#[derive(Debug, Clone)]
pub struct MatchState {
    seats: Vec<Seat>,
    round: Round,
    round_no: u32,
    ranking: Vec<SeatId>,
    discards: Vec<Card>,
    outcome: Option<MatchOutcome>,
}

pub fn validate_seat_count(count: usize) -> Result<(), DomainError> {
    if (MIN_SEATS..=MAX_SEATS).contains(&count) {
        Ok(())
    } else {
        Err(DomainError::validation(
            ValidationKind::InvalidSeatCount,
            format!("A match needs {MIN_SEATS} to {MAX_SEATS} seats, got {count}."),
        ))
    }
}

fn check_deal(hands: &[Vec<Card>]) -> Result<(), DomainError> {
    validate_seat_count(hands.len())?;
    let mut seen = BTreeSet::new();
    for (seat, cards) in hands.iter().enumerate() {
        if cards.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::InvalidDeal,
                format!("Seat {seat} was dealt no cards."),
            ));
        }
        for card in cards {
            if !seen.insert(*card) {
                return Err(DomainError::validation(
                    ValidationKind::InvalidDeal,
                    format!("{card} was dealt twice."),
                ));
            }
        }
    }
    Ok(())
}

impl MatchState {
    /// Deal a fresh match for `seat_count` seats from `seed`.
    pub fn deal(seat_count: usize, seed: u64) -> Result<(Self, Vec<GameEvent>), DomainError> {
        validate_seat_count(seat_count)?;
        let hands: Vec<Vec<Card>> = deal_hands(seed).into_iter().take(seat_count).collect();
        Self::start(hands)
    }

    /// Start a match from explicit hands, one per seat in table order.
    pub fn start(hands: Vec<Vec<Card>>) -> Result<(Self, Vec<GameEvent>), DomainError> {
        check_deal(&hands)?;

        let seats: Vec<Seat> = hands
            .into_iter()
            .enumerate()
            .map(|(id, cards)| Seat {
                id,
                hand: Hand::new(cards),
                place: None,
            })
            .collect();

        let mut events: Vec<GameEvent> = seats
            .iter()
            .map(|s| GameEvent::HandDealt {
                seat: s.id,
                cards: s.hand.sorted(),
            })
            .collect();

        let mut state = Self {
            seats,
            round: Round::open(Vec::new(), None),
            round_no: 0,
            ranking: Vec::new(),
            discards: Vec::new(),
            outcome: None,
        };

        let winners: Vec<(SeatId, WinKind)> = state
            .seats
            .iter()
            .filter_map(|s| detect(&s.hand).map(|kind| (s.id, kind)))
            .collect();
        if !winners.is_empty() {
            state.finish_instant(winners, &mut events);
            return Ok((state, events));
        }

        let (opener, lowest) = state
            .seats
            .iter()
            .filter_map(|s| s.hand.lowest().map(|c| (s.id, c)))
            .min_by_key(|(_, c)| *c)
            .ok_or_else(|| DomainError::invariant("no cards dealt"))?;
        state.open_round(opener, Some(lowest), &mut events);
        state.push_turn(&mut events);
        Ok((state, events))
    }

    fn finish_instant(&mut self, winners: Vec<(SeatId, WinKind)>, events: &mut Vec<GameEvent>) {
        let last = self.seats.len();
        for seat in &mut self.seats {
            let won = winners.iter().any(|(id, _)| *id == seat.id);
            seat.place = Some(if won { 1 } else { last });
        }
        self.ranking = winners.iter().map(|(id, _)| *id).collect();
        self.ranking.extend(
            self.seats
                .iter()
                .map(|s| s.id)
                .filter(|id| !winners.iter().any(|(w, _)| w == id)),
        );
        for (seat, kind) in &winners {
            debug!(seat, kind = %kind, "instant win");
            events.push(GameEvent::InstantWin {
                seat: *seat,
                kind: *kind,
            });
        }
        self.outcome = Some(MatchOutcome::InstantWin { winners });
        events.push(GameEvent::MatchFinished {
            placements: self.placements(),
        });
    }

    fn open_round(&mut self, opener: SeatId, required: Option<Card>, events: &mut Vec<GameEvent>) {
        let n = self.seats.len();
        let order: Vec<SeatId> = (0..n)
            .map(|k| (opener + k) % n)
            .filter(|s| self.seats[*s].place.is_none())
            .collect();
        self.round_no += 1;
        self.round = Round::open(order, required);
        debug!(round_no = self.round_no, opener, "round opened");
        events.push(GameEvent::RoundOpened {
            round_no: self.round_no,
            opener,
            required_card: required,
        });
    }

    fn push_turn(&self, events: &mut Vec<GameEvent>) {
        if self.outcome.is_some() {
            return;
        }
        if let Some(seat) = self.round.actor() {
            events.push(GameEvent::TurnBecame {
                seat,
                leading: self.round.lead().map(|l| l.play.clone()),
                required_card: self.round.required_card(),
                can_pass: self.round.lead().is_some(),
            });
        }
    }

    fn ensure_can_act(&self, seat: SeatId) -> Result<(), DomainError> {
        if self.outcome.is_some() {
            return Err(DomainError::validation(
                ValidationKind::MatchOver,
                "The match is over.",
            ));
        }
        if seat >= self.seats.len() {
            return Err(DomainError::validation(
                ValidationKind::NotYourTurn,
                format!("Seat {seat} is not part of this match."),
            ));
        }
        Ok(())
    }

    /// Reject `seat` unless it is the seat expected to act now.
    pub fn check_turn(&self, seat: SeatId) -> Result<(), DomainError> {
        self.ensure_can_act(seat)?;
        self.round.require_actor(seat)
    }

    /// Apply an action for `seat`.
    pub fn apply(&mut self, seat: SeatId, action: &Action) -> Result<Vec<GameEvent>, DomainError> {
        match action {
            Action::Play(cards) => self.play(seat, cards),
            Action::Pass => self.pass(seat),
        }
    }

    /// Play `cards` from `seat`'s hand.
    pub fn play(&mut self, seat: SeatId, cards: &[Card]) -> Result<Vec<GameEvent>, DomainError> {
        self.ensure_can_act(seat)?;
        let outcome = self
            .round
            .submit(seat, &mut self.seats[seat].hand, cards)?;

        let mut events = Vec::new();
        self.discards.extend_from_slice(outcome.play.cards());
        debug!(seat, play = %outcome.play, finished = outcome.finished, "play accepted");
        events.push(GameEvent::PlayAccepted {
            seat,
            play: outcome.play,
            cards_left: self.seats[seat].hand.len(),
        });

        if outcome.finished {
            let place = self.ranking.len() + 1;
            self.ranking.push(seat);
            self.seats[seat].place = Some(place);
            events.push(GameEvent::SeatFinished { seat, place });

            if self.active_count() <= 1 {
                self.finish_ranked(&mut events);
                return Ok(events);
            }
        }

        if outcome.closed {
            self.close_round(&mut events)?;
        }
        self.push_turn(&mut events);
        Ok(events)
    }

    /// Pass for `seat`; it sits out the rest of the round.
    pub fn pass(&mut self, seat: SeatId) -> Result<Vec<GameEvent>, DomainError> {
        self.ensure_can_act(seat)?;
        let closed = self.round.pass(seat)?;

        let mut events = vec![GameEvent::Passed { seat }];
        if closed {
            self.close_round(&mut events)?;
        }
        self.push_turn(&mut events);
        Ok(events)
    }

    fn close_round(&mut self, events: &mut Vec<GameEvent>) -> Result<(), DomainError> {
        let winner = self
            .round
            .leader()
            .ok_or_else(|| DomainError::invariant("closed round has no leader"))?;
        events.push(GameEvent::RoundClosed {
            round_no: self.round_no,
            winner,
        });

        let opener = self
            .next_opener(winner)
            .ok_or_else(|| DomainError::invariant("no seat can open the next round"))?;
        self.open_round(opener, None, events);
        Ok(())
    }

    /// The round winner opens, or the next unfinished seat after it in table
    /// order that can open a fresh round.
    fn next_opener(&self, winner: SeatId) -> Option<SeatId> {
        let n = self.seats.len();
        (0..n)
            .map(|k| (winner + k) % n)
            .find(|s| self.seats[*s].place.is_none() && self.can_open(*s))
    }

    /// Whether `seat` has an acceptable opening play in an empty round.
    fn can_open(&self, seat: SeatId) -> bool {
        let hand = &self.seats[seat].hand;
        let fresh = Round::open(vec![seat], None);
        hand.lowest()
            .is_some_and(|card| fresh.check_play(hand, &[card]).is_ok())
    }

    fn finish_ranked(&mut self, events: &mut Vec<GameEvent>) {
        let last_place = self.ranking.len() + 1;
        if let Some(last) = self.seats.iter_mut().find(|s| s.place.is_none()) {
            last.place = Some(last_place);
            self.ranking.push(last.id);
        }
        self.outcome = Some(MatchOutcome::Ranked);
        debug!(ranking = ?self.ranking, "match finished");
        events.push(GameEvent::MatchFinished {
            placements: self.placements(),
        });
    }

    fn active_count(&self) -> usize {
        self.seats.iter().filter(|s| s.place.is_none()).count()
    }

    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn hand(&self, seat: SeatId) -> Option<&Hand> {
        self.seats.get(seat).map(|s| &s.hand)
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn round_no(&self) -> u32 {
        self.round_no
    }

    /// Seat expected to act; `None` once the match is over.
    pub fn current_actor(&self) -> Option<SeatId> {
        if self.outcome.is_some() {
            return None;
        }
        self.round.actor()
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn outcome(&self) -> Option<&MatchOutcome> {
        self.outcome.as_ref()
    }

    /// Seats in finishing order so far.
    pub fn ranking(&self) -> &[SeatId] {
        &self.ranking
    }

    pub fn placements(&self) -> Vec<Placement> {
        self.ranking
            .iter()
            .filter_map(|id| {
                self.seats[*id]
                    .place
                    .map(|place| Placement { seat: *id, place })
            })
            .collect()
    }

    /// Cards played so far, in play order.
    pub fn discards(&self) -> &[Card] {
        &self.discards
    }

    /// Every card still in a hand or on the discard pile, sorted.
    pub fn accounted_cards(&self) -> Vec<Card> {
        let mut all: Vec<Card> = self
            .seats
            .iter()
            .flat_map(|s| s.hand.iter().copied())
            .chain(self.discards.iter().copied())
            .collect();
        all.sort();
        all
    }

    /// What `seat` is allowed to know.
    pub fn view_for(&self, seat: SeatId) -> Result<PlayerView, DomainError> {
        let me = self.seats.get(seat).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::NotYourTurn,
                format!("Seat {seat} is not part of this match."),
            )
        })?;
        let is_my_turn = self.current_actor() == Some(seat);
        Ok(PlayerView {
            seat,
            hand: me.hand.sorted(),
            leading: self.round.lead().cloned(),
            required_card: self.round.required_card(),
            is_my_turn,
            can_pass: is_my_turn && self.round.lead().is_some(),
            round_no: self.round_no,
            opponents: self
                .seats
                .iter()
                .filter(|s| s.id != seat)
                .map(|s| OpponentView {
                    seat: s.id,
                    cards_left: s.hand.len(),
                    place: s.place,
                })
                .collect(),
        })
    }
}
