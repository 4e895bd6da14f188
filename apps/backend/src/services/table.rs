//! A table: seated players in a lobby, and at most one running match.
//!
//! The table is synchronous and owns all of its state; the server runs one
//! task per table and calls into it one message at a time. Every outcome is
//! reported through a [`Notifier`].

use tracing::{debug, info, warn};

use super::notify::{LobbyEvent, Notifier, TableEvent};
use crate::domain::match_state::{validate_seat_count, MatchState, MAX_SEATS, MIN_SEATS};
use crate::domain::{derive_dealing_seed, Action, Audience, Card, GameEvent, SeatId};
use crate::errors::domain::{DomainError, ValidationKind};

pub type TableId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    /// Capacity; the match starts by itself once this many have joined.
    pub seats: usize,
    pub seed: u64,
}

impl TableConfig {
    pub fn new(seats: usize, seed: u64) -> Result<Self, DomainError> {
        validate_seat_count(seats)?;
        Ok(Self { seats, seed })
    }
}

/// A seat's in-match command, already split from the raw line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Pass,
    /// 1-based positions into the seat's sorted hand.
    Select(Vec<usize>),
}

fn lobby_error(detail: impl Into<String>) -> DomainError {
    DomainError::validation(ValidationKind::Lobby, detail)
}

pub struct Table {
    id: TableId,
    config: TableConfig,
    /// Seat order; index is the seat id of the next match. Host is first.
    players: Vec<String>,
    running: Option<MatchState>,
    match_no: u32,
}

impl Table {
    pub fn new(id: TableId, config: TableConfig) -> Self {
        Self {
            id,
            config,
            players: Vec::new(),
            running: None,
            match_no: 0,
        }
    }

    pub fn id(&self) -> TableId {
        self.id
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    pub fn host(&self) -> Option<&str> {
        self.players.first().map(String::as_str)
    }

    pub fn seat_of(&self, name: &str) -> Option<SeatId> {
        self.players.iter().position(|p| p == name)
    }

    pub fn in_match(&self) -> bool {
        self.running.is_some()
    }

    pub fn match_no(&self) -> u32 {
        self.match_no
    }

    /// Accepting players: in the lobby with a free seat.
    pub fn is_open(&self) -> bool {
        self.running.is_none() && self.players.len() < self.config.seats
    }

    pub fn running_match(&self) -> Option<&MatchState> {
        self.running.as_ref()
    }

    /// Seat's sorted hand while a match runs.
    pub fn hand_of(&self, seat: SeatId) -> Option<Vec<Card>> {
        self.running
            .as_ref()
            .and_then(|m| m.hand(seat))
            .map(|h| h.sorted())
    }

    pub fn join(
        &mut self,
        name: &str,
        notifier: &mut impl Notifier,
    ) -> Result<SeatId, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(lobby_error("Please enter a name."));
        }
        if self.running.is_some() {
            return Err(lobby_error("A match is in progress at this table."));
        }
        if self.players.len() >= self.config.seats {
            return Err(lobby_error("This table is full."));
        }
        if self.seat_of(name).is_some() {
            return Err(lobby_error(format!("The name {name} is already taken.")));
        }

        self.players.push(name.to_string());
        let seat = self.players.len() - 1;
        info!(table_id = self.id, seat, name, "player joined");
        notifier.notify(
            Audience::All,
            &LobbyEvent::PlayerJoined {
                seat,
                name: name.to_string(),
                players: self.players.len(),
                capacity: self.config.seats,
            }
            .into(),
        );

        if self.players.len() == self.config.seats {
            self.start_match(notifier)?;
        }
        Ok(seat)
    }

    /// Remove a player. Leaving mid-match discards the match.
    pub fn leave(&mut self, name: &str, notifier: &mut impl Notifier) -> Result<(), DomainError> {
        let seat = self
            .seat_of(name)
            .ok_or_else(|| lobby_error(format!("{name} is not at this table.")))?;

        if self.running.take().is_some() {
            warn!(table_id = self.id, name, "player left during a match");
            notifier.notify(
                Audience::All,
                &LobbyEvent::MatchAborted {
                    name: name.to_string(),
                }
                .into(),
            );
        }

        self.players.remove(seat);
        info!(table_id = self.id, seat, name, "player left");
        notifier.notify(
            Audience::All,
            &LobbyEvent::PlayerLeft {
                name: name.to_string(),
            }
            .into(),
        );
        if seat == 0 {
            if let Some(host) = self.players.first() {
                notifier.notify(
                    Audience::All,
                    &LobbyEvent::HostChanged {
                        seat: 0,
                        name: host.clone(),
                    }
                    .into(),
                );
            }
        }
        Ok(())
    }

    /// Host-requested start with fewer than the configured seats.
    pub fn start(
        &mut self,
        requester: &str,
        notifier: &mut impl Notifier,
    ) -> Result<(), DomainError> {
        if self.running.is_some() {
            return Err(lobby_error("A match is already in progress."));
        }
        if self.host() != Some(requester) {
            return Err(lobby_error("Only the host can start the match."));
        }
        if self.players.len() < MIN_SEATS {
            return Err(DomainError::validation(
                ValidationKind::InvalidSeatCount,
                format!("At least {MIN_SEATS} players are needed to start."),
            ));
        }
        self.start_match(notifier)
    }

    fn start_match(&mut self, notifier: &mut impl Notifier) -> Result<(), DomainError> {
        let seats = self.players.len().min(MAX_SEATS);
        self.match_no += 1;
        let seed = derive_dealing_seed(self.config.seed, self.match_no);
        let (state, events) = MatchState::deal(seats, seed)?;
        info!(table_id = self.id, match_no = self.match_no, seats, "match starting");

        notifier.notify(
            Audience::All,
            &LobbyEvent::MatchStarting {
                match_no: self.match_no,
                players: self.players.clone(),
            }
            .into(),
        );
        self.running = Some(state);
        self.publish(events, notifier);
        Ok(())
    }

    /// Apply a seat's command to the running match.
    ///
    /// Rejections are sent to that seat only and also returned; the match
    /// is unchanged in that case.
    pub fn handle(
        &mut self,
        seat: SeatId,
        command: Command,
        notifier: &mut impl Notifier,
    ) -> Result<(), DomainError> {
        let result = match (self.running.as_mut(), command) {
            (None, _) => Err(DomainError::validation(
                ValidationKind::MatchOver,
                "No match is running. Waiting in the lobby.",
            )),
            (Some(state), Command::Pass) => state.apply(seat, &Action::Pass),
            // NotYourTurn takes precedence over position errors.
            (Some(state), Command::Select(positions)) => state
                .check_turn(seat)
                .and_then(|()| {
                    state.hand(seat).ok_or_else(|| {
                        DomainError::invariant(format!("seat {seat} has no hand"))
                    })
                })
                .and_then(|hand| hand.select_positions(&positions))
                .and_then(|cards| state.apply(seat, &Action::Play(cards))),
        };

        match result {
            Ok(events) => {
                self.publish(events, notifier);
                Ok(())
            }
            Err(err) => {
                debug!(table_id = self.id, seat, code = %err.code(), "action rejected");
                notifier.notify(
                    Audience::Seat(seat),
                    &GameEvent::PlayRejected {
                        seat,
                        code: err.code(),
                        reason: err.to_string(),
                    }
                    .into(),
                );
                Err(err)
            }
        }
    }

    fn publish(&mut self, events: Vec<GameEvent>, notifier: &mut impl Notifier) {
        let finished = events
            .iter()
            .any(|e| matches!(e, GameEvent::MatchFinished { .. }));
        for event in events {
            notifier.notify(event.audience(), &TableEvent::Game(event));
        }
        if finished {
            info!(table_id = self.id, match_no = self.match_no, "match finished");
            self.running = None;
            notifier.notify(Audience::All, &LobbyEvent::BackToLobby.into());
        }
    }
}
