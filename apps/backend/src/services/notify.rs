//! Outbound seam between a table and whatever delivers messages to seats.

use serde::Serialize;

use crate::domain::{Audience, GameEvent, SeatId};

/// Lobby-level happenings around matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LobbyEvent {
    PlayerJoined {
        seat: SeatId,
        name: String,
        players: usize,
        capacity: usize,
    },
    PlayerLeft { name: String },
    HostChanged { seat: SeatId, name: String },
    MatchStarting { match_no: u32, players: Vec<String> },
    /// A player left mid-match; the match is discarded.
    MatchAborted { name: String },
    BackToLobby,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TableEvent {
    Lobby(LobbyEvent),
    Game(GameEvent),
}

impl From<LobbyEvent> for TableEvent {
    fn from(ev: LobbyEvent) -> Self {
        TableEvent::Lobby(ev)
    }
}

impl From<GameEvent> for TableEvent {
    fn from(ev: GameEvent) -> Self {
        TableEvent::Game(ev)
    }
}

pub trait Notifier {
    fn notify(&mut self, audience: Audience, event: &TableEvent);
}

/// Collects notifications in order; used by tests and the simulator.
impl Notifier for Vec<(Audience, TableEvent)> {
    fn notify(&mut self, audience: Audience, event: &TableEvent) {
        self.push((audience, event.clone()));
    }
}
