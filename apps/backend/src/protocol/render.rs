//! Text rendering of table events for line-based clients.

use crate::domain::{Card, GameEvent, Play, SeatId};
use crate::services::{LobbyEvent, TableEvent};

/// Who is reading, and what they currently hold.
pub struct Viewer<'a> {
    pub seat: SeatId,
    pub names: &'a [String],
    pub hand: &'a [Card],
}

impl Viewer<'_> {
    fn name(&self, seat: SeatId) -> String {
        if seat == self.seat {
            return "You".to_string();
        }
        self.names
            .get(seat)
            .cloned()
            .unwrap_or_else(|| format!("Seat {}", seat + 1))
    }
}

fn ordinal(place: usize) -> String {
    let suffix = match (place % 10, place % 100) {
        (1, n) if n != 11 => "st",
        (2, n) if n != 12 => "nd",
        (3, n) if n != 13 => "rd",
        _ => "th",
    };
    format!("{place}{suffix}")
}

/// Two rows: the cards, and their 1-based positions underneath.
pub fn hand_grid(cards: &[Card]) -> [String; 2] {
    let mut top = String::new();
    let mut bottom = String::new();
    for (i, card) in cards.iter().enumerate() {
        let label = card.to_string();
        let pos = (i + 1).to_string();
        let width = label.chars().count().max(pos.len()) + 2;
        top.push_str(&format!("{label:<width$}"));
        bottom.push_str(&format!("{pos:<width$}"));
    }
    [top.trim_end().to_string(), bottom.trim_end().to_string()]
}

fn describe_play(play: &Play) -> String {
    format!("{play} ({})", play.shape().plural().trim_end_matches('s'))
}

pub fn render_event(event: &TableEvent, viewer: &Viewer<'_>) -> Vec<String> {
    match event {
        TableEvent::Lobby(ev) => render_lobby(ev),
        TableEvent::Game(ev) => render_game(ev, viewer),
    }
}

fn render_lobby(event: &LobbyEvent) -> Vec<String> {
    let line = match event {
        LobbyEvent::PlayerJoined {
            name,
            players,
            capacity,
            ..
        } => format!("{name} joined the table ({players}/{capacity})."),
        LobbyEvent::PlayerLeft { name } => format!("{name} left the table."),
        LobbyEvent::HostChanged { name, .. } => format!("{name} is now the host."),
        LobbyEvent::MatchStarting { match_no, players } => {
            format!("Match {match_no} is starting: {}.", players.join(", "))
        }
        LobbyEvent::MatchAborted { name } => {
            format!("{name} left during the match. The match is cancelled.")
        }
        LobbyEvent::BackToLobby => {
            "Back in the lobby. The host can type start for another match.".to_string()
        }
    };
    vec![line]
}

fn render_game(event: &GameEvent, viewer: &Viewer<'_>) -> Vec<String> {
    match event {
        GameEvent::HandDealt { cards, .. } => {
            let [top, bottom] = hand_grid(cards);
            vec!["Your hand:".to_string(), top, bottom]
        }
        GameEvent::InstantWin { seat, kind } => {
            vec![format!("{} won instantly with {kind}!", viewer.name(*seat))]
        }
        GameEvent::RoundOpened {
            round_no,
            opener,
            required_card,
        } => {
            let mut lines = vec![format!(
                "Round {round_no}: {} to open.",
                viewer.name(*opener)
            )];
            if let Some(card) = required_card {
                lines.push(format!("The first play must include {card}."));
            }
            lines
        }
        GameEvent::TurnBecame {
            seat,
            leading,
            required_card,
            can_pass,
        } if *seat == viewer.seat => {
            let mut lines = vec!["Your turn.".to_string()];
            match leading {
                Some(play) => lines.push(format!("Beat {}.", describe_play(play))),
                None => lines.push("New round. Play any combination.".to_string()),
            }
            if let Some(card) = required_card {
                lines.push(format!("Include {card}."));
            }
            let [top, bottom] = hand_grid(viewer.hand);
            lines.push(top);
            lines.push(bottom);
            lines.push(if *can_pass {
                "Enter card positions, or pass.".to_string()
            } else {
                "Enter card positions.".to_string()
            });
            lines
        }
        GameEvent::TurnBecame { seat, .. } => {
            vec![format!("Waiting for {}.", viewer.name(*seat))]
        }
        GameEvent::PlayAccepted {
            seat,
            play,
            cards_left,
        } => vec![format!(
            "{} played {} with {cards_left} card(s) left.",
            viewer.name(*seat),
            describe_play(play)
        )],
        GameEvent::Passed { seat } => vec![format!("{} passed.", viewer.name(*seat))],
        GameEvent::PlayRejected { reason, .. } => vec![reason.clone()],
        GameEvent::SeatFinished { seat, place } => vec![format!(
            "{} finished {}.",
            viewer.name(*seat),
            ordinal(*place)
        )],
        GameEvent::RoundClosed { round_no, winner } => {
            vec![format!("{} won round {round_no}.", viewer.name(*winner))]
        }
        GameEvent::MatchFinished { placements } => {
            let mut lines = vec!["Final ranking:".to_string()];
            lines.extend(
                placements
                    .iter()
                    .map(|p| format!("{} {}", ordinal(p.place), viewer.name(p.seat))),
            );
            lines
        }
    }
}
