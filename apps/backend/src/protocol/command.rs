//! Inbound lines from a connected player.

use crate::errors::domain::{DomainError, ValidationKind};
use crate::services::Command;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    Pass,
    /// 1-based hand positions, unchecked against the hand size.
    Select(Vec<usize>),
    Start,
    Hand,
    Exit,
}

impl Inbound {
    /// The in-match part of a line, if any.
    pub fn into_command(self) -> Option<Command> {
        match self {
            Inbound::Pass => Some(Command::Pass),
            Inbound::Select(positions) => Some(Command::Select(positions)),
            Inbound::Start | Inbound::Hand | Inbound::Exit => None,
        }
    }
}

pub fn parse_line(line: &str) -> Result<Inbound, DomainError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::EmptySelection,
            "Enter pass or the positions of the cards to play.",
        ));
    }

    match line.to_ascii_lowercase().as_str() {
        "pass" | "p" => return Ok(Inbound::Pass),
        "start" => return Ok(Inbound::Start),
        "hand" | "h" => return Ok(Inbound::Hand),
        "exit" | "quit" => return Ok(Inbound::Exit),
        _ => {}
    }

    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(|t| {
            t.parse::<usize>().map_err(|_| {
                DomainError::validation(
                    ValidationKind::InvalidSelection,
                    format!("{t} is not a card position. Enter numbers such as 1 3 4, or pass."),
                )
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Inbound::Select)
}
