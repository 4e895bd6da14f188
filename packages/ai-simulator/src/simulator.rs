//! In-memory match simulator for AI evaluation.
//!
//! Drives a [`MatchState`] to completion with one AI per seat. Every action
//! goes through the same rules the table server uses, so a rejected move is
//! reported as an AI defect instead of being retried.

use tienlen::ai::{AiError, AiPlayer};
use tienlen::domain::{GameEvent, MatchOutcome, MatchState, Placement, SeatId, WinKind};
use tienlen::DomainError;
use tracing::debug;

/// Upper bound on actions in one match. A 4-seat match needs far fewer; the
/// cap only stops a misbehaving AI from spinning forever.
const MAX_ACTIONS: usize = 2_000;

pub type SeatAi = Box<dyn AiPlayer + Send + Sync>;

/// Per-seat counters collected while a match runs.
#[derive(Debug, Clone, Default)]
pub struct SeatTally {
    pub plays: u32,
    pub passes: u32,
    pub bombs: u32,
    pub cards_played: u32,
    pub rounds_won: u32,
}

/// Result of simulating a complete match.
#[derive(Debug, Clone)]
pub struct MatchResult {
    pub seed: u64,
    /// Finishing place per seat, indexed by seat.
    pub places: Vec<usize>,
    pub instant_wins: Vec<(SeatId, WinKind)>,
    pub rounds: u32,
    pub actions: usize,
    pub tallies: Vec<SeatTally>,
    /// Every event the match produced, in order. Empty unless requested.
    pub events: Vec<GameEvent>,
}

impl MatchResult {
    /// Seats that took first place.
    pub fn winners(&self) -> Vec<SeatId> {
        self.places
            .iter()
            .enumerate()
            .filter(|(_, place)| **place == 1)
            .map(|(seat, _)| seat)
            .collect()
    }
}

pub struct Simulator {
    seed: u64,
    keep_events: bool,
}

impl Simulator {
    pub fn new(seed: u64, keep_events: bool) -> Self {
        Self { seed, keep_events }
    }

    /// Play one match with `ais[seat]` acting for each seat.
    pub fn simulate_match(&self, ais: &[SeatAi]) -> Result<MatchResult, SimulatorError> {
        let (mut state, dealt) = MatchState::deal(ais.len(), self.seed)?;
        let mut tallies = vec![SeatTally::default(); ais.len()];
        let mut events = Vec::new();
        self.record(&mut events, dealt);

        let mut actions = 0;
        while let Some(seat) = state.current_actor() {
            if actions >= MAX_ACTIONS {
                return Err(SimulatorError::Stalled(actions));
            }

            let view = state.view_for(seat)?;
            let action = ais[seat]
                .choose_action(&view)
                .map_err(|e| SimulatorError::Ai(seat, e))?;
            let produced = state.apply(seat, &action)?;

            for event in &produced {
                match event {
                    GameEvent::PlayAccepted { seat, play, .. } => {
                        let tally = &mut tallies[*seat];
                        tally.plays += 1;
                        tally.cards_played += play.len() as u32;
                        if play.is_bomb() {
                            tally.bombs += 1;
                        }
                    }
                    GameEvent::Passed { seat } => tallies[*seat].passes += 1,
                    GameEvent::RoundClosed { winner, .. } => tallies[*winner].rounds_won += 1,
                    GameEvent::PlayRejected { seat, reason, .. } => {
                        return Err(SimulatorError::Rejected(*seat, reason.clone()));
                    }
                    _ => {}
                }
            }
            self.record(&mut events, produced);
            actions += 1;
        }

        let instant_wins = match state.outcome() {
            Some(MatchOutcome::InstantWin { winners }) => winners.clone(),
            Some(MatchOutcome::Ranked) => Vec::new(),
            None => return Err(SimulatorError::Unfinished),
        };

        let mut places = vec![0; ais.len()];
        for Placement { seat, place } in state.placements() {
            places[seat] = place;
        }
        debug!(seed = self.seed, actions, ?places, "match simulated");

        Ok(MatchResult {
            seed: self.seed,
            places,
            instant_wins,
            rounds: state.round_no(),
            actions,
            tallies,
            events,
        })
    }

    fn record(&self, log: &mut Vec<GameEvent>, events: Vec<GameEvent>) {
        if self.keep_events {
            log.extend(events);
        }
    }
}

#[derive(Debug)]
pub enum SimulatorError {
    /// AI returned an error
    Ai(SeatId, AiError),
    /// The engine refused a move the AI chose
    Rejected(SeatId, String),
    Domain(DomainError),
    /// Action cap reached without a result
    Stalled(usize),
    Unfinished,
}

impl From<DomainError> for SimulatorError {
    fn from(err: DomainError) -> Self {
        SimulatorError::Domain(err)
    }
}

impl std::fmt::Display for SimulatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulatorError::Ai(seat, err) => write!(f, "AI error (seat {seat}): {err}"),
            SimulatorError::Rejected(seat, reason) => {
                write!(f, "Move rejected (seat {seat}): {reason}")
            }
            SimulatorError::Domain(err) => write!(f, "Domain error: {err}"),
            SimulatorError::Stalled(actions) => {
                write!(f, "Match did not finish after {actions} actions")
            }
            SimulatorError::Unfinished => write!(f, "Match ended without an outcome"),
        }
    }
}

impl std::error::Error for SimulatorError {}
