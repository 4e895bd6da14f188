//! Metrics collection and output for AI simulation results.

use serde::Serialize;
use tienlen::domain::{GameEvent, WinKind};

use crate::simulator::MatchResult;

/// Complete match metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct MatchMetrics {
    pub match_id: u32,
    pub seed: u64,
    pub timestamp: String,
    pub config: MatchConfig,
    pub result: MatchResultMetrics,
    pub seat_metrics: Vec<SeatMetrics>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchConfig {
    pub ai_types: Vec<String>,
    pub total_matches: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchResultMetrics {
    pub places: Vec<usize>,
    pub winners: Vec<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub instant_wins: Vec<InstantWinMetric>,
    pub rounds: u32,
    pub actions: usize,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct InstantWinMetric {
    pub seat: usize,
    pub kind: WinKind,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeatMetrics {
    pub seat: usize,
    pub ai_type: String,
    pub place: usize,
    pub plays: u32,
    pub passes: u32,
    pub bombs: u32,
    pub cards_played: u32,
    pub rounds_won: u32,
}

/// Flat row for the CSV summary.
#[derive(Debug, Clone, Serialize)]
pub struct CsvSummaryRow {
    pub match_id: u32,
    pub seed: u64,
    pub seats: usize,
    pub winner: String,
    pub instant_win: bool,
    pub rounds: u32,
    pub actions: usize,
    pub places: String,
    pub ai_types: String,
}

impl From<&MatchMetrics> for CsvSummaryRow {
    fn from(metrics: &MatchMetrics) -> Self {
        Self {
            match_id: metrics.match_id,
            seed: metrics.seed,
            seats: metrics.seat_metrics.len(),
            winner: join(&metrics.result.winners),
            instant_win: !metrics.result.instant_wins.is_empty(),
            rounds: metrics.result.rounds,
            actions: metrics.result.actions,
            places: join(&metrics.result.places),
            ai_types: metrics.config.ai_types.join(";"),
        }
    }
}

fn join(values: &[usize]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(";")
}

/// Build metrics from a finished match.
pub fn build_match_metrics(
    match_id: u32,
    ai_types: &[String],
    total_matches: u32,
    result: &MatchResult,
    duration_ms: f64,
) -> MatchMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let seat_metrics = result
        .tallies
        .iter()
        .enumerate()
        .map(|(seat, tally)| SeatMetrics {
            seat,
            ai_type: ai_types.get(seat).cloned().unwrap_or_default(),
            place: result.places[seat],
            plays: tally.plays,
            passes: tally.passes,
            bombs: tally.bombs,
            cards_played: tally.cards_played,
            rounds_won: tally.rounds_won,
        })
        .collect();

    MatchMetrics {
        match_id,
        seed: result.seed,
        timestamp,
        config: MatchConfig {
            ai_types: ai_types.to_vec(),
            total_matches,
        },
        result: MatchResultMetrics {
            places: result.places.clone(),
            winners: result.winners(),
            instant_wins: result
                .instant_wins
                .iter()
                .map(|(seat, kind)| InstantWinMetric {
                    seat: *seat,
                    kind: *kind,
                })
                .collect(),
            rounds: result.rounds,
            actions: result.actions,
            duration_ms,
        },
        seat_metrics,
        events: result.events.clone(),
    }
}

/// Aggregate placement statistics for one seat across many matches.
#[derive(Debug, Clone, Default)]
pub struct SeatSummary {
    pub matches: u32,
    pub wins: u32,
    pub place_total: u64,
    pub instant_wins: u32,
    pub bombs: u32,
}

impl SeatSummary {
    pub fn avg_place(&self) -> f64 {
        if self.matches == 0 {
            return 0.0;
        }
        self.place_total as f64 / self.matches as f64
    }

    pub fn win_rate(&self) -> f64 {
        if self.matches == 0 {
            return 0.0;
        }
        self.wins as f64 / self.matches as f64 * 100.0
    }
}

pub fn summarize(results: &[MatchResult], seats: usize) -> Vec<SeatSummary> {
    let mut summary = vec![SeatSummary::default(); seats];
    for result in results {
        for (seat, place) in result.places.iter().enumerate() {
            let entry = &mut summary[seat];
            entry.matches += 1;
            entry.place_total += *place as u64;
            if *place == 1 {
                entry.wins += 1;
            }
            entry.bombs += result.tallies[seat].bombs;
        }
        for (seat, _) in &result.instant_wins {
            summary[*seat].instant_wins += 1;
        }
    }
    summary
}
