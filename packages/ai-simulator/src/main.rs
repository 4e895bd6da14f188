//! AI Simulator CLI - fast in-memory Tien Len matches for AI evaluation.
//!
//! Matches run entirely in memory against the same rules engine the table
//! server uses, so AI strategies can be compared over thousands of deals.

mod metrics;
mod output;
mod simulator;
mod types;

use clap::{Parser, ValueEnum};
use metrics::{build_match_metrics, summarize};
use output::OutputWriter;
use simulator::{MatchResult, SeatAi, Simulator};
use std::time::Instant;
use tienlen::ai::create_ai;
use tienlen::domain::{derive_ai_seed, derive_dealing_seed};
use tracing::{info, warn};
use types::{MetricsLevel, OutputFormat};

#[derive(Parser)]
#[command(name = "ai-simulator")]
#[command(about = "Fast in-memory Tien Len simulator for AI evaluation")]
struct Args {
    /// Number of matches to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Number of seats at the table
    #[arg(long, default_value = "4", value_parser = clap::value_parser!(u8).range(2..=4))]
    players: u8,

    /// AI type for every seat (shortcut for setting each seat)
    #[arg(long, conflicts_with_all = ["seat0", "seat1", "seat2", "seat3"])]
    seats: Option<AiType>,

    /// AI type for seat 0
    #[arg(long, default_value = "heuristic")]
    seat0: AiType,

    /// AI type for seat 1
    #[arg(long, default_value = "heuristic")]
    seat1: AiType,

    /// AI type for seat 2
    #[arg(long, default_value = "heuristic")]
    seat2: AiType,

    /// AI type for seat 3
    #[arg(long, default_value = "heuristic")]
    seat3: AiType,

    /// Base seed; each match derives its own seed from it
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress the JSONL file with gzip
    #[arg(long)]
    compress: bool,

    /// Metrics detail level
    #[arg(long, default_value = "basic")]
    metrics_level: MetricsLevel,
}

#[derive(Debug, Clone, ValueEnum)]
enum AiType {
    Heuristic,
    Random,
}

impl AiType {
    fn name(&self) -> &'static str {
        match self {
            AiType::Heuristic => "Heuristic",
            AiType::Random => "RandomPlayer", // Actual name in registry
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default, only warnings and errors
    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let seat_count = args.players as usize;
    let seat_types: Vec<AiType> = match args.seats {
        Some(ai) => vec![ai; seat_count],
        None => [args.seat0, args.seat1, args.seat2, args.seat3]
            .into_iter()
            .take(seat_count)
            .collect(),
    };
    let ai_types: Vec<String> = seat_types.iter().map(|t| t.name().to_string()).collect();

    if args.show_output {
        info!("Starting AI simulator");
        info!("Configuration: {} matches, {} seats", args.games, seat_count);
        info!("AI types: {:?}", ai_types);
    }

    let mut output_writer =
        OutputWriter::new(&args.output_dir, &args.output_format, args.compress)?;
    let keep_events = matches!(args.metrics_level, MetricsLevel::Detailed);

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;

    for match_no in 1..=args.games {
        let match_start = Instant::now();
        let match_seed = match args.seed {
            Some(base) => derive_dealing_seed(base, match_no),
            None => rand::random(),
        };

        let ais = create_seats(&ai_types, match_seed)?;
        match Simulator::new(match_seed, keep_events).simulate_match(&ais) {
            Ok(result) => {
                let duration_ms = match_start.elapsed().as_secs_f64() * 1000.0;
                let metrics =
                    build_match_metrics(match_no, &ai_types, args.games, &result, duration_ms);
                if let Err(e) = output_writer.write_match(&metrics) {
                    warn!("Failed to write metrics for match {}: {}", match_no, e);
                }

                if args.verbose {
                    info!("Match {} completed: places={:?}", match_no, result.places);
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!("Match {} failed (seed {}): {}", match_no, match_seed, e);
            }
        }
    }

    let elapsed = start.elapsed();

    let (jsonl_path, csv_path) = output_writer.output_paths();
    let jsonl_path = jsonl_path.cloned();
    let csv_path = csv_path.clone();
    output_writer.finish()?;

    if args.show_output {
        if let Some(path) = jsonl_path {
            info!("Detailed results written to: {}", path.display());
        }
        info!("Summary CSV written to: {}", csv_path.display());
    }

    print_summary(&results, &ai_types, errors, elapsed, args.games);
    Ok(())
}

/// One AI per seat, each seeded from the match seed so a rerun with the same
/// base seed replays every decision.
fn create_seats(
    ai_types: &[String],
    match_seed: u64,
) -> Result<Vec<SeatAi>, Box<dyn std::error::Error>> {
    ai_types
        .iter()
        .enumerate()
        .map(|(seat, name)| {
            create_ai(name, Some(derive_ai_seed(match_seed, seat)))
                .ok_or_else(|| format!("Unknown AI type: {name}").into())
        })
        .collect()
}

fn print_summary(
    results: &[MatchResult],
    ai_types: &[String],
    errors: u32,
    elapsed: std::time::Duration,
    total: u32,
) {
    println!("\n=== Simulation Summary ===");
    println!("Matches completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {errors}");
    }
    println!("Total time: {elapsed:?}");
    if results.is_empty() {
        return;
    }
    println!(
        "Average time per match: {:?}",
        elapsed / results.len() as u32
    );

    let instant = results.iter().filter(|r| !r.instant_wins.is_empty()).count();
    println!("Matches ended by instant win: {instant}");

    println!("\n=== Results by Seat ===");
    for (seat, summary) in summarize(results, ai_types.len()).iter().enumerate() {
        println!(
            "Seat {} ({}): avg place={:.2}, wins={} ({:.1}%), instant wins={}, bombs={}",
            seat,
            ai_types[seat],
            summary.avg_place(),
            summary.wins,
            summary.win_rate(),
            summary.instant_wins,
            summary.bombs
        );
    }
}
