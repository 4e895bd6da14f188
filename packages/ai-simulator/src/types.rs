//! Shared types for the simulator.

use clap::ValueEnum;

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per match plus the CSV summary.
    Jsonl,
    /// CSV summary only.
    Summary,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum MetricsLevel {
    Basic,
    /// Also records every event of every match.
    Detailed,
}
