//! RNG seed derivation utilities for deterministic table behavior.
//!
//! A table is created with one base seed; every match dealt at that table
//! derives its own seed so consecutive matches differ but stay reproducible.

/// Derive a seed for dealing the `match_no`-th match at a table.
///
/// # Arguments
///
/// * `table_seed` - Base RNG seed of the table
/// * `match_no` - 1-based match counter at that table
pub fn derive_dealing_seed(table_seed: u64, match_no: u32) -> u64 {
    // Simple arithmetic derivation; the multiplier spreads neighbouring matches.
    table_seed
        .wrapping_add((match_no as u64).wrapping_mul(1_000_003))
        .wrapping_add(2)
}

/// Derive a seed for an AI seat so seats at one table make different choices.
pub fn derive_ai_seed(table_seed: u64, seat: usize) -> u64 {
    table_seed
        .wrapping_add((seat as u64).wrapping_mul(100))
        .wrapping_add(1)
}
