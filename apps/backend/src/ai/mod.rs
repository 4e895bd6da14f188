//! Computer-controlled seats.

mod heuristic;
mod random;
pub mod registry;
mod trait_def;

pub use heuristic::Heuristic;
pub use random::RandomPlayer;
pub use registry::{by_name, registered_ais, AiFactory};
pub use trait_def::{AiError, AiPlayer};

/// Build an AI by registered name, or `None` if unknown.
pub fn create_ai(name: &str, seed: Option<u64>) -> Option<Box<dyn AiPlayer + Send + Sync>> {
    by_name(name).map(|factory| (factory.make)(seed))
}
