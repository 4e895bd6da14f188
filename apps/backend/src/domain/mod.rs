//! Domain layer: pure game logic types and helpers.

pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod combos;
pub mod dealing;
pub mod events;
pub mod hand;
pub mod instant_win;
pub mod legal;
pub mod match_state;
pub mod player_view;
pub mod round;
pub mod seed_derivation;

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_combos;
#[cfg(test)]
mod tests_instant_win;
#[cfg(test)]
mod tests_match;
#[cfg(test)]
mod tests_props_combos;
#[cfg(test)]
mod tests_props_match;

// Re-exports for ergonomics
pub use cards_types::{Card, Rank, Suit};
pub use combos::{classify, compare, Comparison, Play, Shape};
pub use dealing::deal_hands;
pub use events::{Audience, GameEvent, Placement};
pub use hand::Hand;
pub use instant_win::WinKind;
pub use match_state::{Action, MatchOutcome, MatchState};
pub use player_view::{OpponentView, PlayerView};
pub use round::{Lead, RoundPhase, SeatId};
pub use seed_derivation::{derive_ai_seed, derive_dealing_seed};
