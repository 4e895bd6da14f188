//! Heuristic: a deterministic baseline that sheds low cards and saves twos.
//!
//! Opening a round:
//! - Get rid of the lowest card, inside the longest play that starts with it
//!   (a low straight over a low single).
//! - Keep twos and bombs back while anything else is available.
//!
//! Following:
//! - Beat the lead as cheaply as possible.
//! - Spend twos or bombs only when an opponent is close to going out;
//!   otherwise pass.
//!
//! Determinism:
//! - No randomness. `seed` is kept for registry symmetry.
use std::cmp::Reverse;

use crate::ai::{AiError, AiPlayer};
use crate::domain::{Action, Play, PlayerView};

/// Opponents with this many cards or fewer are treated as a threat.
const THREAT_CARDS: usize = 3;

#[derive(Clone)]
pub struct Heuristic {
    _seed: Option<u64>,
}

impl Heuristic {
    pub const NAME: &'static str = "Heuristic";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(seed: Option<u64>) -> Self {
        Self { _seed: seed }
    }

    fn uses_top_cards(play: &Play) -> bool {
        play.is_bomb() || play.cards().iter().any(|c| c.rank.is_highest())
    }

    fn choose_lead(plays: &[Play]) -> Option<&Play> {
        plays
            .iter()
            .min_by_key(|p| {
                (
                    Self::uses_top_cards(p),
                    p.cards().first().map(|c| c.rank),
                    Reverse(p.len()),
                    p.max_card(),
                )
            })
    }

    fn choose_follow<'a>(plays: &'a [Play], view: &PlayerView) -> Option<&'a Play> {
        let cheapest = plays
            .iter()
            .min_by_key(|p| (Self::uses_top_cards(p), p.len(), p.max_card()))?;
        let threatened = view
            .fewest_opponent_cards()
            .is_some_and(|n| n <= THREAT_CARDS);
        let going_out = cheapest.len() == view.hand.len();
        if Self::uses_top_cards(cheapest) && !threatened && !going_out {
            return None;
        }
        Some(cheapest)
    }
}

impl AiPlayer for Heuristic {
    fn choose_action(&self, view: &PlayerView) -> Result<Action, AiError> {
        let plays = view.legal_plays();
        let choice = if view.leading.is_none() {
            Self::choose_lead(&plays)
        } else {
            Self::choose_follow(&plays, view)
        };
        match choice {
            Some(play) => Ok(Action::Play(play.cards().to_vec())),
            None if view.can_pass => Ok(Action::Pass),
            None => Err(AiError::NoLegalAction),
        }
    }
}
