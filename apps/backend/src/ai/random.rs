//! Random AI player: uniform over legal plays, plus passing when allowed.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{AiError, AiPlayer};
use crate::domain::{Action, PlayerView};

/// AI that makes random legal moves.
///
/// Baseline for simulations and tests. With a seed its choices are
/// reproducible for a given sequence of views.
pub struct RandomPlayer {
    /// `AiPlayer` takes `&self`; the RNG needs mutable access.
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "RandomPlayer";
    pub const VERSION: &'static str = "1.0.0";

    /// `None` seeds from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl AiPlayer for RandomPlayer {
    fn choose_action(&self, view: &PlayerView) -> Result<Action, AiError> {
        let mut options: Vec<Action> = view
            .legal_plays()
            .into_iter()
            .map(|p| Action::Play(p.cards().to_vec()))
            .collect();
        if view.can_pass {
            options.push(Action::Pass);
        }

        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;

        options
            .choose(&mut *rng)
            .cloned()
            .ok_or(AiError::NoLegalAction)
    }
}
