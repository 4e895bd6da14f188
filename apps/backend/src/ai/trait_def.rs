//! AI player trait definition.

use std::fmt;

use crate::domain::{Action, PlayerView};
use crate::error::AppError;

#[derive(Debug)]
pub enum AiError {
    /// Nothing legal to do; only reachable with an inconsistent view.
    NoLegalAction,
    Internal(String),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::NoLegalAction => write!(f, "AI found no legal action"),
            AiError::Internal(msg) => write!(f, "AI internal error: {msg}"),
        }
    }
}

impl std::error::Error for AiError {}

impl From<AiError> for AppError {
    fn from(err: AiError) -> Self {
        AppError::internal(format!("AI error: {err}"))
    }
}

/// A computer-controlled seat.
///
/// Called only when it is the seat's turn. Implementations must return a
/// legal action; use [`PlayerView::legal_plays`] rather than re-deriving
/// the rules. Methods take `&self` so players can be shared across tasks;
/// keep mutable state (RNG) behind a lock.
pub trait AiPlayer: Send + Sync {
    fn choose_action(&self, view: &PlayerView) -> Result<Action, AiError>;
}
