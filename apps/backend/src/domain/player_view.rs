//! Player view of a match: what one seat can see at a decision point.

use serde::Serialize;

use super::combos::Play;
use super::legal::legal_plays;
use super::round::{Lead, SeatId};
use super::Card;

/// Public facts about another seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpponentView {
    pub seat: SeatId,
    pub cards_left: usize,
    pub place: Option<usize>,
}

/// Information visible to a seat at its decision point.
///
/// This is the interface between the match and AI players, and the source
/// for the prompt shown to humans.
///
/// # For AI Developers
///
/// Implementations of [`crate::ai::AiPlayer`] receive this in every call.
///
/// - [`hand`](Self::hand): your cards, ascending
/// - [`leading`](Self::leading): the play to beat, absent when you open
/// - [`required_card`](Self::required_card): must be part of the opening play
///   of the first round
/// - [`opponents`](Self::opponents): card counts and finishing places
///
/// **Always use** [`legal_plays()`](Self::legal_plays) instead of re-implementing
/// combination rules.
///
/// ```rust,ignore
/// fn choose_action(&self, view: &PlayerView) -> Result<Action, AiError> {
///     match view.legal_plays().first() {
///         Some(play) => Ok(Action::Play(play.cards().to_vec())),
///         None if view.can_pass => Ok(Action::Pass),
///         None => Err(AiError::NoLegalAction),
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerView {
    pub seat: SeatId,
    pub hand: Vec<Card>,
    pub leading: Option<Lead>,
    pub required_card: Option<Card>,
    pub is_my_turn: bool,
    pub can_pass: bool,
    pub round_no: u32,
    pub opponents: Vec<OpponentView>,
}

impl PlayerView {
    /// Plays that would be accepted now, weakest first.
    pub fn legal_plays(&self) -> Vec<Play> {
        legal_plays(
            &self.hand,
            self.leading.as_ref().map(|l| &l.play),
            self.required_card,
        )
    }

    /// Smallest hand among opponents still playing.
    pub fn fewest_opponent_cards(&self) -> Option<usize> {
        self.opponents
            .iter()
            .filter(|o| o.place.is_none())
            .map(|o| o.cards_left)
            .min()
    }
}
