//! Property tests for whole matches driven by random legal actions.
//!
//! Properties tested:
//! - Every enumerated legal play is accepted
//! - Cards are conserved across hands and the discard pile
//! - Actions from seats out of turn are refused without side effects
//! - Rejected plays from the acting seat change nothing
//! - Finished seats never act again
//! - Matches terminate with a complete, consistent ranking

use std::collections::BTreeSet;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::match_state::{Action, MatchOutcome, MatchState};
use crate::domain::{test_gens, test_prelude, Card, SeatId};
use crate::errors::domain::ValidationKind;

const STEP_LIMIT: usize = 2_000;

/// Selections the round must refuse: two cards of different ranks (never a
/// combination), and singles the round does not accept right now.
fn refused_selections(state: &MatchState, actor: SeatId) -> Vec<Vec<Card>> {
    let Some(hand) = state.hand(actor) else {
        return Vec::new();
    };
    let sorted = hand.sorted();
    let mut picks = Vec::new();
    if let (Some(low), Some(high)) = (sorted.first(), sorted.last()) {
        if low.rank != high.rank {
            picks.push(vec![*low, *high]);
        }
    }
    picks.extend(
        sorted
            .iter()
            .map(|c| vec![*c])
            .filter(|cards| state.round().check_play(hand, cards).is_err())
            .take(2),
    );
    picks
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_random_matches_terminate_consistently(
        seat_count in test_gens::seat_count(),
        seed in test_gens::seed(),
    ) {
        let (mut state, _) = MatchState::deal(seat_count, seed).unwrap();
        let dealt = state.accounted_cards();
        prop_assert_eq!(dealt.len(), seat_count * 13);

        let mut rng = StdRng::seed_from_u64(seed);
        let mut steps = 0;
        while let Some(actor) = state.current_actor() {
            prop_assert!(state.seats()[actor].place.is_none(), "finished seat {} acting", actor);
            prop_assert!(!state.hand(actor).unwrap().is_empty());

            let lead = state.round().lead().cloned();
            let rotation = state.round().rotation().to_vec();
            let hand = state.hand(actor).unwrap().sorted();
            for cards in refused_selections(&state, actor) {
                let err = state.play(actor, &cards).unwrap_err();
                prop_assert!(
                    matches!(
                        err.kind(),
                        Some(
                            ValidationKind::InvalidCombination
                                | ValidationKind::Incomparable
                                | ValidationKind::NotHighEnough
                                | ValidationKind::MissingRequiredCard
                        )
                    ),
                    "unexpected rejection {:?}",
                    err
                );
                prop_assert_eq!(state.hand(actor).unwrap().sorted(), hand.clone());
                prop_assert_eq!(state.accounted_cards(), dealt.clone());
                prop_assert_eq!(state.round().lead().cloned(), lead.clone());
                prop_assert_eq!(state.round().rotation(), rotation.as_slice());
                prop_assert_eq!(state.current_actor(), Some(actor));
            }

            let view = state.view_for(actor).unwrap();
            let mut options: Vec<Action> = view
                .legal_plays()
                .into_iter()
                .map(|p| Action::Play(p.cards().to_vec()))
                .collect();
            if view.can_pass {
                options.push(Action::Pass);
            }
            prop_assert!(!options.is_empty(), "seat {} has no action", actor);

            let action = options[rng.random_range(0..options.len())].clone();
            let result = state.apply(actor, &action);
            prop_assert!(result.is_ok(), "legal action refused: {:?} -> {:?}", action, result);
            prop_assert_eq!(state.accounted_cards(), dealt.clone());

            steps += 1;
            prop_assert!(steps < STEP_LIMIT, "match did not terminate");
        }

        prop_assert!(state.is_finished());
        let ranked: BTreeSet<usize> = state.ranking().iter().copied().collect();
        prop_assert_eq!(ranked.len(), seat_count);
        prop_assert_eq!(state.ranking().len(), seat_count);

        if state.outcome() == Some(&MatchOutcome::Ranked) {
            let places: Vec<usize> = state.placements().iter().map(|p| p.place).collect();
            prop_assert_eq!(places, (1..=seat_count).collect::<Vec<_>>());
            let last = state.ranking()[seat_count - 1];
            prop_assert!(!state.hand(last).unwrap().is_empty());
        }
    }

    #[test]
    fn prop_out_of_turn_actions_are_idempotent_rejections(
        seat_count in test_gens::seat_count(),
        seed in test_gens::seed(),
        moves in 0usize..30,
    ) {
        let (mut state, _) = MatchState::deal(seat_count, seed).unwrap();
        let mut rng = StdRng::seed_from_u64(seed ^ 0x5eed);

        for _ in 0..moves {
            let Some(actor) = state.current_actor() else { break };
            let view = state.view_for(actor).unwrap();
            let mut options: Vec<Action> = view
                .legal_plays()
                .into_iter()
                .map(|p| Action::Play(p.cards().to_vec()))
                .collect();
            if view.can_pass {
                options.push(Action::Pass);
            }
            let action = options[rng.random_range(0..options.len())].clone();
            state.apply(actor, &action).unwrap();
        }

        let Some(actor) = state.current_actor() else { return Ok(()); };
        let before = state.accounted_cards();
        let before_rotation = state.round().rotation().to_vec();

        for seat in (0..seat_count).filter(|s| *s != actor) {
            let card = match state.hand(seat).and_then(|h| h.lowest()) {
                Some(c) => c,
                None => continue,
            };
            let err = state.play(seat, &[card]).unwrap_err();
            prop_assert_eq!(err.kind(), Some(&ValidationKind::NotYourTurn));
            let err = state.pass(seat).unwrap_err();
            prop_assert_eq!(err.kind(), Some(&ValidationKind::NotYourTurn));
        }

        prop_assert_eq!(state.current_actor(), Some(actor));
        prop_assert_eq!(state.accounted_cards(), before);
        prop_assert_eq!(state.round().rotation(), before_rotation.as_slice());
    }
}
