//! Property tests for classification and comparison.
//!
//! Properties tested:
//! - Classification ignores selection order
//! - Accepted plays keep exactly the selected cards
//! - Consecutive non-two cards always classify as a straight
//! - No two plays beat each other
//! - A play never beats itself

use proptest::prelude::*;

use crate::domain::combos::{classify, compare, Comparison, Play, Shape};
use crate::domain::{test_gens, test_prelude};
use crate::errors::domain::ValidationKind;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_classify_ignores_order(
        shuffled in test_gens::distinct_cards(1, 8).prop_shuffle(),
    ) {
        let mut sorted = shuffled.clone();
        sorted.sort();
        prop_assert_eq!(classify(&shuffled), classify(&sorted));
    }

    #[test]
    fn prop_classified_play_keeps_its_cards(
        cards in test_gens::distinct_cards(1, 10),
    ) {
        match classify(&cards) {
            Ok(play) => prop_assert_eq!(play.cards(), cards.as_slice()),
            Err(err) => prop_assert_eq!(err.kind(), Some(&ValidationKind::InvalidCombination)),
        }
    }

    #[test]
    fn prop_generated_straights_classify(
        run in (3usize..=12).prop_flat_map(test_gens::straight),
    ) {
        let play = classify(&run).unwrap();
        prop_assert_eq!(play.shape(), Shape::Straight);
        prop_assert_eq!(play.len(), run.len());
    }

    #[test]
    fn prop_no_mutual_beats(
        a in test_gens::distinct_cards(1, 8),
        b in test_gens::distinct_cards(1, 8),
    ) {
        if let (Ok(a), Ok(b)) = (classify(&a), classify(&b)) {
            let ab = compare(&a, &b);
            let ba = compare(&b, &a);
            prop_assert!(
                !(ab == Comparison::Higher && ba == Comparison::Higher),
                "both beat each other: {:?} vs {:?}", a, b
            );
            if ab == Comparison::Lower {
                prop_assert_eq!(ba, Comparison::Higher);
            }
        }
    }

    #[test]
    fn prop_play_equals_itself(
        cards in test_gens::distinct_cards(1, 8),
    ) {
        if let Ok(play) = classify(&cards) {
            prop_assert_eq!(compare(&play, &play), Comparison::Equal);
        }
    }

    #[test]
    fn prop_pairs_compare_by_top_card(
        a in test_gens::pair_of(test_gens::rank()),
        b in test_gens::pair_of(test_gens::rank()),
    ) {
        prop_assume!(a != b);
        let (pa, pb) = (classify(&a).unwrap(), classify(&b).unwrap());
        prop_assert!(matches!(pa, Play::Pair(_)));
        let expected: Comparison = pa.max_card().cmp(&pb.max_card()).into();
        prop_assert_eq!(compare(&pa, &pb), expected);
    }
}
