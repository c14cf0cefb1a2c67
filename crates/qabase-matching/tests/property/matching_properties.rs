//! Property tests for the similarity ratio.

use proptest::prelude::*;
use qabase_matching::ratio;

proptest! {
    #[test]
    fn prop_ratio_is_symmetric(a in "[а-яa-c ]{0,16}", b in "[а-яa-c ]{0,16}") {
        prop_assert_eq!(ratio(&a, &b), ratio(&b, &a));
    }

    #[test]
    fn prop_ratio_is_bounded(a in "\\PC{0,24}", b in "\\PC{0,24}") {
        let r = ratio(&a, &b);
        prop_assert!((0.0..=1.0).contains(&r), "ratio {} out of bounds", r);
    }

    #[test]
    fn prop_ratio_of_self_is_one(a in "\\PC{1,24}") {
        prop_assert_eq!(ratio(&a, &a), 1.0);
    }

    #[test]
    fn prop_prefix_scores_positive(a in "[а-я]{1,12}", b in "[а-я]{0,12}") {
        let joined = format!("{a}{b}");
        prop_assert!(ratio(&a, &joined) > 0.0);
    }
}
