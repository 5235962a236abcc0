//! Property tests: ordering laws of the specificity comparator and
//! result-neutrality of caching and the fast-reject pre-check.

use bunner_path_matcher::{AntPathMatcher, CacheMode, MatcherOptions, PathMatcher};
use proptest::prelude::*;
use std::cmp::Ordering;

fn segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("*".to_string()),
        Just("**".to_string()),
        Just("?".to_string()),
        Just("{id}".to_string()),
        Just("{n:[0-9]+}".to_string()),
        Just("*.html".to_string()),
        prop::string::string_regex("[a-c]{1,3}").expect("valid regex"),
    ]
}

fn pattern_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(segment_strategy(), 0..5).prop_map(|segs| format!("/{}", segs.join("/")))
}

fn path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::string::string_regex("[a-c0-9.]{0,3}").expect("valid regex"), 0..6)
        .prop_map(|segs| format!("/{}", segs.join("/")))
}

fn matcher(mode: CacheMode, precheck: bool) -> AntPathMatcher {
    AntPathMatcher::with_options(
        MatcherOptions::builder()
            .cache_mode(mode)
            .potential_match_precheck(precheck)
            .build()
            .expect("options should build"),
    )
    .expect("options should be valid")
}

proptest! {
    #[test]
    fn comparator_is_a_strict_weak_ordering(
        path in path_strategy(),
        a in pattern_strategy(),
        b in pattern_strategy(),
        c in pattern_strategy(),
    ) {
        let comparator = AntPathMatcher::new().pattern_comparator(&path);

        prop_assert_eq!(comparator.compare(&a, &a), Ordering::Equal);
        prop_assert_eq!(comparator.compare(&a, &b), comparator.compare(&b, &a).reverse());

        if comparator.compare(&a, &b) != Ordering::Greater
            && comparator.compare(&b, &c) != Ordering::Greater
        {
            prop_assert_ne!(comparator.compare(&a, &c), Ordering::Greater);
        }
    }

    #[test]
    fn caching_and_precheck_never_change_results(
        pattern in pattern_strategy(),
        path in path_strategy(),
    ) {
        let reference = matcher(CacheMode::Disabled, false);
        let expected = reference.matches(&pattern, &path).expect("matching should not fail");
        let expected_start = reference.match_start(&pattern, &path).expect("matching should not fail");

        for (mode, precheck) in [
            (CacheMode::Auto, true),
            (CacheMode::Enabled, true),
            (CacheMode::Enabled, false),
            (CacheMode::Disabled, true),
        ] {
            let m = matcher(mode, precheck);
            for _ in 0..2 {
                prop_assert_eq!(m.matches(&pattern, &path).expect("matching should not fail"), expected);
                prop_assert_eq!(m.match_start(&pattern, &path).expect("matching should not fail"), expected_start);
            }
        }
    }

    #[test]
    fn full_match_implies_prefix_match(
        pattern in pattern_strategy(),
        path in path_strategy(),
    ) {
        let m = AntPathMatcher::new();
        if m.matches(&pattern, &path).expect("matching should not fail") {
            prop_assert!(m.match_start(&pattern, &path).expect("matching should not fail"));
        }
    }
}
