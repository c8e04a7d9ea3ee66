//! Property tests for wildcard pattern compilation

use globfind_core::{CaseSensitivity, Pattern};
use globfind_test_utils::reference_match;
use proptest::prelude::*;

fn pattern_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("*".to_string()),
            Just("?".to_string()),
            "[abé日.^]",
            "\\[!?[aé^][bé日]?\\]",
            "\\[a-b\\]",
            "\\[a-é\\]",
        ],
        1..6,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn prop_matches_agree_with_reference(
        pattern in pattern_strategy(),
        name in "[abé日.^]{0,6}",
    ) {
        let compiled = Pattern::with_case(&pattern, CaseSensitivity::Sensitive).unwrap();

        prop_assert_eq!(
            compiled.matches(&name),
            reference_match(&pattern, &name),
            "pattern {:?} name {:?}", pattern, name
        );
    }

    #[test]
    fn prop_insensitive_agrees_with_lowercased_reference(
        pattern in pattern_strategy(),
        name in "[aAbBéÉ日.^]{0,6}",
    ) {
        let compiled = Pattern::with_case(&pattern, CaseSensitivity::Insensitive).unwrap();

        prop_assert_eq!(
            compiled.matches(&name),
            reference_match(&pattern.to_lowercase(), &name.to_lowercase()),
            "pattern {:?} name {:?}", pattern, name
        );
    }

    #[test]
    fn prop_literal_names_match_themselves(name in "[a-zA-Z0-9_.éü日本-]{1,12}") {
        let compiled = Pattern::with_case(&name, CaseSensitivity::Sensitive).unwrap();

        prop_assert!(compiled.matches(&name));
    }

    #[test]
    fn prop_star_matches_everything(name in "[a-zA-Z0-9 ._-]{0,16}") {
        let compiled = Pattern::new("*").unwrap();

        prop_assert!(compiled.matches(&name));
    }
}

#[test]
fn test_bracket_heavy_literals() {
    let pattern = Pattern::with_case("report[[]1].pdf", CaseSensitivity::Sensitive).unwrap();

    assert!(pattern.matches("report[1].pdf"));
    assert!(!pattern.matches("report1.pdf"));
}
