use proptest::prelude::*;
use regex::Regex;
use scopegen::{ancestor_pattern, test_name_pattern, NameMode, Separators, TestId};

// Titles without `%`, so no parameter token applies.
fn title() -> impl Strategy<Value = String> {
    "[^%§#@]{1,24}"
}

proptest! {
    #[test]
    fn escaped_titles_match_themselves_literally(raw in title(), other in title()) {
        let id = TestId::file("P", "a.ts").with_test(raw.clone());
        let pattern = test_name_pattern(&id, NameMode::Display, &Separators::default());
        let re = Regex::new(&format!("^(?:{pattern})$")).unwrap();
        prop_assert!(re.is_match(&raw));
        prop_assert_eq!(re.is_match(&other), raw == other);
    }

    #[test]
    fn canonical_ids_round_trip(
        project in "[a-z][a-z0-9-]{0,8}",
        file in "[a-z/]{1,12}\\.ts",
        suites in prop::collection::vec(title(), 0..4),
        test in prop::option::of(title()),
    ) {
        let separators = Separators::default();
        let mut id = TestId::file(project, file);
        id.describe_ids = suites;
        id.test_id = test;
        let raw = id.to_id_string(&separators);
        prop_assert_eq!(TestId::parse(&raw, &separators).unwrap(), id);
    }

    #[test]
    fn every_ancestor_matches(
        suites in prop::collection::vec(title(), 0..4),
        test in title(),
    ) {
        let separators = Separators::default();
        let mut id = TestId::file("P", "a.ts");
        id.describe_ids = suites.clone();
        id.test_id = Some(test);
        let re = Regex::new(&ancestor_pattern(&id, &separators)).unwrap();

        prop_assert!(re.is_match(&id.to_id_string(&separators)));
        for depth in 0..=suites.len() {
            let mut ancestor = TestId::file("P", "a.ts");
            ancestor.describe_ids = suites[..depth].to_vec();
            prop_assert!(re.is_match(&ancestor.to_id_string(&separators)));
        }
        prop_assert!(re.is_match("P"));
    }
}
