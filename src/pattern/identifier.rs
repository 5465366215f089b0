//! Patterns over serialized identifiers.
//!
//! [`test_id_pattern`] matches one identifier exactly from its start.
//! [`ancestor_pattern`] matches that identifier and every ancestor of it, so
//! a selected suite can be tested for "is this an ancestor of that test".

use crate::id::TestId;
use crate::pattern::name::{test_name_pattern, NameMode};
use crate::pattern::params::title_pattern;
use crate::separators::Separators;

/// `^project§file#suite#suite@test`, anchored at the start.
///
/// A pattern that stops before the test ends in a boundary group accepting
/// the next separator or the end of the text, so `^P§a\.ts` cannot match
/// `P§a.tsx` and a suite cannot match a longer sibling title.
pub fn test_id_pattern(id: &TestId, separators: &Separators) -> String {
    let mut out = format!("^{}", regex::escape(&id.project_id));
    let Some(file_name) = &id.file_name else {
        push_boundary(&mut out, &[separators.escaped_project()]);
        return out;
    };
    out.push_str(&separators.escaped_project());
    out.push_str(&regex::escape(file_name));
    if id.suites().next().is_some() {
        out.push_str(&separators.escaped_describe());
    }
    out.push_str(&test_name_pattern(id, NameMode::Id, separators));
    if id.test().is_none() {
        push_boundary(
            &mut out,
            &[separators.escaped_describe(), separators.escaped_test()],
        );
    }
    out
}

fn push_boundary(out: &mut String, separators: &[String]) {
    out.push('(');
    for separator in separators {
        out.push_str(separator);
        out.push('|');
    }
    out.push_str("$)");
}

/// Matches `id` or any truncation of it at a separator boundary.
///
/// Every level below the project is its own optional group, nested in order.
/// The test group ends in `$` so it cannot match into a longer sibling title.
///
/// ```
/// use scopegen::{ancestor_pattern, Separators, TestId};
///
/// let id = TestId::file("P", "a.spec.ts").with_suite("Suite").with_test("does X");
/// assert_eq!(
///     ancestor_pattern(&id, &Separators::default()),
///     r"^P(§a\.spec\.ts(\#Suite(@does X$)?)?)?$",
/// );
/// ```
pub fn ancestor_pattern(id: &TestId, separators: &Separators) -> String {
    let mut out = format!("^{}", regex::escape(&id.project_id));
    let mut open_groups = 0;

    if let Some(file_name) = &id.file_name {
        open_group(&mut out, &separators.escaped_project(), &regex::escape(file_name));
        open_groups += 1;

        let describe = separators.escaped_describe();
        for suite in id.suites() {
            open_group(&mut out, &describe, &title_pattern(suite));
            open_groups += 1;
        }

        if let Some(test) = id.test() {
            open_group(&mut out, &separators.escaped_test(), &title_pattern(test));
            out.push('$');
            open_groups += 1;
        }
    }

    for _ in 0..open_groups {
        out.push_str(")?");
    }
    out.push('$');
    out
}

fn open_group(out: &mut String, separator: &str, segment: &str) {
    out.push('(');
    out.push_str(separator);
    out.push_str(segment);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf() -> TestId {
        TestId::file("P", "a.spec.ts")
            .with_suite("Suite")
            .with_test("does X")
    }

    #[test]
    fn full_pattern_layout() {
        let pattern = test_id_pattern(&leaf(), &Separators::default());
        assert_eq!(pattern, r"^P§a\.spec\.ts\#Suite@does X");
    }

    #[test]
    fn full_pattern_without_suites() {
        let id = TestId::file("P", "a.ts").with_test("t");
        assert_eq!(test_id_pattern(&id, &Separators::default()), r"^P§a\.ts@t");
    }

    #[test]
    fn full_pattern_for_project() {
        let id = TestId::project("my.app");
        let pattern = test_id_pattern(&id, &Separators::default());
        assert_eq!(pattern, r"^my\.app(§|$)");

        let re = regex::Regex::new(&pattern).unwrap();
        assert!(re.is_match("my.app"));
        assert!(re.is_match("my.app§a.ts"));
        assert!(!re.is_match("my.apps§a.ts"));
    }

    #[test]
    fn file_pattern_stops_at_separator() {
        let pattern = test_id_pattern(&TestId::file("P", "a.ts"), &Separators::default());
        assert_eq!(pattern, r"^P§a\.ts(\#|@|$)");

        let re = regex::Regex::new(&pattern).unwrap();
        assert!(re.is_match("P§a.ts"));
        assert!(re.is_match("P§a.ts#S@t"));
        assert!(re.is_match("P§a.ts@t"));
        assert!(!re.is_match("P§a.tsx#S@t"));
        assert!(!re.is_match("P§a.tsx"));
    }

    #[test]
    fn suite_pattern_stops_at_separator() {
        let id = TestId::file("P", "a.ts").with_suite("Suite");
        let pattern = test_id_pattern(&id, &Separators::default());
        assert_eq!(pattern, r"^P§a\.ts\#Suite(\#|@|$)");

        let re = regex::Regex::new(&pattern).unwrap();
        assert!(re.is_match("P§a.ts#Suite"));
        assert!(re.is_match("P§a.ts#Suite@t"));
        assert!(re.is_match("P§a.ts#Suite#Inner@t"));
        assert!(!re.is_match("P§a.ts#SuiteTwo@t"));
    }

    #[test]
    fn ancestor_pattern_layout() {
        let id = TestId::file("P", "a.ts")
            .with_suite("Outer")
            .with_suite("Inner")
            .with_test("t");
        assert_eq!(
            ancestor_pattern(&id, &Separators::default()),
            r"^P(§a\.ts(\#Outer(\#Inner(@t$)?)?)?)?$"
        );
    }

    #[test]
    fn ancestor_pattern_for_file_and_project() {
        let separators = Separators::default();
        assert_eq!(
            ancestor_pattern(&TestId::file("P", "a.ts"), &separators),
            r"^P(§a\.ts)?$"
        );
        assert_eq!(ancestor_pattern(&TestId::project("P"), &separators), "^P$");
    }

    #[test]
    fn ancestor_pattern_skips_empty_suites() {
        let id = TestId::file("P", "a.ts").with_suite("").with_test("t");
        assert_eq!(
            ancestor_pattern(&id, &Separators::default()),
            r"^P(§a\.ts(@t$)?)?$"
        );
    }

    #[test]
    fn separators_are_escaped() {
        let separators = Separators::new("|", ".", "*").unwrap();
        let pattern = ancestor_pattern(&leaf(), &separators);
        assert_eq!(pattern, r"^P(\|a\.spec\.ts(\.Suite(\*does X$)?)?)?$");
    }
}
