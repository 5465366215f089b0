//! Patterns for a test's runtime display name.

use crate::id::TestId;
use crate::pattern::params::title_pattern;
use crate::separators::Separators;

/// How suite and test segments are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameMode {
    /// Single spaces, the way runners build a test's full name.
    #[default]
    Display,
    /// Describe and test separators, the way identifiers are serialized.
    Id,
}

/// Builds the pattern for the suite chain and test title of `id`.
///
/// Every suite title and the test title are escaped and have their parameter
/// tokens translated independently. Empty suites are skipped. In
/// [`NameMode::Display`] a file-level test has no leading space, and a suite
/// without a test keeps a trailing space so `Suite ` cannot match `Suite2`.
/// In [`NameMode::Id`] the test separator only appears when there is a test.
pub fn test_name_pattern(id: &TestId, mode: NameMode, separators: &Separators) -> String {
    let suites: Vec<String> = id.suites().map(title_pattern).collect();
    let test = id.test().map(title_pattern);

    match mode {
        NameMode::Display => {
            let mut out = suites.join(" ");
            match test {
                Some(test) if out.is_empty() => out = test,
                Some(test) => {
                    out.push(' ');
                    out.push_str(&test);
                }
                None if !out.is_empty() => out.push(' '),
                None => {}
            }
            out
        }
        NameMode::Id => {
            let mut out = suites.join(separators.escaped_describe().as_str());
            if let Some(test) = test {
                out.push_str(&separators.escaped_test());
                out.push_str(&test);
            }
            out
        }
    }
}
