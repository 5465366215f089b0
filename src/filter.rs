//! Turns a selection of identifiers into the file and name filters a test
//! runner accepts on its command line.

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::errors::{Result, ScopeError};
use crate::id::{TestId, ROOT_ID};
use crate::pattern::{test_name_pattern, NameMode};
use crate::separators::Separators;

/// File-path and test-name patterns selecting a set of tests.
///
/// Alternatives are joined with `|`. An empty name pattern selects every
/// test in the matched files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestFilter {
    test_file_name_pattern: String,
    test_name_pattern: String,
}

impl TestFilter {
    pub fn test_file_name_pattern(&self) -> &str {
        &self.test_file_name_pattern
    }

    pub fn test_name_pattern(&self) -> &str {
        &self.test_name_pattern
    }

    /// Runner arguments, `--testPathPattern` and, when non-empty, `--testNamePattern`.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            "--testPathPattern".to_string(),
            self.test_file_name_pattern.clone(),
        ];
        if !self.test_name_pattern.is_empty() {
            args.push("--testNamePattern".to_string());
            args.push(self.test_name_pattern.clone());
        }
        args
    }

    /// Compiles both patterns for in-process matching.
    pub fn matcher(&self) -> Result<FilterMatcher> {
        let name = if self.test_name_pattern.is_empty() {
            None
        } else {
            Some(compile(&self.test_name_pattern)?)
        };
        Ok(FilterMatcher {
            file: compile(&self.test_file_name_pattern)?,
            name,
        })
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| ScopeError::Pattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// A [`TestFilter`] compiled with `regex`, searching the way runners do:
/// anywhere in the file path and anywhere in the test's full name.
#[derive(Debug, Clone)]
pub struct FilterMatcher {
    file: Regex,
    name: Option<Regex>,
}

impl FilterMatcher {
    pub fn matches_file(&self, path: &str) -> bool {
        self.file.is_match(path)
    }

    pub fn matches_name(&self, full_name: &str) -> bool {
        self.name.as_ref().map_or(true, |name| name.is_match(full_name))
    }

    /// True when the test at `path` with display name `full_name` is selected.
    pub fn matches(&self, path: &str, full_name: &str) -> bool {
        self.matches_file(path) && self.matches_name(full_name)
    }
}

/// Compiles identifier selections against a fixed separator set.
#[derive(Debug, Clone, Default)]
pub struct FilterCompiler {
    separators: Separators,
}

impl FilterCompiler {
    pub fn new(separators: Separators) -> Self {
        Self { separators }
    }

    pub fn separators(&self) -> &Separators {
        &self.separators
    }

    /// Builds the filter for `ids`, or `None` when every test should run.
    ///
    /// No filter is produced for an empty selection, for a selection that
    /// includes the UI root, or when any identifier lacks a file: a whole
    /// project cannot be expressed alongside per-file alternatives.
    pub fn compile<S: AsRef<str>>(&self, ids: &[S]) -> Result<Option<TestFilter>> {
        if ids.is_empty() {
            debug!("No identifiers selected, running all tests");
            return Ok(None);
        }
        if ids.iter().any(|id| id.as_ref() == ROOT_ID) {
            debug!("Root selected, running all tests");
            return Ok(None);
        }

        let parsed = ids
            .iter()
            .map(|raw| TestId::parse(raw.as_ref(), &self.separators))
            .collect::<Result<Vec<_>>>()?;

        if let Some(id) = parsed.iter().find(|id| id.is_project_wide()) {
            debug!(project = %id.project_id, "Project-wide identifier selected, running all tests");
            return Ok(None);
        }

        let mut names: Vec<String> = Vec::new();
        let mut files: Vec<String> = Vec::new();
        for id in &parsed {
            let name = test_name_pattern(id, NameMode::Display, &self.separators);
            if !name.is_empty() && !names.contains(&name) {
                names.push(name);
            }
            let file = regex::escape(id.file_name.as_deref().unwrap_or_default());
            if !files.contains(&file) {
                files.push(file);
            }
        }

        let filter = TestFilter {
            test_file_name_pattern: files.join("|"),
            test_name_pattern: names.join("|"),
        };
        debug!(
            ids = parsed.len(),
            files = %filter.test_file_name_pattern,
            names = %filter.test_name_pattern,
            "Compiled test filter"
        );
        Ok(Some(filter))
    }
}

/// Builds the filter for `ids` with the given separators. See [`FilterCompiler::compile`].
pub fn compile_filter<S: AsRef<str>>(
    ids: &[S],
    separators: &Separators,
) -> Result<Option<TestFilter>> {
    FilterCompiler::new(separators.clone()).compile(ids)
}
