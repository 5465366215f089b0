//! Structured test identifiers and their string encoding.

use crate::errors::{Result, ScopeError};
use crate::separators::Separators;

/// Identifier the calling UI uses for its root node. It is never parsed.
pub const ROOT_ID: &str = "root";

/// One location in the test tree: a project, a file within it, a chain of
/// suites within the file, and a test within the innermost suite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestId {
    pub project_id: String,
    /// Path of the test file relative to the project. `None` means the whole project.
    pub file_name: Option<String>,
    /// Suite titles from outermost to innermost.
    pub describe_ids: Vec<String>,
    pub test_id: Option<String>,
}

impl TestId {
    /// An identifier covering a whole project.
    pub fn project(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            ..Self::default()
        }
    }

    /// An identifier covering a single file of a project.
    pub fn file(project_id: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            file_name: Some(file_name.into()),
            ..Self::default()
        }
    }

    pub fn with_suite(mut self, title: impl Into<String>) -> Self {
        self.describe_ids.push(title.into());
        self
    }

    pub fn with_test(mut self, title: impl Into<String>) -> Self {
        self.test_id = Some(title.into());
        self
    }

    /// True when the identifier has no file and therefore stands for its whole project.
    pub fn is_project_wide(&self) -> bool {
        self.file_name.is_none()
    }

    /// Suite titles with empty entries removed.
    pub fn suites(&self) -> impl Iterator<Item = &str> {
        self.describe_ids
            .iter()
            .map(String::as_str)
            .filter(|title| !title.is_empty())
    }

    /// The test title, unless it is absent or empty.
    pub fn test(&self) -> Option<&str> {
        self.test_id.as_deref().filter(|title| !title.is_empty())
    }

    /// Splits a serialized identifier into its parts.
    ///
    /// The project ends at the first project separator and the file name at
    /// the first describe separator after it. Suite titles then run up to the
    /// first test separator, and everything after that is the test title,
    /// taken verbatim. A file without suites ends at the last test separator,
    /// so scoped paths such as `packages/@scope/a.test.ts` stay whole.
    pub fn parse(raw: &str, separators: &Separators) -> Result<Self> {
        if raw.is_empty() {
            return Err(ScopeError::EmptyIdentifier);
        }

        let Some((project_id, rest)) = raw.split_once(separators.project.as_str()) else {
            return Ok(Self::project(raw));
        };
        if project_id.is_empty() {
            return Err(ScopeError::MissingProject {
                raw: raw.to_string(),
            });
        }

        let describe = separators.describe.as_str();
        let test = separators.test.as_str();
        let (file_name, describe_ids, test_id) = match rest.split_once(describe) {
            Some((file, chain)) => {
                let (suites, test_id) = match chain.split_once(test) {
                    Some((suites, title)) => (suites, Some(title)),
                    None => (chain, None),
                };
                (file, suites.split(describe).map(str::to_string).collect(), test_id)
            }
            None => match rest.rsplit_once(test) {
                Some((file, title)) => (file, Vec::new(), Some(title)),
                None => (rest, Vec::new(), None),
            },
        };

        let id = Self {
            project_id: project_id.to_string(),
            file_name: Some(file_name)
                .filter(|file| !file.is_empty())
                .map(str::to_string),
            describe_ids,
            test_id: test_id.filter(|t| !t.is_empty()).map(str::to_string),
        };
        tracing::trace!(raw, ?id, "Parsed identifier");
        Ok(id)
    }

    /// Renders the canonical serialized form, skipping absent parts and empty suites.
    pub fn to_id_string(&self, separators: &Separators) -> String {
        let mut out = self.project_id.clone();
        let Some(file_name) = &self.file_name else {
            return out;
        };
        out.push_str(&separators.project);
        out.push_str(file_name);
        for suite in self.suites() {
            out.push_str(&separators.describe);
            out.push_str(suite);
        }
        if let Some(test_id) = self.test() {
            out.push_str(&separators.test);
            out.push_str(test_id);
        }
        out
    }
}
