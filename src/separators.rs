//! The separator tokens shared by the identifier format and every pattern builder.
//!
//! A `Separators` value is threaded explicitly through the parser and the
//! builders, so alternative identifier encodings can be compiled side by side.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ScopeError};

pub const DEFAULT_PROJECT_SEPARATOR: &str = "§";
pub const DEFAULT_DESCRIBE_SEPARATOR: &str = "#";
pub const DEFAULT_TEST_SEPARATOR: &str = "@";

/// The three delimiters of a serialized identifier.
///
/// `project§file#suite#nested suite@test title`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Separators {
    /// Between the project and the file name.
    #[serde(default = "default_project")]
    pub project: String,
    /// Between the file name and the first suite, and between nested suites.
    #[serde(default = "default_describe")]
    pub describe: String,
    /// Between the innermost suite (or the file) and the test title.
    #[serde(default = "default_test")]
    pub test: String,
}

fn default_project() -> String {
    DEFAULT_PROJECT_SEPARATOR.to_string()
}

fn default_describe() -> String {
    DEFAULT_DESCRIBE_SEPARATOR.to_string()
}

fn default_test() -> String {
    DEFAULT_TEST_SEPARATOR.to_string()
}

impl Default for Separators {
    fn default() -> Self {
        Self {
            project: default_project(),
            describe: default_describe(),
            test: default_test(),
        }
    }
}

impl Separators {
    pub fn new(
        project: impl Into<String>,
        describe: impl Into<String>,
        test: impl Into<String>,
    ) -> Result<Self> {
        let separators = Self {
            project: project.into(),
            describe: describe.into(),
            test: test.into(),
        };
        separators.validate()?;
        Ok(separators)
    }

    /// Parses a YAML document, falling back to the defaults for any token it omits.
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        let separators: Separators = serde_yaml::from_str(source)?;
        separators.validate()?;
        Ok(separators)
    }

    /// Reads and validates a YAML separator file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ScopeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Loading separator configuration");
        Self::from_yaml_str(&source)
    }

    /// Checks that identifiers remain splittable with these tokens.
    pub fn validate(&self) -> Result<()> {
        let named = [
            ("project", &self.project),
            ("describe", &self.describe),
            ("test", &self.test),
        ];
        for (name, token) in named {
            if token.is_empty() {
                return Err(ScopeError::invalid_separators(format!(
                    "{name} separator is empty"
                )));
            }
        }
        for (i, (a_name, a)) in named.iter().enumerate() {
            for (b_name, b) in &named[i + 1..] {
                if a == b {
                    return Err(ScopeError::invalid_separators(format!(
                        "{a_name} and {b_name} separators are both `{a}`"
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn escaped_project(&self) -> String {
        regex::escape(&self.project)
    }

    pub fn escaped_describe(&self) -> String {
        regex::escape(&self.describe)
    }

    pub fn escaped_test(&self) -> String {
        regex::escape(&self.test)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_identifier_format() {
        let separators = Separators::default();
        assert_eq!(separators.project, "§");
        assert_eq!(separators.describe, "#");
        assert_eq!(separators.test, "@");
        assert!(separators.validate().is_ok());
    }

    #[test]
    fn describe_separator_is_escaped_for_patterns() {
        let separators = Separators::default();
        assert_eq!(separators.escaped_describe(), r"\#");
        assert_eq!(separators.escaped_test(), "@");
    }

    #[test]
    fn partial_yaml_keeps_remaining_defaults() {
        let separators = Separators::from_yaml_str("describe: \" > \"\n").unwrap();
        assert_eq!(separators.describe, " > ");
        assert_eq!(separators.project, "§");
        assert_eq!(separators.test, "@");
    }

    #[test]
    fn unknown_yaml_keys_are_rejected() {
        let err = Separators::from_yaml_str("suite: \"/\"\n").unwrap_err();
        assert!(matches!(err, ScopeError::Yaml(_)));
    }

    #[test]
    fn duplicate_tokens_are_rejected() {
        let err = Separators::new("::", "::", "@").unwrap_err();
        assert!(err.to_string().contains("project and describe"));
    }

    #[test]
    fn empty_tokens_are_rejected() {
        let err = Separators::new("§", "#", "").unwrap_err();
        assert!(err.to_string().contains("test separator is empty"));
    }
}
