//! Scopegen error handling.
//!
//! The pattern builders are total: they accept any identifier and always
//! produce a pattern. Failures only arise at the edges, when an identifier
//! string cannot be parsed, when a separator configuration is unusable, or
//! when a compiled filter is turned back into a matcher.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ScopeError>;

/// The single error type surfaced by the library and the CLI.
#[derive(Debug, Error, Diagnostic)]
pub enum ScopeError {
    /// An identifier token was empty, so it names no project at all.
    #[error("identifier is empty")]
    #[diagnostic(
        code(scopegen::id::empty),
        help("identifiers look like `project§path/to/file.spec.ts#Suite@test title`")
    )]
    EmptyIdentifier,

    /// An identifier token starts with the project separator.
    #[error("identifier `{raw}` names no project")]
    #[diagnostic(code(scopegen::id::project))]
    MissingProject { raw: String },

    /// The separator tokens cannot be used to split identifiers unambiguously.
    #[error("invalid separators: {reason}")]
    #[diagnostic(
        code(scopegen::config::separators),
        help("separators must be non-empty and pairwise distinct")
    )]
    InvalidSeparators { reason: String },

    /// A separator configuration file could not be read.
    #[error("failed to read '{}': {source}", .path.display())]
    #[diagnostic(code(scopegen::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A separator configuration document is not valid YAML for `Separators`.
    #[error("invalid separator configuration: {0}")]
    #[diagnostic(code(scopegen::config::yaml))]
    Yaml(#[from] serde_yaml::Error),

    /// A filter could not be rendered as JSON.
    #[error("failed to render JSON: {0}")]
    #[diagnostic(code(scopegen::output::json))]
    Json(#[from] serde_json::Error),

    /// Writing to the terminal failed.
    #[error("failed to write output: {0}")]
    #[diagnostic(code(scopegen::output))]
    Output(#[from] std::io::Error),

    /// A generated pattern was rejected by the regex engine.
    #[error("pattern `{pattern}` does not compile: {source}")]
    #[diagnostic(
        code(scopegen::pattern),
        help("separators containing regex syntax are escaped; report this pattern as a bug")
    )]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl ScopeError {
    pub(crate) fn invalid_separators(reason: impl Into<String>) -> Self {
        ScopeError::InvalidSeparators {
            reason: reason.into(),
        }
    }
}
