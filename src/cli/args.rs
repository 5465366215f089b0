//! Defines the command-line arguments and subcommands for the Scopegen CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::errors::Result;
use crate::separators::Separators;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "scopegen",
    version,
    about = "Compile test identifiers into regex filters for a test runner."
)]
pub struct ScopegenArgs {
    #[command(flatten)]
    pub separators: SeparatorArgs,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Overrides for the identifier separators.
#[derive(Debug, Default, Args)]
pub struct SeparatorArgs {
    /// YAML file with `project`, `describe` and `test` separator tokens.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Token between the project and the file name.
    #[arg(long, global = true, value_name = "TOKEN")]
    pub project_separator: Option<String>,

    /// Token between the file name and suites, and between nested suites.
    #[arg(long, global = true, value_name = "TOKEN")]
    pub describe_separator: Option<String>,

    /// Token before the test title.
    #[arg(long, global = true, value_name = "TOKEN")]
    pub test_separator: Option<String>,
}

impl SeparatorArgs {
    /// Defaults, then the config file, then individual flags.
    pub fn resolve(&self) -> Result<Separators> {
        let mut separators = match &self.config {
            Some(path) => Separators::load(path)?,
            None => Separators::default(),
        };
        if let Some(token) = &self.project_separator {
            separators.project = token.clone();
        }
        if let Some(token) = &self.describe_separator {
            separators.describe = token.clone();
        }
        if let Some(token) = &self.test_separator {
            separators.test = token.clone();
        }
        separators.validate()?;
        Ok(separators)
    }
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build the file and test-name filters selecting the given identifiers.
    Filter {
        /// Identifiers such as `project§src/a.spec.ts#Suite@test`.
        ids: Vec<String>,
        /// How to print the filter.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the pattern matching one identifier.
    Pattern {
        id: String,
        /// Also match every ancestor of the identifier.
        #[arg(long)]
        ancestors: bool,
    },
    /// Print the pattern matching a test's display name.
    Name {
        id: String,
        /// Join segments with the identifier separators instead of spaces.
        #[arg(long)]
        id_mode: bool,
    },
    /// Exit 0 when SELECTED is the test itself or one of its ancestors, 1 otherwise.
    Check {
        /// The selected node, e.g. a suite.
        selected: String,
        /// The test identifier to check against.
        test: String,
    },
}

/// Output formats for the `filter` subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Labelled patterns.
    Text,
    /// A JSON object, or `null` when every test should run.
    Json,
    /// Runner arguments, one per line.
    Args,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let args = SeparatorArgs {
            describe_separator: Some(" > ".to_string()),
            ..SeparatorArgs::default()
        };
        let separators = args.resolve().unwrap();
        assert_eq!(separators.describe, " > ");
        assert_eq!(separators.project, "§");
    }

    #[test]
    fn conflicting_flags_are_rejected() {
        let args = SeparatorArgs {
            test_separator: Some("#".to_string()),
            ..SeparatorArgs::default()
        };
        assert!(args.resolve().is_err());
    }

    #[test]
    fn parses_filter_subcommand() {
        let args = ScopegenArgs::try_parse_from([
            "scopegen",
            "filter",
            "P§a.ts@t",
            "P§b.ts",
            "--format",
            "json",
            "-vv",
        ])
        .unwrap();
        assert_eq!(args.verbose, 2);
        match args.command {
            Command::Filter { ids, format } => {
                assert_eq!(ids, vec!["P§a.ts@t", "P§b.ts"]);
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
