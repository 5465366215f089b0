//! Scopegen command-line entry point.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions.

pub mod args;
pub mod output;

use std::process;

use clap::Parser;
use regex::Regex;
use tracing::Level;

use crate::{
    cli::args::{Command, ScopegenArgs},
    errors::{Result, ScopeError},
    filter::FilterCompiler,
    id::TestId,
    pattern::{ancestor_pattern, test_id_pattern, test_name_pattern, NameMode},
    separators::Separators,
};

/// Exit code when `check` finds the test is not selected.
pub const EXIT_NOT_SELECTED: i32 = 1;
/// Exit code for any reported error.
pub const EXIT_ERROR: i32 = 2;

// ============================================================================
// MAIN ENTRY POINT
// ============================================================================

/// The main entry point for the CLI.
pub fn run() {
    let args = ScopegenArgs::parse();
    init_tracing(args.verbose);

    match execute(&args) {
        Ok(code) => process::exit(code),
        Err(e) => {
            print_error(e);
            process::exit(EXIT_ERROR);
        }
    }
}

/// Runs one parsed command line and returns the process exit code.
pub fn execute(args: &ScopegenArgs) -> Result<i32> {
    let separators = args.separators.resolve()?;
    tracing::debug!(?separators, "Resolved separators");

    match &args.command {
        Command::Filter { ids, format } => {
            let filter = FilterCompiler::new(separators).compile(ids.as_slice())?;
            output::print_filter(filter.as_ref(), *format)?;
            Ok(0)
        }

        Command::Pattern { id, ancestors } => {
            let id = TestId::parse(id, &separators)?;
            let pattern = if *ancestors {
                ancestor_pattern(&id, &separators)
            } else {
                test_id_pattern(&id, &separators)
            };
            output::print_pattern(&pattern)?;
            Ok(0)
        }

        Command::Name { id, id_mode } => {
            let id = TestId::parse(id, &separators)?;
            let mode = if *id_mode { NameMode::Id } else { NameMode::Display };
            output::print_pattern(&test_name_pattern(&id, mode, &separators))?;
            Ok(0)
        }

        Command::Check { selected, test } => {
            let is_selected = is_ancestor_or_self(selected, test, &separators)?;
            output::print_check(selected, test, is_selected)?;
            Ok(if is_selected { 0 } else { EXIT_NOT_SELECTED })
        }
    }
}

/// True when `selected` names `test` or one of its ancestors.
pub fn is_ancestor_or_self(selected: &str, test: &str, separators: &Separators) -> Result<bool> {
    let selected = TestId::parse(selected, separators)?.to_id_string(separators);
    let pattern = ancestor_pattern(&TestId::parse(test, separators)?, separators);
    let regex = Regex::new(&pattern).map_err(|source| ScopeError::Pattern {
        pattern: pattern.clone(),
        source,
    })?;
    let is_match = regex.is_match(&selected);
    tracing::debug!(%selected, %pattern, is_match, "Checked ancestor pattern");
    Ok(is_match)
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_error(e: ScopeError) {
    let report = miette::Report::new(e);
    eprintln!("{report:?}");
}
