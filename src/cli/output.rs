//! Handles all user-facing output for the CLI.
//!
//! Colors are used only when stdout is a terminal, so piped output stays
//! plain and can be fed straight to a runner.

use std::io::Write;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::cli::args::OutputFormat;
use crate::errors::Result;
use crate::filter::TestFilter;

fn stdout() -> StandardStream {
    let choice = if atty::is(atty::Stream::Stdout) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Prints a compiled filter, or the absence of one.
pub fn print_filter(filter: Option<&TestFilter>, format: OutputFormat) -> Result<()> {
    let mut out = stdout();
    match format {
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&filter)?)?;
        }
        OutputFormat::Args => {
            for arg in filter.map(TestFilter::to_args).unwrap_or_default() {
                writeln!(out, "{arg}")?;
            }
        }
        OutputFormat::Text => match filter {
            None => {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
                writeln!(out, "(run all tests)")?;
                out.reset()?;
            }
            Some(filter) => {
                print_labelled(&mut out, "testFileNamePattern", filter.test_file_name_pattern())?;
                print_labelled(&mut out, "testNamePattern", filter.test_name_pattern())?;
            }
        },
    }
    Ok(())
}

fn print_labelled(out: &mut StandardStream, label: &str, value: &str) -> Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
    write!(out, "{label}:")?;
    out.reset()?;
    writeln!(out, " {value}")?;
    Ok(())
}

/// Prints a single pattern on its own line.
pub fn print_pattern(pattern: &str) -> Result<()> {
    writeln!(stdout(), "{pattern}")?;
    Ok(())
}

/// Reports the outcome of an ancestor check.
pub fn print_check(selected: &str, test: &str, is_selected: bool) -> Result<()> {
    let mut out = stdout();
    if is_selected {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "✓")?;
        out.reset()?;
        writeln!(out, " {test} is selected by {selected}")?;
    } else {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
        write!(out, "✗")?;
        out.reset()?;
        writeln!(out, " {test} is not selected by {selected}")?;
    }
    Ok(())
}
