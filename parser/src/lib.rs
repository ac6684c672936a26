//! Parsing of fixed-layout CLI help text.
//!
//! This crate turns the help output of a command, as written by a CLI
//! framework with a deterministic layout, into a structured
//! [`Command`] → [`Group`] → [`Argument`] model that a help-explainer
//! widget can render.
//!
//! # Main entry points
//!
//! - [`parse_help_text`]: parse help text into a [`Command`].
//! - [`parse_help_text_with_report`]: same, with configuration applied and
//!   a [`ParseReport`](report::ParseReport) describing coverage and issues.
//! - [`bundle::parse_help_dir`]: parse a directory of help dumps in
//!   parallel.
//!
//! # Example
//!
//! ```
//! use help_explainer_parser::parse_help_text;
//!
//! let help = "\
//! Global Options
//! Options that apply to every command
//!
//! --verbose
//! Description: Enable verbose logging
//! Type: bool
//! Default: false
//! ";
//!
//! let command = parse_help_text(help, "mycli");
//! assert_eq!(command.name, "mycli");
//! assert_eq!(command.groups[0].arguments[0].description, "Enable verbose logging");
//! ```
//!
//! [`Command`]: help_explainer_core::Command
//! [`Group`]: help_explainer_core::Group
//! [`Argument`]: help_explainer_core::Argument

pub mod bundle;
pub mod config;
mod error;
pub mod output;
pub mod parser;
pub mod report;

use help_explainer_core::Command;
use parser::HelpTextParser;
use report::{ParseReport, ParseRun};

pub use config::ParserConfig;
pub use error::{ConfigError, Result};

/// Parses help text into a [`Command`] with the default layout.
///
/// Never fails: malformed records are dropped and empty input yields a
/// command without groups. Use [`parse_help_text_with_report`] to see what
/// was dropped.
///
/// # Examples
///
/// ```
/// use help_explainer_parser::parse_help_text;
///
/// let command = parse_help_text("", "empty");
/// assert_eq!(command.name, "empty");
/// assert!(command.groups.is_empty());
/// ```
pub fn parse_help_text(help_text: &str, command: &str) -> Command {
    HelpTextParser::new(command, help_text).parse()
}

/// Parses help text with the given configuration and reports on the run.
///
/// # Examples
///
/// ```
/// use help_explainer_parser::{ParserConfig, parse_help_text_with_report};
///
/// let help = "--orphan\nDescription: x\nType: bool\nDefault: y\nOptions\nAll options";
/// let run = parse_help_text_with_report(help, "tool", &ParserConfig::default());
///
/// assert_eq!(run.command.groups.len(), 1);
/// assert_eq!(run.report.issues.len(), 1);
/// println!("Coverage: {:.2}", run.report.coverage);
/// ```
pub fn parse_help_text_with_report(
    help_text: &str,
    command: &str,
    config: &ParserConfig,
) -> ParseRun {
    let mut parser = config.parser(command, help_text);
    let command = parser.parse();
    let report = ParseReport::new(&command, parser.diagnostics());

    ParseRun { command, report }
}
