//! Issues and line accounting for one parse run.

use thiserror::Error;

/// A recoverable problem found while parsing.
///
/// Issues never abort a parse. They explain why input lines did not make it
/// into the resulting [`Command`](help_explainer_core::Command).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseIssue {
    /// Argument record appeared before any group header and was dropped.
    #[error("line {line}: argument --{name} appears before any group and was dropped")]
    OrphanArgument { line: usize, name: String },
    /// Argument record was cut off by the end of input and was dropped.
    #[error("line {line}: argument --{name} is truncated ({available} of 3 record lines present)")]
    TruncatedRecord {
        line: usize,
        name: String,
        available: usize,
    },
    /// Group header on the last line has no description line.
    #[error("line {line}: group '{group}' has no description line")]
    MissingGroupDescription { line: usize, group: String },
}

impl ParseIssue {
    /// 1-based line where the offending header or record starts.
    pub fn line(&self) -> usize {
        match self {
            Self::OrphanArgument { line, .. }
            | Self::TruncatedRecord { line, .. }
            | Self::MissingGroupDescription { line, .. } => *line,
        }
    }
}

/// Diagnostics for a single parse run.
#[derive(Debug, Clone, Default)]
pub struct ParseDiagnostics {
    /// Non-blank input lines.
    pub relevant_lines: usize,
    /// Non-blank lines that ended up in a group or a kept argument.
    pub recognized_lines: usize,
    /// Non-blank lines that were dropped, in input order.
    pub unresolved_lines: Vec<String>,
    pub issues: Vec<ParseIssue>,
}

impl ParseDiagnostics {
    pub fn coverage(&self) -> f64 {
        if self.relevant_lines == 0 {
            return 0.0;
        }
        self.recognized_lines as f64 / self.relevant_lines as f64
    }

    /// Issues rendered as human-readable warnings.
    pub fn warnings(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }
}
