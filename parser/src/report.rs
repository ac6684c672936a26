//! Structured parse reporting.

use serde::{Deserialize, Serialize};

use help_explainer_core::{Command, validate_command};

use crate::parser::ParseDiagnostics;

/// Per-command parse report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseReport {
    pub command: String,
    /// `true` when at least one group was parsed.
    pub success: bool,
    pub group_count: usize,
    pub argument_count: usize,
    pub relevant_lines: usize,
    pub recognized_lines: usize,
    pub coverage: f64,
    pub unresolved_lines: Vec<String>,
    /// Parse issues rendered as text.
    pub issues: Vec<String>,
    pub validation_errors: Vec<String>,
}

impl ParseReport {
    /// Builds a report from a parsed command and the parser's diagnostics.
    pub fn new(command: &Command, diagnostics: &ParseDiagnostics) -> Self {
        Self {
            command: command.name.clone(),
            success: !command.groups.is_empty(),
            group_count: command.groups.len(),
            argument_count: command.argument_count(),
            relevant_lines: diagnostics.relevant_lines,
            recognized_lines: diagnostics.recognized_lines,
            coverage: diagnostics.coverage(),
            unresolved_lines: diagnostics.unresolved_lines.clone(),
            issues: diagnostics.warnings(),
            validation_errors: validate_command(command)
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

/// A parsed command together with its report.
#[derive(Debug, Clone)]
pub struct ParseRun {
    pub command: Command,
    pub report: ParseReport,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParseIssue;
    use help_explainer_core::Group;

    #[test]
    fn test_report_counts_and_issues() {
        let command = Command::new("tool")
            .with_group(Group::new("Options", ""))
            .with_group(Group::new("Options", ""));
        let diagnostics = ParseDiagnostics {
            relevant_lines: 4,
            recognized_lines: 2,
            unresolved_lines: vec!["--x".to_string()],
            issues: vec![ParseIssue::OrphanArgument {
                line: 1,
                name: "x".to_string(),
            }],
        };

        let report = ParseReport::new(&command, &diagnostics);

        assert!(report.success);
        assert_eq!(report.group_count, 2);
        assert_eq!(report.coverage, 0.5);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(
            report.validation_errors,
            vec!["duplicate group in command: Options".to_string()]
        );
    }

    #[test]
    fn test_report_without_groups_is_unsuccessful() {
        let report = ParseReport::new(&Command::new("tool"), &ParseDiagnostics::default());
        assert!(!report.success);
        assert_eq!(report.coverage, 0.0);
    }
}
