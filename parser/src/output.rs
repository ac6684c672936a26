//! Output formatting for parsed commands and reports.

use serde::{Deserialize, Serialize};

use help_explainer_core::{Argument, Command};

use crate::report::ParseReport;

/// Supported output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Markdown,
    Table,
}

/// Formats a command in the requested output format.
pub fn format_command(command: &Command, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(command)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(command).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        OutputFormat::Markdown => Ok(command_to_markdown(command)),
        OutputFormat::Table => Ok(command_to_table(command)),
    }
}

/// Formats a parse report in the requested output format.
pub fn format_report(report: &ParseReport, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(report)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(report).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        OutputFormat::Markdown => Ok(report_to_markdown(report)),
        OutputFormat::Table => Ok(report_to_table(report)),
    }
}

fn default_text(argument: &Argument) -> String {
    argument
        .default
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default()
}

fn command_to_markdown(command: &Command) -> String {
    let mut out = String::new();

    out.push_str(&format!("# {}\n\n", command.name));

    for group in &command.groups {
        out.push_str(&format!("## {}\n\n", group.name));
        if !group.description.is_empty() {
            out.push_str(&format!("{}\n\n", group.description));
        }
        if group.arguments.is_empty() {
            continue;
        }

        out.push_str("| Flag | Type | Default | Description |\n");
        out.push_str("|------|------|---------|-------------|\n");
        for arg in &group.arguments {
            out.push_str(&format!(
                "| `{}` | {} | {} | {} |\n",
                arg.flag(),
                arg.arg_type,
                default_text(arg),
                arg.description
            ));
        }
        out.push('\n');
    }

    out
}

fn command_to_table(command: &Command) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Command: {}  Groups: {}  Arguments: {}\n",
        command.name,
        command.groups.len(),
        command.argument_count()
    ));

    for group in &command.groups {
        out.push_str(&format!("\n{}:\n", group.name));
        if !group.description.is_empty() {
            out.push_str(&format!("  {}\n", group.description));
        }

        let max_name = group
            .arguments
            .iter()
            .map(|a| a.flag().chars().count())
            .max()
            .unwrap_or(4);
        let max_type = group
            .arguments
            .iter()
            .map(|a| a.arg_type.as_str().chars().count())
            .max()
            .unwrap_or(4);

        for arg in &group.arguments {
            out.push_str(&format!(
                "  {:<name_width$}  {:<type_width$}  {}",
                arg.flag(),
                arg.arg_type.as_str(),
                arg.description,
                name_width = max_name,
                type_width = max_type
            ));
            let default = default_text(arg);
            if !default.is_empty() {
                out.push_str(&format!(" (default: {default})"));
            }
            out.push('\n');
        }
    }

    out
}

fn report_to_markdown(report: &ParseReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("# Parse Report: {}\n\n", report.command));
    out.push_str(&format!(
        "- **Success:** {}\n",
        if report.success { "yes" } else { "no" }
    ));
    out.push_str(&format!("- **Groups:** {}\n", report.group_count));
    out.push_str(&format!("- **Arguments:** {}\n", report.argument_count));
    out.push_str(&format!("- **Coverage:** {:.2}\n", report.coverage));

    if !report.issues.is_empty() {
        out.push_str("\n## Issues\n\n");
        for issue in &report.issues {
            out.push_str(&format!("- {issue}\n"));
        }
    }

    if !report.validation_errors.is_empty() {
        out.push_str("\n## Validation Errors\n\n");
        for err in &report.validation_errors {
            out.push_str(&format!("- {err}\n"));
        }
    }

    out
}

fn report_to_table(report: &ParseReport) -> String {
    let status = if report.success { "OK" } else { "EMPTY" };
    let mut out = format!(
        "{:<20} {:<6} groups={} args={} cov={:.2}",
        report.command, status, report.group_count, report.argument_count, report.coverage,
    );
    if !report.issues.is_empty() {
        out.push_str(&format!("  [{} issues]", report.issues.len()));
    }
    out.push('\n');
    out
}
