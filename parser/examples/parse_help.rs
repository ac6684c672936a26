//! Basic help text parsing example.
//!
//! Demonstrates how to use `parse_help_text_with_report()` to turn
//! fixed-layout help output into groups and arguments.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p help-explainer-parser --example parse_help
//! ```

use help_explainer_parser::{ParserConfig, parse_help_text_with_report};

fn main() {
    let help_text = r#"
Global Options
Options that apply to every command

--verbose
Description: Enable verbose logging
Type: bool
Default: false

Build Options
Control compilation

--jobs
Description: Number of parallel jobs
Type: Int
Default: 4
--target
Description: Target triple to build for
Type: String
Default: host
"#;

    let run = parse_help_text_with_report(help_text, "mycli", &ParserConfig::default());

    println!("Command: {}", run.command.name);
    println!("Coverage: {:.2}", run.report.coverage);

    if !run.report.issues.is_empty() {
        println!("\nIssues:");
        for issue in &run.report.issues {
            println!("  - {issue}");
        }
    }

    for group in &run.command.groups {
        println!("\n{} ({} arguments)", group.name, group.arguments.len());
        println!("  {}", group.description);
        for arg in &group.arguments {
            let default = arg
                .default
                .as_ref()
                .map(|d| format!(" [default: {d}]"))
                .unwrap_or_default();
            println!("  {} <{}>  {}{default}", arg.flag(), arg.arg_type, arg.description);
        }
    }
}
