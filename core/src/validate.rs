//! Command and bundle validation.
//!
//! The parser never rejects its input, so these checks are advisory: they
//! flag structures a renderer may display confusingly, such as two groups
//! with the same name or a flag listed twice in one group.
//!
//! # Examples
//!
//! ```
//! use help_explainer_core::*;
//!
//! let command = Command::new("tool")
//!     .with_group(Group::new("Options", "").with_argument(Argument::new("verbose", "bool")));
//! assert!(validate_command(&command).is_empty());
//!
//! // Invalid: the same group twice
//! let bad = Command::new("tool")
//!     .with_group(Group::new("Options", ""))
//!     .with_group(Group::new("Options", ""));
//! assert!(!validate_command(&bad).is_empty());
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::{Command, Group, HelpBundle};

/// Command/bundle validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Bundle version string is empty.
    #[error("bundle version cannot be empty")]
    EmptyBundleVersion,
    /// Command name is empty or whitespace-only.
    #[error("command name cannot be empty")]
    EmptyCommandName,
    /// Two commands in the same bundle share a name.
    #[error("duplicate command in bundle: {0}")]
    DuplicateCommand(String),
    /// Group name is empty.
    #[error("group name cannot be empty")]
    EmptyGroupName,
    /// Two groups in the same command share a name.
    #[error("duplicate group in command: {0}")]
    DuplicateGroup(String),
    /// Argument name is empty (a bare `--` line).
    #[error("argument name cannot be empty in group: {0}")]
    EmptyArgumentName(String),
    /// Two arguments in the same group share a name.
    #[error("duplicate argument --{argument} in group: {group}")]
    DuplicateArgument { group: String, argument: String },
}

/// Validates a bundle.
///
/// Checks for an empty version string and duplicate command names, then
/// validates each command. Errors from every command are collected.
///
/// # Examples
///
/// ```
/// use help_explainer_core::*;
///
/// let mut bundle = HelpBundle::new("1.0.0", "2024-01-01T00:00:00Z");
/// bundle.commands.push(Command::new("git"));
/// assert!(validate_bundle(&bundle).is_empty());
///
/// bundle.commands.push(Command::new("git"));
/// let errors = validate_bundle(&bundle);
/// assert!(errors.iter().any(|e| matches!(e, ValidationError::DuplicateCommand(_))));
/// ```
pub fn validate_bundle(bundle: &HelpBundle) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if bundle.version.trim().is_empty() {
        errors.push(ValidationError::EmptyBundleVersion);
        return errors;
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for command in &bundle.commands {
        if !seen.insert(command.name.as_str()) {
            errors.push(ValidationError::DuplicateCommand(command.name.clone()));
        }
        errors.extend(validate_command(command));
    }

    errors
}

/// Validates a single command.
///
/// Checks the command name, then every group in order. All problems are
/// reported, not only the first.
pub fn validate_command(command: &Command) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if command.name.trim().is_empty() {
        errors.push(ValidationError::EmptyCommandName);
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for group in &command.groups {
        if group.name.is_empty() {
            errors.push(ValidationError::EmptyGroupName);
        } else if !seen.insert(group.name.as_str()) {
            errors.push(ValidationError::DuplicateGroup(group.name.clone()));
        }
        errors.extend(validate_group(group));
    }

    errors
}

fn validate_group(group: &Group) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for argument in &group.arguments {
        if argument.name.is_empty() {
            errors.push(ValidationError::EmptyArgumentName(group.name.clone()));
            continue;
        }
        if !seen.insert(argument.name.as_str()) {
            errors.push(ValidationError::DuplicateArgument {
                group: group.name.clone(),
                argument: argument.name.clone(),
            });
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use crate::Argument;

    use super::*;

    #[test]
    fn test_validate_bundle_rejects_empty_version() {
        let bundle = HelpBundle::new("  ", "2026-02-07T00:00:00Z");
        assert_eq!(
            validate_bundle(&bundle),
            vec![ValidationError::EmptyBundleVersion]
        );
    }

    #[test]
    fn test_validate_bundle_rejects_duplicate_commands() {
        let mut bundle = HelpBundle::new("1.0.0", "2026-02-07T00:00:00Z");
        bundle.commands.push(Command::new("git"));
        bundle.commands.push(Command::new("git"));

        assert_eq!(
            validate_bundle(&bundle),
            vec![ValidationError::DuplicateCommand("git".to_string())]
        );
    }

    #[test]
    fn test_validate_command_rejects_duplicate_argument() {
        let command = Command::new("tool").with_group(
            Group::new("Options", "")
                .with_argument(Argument::new("verbose", "bool"))
                .with_argument(Argument::new("verbose", "bool")),
        );

        assert_eq!(
            validate_command(&command),
            vec![ValidationError::DuplicateArgument {
                group: "Options".to_string(),
                argument: "verbose".to_string(),
            }]
        );
    }

    #[test]
    fn test_validate_command_collects_every_problem() {
        let command = Command::new("")
            .with_group(Group::new("", "").with_argument(Argument::new("", "bool")))
            .with_group(Group::new("A", ""))
            .with_group(Group::new("A", ""));

        assert_eq!(
            validate_command(&command),
            vec![
                ValidationError::EmptyCommandName,
                ValidationError::EmptyGroupName,
                ValidationError::EmptyArgumentName(String::new()),
                ValidationError::DuplicateGroup("A".to_string()),
            ]
        );
    }

    #[test]
    fn test_validate_command_accepts_same_flag_in_different_groups() {
        let command = Command::new("tool")
            .with_group(Group::new("A", "").with_argument(Argument::new("verbose", "bool")))
            .with_group(Group::new("B", "").with_argument(Argument::new("verbose", "bool")));

        assert!(validate_command(&command).is_empty());
    }

    #[test]
    fn test_error_messages() {
        let err = ValidationError::DuplicateArgument {
            group: "Options".to_string(),
            argument: "verbose".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate argument --verbose in group: Options");
    }
}
