use serde::{Deserialize, Serialize};

use crate::Command;

/// Serializable collection of parsed commands.
///
/// A bundle is what a help-explainer UI ships instead of running each tool
/// at display time: the parsed help of many commands, with version
/// metadata, in a single JSON file.
///
/// # Examples
///
/// ```
/// use help_explainer_core::*;
///
/// let mut bundle = HelpBundle::new("1.0.0", "2024-01-15T10:30:00Z");
/// bundle.name = Some("my-tools".into());
/// bundle.commands.push(Command::new("build"));
/// bundle.commands.push(Command::new("deploy"));
///
/// assert_eq!(bundle.command_count(), 2);
/// assert!(bundle.get("deploy").is_some());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelpBundle {
    /// Model contract version (populated from
    /// [`MODEL_CONTRACT_VERSION`](crate::MODEL_CONTRACT_VERSION)).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    /// Bundle format version (semver string).
    pub version: String,
    pub name: Option<String>,
    pub description: Option<String>,
    /// ISO-8601 timestamp for bundle creation.
    pub generated_at: String,
    pub commands: Vec<Command>,
}

impl HelpBundle {
    /// Creates a bundle with required fields.
    ///
    /// The `model_version` is set from
    /// [`MODEL_CONTRACT_VERSION`](crate::MODEL_CONTRACT_VERSION).
    pub fn new(version: impl Into<String>, generated_at: impl Into<String>) -> Self {
        Self {
            model_version: Some(crate::MODEL_CONTRACT_VERSION.to_string()),
            version: version.into(),
            name: None,
            description: None,
            generated_at: generated_at.into(),
            commands: Vec::new(),
        }
    }

    /// Returns the number of commands in this bundle.
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Looks up a command by name.
    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|c| c.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Argument, Group};

    #[test]
    fn test_bundle_json_roundtrip_preserves_structure() {
        let mut bundle = HelpBundle::new("1.0.0", "2026-02-07T00:00:00Z");
        bundle.commands.push(
            Command::new("tool").with_group(
                Group::new("Global Options", "Everywhere")
                    .with_argument(Argument::new("verbose", "bool").with_default("false")),
            ),
        );

        let json = serde_json::to_string(&bundle).unwrap();
        let loaded: HelpBundle = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded.model_version.as_deref(), Some("1.0.0"));
        assert_eq!(loaded.commands, bundle.commands);
    }

    #[test]
    fn test_bundle_without_model_version_deserializes() {
        let json = r#"{"version":"1.0.0","name":null,"description":null,"generated_at":"x","commands":[]}"#;
        let bundle: HelpBundle = serde_json::from_str(json).unwrap();
        assert!(bundle.model_version.is_none());
        assert_eq!(bundle.command_count(), 0);
    }
}
