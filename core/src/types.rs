//! Data model for parsed help text.
//!
//! A [`Command`] holds an ordered list of [`Group`]s, and each group holds an
//! ordered list of [`Argument`]s. The types serialize with [`serde`] so a
//! rendering layer can consume them as JSON or YAML.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Version of the serialized model contract (semver).
///
/// Embedded in every [`HelpBundle`](crate::HelpBundle) to track
/// compatibility between producers and renderers.
pub const MODEL_CONTRACT_VERSION: &str = "1.0.0";

/// Type tag of an argument, stored as lowercase free text.
///
/// Help output may name any scalar type (`bool`, `string`, `int`, ...), so
/// this is an open set rather than a closed enum. Construction always
/// lowercases the tag.
///
/// # Examples
///
/// ```
/// use help_explainer_core::ArgType;
///
/// let tag = ArgType::new("Bool");
/// assert_eq!(tag.as_str(), "bool");
/// assert!(tag.is_bool());
/// assert!(!ArgType::new("string").is_bool());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ArgType(String);

impl ArgType {
    /// The boolean type tag.
    pub const BOOL: &'static str = "bool";

    /// Creates a type tag, lowercasing the input.
    pub fn new(tag: &str) -> Self {
        Self(tag.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for the `bool` tag.
    pub fn is_bool(&self) -> bool {
        self.0 == Self::BOOL
    }
}

impl From<String> for ArgType {
    fn from(tag: String) -> Self {
        Self::new(&tag)
    }
}

impl From<ArgType> for String {
    fn from(tag: ArgType) -> Self {
        tag.0
    }
}

impl fmt::Display for ArgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Default value of an argument.
///
/// The parser always keeps defaults as text. The numeric form exists for
/// models built by hand or loaded from JSON.
///
/// # Examples
///
/// ```
/// use help_explainer_core::DefaultValue;
///
/// let parsed: DefaultValue = serde_json::from_str("8080").unwrap();
/// assert_eq!(parsed, DefaultValue::Number(8080.0));
///
/// let text: DefaultValue = serde_json::from_str("\"false\"").unwrap();
/// assert_eq!(text.to_string(), "false");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Number(f64),
    Text(String),
}

impl DefaultValue {
    /// Returns the text form, if this is a text default.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Number(_) => None,
        }
    }
}

impl From<&str> for DefaultValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<f64> for DefaultValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// One `--flag` entry within a group.
///
/// # Examples
///
/// ```
/// use help_explainer_core::{Argument, DefaultValue};
///
/// let verbose = Argument::new("verbose", "bool")
///     .with_description("Enable verbose logging")
///     .with_default("false");
///
/// assert!(verbose.arg_type.is_bool());
/// assert_eq!(verbose.default, Some(DefaultValue::Text("false".into())));
/// assert_eq!(verbose.required, None);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Argument {
    /// Flag name without the leading `--`
    pub name: String,
    pub description: String,
    /// Lowercased type tag
    #[serde(rename = "type")]
    pub arg_type: ArgType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

impl Argument {
    /// Creates an argument with the given name and type tag.
    pub fn new(name: &str, arg_type: &str) -> Self {
        Self {
            name: name.to_string(),
            arg_type: ArgType::new(arg_type),
            ..Default::default()
        }
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = desc.to_string();
        self
    }

    /// Sets the default value.
    pub fn with_default(mut self, default: impl Into<DefaultValue>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Marks whether the argument is required.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    /// Returns the flag as it appears on a command line (`--name`).
    pub fn flag(&self) -> String {
        format!("--{}", self.name)
    }
}

/// A named section of related arguments, such as "Global Options".
///
/// # Examples
///
/// ```
/// use help_explainer_core::{Argument, Group};
///
/// let group = Group::new("Global Options", "Options that apply to every command")
///     .with_argument(Argument::new("verbose", "bool"));
///
/// assert_eq!(group.arguments.len(), 1);
/// assert!(group.find_argument("verbose").is_some());
/// assert!(group.find_argument("--verbose").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    pub description: String,
    /// Arguments in source order
    pub arguments: Vec<Argument>,
}

impl Group {
    /// Creates an empty group.
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            arguments: Vec::new(),
        }
    }

    /// Adds an argument.
    pub fn with_argument(mut self, argument: Argument) -> Self {
        self.arguments.push(argument);
        self
    }

    /// Finds an argument by name, with or without the leading `--`.
    pub fn find_argument(&self, name: &str) -> Option<&Argument> {
        let name = name.strip_prefix("--").unwrap_or(name);
        self.arguments.iter().find(|a| a.name == name)
    }
}

/// Parsed help output of one command.
///
/// A command always has a name; empty help text yields zero groups.
///
/// # Examples
///
/// ```
/// use help_explainer_core::*;
///
/// let command = Command::new("mycli")
///     .with_group(
///         Group::new("Global Options", "Apply everywhere")
///             .with_argument(Argument::new("verbose", "bool")),
///     )
///     .with_group(Group::new("Build Options", "Control the build"));
///
/// assert_eq!(command.group_names(), vec!["Global Options", "Build Options"]);
/// assert_eq!(command.argument_count(), 1);
/// assert!(command.find_group("Build Options").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Command {
    pub name: String,
    /// Groups in order of first appearance
    pub groups: Vec<Group>,
}

impl Command {
    /// Creates a command with no groups.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            groups: Vec::new(),
        }
    }

    /// Adds a group.
    pub fn with_group(mut self, group: Group) -> Self {
        self.groups.push(group);
        self
    }

    /// Finds the first group with the given name.
    pub fn find_group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Gets all group names in order.
    pub fn group_names(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.name.as_str()).collect()
    }

    /// Total number of arguments across all groups.
    pub fn argument_count(&self) -> usize {
        self.groups.iter().map(|g| g.arguments.len()).sum()
    }

    /// Iterates over every argument with the group that holds it.
    pub fn arguments(&self) -> impl Iterator<Item = (&Group, &Argument)> {
        self.groups
            .iter()
            .flat_map(|g| g.arguments.iter().map(move |a| (g, a)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arg_type_lowercases() {
        assert_eq!(ArgType::new("STRING").as_str(), "string");
        assert_eq!(ArgType::from("Int".to_string()).as_str(), "int");
    }

    #[test]
    fn test_argument_serializes_with_source_keys() {
        let arg = Argument::new("verbose", "bool")
            .with_description("Enable verbose logging")
            .with_default("false");

        let json = serde_json::to_value(&arg).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "verbose",
                "description": "Enable verbose logging",
                "type": "bool",
                "default": "false"
            })
        );
    }

    #[test]
    fn test_argument_deserializes_numeric_default_and_required() {
        let json = r#"{"name":"port","description":"Port","type":"INT","default":8080,"required":true}"#;
        let arg: Argument = serde_json::from_str(json).unwrap();

        assert_eq!(arg.arg_type.as_str(), "int");
        assert_eq!(arg.default, Some(DefaultValue::Number(8080.0)));
        assert_eq!(arg.required, Some(true));
    }

    #[test]
    fn test_command_arguments_iterates_in_order() {
        let command = Command::new("tool")
            .with_group(
                Group::new("A", "")
                    .with_argument(Argument::new("one", "bool"))
                    .with_argument(Argument::new("two", "bool")),
            )
            .with_group(Group::new("B", "").with_argument(Argument::new("three", "int")));

        let names: Vec<_> = command
            .arguments()
            .map(|(g, a)| format!("{}:{}", g.name, a.name))
            .collect();
        assert_eq!(names, vec!["A:one", "A:two", "B:three"]);
    }

    #[test]
    fn test_empty_command_keeps_name() {
        let command = Command::new("empty");
        assert_eq!(command.name, "empty");
        assert!(command.groups.is_empty());
        assert_eq!(command.argument_count(), 0);
    }
}
