//! Parser configuration.
//!
//! Defines the YAML-serializable configuration that controls label widths,
//! input normalization, and the default output format. Every section is
//! optional and falls back to its default.
//!
//! # Example YAML
//!
//! ```yaml
//! layout:
//!   description: 13
//!   type_tag: 6
//!   default: 9
//! normalize:
//!   strip_ansi: true
//! output:
//!   format: markdown
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::output::OutputFormat;
use crate::parser::{HelpTextParser, LabelLayout};

/// Input clean-up applied before parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Remove ANSI escapes and backspace overstrikes.
    pub strip_ansi: bool,
}

/// Output settings used by the CLI when no `--format` is given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// Top-level parser configuration.
///
/// # Examples
///
/// ```
/// use help_explainer_parser::ParserConfig;
///
/// let config: ParserConfig = serde_yaml::from_str("normalize:\n  strip_ansi: true\n").unwrap();
/// assert!(config.normalize.strip_ansi);
/// assert_eq!(config.layout.description, 13);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    pub layout: LabelLayout,
    pub normalize: NormalizeConfig,
    pub output: OutputConfig,
}

impl ParserConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::ConfigError::IoError) if the file cannot
    /// be read, or [`YamlError`](crate::ConfigError::YamlError) if parsing
    /// fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::ConfigError::IoError) if the file cannot
    /// be written, or [`YamlError`](crate::ConfigError::YamlError) if
    /// serialization fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    /// Builds a parser configured with these settings.
    pub fn parser(&self, command: &str, help_text: &str) -> HelpTextParser {
        HelpTextParser::new(command, help_text)
            .with_layout(self.layout)
            .with_escape_stripping(self.normalize.strip_ansi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_yaml() -> &'static str {
        r#"
layout:
  description: 12
  type_tag: 5
  default: 8
normalize:
  strip_ansi: true
output:
  format: table
"#
    }

    #[test]
    fn test_deserialize_complete() {
        let config: ParserConfig = serde_yaml::from_str(sample_yaml()).unwrap();
        assert_eq!(config.layout.description, 12);
        assert_eq!(config.layout.type_tag, 5);
        assert_eq!(config.layout.default, 8);
        assert!(config.normalize.strip_ansi);
        assert_eq!(config.output.format, OutputFormat::Table);
    }

    #[test]
    fn test_deserialize_empty_uses_defaults() {
        let config: ParserConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, ParserConfig::default());
        assert_eq!(config.layout, LabelLayout::default());
        assert!(!config.normalize.strip_ansi);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_parser_applies_layout() {
        let config: ParserConfig = serde_yaml::from_str(sample_yaml()).unwrap();
        let help = "G\nd\n--flag\nDescription:x\nType:INT\nDefault:7";
        let command = config.parser("tool", help).parse();
        let arg = &command.groups[0].arguments[0];

        assert_eq!(arg.description, "x");
        assert_eq!(arg.arg_type.as_str(), "int");
        assert_eq!(arg.default.as_ref().and_then(|d| d.as_text()), Some("7"));
    }

    #[test]
    fn test_load_save_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("help-explainer.yml");

        let original: ParserConfig = serde_yaml::from_str(sample_yaml()).unwrap();
        original.save(&path).unwrap();

        let loaded = ParserConfig::load(&path).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = ParserConfig::load("/nonexistent/help-explainer.yml").unwrap_err();
        assert!(matches!(err, crate::ConfigError::IoError(_)));
    }
}
