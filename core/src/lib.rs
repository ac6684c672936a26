//! Core data model for parsed CLI help text.
//!
//! This crate defines the structures a help-explainer UI renders:
//!
//! - [`Command`]: one command's parsed help output, as ordered groups.
//! - [`Group`]: a named section of related flags (e.g. "Global Options").
//! - [`Argument`]: one `--flag` entry with description, type tag and
//!   default value.
//! - [`HelpBundle`]: a versioned collection of parsed commands for
//!   distribution.
//!
//! Validation ([`validate_command`], [`validate_bundle`]) flags duplicate
//! groups, duplicate flags and empty names.
//!
//! # Example
//!
//! ```
//! use help_explainer_core::*;
//!
//! let command = Command::new("mycli").with_group(
//!     Group::new("Global Options", "Options that apply to every command").with_argument(
//!         Argument::new("verbose", "Bool")
//!             .with_description("Enable verbose logging")
//!             .with_default("false"),
//!     ),
//! );
//!
//! let verbose = command.find_group("Global Options").unwrap().find_argument("verbose").unwrap();
//! assert_eq!(verbose.arg_type.as_str(), "bool");
//! assert!(validate_command(&command).is_empty());
//! ```

mod bundle;
mod types;
mod validate;

pub use bundle::HelpBundle;
pub use types::*;
pub use validate::{ValidationError, validate_bundle, validate_command};
