//! Fixed label widths of an argument record.

use serde::{Deserialize, Serialize};

/// Width of the `"Description: "` label on record line 1.
pub const DESCRIPTION_LABEL_WIDTH: usize = 13;
/// Width of the `"Type: "` label on record line 2.
pub const TYPE_LABEL_WIDTH: usize = 6;
/// Width of the `"Default: "` label on record line 3.
pub const DEFAULT_LABEL_WIDTH: usize = 9;

/// Character widths of the label prefixes stripped from record lines.
///
/// The help generator writes labels at fixed widths, so the parser removes
/// them by count rather than by matching their text. A line shorter than its
/// label yields an empty field.
///
/// # Examples
///
/// ```
/// use help_explainer_parser::parser::LabelLayout;
///
/// let layout = LabelLayout::default();
/// assert_eq!(layout.description, 13);
/// assert_eq!(LabelLayout::strip("Type: bool", layout.type_tag), "bool");
/// assert_eq!(LabelLayout::strip("Type", layout.type_tag), "");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelLayout {
    pub description: usize,
    pub type_tag: usize,
    pub default: usize,
}

impl Default for LabelLayout {
    fn default() -> Self {
        Self {
            description: DESCRIPTION_LABEL_WIDTH,
            type_tag: TYPE_LABEL_WIDTH,
            default: DEFAULT_LABEL_WIDTH,
        }
    }
}

impl LabelLayout {
    /// Removes the first `width` characters of `line` and trims the rest.
    pub fn strip(line: &str, width: usize) -> &str {
        match line.char_indices().nth(width) {
            Some((offset, _)) => line[offset..].trim(),
            None => "",
        }
    }
}
