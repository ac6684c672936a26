//! Parser for fixed-layout help output.
//!
//! The help text this module reads is generated by a CLI framework with a
//! deterministic layout, so the parser is the exact inverse of that layout
//! rather than a heuristic free-text reader. After trimming each line:
//!
//! - Blank lines are skipped. They neither close a group nor end a record.
//! - A line that does not start with `--` is a **group header**. The line
//!   right after it, blank or not, is the group description.
//! - A line that starts with `--` opens a four-line **argument record**:
//!
//! ```text
//! --verbose
//! Description: Enable verbose logging
//! Type: bool
//! Default: false
//! ```
//!
//! Label prefixes on the last three lines are removed by character count
//! (see [`LabelLayout`]), never by matching their text. Shifted input
//! therefore produces garbled fields, not errors.
//!
//! The primary entry point is [`HelpTextParser::new`] followed by
//! [`HelpTextParser::parse`], but most consumers should use the higher-level
//! [`parse_help_text`](crate::parse_help_text) function instead.

mod cursor;
mod diagnostics;
mod layout;
mod normalize;

use tracing::{debug, warn};

use help_explainer_core::{ArgType, Argument, Command, DefaultValue, Group};

use cursor::{Line, LineCursor};

pub use diagnostics::{ParseDiagnostics, ParseIssue};
pub use layout::{DEFAULT_LABEL_WIDTH, DESCRIPTION_LABEL_WIDTH, LabelLayout, TYPE_LABEL_WIDTH};
pub use normalize::{normalize_line_endings, strip_terminal_escapes};

/// Prefix that marks the first line of an argument record.
pub const ARGUMENT_PREFIX: &str = "--";

/// Lines following the `--name` line in an argument record.
const RECORD_BODY_LINES: usize = 3;

/// Parser for fixed-layout help output.
///
/// # Examples
///
/// ```
/// use help_explainer_parser::parser::HelpTextParser;
///
/// let help = "\
/// Global Options
/// Options that apply to every command
///
/// --verbose
/// Description: Enable verbose logging
/// Type: Bool
/// Default: false
/// ";
///
/// let mut parser = HelpTextParser::new("mycli", help);
/// let command = parser.parse();
///
/// let group = &command.groups[0];
/// assert_eq!(group.name, "Global Options");
/// assert_eq!(group.arguments[0].name, "verbose");
/// assert_eq!(group.arguments[0].arg_type.as_str(), "bool");
/// assert!(parser.issues().is_empty());
/// ```
pub struct HelpTextParser {
    command: String,
    raw_output: String,
    layout: LabelLayout,
    strip_escapes: bool,
    diagnostics: ParseDiagnostics,
}

impl HelpTextParser {
    /// Creates a new parser for the given command and help output.
    pub fn new(command: &str, help_output: &str) -> Self {
        Self {
            command: command.to_string(),
            raw_output: help_output.to_string(),
            layout: LabelLayout::default(),
            strip_escapes: false,
            diagnostics: ParseDiagnostics::default(),
        }
    }

    /// Overrides the label widths stripped from record lines.
    pub fn with_layout(mut self, layout: LabelLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Strips ANSI escapes and overstrikes before parsing.
    pub fn with_escape_stripping(mut self, enabled: bool) -> Self {
        self.strip_escapes = enabled;
        self
    }

    /// Parses the help output.
    ///
    /// Always returns a [`Command`] named after the parser's command; empty
    /// input yields zero groups. Calling `parse` again starts over and
    /// produces an identical result.
    pub fn parse(&mut self) -> Command {
        self.diagnostics = ParseDiagnostics::default();

        let cleaned = if self.strip_escapes {
            strip_terminal_escapes(&self.raw_output)
        } else {
            self.raw_output.clone()
        };
        let normalized = normalize_line_endings(&cleaned);

        let mut cursor = LineCursor::new(&normalized);
        let mut command = Command::new(&self.command);
        let mut open_group: Option<Group> = None;

        while let Some(line) = cursor.next_line() {
            let content = line.text.trim();
            if content.is_empty() {
                continue;
            }
            self.diagnostics.relevant_lines += 1;

            if let Some(flag) = content.strip_prefix(ARGUMENT_PREFIX) {
                let body = cursor.take(RECORD_BODY_LINES);
                self.count_relevant(&body);
                self.read_argument(flag.trim(), line, &body, open_group.as_mut());
            } else {
                if let Some(group) = open_group.take() {
                    command.groups.push(group);
                }
                let description = cursor.next_line();
                if let Some(description) = description {
                    self.count_relevant(&[description]);
                }
                open_group = Some(self.read_group(content, line, description));
            }
        }

        if let Some(group) = open_group.take() {
            command.groups.push(group);
        }

        debug!(
            command = %command.name,
            groups = command.groups.len(),
            arguments = command.argument_count(),
            issues = self.diagnostics.issues.len(),
            "Parsed help text"
        );
        command
    }

    /// Issues recorded by the last [`parse`](Self::parse) call.
    pub fn issues(&self) -> &[ParseIssue] {
        &self.diagnostics.issues
    }

    /// Line accounting and issues for the last [`parse`](Self::parse) call.
    pub fn diagnostics(&self) -> &ParseDiagnostics {
        &self.diagnostics
    }

    fn read_group(&mut self, name: &str, header: Line<'_>, description: Option<Line<'_>>) -> Group {
        self.diagnostics.recognized_lines += 1;
        let description = match description {
            Some(line) => {
                let text = line.text.trim();
                if !text.is_empty() {
                    self.diagnostics.recognized_lines += 1;
                }
                text
            }
            None => {
                self.diagnostics.issues.push(ParseIssue::MissingGroupDescription {
                    line: header.number,
                    group: name.to_string(),
                });
                ""
            }
        };
        Group::new(name, description)
    }

    fn read_argument(
        &mut self,
        name: &str,
        header: Line<'_>,
        body: &[Line<'_>],
        group: Option<&mut Group>,
    ) {
        let [description, type_tag, default] = body else {
            warn!(
                command = %self.command,
                line = header.number,
                argument = name,
                "Dropping truncated argument record"
            );
            self.diagnostics.issues.push(ParseIssue::TruncatedRecord {
                line: header.number,
                name: name.to_string(),
                available: body.len(),
            });
            self.mark_unresolved(header, body);
            return;
        };

        let Some(group) = group else {
            debug!(
                command = %self.command,
                line = header.number,
                argument = name,
                "Dropping argument record outside of any group"
            );
            self.diagnostics.issues.push(ParseIssue::OrphanArgument {
                line: header.number,
                name: name.to_string(),
            });
            self.mark_unresolved(header, body);
            return;
        };

        let layout = self.layout;
        let argument = Argument {
            name: name.to_string(),
            description: LabelLayout::strip(description.text.trim(), layout.description)
                .to_string(),
            arg_type: ArgType::new(LabelLayout::strip(type_tag.text.trim(), layout.type_tag)),
            default: Some(DefaultValue::Text(
                LabelLayout::strip(default.text.trim(), layout.default).to_string(),
            )),
            required: None,
        };
        group.arguments.push(argument);

        self.diagnostics.recognized_lines +=
            1 + body.iter().filter(|l| !l.text.trim().is_empty()).count();
    }

    /// Counts non-blank lines consumed positionally by a header or record.
    fn count_relevant(&mut self, lines: &[Line<'_>]) {
        self.diagnostics.relevant_lines += lines
            .iter()
            .filter(|l| !l.text.trim().is_empty())
            .count();
    }

    fn mark_unresolved(&mut self, header: Line<'_>, body: &[Line<'_>]) {
        self.diagnostics.unresolved_lines.extend(
            std::iter::once(header)
                .chain(body.iter().copied())
                .map(|l| l.text.trim())
                .filter(|t| !t.is_empty())
                .map(String::from),
        );
    }
}
