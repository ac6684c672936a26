//! Explicit line cursor over help text.

/// One raw input line with its 1-based position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Line<'a> {
    pub(super) number: usize,
    pub(super) text: &'a str,
}

/// Forward-only cursor over the lines of a help text.
///
/// Lines are split on `\n` only, so a trailing newline yields a final
/// empty line that a record or header can still consume.
///
/// Records are fixed-length, so the parser advances by a known count per
/// record instead of one line per loop iteration.
#[derive(Debug)]
pub(super) struct LineCursor<'a> {
    lines: Vec<&'a str>,
    position: usize,
}

impl<'a> LineCursor<'a> {
    pub(super) fn new(text: &'a str) -> Self {
        Self {
            lines: text.split('\n').collect(),
            position: 0,
        }
    }

    /// Consumes and returns the next line.
    pub(super) fn next_line(&mut self) -> Option<Line<'a>> {
        let text = *self.lines.get(self.position)?;
        self.position += 1;
        Some(Line {
            number: self.position,
            text,
        })
    }

    /// Consumes up to `count` lines. Fewer are returned only at end of input.
    pub(super) fn take(&mut self, count: usize) -> Vec<Line<'a>> {
        let mut taken = Vec::with_capacity(count);
        while taken.len() < count {
            let Some(line) = self.next_line() else {
                break;
            };
            taken.push(line);
        }
        taken
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_line_numbers_from_one() {
        let mut cursor = LineCursor::new("a\nb");
        assert_eq!(cursor.next_line(), Some(Line { number: 1, text: "a" }));
        assert_eq!(cursor.next_line(), Some(Line { number: 2, text: "b" }));
        assert_eq!(cursor.next_line(), None);
    }

    #[test]
    fn test_take_stops_at_end_of_input() {
        let mut cursor = LineCursor::new("a\nb\nc");
        cursor.next_line();

        let taken = cursor.take(3);
        assert_eq!(taken.len(), 2);
        assert_eq!(taken[1].text, "c");
        assert_eq!(cursor.next_line(), None);
    }

    #[test]
    fn test_take_keeps_blank_lines() {
        let mut cursor = LineCursor::new("\n\nx\n");
        let taken = cursor.take(3);
        let texts: Vec<_> = taken.iter().map(|l| l.text).collect();
        assert_eq!(texts, vec!["", "", "x"]);
    }

    #[test]
    fn test_trailing_newline_yields_empty_last_line() {
        let mut cursor = LineCursor::new("a\n");
        assert_eq!(cursor.next_line(), Some(Line { number: 1, text: "a" }));
        assert_eq!(cursor.next_line(), Some(Line { number: 2, text: "" }));
        assert_eq!(cursor.next_line(), None);
    }
}
