use crate::anchor::to_anchor;
use crate::heading::HeadingLine;
use std::fmt;

/// Indentation added per heading level below h2.
pub const INDENT_UNIT: &str = "   ";

/// Ordered list marker used for every entry, renderers number the items.
pub const LIST_MARKER: &str = "1.";

/// A single line of the table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    /// `level - 2`, h2 entries sit at the top of the list.
    pub indent_depth: usize,
    /// Heading text, verbatim.
    pub label: String,
    /// Fragment including the leading `#`.
    pub anchor: String,
}

impl TocEntry {
    /// Returns `None` for the level 1 title, which never appears in the toc.
    pub fn from_heading(heading: HeadingLine) -> Option<Self> {
        let HeadingLine { level, text } = heading;

        let indent_depth = level.checked_sub(2)?;
        let anchor = to_anchor(&text);

        Some(Self {
            indent_depth,
            label: text,
            anchor,
        })
    }
}

impl fmt::Display for TocEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            indent_depth,
            label,
            anchor,
        } = self;

        for _ in 0..*indent_depth {
            f.write_str(INDENT_UNIT)?;
        }

        write!(f, "{LIST_MARKER} [{label}]({anchor})")
    }
}
