//! Table of contents generation for markdown documents.
//!
//! Every ATX heading of level 2 or deeper becomes one ordered list item linking
//! to the heading's anchor, indented by its depth below h2:
//!
//! ```
//! let lines = ["# Title", "## Getting Started", "### Install (Linux)"];
//! let toc = toc::toc_entries(lines)
//!     .filter_map(Result::ok)
//!     .map(|entry| entry.to_string())
//!     .collect::<Vec<_>>();
//!
//! assert_eq!(
//!     toc,
//!     [
//!         "1. [Getting Started](#getting-started)",
//!         "   1. [Install (Linux)](#install-linux)",
//!     ]
//! );
//! ```

mod anchor;
mod entry;
mod heading;

pub use self::anchor::{to_anchor, PUNCTUATION_TO_STRIP};
pub use self::entry::{TocEntry, INDENT_UNIT, LIST_MARKER};
pub use self::heading::{HeadingLine, LineKind, MalformedHeading, HEADING_MARKER};

/// Lazy adapter turning input lines into toc entries.
///
/// Plain lines and the level 1 title are skipped silently. A line starting with
/// the heading marker that is not a well-formed heading is yielded as `Err`, the
/// iteration carries on with the next line afterwards.
#[derive(Debug, Clone)]
pub struct TocEntries<I> {
    lines: I,
}

impl<I> TocEntries<I> {
    pub fn new(lines: I) -> Self {
        Self { lines }
    }
}

impl<I, S> Iterator for TocEntries<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Result<TocEntry, MalformedHeading>;

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.lines.by_ref() {
            match LineKind::classify(line.as_ref()) {
                LineKind::Plain | LineKind::Title(_) => continue,
                LineKind::Heading(heading) => {
                    if let Some(entry) = TocEntry::from_heading(heading) {
                        tracing::trace!(?entry, "New toc entry");
                        return Some(Ok(entry));
                    }
                }
                LineKind::Malformed(malformed) => return Some(Err(malformed)),
            }
        }

        None
    }
}

/// Returns the toc entries of `lines` in input order.
pub fn toc_entries<I>(lines: I) -> TocEntries<I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    TocEntries::new(lines.into_iter())
}
