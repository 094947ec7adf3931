//! ATX heading detection.

use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

/// Character opening an ATX heading.
pub const HEADING_MARKER: char = '#';

/// One or more markers, exactly one space, then the heading text to end of line.
static ATX_HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#+) (.+)$").unwrap());

/// A line that starts with the heading marker but is not a well-formed heading,
/// e.g. `##NoSpace` or `### `.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{line} starts with a hash but doesn't look like a header")]
pub struct MalformedHeading {
    line: String,
}

impl MalformedHeading {
    /// Original content of the offending line.
    pub fn line(&self) -> &str {
        &self.line
    }
}

/// A well-formed ATX heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingLine {
    /// Number of leading markers, h1 = 1, h2 = 2, etc.
    pub level: usize,
    /// Everything after the separating space, verbatim.
    pub text: String,
}

impl FromStr for HeadingLine {
    type Err = MalformedHeading;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cap = ATX_HEADING.captures(s).ok_or_else(|| MalformedHeading {
            line: s.to_owned(),
        })?;

        Ok(Self {
            level: cap[1].len(),
            text: cap[2].to_owned(),
        })
    }
}

/// Classification of a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Does not start with the heading marker.
    Plain,
    /// Level 1 heading, the document title.
    Title(HeadingLine),
    /// Heading of level 2 or deeper.
    Heading(HeadingLine),
    /// Starts with the marker but fails the heading pattern.
    Malformed(MalformedHeading),
}

impl LineKind {
    /// Classifies `line`, which must already be stripped of its line terminator.
    pub fn classify(line: &str) -> Self {
        if !line.starts_with(HEADING_MARKER) {
            return Self::Plain;
        }

        match line.parse::<HeadingLine>() {
            Ok(heading) if heading.level == 1 => Self::Title(heading),
            Ok(heading) => Self::Heading(heading),
            Err(malformed) => Self::Malformed(malformed),
        }
    }
}
