//! Heading text to in-document anchor.

/// Characters removed from heading text before it becomes an anchor.
///
/// Includes the typographic apostrophe (U+2019) alongside the plain one so that
/// `Author’s Notes` and `Author's Notes` link to the same fragment.
pub const PUNCTUATION_TO_STRIP: &[char] = &['(', ')', '\'', '\u{2019}'];

/// Converts heading text to a URL fragment, including the leading `#`.
///
/// The text is lowercased, [`PUNCTUATION_TO_STRIP`] is dropped and every space
/// becomes a hyphen. Nothing else is touched, so identical headings always yield
/// identical anchors.
///
/// # Example
///
/// ```
/// use toc::to_anchor;
///
/// assert_eq!(to_anchor("Getting Started"), "#getting-started");
/// assert_eq!(to_anchor("Install (Linux)"), "#install-linux");
/// ```
pub fn to_anchor(text: &str) -> String {
    let mut anchor = String::with_capacity(text.len() + 1);
    anchor.push('#');
    anchor.extend(
        text.to_lowercase()
            .chars()
            .filter(|c| !PUNCTUATION_TO_STRIP.contains(c))
            .map(|c| if c == ' ' { '-' } else { c }),
    );
    anchor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_anchor() {
        assert_eq!(to_anchor("Getting Started"), "#getting-started");
        assert_eq!(to_anchor("Install (Linux)"), "#install-linux");
        assert_eq!(to_anchor("API"), "#api");
    }

    #[test]
    fn test_strip_apostrophes() {
        assert_eq!(to_anchor("Author's Notes"), "#authors-notes");
        assert_eq!(to_anchor("Author\u{2019}s Notes"), "#authors-notes");
    }

    #[test]
    fn test_other_punctuation_is_kept() {
        assert_eq!(to_anchor("What? Why!"), "#what?-why!");
        assert_eq!(to_anchor("v1.2 [beta]"), "#v1.2-[beta]");
        assert_eq!(to_anchor("a_b-c"), "#a_b-c");
    }

    #[test]
    fn test_every_space_is_replaced() {
        assert_eq!(to_anchor("  Two  spaces "), "#--two--spaces-");
        assert_eq!(to_anchor("tab\there"), "#tab\there");
    }

    #[test]
    fn test_unicode_lowercase() {
        assert_eq!(to_anchor("ÜBER Straße"), "#über-straße");
    }

    #[test]
    fn test_deterministic() {
        let text = "Install (Linux) Author\u{2019}s";
        assert_eq!(to_anchor(text), to_anchor(text));
    }
}
