//! Result type for extraction output.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The outcome of parsing one HTML document.
///
/// Created once per extraction call, immutable afterwards, and owned
/// entirely by the caller. All string fields are valid UTF-8 regardless of
/// how broken the input was; anomalies are reported through the two boolean
/// flags instead of errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedPage {
    /// False iff a robots `noindex` or `none` directive was found.
    ///
    /// Starts true and latches false permanently the moment such a
    /// directive is observed; it never reverts.
    pub indexing_allowed: bool,

    /// True iff some byte sequence failed strict decoding under the
    /// resolved encoding and had to be recovered lossily (as U+FFFD).
    ///
    /// Always false for string input, which carries no byte-decode step.
    pub badly_encoded: bool,

    /// Text of the first `<title>` element, whitespace-normalized.
    pub title: String,

    /// Whitespace-normalized visible body text, length-bounded.
    ///
    /// Never contains text nested inside `<script>`, `<style>` or
    /// `<title>`. A `<meta name="description">` value, when present, takes
    /// precedence over sampled body text.
    pub sample: String,

    /// `content` values of every `<meta name="keywords">` element, joined
    /// in document order by [`Options::keyword_separator`](crate::Options).
    pub keywords: String,
}

impl Default for ParsedPage {
    fn default() -> Self {
        Self {
            indexing_allowed: true,
            badly_encoded: false,
            title: String::new(),
            sample: String::new(),
            keywords: String::new(),
        }
    }
}

impl fmt::Display for ParsedPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ParsedPage(title={:?}, sample={:?}, keywords={:?})",
            self.title, self.sample, self.keywords
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_allows_indexing() {
        let page = ParsedPage::default();
        assert!(page.indexing_allowed);
        assert!(!page.badly_encoded);
        assert!(page.title.is_empty());
    }

    #[test]
    fn display_rendering() {
        let page = ParsedPage {
            title: "Hi".to_string(),
            sample: "Hello & world".to_string(),
            ..ParsedPage::default()
        };
        assert_eq!(
            page.to_string(),
            r#"ParsedPage(title="Hi", sample="Hello & world", keywords="")"#
        );
    }
}
