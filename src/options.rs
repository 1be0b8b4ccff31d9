//! Configuration options for extraction.
//!
//! The upstream contract leaves the sample bound, the keyword separator and
//! the charset sniffing window unspecified; they are fixed, documented
//! defaults here and overridable per call.

/// Configuration options for HTML extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use htmltotext::Options;
///
/// let options = Options {
///     max_sample_len: 2048,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Maximum length of the body-text sample, in bytes of UTF-8.
    ///
    /// Text accumulation stops once the sample reaches this length; the
    /// final sample is cut back to a character boundary. Scanning still
    /// continues afterwards so a late robots directive is honoured.
    ///
    /// Default: `512`
    pub max_sample_len: usize,

    /// Separator inserted between the `content` values of successive
    /// `<meta name="keywords">` elements.
    ///
    /// Default: `" "` (a single space)
    pub keyword_separator: String,

    /// Number of leading bytes inspected for a `<meta>` charset declaration
    /// when the input is bytes and no encoding label was supplied.
    ///
    /// Default: `1024`
    pub charset_scan_limit: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_sample_len: 512,
            keyword_separator: " ".to_string(),
            charset_scan_limit: 1024,
        }
    }
}
