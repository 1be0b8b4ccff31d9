//! # htmltotext
//!
//! Fault-tolerant extraction of indexable text and metadata from HTML,
//! built for search-indexing pipelines.
//!
//! Given a document as raw bytes or an already-decoded string, the engine
//! recovers a title, a bounded sample of visible body text, aggregated
//! keyword metadata, a robots-derived indexing flag, and a flag indicating
//! whether encoding recovery was needed. Real-world malformation — unclosed
//! tags, missing quotes, unknown entities, mislabelled encodings — is
//! absorbed rather than reported: parsing never fails, and anomalies
//! surface only as flags on the result.
//!
//! ## Quick Start
//!
//! ```rust
//! use htmltotext::extract;
//!
//! let page = extract(
//!     r#"<html><head><title>Hi</title>
//!     <meta name="keywords" content="a,b"></head>
//!     <body>Hello &amp; world</body></html>"#,
//! );
//! assert_eq!(page.title, "Hi");
//! assert_eq!(page.sample, "Hello & world");
//! assert_eq!(page.keywords, "a,b");
//! assert!(page.indexing_allowed);
//! assert!(!page.badly_encoded);
//! ```
//!
//! ## Byte input and encodings
//!
//! The byte entry points resolve the character encoding from `<meta>`
//! declarations, defaulting to Latin-1 (the historic HTML default, decoded
//! as windows-1252 per WHATWG):
//!
//! ```rust
//! use htmltotext::extract_bytes;
//!
//! // Latin-1 bytes with no charset declaration
//! let page = extract_bytes(b"<title>foo\xa3</title>");
//! assert_eq!(page.title, "foo\u{a3}");
//! assert!(!page.badly_encoded);
//! ```
//!
//! Each call runs a single synchronous pass over one immutable input with
//! fresh state; nothing is shared between parses, so concurrent use from
//! independent call sites needs no coordination.

mod error;
mod extract;
mod metadata;
mod options;
mod result;
mod sampler;

/// Character encoding resolution and decoding.
pub mod encoding;

/// Character-reference (entity) decoding.
pub mod entities;

/// Single-pass, fault-tolerant HTML tokenizer.
pub mod tokenizer;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::Options;
pub use result::ParsedPage;

/// Extracts text and metadata from an HTML string using default options.
///
/// The input is already decoded, so no charset resolution is performed and
/// `badly_encoded` is always false on this path.
///
/// # Example
///
/// ```rust
/// use htmltotext::extract;
///
/// let page = extract("<p>Open paragraph<div>nested");
/// assert_eq!(page.sample, "Open paragraph nested");
/// ```
#[must_use]
pub fn extract(html: &str) -> ParsedPage {
    extract_with_options(html, &Options::default())
}

/// Extracts text and metadata from an HTML string with custom options.
#[must_use]
pub fn extract_with_options(html: &str, options: &Options) -> ParsedPage {
    extract::parse(html, false, options)
}

/// Extracts text and metadata from HTML bytes using default options.
///
/// The encoding is resolved from `<meta>` declarations within a bounded
/// prefix of the input, falling back to Latin-1 (windows-1252), which can
/// decode any byte sequence. `badly_encoded` is set iff some byte sequence
/// was invalid under the resolved encoding and was replaced with U+FFFD.
///
/// # Example
///
/// ```rust
/// use htmltotext::extract_bytes;
///
/// // declared UTF-8 but the pound sign is a raw Latin-1 byte
/// let page = extract_bytes(b"<meta charset=\"utf-8\"><title>foo\xa3</title>");
/// assert!(page.badly_encoded);
/// assert!(page.title.starts_with("foo"));
/// ```
#[must_use]
pub fn extract_bytes(html: &[u8]) -> ParsedPage {
    extract_bytes_with_options(html, &Options::default())
}

/// Extracts text and metadata from HTML bytes with custom options.
#[must_use]
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> ParsedPage {
    let (text, had_errors) = encoding::decode(html, options.charset_scan_limit);
    extract::parse(&text, had_errors, options)
}

/// Extracts text and metadata from HTML bytes under an explicitly named
/// encoding, skipping `<meta>` charset sniffing.
///
/// Useful when the transport layer already knows the charset (e.g. from an
/// HTTP `Content-Type` header). An unrecognized label is the one hard error
/// in this crate; it is reported before any parsing begins.
///
/// # Example
///
/// ```rust
/// use htmltotext::{extract_bytes_with_encoding, Options};
///
/// let page = extract_bytes_with_encoding(
///     b"<title>foo\xa3</title>",
///     "ISO-8859-1",
///     &Options::default(),
/// )?;
/// assert_eq!(page.title, "foo\u{a3}");
/// # Ok::<(), htmltotext::Error>(())
/// ```
pub fn extract_bytes_with_encoding(
    html: &[u8],
    label: &str,
    options: &Options,
) -> Result<ParsedPage> {
    let (text, had_errors) = encoding::decode_with_label(html, label)?;
    Ok(extract::parse(&text, had_errors, options))
}
