//! Character encoding resolution and decoding.
//!
//! Resolves a document's encoding from `<meta>` declarations found within a
//! bounded prefix of the input and decodes the byte stream to UTF-8,
//! reporting whether any byte sequence required lossy recovery. The
//! fallback is windows-1252 — the WHATWG superset of Latin-1, the historic
//! default for HTML — which can decode any byte sequence without failure.
//!
//! This is a lightweight scan, not a parse: it tolerates arbitrarily
//! malformed markup and never fails.

use crate::error::{Error, Result};
use encoding_rs::{Encoding, WINDOWS_1252};
use regex::Regex;
use std::sync::LazyLock;

// Module-level regex patterns for charset detection, compiled once at first
// use and reused for the program lifetime.

/// Match `<meta charset="...">` (also catches `charset=` tokens inside a
/// `content` attribute).
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>]+)"#).expect("valid regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">`.
#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#).expect("valid regex")
});

/// Detect the character encoding declared in HTML bytes.
///
/// Looks for charset declarations in the following order:
/// 1. `<meta charset="...">`
/// 2. `<meta http-equiv="Content-Type" content="...; charset=...">`
/// 3. Defaults to windows-1252 if no usable declaration is found.
///
/// Only the first `scan_limit` bytes are inspected; a charset declaration
/// belongs in `<head>`, so scanning the whole body buys nothing.
/// Declarations naming an unknown encoding are ignored.
#[must_use]
pub fn detect_encoding(html: &[u8], scan_limit: usize) -> &'static Encoding {
    let head = &html[..html.len().min(scan_limit)];

    // Lossy conversion is fine for locating ASCII meta markup.
    let head_str = String::from_utf8_lossy(head);

    if let Some(charset) = extract_charset(&head_str) {
        if let Some(encoding) = Encoding::for_label(charset.as_bytes()) {
            return encoding;
        }
    }

    if let Some(charset) = extract_content_type_charset(&head_str) {
        if let Some(encoding) = Encoding::for_label(charset.as_bytes()) {
            return encoding;
        }
    }

    // encoding_rs maps Latin-1 labels to windows-1252 per WHATWG
    // (functionally equivalent for web content, total over all bytes).
    WINDOWS_1252
}

/// Extract charset from a `<meta charset="...">` tag.
fn extract_charset(html: &str) -> Option<String> {
    CHARSET_META_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Extract charset from `<meta http-equiv="Content-Type" content="...; charset=...">`.
fn extract_content_type_charset(html: &str) -> Option<String> {
    CONTENT_TYPE_CHARSET_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Decode HTML bytes to a UTF-8 string under the detected encoding.
///
/// Returns the decoded text plus a flag that is true iff some byte sequence
/// was invalid under that encoding and was replaced with U+FFFD. Never
/// fails: the windows-1252 fallback accepts every byte.
#[must_use]
pub fn decode(html: &[u8], scan_limit: usize) -> (String, bool) {
    let encoding = detect_encoding(html, scan_limit);
    let (text, _, had_errors) = encoding.decode(html);
    (text.into_owned(), had_errors)
}

/// Decode HTML bytes under an explicitly named encoding, skipping meta
/// sniffing entirely.
///
/// The label is resolved per the WHATWG registry (`"latin1"`,
/// `"ISO-8859-1"`, `"utf-8"`, ...); an unrecognized label is the caller's
/// mistake and yields [`Error::UnknownEncoding`].
pub fn decode_with_label(html: &[u8], label: &str) -> Result<(String, bool)> {
    let encoding = Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| Error::UnknownEncoding(label.to_string()))?;
    let (text, _, had_errors) = encoding.decode(html);
    Ok((text.into_owned(), had_errors))
}
