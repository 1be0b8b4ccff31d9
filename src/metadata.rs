//! Metadata extraction from the markup event stream.
//!
//! Captures the first `<title>`, accumulates `<meta name="keywords">`
//! content, records the first `<meta name="description">` and latches the
//! indexing flag on robots directives. All other tags are ignored here (the
//! text sampler still observes them).

use crate::tokenizer::{attr, Attribute, MarkupEvent};

/// Per-parse metadata accumulator.
///
/// `indexing_allowed` is one-way: once a robots `noindex`/`none` directive
/// flips it to false it stays false, and the driver stops feeding events.
pub(crate) struct MetadataExtractor {
    pub(crate) title: String,
    pub(crate) keywords: String,
    pub(crate) description: Option<String>,
    pub(crate) indexing_allowed: bool,
    keyword_separator: String,
    title_captured: bool,
    in_title: bool,
}

impl MetadataExtractor {
    pub(crate) fn new(keyword_separator: &str) -> Self {
        Self {
            title: String::new(),
            keywords: String::new(),
            description: None,
            indexing_allowed: true,
            keyword_separator: keyword_separator.to_string(),
            title_captured: false,
            in_title: false,
        }
    }

    pub(crate) fn handle(&mut self, event: &MarkupEvent<'_>) {
        match event {
            MarkupEvent::StartTag { name, attrs } => match name.as_str() {
                "title" if !self.title_captured => self.in_title = true,
                "meta" => self.meta_tag(attrs),
                _ => {}
            },
            MarkupEvent::EndTag { name } if name == "title" && self.in_title => {
                self.in_title = false;
                self.title_captured = true;
            }
            // a partial title at end of input is accepted as-is
            MarkupEvent::Text(text) if self.in_title => {
                if !self.title.is_empty() {
                    self.title.push(' ');
                }
                self.title.push_str(text);
            }
            _ => {}
        }
    }

    fn meta_tag(&mut self, attrs: &[Attribute]) {
        let Some(name) = attr(attrs, "name") else {
            return;
        };
        // `value` is the legacy spelling of `content`
        let Some(content) = attr(attrs, "content").or_else(|| attr(attrs, "value")) else {
            return;
        };

        if name.eq_ignore_ascii_case("keywords") {
            if !self.keywords.is_empty() {
                self.keywords.push_str(&self.keyword_separator);
            }
            self.keywords.push_str(content);
        } else if name.eq_ignore_ascii_case("description") {
            if self.description.is_none() && !content.trim().is_empty() {
                self.description = Some(content.to_string());
            }
        } else if name.eq_ignore_ascii_case("robots") && forbids_indexing(content) {
            self.indexing_allowed = false;
        }
    }
}

/// True if a robots directive list contains a `noindex` or `none` token.
fn forbids_indexing(content: &str) -> bool {
    content
        .split([',', ' ', '\t', '\r', '\n'])
        .any(|token| token.eq_ignore_ascii_case("noindex") || token.eq_ignore_ascii_case("none"))
}
