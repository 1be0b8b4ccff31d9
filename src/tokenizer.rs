//! Single-pass, fault-tolerant HTML tokenizer.
//!
//! [`Tokenizer`] scans a decoded character stream once and lazily produces
//! [`MarkupEvent`]s through its `Iterator` impl. There is no fatal error
//! state for markup shape: unclosed tags, missing quotes, unterminated
//! comments and stray `<` characters are all recovered from, so the event
//! stream is total over arbitrary input.
//!
//! Each parse consumes a fresh tokenizer; the stream is finite and not
//! restartable.

use crate::entities::decode_entities;
use std::borrow::Cow;

/// A single attribute on a start tag.
///
/// The name is lowercased; the value has character references decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// One markup event produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkupEvent<'a> {
    /// An opening tag. The name is lowercased and attributes keep document
    /// order. `<tag/>` additionally yields a synthetic `EndTag`.
    StartTag {
        name: String,
        attrs: Vec<Attribute>,
    },
    /// A closing tag, lowercased.
    EndTag { name: String },
    /// A run of character data. Entity references are decoded except in
    /// script/style raw text and CDATA sections, which are literal.
    Text(Cow<'a, str>),
    /// The body of a `<!-- ... -->` comment, emitted distinctly so
    /// consumers can ignore it.
    Comment(&'a str),
}

/// Returns the value of the named attribute, if present.
#[must_use]
pub fn attr<'e>(attrs: &'e [Attribute], name: &str) -> Option<&'e str> {
    attrs
        .iter()
        .find(|a| a.name == name)
        .map(|a| a.value.as_str())
}

/// Single-pass scanner over a decoded HTML character stream.
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    /// When set, input is consumed as opaque raw text until the literal
    /// matching end tag (`script`/`style` content).
    raw_text: Option<&'static str>,
    /// Synthetic event queued by a self-closing tag.
    pending: Option<MarkupEvent<'a>>,
}

impl<'a> Tokenizer<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            raw_text: None,
            pending: None,
        }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Advance past the next occurrence of `byte`, or to end of input.
    fn skip_past(&mut self, byte: u8) {
        match self.rest().as_bytes().iter().position(|&b| b == byte) {
            Some(i) => self.pos += i + 1,
            None => self.pos = self.input.len(),
        }
    }

    /// Produce the next event while in raw-text mode.
    fn next_raw_text(&mut self, name: &'static str) -> MarkupEvent<'a> {
        let rest = self.rest();
        match find_raw_end(rest, name) {
            Some(0) => {
                self.raw_text = None;
                self.skip_past(b'>');
                MarkupEvent::EndTag {
                    name: name.to_string(),
                }
            }
            Some(idx) => {
                self.pos += idx;
                MarkupEvent::Text(Cow::Borrowed(&rest[..idx]))
            }
            None => {
                // no end tag anywhere: the element is implicitly closed at
                // end of input and the remainder is its raw content
                self.raw_text = None;
                self.pos = self.input.len();
                MarkupEvent::Text(Cow::Borrowed(rest))
            }
        }
    }

    /// Handle `<!...` constructs. Returns `None` for declarations that
    /// carry nothing of interest (doctype and friends).
    fn markup_declaration(&mut self) -> Option<MarkupEvent<'a>> {
        let rest = self.rest();
        if let Some(body) = rest.strip_prefix("<!--") {
            return Some(match body.find("-->") {
                Some(end) => {
                    self.pos += 4 + end + 3;
                    MarkupEvent::Comment(&body[..end])
                }
                None => {
                    // unterminated comment swallows the rest of the input
                    self.pos = self.input.len();
                    MarkupEvent::Comment(body)
                }
            });
        }
        if let Some(body) = rest.strip_prefix("<![CDATA[") {
            let (content, consumed) = match body.find("]]>") {
                Some(end) => (&body[..end], 9 + end + 3),
                None => (body, rest.len()),
            };
            self.pos += consumed;
            return Some(MarkupEvent::Text(Cow::Borrowed(content)));
        }
        self.skip_past(b'>');
        None
    }

    fn end_tag(&mut self) -> Option<MarkupEvent<'a>> {
        let rest = self.rest();
        let bytes = rest.as_bytes();
        let mut i = 2;
        while i < bytes.len() && is_name_byte(bytes[i]) {
            i += 1;
        }
        let name = rest[2..i].to_ascii_lowercase();
        self.pos += i;
        self.skip_past(b'>');
        if name.is_empty() {
            None
        } else {
            Some(MarkupEvent::EndTag { name })
        }
    }

    fn start_tag(&mut self) -> MarkupEvent<'a> {
        let rest = self.rest();
        let bytes = rest.as_bytes();
        let mut i = 1;
        while i < bytes.len() && is_name_byte(bytes[i]) {
            i += 1;
        }
        let name = rest[1..i].to_ascii_lowercase();

        let mut attrs = Vec::new();
        let mut self_closing = false;
        loop {
            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            match bytes.get(i) {
                // tag still open at end of input: close it implicitly
                None => break,
                Some(b'>') => {
                    i += 1;
                    break;
                }
                Some(b'/') if bytes.get(i + 1) == Some(&b'>') => {
                    self_closing = true;
                    i += 2;
                    break;
                }
                Some(b'/') => i += 1,
                Some(_) => i = parse_attribute(rest, i, &mut attrs),
            }
        }
        self.pos += i;

        if self_closing {
            self.pending = Some(MarkupEvent::EndTag { name: name.clone() });
        } else if name == "script" {
            self.raw_text = Some("script");
        } else if name == "style" {
            self.raw_text = Some("style");
        }
        MarkupEvent::StartTag { name, attrs }
    }

    fn text_run(&mut self) -> MarkupEvent<'a> {
        let rest = self.rest();
        let end = text_end(rest);
        self.pos += end;
        MarkupEvent::Text(decode_entities(&rest[..end]))
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = MarkupEvent<'a>;

    fn next(&mut self) -> Option<MarkupEvent<'a>> {
        if let Some(event) = self.pending.take() {
            return Some(event);
        }
        loop {
            if self.pos >= self.input.len() {
                return None;
            }
            if let Some(name) = self.raw_text {
                return Some(self.next_raw_text(name));
            }
            let bytes = self.rest().as_bytes();
            if bytes[0] == b'<' {
                match bytes.get(1) {
                    Some(b'!') => {
                        if let Some(event) = self.markup_declaration() {
                            return Some(event);
                        }
                        continue;
                    }
                    Some(b'?') => {
                        self.skip_past(b'>');
                        continue;
                    }
                    Some(b'/') => {
                        if let Some(event) = self.end_tag() {
                            return Some(event);
                        }
                        continue;
                    }
                    Some(b) if b.is_ascii_alphabetic() => return Some(self.start_tag()),
                    // a '<' not opening a recognizable construct is
                    // character data
                    _ => {}
                }
            }
            return Some(self.text_run());
        }
    }
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b':')
}

fn is_tag_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || matches!(b, b'/' | b'!' | b'?')
}

/// Length of the text run at the start of `rest`: up to the next `<` that
/// opens a tag, comment or declaration.
fn text_end(rest: &str) -> usize {
    let bytes = rest.as_bytes();
    let mut i = usize::from(bytes[0] == b'<');
    while let Some(offset) = rest[i..].find('<') {
        let at = i + offset;
        if at + 1 < bytes.len() && is_tag_start(bytes[at + 1]) {
            return at;
        }
        i = at + 1;
    }
    rest.len()
}

/// Find the byte offset of the literal `</name` end tag (case-insensitive,
/// followed by `>`, `/`, whitespace or end of input) in raw-text content.
fn find_raw_end(rest: &str, name: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let n = name.len();
    let mut at = 0;
    while let Some(offset) = rest[at..].find("</") {
        let start = at + offset;
        let after = start + 2;
        if bytes.len() >= after + n && bytes[after..after + n].eq_ignore_ascii_case(name.as_bytes())
        {
            match bytes.get(after + n) {
                None | Some(b'>' | b'/') => return Some(start),
                Some(b) if b.is_ascii_whitespace() => return Some(start),
                _ => {}
            }
        }
        at = start + 2;
    }
    None
}

/// Parse one attribute starting at byte `i` of `rest`; returns the new
/// scan position. Quoted, unquoted and valueless attributes are accepted;
/// a missing closing quote takes the remainder up to the next whitespace
/// or `>` as the value.
fn parse_attribute(rest: &str, mut i: usize, attrs: &mut Vec<Attribute>) -> usize {
    let bytes = rest.as_bytes();
    let start = i;
    while i < bytes.len()
        && !bytes[i].is_ascii_whitespace()
        && !matches!(bytes[i], b'=' | b'>' | b'/')
    {
        i += 1;
    }
    if i == start {
        // stray punctuation where a name should be, skip one character
        return next_char_boundary(rest, i);
    }
    let name = rest[start..i].to_ascii_lowercase();

    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    let mut value = String::new();
    if bytes.get(i) == Some(&b'=') {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        match bytes.get(i).copied() {
            Some(q) if q == b'"' || q == b'\'' => {
                let body = i + 1;
                if let Some(end) = rest[body..].find(q as char) {
                    value = decode_entities(&rest[body..body + end]).into_owned();
                    i = body + end + 1;
                } else {
                    let end = unquoted_end(bytes, body);
                    value = decode_entities(&rest[body..end]).into_owned();
                    i = end;
                }
            }
            Some(_) => {
                let end = unquoted_end(bytes, i);
                value = decode_entities(&rest[i..end]).into_owned();
                i = end;
            }
            None => {}
        }
    }
    attrs.push(Attribute { name, value });
    i
}

/// End of an unquoted attribute value: whitespace, `>`, or a `/>` close.
fn unquoted_end(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && !bytes[i].is_ascii_whitespace() && bytes[i] != b'>' {
        if bytes[i] == b'/' && bytes.get(i + 1) == Some(&b'>') {
            break;
        }
        i += 1;
    }
    i
}

fn next_char_boundary(rest: &str, i: usize) -> usize {
    rest[i..]
        .chars()
        .next()
        .map_or(rest.len(), |c| i + c.len_utf8())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events(html: &str) -> Vec<MarkupEvent<'_>> {
        Tokenizer::new(html).collect()
    }

    fn start(name: &str, attrs: &[(&str, &str)]) -> MarkupEvent<'static> {
        MarkupEvent::StartTag {
            name: name.to_string(),
            attrs: attrs
                .iter()
                .map(|(n, v)| Attribute {
                    name: (*n).to_string(),
                    value: (*v).to_string(),
                })
                .collect(),
        }
    }

    fn end(name: &str) -> MarkupEvent<'static> {
        MarkupEvent::EndTag {
            name: name.to_string(),
        }
    }

    fn text(t: &str) -> MarkupEvent<'_> {
        MarkupEvent::Text(Cow::Borrowed(t))
    }

    #[test]
    fn simple_element() {
        assert_eq!(
            events("<p>hi</p>"),
            vec![start("p", &[]), text("hi"), end("p")]
        );
    }

    #[test]
    fn names_are_lowercased() {
        assert_eq!(
            events("<DIV Class=X></DIV>"),
            vec![start("div", &[("class", "X")]), end("div")]
        );
    }

    #[test]
    fn attribute_quoting_styles() {
        assert_eq!(
            events(r#"<a href="x" rel='nofollow' id=main download>"#),
            vec![start(
                "a",
                &[
                    ("href", "x"),
                    ("rel", "nofollow"),
                    ("id", "main"),
                    ("download", ""),
                ]
            )]
        );
    }

    #[test]
    fn missing_closing_quote_recovers_at_whitespace() {
        assert_eq!(
            events(r#"<div class="test id=broken>"#),
            vec![start("div", &[("class", "test"), ("id", "broken")])]
        );
    }

    #[test]
    fn entities_decoded_in_attribute_values() {
        assert_eq!(
            events(r#"<meta content="a &amp; b">"#),
            vec![start("meta", &[("content", "a & b")])]
        );
    }

    #[test]
    fn self_closing_tag_emits_synthetic_end() {
        assert_eq!(
            events("<meta name=x/>rest"),
            vec![start("meta", &[("name", "x")]), end("meta"), text("rest")]
        );
    }

    #[test]
    fn unclosed_tag_at_end_of_input() {
        assert_eq!(
            events("<p>text<div"),
            vec![start("p", &[]), text("text"), start("div", &[])]
        );
    }

    #[test]
    fn text_entities_decoded() {
        assert_eq!(
            events("a &amp; b"),
            vec![MarkupEvent::Text(Cow::Owned("a & b".to_string()))]
        );
    }

    #[test]
    fn comments_are_distinct_events() {
        assert_eq!(
            events("a<!-- note -->b"),
            vec![text("a"), MarkupEvent::Comment(" note "), text("b")]
        );
    }

    #[test]
    fn unterminated_comment_takes_the_rest() {
        assert_eq!(
            events("a<!-- oops"),
            vec![text("a"), MarkupEvent::Comment(" oops")]
        );
    }

    #[test]
    fn doctype_and_processing_instructions_skipped() {
        assert_eq!(
            events("<!DOCTYPE html><?xml version=\"1.0\"?>hi"),
            vec![text("hi")]
        );
    }

    #[test]
    fn cdata_is_literal_text() {
        assert_eq!(events("<![CDATA[a < b & c]]>"), vec![text("a < b & c")]);
    }

    #[test]
    fn script_content_is_raw_text() {
        assert_eq!(
            events(r#"<script>if (a < b) { x = "<div>"; }</script>after"#),
            vec![
                start("script", &[]),
                text(r#"if (a < b) { x = "<div>"; }"#),
                end("script"),
                text("after"),
            ]
        );
    }

    #[test]
    fn raw_text_end_tag_is_case_insensitive() {
        assert_eq!(
            events("<style>a{}</STYLE >x"),
            vec![start("style", &[]), text("a{}"), end("style"), text("x")]
        );
    }

    #[test]
    fn unterminated_script_takes_the_rest() {
        assert_eq!(
            events("<script>var x = 1;"),
            vec![start("script", &[]), text("var x = 1;")]
        );
    }

    #[test]
    fn stray_angle_bracket_is_text() {
        assert_eq!(events("1 < 2"), vec![text("1 < 2")]);
        assert_eq!(events("<"), vec![text("<")]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(events("").is_empty());
    }
}
