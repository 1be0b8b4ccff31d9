//! Visible-text sampling from the markup event stream.
//!
//! Accumulates a length-bounded sample of the document's visible body text.
//! Text inside `<script>`, `<style>` and `<title>` never contributes.
//! Region membership is tracked with depth counters rather than booleans so
//! malformed input that nests these elements cannot leak text out.

use crate::tokenizer::MarkupEvent;

pub(crate) struct TextSampler {
    sample: String,
    max_len: usize,
    full: bool,
    script_depth: usize,
    style_depth: usize,
    title_depth: usize,
}

impl TextSampler {
    pub(crate) fn new(max_len: usize) -> Self {
        Self {
            sample: String::new(),
            max_len,
            full: false,
            script_depth: 0,
            style_depth: 0,
            title_depth: 0,
        }
    }

    pub(crate) fn handle(&mut self, event: &MarkupEvent<'_>) {
        match event {
            MarkupEvent::StartTag { name, .. } => self.enter(name),
            MarkupEvent::EndTag { name } => self.leave(name),
            MarkupEvent::Text(text) if self.visible() => self.push_text(text),
            _ => {}
        }
    }

    fn visible(&self) -> bool {
        self.script_depth == 0 && self.style_depth == 0 && self.title_depth == 0
    }

    fn enter(&mut self, name: &str) {
        match name {
            "script" => self.script_depth += 1,
            "style" => self.style_depth += 1,
            "title" => self.title_depth += 1,
            _ => {}
        }
    }

    fn leave(&mut self, name: &str) {
        match name {
            "script" => self.script_depth = self.script_depth.saturating_sub(1),
            "style" => self.style_depth = self.style_depth.saturating_sub(1),
            "title" => self.title_depth = self.title_depth.saturating_sub(1),
            _ => {}
        }
    }

    /// Append one text run. Tokens are joined by single spaces, which both
    /// collapses whitespace runs and supplies the separator across element
    /// boundaries. Once the bound is reached no further text is taken
    /// (scanning continues elsewhere for robots directives).
    fn push_text(&mut self, text: &str) {
        if self.full {
            return;
        }
        for word in text.split_whitespace() {
            if !self.sample.is_empty() {
                self.sample.push(' ');
            }
            self.sample.push_str(word);
            if self.sample.len() >= self.max_len {
                self.full = true;
                return;
            }
        }
    }

    pub(crate) fn finish(mut self) -> String {
        truncate_to_boundary(&mut self.sample, self.max_len);
        self.sample
    }
}

/// Cut `s` back to at most `max` bytes on a character boundary, dropping
/// any space left dangling at the cut.
pub(crate) fn truncate_to_boundary(s: &mut String, max: usize) {
    if s.len() <= max {
        return;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    s.truncate(end);
    while s.ends_with(' ') {
        s.pop();
    }
}
