//! Parse driver.
//!
//! Runs one tokenizer pass, feeding the same event sequence to the metadata
//! extractor and the text sampler, then finalizes the accumulated buffers
//! into a [`ParsedPage`].

use crate::metadata::MetadataExtractor;
use crate::options::Options;
use crate::result::ParsedPage;
use crate::sampler::{truncate_to_boundary, TextSampler};
use crate::tokenizer::Tokenizer;

pub(crate) fn parse(html: &str, badly_encoded: bool, options: &Options) -> ParsedPage {
    let mut metadata = MetadataExtractor::new(&options.keyword_separator);
    let mut sampler = TextSampler::new(options.max_sample_len);

    for event in Tokenizer::new(html) {
        metadata.handle(&event);
        sampler.handle(&event);
        if !metadata.indexing_allowed {
            // the page will never be indexed, stop scanning; fields
            // captured so far are kept
            break;
        }
    }

    let title = normalize_whitespace(&metadata.title);
    // a meta description, when present, is a better sample than body text
    let sample = match metadata.description {
        Some(ref description) => {
            let mut sample = normalize_whitespace(description);
            truncate_to_boundary(&mut sample, options.max_sample_len);
            sample
        }
        None => sampler.finish(),
    };

    ParsedPage {
        indexing_allowed: metadata.indexing_allowed,
        badly_encoded,
        title,
        sample,
        keywords: metadata.keywords,
    }
}

/// Collapse whitespace runs to single spaces and trim both ends.
fn normalize_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}
