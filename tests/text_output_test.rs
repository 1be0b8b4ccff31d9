use htmltotext::{extract, extract_with_options, Options};

#[test]
fn script_and_style_text_never_sampled() {
    let html = r#"
        <html><head>
          <style>body { color: red; }</style>
          <script>var secret = "hidden";</script>
        </head>
        <body>Visible text</body></html>
    "#;
    let page = extract(html);
    assert_eq!(page.sample, "Visible text");
    assert!(!page.sample.contains("secret"));
    assert!(!page.sample.contains("color"));
}

#[test]
fn script_markup_soup_stays_opaque() {
    let html = r#"<script>if (a < b) document.write("<p>generated</p>");</script>real"#;
    assert_eq!(extract(html).sample, "real");
}

#[test]
fn sample_has_no_consecutive_whitespace_or_padding() {
    let html = "<body>  lots \n\n of \t\t gaps  </body>";
    let page = extract(html);
    assert_eq!(page.sample, "lots of gaps");
    assert!(!page.sample.contains("  "));
    assert!(!page.sample.starts_with(' '));
    assert!(!page.sample.ends_with(' '));
}

#[test]
fn element_boundaries_separate_tokens() {
    let html = "<p>Open paragraph<div>nested";
    assert_eq!(extract(html).sample, "Open paragraph nested");
}

#[test]
fn entities_decoded_in_sample() {
    let html = "<body>fish &amp; chips &pound;5 &#8212; cheap</body>";
    assert_eq!(extract(html).sample, "fish & chips \u{a3}5 \u{2014} cheap");
}

#[test]
fn unknown_entities_pass_through() {
    let html = "<body>&wibble; stays</body>";
    assert_eq!(extract(html).sample, "&wibble; stays");
}

#[test]
fn sample_respects_configured_bound() {
    let body: String = "word ".repeat(200);
    let html = format!("<body>{body}</body>");
    let options = Options {
        max_sample_len: 64,
        ..Options::default()
    };
    let page = extract_with_options(&html, &options);
    assert!(page.sample.len() <= 64, "sample too long: {}", page.sample.len());
    assert!(page.sample.starts_with("word word"));
}

#[test]
fn robots_still_honoured_after_sample_is_full() {
    let body: String = "filler ".repeat(100);
    let html = format!(
        r#"<body>{body}</body><meta name="robots" content="noindex">"#
    );
    let options = Options {
        max_sample_len: 32,
        ..Options::default()
    };
    let page = extract_with_options(&html, &options);
    assert!(!page.indexing_allowed);
    assert!(page.sample.len() <= 32);
}

#[test]
fn text_before_any_tag_is_sampled() {
    assert_eq!(extract("bare text<p>more").sample, "bare text more");
}
