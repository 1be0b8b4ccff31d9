use htmltotext::{extract_bytes, extract_bytes_with_encoding, Error, Options};

#[test]
fn default_charset_is_latin1() {
    // no declaration: the historic HTML default applies
    let page = extract_bytes(b"<title>foo\xa3</title>");
    assert_eq!(page.title, "foo\u{a3}");
    assert!(!page.badly_encoded);
}

#[test]
fn meta_content_type_sets_the_charset() {
    let html = b"<meta http-equiv=\"content-type\" content=\"charset=utf8\"/><title>foo\xc2\xa3</title>";
    let page = extract_bytes(html);
    assert_eq!(page.title, "foo\u{a3}");
    assert!(!page.badly_encoded);
}

#[test]
fn meta_charset_tag_sets_the_charset() {
    let html = b"<meta charset=\"windows-1252\"><body>\x93Hello\x94</body>";
    let page = extract_bytes(html);
    assert_eq!(page.sample, "\u{201c}Hello\u{201d}");
}

#[test]
fn wrong_declared_charset_flags_bad_encoding() {
    // declared UTF-8 but the pound sign is a raw Latin-1 byte
    let html = b"<meta http-equiv=\"content-type\" content=\"charset=utf8\"/><title>foo\xa3</title>";
    let page = extract_bytes(html);
    assert!(page.badly_encoded);
    // best-effort text is still produced, never an error
    assert!(page.title.starts_with("foo"));
    assert!(!page.title.is_empty());
}

#[test]
fn valid_bytes_never_flag_bad_encoding() {
    let html = "<meta charset=\"utf-8\"><title>caf\u{e9}</title><body>ok</body>".as_bytes();
    let page = extract_bytes(html);
    assert!(!page.badly_encoded);
    assert_eq!(page.title, "caf\u{e9}");
}

#[test]
fn explicit_encoding_label_skips_sniffing() {
    // the meta claims UTF-8, but the caller knows better
    let html = b"<meta charset=\"utf-8\"><title>foo\xa3</title>";
    let page = match extract_bytes_with_encoding(html, "ISO-8859-1", &Options::default()) {
        Ok(page) => page,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };
    assert_eq!(page.title, "foo\u{a3}");
    assert!(!page.badly_encoded);
}

#[test]
fn unknown_encoding_label_is_a_hard_error() {
    let result = extract_bytes_with_encoding(b"<title>x</title>", "ebcdic-37", &Options::default());
    assert!(matches!(result, Err(Error::UnknownEncoding(_))));
}

#[test]
fn badly_encoded_document_still_yields_all_fields() {
    let html = b"<meta charset=\"utf-8\">\
        <title>t\xff</title>\
        <meta name=\"keywords\" content=\"k\">\
        <body>b\xff</body>";
    let page = extract_bytes(html);
    assert!(page.badly_encoded);
    assert!(page.title.starts_with('t'));
    assert_eq!(page.keywords, "k");
    assert!(page.sample.starts_with('b'));
}

#[test]
fn shift_jis_label_decodes_multibyte_text() {
    // "nihongo" in Shift_JIS
    let html = b"<title>\x93\xfa\x96\x7b\x8c\xea</title>";
    let page = match extract_bytes_with_encoding(html, "shift_jis", &Options::default()) {
        Ok(page) => page,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };
    assert_eq!(page.title, "\u{65e5}\u{672c}\u{8a9e}");
    assert!(!page.badly_encoded);
}
