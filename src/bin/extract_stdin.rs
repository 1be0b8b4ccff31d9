//! Simple CLI that reads HTML bytes from stdin and prints the parsed page
//! as JSON on stdout. Used by pipeline wrappers that shell out per document.

use htmltotext::extract_bytes;
use std::io::{self, Read};

fn main() {
    let mut html = Vec::new();
    if io::stdin().read_to_end(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let page = extract_bytes(&html);
    println!("{}", serde_json::to_string(&page).unwrap_or_default());
}
