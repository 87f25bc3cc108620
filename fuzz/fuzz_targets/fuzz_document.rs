//! Structured fuzz target: field-shaped lines plus fetch URLs.
//!
//! Raw bytes rarely reach the field and envelope logic; this target builds documents out of
//! plausible `Name: value` lines and PGP markers instead.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_document
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sectxt_domain::{ParseOptions, Parser};

const NAMES: &[&str] = &[
    "Contact",
    "Expires",
    "Encryption",
    "Canonical",
    "Preferred-Languages",
    "Policy",
    "Acknowledgments",
    "Hiring",
    "CSAF",
    "X-Custom",
];

const MARKERS: &[&str] = &[
    "-----BEGIN PGP SIGNED MESSAGE-----",
    "Hash: SHA256",
    "-----BEGIN PGP SIGNATURE-----",
    "-----END PGP SIGNATURE-----",
    "- -----BEGIN PGP SIGNATURE-----",
    "",
    "# comment",
];

#[derive(Debug, Arbitrary)]
enum Line {
    Field { name: u8, value: String },
    Marker(u8),
    Raw(String),
}

#[derive(Debug, Arbitrary)]
struct Input {
    lines: Vec<Line>,
    crlf: bool,
    urls: Vec<String>,
    notify_unknown_fields: bool,
}

fuzz_target!(|input: Input| {
    let eol = if input.crlf { "\r\n" } else { "\n" };
    let mut text = String::new();
    for line in &input.lines {
        match line {
            Line::Field { name, value } => {
                text.push_str(NAMES[usize::from(*name) % NAMES.len()]);
                text.push_str(": ");
                text.push_str(value);
            }
            Line::Marker(idx) => text.push_str(MARKERS[usize::from(*idx) % MARKERS.len()]),
            Line::Raw(raw) => text.push_str(raw),
        }
        text.push_str(eol);
    }

    let options = ParseOptions::default()
        .with_urls(input.urls)
        .notify_unknown_fields(input.notify_unknown_fields);
    let parser = Parser::new(&text, options);
    assert_eq!(parser.lines().len(), text.split('\n').count());
});
