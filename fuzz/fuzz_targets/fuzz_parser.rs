//! Fuzz target for the security.txt parser on raw bytes.
//!
//! Goal: decoding and validation **never panic** on any input, and every input line
//! gets exactly one classification.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use sectxt_domain::{Diagnostics, ParseOptions, Parser};

fuzz_target!(|data: &[u8]| {
    let mut retrieval = Diagnostics::new();
    let text = sectxt_fetch::decode_body(data, &mut retrieval);

    let parser = Parser::new(&text, ParseOptions::default());
    assert_eq!(parser.lines().len(), text.split('\n').count());
});
