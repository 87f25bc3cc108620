//! Fuzz target for `sectxt.toml` parsing and profile resolution.
//!
//! Goal: config handling returns errors for bad input and **never panics**.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data)
        && let Ok(cfg) = sectxt_settings::parse_config_toml(text)
    {
        let _ = sectxt_settings::resolve_config(cfg, sectxt_settings::Overrides::default());
    }
});
