//! Config parsing and profile/preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{SCHEMA_CONFIG_V1, SectxtConfigV1};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `sectxt.toml` (or equivalent) into a typed model. Blank input means all defaults.
pub fn parse_config_toml(input: &str) -> anyhow::Result<SectxtConfigV1> {
    if input.trim().is_empty() {
        return Ok(SectxtConfigV1::default());
    }
    let cfg: SectxtConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by the engine (preset + file + overrides).
pub fn resolve_config(cfg: SectxtConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
