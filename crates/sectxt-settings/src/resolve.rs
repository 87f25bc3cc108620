use crate::model::{SCHEMA_CONFIG_V1, SectxtConfigV1};
use crate::presets;
use anyhow::Context;
use sectxt_domain::policy::{EffectiveConfig, FailOn};

/// Command-line overrides; they win over both the preset and the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub notify_unknown_fields: Option<bool>,
    pub canonical_urls: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(cfg: SectxtConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_CONFIG_V1
    {
        anyhow::bail!("unsupported config schema: {schema} (expected {SCHEMA_CONFIG_V1})");
    }

    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "default".to_string());

    let mut effective = presets::preset(&profile);

    if let Some(fail_on_s) = cfg.fail_on.as_deref() {
        effective.fail_on = parse_fail_on(fail_on_s).context("invalid fail_on in config")?;
    }

    if let Some(notify) = overrides.notify_unknown_fields.or(cfg.notify_unknown_fields) {
        effective.notify_unknown_fields = notify;
    }

    let urls = if overrides.canonical_urls.is_empty() {
        cfg.canonical_urls
    } else {
        overrides.canonical_urls
    };
    for url in &urls {
        if !url.starts_with("https://") && !url.starts_with("http://") {
            anyhow::bail!("canonical url must be an http(s) URL: {url}");
        }
    }
    effective.canonical_urls = urls;

    Ok(ResolvedConfig { effective })
}

fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "error" => Ok(FailOn::Error),
        "recommendation" | "warn" => Ok(FailOn::Recommendation),
        other => anyhow::bail!("unknown fail_on: {other} (expected error|recommendation)"),
    }
}
