use sectxt_domain::policy::{EffectiveConfig, FailOn};

/// Preset profiles are opinionated defaults. Unknown names fall back to `default`.
pub fn preset(profile: &str) -> EffectiveConfig {
    match profile {
        "strict" => strict_profile(),
        "quiet" => quiet_profile(),
        _ => default_profile(),
    }
}

fn default_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "default".to_string(),
        fail_on: FailOn::Error,
        notify_unknown_fields: true,
        canonical_urls: Vec::new(),
    }
}

// Recommendations are treated as failures.
fn strict_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "strict".to_string(),
        fail_on: FailOn::Recommendation,
        ..default_profile()
    }
}

fn quiet_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "quiet".to_string(),
        notify_unknown_fields: false,
        ..default_profile()
    }
}
