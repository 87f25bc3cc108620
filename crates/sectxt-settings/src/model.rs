use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const SCHEMA_CONFIG_V1: &str = "sectxt.config.v1";

/// `sectxt.toml` schema v1.
///
/// This is a *user-facing* config model: every key is optional, unknown keys are ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SectxtConfigV1 {
    /// Optional schema string for tooling (`sectxt.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// `default`, `strict` or `quiet`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// When to fail the check: `error` (default) or `recommendation`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<String>,

    /// Emit `unknown_field` notifications for non-standard fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify_unknown_fields: Option<bool>,

    /// Where a local file is expected to be published; checked against `Canonical`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub canonical_urls: Vec<String>,
}
