#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailOn {
    Error,
    Recommendation,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub profile: String,
    pub fail_on: FailOn,
    pub notify_unknown_fields: bool,
    /// Fetch-location hint used for `Canonical` matching when no fetch URLs are known.
    pub canonical_urls: Vec<String>,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            profile: "default".to_string(),
            fail_on: FailOn::Error,
            notify_unknown_fields: true,
            canonical_urls: Vec::new(),
        }
    }
}
