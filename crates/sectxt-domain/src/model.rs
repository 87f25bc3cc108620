use sectxt_types::LineRecord;
use std::collections::BTreeMap;

pub const BEGIN_SIGNED_MESSAGE: &str = "-----BEGIN PGP SIGNED MESSAGE-----";
pub const BEGIN_SIGNATURE: &str = "-----BEGIN PGP SIGNATURE-----";
pub const END_SIGNATURE: &str = "-----END PGP SIGNATURE-----";

/// Cleartext-signature envelope flags. Each flag flips from `false` to `true` at most once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnvelopeState {
    pub signed: bool,
    pub reading_signature: bool,
    pub signature_finished: bool,
}

/// Field values keyed by lower-cased name, each list in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldValues(BTreeMap<String, Vec<String>>);

impl FieldValues {
    pub fn push(&mut self, name: &str, value: &str) {
        self.0
            .entry(name.to_string())
            .or_default()
            .push(value.to_string());
    }

    pub fn get(&self, name: &str) -> &[String] {
        self.0.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn count(&self, name: &str) -> usize {
        self.get(name).len()
    }

    /// Total number of recorded field occurrences.
    pub fn occurrences(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

/// Everything the line scan accumulates; input to the cross-field checks.
#[derive(Clone, Debug, Default)]
pub struct ScannedDocument {
    pub lines: Vec<LineRecord>,
    pub values: FieldValues,
    pub envelope: EnvelopeState,
    /// Locations the document was fetched from; the last one is the resolved URL.
    pub urls: Vec<String>,
}
