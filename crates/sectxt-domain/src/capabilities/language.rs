use language_tags::LanguageTag;

pub trait LanguageTagValidator: Send + Sync {
    fn is_valid(&self, tag: &str) -> bool;
}

/// RFC 5646 well-formedness plus a lookup in the IANA subtag registry.
#[derive(Clone, Copy, Debug, Default)]
pub struct Rfc5646Tags;

impl LanguageTagValidator for Rfc5646Tags {
    fn is_valid(&self, tag: &str) -> bool {
        LanguageTag::parse(tag)
            .map(|parsed| parsed.validate().is_ok())
            .unwrap_or(false)
    }
}
