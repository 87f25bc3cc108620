use crate::capabilities::{
    ArmorChecker, ArmorError, Collaborators, FixedClock, LanguageTagValidator, crc24,
};
use crate::model::{EnvelopeState, FieldValues, ScannedDocument};
use crate::parser::{ParseOptions, Parser};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use sectxt_types::{LineKind, LineRecord, Severity};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use time::macros::datetime;

pub fn test_now() -> OffsetDateTime {
    datetime!(2029-09-01 12:00 UTC)
}

pub fn collaborators_at(now: OffsetDateTime) -> Collaborators {
    Collaborators::default().with_clock(FixedClock(now))
}

pub fn parse_at(doc: &str, now: OffsetDateTime) -> Parser {
    Parser::with_collaborators(doc, ParseOptions::default(), &collaborators_at(now))
}

pub fn parse_opts(doc: &str, options: ParseOptions) -> Parser {
    Parser::with_collaborators(doc, options, &collaborators_at(test_now()))
}

pub fn parse_with(doc: &str, armor: impl ArmorChecker + 'static) -> Parser {
    let collab = collaborators_at(test_now()).with_armor(armor);
    Parser::with_collaborators(doc, ParseOptions::default(), &collab)
}

pub fn parse_with_languages(doc: &str, languages: FakeLanguages) -> Parser {
    let collab = collaborators_at(test_now()).with_languages(languages);
    Parser::with_collaborators(doc, ParseOptions::default(), &collab)
}

pub fn kinds(parser: &Parser) -> Vec<LineKind> {
    parser.lines().iter().map(|l| l.kind).collect()
}

pub fn codes(parser: &Parser, severity: Severity) -> Vec<&str> {
    parser.diagnostics().codes(severity)
}

/// Armor checker that accepts anything.
pub struct AcceptArmor;

impl ArmorChecker for AcceptArmor {
    fn check(&self, _document: &str) -> Result<(), ArmorError> {
        Ok(())
    }
}

/// Armor checker that always fails the given way.
pub enum RejectArmor {
    NotArmored,
    Malformed,
}

impl ArmorChecker for RejectArmor {
    fn check(&self, _document: &str) -> Result<(), ArmorError> {
        Err(match self {
            RejectArmor::NotArmored => ArmorError::NotArmored("rejected in test"),
            RejectArmor::Malformed => ArmorError::Malformed("rejected in test".to_string()),
        })
    }
}

/// Accepts exactly the listed tags.
pub struct FakeLanguages(pub &'static [&'static str]);

impl LanguageTagValidator for FakeLanguages {
    fn is_valid(&self, tag: &str) -> bool {
        self.0.contains(&tag)
    }
}

/// Signature armor block around `packet`, with a correct CRC-24 line and a trailing newline.
pub fn armored_signature(packet: &[u8]) -> String {
    let crc = crc24(packet).to_be_bytes();
    format!(
        "-----BEGIN PGP SIGNATURE-----\n\n{}\n={}\n-----END PGP SIGNATURE-----\n",
        STANDARD.encode(packet),
        STANDARD.encode(&crc[1..])
    )
}

/// Cleartext-signed document: header, `Hash: SHA256`, blank line, body, signature block.
pub fn signed_document(body: &[&str], packet: &[u8]) -> String {
    format!(
        "-----BEGIN PGP SIGNED MESSAGE-----\nHash: SHA256\n\n{}\n{}",
        body.join("\n"),
        armored_signature(packet)
    )
}

pub fn expires_line(at: OffsetDateTime) -> String {
    format!("Expires: {}", at.format(&Rfc3339).expect("rfc3339"))
}

/// `Contact` plus the given `Expires`, newline-terminated.
pub fn expires_document(at: OffsetDateTime) -> String {
    format!("Contact: mailto:a@example.com\n{}\n", expires_line(at))
}

pub fn minimal_document() -> String {
    "Contact: mailto:security@example.com\nExpires: 2030-06-01T00:00:00Z\n".to_string()
}

/// Already-scanned document for driving the cross-field checks directly.
pub fn scanned(fields: &[(&str, &str)]) -> ScannedDocument {
    let mut values = FieldValues::default();
    let mut lines = Vec::new();
    for (name, value) in fields {
        values.push(name, value);
        lines.push(LineRecord::field(*name, *value));
    }
    lines.push(LineRecord::new(LineKind::Empty, ""));

    ScannedDocument {
        lines,
        values,
        envelope: EnvelopeState::default(),
        urls: Vec::new(),
    }
}

pub fn signed(mut doc: ScannedDocument) -> ScannedDocument {
    doc.envelope = EnvelopeState {
        signed: true,
        reading_signature: false,
        signature_finished: true,
    };
    doc
}
