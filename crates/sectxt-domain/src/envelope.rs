//! Per-line classification and the cleartext-signature envelope state machine.
//!
//! States: unsigned -> signed -> reading signature -> signature finished. Each transition
//! happens at most once; after the signature only blank lines are allowed.

use crate::capabilities::ArmorError;
use crate::model::{BEGIN_SIGNATURE, BEGIN_SIGNED_MESSAGE, END_SIGNATURE};
use crate::parser::Scanner;
use sectxt_types::{LineKind, LineRecord, ids};
use tracing::debug;

impl Scanner<'_> {
    /// Classify one raw line and advance the envelope state. No look-ahead.
    pub(crate) fn classify(&mut self, raw: &str) -> LineRecord {
        let mut line = raw.trim_end();

        if self.envelope.reading_signature {
            if line == END_SIGNATURE {
                self.envelope.reading_signature = false;
                self.envelope.signature_finished = true;
            }
            return LineRecord::new(LineKind::PgpEnvelope, line);
        }

        if !line.is_empty() && self.envelope.signature_finished {
            self.error(
                ids::CODE_DATA_AFTER_SIG,
                "Signed security.txt must not contain data after the signature.",
            );
            return LineRecord::new(LineKind::Error, line);
        }

        // Cleartext signatures dash-escape body lines that start with '-'.
        if self.envelope.signed
            && let Some(unescaped) = line.strip_prefix("- ")
        {
            line = unescaped;
        }

        if line == BEGIN_SIGNED_MESSAGE {
            self.begin_signed_message();
            return LineRecord::new(LineKind::PgpEnvelope, line);
        }

        if line == BEGIN_SIGNATURE && self.envelope.signed {
            self.envelope.reading_signature = true;
            return LineRecord::new(LineKind::PgpEnvelope, line);
        }

        if line.starts_with('#') {
            return LineRecord::new(LineKind::Comment, line);
        }

        if line.contains(':') {
            return self.parse_field(line);
        }

        if !line.is_empty() {
            self.error(
                ids::CODE_INVALID_LINE,
                "Line must contain a field name and value, unless the line is blank or contains a comment.",
            );
            return LineRecord::new(LineKind::Error, line);
        }

        LineRecord::new(LineKind::Empty, "")
    }

    fn begin_signed_message(&mut self) {
        if self.line_no != 1 {
            self.error(
                ids::CODE_SIGNED_FORMAT_ISSUE,
                format!("Signed security.txt must start with the header '{BEGIN_SIGNED_MESSAGE}'."),
            );
        }

        self.envelope.signed = true;

        match self.collab.armor.check(self.content) {
            Ok(()) => {}
            Err(err @ ArmorError::NotArmored(_)) => {
                debug!(line = self.line_no, error = %err, "armor check failed");
                self.error(
                    ids::CODE_PGP_DATA_ERROR,
                    "Signed message did not contain a correct ASCII-armored PGP block.",
                );
            }
            Err(err @ ArmorError::Malformed(_)) => {
                debug!(line = self.line_no, error = %err, "armor check failed");
                self.error(
                    ids::CODE_PGP_ERROR,
                    "Decoding or parsing of the pgp message failed.",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{
        AcceptArmor, RejectArmor, codes, kinds, parse_at, parse_with, signed_document, test_now,
    };
    use sectxt_types::{LineKind, Severity, ids};

    fn future_expires() -> &'static str {
        "Expires: 2030-06-01T00:00:00Z"
    }

    #[test]
    fn classifies_comment_empty_field_and_invalid_lines() {
        let doc = format!(
            "# hello\n\nContact: mailto:a@example.com\n{}\nnonsense\n",
            future_expires()
        );
        let parser = parse_at(&doc, test_now());

        assert_eq!(
            kinds(&parser),
            vec![
                LineKind::Comment,
                LineKind::Empty,
                LineKind::Field,
                LineKind::Field,
                LineKind::Error,
                LineKind::Empty,
            ]
        );
        let invalid: Vec<_> = parser
            .errors()
            .iter()
            .filter(|d| d.code == ids::CODE_INVALID_LINE)
            .collect();
        assert_eq!(invalid.len(), 1);
        assert_eq!(invalid[0].line, Some(5));
    }

    #[test]
    fn well_formed_signed_document_has_envelope_lines_and_no_envelope_errors() {
        let doc = signed_document(
            &[
                "Canonical: https://example.com/.well-known/security.txt",
                "Contact: mailto:security@example.com",
                "Encryption: https://example.com/key.asc",
                future_expires(),
            ],
            &[0xc2, 0x01, 0x04],
        );
        let parser = parse_at(&doc, test_now());

        assert!(parser.is_signed());
        assert!(parser.is_valid(), "{:?}", parser.errors());
        assert!(parser.recommendations().is_empty(), "{:?}", parser.recommendations());

        let lines = parser.lines();
        assert_eq!(lines[0].kind, LineKind::PgpEnvelope);
        // "Hash: SHA256" belongs to the envelope, not the field map
        assert_eq!(lines[1].kind, LineKind::PgpEnvelope);
        assert!(!parser.values().contains("hash"));
        assert_eq!(lines.last().map(|l| l.kind), Some(LineKind::Empty));
        assert!(parser.envelope().signature_finished);
    }

    #[test]
    fn signed_header_not_on_first_line_is_reported() {
        let doc = format!(
            "# comment first\n-----BEGIN PGP SIGNED MESSAGE-----\nHash: SHA256\n\nContact: mailto:a@example.com\n{}\n",
            future_expires()
        );
        let parser = parse_with(&doc, AcceptArmor);

        let issue = parser
            .errors()
            .iter()
            .find(|d| d.code == ids::CODE_SIGNED_FORMAT_ISSUE)
            .expect("signed_format_issue");
        assert_eq!(issue.line, Some(2));
    }

    #[test]
    fn armor_failures_map_to_distinct_codes() {
        let doc = format!(
            "-----BEGIN PGP SIGNED MESSAGE-----\nHash: SHA256\n\nContact: mailto:a@example.com\n{}\n",
            future_expires()
        );

        let not_armored = parse_with(&doc, RejectArmor::NotArmored);
        assert!(codes(&not_armored, Severity::Error).contains(&ids::CODE_PGP_DATA_ERROR));

        let malformed = parse_with(&doc, RejectArmor::Malformed);
        let errors = codes(&malformed, Severity::Error);
        assert!(errors.contains(&ids::CODE_PGP_ERROR));
        assert!(!errors.contains(&ids::CODE_PGP_DATA_ERROR));
    }

    #[test]
    fn every_signed_header_runs_the_armor_check() {
        let doc = format!(
            "-----BEGIN PGP SIGNED MESSAGE-----\nHash: SHA256\n\n-----BEGIN PGP SIGNED MESSAGE-----\nContact: mailto:a@example.com\n{}\n",
            future_expires()
        );
        let parser = parse_with(&doc, RejectArmor::NotArmored);

        let armor_lines: Vec<_> = parser
            .errors()
            .iter()
            .filter(|d| d.code == ids::CODE_PGP_DATA_ERROR)
            .map(|d| d.line)
            .collect();
        assert_eq!(armor_lines, vec![Some(1), Some(4)]);

        let issue = parser
            .errors()
            .iter()
            .find(|d| d.code == ids::CODE_SIGNED_FORMAT_ISSUE)
            .expect("signed_format_issue");
        assert_eq!(issue.line, Some(4));
        assert_eq!(parser.lines()[3].kind, LineKind::PgpEnvelope);
    }

    #[test]
    fn data_after_signature_is_an_error_but_blank_lines_are_fine() {
        let mut doc = signed_document(
            &["Contact: mailto:a@example.com", future_expires()],
            &[0xc2, 0x01, 0x04],
        );
        doc.push_str("\nPolicy: https://example.com/policy\n");
        let parser = parse_at(&doc, test_now());

        let after: Vec<_> = parser
            .errors()
            .iter()
            .filter(|d| d.code == ids::CODE_DATA_AFTER_SIG)
            .collect();
        assert_eq!(after.len(), 1);
        assert!(!parser.values().contains("policy"));
        assert_eq!(
            parser.lines()[after[0].line.unwrap() as usize - 1].kind,
            LineKind::Error
        );
    }

    #[test]
    fn dash_escaped_lines_are_unescaped_only_when_signed() {
        let signed = format!(
            "-----BEGIN PGP SIGNED MESSAGE-----\nHash: SHA256\n\n- Contact: mailto:a@example.com\n{}\n",
            future_expires()
        );
        let parser = parse_with(&signed, AcceptArmor);
        assert_eq!(parser.lines()[3].kind, LineKind::Field);
        assert_eq!(parser.values().get("contact"), ["mailto:a@example.com"]);

        let unsigned = format!("- Contact: mailto:a@example.com\n{}\n", future_expires());
        let parser = parse_at(&unsigned, test_now());
        assert_eq!(parser.lines()[0].field_name.as_deref(), Some("- contact"));
        assert!(!parser.values().contains("contact"));
    }

    #[test]
    fn signature_marker_without_signed_header_is_just_text() {
        let doc = format!(
            "Contact: mailto:a@example.com\n{}\n-----BEGIN PGP SIGNATURE-----\n",
            future_expires()
        );
        let parser = parse_at(&doc, test_now());
        assert_eq!(parser.lines()[2].kind, LineKind::Error);
        assert!(!parser.envelope().reading_signature);
    }
}
