//! Property-based tests for the engine.
//!
//! Invariants covered:
//! - one line record per input line, in input order
//! - identical input yields identical diagnostics
//! - missing `Expires` always yields `no_expire`
//! - dash-escaping is transparent inside a signed body

use crate::test_support::{AcceptArmor, parse_at, parse_with, test_now};
use proptest::prelude::*;
use sectxt_types::{LineKind, Severity, ids};

// ============================================================================
// Strategies
// ============================================================================

fn arb_field_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Contact".to_string()),
        Just("Canonical".to_string()),
        Just("Encryption".to_string()),
        Just("Policy".to_string()),
        Just("Hiring".to_string()),
        Just("CSAF".to_string()),
        Just("Preferred-Languages".to_string()),
        "[A-Za-z][A-Za-z-]{0,12}",
    ]
}

fn arb_value() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("mailto:security@example.com".to_string()),
        Just("https://example.com/security".to_string()),
        Just("http://example.com/".to_string()),
        Just("en, nl".to_string()),
        "[ -~]{0,40}",
    ]
}

/// A single line drawn from every classification bucket, never containing `\n`.
fn arb_line() -> impl Strategy<Value = String> {
    prop_oneof![
        (arb_field_name(), arb_value()).prop_map(|(k, v)| format!("{k}: {v}")),
        "#[ -~]{0,30}".prop_map(String::from),
        Just(String::new()),
        Just("-----BEGIN PGP SIGNED MESSAGE-----".to_string()),
        Just("-----BEGIN PGP SIGNATURE-----".to_string()),
        Just("-----END PGP SIGNATURE-----".to_string()),
        "[^\n]{0,60}",
    ]
}

fn arb_document() -> impl Strategy<Value = (Vec<String>, bool)> {
    (prop::collection::vec(arb_line(), 0..24), any::<bool>())
}

fn join((lines, terminated): &(Vec<String>, bool)) -> String {
    let mut doc = lines.join("\n");
    if *terminated {
        doc.push('\n');
    }
    doc
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn one_record_per_line(input in arb_document()) {
        let doc = join(&input);
        let parser = parse_at(&doc, test_now());
        prop_assert_eq!(parser.lines().len(), doc.split('\n').count());
    }

    #[test]
    fn identical_input_identical_diagnostics(input in arb_document()) {
        let doc = join(&input);
        let first = parse_at(&doc, test_now());
        let second = parse_at(&doc, test_now());
        prop_assert_eq!(first.diagnostics(), second.diagnostics());
        prop_assert_eq!(first.lines(), second.lines());
    }

    #[test]
    fn missing_expires_always_reported(input in arb_document()) {
        let doc = join(&input);
        let parser = parse_at(&doc, test_now());
        if !parser.values().contains(ids::FIELD_EXPIRES) {
            let errors = parser.diagnostics().codes(Severity::Error);
            prop_assert!(errors.contains(&ids::CODE_NO_EXPIRE));
        }
    }

    #[test]
    fn never_panics_on_arbitrary_text(doc in "\\PC{0,400}") {
        let parser = parse_at(&doc, test_now());
        prop_assert!(!parser.lines().is_empty());
    }

    #[test]
    fn dash_escaping_is_transparent_when_signed(
        fields in prop::collection::vec((arb_field_name(), "[a-z]{1,12}"), 1..6),
    ) {
        let body: Vec<String> = fields
            .iter()
            .map(|(k, v)| format!("{k}: https://example.com/{v}"))
            .collect();
        let escaped: Vec<String> = body.iter().map(|l| format!("- {l}")).collect();

        let wrap = |lines: &[String]| {
            format!("-----BEGIN PGP SIGNED MESSAGE-----\nHash: SHA256\n\n{}\n", lines.join("\n"))
        };
        let plain = parse_with(&wrap(&body), AcceptArmor);
        let dashed = parse_with(&wrap(&escaped), AcceptArmor);

        prop_assert_eq!(plain.values(), dashed.values());
        prop_assert_eq!(plain.diagnostics(), dashed.diagnostics());
        let kinds = |p: &crate::Parser| p.lines().iter().map(|l| l.kind).collect::<Vec<LineKind>>();
        prop_assert_eq!(kinds(&plain), kinds(&dashed));
    }
}
