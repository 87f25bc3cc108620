//! Explain registry for diagnostic codes.
//!
//! Maps codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a diagnostic code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the code.
    pub title: &'static str,
    /// What the rule checks and which part of RFC 9116 it comes from.
    pub description: &'static str,
    /// How to fix the document.
    pub remediation: &'static str,
    /// Before/after document snippets.
    pub examples: ExamplePair,
}

/// Before and after document snippets.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Snippet that triggers the diagnostic.
    pub before: &'static str,
    /// Snippet that passes.
    pub after: &'static str,
}

/// Look up an explanation by code.
///
/// Returns `None` if the code is not recognized.
pub fn lookup_explanation(code: &str) -> Option<Explanation> {
    let (title, description, remediation, before, after) = match code {
        ids::CODE_DATA_AFTER_SIG => (
            "Data After Signature",
            "A signed security.txt ends with the `-----END PGP SIGNATURE-----` line.\nAnything other than blank lines after it is not covered by the signature.",
            "Remove everything after the signature block, or re-sign the complete document.",
            "-----END PGP SIGNATURE-----\nContact: mailto:security@example.com",
            "-----END PGP SIGNATURE-----\n",
        ),
        ids::CODE_SIGNED_FORMAT_ISSUE => (
            "Signed Header Not First",
            "A cleartext-signed security.txt must start with `-----BEGIN PGP SIGNED MESSAGE-----` on line 1.",
            "Move the signed-message header to the first line; put comments inside the signed body.",
            "# Our policy\n-----BEGIN PGP SIGNED MESSAGE-----",
            "-----BEGIN PGP SIGNED MESSAGE-----\nHash: SHA256\n\n# Our policy",
        ),
        ids::CODE_PGP_DATA_ERROR => (
            "Malformed PGP Envelope",
            "The document announces a signed message but does not contain a complete ASCII-armored\ncleartext signature (header block, signature block and end marker).",
            "Regenerate the file with `gpg --clearsign security.txt` and publish the output unchanged.",
            "-----BEGIN PGP SIGNED MESSAGE-----\nContact: mailto:security@example.com",
            "-----BEGIN PGP SIGNED MESSAGE-----\nHash: SHA256\n\nContact: mailto:security@example.com\n-----BEGIN PGP SIGNATURE-----\n...\n-----END PGP SIGNATURE-----",
        ),
        ids::CODE_PGP_ERROR => (
            "PGP Signature Does Not Parse",
            "The signature block is armored but its radix-64 payload, checksum or packet structure is broken.",
            "Re-sign the document; do not edit the armored block by hand.",
            "-----BEGIN PGP SIGNATURE-----\nnot base64!\n-----END PGP SIGNATURE-----",
            "-----BEGIN PGP SIGNATURE-----\n\niQEzBAEBCAAdFiEE...\n-----END PGP SIGNATURE-----",
        ),
        ids::CODE_INVALID_LINE => (
            "Invalid Line",
            "Every non-blank line must be a comment (`#`) or a `Field: value` pair.",
            "Turn free text into a comment or remove it.",
            "Please report bugs to us",
            "# Please report bugs to us",
        ),
        ids::CODE_PREC_WS => (
            "Whitespace Before Colon",
            "No whitespace is allowed between a field name and its colon.",
            "Remove the whitespace before the colon.",
            "Contact : mailto:security@example.com",
            "Contact: mailto:security@example.com",
        ),
        ids::CODE_NO_SPACE => (
            "Missing Space After Colon",
            "The field separator must be followed by a single space.",
            "Insert a space after the colon.",
            "Contact:mailto:security@example.com",
            "Contact: mailto:security@example.com",
        ),
        ids::CODE_EMPTY_KEY => (
            "Empty Field Name",
            "A line starts with a colon, so the field has no name.",
            "Add the field name or turn the line into a comment.",
            ": mailto:security@example.com",
            "Contact: mailto:security@example.com",
        ),
        ids::CODE_EMPTY_VALUE => (
            "Empty Field Value",
            "A field is declared without a value.",
            "Provide a value or remove the field.",
            "Policy:",
            "Policy: https://example.com/security-policy",
        ),
        ids::CODE_NO_URI => (
            "Value Is Not A URI",
            "Acknowledgments, Canonical, Contact, Encryption, Hiring, Policy and CSAF values must be URIs.",
            "Add a scheme: `mailto:` for e-mail, `tel:` for phone numbers, `https://` for web pages.",
            "Contact: security@example.com",
            "Contact: mailto:security@example.com",
        ),
        ids::CODE_NO_HTTPS => (
            "Web URI Uses HTTP",
            "Web URIs in security.txt must use the `https` scheme.",
            "Serve the resource over TLS and update the URI.",
            "Policy: http://example.com/policy",
            "Policy: https://example.com/policy",
        ),
        ids::CODE_INVALID_LANG => (
            "Invalid Language Tag",
            "Preferred-Languages holds a comma-separated list of RFC 5646 language tags.",
            "Use registered tags such as `en`, `de`, `pt-BR`.",
            "Preferred-Languages: english, german",
            "Preferred-Languages: en, de",
        ),
        ids::CODE_UNKNOWN_FIELD => (
            "Unknown Field",
            "The field is not defined by RFC 9116. It may be a custom extension or a typo.",
            "Check the spelling; keep custom fields only if consumers understand them.",
            "Contacts: mailto:security@example.com",
            "Contact: mailto:security@example.com",
        ),
        ids::CODE_INVALID_EXPIRY => (
            "Invalid Expires Date",
            "Expires must be an ISO 8601 / RFC 3339 timestamp with a time zone.",
            "Use `YYYY-MM-DDThh:mm:ssZ` or an explicit `+hh:mm` offset.",
            "Expires: 31 December 2030",
            "Expires: 2030-12-31T23:00:00.000Z",
        ),
        ids::CODE_LONG_EXPIRY => (
            "Expiry Too Far Ahead",
            "Expires should be less than a year in the future so stale files age out.",
            "Move the date closer and refresh the file regularly.",
            "Expires: 2099-01-01T00:00:00Z",
            "Expires: <a date within the next year>",
        ),
        ids::CODE_EXPIRED => (
            "Expired",
            "The Expires date is in the past; consumers must treat the file as stale.",
            "Update the file and set a new expiry date.",
            "Expires: 2001-01-01T00:00:00Z",
            "Expires: <a date within the next year>",
        ),
        ids::CODE_NO_EXPIRE => (
            "Missing Expires",
            "The Expires field is required.",
            "Add exactly one Expires field.",
            "Contact: mailto:security@example.com",
            "Contact: mailto:security@example.com\nExpires: <a date within the next year>",
        ),
        ids::CODE_MULTI_EXPIRE => (
            "Multiple Expires",
            "The Expires field must appear exactly once.",
            "Keep a single Expires field.",
            "Expires: 2030-01-01T00:00:00Z\nExpires: 2031-01-01T00:00:00Z",
            "Expires: 2030-01-01T00:00:00Z",
        ),
        ids::CODE_NO_CANONICAL_MATCH => (
            "Canonical Does Not Match Location",
            "When Canonical is present, the URI the file was fetched from (first or last of a redirect chain)\nmust be listed as a Canonical value.",
            "Add the actual location as a Canonical field.",
            "Canonical: https://other.example/.well-known/security.txt",
            "Canonical: https://example.com/.well-known/security.txt",
        ),
        ids::CODE_NO_LINE_SEPARATORS => (
            "Missing Final Line Break",
            "Every line, including the last one, must end with CRLF or LF.",
            "Terminate the last line with a line break.",
            "Expires: 2030-01-01T00:00:00Z<EOF>",
            "Expires: 2030-01-01T00:00:00Z\n<EOF>",
        ),
        ids::CODE_NO_CSAF_FILE => (
            "CSAF Does Not Point To Provider Metadata",
            "CSAF fields must point to a `provider-metadata.json` file.",
            "Link the provider metadata document.",
            "CSAF: https://example.com/.well-known/csaf/",
            "CSAF: https://example.com/.well-known/csaf/provider-metadata.json",
        ),
        ids::CODE_MULTIPLE_CSAF_FIELDS => (
            "Multiple CSAF Fields",
            "More than one CSAF field is allowed but discouraged.",
            "Keep a single CSAF field where possible.",
            "CSAF: https://a.example/provider-metadata.json\nCSAF: https://b.example/provider-metadata.json",
            "CSAF: https://a.example/provider-metadata.json",
        ),
        ids::CODE_NO_CONTACT => (
            "Missing Contact",
            "At least one Contact field is required.",
            "Add a Contact field with a mailto:, tel: or https: URI.",
            "Expires: 2030-01-01T00:00:00Z",
            "Contact: mailto:security@example.com\nExpires: 2030-01-01T00:00:00Z",
        ),
        ids::CODE_NO_ENCRYPTION => (
            "Missing Encryption",
            "When an e-mail contact is listed, an Encryption field should point to a key for encrypted reports.",
            "Publish an OpenPGP key and reference it.",
            "Contact: mailto:security@example.com",
            "Contact: mailto:security@example.com\nEncryption: https://example.com/pgp-key.txt",
        ),
        ids::CODE_MULTI_LANG => (
            "Multiple Preferred-Languages",
            "Preferred-Languages must not appear more than once.",
            "Merge the values into one comma-separated field.",
            "Preferred-Languages: en\nPreferred-Languages: de",
            "Preferred-Languages: en, de",
        ),
        ids::CODE_NOT_SIGNED => (
            "Not Signed",
            "security.txt should be digitally signed with an OpenPGP cleartext signature.",
            "Sign the file with `gpg --clearsign` and publish the signed output.",
            "Contact: mailto:security@example.com",
            "-----BEGIN PGP SIGNED MESSAGE-----\nHash: SHA256\n\nContact: mailto:security@example.com",
        ),
        ids::CODE_NO_CANONICAL => (
            "Signed Without Canonical",
            "A signed file should include Canonical so the signature cannot be replayed elsewhere.",
            "Add a Canonical field before signing.",
            "Contact: mailto:security@example.com",
            "Canonical: https://example.com/.well-known/security.txt\nContact: mailto:security@example.com",
        ),
        ids::CODE_NO_SECURITY_TXT => (
            "security.txt Not Found",
            "No candidate location answered with HTTP 200.",
            "Publish the file at `/.well-known/security.txt`.",
            "GET /.well-known/security.txt -> 404",
            "GET /.well-known/security.txt -> 200",
        ),
        ids::CODE_INVALID_CERT => (
            "Invalid TLS Certificate",
            "security.txt must be served with a valid TLS certificate.",
            "Fix the certificate chain or hostname of the web server.",
            "https://example.com -> certificate verify failed",
            "https://example.com -> 200",
        ),
        ids::CODE_INVALID_URI_SCHEME => (
            "Served Over HTTP",
            "The file must be retrieved over https.",
            "Serve the file over https.",
            "http://example.com/.well-known/security.txt",
            "https://example.com/.well-known/security.txt",
        ),
        ids::CODE_LOCATION => (
            "Legacy Location",
            "The file was found at the top-level path; it must live under `/.well-known/`.",
            "Move or copy the file to `/.well-known/security.txt`.",
            "https://example.com/security.txt",
            "https://example.com/.well-known/security.txt",
        ),
        ids::CODE_NO_CONTENT_TYPE => (
            "Missing Content-Type",
            "The HTTP response must carry a Content-Type header.",
            "Configure the server to send `Content-Type: text/plain; charset=utf-8`.",
            "(no Content-Type header)",
            "Content-Type: text/plain; charset=utf-8",
        ),
        ids::CODE_INVALID_MEDIA => (
            "Wrong Media Type",
            "The media type must be `text/plain`.",
            "Configure the server to send `text/plain`.",
            "Content-Type: text/html",
            "Content-Type: text/plain; charset=utf-8",
        ),
        ids::CODE_INVALID_CHARSET => (
            "Wrong Charset",
            "If a charset parameter is sent it must be `utf-8`.",
            "Send `charset=utf-8` or omit the parameter.",
            "Content-Type: text/plain; charset=iso-8859-1",
            "Content-Type: text/plain; charset=utf-8",
        ),
        ids::CODE_BOM_IN_FILE => (
            "Byte Order Mark",
            "The file must be UTF-8 in Net-Unicode form without a byte order mark.",
            "Save the file as UTF-8 without BOM.",
            "<EF BB BF>Contact: mailto:security@example.com",
            "Contact: mailto:security@example.com",
        ),
        ids::CODE_UTF8 => (
            "Not UTF-8",
            "The file content must be valid UTF-8.",
            "Re-encode the file as UTF-8.",
            "Contact: mailto:s\\xE9curit\\xE9@example.com (latin-1)",
            "Contact: mailto:security@example.com",
        ),
        _ => return None,
    };

    Some(Explanation {
        title,
        description,
        remediation,
        examples: ExamplePair { before, after },
    })
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_DATA_AFTER_SIG,
        ids::CODE_SIGNED_FORMAT_ISSUE,
        ids::CODE_PGP_DATA_ERROR,
        ids::CODE_PGP_ERROR,
        ids::CODE_INVALID_LINE,
        ids::CODE_PREC_WS,
        ids::CODE_NO_SPACE,
        ids::CODE_EMPTY_KEY,
        ids::CODE_EMPTY_VALUE,
        ids::CODE_NO_URI,
        ids::CODE_NO_HTTPS,
        ids::CODE_INVALID_LANG,
        ids::CODE_UNKNOWN_FIELD,
        ids::CODE_INVALID_EXPIRY,
        ids::CODE_LONG_EXPIRY,
        ids::CODE_EXPIRED,
        ids::CODE_NO_EXPIRE,
        ids::CODE_MULTI_EXPIRE,
        ids::CODE_NO_CANONICAL_MATCH,
        ids::CODE_NO_LINE_SEPARATORS,
        ids::CODE_NO_CSAF_FILE,
        ids::CODE_MULTIPLE_CSAF_FIELDS,
        ids::CODE_NO_CONTACT,
        ids::CODE_NO_ENCRYPTION,
        ids::CODE_MULTI_LANG,
        ids::CODE_NOT_SIGNED,
        ids::CODE_NO_CANONICAL,
        ids::CODE_NO_SECURITY_TXT,
        ids::CODE_INVALID_CERT,
        ids::CODE_INVALID_URI_SCHEME,
        ids::CODE_LOCATION,
        ids::CODE_NO_CONTENT_TYPE,
        ids::CODE_INVALID_MEDIA,
        ids::CODE_INVALID_CHARSET,
        ids::CODE_BOM_IN_FILE,
        ids::CODE_UTF8,
    ]
}
