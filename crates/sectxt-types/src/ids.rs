//! Stable diagnostic codes and field names.
//!
//! `code` is a short snake_case discriminator. Codes never change once released; callers
//! match on them.

// Fields
pub const FIELD_ACKNOWLEDGMENTS: &str = "acknowledgments";
pub const FIELD_CANONICAL: &str = "canonical";
pub const FIELD_CONTACT: &str = "contact";
pub const FIELD_ENCRYPTION: &str = "encryption";
pub const FIELD_HIRING: &str = "hiring";
pub const FIELD_POLICY: &str = "policy";
pub const FIELD_CSAF: &str = "csaf";
pub const FIELD_EXPIRES: &str = "expires";
pub const FIELD_PREFERRED_LANGUAGES: &str = "preferred-languages";

/// Fields whose value must be a URI.
pub const URI_FIELDS: &[&str] = &[
    FIELD_ACKNOWLEDGMENTS,
    FIELD_CANONICAL,
    FIELD_CONTACT,
    FIELD_ENCRYPTION,
    FIELD_HIRING,
    FIELD_POLICY,
    FIELD_CSAF,
];

/// Every field RFC 9116 (plus the CSAF extension) defines.
pub const KNOWN_FIELDS: &[&str] = &[
    FIELD_ACKNOWLEDGMENTS,
    FIELD_CANONICAL,
    FIELD_CONTACT,
    FIELD_ENCRYPTION,
    FIELD_HIRING,
    FIELD_POLICY,
    FIELD_CSAF,
    FIELD_PREFERRED_LANGUAGES,
    FIELD_EXPIRES,
];

// Codes: envelope
pub const CODE_DATA_AFTER_SIG: &str = "data_after_sig";
pub const CODE_SIGNED_FORMAT_ISSUE: &str = "signed_format_issue";
pub const CODE_PGP_DATA_ERROR: &str = "pgp_data_error";
pub const CODE_PGP_ERROR: &str = "pgp_error";
pub const CODE_INVALID_LINE: &str = "invalid_line";

// Codes: fields
pub const CODE_PREC_WS: &str = "prec_ws";
pub const CODE_NO_SPACE: &str = "no_space";
pub const CODE_EMPTY_KEY: &str = "empty_key";
pub const CODE_EMPTY_VALUE: &str = "empty_value";
pub const CODE_NO_URI: &str = "no_uri";
pub const CODE_NO_HTTPS: &str = "no_https";
pub const CODE_INVALID_LANG: &str = "invalid_lang";
pub const CODE_UNKNOWN_FIELD: &str = "unknown_field";

// Codes: expires
pub const CODE_INVALID_EXPIRY: &str = "invalid_expiry";
pub const CODE_LONG_EXPIRY: &str = "long_expiry";
pub const CODE_EXPIRED: &str = "expired";

// Codes: cross-field
pub const CODE_NO_EXPIRE: &str = "no_expire";
pub const CODE_MULTI_EXPIRE: &str = "multi_expire";
pub const CODE_NO_CANONICAL_MATCH: &str = "no_canonical_match";
pub const CODE_NO_LINE_SEPARATORS: &str = "no_line_separators";
pub const CODE_NO_CSAF_FILE: &str = "no_csaf_file";
pub const CODE_MULTIPLE_CSAF_FIELDS: &str = "multiple_csaf_fields";
pub const CODE_NO_CONTACT: &str = "no_contact";
pub const CODE_NO_ENCRYPTION: &str = "no_encryption";
pub const CODE_MULTI_LANG: &str = "multi_lang";
pub const CODE_NOT_SIGNED: &str = "not_signed";
pub const CODE_NO_CANONICAL: &str = "no_canonical";

// Codes: retrieval
pub const CODE_NO_SECURITY_TXT: &str = "no_security_txt";
pub const CODE_INVALID_CERT: &str = "invalid_cert";
pub const CODE_INVALID_URI_SCHEME: &str = "invalid_uri_scheme";
pub const CODE_LOCATION: &str = "location";
pub const CODE_NO_CONTENT_TYPE: &str = "no_content_type";
pub const CODE_INVALID_MEDIA: &str = "invalid_media";
pub const CODE_INVALID_CHARSET: &str = "invalid_charset";
pub const CODE_BOM_IN_FILE: &str = "bom_in_file";
pub const CODE_UTF8: &str = "utf8";

// Tool-level
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
