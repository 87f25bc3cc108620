use crate::parser::Scanner;
use sectxt_types::{LineKind, LineRecord, ids};

impl Scanner<'_> {
    /// Split a `name: value` line, apply the separator rules and the per-field checks.
    pub(crate) fn parse_field(&mut self, line: &str) -> LineRecord {
        let Some((raw_key, raw_value)) = line.split_once(':') else {
            return LineRecord::new(LineKind::Error, line);
        };

        let lowered = raw_key.to_lowercase();
        let key = lowered.trim_end();

        // Cleartext-signature hash header, not a document field.
        if key == "hash" && self.envelope.signed {
            return LineRecord::new(LineKind::PgpEnvelope, line);
        }

        if key.len() != lowered.len() {
            self.error(
                ids::CODE_PREC_WS,
                "There must be no whitespace before the field separator (colon).",
            );
        }

        let mut value = raw_value;
        if !value.is_empty() {
            if !value.starts_with(' ') {
                self.error(
                    ids::CODE_NO_SPACE,
                    "Field separator (colon) must be followed by a space.",
                );
            }
            value = value.trim_start();
        }

        if key.is_empty() {
            self.error(ids::CODE_EMPTY_KEY, "Field name must not be empty.");
            return LineRecord::new(LineKind::Error, line);
        }

        if value.is_empty() {
            self.error(ids::CODE_EMPTY_VALUE, "Field value must not be empty.");
            return LineRecord::new(LineKind::Error, line);
        }

        if ids::URI_FIELDS.contains(&key) {
            self.check_uri(key, value);
        } else if key == ids::FIELD_EXPIRES {
            self.check_expires(value);
        } else if key == ids::FIELD_PREFERRED_LANGUAGES {
            self.check_languages(value);
        }

        if self.options.notify_unknown_fields && !ids::KNOWN_FIELDS.contains(&key) {
            self.notify(
                ids::CODE_UNKNOWN_FIELD,
                format!(
                    "security.txt contains an unknown field. Field \"{key}\" is either a custom field \
                     which may not be widely supported, or there is a typo in a standardised field name."
                ),
            );
        }

        self.values.push(key, value);
        LineRecord::field(key, value)
    }

    fn check_uri(&mut self, key: &str, value: &str) {
        match self.collab.uri.scheme(value).as_deref() {
            None | Some("") => {
                self.error(ids::CODE_NO_URI, format!("Field '{key}' value must be a URI."));
            }
            Some("http") => {
                self.error(ids::CODE_NO_HTTPS, "Web URI must begin with 'https://'.");
            }
            Some(_) => {}
        }
    }

    /// One `invalid_lang` per invalid tag.
    fn check_languages(&mut self, value: &str) {
        let invalid: Vec<&str> = value
            .split(',')
            .map(str::trim)
            .filter(|tag| !self.collab.languages.is_valid(tag))
            .collect();

        for tag in invalid {
            self.error(
                ids::CODE_INVALID_LANG,
                format!(
                    "Value in 'Preferred-Languages' field must match one or more language tags \
                     as defined in RFC5646, separated by commas. '{tag}' is not a valid tag."
                ),
            );
        }
    }
}
