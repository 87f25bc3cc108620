use time::format_description::well_known::{Rfc2822, Rfc3339};
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

/// Result of a general date parse; the zone-less form cannot be compared with "now".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParsedDateTime {
    Zoned(OffsetDateTime),
    Naive(PrimitiveDateTime),
}

impl ParsedDateTime {
    pub fn zoned(self) -> Option<OffsetDateTime> {
        match self {
            ParsedDateTime::Zoned(dt) => Some(dt),
            ParsedDateTime::Naive(_) => None,
        }
    }
}

pub trait DateParser: Send + Sync {
    /// Parse a calendar date/time. Deliberately more permissive than RFC 3339.
    fn parse(&self, value: &str) -> Option<ParsedDateTime>;
}

/// General-purpose parsing on top of `time`: RFC 3339 (space separator and lower-case
/// `t`/`z` tolerated), RFC 2822, zone-less date-time, and bare dates.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeDateParser;

impl DateParser for TimeDateParser {
    fn parse(&self, value: &str) -> Option<ParsedDateTime> {
        let value = value.trim();
        let normalized = normalize_separator(value);

        if let Ok(dt) = OffsetDateTime::parse(&normalized, &Rfc3339) {
            return Some(ParsedDateTime::Zoned(dt));
        }
        if let Ok(dt) = OffsetDateTime::parse(value, &Rfc2822) {
            return Some(ParsedDateTime::Zoned(dt));
        }
        if let Ok(dt) = PrimitiveDateTime::parse(
            &normalized,
            format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
        ) {
            return Some(ParsedDateTime::Naive(dt));
        }
        if let Ok(date) = Date::parse(value, format_description!("[year]-[month]-[day]")) {
            return Some(ParsedDateTime::Naive(date.midnight()));
        }
        None
    }
}

/// `2030-01-01 10:00:00z` -> `2030-01-01T10:00:00Z`.
fn normalize_separator(value: &str) -> String {
    let mut out: String = value
        .chars()
        .map(|c| match c {
            't' => 'T',
            'z' => 'Z',
            other => other,
        })
        .collect();
    if out.as_bytes().get(10) == Some(&b' ') {
        out.replace_range(10..11, "T");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn parses_rfc3339_variants() {
        let expected = datetime!(2030-01-02 03:04:05 UTC);
        for input in [
            "2030-01-02T03:04:05Z",
            "2030-01-02 03:04:05Z",
            "2030-01-02t03:04:05z",
            "2030-01-02T04:04:05+01:00",
        ] {
            let parsed = TimeDateParser.parse(input).and_then(ParsedDateTime::zoned);
            assert_eq!(parsed, Some(expected), "{input}");
        }
    }

    #[test]
    fn keeps_fractional_seconds() {
        let parsed = TimeDateParser
            .parse("2030-01-02T03:04:05.250Z")
            .and_then(ParsedDateTime::zoned);
        assert_eq!(parsed, Some(datetime!(2030-01-02 03:04:05.25 UTC)));
    }

    #[test]
    fn accepts_looser_forms_without_zone() {
        assert!(matches!(
            TimeDateParser.parse("2030-01-02"),
            Some(ParsedDateTime::Naive(_))
        ));
        assert!(matches!(
            TimeDateParser.parse("2030-01-02 03:04:05"),
            Some(ParsedDateTime::Naive(_))
        ));
    }

    #[test]
    fn accepts_rfc2822() {
        let parsed = TimeDateParser.parse("Wed, 02 Jan 2030 03:04:05 +0000");
        assert_eq!(
            parsed.and_then(ParsedDateTime::zoned),
            Some(datetime!(2030-01-02 03:04:05 UTC))
        );
    }

    #[test]
    fn rejects_garbage_and_impossible_dates() {
        assert_eq!(TimeDateParser.parse("soon"), None);
        assert_eq!(TimeDateParser.parse("2030-13-45T00:00:00Z"), None);
        assert_eq!(TimeDateParser.parse(""), None);
    }
}
