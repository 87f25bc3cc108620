use crate::parser::Scanner;
use regex::Regex;
use sectxt_types::ids;
use std::sync::LazyLock;
use time::{Duration, Month, OffsetDateTime};

const INVALID_EXPIRY: &str =
    "Date and time in 'Expires' field must be formatted according to ISO 8601.";

impl Scanner<'_> {
    /// Format checks first; the comparison with "now" only runs on a strictly formatted value.
    pub(crate) fn check_expires(&mut self, value: &str) {
        let Some(parsed) = self.collab.dates.parse(value) else {
            self.error(ids::CODE_INVALID_EXPIRY, INVALID_EXPIRY);
            return;
        };

        if !is_strict_iso8601(value) {
            self.error(ids::CODE_INVALID_EXPIRY, INVALID_EXPIRY);
            return;
        }

        let Some(expires) = parsed.zoned() else {
            self.error(ids::CODE_INVALID_EXPIRY, INVALID_EXPIRY);
            return;
        };
        self.expires.get_or_insert(expires);

        let now = self.collab.clock.now_utc();
        if expires > one_year_after(now) {
            self.recommend(
                ids::CODE_LONG_EXPIRY,
                "Date and time in 'Expires' field should be less than a year into the future.",
            );
        } else if expires < now {
            self.error(
                ids::CODE_EXPIRED,
                "Date and time in 'Expires' field must not be in the past.",
            );
        }
    }
}

/// Same wall-clock instant one calendar year later. Feb 29 maps to Feb 28.
pub(crate) fn one_year_after(now: OffsetDateTime) -> OffsetDateTime {
    let year = now.year() + 1;
    let shifted = if now.month() == Month::February && now.day() == 29 {
        now.replace_day(28).and_then(|d| d.replace_year(year))
    } else {
        now.replace_year(year)
    };
    shifted.unwrap_or_else(|_| now + Duration::days(365))
}

/// `YYYY-MM-DD(T| )hh:mm:ss[.fraction](Z|±hh:mm)`, ASCII digits only, `T`/`Z` in either case.
static STRICT_ISO8601: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[0-9]{4}-[0-9]{2}-[0-9]{2}[Tt ][0-9]{2}:[0-9]{2}:[0-9]{2}(?:\.[0-9]+)?(?:[Zz]|[-+][0-9]{2}:[0-9]{2})$",
    )
    .expect("invalid strict ISO 8601 pattern")
});

pub(crate) fn is_strict_iso8601(value: &str) -> bool {
    STRICT_ISO8601.is_match(value)
}
