//! Narrow interfaces for the capabilities the engine delegates.
//!
//! The engine never parses URIs, dates or language tags itself and never reads the clock
//! directly; tests swap any of these for deterministic fakes.

mod armor;
mod clock;
mod date;
mod language;
mod uri;

pub use armor::{ArmorChecker, ArmorError, CleartextArmor, crc24};
pub use clock::{Clock, FixedClock, SystemClock};
pub use date::{DateParser, ParsedDateTime, TimeDateParser};
pub use language::{LanguageTagValidator, Rfc5646Tags};
pub use uri::{StandardUri, UriParser};

/// The set of delegated capabilities one validation run uses.
pub struct Collaborators {
    pub uri: Box<dyn UriParser>,
    pub languages: Box<dyn LanguageTagValidator>,
    pub dates: Box<dyn DateParser>,
    pub armor: Box<dyn ArmorChecker>,
    pub clock: Box<dyn Clock>,
}

impl Default for Collaborators {
    fn default() -> Self {
        Self {
            uri: Box::new(StandardUri),
            languages: Box::new(Rfc5646Tags),
            dates: Box::new(TimeDateParser),
            armor: Box::new(CleartextArmor),
            clock: Box::new(SystemClock),
        }
    }
}

impl Collaborators {
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_languages(mut self, languages: impl LanguageTagValidator + 'static) -> Self {
        self.languages = Box::new(languages);
        self
    }

    pub fn with_armor(mut self, armor: impl ArmorChecker + 'static) -> Self {
        self.armor = Box::new(armor);
        self
    }
}

impl std::fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collaborators").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    struct UnreadableClock;

    impl Clock for UnreadableClock {
        fn now_utc(&self) -> OffsetDateTime {
            panic!("clock read while formatting");
        }
    }

    #[test]
    fn debug_output_does_not_read_the_clock() {
        let collab = Collaborators::default().with_clock(UnreadableClock);
        assert_eq!(format!("{collab:?}"), "Collaborators { .. }");
    }
}
