use crate::capabilities::Collaborators;
use crate::checks;
use crate::diagnostics::Diagnostics;
use crate::model::{EnvelopeState, FieldValues, ScannedDocument};
use sectxt_types::{Diagnostic, LineRecord, ids};
use time::OffsetDateTime;
use tracing::debug;

/// Caller-supplied knobs for one validation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// URLs the document was fetched from, in redirect order. Empty for local input.
    pub urls: Vec<String>,
    /// Emit `unknown_field` notifications for fields RFC 9116 does not define.
    pub notify_unknown_fields: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            urls: Vec::new(),
            notify_unknown_fields: true,
        }
    }
}

impl ParseOptions {
    pub fn with_urls<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.urls = urls.into_iter().map(Into::into).collect();
        self
    }

    pub fn notify_unknown_fields(mut self, enabled: bool) -> Self {
        self.notify_unknown_fields = enabled;
        self
    }
}

/// Line-by-line scan state. Lives for exactly one pass over one document.
pub(crate) struct Scanner<'a> {
    pub(crate) content: &'a str,
    pub(crate) options: &'a ParseOptions,
    pub(crate) collab: &'a Collaborators,
    pub(crate) envelope: EnvelopeState,
    pub(crate) values: FieldValues,
    pub(crate) diagnostics: Diagnostics,
    pub(crate) expires: Option<OffsetDateTime>,
    /// 1-based number of the line being classified.
    pub(crate) line_no: u32,
}

impl<'a> Scanner<'a> {
    fn new(content: &'a str, options: &'a ParseOptions, collab: &'a Collaborators) -> Self {
        Self {
            content,
            options,
            collab,
            envelope: EnvelopeState::default(),
            values: FieldValues::default(),
            diagnostics: Diagnostics::new(),
            expires: None,
            line_no: 0,
        }
    }

    fn run(mut self) -> (ScannedDocument, Diagnostics, Option<OffsetDateTime>) {
        // `split` keeps the trailing empty element after a final line break.
        let mut lines = Vec::new();
        for raw in self.content.split('\n') {
            self.line_no += 1;
            lines.push(self.classify(raw));
        }

        let document = ScannedDocument {
            lines,
            values: self.values,
            envelope: self.envelope,
            urls: self.options.urls.clone(),
        };
        (document, self.diagnostics, self.expires)
    }

    pub(crate) fn error(&mut self, code: &str, message: impl Into<String>) {
        self.diagnostics.error(code, message, Some(self.line_no));
    }

    pub(crate) fn recommend(&mut self, code: &str, message: impl Into<String>) {
        self.diagnostics.recommend(code, message, Some(self.line_no));
    }

    pub(crate) fn notify(&mut self, code: &str, message: impl Into<String>) {
        self.diagnostics.notify(code, message, Some(self.line_no));
    }
}

/// A completed validation of one security.txt document.
///
/// Construction performs the whole pass: every line is classified in order, then the
/// cross-field checks run once. The result is read-only.
#[derive(Clone, Debug)]
pub struct Parser {
    document: ScannedDocument,
    diagnostics: Diagnostics,
    expires: Option<OffsetDateTime>,
}

impl Parser {
    /// Validate with the default capabilities and the system clock.
    pub fn new(content: &str, options: ParseOptions) -> Self {
        Self::with_collaborators(content, options, &Collaborators::default())
    }

    pub fn with_collaborators(
        content: &str,
        options: ParseOptions,
        collab: &Collaborators,
    ) -> Self {
        let (document, mut diagnostics, expires) = Scanner::new(content, &options, collab).run();

        checks::run_all(&document, &mut diagnostics);

        debug!(
            lines = document.lines.len(),
            fields = document.values.occurrences(),
            signed = document.envelope.signed,
            errors = diagnostics.errors().len(),
            recommendations = diagnostics.recommendations().len(),
            notifications = diagnostics.notifications().len(),
            "security.txt validated"
        );

        Self {
            document,
            diagnostics,
            expires,
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.diagnostics.has_errors()
    }

    pub fn errors(&self) -> &[Diagnostic] {
        self.diagnostics.errors()
    }

    pub fn recommendations(&self) -> &[Diagnostic] {
        self.diagnostics.recommendations()
    }

    pub fn notifications(&self) -> &[Diagnostic] {
        self.diagnostics.notifications()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn lines(&self) -> &[LineRecord] {
        &self.document.lines
    }

    pub fn values(&self) -> &FieldValues {
        &self.document.values
    }

    pub fn envelope(&self) -> EnvelopeState {
        self.document.envelope
    }

    pub fn is_signed(&self) -> bool {
        self.document.envelope.signed
    }

    /// The validated `Expires` timestamp, if it passed the format checks.
    pub fn expires(&self) -> Option<OffsetDateTime> {
        self.expires
    }

    /// Tags of the first `Preferred-Languages` field, trimmed.
    pub fn preferred_languages(&self) -> Option<Vec<String>> {
        self.document
            .values
            .get(ids::FIELD_PREFERRED_LANGUAGES)
            .first()
            .map(|v| v.split(',').map(|t| t.trim().to_string()).collect())
    }

    /// First contact that is an e-mail address: a `mailto:` URI or a bare `user@host` value.
    pub fn contact_email(&self) -> Option<&str> {
        self.document
            .values
            .get(ids::FIELD_CONTACT)
            .iter()
            .find_map(|value| {
                if let Some(addr) = value.strip_prefix("mailto:") {
                    return Some(addr);
                }
                (!value.contains(':') && value.contains('@')).then_some(value.as_str())
            })
    }

    pub fn urls(&self) -> &[String] {
        &self.document.urls
    }

    /// Last of the fetch URLs, i.e. where the document was finally served from.
    pub fn resolved_url(&self) -> Option<&str> {
        self.document.urls.last().map(String::as_str)
    }
}
