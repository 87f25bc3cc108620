use sectxt_types::{Diagnostic, Severity};

/// Append-only diagnostic log, one list per severity.
///
/// Insertion order is discovery order. Nothing is sorted or deduplicated here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Diagnostics {
    errors: Vec<Diagnostic>,
    recommendations: Vec<Diagnostic>,
    notifications: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, severity: Severity, diagnostic: Diagnostic) {
        match severity {
            Severity::Error => self.errors.push(diagnostic),
            Severity::Recommendation => self.recommendations.push(diagnostic),
            Severity::Notification => self.notifications.push(diagnostic),
        }
    }

    pub fn error(&mut self, code: &str, message: impl Into<String>, line: Option<u32>) {
        self.push(Severity::Error, Diagnostic::new(code, message, line));
    }

    pub fn recommend(&mut self, code: &str, message: impl Into<String>, line: Option<u32>) {
        self.push(Severity::Recommendation, Diagnostic::new(code, message, line));
    }

    pub fn notify(&mut self, code: &str, message: impl Into<String>, line: Option<u32>) {
        self.push(Severity::Notification, Diagnostic::new(code, message, line));
    }

    /// Append every list of `other` after the matching list of `self`.
    pub fn extend(&mut self, other: &Diagnostics) {
        self.errors.extend(other.errors.iter().cloned());
        self.recommendations
            .extend(other.recommendations.iter().cloned());
        self.notifications
            .extend(other.notifications.iter().cloned());
    }

    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    pub fn recommendations(&self) -> &[Diagnostic] {
        &self.recommendations
    }

    pub fn notifications(&self) -> &[Diagnostic] {
        &self.notifications
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.recommendations.is_empty() && self.notifications.is_empty()
    }

    pub fn into_parts(self) -> (Vec<Diagnostic>, Vec<Diagnostic>, Vec<Diagnostic>) {
        (self.errors, self.recommendations, self.notifications)
    }

    /// Codes of one severity, in insertion order. Mostly useful in tests.
    pub fn codes(&self, severity: Severity) -> Vec<&str> {
        let list = match severity {
            Severity::Error => &self.errors,
            Severity::Recommendation => &self.recommendations,
            Severity::Notification => &self.notifications,
        };
        list.iter().map(|d| d.code.as_str()).collect()
    }
}
