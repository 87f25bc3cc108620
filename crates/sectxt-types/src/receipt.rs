use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for sectxt reports.
pub const SCHEMA_REPORT_V1: &str = "sectxt.report.v1";

/// Severity is intentionally small: errors break conformance, the rest are advisory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Recommendation,
    Notification,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Recommendation => "recommendation",
            Severity::Notification => "notification",
        }
    }
}

/// A single classified finding.
///
/// `line` is 1-based; `None` marks a document-level finding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Diagnostic {
    pub code: String,
    pub message: String,
    pub line: Option<u32>,
}

impl Diagnostic {
    pub fn new(code: &str, message: impl Into<String>, line: Option<u32>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            line,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Comment,
    Empty,
    Field,
    PgpEnvelope,
    Error,
}

/// Classification of one input line. One record per line, in document order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LineRecord {
    pub kind: LineKind,
    /// Lower-cased field name; only set for `LineKind::Field`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
    pub value: String,
}

impl LineRecord {
    pub fn new(kind: LineKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            field_name: None,
            value: value.into(),
        }
    }

    pub fn field(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Field,
            field_name: Some(name.into()),
            value: value.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Where the validated document came from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SourceMeta {
    /// The file path or host the user asked for.
    pub target: String,
    /// URLs the document was fetched from (first request, then final location after redirects).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub urls: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_url: Option<String>,
}

/// sectxt-specific summary payload for the report.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportData {
    pub profile: String,
    pub lines_scanned: u32,
    pub fields_recognized: u32,
    pub signed: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_languages: Option<Vec<String>>,

    #[schemars(with = "Option<String>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(with = "time::serde::rfc3339::option")]
    pub expires: Option<OffsetDateTime>,
}

/// The emitted report.
///
/// Diagnostic lists keep the engine's discovery order; renderers must not re-sort them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SectxtReport {
    /// Versioned schema identifier for the report shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    pub source: SourceMeta,
    pub errors: Vec<Diagnostic>,
    pub recommendations: Vec<Diagnostic>,
    pub notifications: Vec<Diagnostic>,
    #[serde(default)]
    pub lines: Vec<LineRecord>,
    pub data: ReportData,
}

impl SectxtReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// All diagnostics tagged with their severity, errors first, each list in insertion order.
    pub fn diagnostics(&self) -> impl Iterator<Item = (Severity, &Diagnostic)> {
        self.errors
            .iter()
            .map(|d| (Severity::Error, d))
            .chain(
                self.recommendations
                    .iter()
                    .map(|d| (Severity::Recommendation, d)),
            )
            .chain(self.notifications.iter().map(|d| (Severity::Notification, d)))
    }
}
