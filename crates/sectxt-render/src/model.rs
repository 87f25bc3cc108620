#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableSeverity {
    Error,
    Recommendation,
    Notification,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdictStatus {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableDiagnostic {
    pub severity: RenderableSeverity,
    pub code: String,
    pub message: String,
    pub line: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderableData {
    pub signed: bool,
    pub resolved_url: Option<String>,
    /// Already formatted (RFC 3339).
    pub expires: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub verdict: RenderableVerdictStatus,
    /// File path or host that was checked.
    pub target: String,
    /// Errors, then recommendations, then notifications; each in discovery order.
    pub diagnostics: Vec<RenderableDiagnostic>,
    pub data: RenderableData,
}

impl RenderableReport {
    pub fn count(&self, severity: RenderableSeverity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}
