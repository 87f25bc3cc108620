use anyhow::Context;
use sectxt_render::{
    RenderableData, RenderableDiagnostic, RenderableReport, RenderableSeverity,
    RenderableVerdictStatus,
};
use sectxt_types::{
    Diagnostic, ReportData, SCHEMA_REPORT_V1, SectxtReport, Severity, SourceMeta, Verdict, ids,
};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::check::tool_meta;

pub fn parse_report_json(text: &str) -> anyhow::Result<SectxtReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse sectxt report")
}

pub fn serialize_report(report: &SectxtReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn to_renderable(report: &SectxtReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdictStatus::Pass,
            Verdict::Warn => RenderableVerdictStatus::Warn,
            Verdict::Fail => RenderableVerdictStatus::Fail,
        },
        target: report.source.target.clone(),
        diagnostics: report
            .diagnostics()
            .map(|(severity, d)| renderable_diagnostic(severity, d))
            .collect(),
        data: RenderableData {
            signed: report.data.signed,
            resolved_url: report.source.resolved_url.clone(),
            expires: report.data.expires.and_then(|t| t.format(&Rfc3339).ok()),
        },
    }
}

fn renderable_diagnostic(severity: Severity, d: &Diagnostic) -> RenderableDiagnostic {
    RenderableDiagnostic {
        severity: match severity {
            Severity::Error => RenderableSeverity::Error,
            Severity::Recommendation => RenderableSeverity::Recommendation,
            Severity::Notification => RenderableSeverity::Notification,
        },
        code: d.code.clone(),
        message: d.message.clone(),
        line: d.line,
    }
}

/// A failing report carrying a single `runtime_error`, for when the tool itself broke.
pub fn runtime_error_report(target: &str, message: &str) -> SectxtReport {
    let now = OffsetDateTime::now_utc();
    SectxtReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at: now,
        finished_at: now,
        verdict: Verdict::Fail,
        source: SourceMeta {
            target: target.to_string(),
            ..SourceMeta::default()
        },
        errors: vec![Diagnostic::new(ids::CODE_RUNTIME_ERROR, message, None)],
        recommendations: Vec::new(),
        notifications: Vec::new(),
        lines: Vec::new(),
        data: ReportData {
            profile: "unknown".to_string(),
            ..ReportData::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn sample() -> SectxtReport {
        let mut report = runtime_error_report("example.com", "boom");
        report.verdict = Verdict::Warn;
        report.errors.clear();
        report
            .recommendations
            .push(Diagnostic::new(ids::CODE_NOT_SIGNED, "sign it", None));
        report
            .notifications
            .push(Diagnostic::new(ids::CODE_UNKNOWN_FIELD, "custom", Some(4)));
        report.data.expires = Some(datetime!(2030-01-01 00:00 UTC));
        report.source.resolved_url =
            Some("https://example.com/.well-known/security.txt".to_string());
        report
    }

    #[test]
    fn serialized_report_parses_back() {
        let report = sample();
        let bytes = serialize_report(&report).expect("serialize");
        let text = String::from_utf8(bytes).expect("utf8");
        assert!(text.contains("\"schema\": \"sectxt.report.v1\""));

        let parsed = parse_report_json(&text).expect("parse");
        assert_eq!(parsed, report);
    }

    #[test]
    fn foreign_schema_is_rejected() {
        let err = parse_report_json(r#"{"schema":"other.report.v1"}"#).expect_err("schema");
        assert!(err.to_string().contains("unknown report schema"));
        assert!(parse_report_json("not json").is_err());
    }

    #[test]
    fn renderable_keeps_severity_order_and_formats_expiry() {
        let r = to_renderable(&sample());
        assert_eq!(r.verdict, RenderableVerdictStatus::Warn);
        assert_eq!(r.target, "example.com");
        let severities: Vec<_> = r.diagnostics.iter().map(|d| d.severity).collect();
        assert_eq!(
            severities,
            vec![
                RenderableSeverity::Recommendation,
                RenderableSeverity::Notification
            ]
        );
        assert_eq!(r.diagnostics[1].line, Some(4));
        assert_eq!(r.data.expires.as_deref(), Some("2030-01-01T00:00:00Z"));
        assert_eq!(
            r.data.resolved_url.as_deref(),
            Some("https://example.com/.well-known/security.txt")
        );
    }

    #[test]
    fn runtime_error_report_fails() {
        let report = runtime_error_report("example.com", "network down");
        assert_eq!(report.verdict, Verdict::Fail);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].code, ids::CODE_RUNTIME_ERROR);
        assert_eq!(report.errors[0].message, "network down");
        assert!(!report.is_valid());
    }
}
