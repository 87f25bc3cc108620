use crate::{RenderableReport, RenderableSeverity, RenderableVerdictStatus};

const SECTIONS: [(RenderableSeverity, &str); 3] = [
    (RenderableSeverity::Error, "Errors"),
    (RenderableSeverity::Recommendation, "Recommendations"),
    (RenderableSeverity::Notification, "Notifications"),
];

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# security.txt report\n\n");
    let verdict = match report.verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Warn => "WARN",
        RenderableVerdictStatus::Fail => "FAIL",
    };
    out.push_str(&format!("- Target: `{}`\n", report.target));
    out.push_str(&format!("- Verdict: **{verdict}**\n"));
    out.push_str(&format!(
        "- Errors: {} / Recommendations: {} / Notifications: {}\n",
        report.count(RenderableSeverity::Error),
        report.count(RenderableSeverity::Recommendation),
        report.count(RenderableSeverity::Notification),
    ));
    out.push_str(&format!(
        "- Signed: {}\n",
        if report.data.signed { "yes" } else { "no" }
    ));
    if let Some(url) = &report.data.resolved_url {
        out.push_str(&format!("- Resolved URL: {url}\n"));
    }
    if let Some(expires) = &report.data.expires {
        out.push_str(&format!("- Expires: {expires}\n"));
    }

    if report.diagnostics.is_empty() {
        out.push_str("\nNo diagnostics.\n");
        return out;
    }

    for (severity, title) in SECTIONS {
        let mut items = report
            .diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .peekable();
        if items.peek().is_none() {
            continue;
        }

        out.push_str(&format!("\n## {title}\n\n"));
        for d in items {
            match d.line {
                Some(line) => out.push_str(&format!(
                    "- `{}` (line {}): {}\n",
                    d.code, line, d.message
                )),
                None => out.push_str(&format!("- `{}`: {}\n", d.code, d.message)),
            }
        }
    }

    out
}
